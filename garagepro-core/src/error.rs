use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
	#[error("serde: {0}")]
	Serde(#[from] serde_json::Error),
	#[error("toml: {0}")]
	Toml(#[from] toml::de::Error),
	#[error("config: {0}")]
	Config(String),
	#[error("parse: {0}")]
	Parse(String),
}

impl Error {
	pub fn config(msg: impl Into<String>) -> Self { Self::Config(msg.into()) }
	pub fn parse(msg: impl Into<String>) -> Self { Self::Parse(msg.into()) }
}
