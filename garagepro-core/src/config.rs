use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Tunables for the browser client. Every field has a default so pages can
/// ship a partial (or no) configuration block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
	pub log_level: String,
	pub search_debounce_ms: u32,
	pub search_min_chars: usize,
	pub refresh_interval_ms: u32,
	pub alert_duration_ms: u32,
	pub print_delay_ms: u32,
	/// Selects with more options than this get a filter box.
	pub enhanced_select_threshold: u32,
	pub currency_prefix: String,
	pub currency_group_separator: String,
	pub service_worker_path: String,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			log_level: "info".into(),
			search_debounce_ms: 500,
			search_min_chars: 2,
			refresh_interval_ms: 30_000,
			alert_duration_ms: 5_000,
			print_delay_ms: 500,
			enhanced_select_threshold: 10,
			currency_prefix: "R ".into(),
			currency_group_separator: ",".into(),
			service_worker_path: "/static/sw.js".into(),
		}
	}
}

impl ClientConfig {
	pub fn from_json_str(data: &str) -> Result<Self> {
		let cfg: Self = serde_json::from_str(data)?;
		cfg.validate()?;
		Ok(cfg)
	}

	pub fn from_toml_str(data: &str) -> Result<Self> {
		let cfg: Self = toml::from_str(data)?;
		cfg.validate()?;
		Ok(cfg)
	}

	pub fn validate(&self) -> Result<()> {
		let allowed = ["trace","debug","info","warn","error"];
		if !allowed.contains(&self.log_level.as_str()) {
			return Err(Error::config(format!("invalid log_level: {}", self.log_level)));
		}
		if self.search_debounce_ms == 0 { return Err(Error::config("search_debounce_ms must be > 0")); }
		if self.search_min_chars < 2 {
			return Err(Error::config(format!("search_min_chars must be >= 2: {}", self.search_min_chars)));
		}
		if self.refresh_interval_ms == 0 { return Err(Error::config("refresh_interval_ms must be > 0")); }
		if self.enhanced_select_threshold == 0 { return Err(Error::config("enhanced_select_threshold must be > 0")); }
		// The unformat step keeps digits, '.' and '-', so a separator drawn
		// from that set would survive it and corrupt the amount.
		if self.currency_group_separator.chars().any(|c| c.is_ascii_digit() || c == '.' || c == '-') {
			return Err(Error::config(format!("invalid currency_group_separator: {:?}", self.currency_group_separator)));
		}
		if !self.service_worker_path.starts_with('/') {
			return Err(Error::config(format!("service_worker_path must be absolute: {}", self.service_worker_path)));
		}
		Ok(())
	}

	pub fn currency(&self) -> crate::currency::CurrencyFormat {
		crate::currency::CurrencyFormat::new(&self.currency_prefix, &self.currency_group_separator)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_valid() {
		let cfg = ClientConfig::default();
		assert!(cfg.validate().is_ok());
		assert_eq!(cfg.refresh_interval_ms, 30_000);
		assert_eq!(cfg.search_debounce_ms, 500);
	}

	#[test]
	fn partial_json_fills_defaults() {
		let cfg = ClientConfig::from_json_str(r#"{"log_level":"debug","unknown":1}"#).unwrap();
		assert_eq!(cfg.log_level, "debug");
		assert_eq!(cfg.search_min_chars, 2);
	}

	#[test]
	fn toml_overrides() {
		let cfg = ClientConfig::from_toml_str("refresh_interval_ms = 1000\ncurrency_prefix = \"ZAR \"\n").unwrap();
		assert_eq!(cfg.refresh_interval_ms, 1000);
		assert_eq!(cfg.currency_prefix, "ZAR ");
	}

	#[test]
	fn rejects_bad_values() {
		assert!(ClientConfig::from_json_str(r#"{"log_level":"loud"}"#).is_err());
		assert!(ClientConfig::from_json_str(r#"{"search_debounce_ms":0}"#).is_err());
		assert!(ClientConfig::from_json_str(r#"{"search_min_chars":0}"#).is_err());
		assert!(ClientConfig::from_json_str(r#"{"search_min_chars":1}"#).is_err());
		assert!(ClientConfig::from_json_str(r#"{"search_min_chars":3}"#).is_ok());
		assert!(ClientConfig::from_json_str(r#"{"currency_group_separator":"."}"#).is_err());
		assert!(ClientConfig::from_json_str(r#"{"service_worker_path":"sw.js"}"#).is_err());
		assert!(ClientConfig::from_json_str("not json").is_err());
	}
}
