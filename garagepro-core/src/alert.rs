//! Toast notifications: kind, duration and the CSS hooks the page styles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Marker class shared by every toast; a new toast evicts all nodes carrying it.
pub const ALERT_CLASS: &str = "flash-alert";
pub const CONTAINER_CLASS: &str = "alerts-container";
/// Inline style for the lazily created container (fixed, top-right).
pub const CONTAINER_STYLE: &str = "position: fixed; top: 20px; right: 20px; z-index: 1000; max-width: 400px;";
pub const CLOSE_BUTTON_STYLE: &str = "background: none; border: none; color: inherit; cursor: pointer;";
pub const DEFAULT_DURATION_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Info => "info",
            AlertKind::Success => "success",
            AlertKind::Error => "error",
            AlertKind::Warning => "warning",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertKind {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(AlertKind::Info),
            "success" => Ok(AlertKind::Success),
            "error" => Ok(AlertKind::Error),
            "warning" => Ok(AlertKind::Warning),
            other => Err(crate::error::Error::parse(format!("unknown alert kind: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
    /// Zero keeps the alert until it is closed by hand.
    pub duration_ms: u32,
}

impl Alert {
    pub fn new(message: impl Into<String>, kind: AlertKind) -> Self {
        Self { message: message.into(), kind, duration_ms: DEFAULT_DURATION_MS }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, AlertKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, AlertKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, AlertKind::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, AlertKind::Warning)
    }

    /// Alert requested by inline page code. Unknown kinds show as info and
    /// a missing duration takes `default_duration_ms`.
    pub fn from_page(
        message: impl Into<String>,
        kind: Option<&str>,
        duration_ms: Option<u32>,
        default_duration_ms: u32,
    ) -> Self {
        let kind = match kind.map(str::parse::<AlertKind>) {
            Some(Ok(k)) => k,
            Some(Err(e)) => {
                warn!(error = %e, "showing alert as info");
                AlertKind::Info
            }
            None => AlertKind::Info,
        };
        Self::new(message, kind).with_duration(duration_ms.unwrap_or(default_duration_ms))
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn persistent(self) -> Self {
        self.with_duration(0)
    }

    /// Auto-dismiss delay, `None` for persistent alerts.
    pub fn auto_dismiss_ms(&self) -> Option<u32> {
        (self.duration_ms > 0).then_some(self.duration_ms)
    }

    pub fn class_name(&self) -> String {
        format!("alert alert-{} {ALERT_CLASS}", self.kind)
    }
}
