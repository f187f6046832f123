use serde::{Deserialize, Serialize};

pub const TOGGLE_SUCCESS_MESSAGE: &str = "Service status updated successfully!";
pub const TOGGLE_FAILURE_MESSAGE: &str = "Failed to update service status";

/// A checkbox change waiting to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceToggleRequest {
    pub service_id: String,
    pub is_fixed: bool,
}

#[derive(Debug, Serialize)]
struct ToggleBody {
    is_fixed: bool,
}

impl ServiceToggleRequest {
    pub fn new(service_id: impl Into<String>, is_fixed: bool) -> Self {
        Self { service_id: service_id.into(), is_fixed }
    }

    pub fn path(&self) -> String {
        format!("/jobs/service/{}/toggle", urlencoding::encode(&self.service_id))
    }

    pub fn body(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&ToggleBody { is_fixed: self.is_fixed })?)
    }

    /// Class added to the `[data-service]` element on success, and the one removed.
    pub fn state_classes(&self) -> (&'static str, &'static str) {
        if self.is_fixed { ("fixed", "pending") } else { ("pending", "fixed") }
    }
}

/// Server reply. `error` is what the server sends on exceptions, `message`
/// what the page contract names; either may carry the reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ToggleResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ToggleResponse {
    pub fn failure_reason(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "Update failed".to_string())
    }
}
