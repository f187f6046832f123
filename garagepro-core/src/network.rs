use crate::alert::Alert;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
}

impl Connectivity {
    /// Toast raised on the transition, dismissed after `duration_ms`. Going
    /// offline stays up until closed.
    pub fn alert(&self, duration_ms: u32) -> Alert {
        match self {
            Connectivity::Online => Alert::success("Connection restored").with_duration(duration_ms),
            Connectivity::Offline => Alert::warning("You are currently offline").persistent(),
        }
    }
}

/// Result of replaying the deferred install prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Accepted,
    Dismissed,
    Other(String),
}

impl InstallOutcome {
    pub fn parse(outcome: &str) -> Self {
        match outcome {
            "accepted" => InstallOutcome::Accepted,
            "dismissed" => InstallOutcome::Dismissed,
            other => InstallOutcome::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::AlertKind;

    #[test]
    fn connectivity_alerts() {
        let online = Connectivity::Online.alert(7_500);
        assert_eq!(online.kind, AlertKind::Success);
        assert_eq!(online.auto_dismiss_ms(), Some(7_500));
        let offline = Connectivity::Offline.alert(7_500);
        assert_eq!(offline.kind, AlertKind::Warning);
        assert_eq!(offline.duration_ms, 0);
    }

    #[test]
    fn install_outcomes() {
        assert_eq!(InstallOutcome::parse("accepted"), InstallOutcome::Accepted);
        assert_eq!(InstallOutcome::parse("dismissed"), InstallOutcome::Dismissed);
        assert_eq!(InstallOutcome::parse(""), InstallOutcome::Other(String::new()));
    }
}
