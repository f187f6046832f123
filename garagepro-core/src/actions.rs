//! Quick-action buttons (`data-quick-action`).

/// Outcome of dispatching a quick action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickAction {
    /// Full-page navigation to a fixed path.
    Navigate(&'static str),
    /// Declared by the templates but not wired to anything yet.
    Unimplemented(&'static str),
    Unknown(String),
}

impl QuickAction {
    pub fn resolve(action: &str) -> Self {
        match action {
            "new-job" => QuickAction::Navigate("/jobs/add"),
            "new-owner" => QuickAction::Navigate("/car_owners/add"),
            "new-car" => QuickAction::Navigate("/cars/add"),
            "record-payment" => QuickAction::Navigate("/payments"),
            "generate-quote" => QuickAction::Unimplemented("generate-quote"),
            other => QuickAction::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::QuickAction;

    #[test]
    fn known_actions_navigate() {
        assert_eq!(QuickAction::resolve("new-job"), QuickAction::Navigate("/jobs/add"));
        assert_eq!(QuickAction::resolve("new-owner"), QuickAction::Navigate("/car_owners/add"));
        assert_eq!(QuickAction::resolve("new-car"), QuickAction::Navigate("/cars/add"));
        assert_eq!(QuickAction::resolve("record-payment"), QuickAction::Navigate("/payments"));
    }

    #[test]
    fn quote_and_unknown() {
        assert!(matches!(QuickAction::resolve("generate-quote"), QuickAction::Unimplemented(_)));
        assert_eq!(QuickAction::resolve("fly"), QuickAction::Unknown("fly".into()));
    }
}
