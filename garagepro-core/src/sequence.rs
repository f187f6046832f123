//! Latest-wins bookkeeping for overlapping requests.
//!
//! Every outbound request takes a [`Ticket`] for its logical operation
//! (`search`, `dashboard`, `toggle:{id}`). When the response lands the caller
//! asks [`RequestSequencer::is_current`]; only the most recently issued
//! ticket for an operation may touch the page.

use std::collections::HashMap;

pub const SEARCH_OP: &str = "search";
pub const DASHBOARD_OP: &str = "dashboard";

pub fn toggle_op(service_id: &str) -> String {
    format!("toggle:{service_id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    op: String,
    seq: u64,
}

impl Ticket {
    pub fn op(&self) -> &str {
        &self.op
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    next: u64,
    latest: HashMap<String, u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for `op`, superseding any earlier one.
    pub fn issue(&mut self, op: &str) -> Ticket {
        self.next += 1;
        self.latest.insert(op.to_string(), self.next);
        Ticket { op: op.to_string(), seq: self.next }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest.get(&ticket.op) == Some(&ticket.seq)
    }

    /// Drop any outstanding ticket for `op` so in-flight responses are ignored.
    pub fn invalidate(&mut self, op: &str) {
        self.latest.remove(op);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older() {
        let mut seq = RequestSequencer::new();
        let first = seq.issue(SEARCH_OP);
        let second = seq.issue(SEARCH_OP);
        assert!(!seq.is_current(&first));
        assert!(seq.is_current(&second));
        assert!(second.seq() > first.seq());
    }

    #[test]
    fn operations_are_independent() {
        let mut seq = RequestSequencer::new();
        let search = seq.issue(SEARCH_OP);
        let a = seq.issue(&toggle_op("1"));
        let b = seq.issue(&toggle_op("2"));
        assert!(seq.is_current(&search));
        assert!(seq.is_current(&a));
        assert!(seq.is_current(&b));
        assert_eq!(a.op(), "toggle:1");
    }

    #[test]
    fn invalidate_discards_in_flight() {
        let mut seq = RequestSequencer::new();
        let t = seq.issue(SEARCH_OP);
        seq.invalidate(SEARCH_OP);
        assert!(!seq.is_current(&t));
    }
}
