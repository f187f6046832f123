use crate::currency::CurrencyFormat;
use serde::{Deserialize, Serialize};

pub const DASHBOARD_STATS_ENDPOINT: &str = "/api/dashboard_stats";

/// Payload of `/api/dashboard_stats`. The server sends more keys than these;
/// they are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_cars: f64,
    pub active_jobs: f64,
    pub total_revenue: f64,
    pub total_outstanding: f64,
}

fn count_text(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}

impl DashboardStats {
    /// `(element id, text)` pairs patched into the dashboard.
    pub fn entries(&self, currency: &CurrencyFormat) -> [(&'static str, String); 4] {
        [
            ("total-cars", count_text(self.total_cars)),
            ("active-jobs", count_text(self.active_jobs)),
            ("total-revenue", currency.format(self.total_revenue)),
            ("total-outstanding", currency.format(self.total_outstanding)),
        ]
    }
}
