//! Chart.js configurations for the dashboard.
//!
//! Datasets are fixed sample figures; the charts are not bound to live data.

use serde_json::{json, Value};

const TEXT_COLOR: &str = "#f8f9fa";
const GRID_COLOR: &str = "rgba(255, 255, 255, 0.1)";

/// A chart to construct on a canvas with the given element id.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub anchor_id: &'static str,
    pub config: Value,
    /// Render y-axis ticks as currency.
    pub currency_ticks: bool,
}

fn axes() -> Value {
    json!({
        "y": {
            "beginAtZero": true,
            "grid": { "color": GRID_COLOR },
            "ticks": { "color": TEXT_COLOR }
        },
        "x": {
            "grid": { "color": GRID_COLOR },
            "ticks": { "color": TEXT_COLOR }
        }
    })
}

pub fn revenue_trend() -> ChartSpec {
    ChartSpec {
        anchor_id: "revenueChart",
        currency_ticks: true,
        config: json!({
            "type": "line",
            "data": {
                "labels": ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
                "datasets": [{
                    "label": "Monthly Revenue (R)",
                    "data": [12000, 19000, 15000, 25000, 22000, 30000],
                    "borderColor": "#00d4ff",
                    "backgroundColor": "rgba(0, 212, 255, 0.1)",
                    "tension": 0.4,
                    "fill": true
                }]
            },
            "options": {
                "responsive": true,
                "plugins": { "legend": { "labels": { "color": TEXT_COLOR } } },
                "scales": axes()
            }
        }),
    }
}

pub fn service_distribution() -> ChartSpec {
    ChartSpec {
        anchor_id: "serviceDistributionChart",
        currency_ticks: false,
        config: json!({
            "type": "doughnut",
            "data": {
                "labels": ["Suspension", "Engine", "Brakes", "Diagnosis", "Other"],
                "datasets": [{
                    "data": [30, 25, 20, 15, 10],
                    "backgroundColor": ["#00d4ff", "#ff6b35", "#28a745", "#ffc107", "#6c757d"],
                    "borderWidth": 2,
                    "borderColor": "#1a1a1a"
                }]
            },
            "options": {
                "responsive": true,
                "plugins": {
                    "legend": {
                        "position": "bottom",
                        "labels": { "color": TEXT_COLOR, "padding": 20 }
                    }
                }
            }
        }),
    }
}

pub fn job_status() -> ChartSpec {
    ChartSpec {
        anchor_id: "jobStatusChart",
        currency_ticks: false,
        config: json!({
            "type": "bar",
            "data": {
                "labels": ["In Progress", "Completed", "Quoted"],
                "datasets": [{
                    "label": "Jobs",
                    "data": [8, 15, 5],
                    "backgroundColor": [
                        "rgba(255, 193, 7, 0.8)",
                        "rgba(40, 167, 69, 0.8)",
                        "rgba(23, 162, 184, 0.8)"
                    ],
                    "borderColor": ["#ffc107", "#28a745", "#17a2b8"],
                    "borderWidth": 1
                }]
            },
            "options": {
                "responsive": true,
                "plugins": { "legend": { "display": false } },
                "scales": axes()
            }
        }),
    }
}

/// All dashboard charts in construction order.
pub fn dashboard_charts() -> [ChartSpec; 3] {
    [revenue_trend(), service_distribution(), job_status()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_fixed_charts() {
        let charts = dashboard_charts();
        let kinds: Vec<&str> = charts.iter().map(|c| c.config["type"].as_str().unwrap()).collect();
        assert_eq!(kinds, ["line", "doughnut", "bar"]);
        let anchors: Vec<&str> = charts.iter().map(|c| c.anchor_id).collect();
        assert_eq!(anchors, ["revenueChart", "serviceDistributionChart", "jobStatusChart"]);
    }

    #[test]
    fn datasets_are_static() {
        assert_eq!(revenue_trend().config["data"]["datasets"][0]["data"][5], 30000);
        assert_eq!(job_status().config["data"]["datasets"][0]["data"], json!([8, 15, 5]));
        assert!(revenue_trend().currency_ticks);
        assert!(!service_distribution().currency_ticks);
        assert!(service_distribution().config["options"].get("scales").is_none());
    }
}
