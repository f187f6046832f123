//! Browser-independent core of the GaragePro client: everything the page
//! script decides without touching the DOM.

pub mod actions;
pub mod alert;
pub mod chart;
pub mod config;
pub mod currency;
pub mod dates;
pub mod error;
pub mod filter;
pub mod markup;
pub mod network;
pub mod print;
pub mod search;
pub mod sequence;
pub mod stats;
pub mod toggle;

pub use actions::QuickAction;
pub use alert::{Alert, AlertKind};
pub use config::ClientConfig;
pub use currency::CurrencyFormat;
pub use error::{Error, Result};
pub use network::{Connectivity, InstallOutcome};
pub use search::{SearchAction, SearchQuery, SearchResult, SearchType};
pub use sequence::{RequestSequencer, Ticket};
pub use stats::DashboardStats;
pub use toggle::{ServiceToggleRequest, ToggleResponse};
