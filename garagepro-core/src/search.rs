//! Search box model: query guard, request path and result markup.

use crate::error::{Error, Result};
use crate::markup::escape;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SEARCH_ENDPOINT: &str = "/api/search";

/// Placeholder shown while a query is in flight.
pub const LOADING_MARKUP: &str = r#"<div class="text-center">🔍 Searching...</div>"#;
pub const EMPTY_MARKUP: &str = r#"<div class="text-muted">No results found</div>"#;
pub const ERROR_MARKUP: &str = r#"<div class="alert alert-error">Search failed</div>"#;

/// Filter sent as the `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    #[default]
    All,
    Car,
    Owner,
    LicensePlate,
    OwnerName,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::All => "all",
            SearchType::Car => "car",
            SearchType::Owner => "owner",
            SearchType::LicensePlate => "license_plate",
            SearchType::OwnerName => "owner_name",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" | "all" => Ok(SearchType::All),
            "car" => Ok(SearchType::Car),
            "owner" => Ok(SearchType::Owner),
            "license_plate" => Ok(SearchType::LicensePlate),
            "owner_name" => Ok(SearchType::OwnerName),
            other => Err(Error::parse(format!("unknown search type: {other}"))),
        }
    }
}

/// What the search box should do with the current input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Too short: empty the results and send nothing.
    Clear,
    Query(SearchQuery),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub kind: SearchType,
}

impl SearchQuery {
    /// Decide whether `raw` warrants a request. Length is counted in
    /// characters after trimming.
    pub fn evaluate(raw: &str, kind: SearchType, min_chars: usize) -> SearchAction {
        let text = raw.trim();
        if text.chars().count() < min_chars {
            return SearchAction::Clear;
        }
        SearchAction::Query(SearchQuery { text: text.to_string(), kind })
    }

    /// Request path including the encoded query string.
    pub fn path(&self) -> String {
        format!(
            "{SEARCH_ENDPOINT}?q={}&type={}",
            urlencoding::encode(&self.text),
            self.kind
        )
    }
}

/// One row of `/api/search` output, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchResult {
    Car {
        id: serde_json::Value,
        #[serde(default)]
        license_plate: Option<String>,
        #[serde(default)]
        make: Option<String>,
        #[serde(default)]
        model: Option<String>,
        #[serde(default)]
        owner_name: Option<String>,
    },
    Owner {
        id: serde_json::Value,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        phone: Option<String>,
        #[serde(default)]
        balance: Option<serde_json::Value>,
    },
    #[serde(other)]
    Unknown,
}

fn id_text(id: &serde_json::Value) -> String {
    match id {
        serde_json::Value::String(s) => urlencoding::encode(s).into_owned(),
        other => other.to_string(),
    }
}

fn opt(v: &Option<String>) -> String {
    escape(v.as_deref().unwrap_or(""))
}

fn balance_text(v: &Option<serde_json::Value>) -> String {
    match v {
        Some(serde_json::Value::String(s)) => escape(s),
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => escape(&other.to_string()),
    }
}

impl SearchResult {
    /// Markup for this row, or `None` for result types the page does not show.
    pub fn to_markup(&self) -> Option<String> {
        match self {
            SearchResult::Car { id, license_plate, make, model, owner_name } => Some(format!(
                r#"<div class="search-result-item"><div class="d-flex justify-between align-center"><div><strong>🚗 {}</strong><div>{} {} • {}</div></div><a href="/cars/{}" class="btn btn-sm btn-primary">View</a></div></div>"#,
                opt(license_plate),
                opt(make),
                opt(model),
                opt(owner_name),
                id_text(id),
            )),
            SearchResult::Owner { id, name, phone, balance } => Some(format!(
                r#"<div class="search-result-item"><div class="d-flex justify-between align-center"><div><strong>👤 {}</strong><div>{} • Balance: R {}</div></div><a href="/car_owners/{}" class="btn btn-sm btn-primary">View</a></div></div>"#,
                opt(name),
                opt(phone),
                balance_text(balance),
                id_text(id),
            )),
            SearchResult::Unknown => None,
        }
    }
}

/// Markup for the whole results container.
pub fn render_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return EMPTY_MARKUP.to_string();
    }
    results.iter().filter_map(SearchResult::to_markup).collect()
}

/// Decode a response body; anything other than a JSON array is an error.
pub fn parse_results(body: &str) -> Result<Vec<SearchResult>> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_clears() {
        assert_eq!(SearchQuery::evaluate(" a ", SearchType::All, 2), SearchAction::Clear);
        assert_eq!(SearchQuery::evaluate("", SearchType::Car, 2), SearchAction::Clear);
        assert!(matches!(SearchQuery::evaluate("ab", SearchType::All, 2), SearchAction::Query(_)));
    }

    #[test]
    fn path_encodes_query() {
        let SearchAction::Query(q) = SearchQuery::evaluate(" CA 12&3 ", SearchType::Owner, 2) else {
            panic!("expected query");
        };
        assert_eq!(q.path(), "/api/search?q=CA%2012%263&type=owner");
    }

    #[test]
    fn search_type_parsing() {
        assert_eq!("".parse::<SearchType>().unwrap(), SearchType::All);
        assert_eq!("license_plate".parse::<SearchType>().unwrap(), SearchType::LicensePlate);
        assert!("boat".parse::<SearchType>().is_err());
    }

    #[test]
    fn renders_by_type_and_escapes() {
        let body = r#"[
            {"type":"car","id":7,"license_plate":"<CA 1>","make":"VW","model":"Polo","owner_name":"Ann"},
            {"type":"owner","id":3,"name":"Bob & Sons","phone":"082","balance":120.5},
            {"type":"invoice","id":9}
        ]"#;
        let results = parse_results(body).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[2], SearchResult::Unknown);
        let html = render_results(&results);
        assert!(html.contains("🚗 &lt;CA 1&gt;"));
        assert!(html.contains(r#"href="/cars/7""#));
        assert!(html.contains("Bob &amp; Sons"));
        assert!(html.contains("Balance: R 120.5"));
        assert!(html.contains(r#"href="/car_owners/3""#));
        assert_eq!(html.matches("search-result-item").count(), 2);
    }

    #[test]
    fn empty_results_show_placeholder() {
        assert_eq!(render_results(&[]), EMPTY_MARKUP);
    }

    #[test]
    fn non_array_body_is_error() {
        assert!(parse_results(r#"{"error":"nope"}"#).is_err());
        assert!(parse_results("<html>").is_err());
    }
}
