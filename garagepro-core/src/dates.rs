use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Render an ISO date or timestamp as `15 Jan 2024`. Input that is not a
/// recognised date comes back unchanged.
pub fn format_date(input: &str) -> String {
    let trimmed = input.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        });
    match date {
        Some(d) => d.format("%-d %b %Y").to_string(),
        None => input.to_string(),
    }
}
