//! Text filter for large `<select data-enhanced>` boxes.

pub const FILTER_PLACEHOLDER: &str = "Type to search...";
pub const FILTER_CLASS: &str = "form-control mb-2";

/// Whether a select with `option_count` options gets a filter box.
pub fn needs_filter(option_count: u32, threshold: u32) -> bool {
    option_count > threshold
}

/// Case-insensitive substring match of `filter` against an option label.
pub fn option_matches(label: &str, filter: &str) -> bool {
    label.to_lowercase().contains(&filter.to_lowercase())
}

/// Visibility of each label under `filter`, in order.
pub fn visibility<'a, I>(labels: I, filter: &str) -> Vec<bool>
where
    I: IntoIterator<Item = &'a str>,
{
    labels.into_iter().map(|label| option_matches(label, filter)).collect()
}
