//! Print-friendly wrapper for receipts and job cards.

pub const PRINT_STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; }
.receipt-container { max-width: 800px; margin: 0 auto; }
.text-center { text-align: center; }
.text-right { text-align: right; }
table { width: 100%; border-collapse: collapse; }
th, td { padding: 8px; border-bottom: 1px solid #ddd; }
th { background-color: #f8f9fa; }
.total-row { font-weight: bold; border-top: 2px solid #000; }";

/// Wrap markup taken from the current page in a standalone print document.
/// `body_markup` is the page's own rendered markup and is inserted verbatim.
pub fn print_document(body_markup: &str) -> String {
    format!(
        "<html><head><title>Print</title><style>{PRINT_STYLE}</style></head><body>{body_markup}</body></html>"
    )
}
