//! Currency formatting for amount inputs, cost totals and dashboard figures.
//!
//! Formatted amounts look like `R 1,234.50`: a prefix, an optional sign, the
//! integer part grouped by thousands and exactly two decimals. Unformatting
//! keeps digits, `.` and a leading `-`, so for any amount with at most two
//! fractional digits `parse(unformat(format(x))) == x`.

/// Prefix and grouping used when rendering amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    prefix: String,
    group_separator: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new("R ", ",")
    }
}

impl CurrencyFormat {
    pub fn new(prefix: &str, group_separator: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            group_separator: group_separator.to_string(),
        }
    }

    /// Render `amount` with two decimals and thousands grouping.
    pub fn format(&self, amount: f64) -> String {
        self.render(amount, 2)
    }

    /// Render `amount` rounded to whole units, as used on chart axes.
    pub fn format_whole(&self, amount: f64) -> String {
        self.render(amount, 0)
    }

    fn render(&self, amount: f64, decimals: usize) -> String {
        // Non-finite amounts render as zero.
        let amount = if amount.is_finite() { amount } else { 0.0 };
        let fixed = format!("{:.*}", decimals, amount.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };
        let negative = amount.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');

        let mut out = String::with_capacity(self.prefix.len() + fixed.len() + int_part.len() / 3 + 1);
        out.push_str(&self.prefix);
        if negative {
            out.push('-');
        }
        let len = int_part.len();
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push_str(&self.group_separator);
            }
            out.push(ch);
        }
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        out
    }

    /// Reformat the raw value of an amount input. `None` when the value does
    /// not start with a number, in which case the input is left alone.
    pub fn format_input(&self, raw: &str) -> Option<String> {
        parse_amount(raw).map(|v| self.format(v))
    }
}

/// Strip everything but digits and `.` (plus a sign ahead of the first digit)
/// to expose the editable number behind a formatted amount.
pub fn unformat(formatted: &str) -> String {
    let mut out = String::with_capacity(formatted.len());
    for ch in formatted.chars() {
        match ch {
            '0'..='9' | '.' => out.push(ch),
            '-' if out.is_empty() => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Parse the longest numeric prefix of `raw`, ignoring leading whitespace.
/// `"12abc"` parses as 12; `"abc"`, `""` and non-finite values yield `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Sum raw input values, counting anything unparseable as zero.
pub fn sum_amounts<'a, I>(values: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().map(|v| parse_amount(v).unwrap_or(0.0)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_grouping_and_two_decimals() {
        let f = CurrencyFormat::default();
        assert_eq!(f.format(0.0), "R 0.00");
        assert_eq!(f.format(5.5), "R 5.50");
        assert_eq!(f.format(999.999), "R 1,000.00");
        assert_eq!(f.format(1234567.891), "R 1,234,567.89");
        assert_eq!(f.format(-1234.5), "R -1,234.50");
        assert_eq!(f.format(-0.001), "R 0.00");
        assert_eq!(f.format(f64::NAN), "R 0.00");
    }

    #[test]
    fn whole_units_for_axes() {
        let f = CurrencyFormat::default();
        assert_eq!(f.format_whole(30000.0), "R 30,000");
        assert_eq!(f.format_whole(-12.6), "R -13");
    }

    #[test]
    fn custom_separator() {
        let f = CurrencyFormat::new("ZAR ", " ");
        assert_eq!(f.format(12345.0), "ZAR 12 345.00");
    }

    #[test]
    fn unformat_keeps_number() {
        assert_eq!(unformat("R 1,234.50"), "1234.50");
        assert_eq!(unformat("R -12.00"), "-12.00");
        assert_eq!(unformat("12-3"), "123");
        assert_eq!(unformat(""), "");
    }

    #[test]
    fn parse_amount_takes_leading_number() {
        assert_eq!(parse_amount("12abc"), Some(12.0));
        assert_eq!(parse_amount("  5.5"), Some(5.5));
        assert_eq!(parse_amount(".5"), Some(0.5));
        assert_eq!(parse_amount("3."), Some(3.0));
        assert_eq!(parse_amount("-2e2x"), Some(-200.0));
        assert_eq!(parse_amount("1e"), Some(1.0));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("1e400"), None);
    }

    #[test]
    fn cost_total_ignores_non_numeric() {
        let f = CurrencyFormat::default();
        let total = sum_amounts(["10", "abc", "5.5"]);
        assert_eq!(f.format(total), "R 15.50");
        assert_eq!(f.format(sum_amounts(Vec::<&str>::new())), "R 0.00");
    }

    #[test]
    fn format_input_leaves_garbage_alone() {
        let f = CurrencyFormat::default();
        assert_eq!(f.format_input("1500"), Some("R 1,500.00".to_string()));
        assert_eq!(f.format_input("n/a"), None);
    }
}
