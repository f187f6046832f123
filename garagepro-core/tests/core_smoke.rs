use garagepro_core::currency::{parse_amount, sum_amounts, unformat};
use garagepro_core::{ClientConfig, CurrencyFormat, SearchAction, SearchQuery, SearchType};
use proptest::prelude::*;

prop_compose! {
    fn arb_amount_text()(cents in -10_000_000_000_000i64..10_000_000_000_000i64) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        let abs = cents.unsigned_abs();
        format!("{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

proptest! {
    #[test]
    fn currency_round_trip_prop(s in arb_amount_text()) {
        let fmt = CurrencyFormat::default();
        let value = parse_amount(&s).expect("numeric");
        let formatted = fmt.format(value);
        let back = parse_amount(&unformat(&formatted)).expect("unformatted numeric");
        prop_assert_eq!(back, value);
        // format is a fixed point through the focus/blur cycle
        prop_assert_eq!(fmt.format_input(&unformat(&formatted)), Some(formatted));
    }

    #[test]
    fn whole_numbers_round_trip_prop(n in 0u32..=u32::MAX) {
        let fmt = CurrencyFormat::new("R ", " ");
        let formatted = fmt.format(f64::from(n));
        prop_assert_eq!(parse_amount(&unformat(&formatted)), Some(f64::from(n)));
    }

    #[test]
    fn short_queries_never_request_prop(s in "\\PC{0,1}") {
        prop_assert_eq!(SearchQuery::evaluate(&s, SearchType::All, 2), SearchAction::Clear);
    }
}

#[test]
fn cost_total_matches_page_expectation() {
    let cfg = ClientConfig::default();
    let total = sum_amounts(["10", "abc", "5.5"]);
    assert_eq!(cfg.currency().format(total), "R 15.50");
}

#[test]
fn config_from_page_json() {
    let cfg = ClientConfig::from_json_str(r#"{"refresh_interval_ms": 10000, "currency_group_separator": " "}"#).unwrap();
    assert_eq!(cfg.refresh_interval_ms, 10_000);
    assert_eq!(cfg.currency().format(1234.0), "R 1 234.00");
}
