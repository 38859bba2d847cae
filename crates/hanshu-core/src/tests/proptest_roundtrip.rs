//! Property-based tests for the parse/convert pair.
//!
//! Numbers are drawn from the whole non-negative `i64` range, with extra
//! weight on values full of zeros, which exercise the 零 and 万/亿 rules.

use proptest::prelude::*;

use crate::{convert_with, convert_with_options, parse, FormatOptions, NumeralStyle};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Decimal strings over {0, 1, 9} with zeros dominating, e.g. 100090000001.
fn arb_sparse() -> impl Strategy<Value = i64> {
    prop::collection::vec(
        prop_oneof![6 => Just(0i64), 2 => Just(1i64), 1 => Just(9i64)],
        1..=18,
    )
    .prop_map(|digits| digits.into_iter().fold(0i64, |acc, d| acc * 10 + d))
}

fn arb_value() -> impl Strategy<Value = i64> {
    prop_oneof![
        4 => 0..=i64::MAX,
        3 => arb_sparse(),
        2 => 0..100_000i64,
    ]
}

fn arb_style() -> impl Strategy<Value = NumeralStyle> {
    prop_oneof![Just(NumeralStyle::Lower), Just(NumeralStyle::Financial)]
}

fn arb_symbol() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        '零', '一', '二', '三', '九', '十', '百', '千', '万', '亿', '壹', '拾', '佰', '仟', '两',
        '白', '干', '〇', '0', '7', 'a', 'Z',
    ])
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn roundtrip(n in arb_value(), style in arb_style()) {
        let text = convert_with(n, style).unwrap();
        prop_assert_eq!(parse(&text).unwrap(), n, "text = {}", text);
    }

    #[test]
    fn roundtrip_without_elision(n in arb_value()) {
        let opts = FormatOptions { elide_leading_one: false, ..FormatOptions::default() };
        let text = convert_with_options(n, opts).unwrap();
        prop_assert_eq!(parse(&text).unwrap(), n, "text = {}", text);
    }

    #[test]
    fn convert_is_pure(n in arb_value(), style in arb_style()) {
        prop_assert_eq!(convert_with(n, style).unwrap(), convert_with(n, style).unwrap());
    }

    #[test]
    fn negative_always_rejected(n in i64::MIN..0) {
        prop_assert!(convert_with(n, NumeralStyle::Lower).is_err());
    }

    #[test]
    fn parse_accepts_any_symbol_sequence(chars in prop::collection::vec(arb_symbol(), 0..24)) {
        let text: String = chars.into_iter().collect();
        prop_assert!(parse(&text).is_ok());
    }

    #[test]
    fn ascii_digit_runs_parse_as_decimal(n in 0..1_000_000_000i64) {
        prop_assert_eq!(parse(&n.to_string()).unwrap(), n);
    }
}
