mod proptest_roundtrip;

use crate::{convert, parse, NumeralError};

/// Fixed points that must hold in both directions.
const FIXED_POINTS: &[(i64, &str)] = &[
    (0, "零"),
    (1, "一"),
    (10, "十"),
    (19, "十九"),
    (20, "二十"),
    (86, "八十六"),
    (100, "一百"),
    (101, "一百零一"),
    (110, "一百一十"),
    (111, "一百一十一"),
    (1000, "一千"),
    (1001, "一千零一"),
    (1002, "一千零二"),
    (1010, "一千零一十"),
    (1011, "一千零一十一"),
    (1100, "一千一百"),
    (1101, "一千一百零一"),
    (1110, "一千一百一十"),
    (1111, "一千一百一十一"),
    (10000, "一万"),
    (10001, "一万零一"),
    (10010, "一万零一十"),
    (11000, "一万一千"),
    (100000, "十万"),
    (108001, "十万八千零一"),
    (1_0000_0000, "一亿"),
    (1_0000_0001, "一亿零一"),
    (1_0000_0000_0000_0000, "一亿亿"),
    (10_0000_0000_0000_0000, "十亿亿"),
    (100_0000_0000_0000_0000, "一百亿亿"),
    (i16::MAX as i64, "三万二千七百六十七"),
    (i32::MAX as i64, "二十一亿四千七百四十八万三千六百四十七"),
    (
        i64::MAX,
        "九百二十二亿三千三百七十二万零三百六十八亿五千四百七十七万五千八百零七",
    ),
];

#[test]
fn fixed_points_parse() {
    for &(n, text) in FIXED_POINTS {
        assert_eq!(parse(text).unwrap(), n, "parse({text})");
    }
}

#[test]
fn fixed_points_convert() {
    for &(n, text) in FIXED_POINTS {
        assert_eq!(convert(n).unwrap(), text, "convert({n})");
    }
}

#[test]
fn error_display() {
    assert_eq!(
        NumeralError::UnrecognizedSymbol('!').to_string(),
        "unrecognized chinese numeral symbol: !"
    );
    assert_eq!(
        NumeralError::NegativeInput(-1).to_string(),
        "only non-negative numbers can be converted, got -1"
    );
}

#[test]
fn non_canonical_input_normalizes() {
    // parse→convert is not an identity for variant spellings
    assert_eq!(convert(parse("壹佰零贰").unwrap()).unwrap(), "一百零二");
    assert_eq!(convert(parse("一十五").unwrap()).unwrap(), "十五");
    assert_eq!(convert(parse("两千").unwrap()).unwrap(), "二千");
    assert_eq!(convert(parse("1234").unwrap()).unwrap(), "一千二百三十四");
}
