//! Integer → numeral text.
//!
//! The number is split into base-10000 groups. Each group is rendered with
//! 千/百/十, and 万/亿 markers go between groups. Markers alternate 万, 亿, 万, 亿
//! from the bottom. A 亿 that lands directly on a 万 (its group was empty)
//! replaces it, so 10^12 reads 一万亿 and 10^16 reads 一亿亿.

use tracing::{debug, debug_span};

use crate::settings::settings;
use crate::symbols::{NumeralStyle, THOUSAND, WAN};
use crate::NumeralError;

/// Rendering switches that are not part of the character table.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    pub style: NumeralStyle,
    /// Write 十五 instead of 一十五 when the leading group is in 10..20.
    pub elide_leading_one: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            style: NumeralStyle::Lower,
            elide_leading_one: true,
        }
    }
}

/// Format `n` using the globally configured style.
///
/// ```
/// assert_eq!(hanshu_core::convert(1234).unwrap(), "一千二百三十四");
/// assert_eq!(hanshu_core::convert(19).unwrap(), "十九");
/// assert!(hanshu_core::convert(-1).is_err());
/// ```
pub fn convert(n: i64) -> Result<String, NumeralError> {
    let format = &settings().format;
    convert_with_options(
        n,
        FormatOptions {
            style: format.style,
            elide_leading_one: format.elide_leading_one,
        },
    )
}

/// Format `n` with an explicit output style.
pub fn convert_with(n: i64, style: NumeralStyle) -> Result<String, NumeralError> {
    convert_with_options(
        n,
        FormatOptions {
            style,
            ..FormatOptions::default()
        },
    )
}

pub fn convert_with_options(n: i64, opts: FormatOptions) -> Result<String, NumeralError> {
    if n < 0 {
        return Err(NumeralError::NegativeInput(n));
    }
    let _span = debug_span!("convert", n, style = ?opts.style).entered();

    let style = opts.style;
    if n == 0 {
        return Ok(style.zero().to_string());
    }

    // Built lowest group first with every piece reversed; flipped once at the end.
    let mut rev: Vec<char> = Vec::new();
    let mut group = n % WAN;
    let mut rest = n / WAN;
    push_reversed(&mut rev, &render_group(group, rest == 0, opts));

    let mut boundary = 0usize;
    while rest > 0 {
        // 一万零一百: the lower group has no 千 of its own
        if group > 0 && group < THOUSAND {
            rev.push(style.zero());
        }

        if boundary % 2 == 0 {
            rev.push('万');
        } else {
            match rev.last_mut() {
                Some(last) if *last == '万' => *last = '亿',
                _ => rev.push('亿'),
            }
        }

        group = rest % WAN;
        rest /= WAN;
        push_reversed(&mut rev, &render_group(group, rest == 0, opts));
        boundary += 1;
    }

    debug!(groups = boundary + 1, chars = rev.len());
    Ok(rev.into_iter().rev().collect())
}

fn push_reversed(out: &mut Vec<char>, piece: &str) {
    out.extend(piece.chars().rev());
}

/// Render one group (0..=9999), most significant digit first.
///
/// A zero is written once per run of zeros, and only when a nonzero digit
/// follows it. Trailing and leading zeros are dropped.
fn render_group(value: i64, highest: bool, opts: FormatOptions) -> String {
    let style = opts.style;
    let digits = [value / 1000, value / 100 % 10, value / 10 % 10, value % 10];

    let mut out = String::new();
    let mut started = false;
    let mut zero_pending = false;

    for (pos, &d) in digits.iter().enumerate() {
        if d == 0 {
            zero_pending = started;
            continue;
        }
        if zero_pending {
            out.push(style.zero());
            zero_pending = false;
        }
        out.push(style.digit(d));
        // pos 0..=2 carry 千, 百, 十
        if pos < 3 {
            out.push(style.unit(2 - pos));
        }
        started = true;
    }

    if opts.elide_leading_one && highest && (10..20).contains(&value) {
        out.remove(0);
    }
    out
}
