//! Numeral text → integer.
//!
//! The text is cut into sections at every 万/亿 marker. Each section holds
//! only digits and 十/百/千 and is reduced on its own; the markers then decide
//! whether the running total is scaled up (a new highest magnitude) or the
//! section is added in as a low-order part (万 after 亿, as in 一亿零五万).
//!
//! Arithmetic wraps on overflow instead of panicking.

use tracing::{debug, debug_span};

use crate::symbols::{is_magnitude_marker, lookup, TEN};
use crate::NumeralError;

#[derive(Debug, Clone, Copy)]
struct Symbol {
    ch: char,
    value: i64,
}

impl Symbol {
    fn read(ch: char) -> Result<Self, NumeralError> {
        Ok(Symbol {
            ch,
            value: lookup(ch)?,
        })
    }
}

/// Parse Chinese numeral text into an integer.
///
/// Empty input is 0. Fails on the first character that is not in the symbol
/// table; malformed but recognizable input ("十十") is never rejected.
///
/// ```
/// assert_eq!(hanshu_core::parse("一千二百三十四").unwrap(), 1234);
/// assert_eq!(hanshu_core::parse("壹万零贰").unwrap(), 10002);
/// assert!(hanshu_core::parse("一千!").is_err());
/// ```
pub fn parse(text: &str) -> Result<i64, NumeralError> {
    let symbols = text
        .chars()
        .map(Symbol::read)
        .collect::<Result<Vec<_>, _>>()?;
    let _span = debug_span!("parse", char_count = symbols.len()).entered();

    let mut total: i64 = 0;
    let mut largest: i64 = 0;
    let mut prev: i64 = 0;
    let mut begin = 0;
    let mut sections = 0usize;

    for (i, sym) in symbols.iter().enumerate() {
        largest = largest.max(sym.value);

        if is_magnitude_marker(sym.value) {
            if is_magnitude_marker(prev) {
                // 万亿, 亿亿: the marker scales whatever came before it
                total = total.wrapping_mul(sym.value);
            } else {
                let section = reduce_section(&symbols[begin..i]);
                sections += 1;
                if sym.value >= largest {
                    total = total.wrapping_add(section).wrapping_mul(sym.value);
                } else {
                    total = total.wrapping_add(section.wrapping_mul(sym.value));
                }
            }
            begin = i + 1;
        }
        prev = sym.value;
    }

    total = total.wrapping_add(reduce_section(&symbols[begin..]));
    debug!(sections, value = total);
    Ok(total)
}

/// Running state while reducing one section.
///
/// `pending` is the part under construction ("三" then "三百"); it moves into
/// `total` once a smaller positional marker, or the end, closes it.
#[derive(Debug, Default)]
struct SectionReducer {
    total: i64,
    pending: i64,
}

impl SectionReducer {
    fn digit(&mut self, sym: Symbol) {
        if sym.ch.is_ascii_digit() {
            // ASCII runs compose like ordinary decimal: "123"
            self.pending = self.pending.wrapping_mul(10).wrapping_add(sym.value);
        } else {
            self.pending = sym.value;
        }
    }

    fn unit(&mut self, unit: i64, next: i64) {
        self.pending = self.pending.wrapping_mul(unit);
        if next < unit {
            self.flush();
        }
    }

    fn flush(&mut self) {
        self.total = self.total.wrapping_add(self.pending);
        self.pending = 0;
    }
}

/// Reduce a section free of 万/亿 (digits and 十/百/千 only).
fn reduce_section(symbols: &[Symbol]) -> i64 {
    let Some(first) = symbols.first() else {
        return 0;
    };

    let mut state = SectionReducer::default();
    // A bare leading unit counts once: 十五 is 15, not 0×10+5.
    if first.value >= TEN {
        state.pending = 1;
    }

    for (i, sym) in symbols.iter().enumerate() {
        let next = symbols.get(i + 1).map_or(0, |s| s.value);
        if sym.value < TEN {
            state.digit(*sym);
        } else {
            state.unit(sym.value, next);
        }
    }
    state.flush();
    state.total
}
