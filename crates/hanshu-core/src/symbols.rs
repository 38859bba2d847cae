//! Character ⇄ value tables shared by the parser and the formatter.
//!
//! The parse table is many-to-one: simplified, financial and colloquial
//! variants all land on the same value, and ASCII digits and Latin letters
//! are accepted as shorthand for 0..=35. The output tables are one-to-one
//! and live on [`NumeralStyle`].

use std::collections::HashMap;
use std::sync::OnceLock;

pub const TEN: i64 = 10;
pub const HUNDRED: i64 = 100;
pub const THOUSAND: i64 = 1000;
pub const WAN: i64 = 1_0000;
pub const YI: i64 = 1_0000_0000;

const HAN_SYMBOLS: &[(char, i64)] = &[
    ('零', 0),
    ('〇', 0),
    ('一', 1),
    ('壹', 1),
    ('二', 2),
    ('贰', 2),
    ('两', 2),
    ('兩', 2),
    ('三', 3),
    ('叁', 3),
    ('四', 4),
    ('肆', 4),
    ('五', 5),
    ('伍', 5),
    ('六', 6),
    ('陆', 6),
    ('七', 7),
    ('柒', 7),
    ('八', 8),
    ('捌', 8),
    ('九', 9),
    ('玖', 9),
    ('十', TEN),
    ('拾', TEN),
    ('百', HUNDRED),
    ('佰', HUNDRED),
    ('白', HUNDRED),
    ('千', THOUSAND),
    ('仟', THOUSAND),
    ('干', THOUSAND),
    ('万', WAN),
    ('亿', YI),
];

fn symbol_table() -> &'static HashMap<char, i64> {
    static TABLE: OnceLock<HashMap<char, i64>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table: HashMap<char, i64> = HAN_SYMBOLS.iter().copied().collect();
        for (value, ch) in ('0'..='9').enumerate() {
            table.insert(ch, value as i64);
        }
        // 'a'/'A' = 10 .. 'z'/'Z' = 35
        for (offset, (lower, upper)) in ('a'..='z').zip('A'..='Z').enumerate() {
            let value = 10 + offset as i64;
            table.insert(lower, value);
            table.insert(upper, value);
        }
        table
    })
}

/// Look up the value of a single numeral character.
pub fn symbol_value(ch: char) -> Option<i64> {
    symbol_table().get(&ch).copied()
}

/// Same as [`symbol_value`], failing with [`NumeralError::UnrecognizedSymbol`].
///
/// [`NumeralError::UnrecognizedSymbol`]: crate::NumeralError::UnrecognizedSymbol
pub(crate) fn lookup(ch: char) -> Result<i64, crate::NumeralError> {
    symbol_value(ch).ok_or(crate::NumeralError::UnrecognizedSymbol(ch))
}

/// True for the section markers 万 and 亿.
pub fn is_magnitude_marker(value: i64) -> bool {
    value == WAN || value == YI
}

/// Check that every character of `text` is a known numeral symbol.
///
/// No structural check is made: "十十" passes.
pub fn is_numeral_text(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| symbol_value(c).is_some())
}

/// Output character set used by the formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumeralStyle {
    /// 一二三 / 十百千
    #[default]
    Lower,
    /// 壹贰叁 / 拾佰仟, as written on cheques and invoices.
    Financial,
}

impl NumeralStyle {
    /// Look up a style by its settings name ("lower" or "financial").
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "lower" => Some(NumeralStyle::Lower),
            "financial" => Some(NumeralStyle::Financial),
            _ => None,
        }
    }

    /// Canonical character for a digit (0..=9) or a power of ten up to 亿.
    pub fn char_for(self, value: i64) -> Option<char> {
        let ch = match value {
            0..=9 => self.digits()[value as usize],
            TEN => self.units()[0],
            HUNDRED => self.units()[1],
            THOUSAND => self.units()[2],
            WAN => '万',
            YI => '亿',
            _ => return None,
        };
        Some(ch)
    }

    pub(crate) fn digit(self, d: i64) -> char {
        self.digits()[d as usize]
    }

    pub(crate) fn zero(self) -> char {
        self.digits()[0]
    }

    /// Marker for 10, 100 or 1000 at `index` 0, 1 or 2.
    pub(crate) fn unit(self, index: usize) -> char {
        self.units()[index]
    }

    fn digits(self) -> &'static [char; 10] {
        match self {
            NumeralStyle::Lower => &['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'],
            NumeralStyle::Financial => {
                &['零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖']
            }
        }
    }

    fn units(self) -> &'static [char; 3] {
        match self {
            NumeralStyle::Lower => &['十', '百', '千'],
            NumeralStyle::Financial => &['拾', '佰', '仟'],
        }
    }
}
