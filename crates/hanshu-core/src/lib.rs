//! Chinese numeral text ⇄ `i64`.
//!
//! [`parse`] reads 一千二百三十四, 壹仟贰佰叁拾肆, 12万3456 and the like.
//! [`convert`] writes the canonical form back. For every `n >= 0`,
//! `parse(&convert(n)?)? == n`.

mod format;
mod parse;
pub mod settings;
pub mod symbols;
#[cfg(test)]
mod tests;

pub use format::{convert, convert_with, convert_with_options, FormatOptions};
pub use parse::parse;
pub use symbols::{is_numeral_text, symbol_value, NumeralStyle};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    #[error("unrecognized chinese numeral symbol: {0}")]
    UnrecognizedSymbol(char),

    #[error("only non-negative numbers can be converted, got {0}")]
    NegativeInput(i64),
}
