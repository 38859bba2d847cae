//! Conversion between Chinese numeral text and `i64`.
//!
//! ```
//! assert_eq!(hanshu::parse("一亿零五万").unwrap(), 1_0005_0000);
//! assert_eq!(hanshu::convert(10010).unwrap(), "一万零一十");
//! ```
//!
//! The conversion code lives in `hanshu-core`; this crate re-exports it and
//! adds optional trace output (feature `trace`, see [`init_tracing`]).

mod trace_init;

pub use hanshu_core::settings::{init_custom, settings, Settings, SettingsError};
pub use hanshu_core::symbols;
pub use hanshu_core::{
    convert, convert_with, convert_with_options, is_numeral_text, parse, symbol_value,
    FormatOptions, NumeralError, NumeralStyle,
};
pub use trace_init::{init_tracing, TraceGuard, TRACE_FILE};
