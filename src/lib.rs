//! Currency and number formatting for display
//!
//! `money-format` renders numbers as currency or plain grouped strings and
//! parses formatted text back into numbers. Every operation is a pure
//! function of its inputs and an explicit [`FormatOptions`] record; the
//! [`settings`] module holds a process-wide default record and [`presets`]
//! provides per-currency bases for overrides.
//!
//! # Examples
//! ```
//! use money_format::{FormatOptions, Formatted, Value, format_money};
//!
//! let options = FormatOptions::default();
//! let result = format_money(&Value::Number(12345678.0), &options);
//! assert_eq!(result, Formatted::Str("$12,345,678.00".to_string()));
//! ```

pub mod formatter;
pub mod parser;
pub mod presets;
pub mod settings;
pub mod types;

// Re-export the main API
pub use formatter::{format_column, format_money, format_number, to_fixed};
pub use parser::{format_triple, parse_template, unformat};
pub use settings::{defaults, set_defaults};
pub use types::*;
