//! Currency string and format template parsing module
//!
//! This module is responsible for parsing formatted currency text back into
//! numbers and for converting `%s`/`%v` format patterns into their token
//! representation. The main entry point is the `unformat` function.

mod number;
mod template;
mod tokens;

pub use number::unformat;
pub use template::{format_triple, parse_template};

pub(crate) use number::unformat_text;
