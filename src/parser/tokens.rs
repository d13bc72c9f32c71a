use winnow::ascii::float;
use winnow::error::ErrMode;
use winnow::token::{any, literal};
use winnow::{ModalResult, Parser};

use crate::types::TemplateToken;

// Placeholder parsers
pub fn parse_symbol_placeholder(input: &mut &str) -> ModalResult<TemplateToken> {
    literal("%s")
        .value(TemplateToken::Symbol)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_value_placeholder(input: &mut &str) -> ModalResult<TemplateToken> {
    literal("%v")
        .value(TemplateToken::Value)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_literal_char(input: &mut &str) -> ModalResult<TemplateToken> {
    any.map(TemplateToken::LiteralChar)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Parse a floating-point literal, consuming the longest valid prefix
pub fn parse_float_literal(input: &mut &str) -> ModalResult<f64> {
    float.parse_next(input)
}
