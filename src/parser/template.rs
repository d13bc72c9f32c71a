use winnow::combinator::{alt, repeat};
use winnow::{ModalResult, Parser};

use crate::parser::tokens::{parse_literal_char, parse_symbol_placeholder, parse_value_placeholder};
use crate::types::{FormatSpec, FormatTriple, TemplateToken};

/// Parse a single template token
fn parse_template_token(input: &mut &str) -> ModalResult<TemplateToken> {
    alt((
        parse_symbol_placeholder,
        parse_value_placeholder,
        parse_literal_char,
    ))
    .parse_next(input)
}

/// Tokenize a format pattern
///
/// Tokenization cannot fail: any character that does not start a placeholder
/// is kept as a literal.
///
/// # Examples
/// ```
/// use money_format::parse_template;
/// use money_format::TemplateToken;
///
/// let tokens = parse_template("%s %v");
/// assert_eq!(
///     tokens,
///     vec![
///         TemplateToken::Symbol,
///         TemplateToken::LiteralChar(' '),
///         TemplateToken::Value,
///     ]
/// );
/// ```
pub fn parse_template(pattern: &str) -> Vec<TemplateToken> {
    let mut input = pattern;
    let tokens: ModalResult<Vec<TemplateToken>> =
        repeat(0.., parse_template_token).parse_next(&mut input);
    tokens.unwrap_or_default()
}

/// Resolve a format spec into its positive/negative/zero templates
///
/// For a single pattern the negative template is derived by dropping the
/// first literal minus sign and inserting one immediately before `%v`; the
/// zero template reuses the pattern unchanged. Explicit per-sign patterns
/// fall back to `pos` where `neg`/`zero` are absent.
pub fn format_triple(spec: &FormatSpec) -> FormatTriple {
    match spec {
        FormatSpec::Pattern(pos) => FormatTriple {
            pos: pos.clone(),
            neg: pos.replacen('-', "", 1).replacen("%v", "-%v", 1),
            zero: pos.clone(),
        },
        FormatSpec::BySign { pos, neg, zero } => FormatTriple {
            pos: pos.clone(),
            neg: neg.clone().unwrap_or_else(|| pos.clone()),
            zero: zero.clone().unwrap_or_else(|| pos.clone()),
        },
    }
}
