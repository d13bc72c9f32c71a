use crate::parser::tokens::parse_float_literal;
use crate::types::{FormatOptions, Parsed, Value};

/// Parse a value back into a number
///
/// Numbers pass through unchanged, lists recurse element-wise, and text is
/// scrubbed of currency cruft before being read as a float. Malformed text
/// never errors; it degrades to `options.fallback`.
///
/// # Examples
/// ```
/// use money_format::unformat;
/// use money_format::{FormatOptions, Parsed, Value};
///
/// let options = FormatOptions::default();
/// let result = unformat(&Value::Text("$ 12,345.67".to_string()), &options);
/// assert_eq!(result, Parsed::Number(12345.67));
/// ```
pub fn unformat(value: &Value, options: &FormatOptions) -> Parsed {
    match value {
        Value::Number(number) => Parsed::Number(*number),
        Value::List(items) => Parsed::List(
            items
                .iter()
                .map(|item| unformat(item, options))
                .collect(),
        ),
        Value::Text(text) => {
            Parsed::Number(unformat_text(text, &options.decimal, options.fallback))
        }
    }
}

/// Parse one text value into a number, degrading to `fallback`
pub(crate) fn unformat_text(text: &str, decimal: &str, fallback: f64) -> f64 {
    let cleaned = scrub(text, decimal);
    let collapsed = collapse_brackets(&cleaned);

    // Minus signs cancel pairwise: negative iff an odd number remain
    let negative = collapsed.matches('-').count() % 2 == 1;

    let magnitude: String = collapsed.chars().filter(|c| *c != '-').collect();
    let mut input = magnitude.as_str();
    match parse_float_literal(&mut input) {
        Ok(number) if negative => -number,
        Ok(number) => number,
        Err(_) => fallback,
    }
}

/// Keep digits, minus signs, brackets and the decimal separator (normalized
/// to a period); everything else is currency cruft and is dropped
fn scrub(text: &str, decimal: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        if !decimal.is_empty() && rest.starts_with(decimal) {
            cleaned.push('.');
            rest = &rest[decimal.len()..];
            continue;
        }
        if c.is_ascii_digit() || matches!(c, '-' | '(' | ')') {
            cleaned.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }
    cleaned
}

/// Rewrite accounting-style bracketed negatives
///
/// A bracketed group containing digits collapses, together with any minus
/// run immediately preceding it and any minus signs inside it, to a single
/// leading minus. A bracketed group without digits is dropped. An unmatched
/// opening bracket stays put and defeats the numeric parse.
fn collapse_brackets(cleaned: &str) -> String {
    let mut out = String::with_capacity(cleaned.len());
    let mut rest = cleaned;
    while let Some(open) = rest.find('(') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let Some(close) = tail[1..].find(')') else {
            out.push_str(tail);
            return out;
        };
        let content = &tail[1..1 + close];
        if content.chars().any(|c| c.is_ascii_digit()) {
            while out.ends_with('-') {
                out.pop();
            }
            out.push('-');
            out.extend(content.chars().filter(|c| *c != '-'));
        }
        rest = &tail[close + 2..];
    }
    out.push_str(rest);
    out
}
