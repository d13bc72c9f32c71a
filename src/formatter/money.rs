use crate::formatter::number::format_scalar;
use crate::parser::{format_triple, parse_template, unformat_text};
use crate::types::{FormatOptions, Formatted, TemplateToken, Value};

/// Wrap a formatted amount in its currency template
///
/// The template is chosen by the sign of the amount from the derived
/// positive/negative/zero triple; lists recurse element-wise and text
/// inputs are parsed first.
///
/// # Examples
/// ```
/// use money_format::format_money;
/// use money_format::{FormatOptions, Formatted, Value};
///
/// let options = FormatOptions::default();
/// let result = format_money(&Value::Number(12345678.0), &options);
/// assert_eq!(result, Formatted::Str("$12,345,678.00".to_string()));
/// ```
pub fn format_money(value: &Value, options: &FormatOptions) -> Formatted {
    match value {
        Value::List(items) => Formatted::List(
            items
                .iter()
                .map(|item| format_money(item, options))
                .collect(),
        ),
        Value::Number(amount) => Formatted::Str(money_string(*amount, options)),
        Value::Text(text) => Formatted::Str(money_string(
            unformat_text(text, &options.decimal, options.fallback),
            options,
        )),
    }
}

/// Render one amount through the template matching its sign
pub(super) fn money_string(amount: f64, options: &FormatOptions) -> String {
    let triple = format_triple(&options.format);
    let pattern = if amount > 0.0 {
        &triple.pos
    } else if amount < 0.0 {
        &triple.neg
    } else {
        &triple.zero
    };

    let body = format_scalar(amount.abs(), options);
    render_template(&parse_template(pattern), &options.symbol, &body)
}

/// Substitute the first `%s` with the symbol and the first `%v` with the
/// rendered value; later duplicates stay as literal placeholder text
fn render_template(tokens: &[TemplateToken], symbol: &str, value: &str) -> String {
    let mut out = String::new();
    let mut symbol_done = false;
    let mut value_done = false;

    for token in tokens {
        match token {
            TemplateToken::Symbol if !symbol_done => {
                out.push_str(symbol);
                symbol_done = true;
            }
            TemplateToken::Symbol => out.push_str("%s"),
            TemplateToken::Value if !value_done => {
                out.push_str(value);
                value_done = true;
            }
            TemplateToken::Value => out.push_str("%v"),
            TemplateToken::LiteralChar(c) => out.push(*c),
        }
    }

    out
}
