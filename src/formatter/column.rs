use crate::formatter::money::money_string;
use crate::parser::{format_triple, unformat_text};
use crate::types::{FormatOptions, Formatted, Value};

/// Format a list of amounts as currency and pad every result to a common
/// width so symbols and separators line up in monospace output
///
/// Nested lists form their own independently aligned column groups and do
/// not count toward the surrounding width.
///
/// # Examples
/// ```
/// use money_format::format_column;
/// use money_format::{FormatOptions, Value};
///
/// let options = FormatOptions::default().with_symbol("$ ");
/// let column = format_column(
///     &[Value::Number(123.5), Value::Number(12345678.0)],
///     &options,
/// );
/// let widths: Vec<usize> = column
///     .iter()
///     .filter_map(|row| row.as_str())
///     .map(|row| row.chars().count())
///     .collect();
/// assert_eq!(widths, vec![15, 15]);
/// ```
pub fn format_column(values: &[Value], options: &FormatOptions) -> Vec<Formatted> {
    let triple = format_triple(&options.format);
    // Symbol-first templates pad after the symbol; value-first templates
    // pad at the start of the string
    let pad_after_symbol = match (triple.pos.find("%s"), triple.pos.find("%v")) {
        (Some(symbol_at), Some(value_at)) => symbol_at < value_at,
        _ => true,
    };

    let mut max_width = 0;
    let mut render = |amount: f64| {
        let text = money_string(amount, options);
        max_width = max_width.max(text.chars().count());
        Formatted::Str(text)
    };

    let mut rows: Vec<Formatted> = values
        .iter()
        .map(|value| match value {
            Value::List(inner) => Formatted::List(format_column(inner, options)),
            Value::Number(amount) => render(*amount),
            Value::Text(text) => {
                render(unformat_text(text, &options.decimal, options.fallback))
            }
        })
        .collect();

    for row in &mut rows {
        if let Formatted::Str(text) = row {
            let width = text.chars().count();
            if width < max_width {
                let padding = " ".repeat(max_width - width);
                *text = pad(text, &padding, &options.symbol, pad_after_symbol);
            }
        }
    }

    rows
}

/// Insert column padding after the first occurrence of the symbol, or at
/// the start of the string when the template is value-first or the symbol
/// does not occur
fn pad(text: &str, padding: &str, symbol: &str, pad_after_symbol: bool) -> String {
    if pad_after_symbol && !symbol.is_empty() {
        if let Some(at) = text.find(symbol) {
            let split = at + symbol.len();
            return format!("{}{}{}", &text[..split], padding, &text[split..]);
        }
    }
    format!("{}{}", padding, text)
}
