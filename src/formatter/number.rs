use crate::formatter::rounding::to_fixed;
use crate::parser::unformat;
use crate::types::{FormatOptions, Formatted, Parsed, Value};

/// Render a number as a grouped, fixed-precision string (no symbol)
///
/// Inputs are parsed first, so formatted text and nested lists are accepted;
/// lists are formatted element-wise, preserving their shape.
///
/// # Examples
/// ```
/// use money_format::format_number;
/// use money_format::{FormatOptions, Formatted, Value};
///
/// let options = FormatOptions::default();
/// let result = format_number(&Value::Number(5318008.0), &options);
/// assert_eq!(result, Formatted::Str("5,318,008.00".to_string()));
/// ```
pub fn format_number(value: &Value, options: &FormatOptions) -> Formatted {
    format_parsed(&unformat(value, options), options)
}

fn format_parsed(parsed: &Parsed, options: &FormatOptions) -> Formatted {
    match parsed {
        Parsed::List(items) => Formatted::List(
            items
                .iter()
                .map(|item| format_parsed(item, options))
                .collect(),
        ),
        Parsed::Number(number) => Formatted::Str(format_scalar(*number, options)),
    }
}

/// Format one numeric amount; the sign is rendered separately so grouping
/// operates on the magnitude only
pub(super) fn format_scalar(value: f64, options: &FormatOptions) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = to_fixed(value.abs(), options.precision, options.round);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::with_capacity(sign.len() + fixed.len() + int_part.len() / 3);
    out.push_str(sign);
    group_digits(int_part, &options.thousand, &mut out);

    if options.precision > 0 {
        let fraction = if options.strip_zeros {
            frac_part.trim_end_matches('0')
        } else {
            frac_part
        };
        if !fraction.is_empty() {
            out.push_str(&options.decimal);
            out.push_str(fraction);
        }
    }

    out
}

/// Insert the thousands separator every three digits from the right; a
/// leading partial group of one or two digits comes first
fn group_digits(digits: &str, thousand: &str, out: &mut String) {
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(thousand);
        }
        out.push(c);
    }
}
