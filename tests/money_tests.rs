#[cfg(test)]
mod tests {
    use money_format::{
        FormatOptions, FormatSpec, Formatted, Parsed, Value, format_money, presets, unformat,
    };

    // Helper to format a single amount and pull out the rendered string
    fn fmt_money(value: Value, options: &FormatOptions) -> String {
        match format_money(&value, options) {
            Formatted::Str(text) => text,
            Formatted::List(_) => panic!("expected a scalar result"),
        }
    }

    #[test]
    fn test_default_money() {
        let options = FormatOptions::default();
        assert_eq!(
            fmt_money(Value::Number(12345678.0), &options),
            "$12,345,678.00"
        );
        assert_eq!(fmt_money(Value::Number(0.0), &options), "$0.00");
    }

    #[test]
    fn test_negative_money_uses_derived_template() {
        let options = FormatOptions::default();
        assert_eq!(fmt_money(Value::Number(-1234.56), &options), "$-1,234.56");

        let options = options.with_symbol("£ ").with_precision(0);
        assert_eq!(fmt_money(Value::Number(-500000.0), &options), "£ -500,000");
    }

    #[test]
    fn test_value_first_pattern() {
        let options = FormatOptions::default()
            .with_symbol("GBP")
            .with_pattern("%v %s");
        assert_eq!(
            fmt_money(Value::Number(5318008.0), &options),
            "5,318,008.00 GBP"
        );
    }

    #[test]
    fn test_by_sign_templates() {
        let options = FormatOptions::default().with_format(FormatSpec::by_sign(
            "%s %v",
            Some("%s (%v)".to_string()),
            Some("%s --".to_string()),
        ));
        assert_eq!(fmt_money(Value::Number(1.99), &options), "$ 1.99");
        assert_eq!(fmt_money(Value::Number(-1.99), &options), "$ (1.99)");
        assert_eq!(fmt_money(Value::Number(0.0), &options), "$ --");
    }

    #[test]
    fn test_duplicate_placeholder_stays_literal() {
        let options = FormatOptions::default().with_pattern("%v %v");
        assert_eq!(fmt_money(Value::Number(1.0), &options), "1.00 %v");
    }

    #[test]
    fn test_pattern_without_value_placeholder() {
        // Caller error degrades silently instead of failing
        let options = FormatOptions::default().with_pattern("%s n/a");
        assert_eq!(fmt_money(Value::Number(42.0), &options), "$ n/a");
    }

    #[test]
    fn test_text_input_is_parsed_first() {
        let options = FormatOptions::default();
        assert_eq!(fmt_money(Value::Text("(1.99)".to_string()), &options), "$-1.99");
    }

    #[test]
    fn test_preset_options() {
        let eur = presets::preset("eur").expect("eur preset");
        assert_eq!(fmt_money(Value::Number(1234.56), &eur), "€1.234,56");

        let jpy = presets::preset("jpy").expect("jpy preset");
        assert_eq!(fmt_money(Value::Number(1234.0), &jpy), "¥1,234");
    }

    #[test]
    fn test_list_shape_is_preserved() {
        let options = FormatOptions::default();
        let input = Value::List(vec![
            Value::Number(1.0),
            Value::List(vec![Value::Number(-2.0)]),
        ]);
        assert_eq!(
            format_money(&input, &options),
            Formatted::List(vec![
                Formatted::Str("$1.00".to_string()),
                Formatted::List(vec![Formatted::Str("$-2.00".to_string())]),
            ])
        );
    }

    #[test]
    fn test_round_trip_within_precision() {
        let options = FormatOptions::default();
        for value in [0.0, 0.01, 4999.99, -4999.99, 12345678.0, -0.52] {
            let rendered = fmt_money(Value::Number(value), &options);
            let parsed = unformat(&Value::Text(rendered.clone()), &options);
            match parsed {
                Parsed::Number(back) => {
                    assert!(
                        (back - value).abs() < 0.005,
                        "round trip of {} via {:?} gave {}",
                        value,
                        rendered,
                        back
                    );
                }
                Parsed::List(_) => panic!("expected a scalar result"),
            }
        }
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let options = FormatOptions::default().with_symbol("$ ");
        let once = fmt_money(Value::Number(1999.99), &options);
        let back = unformat(&Value::Text(once.clone()), &options)
            .as_number()
            .expect("scalar");
        let twice = fmt_money(Value::Number(back), &options);
        assert_eq!(once, twice);
    }
}
