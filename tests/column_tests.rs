use money_format::{FormatOptions, Formatted, Value, format_column};

fn widths(column: &[Formatted]) -> Vec<usize> {
    column
        .iter()
        .filter_map(|row| row.as_str())
        .map(|row| row.chars().count())
        .collect()
}

#[test]
fn test_column_alignment() {
    let options = FormatOptions::default().with_symbol("$ ");
    let column = format_column(
        &[
            Value::Number(123.5),
            Value::Number(3456.49),
            Value::Number(777888.99),
            Value::Number(12345678.0),
            Value::Number(-5432.0),
        ],
        &options,
    );

    assert_eq!(widths(&column), vec![15, 15, 15, 15, 15]);
    assert_eq!(column[0], Formatted::Str("$        123.50".to_string()));
    assert_eq!(column[3], Formatted::Str("$ 12,345,678.00".to_string()));
    assert_eq!(column[4], Formatted::Str("$     -5,432.00".to_string()));
}

#[test]
fn test_value_first_pattern_pads_at_start() {
    let options = FormatOptions::default()
        .with_symbol("kr")
        .with_pattern("%v %s");
    let column = format_column(&[Value::Number(1.5), Value::Number(1234.5)], &options);

    assert_eq!(
        column,
        vec![
            Formatted::Str("    1.50 kr".to_string()),
            Formatted::Str("1,234.50 kr".to_string()),
        ]
    );
}

#[test]
fn test_nested_lists_align_independently() {
    let options = FormatOptions::default();
    let column = format_column(
        &[
            Value::List(vec![Value::Number(1.0), Value::Number(10.0)]),
            Value::List(vec![Value::Number(100.0)]),
        ],
        &options,
    );

    assert_eq!(
        column,
        vec![
            Formatted::List(vec![
                Formatted::Str("$ 1.00".to_string()),
                Formatted::Str("$10.00".to_string()),
            ]),
            Formatted::List(vec![Formatted::Str("$100.00".to_string())]),
        ]
    );
}

#[test]
fn test_text_rows_are_parsed_first() {
    let options = FormatOptions::default();
    let column = format_column(
        &[
            Value::Text("$5".to_string()),
            Value::Text("1,000".to_string()),
        ],
        &options,
    );

    assert_eq!(
        column,
        vec![
            Formatted::Str("$    5.00".to_string()),
            Formatted::Str("$1,000.00".to_string()),
        ]
    );
}

#[test]
fn test_empty_input() {
    let options = FormatOptions::default();
    assert!(format_column(&[], &options).is_empty());
}
