use richrepr::{
    describe_columns, summarize, Column, MemFrame, MAX_SUMMARY_COLUMNS, MAX_SUMMARY_ROWS,
};

fn mixed_frame() -> MemFrame {
    let mut frame = MemFrame::new();
    frame
        .add_column("age", Column::Int64(vec![10, 20, 30, 40, 50]))
        .unwrap();
    frame
        .add_column(
            "name",
            Column::Str(vec![
                "alice".into(),
                "bob".into(),
                "carol".into(),
                "alice".into(),
                "bob".into(),
            ]),
        )
        .unwrap();
    frame
        .add_column("active", Column::Bool(vec![true, true, false, true, false]))
        .unwrap();
    frame
}

#[test]
fn test_describe_columns() {
    let frame = mixed_frame();
    let rows = describe_columns(&frame).unwrap();
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0].name, "age");
    assert_eq!(rows[0].variance, Some(250.0));
    assert_eq!(rows[0].nunique, 5);
    assert_eq!(rows[0].dtype, "integer");
    assert_eq!(rows[0].example.as_deref(), Some("10"));

    assert_eq!(rows[1].name, "name");
    assert_eq!(rows[1].variance, None);
    assert_eq!(rows[1].nunique, 3);
    assert_eq!(rows[1].dtype, "string");
    assert_eq!(rows[1].example.as_deref(), Some("alice"));

    assert_eq!(rows[2].name, "active");
    assert_eq!(rows[2].variance, None);
    assert_eq!(rows[2].nunique, 2);
    assert_eq!(rows[2].dtype, "boolean");
    assert_eq!(rows[2].example.as_deref(), Some("true"));
}

#[test]
fn test_summary_text() {
    let text = summarize(&mixed_frame()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    // Header plus one row per source column
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("variance"));
    assert!(lines[0].contains("nunique"));
    assert!(lines[0].contains("dtype"));
    assert!(lines[0].contains("example_value"));
    assert!(lines[1].starts_with("age"));
    assert!(lines[1].contains("250.0"));
    assert!(lines[2].starts_with("name"));
    assert!(lines[2].contains("NaN"));
    assert!(lines[3].starts_with("active"));
    assert!(lines[3].contains("boolean"));
}

#[test]
fn test_fractional_variance_formatting() {
    let mut frame = MemFrame::new();
    frame
        .add_column("x", Column::Float64(vec![1.0, 2.0, 4.0]))
        .unwrap();
    let text = summarize(&frame).unwrap();
    assert!(text.contains("2.333333"));
}

#[test]
fn test_row_limit() {
    let mut frame = MemFrame::new();
    frame
        .add_column("x", Column::Int64(vec![0; MAX_SUMMARY_ROWS]))
        .unwrap();
    assert!(summarize(&frame).is_some());

    let mut over = MemFrame::new();
    over.add_column("x", Column::Int64(vec![0; MAX_SUMMARY_ROWS + 1]))
        .unwrap();
    assert!(summarize(&over).is_none());
}

#[test]
fn test_column_limit() {
    let mut frame = MemFrame::new();
    for i in 0..MAX_SUMMARY_COLUMNS {
        frame
            .add_column(format!("col{}", i), Column::Int64(vec![1, 2]))
            .unwrap();
    }
    assert!(summarize(&frame).is_some());

    let mut over = MemFrame::new();
    for i in 0..MAX_SUMMARY_COLUMNS + 1 {
        over.add_column(format!("col{}", i), Column::Int64(vec![1, 2]))
            .unwrap();
    }
    assert!(summarize(&over).is_none());
}

#[test]
fn test_empty_frame() {
    // No columns at all: an empty (but present) summary table
    let empty = MemFrame::new();
    let rows = describe_columns(&empty).unwrap();
    assert!(rows.is_empty());
    assert!(summarize(&empty).is_some());

    // Columns but no rows: example values degrade to NaN
    let mut no_rows = MemFrame::new();
    no_rows.add_column("x", Column::Int64(vec![])).unwrap();
    let rows = describe_columns(&no_rows).unwrap();
    assert_eq!(rows[0].variance, None);
    assert_eq!(rows[0].nunique, 0);
    assert_eq!(rows[0].example, None);
    let text = summarize(&no_rows).unwrap();
    assert!(text.contains("NaN"));
}
