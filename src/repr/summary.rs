//! Bounded, best-effort per-column summaries of tabular values
//!
//! Summarization never raises: oversized frames and any internal failure
//! both yield "unavailable" (`None`). The rendered form is a fixed-width
//! text table with one row per column of the source frame.

use crate::core::error::Result;
use crate::table::TabularData;

/// Frames with more rows than this are not summarized
pub const MAX_SUMMARY_ROWS: usize = 100_000;

/// Frames with more columns than this are not summarized
pub const MAX_SUMMARY_COLUMNS: usize = 20;

/// Descriptive record for one column of the source frame
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    /// Column name
    pub name: String,
    /// Sample variance; absent for non-numeric columns
    pub variance: Option<f64>,
    /// Count of distinct values
    pub nunique: usize,
    /// Declared data type
    pub dtype: String,
    /// Value from the first row; absent when the frame has no rows
    pub example: Option<String>,
}

/// Fixed-width text summary of a frame, or `None` when the frame exceeds
/// the size limits or any part of the computation fails
pub fn summarize(frame: &dyn TabularData) -> Option<String> {
    if frame.row_count() > MAX_SUMMARY_ROWS {
        return None;
    }
    if frame.column_names().len() > MAX_SUMMARY_COLUMNS {
        return None;
    }
    match describe_columns(frame) {
        Ok(rows) => Some(render_table(&rows)),
        Err(_) => None,
    }
}

/// Per-column descriptive records for a frame
pub fn describe_columns(frame: &dyn TabularData) -> Result<Vec<ColumnSummary>> {
    let has_rows = frame.row_count() > 0;
    let mut rows = Vec::new();
    for name in frame.column_names() {
        let variance = frame.column_variance(&name)?;
        let nunique = frame.column_nunique(&name)?;
        let dtype = frame.column_dtype(&name)?;
        let example = if has_rows {
            Some(frame.cell_as_string(0, &name)?)
        } else {
            None
        };
        rows.push(ColumnSummary {
            name,
            variance,
            nunique,
            dtype,
            example,
        });
    }
    Ok(rows)
}

const HEADERS: [&str; 4] = ["variance", "nunique", "dtype", "example_value"];

fn render_table(rows: &[ColumnSummary]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.variance.map_or_else(|| "NaN".to_string(), format_number),
                row.nunique.to_string(),
                row.dtype.clone(),
                row.example.clone().unwrap_or_else(|| "NaN".to_string()),
            ]
        })
        .collect();

    let name_width = rows.iter().map(|row| row.name.len()).max().unwrap_or(0);
    let mut widths = [0usize; 4];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = header.len();
        for row in &cells {
            widths[i] = widths[i].max(row[i].len());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    let mut header = " ".repeat(name_width);
    for (i, title) in HEADERS.iter().enumerate() {
        header.push_str(&format!("  {:>width$}", title, width = widths[i]));
    }
    lines.push(header);

    for (row, text) in rows.iter().zip(&cells) {
        let mut line = format!("{:<width$}", row.name, width = name_width);
        for (i, cell) in text.iter().enumerate() {
            line.push_str(&format!("  {:>width$}", cell, width = widths[i]));
        }
        lines.push(line);
    }

    lines.join("\n")
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e10 {
        format!("{:.1}", value)
    } else {
        format!("{:.6}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(250.0), "250.0");
        assert_eq!(format_number(2.5), "2.500000");
        assert_eq!(format_number(0.0), "0.0");
    }

    #[test]
    fn test_render_table_alignment() {
        let rows = vec![
            ColumnSummary {
                name: "age".to_string(),
                variance: Some(250.0),
                nunique: 5,
                dtype: "integer".to_string(),
                example: Some("25".to_string()),
            },
            ColumnSummary {
                name: "name".to_string(),
                variance: None,
                nunique: 3,
                dtype: "string".to_string(),
                example: Some("alice".to_string()),
            },
        ];
        let text = render_table(&rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("variance"));
        assert!(lines[0].contains("example_value"));
        assert!(lines[1].starts_with("age "));
        assert!(lines[1].contains("250.0"));
        assert!(lines[2].starts_with("name"));
        assert!(lines[2].contains("NaN"));
        // Fixed width: all lines are equally long
        assert!(lines.iter().all(|line| line.len() == lines[0].len()));
    }
}
