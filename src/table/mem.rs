//! Small column-oriented in-memory frame implementing [`TabularData`]

use std::collections::{HashMap, HashSet};

use crate::core::error::{Error, Result};
use crate::table::TabularData;

/// A typed column of values
#[derive(Debug, Clone)]
pub enum Column {
    /// 64-bit integer column
    Int64(Vec<i64>),
    /// 64-bit float column
    Float64(Vec<f64>),
    /// String column
    Str(Vec<String>),
    /// Boolean column
    Bool(Vec<bool>),
}

impl Column {
    /// Number of values in the column
    pub fn len(&self) -> usize {
        match self {
            Column::Int64(v) => v.len(),
            Column::Float64(v) => v.len(),
            Column::Str(v) => v.len(),
            Column::Bool(v) => v.len(),
        }
    }

    /// Whether the column holds no values
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Declared data type name
    pub fn dtype_name(&self) -> &'static str {
        match self {
            Column::Int64(_) => "integer",
            Column::Float64(_) => "float",
            Column::Str(_) => "string",
            Column::Bool(_) => "boolean",
        }
    }

    fn value_as_string(&self, row: usize) -> Option<String> {
        match self {
            Column::Int64(v) => v.get(row).map(|x| x.to_string()),
            Column::Float64(v) => v.get(row).map(|x| x.to_string()),
            Column::Str(v) => v.get(row).cloned(),
            Column::Bool(v) => v.get(row).map(|x| x.to_string()),
        }
    }

    fn variance(&self) -> Option<f64> {
        match self {
            Column::Int64(v) => sample_variance(&v.iter().map(|&x| x as f64).collect::<Vec<_>>()),
            Column::Float64(v) => sample_variance(v),
            Column::Str(_) | Column::Bool(_) => None,
        }
    }

    fn nunique(&self) -> usize {
        match self {
            Column::Int64(v) => v.iter().collect::<HashSet<_>>().len(),
            // Floats hash by bit pattern; fine for counting distinct values
            Column::Float64(v) => v.iter().map(|x| x.to_bits()).collect::<HashSet<_>>().len(),
            Column::Str(v) => v.iter().collect::<HashSet<_>>().len(),
            Column::Bool(v) => v.iter().collect::<HashSet<_>>().len(),
        }
    }
}

/// Sample variance with the unbiased (n-1) estimator
fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let sum_sq = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>();
    Some(sum_sq / (count - 1.0))
}

/// Column-oriented 2D data structure with named, typed columns
#[derive(Debug, Clone, Default)]
pub struct MemFrame {
    columns: HashMap<String, Column>,
    column_order: Vec<String>,
    row_count: usize,
}

impl MemFrame {
    /// Create a new empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column; all columns must share the same length
    pub fn add_column(&mut self, name: impl Into<String>, column: Column) -> Result<()> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(Error::DuplicateColumnName(name));
        }
        if !self.column_order.is_empty() && column.len() != self.row_count {
            return Err(Error::Consistency(format!(
                "column '{}' has {} values, expected {}",
                name,
                column.len(),
                self.row_count
            )));
        }
        if self.column_order.is_empty() {
            self.row_count = column.len();
        }
        self.column_order.push(name.clone());
        self.columns.insert(name, column);
        Ok(())
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.column_order.len()
    }

    /// Whether the frame contains a column with the given name
    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Copy of the first `rows` rows, the truncated view a `head()` call shows
    pub fn head(&self, rows: usize) -> Self {
        let take = rows.min(self.row_count);
        let mut frame = MemFrame::new();
        frame.row_count = take;
        // Names and lengths are already consistent; push directly
        for name in &self.column_order {
            let column = match &self.columns[name] {
                Column::Int64(v) => Column::Int64(v[..take].to_vec()),
                Column::Float64(v) => Column::Float64(v[..take].to_vec()),
                Column::Str(v) => Column::Str(v[..take].to_vec()),
                Column::Bool(v) => Column::Bool(v[..take].to_vec()),
            };
            frame.column_order.push(name.clone());
            frame.columns.insert(name.clone(), column);
        }
        frame
    }

    fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .get(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }
}

impl TabularData for MemFrame {
    fn row_count(&self) -> usize {
        self.row_count
    }

    fn column_names(&self) -> Vec<String> {
        self.column_order.clone()
    }

    fn column_dtype(&self, column: &str) -> Result<String> {
        Ok(self.column(column)?.dtype_name().to_string())
    }

    fn column_variance(&self, column: &str) -> Result<Option<f64>> {
        Ok(self.column(column)?.variance())
    }

    fn column_nunique(&self, column: &str) -> Result<usize> {
        Ok(self.column(column)?.nunique())
    }

    fn cell_as_string(&self, row: usize, column: &str) -> Result<String> {
        self.column(column)?
            .value_as_string(row)
            .ok_or(Error::IndexOutOfBounds {
                index: row,
                size: self.row_count,
            })
    }
}
