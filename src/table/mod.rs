//! Tabular-data contracts consumed by the display formatters
//!
//! The renderers never depend on a concrete dataframe implementation. They
//! work against [`TabularData`] (row/column access, dtype introspection,
//! variance and distinct counts) and [`StyledTable`] (HTML rendering of a
//! styled table). A small in-memory implementation of both lives in
//! [`mem`] and [`style`] so hosts and tests have something concrete to bind
//! into a session.

pub mod mem;
pub mod style;

use crate::core::error::Result;

/// Module path + type name pair identifying a type that cannot be named
/// directly, mirroring registration "by name" in dynamic display registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedType {
    /// Module path of the type
    pub module: &'static str,
    /// Bare type name
    pub name: &'static str,
}

/// Canonical registry identity for tabular values
pub const DATAFRAME_TYPE: NamedType = NamedType {
    module: "richrepr::table",
    name: "DataFrame",
};

/// Canonical registry identity for styled-table values
pub const STYLER_TYPE: NamedType = NamedType {
    module: "richrepr::table::style",
    name: "Styler",
};

/// Read-only view of an in-memory table with named, typed columns
pub trait TabularData: Send + Sync + std::fmt::Debug {
    /// Number of rows
    fn row_count(&self) -> usize;

    /// Column names in declaration order
    fn column_names(&self) -> Vec<String>;

    /// Declared data type of a column
    fn column_dtype(&self, column: &str) -> Result<String>;

    /// Sample variance of a column; `None` for non-numeric columns
    fn column_variance(&self, column: &str) -> Result<Option<f64>>;

    /// Count of distinct values in a column
    fn column_nunique(&self, column: &str) -> Result<usize>;

    /// String rendering of a single cell
    fn cell_as_string(&self, row: usize, column: &str) -> Result<String>;

    /// Registry identity of this table type
    fn type_name(&self) -> NamedType {
        DATAFRAME_TYPE
    }
}

/// A styled table that can render itself to HTML
pub trait StyledTable: Send + Sync + std::fmt::Debug {
    /// Render to HTML, optionally adding extra attributes to the `<table>` tag
    fn to_html(&self, table_attributes: Option<&str>) -> Result<String>;

    /// Registry identity of this styler type
    fn type_name(&self) -> NamedType {
        STYLER_TYPE
    }
}
