//! # richrepr
//!
//! Rich intrinsic-representation formatters for notebook frontends.
//!
//! A notebook kernel owns a display-formatter registry mapping MIME types
//! to per-type rendering callbacks. This crate installs reversible
//! overrides into that registry so that selected values are annotated with
//! extra metadata (a custom intrinsic MIME payload for strings and tabular
//! data) or rendered differently (a `class="dataframe"` passthrough for
//! styled tables). Every override remembers what it replaced and restores
//! it on disable.
//!
//! ```
//! use std::sync::Arc;
//! use richrepr::{
//!     enable_dataframe_repr, set_active_shell, Column, MemFrame, Session, Value,
//! };
//!
//! let session = Arc::new(Session::new());
//! set_active_shell(session.clone());
//!
//! let mut frame = MemFrame::new();
//! frame.add_column("age", Column::Int64(vec![25, 30, 35])).unwrap();
//! let frame: Arc<dyn richrepr::TabularData> = Arc::new(frame);
//! session.bind("df", Value::frame(frame.clone()));
//!
//! enable_dataframe_repr();
//! let rendered = session.display_registry().format_value(&Value::frame(frame));
//! assert_eq!(rendered.len(), 1);
//! # richrepr::disable_dataframe_repr();
//! # richrepr::clear_active_shell();
//! ```

// Shared error types
pub mod core;

// Formatter registry and dispatch keys
pub mod registry;

// Toggles, renderers, name resolution, summaries
pub mod repr;

// Interactive-session surface and the active-shell slot
pub mod shell;

// Tabular-data contracts and the in-memory frame
pub mod table;

// Re-export the public surface at the crate root
pub use crate::core::error::{Error, Result};
pub use crate::registry::{
    DisplayRegistry, FormatterFn, FormatterRegistry, Rendered, TypeKey, Value,
};
pub use crate::repr::resolve::{resolve_frame_name, ResolvedName};
pub use crate::repr::summary::{
    describe_columns, summarize, ColumnSummary, MAX_SUMMARY_COLUMNS, MAX_SUMMARY_ROWS,
};
pub use crate::repr::{
    disable_dataframe_repr, disable_string_repr, disable_styler_formatter,
    enable_dataframe_repr, enable_string_repr, enable_styler_formatter, render_dataframe,
    render_string, IntrinsicKind, IntrinsicPayload, INTRINSIC_MIME_TYPE,
};
pub use crate::shell::{active_shell, clear_active_shell, set_active_shell, Session, Shell};
pub use crate::table::mem::{Column, MemFrame};
pub use crate::table::style::MemStyler;
pub use crate::table::{NamedType, StyledTable, TabularData, DATAFRAME_TYPE, STYLER_TYPE};
