//! Styled HTML rendering of in-memory frames

use crate::core::error::Result;
use crate::table::mem::MemFrame;
use crate::table::{StyledTable, TabularData};

/// Styled wrapper over a [`MemFrame`] that renders itself as an HTML table
#[derive(Debug, Clone)]
pub struct MemStyler {
    frame: MemFrame,
    caption: Option<String>,
}

impl MemStyler {
    /// Wrap a frame for styled rendering
    pub fn new(frame: MemFrame) -> Self {
        Self {
            frame,
            caption: None,
        }
    }

    /// Add a table caption
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

impl StyledTable for MemStyler {
    fn to_html(&self, table_attributes: Option<&str>) -> Result<String> {
        let mut html = String::new();
        match table_attributes {
            Some(attributes) => html.push_str(&format!("<table {}>", attributes)),
            None => html.push_str("<table>"),
        }

        if let Some(caption) = &self.caption {
            html.push_str(&format!("<caption>{}</caption>", escape_html(caption)));
        }

        let columns = self.frame.column_names();
        html.push_str("<thead><tr>");
        for name in &columns {
            html.push_str(&format!("<th>{}</th>", escape_html(name)));
        }
        html.push_str("</tr></thead>");

        html.push_str("<tbody>");
        for row in 0..self.frame.row_count() {
            html.push_str("<tr>");
            for name in &columns {
                let value = self.frame.cell_as_string(row, name)?;
                html.push_str(&format!("<td>{}</td>", escape_html(&value)));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");

        Ok(html)
    }
}

pub(crate) fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
