//! Rich intrinsic representations and their enable/disable toggles
//!
//! Each feature is a reversible toggle: `enable` installs a rendering
//! callback into the active shell's formatter registry and remembers
//! whatever was installed before; `disable` restores exactly that. All
//! toggles are silent no-ops outside an interactive session, on repeated
//! enable, and on disable without enable.

pub mod resolve;
pub mod summary;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use lazy_static::lazy_static;
use serde::Serialize;

use crate::registry::{FormatterFn, Rendered, TypeKey, Value};
use crate::repr::resolve::resolve_frame_name;
use crate::repr::summary::summarize;
use crate::shell::active_shell;
use crate::table::{TabularData, DATAFRAME_TYPE, STYLER_TYPE};

/// MIME type under which intrinsic payloads are published
pub const INTRINSIC_MIME_TYPE: &str = "application/vnd.richrepr.intrinsic+json";

const HTML_MIME_TYPE: &str = "text/html";

/// Table attribute the styler passthrough applies before rendering
const DATA_TABLE_ATTRIBUTES: &str = "class=\"dataframe\"";

/// Semantic type tag of an intrinsic payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntrinsicKind {
    /// A plain string
    String,
    /// A tabular dataset
    DataFrame,
}

/// Frontend-consumed metadata payload tagging a value's intrinsic type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntrinsicPayload {
    /// Required semantic type tag
    #[serde(rename = "type")]
    pub kind: IntrinsicKind,
    /// Notebook variable name bound to the value, when resolvable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
    /// Fixed-width per-column summary, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl IntrinsicPayload {
    /// Payload tagging a plain string
    pub fn string() -> Self {
        Self {
            kind: IntrinsicKind::String,
            variable_name: None,
            summary: None,
        }
    }

    /// Payload tagging a tabular dataset, before enrichment
    pub fn dataframe() -> Self {
        Self {
            kind: IntrinsicKind::DataFrame,
            variable_name: None,
            summary: None,
        }
    }
}

/// Payload for a string value; ignores the content entirely
pub fn render_string(_value: &Value) -> IntrinsicPayload {
    IntrinsicPayload::string()
}

/// Payload for a tabular value, enriched best-effort with the bound
/// variable name and a per-column summary
pub fn render_dataframe(frame: &Arc<dyn TabularData>) -> IntrinsicPayload {
    let mut payload = IntrinsicPayload::dataframe();
    let mut target = Arc::clone(frame);

    if let Some(shell) = active_shell() {
        if let Some(resolved) = resolve_frame_name(shell.as_ref(), frame) {
            payload.variable_name = Some(resolved.name);
            // The namespace may hold the full frame behind a truncated view
            if let Some(substitute) = resolved.substitute {
                target = substitute;
            }
        }
    }

    payload.summary = summarize(target.as_ref());
    payload
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Feature {
    StringRepr,
    DataFrameRepr,
    StylerHtml,
}

lazy_static! {
    // Previously installed callbacks, one slot per enabled feature. The
    // None payload records "nothing was installed before".
    static ref SAVED_FORMATTERS: Mutex<HashMap<Feature, Option<FormatterFn>>> =
        Mutex::new(HashMap::new());
}

fn enable_feature(feature: Feature, mime: &str, key: TypeKey, formatter: FormatterFn) {
    let mut saved = SAVED_FORMATTERS.lock().unwrap();
    if saved.contains_key(&feature) {
        return;
    }
    let Some(shell) = active_shell() else {
        return;
    };
    let registry = shell.registry();
    registry.ensure_mime(mime);
    let previous = registry.install(mime, key, formatter);
    log::debug!("installed {:?} formatter for {}", feature, mime);
    saved.insert(feature, previous);
}

fn disable_feature(feature: Feature, mime: &str, key: &TypeKey) {
    let mut saved = SAVED_FORMATTERS.lock().unwrap();
    let Some(record) = saved.remove(&feature) else {
        return;
    };
    let Some(shell) = active_shell() else {
        // No session to restore into; keep the record for a later disable
        saved.insert(feature, record);
        return;
    };
    let registry = shell.registry();
    registry.remove(mime, key);
    if let Some(previous) = record {
        registry.install(mime, key.clone(), previous);
    }
    log::debug!("restored {:?} formatter for {}", feature, mime);
}

/// Enable the intrinsic representation for plain strings
pub fn enable_string_repr() {
    enable_feature(
        Feature::StringRepr,
        INTRINSIC_MIME_TYPE,
        TypeKey::concrete::<String>(),
        Arc::new(|value: &Value| Some(Rendered::Intrinsic(render_string(value)))),
    );
}

/// Restore the previous formatter for plain strings
pub fn disable_string_repr() {
    disable_feature(
        Feature::StringRepr,
        INTRINSIC_MIME_TYPE,
        &TypeKey::concrete::<String>(),
    );
}

/// Enable the intrinsic metadata representation for tabular values
pub fn enable_dataframe_repr() {
    enable_feature(
        Feature::DataFrameRepr,
        INTRINSIC_MIME_TYPE,
        TypeKey::from(DATAFRAME_TYPE),
        Arc::new(|value: &Value| match value {
            Value::Frame(frame) => Some(Rendered::Intrinsic(render_dataframe(frame))),
            _ => None,
        }),
    );
}

/// Restore the previous formatter for tabular values
pub fn disable_dataframe_repr() {
    disable_feature(
        Feature::DataFrameRepr,
        INTRINSIC_MIME_TYPE,
        &TypeKey::from(DATAFRAME_TYPE),
    );
}

/// Enable the HTML passthrough that marks styled tables as data tables
pub fn enable_styler_formatter() {
    enable_feature(
        Feature::StylerHtml,
        HTML_MIME_TYPE,
        TypeKey::from(STYLER_TYPE),
        Arc::new(|value: &Value| match value {
            // Rendering failure is swallowed; the styler simply emits nothing
            Value::Styled(styler) => styler
                .to_html(Some(DATA_TABLE_ATTRIBUTES))
                .ok()
                .map(Rendered::Html),
            _ => None,
        }),
    );
}

/// Restore the previous HTML formatter for styled tables
pub fn disable_styler_formatter() {
    disable_feature(Feature::StylerHtml, HTML_MIME_TYPE, &TypeKey::from(STYLER_TYPE));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_omits_absent_fields() {
        let payload = IntrinsicPayload::string();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "string" }));
    }

    #[test]
    fn test_payload_includes_present_fields() {
        let payload = IntrinsicPayload {
            kind: IntrinsicKind::DataFrame,
            variable_name: Some("df".to_string()),
            summary: Some("name  variance".to_string()),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "dataframe",
                "variable_name": "df",
                "summary": "name  variance",
            })
        );
    }
}
