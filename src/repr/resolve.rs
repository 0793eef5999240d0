//! Best-effort recovery of the variable name bound to a displayed frame
//!
//! Resolution is identity-based: the namespace is scanned for a binding to
//! the same allocation as the displayed value. When that fails, the last
//! executed input line is matched against the literal `name.head(` pattern,
//! covering the common "show me the first few rows" case where the
//! displayed value is a truncated view of a differently named frame. Other
//! truncation-producing calls intentionally do not match.

use std::ptr;
use std::sync::Arc;

use crate::registry::Value;
use crate::shell::Shell;
use crate::table::TabularData;

/// Outcome of a successful name resolution
#[derive(Debug)]
pub struct ResolvedName {
    /// The namespace name bound to the value
    pub name: String,
    /// The namespace frame to summarize instead of the displayed one, set
    /// only by the `name.head(` fallback
    pub substitute: Option<Arc<dyn TabularData>>,
}

/// Resolve the namespace name of a displayed frame, best-effort
pub fn resolve_frame_name(
    shell: &dyn Shell,
    frame: &Arc<dyn TabularData>,
) -> Option<ResolvedName> {
    for (name, value) in shell.user_ns() {
        if name.starts_with('_') {
            continue;
        }
        if let Value::Frame(candidate) = &value {
            if same_frame(candidate, frame) {
                return Some(ResolvedName {
                    name,
                    substitute: None,
                });
            }
        }
    }

    let last_line = shell.last_input()?;
    let (head, tail) = last_line.split_once('.')?;
    if !is_identifier(head) || !tail.starts_with("head(") {
        return None;
    }
    match shell.get(head) {
        Some(Value::Frame(candidate)) => Some(ResolvedName {
            name: head.to_string(),
            substitute: Some(candidate),
        }),
        _ => None,
    }
}

fn same_frame(a: &Arc<dyn TabularData>, b: &Arc<dyn TabularData>) -> bool {
    ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
