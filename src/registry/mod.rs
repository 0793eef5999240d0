//! Display-formatter registry
//!
//! A registry maps a MIME type to a dispatch table of rendering callbacks
//! keyed by value type. Toggles in [`crate::repr`] install and restore
//! callbacks through the [`FormatterRegistry`] trait; [`DisplayRegistry`] is
//! the in-memory implementation an embedding kernel (or a test) owns through
//! its session.
//!
//! Two kinds of type key exist: [`TypeKey::Concrete`] for types that can be
//! named directly, and [`TypeKey::Named`] for types identified by module
//! path and type name, such as erased trait objects.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::repr::IntrinsicPayload;
use crate::table::{NamedType, StyledTable, TabularData};

/// A value passing through the display pipeline
#[derive(Clone)]
pub enum Value {
    /// A plain string
    Str(Arc<String>),
    /// A tabular dataset
    Frame(Arc<dyn TabularData>),
    /// A styled table renderer
    Styled(Arc<dyn StyledTable>),
    /// Anything else
    Other(Arc<dyn Any + Send + Sync>),
}

impl Value {
    /// Wrap a string
    pub fn string(value: impl Into<String>) -> Self {
        Value::Str(Arc::new(value.into()))
    }

    /// Wrap a shared tabular dataset
    pub fn frame(frame: Arc<dyn TabularData>) -> Self {
        Value::Frame(frame)
    }

    /// Wrap a shared styled table
    pub fn styled(styler: Arc<dyn StyledTable>) -> Self {
        Value::Styled(styler)
    }

    /// Wrap any other shared object
    pub fn other(value: Arc<dyn Any + Send + Sync>) -> Self {
        Value::Other(value)
    }

    /// The registry key this value dispatches under
    pub fn type_key(&self) -> TypeKey {
        match self {
            Value::Str(_) => TypeKey::concrete::<String>(),
            Value::Frame(frame) => TypeKey::from(frame.type_name()),
            Value::Styled(styler) => TypeKey::from(styler.type_name()),
            Value::Other(value) => TypeKey::Concrete((**value).type_id()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Frame(frame) => write!(
                f,
                "Frame({} rows x {} columns)",
                frame.row_count(),
                frame.column_names().len()
            ),
            Value::Styled(_) => f.write_str("Styled"),
            Value::Other(_) => f.write_str("Other"),
        }
    }
}

/// Identifies one callback slot within a MIME dispatch table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKey {
    /// A directly referencable type
    Concrete(TypeId),
    /// A type identified by module path and type name
    Named {
        /// Module path of the type
        module: String,
        /// Bare type name
        name: String,
    },
}

impl TypeKey {
    /// Key for a directly referencable type
    pub fn concrete<T: 'static>() -> Self {
        TypeKey::Concrete(TypeId::of::<T>())
    }

    /// Key for a type identified by name
    pub fn named(module: impl Into<String>, name: impl Into<String>) -> Self {
        TypeKey::Named {
            module: module.into(),
            name: name.into(),
        }
    }
}

impl From<NamedType> for TypeKey {
    fn from(named: NamedType) -> Self {
        TypeKey::named(named.module, named.name)
    }
}

/// What a rendering callback produces
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// An intrinsic-type payload (custom JSON MIME type)
    Intrinsic(IntrinsicPayload),
    /// An HTML fragment (text/html)
    Html(String),
}

/// A rendering callback; `None` means the callback does not apply
pub type FormatterFn = Arc<dyn Fn(&Value) -> Option<Rendered> + Send + Sync>;

/// Install/remove surface of a display-formatter registry
pub trait FormatterRegistry: Send + Sync {
    /// Idempotently create the dispatch table for a MIME type
    fn ensure_mime(&self, mime: &str);

    /// Whether a dispatch table exists for a MIME type
    fn has_mime(&self, mime: &str) -> bool;

    /// Install a callback, returning whatever was previously installed
    fn install(&self, mime: &str, key: TypeKey, formatter: FormatterFn) -> Option<FormatterFn>;

    /// Remove a callback, tolerating absence
    fn remove(&self, mime: &str, key: &TypeKey) -> Option<FormatterFn>;

    /// Read the installed callback without modifying the table
    fn lookup(&self, mime: &str, key: &TypeKey) -> Option<FormatterFn>;
}

#[derive(Default)]
struct DispatchTable {
    formatters: HashMap<TypeKey, FormatterFn>,
}

/// In-memory formatter registry
#[derive(Default)]
pub struct DisplayRegistry {
    tables: Mutex<HashMap<String, DispatchTable>>,
}

impl DisplayRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every installed callback that applies to the value, returning the
    /// `(mime, rendered)` pairs a frontend would receive
    pub fn format_value(&self, value: &Value) -> Vec<(String, Rendered)> {
        let key = value.type_key();
        // Collect first so callbacks run without the table lock held
        let matches: Vec<(String, FormatterFn)> = {
            let tables = self.tables.lock().unwrap();
            tables
                .iter()
                .filter_map(|(mime, table)| {
                    table
                        .formatters
                        .get(&key)
                        .map(|formatter| (mime.clone(), Arc::clone(formatter)))
                })
                .collect()
        };

        matches
            .into_iter()
            .filter_map(|(mime, formatter)| formatter(value).map(|rendered| (mime, rendered)))
            .collect()
    }
}

impl FormatterRegistry for DisplayRegistry {
    fn ensure_mime(&self, mime: &str) {
        let mut tables = self.tables.lock().unwrap();
        tables.entry(mime.to_string()).or_default();
    }

    fn has_mime(&self, mime: &str) -> bool {
        self.tables.lock().unwrap().contains_key(mime)
    }

    fn install(&self, mime: &str, key: TypeKey, formatter: FormatterFn) -> Option<FormatterFn> {
        let mut tables = self.tables.lock().unwrap();
        tables
            .entry(mime.to_string())
            .or_default()
            .formatters
            .insert(key, formatter)
    }

    fn remove(&self, mime: &str, key: &TypeKey) -> Option<FormatterFn> {
        let mut tables = self.tables.lock().unwrap();
        tables.get_mut(mime)?.formatters.remove(key)
    }

    fn lookup(&self, mime: &str, key: &TypeKey) -> Option<FormatterFn> {
        let tables = self.tables.lock().unwrap();
        tables.get(mime)?.formatters.get(key).map(Arc::clone)
    }
}
