//! Interactive-session surface consumed by the display toggles
//!
//! A [`Shell`] exposes the three things the formatters need from the host
//! session: its formatter registry, its variable namespace in insertion
//! order, and its input history. [`Session`] is the in-memory
//! implementation an embedding kernel owns; tests use it directly.
//!
//! The process-wide active-shell slot mirrors the usual "get the current
//! interactive shell, or None outside a notebook" accessor of notebook
//! runtimes. Having no active shell is a normal condition, not an error.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use lazy_static::lazy_static;

use crate::registry::{DisplayRegistry, FormatterRegistry, Value};

/// Accessor surface of an interactive session
pub trait Shell: Send + Sync {
    /// The session's display-formatter registry
    fn registry(&self) -> &dyn FormatterRegistry;

    /// Snapshot of the variable namespace in insertion order
    fn user_ns(&self) -> Vec<(String, Value)>;

    /// Look up a single namespace binding
    fn get(&self, name: &str) -> Option<Value>;

    /// The most recently executed input line
    fn last_input(&self) -> Option<String>;
}

#[derive(Default)]
struct Namespace {
    values: HashMap<String, Value>,
    order: Vec<String>,
}

/// In-memory interactive session
pub struct Session {
    registry: DisplayRegistry,
    namespace: Mutex<Namespace>,
    history: Mutex<Vec<String>>,
}

impl Session {
    /// Create a session with the standard MIME slots pre-registered
    pub fn new() -> Self {
        let registry = DisplayRegistry::new();
        registry.ensure_mime("text/plain");
        registry.ensure_mime("text/html");
        Self {
            registry,
            namespace: Mutex::new(Namespace::default()),
            history: Mutex::new(Vec::new()),
        }
    }

    /// Bind a name in the namespace; rebinding keeps the original position
    pub fn bind(&self, name: impl Into<String>, value: Value) {
        let name = name.into();
        let mut namespace = self.namespace.lock().unwrap();
        if !namespace.values.contains_key(&name) {
            namespace.order.push(name.clone());
        }
        namespace.values.insert(name, value);
    }

    /// Append an executed input line to the history
    pub fn record_input(&self, line: impl Into<String>) {
        self.history.lock().unwrap().push(line.into());
    }

    /// Concrete registry access, including per-value dispatch
    pub fn display_registry(&self) -> &DisplayRegistry {
        &self.registry
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell for Session {
    fn registry(&self) -> &dyn FormatterRegistry {
        &self.registry
    }

    fn user_ns(&self) -> Vec<(String, Value)> {
        let namespace = self.namespace.lock().unwrap();
        namespace
            .order
            .iter()
            .map(|name| (name.clone(), namespace.values[name].clone()))
            .collect()
    }

    fn get(&self, name: &str) -> Option<Value> {
        self.namespace.lock().unwrap().values.get(name).cloned()
    }

    fn last_input(&self) -> Option<String> {
        self.history.lock().unwrap().last().cloned()
    }
}

lazy_static! {
    /// The process-wide active interactive shell, if any
    static ref ACTIVE_SHELL: RwLock<Option<Arc<dyn Shell>>> = RwLock::new(None);
}

/// Install the process-wide active shell
pub fn set_active_shell(shell: Arc<dyn Shell>) {
    *ACTIVE_SHELL.write().unwrap() = Some(shell);
}

/// Clear the process-wide active shell
pub fn clear_active_shell() {
    *ACTIVE_SHELL.write().unwrap() = None;
}

/// The active shell, or `None` outside an interactive session
pub fn active_shell() -> Option<Arc<dyn Shell>> {
    ACTIVE_SHELL.read().unwrap().clone()
}
