use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use richrepr::{
    active_shell, clear_active_shell, set_active_shell, Column, FormatterRegistry, MemFrame,
    Session, Shell, TabularData, Value,
};

fn lock() -> MutexGuard<'static, ()> {
    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn frame(values: Vec<i64>) -> Arc<dyn TabularData> {
    let mut inner = MemFrame::new();
    inner.add_column("x", Column::Int64(values)).unwrap();
    Arc::new(inner)
}

#[test]
fn test_new_session_has_standard_mimes() {
    let session = Session::new();
    assert!(session.display_registry().has_mime("text/plain"));
    assert!(session.display_registry().has_mime("text/html"));
    assert!(!session.display_registry().has_mime("application/pdf"));
}

#[test]
fn test_namespace_insertion_order() {
    let session = Session::new();
    session.bind("b", Value::string("1"));
    session.bind("a", Value::string("2"));
    session.bind("c", Value::string("3"));

    let names: Vec<String> = session.user_ns().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["b", "a", "c"]);
}

#[test]
fn test_rebind_keeps_position() {
    let session = Session::new();
    session.bind("a", Value::string("old"));
    session.bind("b", Value::string("other"));
    session.bind("a", Value::string("new"));

    let names: Vec<String> = session.user_ns().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["a", "b"]);

    match session.get("a") {
        Some(Value::Str(s)) => assert_eq!(s.as_str(), "new"),
        other => panic!("unexpected binding: {:?}", other),
    }
}

#[test]
fn test_bound_frame_shares_allocation() {
    let session = Session::new();
    let shared = frame(vec![1, 2, 3]);
    session.bind("df", Value::frame(Arc::clone(&shared)));

    match session.get("df") {
        Some(Value::Frame(bound)) => {
            assert!(std::ptr::addr_eq(Arc::as_ptr(&bound), Arc::as_ptr(&shared)));
        }
        other => panic!("unexpected binding: {:?}", other),
    }
}

#[test]
fn test_input_history() {
    let session = Session::new();
    assert!(session.last_input().is_none());

    session.record_input("df = load()");
    session.record_input("df.head()");
    assert_eq!(session.last_input().as_deref(), Some("df.head()"));
}

#[test]
fn test_active_shell_slot() {
    let _guard = lock();
    clear_active_shell();
    assert!(active_shell().is_none());

    let session = Arc::new(Session::new());
    set_active_shell(session.clone());
    let current = active_shell().expect("shell should be active");
    current.registry().ensure_mime("application/pdf");
    assert!(session.display_registry().has_mime("application/pdf"));

    // Replacing the shell drops the old one from the slot
    let replacement = Arc::new(Session::new());
    set_active_shell(replacement.clone());
    let current = active_shell().expect("shell should be active");
    assert!(!current.registry().has_mime("application/pdf"));

    clear_active_shell();
    assert!(active_shell().is_none());
}
