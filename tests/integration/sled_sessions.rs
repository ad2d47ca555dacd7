//! Integration tests for the Browser over the durable sled session store

use tempfile::TempDir;
use trail::history::{Browser, Context};
use trail::session::SessionRegistry;
use trail::Request;

fn names(history: &[Context]) -> Vec<String> {
    history.iter().map(|c| c.name().to_string()).collect()
}

#[test]
fn test_history_survives_reopening_the_database() {
    let temp_dir = TempDir::new().unwrap();
    {
        let registry = SessionRegistry::open(temp_dir.path()).unwrap();
        let session = registry.session("alice").unwrap();
        for (uri, name) in [("/a", "A"), ("/b", "B"), ("/c", "C")] {
            let mut browser = Browser::new(Request::get(uri), &session, 4).unwrap();
            browser.keep_current_context(name).unwrap();
        }
        registry.flush().unwrap();
    }

    let registry = SessionRegistry::open(temp_dir.path()).unwrap();
    let session = registry.session("alice").unwrap();
    let browser = Browser::new(Request::get("/"), &session, 4).unwrap();
    assert_eq!(names(browser.get_context_history()), vec!["C", "B", "A"]);
    assert_eq!(browser.get_last_context().unwrap().uri(), "/c");
}

#[test]
fn test_each_session_keeps_its_own_history() {
    let temp_dir = TempDir::new().unwrap();
    let registry = SessionRegistry::open(temp_dir.path()).unwrap();
    let alice = registry.session("alice").unwrap();
    let bob = registry.session("bob").unwrap();

    Browser::new(Request::get("/a"), &alice, 4)
        .unwrap()
        .keep_current_context("A")
        .unwrap();
    Browser::new(Request::get("/b"), &bob, 4)
        .unwrap()
        .keep_current_context("B")
        .unwrap();

    let alice_view = Browser::new(Request::get("/"), &alice, 4).unwrap();
    let bob_view = Browser::new(Request::get("/"), &bob, 4).unwrap();
    assert_eq!(names(alice_view.get_context_history()), vec!["A"]);
    assert_eq!(names(bob_view.get_context_history()), vec!["B"]);
    assert_eq!(registry.list_sessions().unwrap(), vec!["alice", "bob"]);
}

#[test]
fn test_shrink_is_persisted_in_sled() {
    let temp_dir = TempDir::new().unwrap();
    let registry = SessionRegistry::open(temp_dir.path()).unwrap();
    let session = registry.session("s").unwrap();
    for name in ["A", "B", "C", "D"] {
        Browser::new(Request::get("/"), &session, 4)
            .unwrap()
            .keep_current_context(name)
            .unwrap();
    }

    Browser::new(Request::get("/"), &session, 2).unwrap();
    let reread = Browser::new(Request::get("/"), &session, 10).unwrap();
    assert_eq!(names(reread.get_context_history()), vec!["D", "C"]);
}

#[test]
fn test_forget_resets_history() {
    let temp_dir = TempDir::new().unwrap();
    let registry = SessionRegistry::open(temp_dir.path()).unwrap();
    let session = registry.session("s").unwrap();
    Browser::new(Request::get("/"), &session, 4)
        .unwrap()
        .keep_current_context("A")
        .unwrap();

    assert_eq!(registry.forget("s").unwrap(), 1);
    let browser = Browser::new(Request::get("/"), &session, 4).unwrap();
    assert!(browser.get_last_context().is_none());
}
