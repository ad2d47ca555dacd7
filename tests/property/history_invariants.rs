//! Property-based tests for history queue invariants

use proptest::prelude::*;
use trail::history::{Browser, Context, HistoryQueue};
use trail::{MemorySessionStore, Request};

fn name_strategy() -> impl Strategy<Value = String> {
    // Small alphabet so pushes collide often.
    prop::sample::select(vec!["A", "B", "C", "D", "E", "F", "G"]).prop_map(str::to_string)
}

/// Reference model: newest first, names unique, at most `max_size` long.
fn model_push(model: &mut Vec<String>, name: &str, max_size: usize) {
    model.retain(|existing| existing != name);
    model.insert(0, name.to_string());
    model.truncate(max_size);
}

proptest! {
    #[test]
    fn queue_matches_reference_model(
        names in prop::collection::vec(name_strategy(), 0..40),
        max_size in 1usize..6,
    ) {
        let mut queue = HistoryQueue::new();
        let mut model: Vec<String> = Vec::new();

        for (i, name) in names.iter().enumerate() {
            let context = Context::new(name.as_str(), format!("uri/{}", i)).unwrap();
            queue.push(context, max_size);
            model_push(&mut model, name, max_size);

            prop_assert!(queue.len() <= max_size);
            prop_assert!(queue.has_unique_names());
        }

        let actual: Vec<String> = queue.iter().map(|c| c.name().to_string()).collect();
        prop_assert_eq!(actual, model);
    }

    #[test]
    fn newest_entry_is_the_last_push(
        names in prop::collection::vec(name_strategy(), 1..20),
        max_size in 1usize..6,
    ) {
        let session = MemorySessionStore::new();
        let mut browser = Browser::new(Request::get("uri"), &session, max_size).unwrap();
        for name in &names {
            browser.keep_current_context(name).unwrap();
        }
        let last = browser.get_last_context().unwrap();
        prop_assert_eq!(last.name(), names.last().unwrap().as_str());
    }

    #[test]
    fn shrinking_limit_keeps_newest_prefix(
        names in prop::collection::vec(name_strategy(), 0..30),
        first_max in 1usize..8,
        second_max in 1usize..8,
    ) {
        let session = MemorySessionStore::new();
        let mut browser = Browser::new(Request::get("uri"), &session, first_max).unwrap();
        for name in &names {
            browser.keep_current_context(name).unwrap();
        }
        let before: Vec<Context> = browser.get_context_history().to_vec();

        let resized = Browser::new(Request::get("uri"), &session, second_max).unwrap();
        let after = resized.get_context_history();

        let expected_len = before.len().min(second_max);
        prop_assert_eq!(after.len(), expected_len);
        prop_assert_eq!(after, &before[..expected_len]);
    }
}
