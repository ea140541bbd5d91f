//! View-State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. Tasks are a
//! snapshot of the chain: refreshes replace the whole vector, confirmed
//! mutations go through the helpers below, never in place from components.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;

/// Whole view state for the connected account
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Whether the connected account owns a list resource
    pub account_has_list: bool,
    /// Tasks in on-chain id order
    pub tasks: Vec<Task>,
    /// Text of the not-yet-submitted task
    pub new_task_draft: String,
    /// A transaction is in flight; the UI blocks behind the spinner
    pub transaction_pending: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Snapshot Helpers
// ========================

/// Next task id to assign locally: one past the last known id, or 1.
pub fn next_task_id(tasks: &[Task]) -> u64 {
    tasks
        .last()
        .and_then(|task| task.task_id.parse::<u64>().ok())
        .map(|id| id + 1)
        .unwrap_or(1)
}

/// Set one task's completed flag. Returns false when the id is unknown.
pub fn mark_completed(tasks: &mut [Task], task_id: &str, completed: bool) -> bool {
    match tasks.iter_mut().find(|task| task.task_id == task_id) {
        Some(task) => {
            task.completed = completed;
            true
        }
        None => false,
    }
}

// ========================
// Store Operations
// ========================

/// Replace the task snapshot wholesale (account switch, list probe)
pub fn store_replace_tasks(store: &AppStore, tasks: Vec<Task>) {
    *store.tasks().write() = tasks;
}

/// Append a freshly confirmed task
pub fn store_append_task(store: &AppStore, task: Task) {
    store.tasks().write().push(task);
}

/// Apply a confirmed completion
pub fn store_mark_completed(store: &AppStore, task_id: &str, completed: bool) {
    mark_completed(&mut store.tasks().write(), task_id, completed);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(task_id: u64, content: &str) -> Task {
        Task {
            address: "0x1a2b3c".to_string(),
            completed: false,
            content: content.to_string(),
            task_id: task_id.to_string(),
        }
    }

    #[test]
    fn test_first_task_id_is_one() {
        assert_eq!(next_task_id(&[]), 1);
    }

    #[test]
    fn test_task_ids_increase_by_one() {
        let mut tasks = Vec::new();
        for expected in 1..=4u64 {
            let id = next_task_id(&tasks);
            assert_eq!(id, expected);
            tasks.push(make_task(id, "task"));
        }
    }

    #[test]
    fn test_next_id_follows_last_known_task() {
        // Ids come from the chain, so the list may not start at 1
        let tasks = vec![make_task(41, "a"), make_task(42, "b")];
        assert_eq!(next_task_id(&tasks), 43);
    }

    #[test]
    fn test_mark_completed() {
        let mut tasks = vec![make_task(1, "a"), make_task(2, "b")];
        assert!(mark_completed(&mut tasks, "2", true));
        assert!(!tasks[0].completed);
        assert!(tasks[1].completed);
    }

    #[test]
    fn test_mark_completed_unknown_id() {
        let mut tasks = vec![make_task(1, "a")];
        assert!(!mark_completed(&mut tasks, "9", true));
        assert!(!tasks[0].completed);
    }
}
