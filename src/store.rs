//! Todo List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions::InFlight;
use crate::models::{Filter, Todo, TodoId};

/// View state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoListState {
    /// Last successfully fetched todos for the active tab
    pub todos: Vec<Todo>,
    /// Selected tab
    pub active_tab: Filter,
    /// Whether any fetch has succeeded yet
    pub loaded: bool,
    /// Todos with a mutation in flight
    pub in_flight: InFlight,
    /// Bumped after each successful mutation to re-run the list query
    pub reload_version: u32,
    /// Most recent failure, shown by the error banner
    pub last_error: Option<String>,
}

/// Type alias for the store
pub type TodoStore = Store<TodoListState>;

/// Get the store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Select a tab; re-selecting the active tab does nothing
pub fn store_select_tab(store: &TodoStore, filter: Filter) {
    if store.active_tab().get_untracked() != filter {
        log::debug!("[STORE] Tab -> {:?}", filter);
        store.active_tab().set(filter);
    }
}

/// Re-run the list query with the current tab
pub fn store_reload(store: &TodoStore) {
    store.reload_version().update(|v| *v = v.wrapping_add(1));
}

/// Claim `id` for a mutation; false if one is already in flight
pub fn store_begin_mutation(store: &TodoStore, id: &TodoId) -> bool {
    store.in_flight().try_update(|f| f.begin(id)).unwrap_or(false)
}

/// `id`'s mutation succeeded: reload, and keep it claimed until that reload lands
pub fn store_mutation_succeeded(store: &TodoStore, id: &TodoId) {
    store_reload(store);
    let version = store.reload_version().get_untracked();
    store.in_flight().update(|f| f.await_reload(id, version));
}

/// `id`'s mutation failed; release it
pub fn store_mutation_failed(store: &TodoStore, id: &TodoId) {
    store.in_flight().update(|f| f.finish(id));
}

/// Apply a list fetched for `version` and release mutations waiting on it
pub fn store_apply_todos(store: &TodoStore, todos: Vec<Todo>, version: u32) {
    store.todos().set(todos);
    store.loaded().set(true);
    store.in_flight().update(|f| f.reloaded(version));
}

/// The list fetch for `version` failed; the previous list stays but waiting mutations are released
pub fn store_load_failed(store: &TodoStore, version: u32, err: impl std::fmt::Display) {
    store.in_flight().update(|f| f.reloaded(version));
    store_report_error(store, err);
}

/// Record a failure for the error banner
pub fn store_report_error(store: &TodoStore, err: impl std::fmt::Display) {
    let message = err.to_string();
    log::error!("{}", message);
    store.last_error().set(Some(message));
}
