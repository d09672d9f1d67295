//! Todo List Operations
//!
//! The view's read and mutation intents against the remote service.
//! None of these touch local list state: the caller reloads after a
//! successful mutation and renders whatever the service returns.

use std::collections::{HashMap, HashSet};
use std::fmt;

use thiserror::Error;

use crate::api::{ApiError, TodoApi};
use crate::models::{Filter, Todo, TodoId, TodoStatus};

/// Which user-facing operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Toggle,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Load => "load todos",
            Operation::Toggle => "update todo",
            Operation::Delete => "delete todo",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Could not {op}: {source}")]
pub struct OperationError {
    pub op: Operation,
    #[source]
    pub source: ApiError,
}

impl OperationError {
    fn new(op: Operation, source: ApiError) -> Self {
        Self { op, source }
    }
}

pub type OpResult<T> = Result<T, OperationError>;

/// Fetch the todos for `filter`.
///
/// Records outside the filter and repeated ids are dropped so the result is
/// always a keyed subset of what the filter asks for.
pub async fn load_todos(api: &dyn TodoApi, filter: Filter) -> OpResult<Vec<Todo>> {
    let fetched = api
        .list_todos(filter.statuses())
        .await
        .map_err(|e| OperationError::new(Operation::Load, e))?;
    log::debug!("[LOAD] {:?}: {} todos", filter, fetched.len());
    Ok(sanitize(fetched, filter))
}

fn sanitize(todos: Vec<Todo>, filter: Filter) -> Vec<Todo> {
    let mut seen = HashSet::new();
    todos
        .into_iter()
        .filter(|todo| {
            if !filter.admits(todo.status) {
                log::warn!("[LOAD] Dropping todo {} with status {:?} outside {:?}", todo.id, todo.status, filter);
                return false;
            }
            if !seen.insert(todo.id.clone()) {
                log::warn!("[LOAD] Dropping duplicate todo id {}", todo.id);
                return false;
            }
            true
        })
        .collect()
}

/// Todos from the last fetch that the active tab admits.
///
/// Right after a tab switch the last fetch may still belong to the previous tab.
pub fn visible_todos(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    todos.iter().filter(|t| filter.admits(t.status)).cloned().collect()
}

/// Ask the service to flip `todo`'s status; returns the requested status
pub async fn toggle_status(api: &dyn TodoApi, todo: &Todo) -> OpResult<TodoStatus> {
    let next = todo.status.toggled();
    log::info!("[TOGGLE] {} {:?} -> {:?}", todo.id, todo.status, next);
    api.update_todo_status(&todo.id, next)
        .await
        .map_err(|e| OperationError::new(Operation::Toggle, e))?;
    Ok(next)
}

/// Ask the service to delete `id`
pub async fn delete_todo(api: &dyn TodoApi, id: &TodoId) -> OpResult<()> {
    log::info!("[DELETE] {}", id);
    api.delete_todo(id)
        .await
        .map_err(|e| OperationError::new(Operation::Delete, e))
}

/// Whether a list response issued for `(tab, version)` was overtaken by a
/// newer query before it landed
pub fn is_superseded(issued: (Filter, u32), current: (Filter, u32)) -> bool {
    issued != current
}

/// Ids with a mutation in flight.
///
/// An id stays claimed after its mutation succeeds until a list reload at or
/// after `reload_version` is applied, so the stale row cannot be acted on twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InFlight(HashMap<TodoId, Option<u32>>);

impl InFlight {
    /// Claim `id`; false if a mutation for it is already running or awaiting its reload
    pub fn begin(&mut self, id: &TodoId) -> bool {
        if self.0.contains_key(id) {
            return false;
        }
        self.0.insert(id.clone(), None);
        true
    }

    /// The mutation succeeded; hold `id` until the list for `reload_version` lands
    pub fn await_reload(&mut self, id: &TodoId, reload_version: u32) {
        if let Some(slot) = self.0.get_mut(id) {
            *slot = Some(reload_version);
        }
    }

    /// The mutation failed; nothing to wait for
    pub fn finish(&mut self, id: &TodoId) {
        self.0.remove(id);
    }

    /// A list fetched for `version` was applied; release ids waiting on it or earlier
    pub fn reloaded(&mut self, version: u32) {
        self.0.retain(|_, waiting| !matches!(waiting, Some(v) if *v <= version));
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.0.contains_key(id)
    }
}
