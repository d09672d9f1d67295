//! Todo List View Component
//!
//! Filter tabs plus the animated list of todos for the active tab.
//! Every successful mutation bumps the reload version instead of editing
//! local state, so what is shown is always the service's answer.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, is_superseded, visible_todos};
use crate::components::{FilterTabs, TodoRow};
use crate::context::use_app_context;
use crate::models::{Todo, TodoId};
use crate::store::{
    store_apply_todos, store_begin_mutation, store_load_failed, store_mutation_failed,
    store_mutation_succeeded, store_report_error, use_todo_store, TodoListStateStoreFields,
};
use crate::transition::{animating, reconcile, settle, AnimatedRow, Phase, TRANSITION_MS};

/// Todo list with status tabs
#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    // Load todos when the tab changes or after a successful mutation
    let api = ctx.api.clone();
    Effect::new(move |_| {
        let filter = store.active_tab().get();
        let version = store.reload_version().get();
        let api = api.clone();
        spawn_local(async move {
            match actions::load_todos(api.as_ref(), filter).await {
                Ok(todos) => {
                    let current = (store.active_tab().get_untracked(), store.reload_version().get_untracked());
                    if is_superseded((filter, version), current) {
                        log::debug!("[LIST] Discarding stale {:?} response (version {})", filter, version);
                        return;
                    }
                    log::debug!("[LIST] Showing {} todos for {:?}", todos.len(), filter);
                    store_apply_todos(&store, todos, version);
                }
                Err(e) => store_load_failed(&store, version, e),
            }
        });
    });

    let api = ctx.api.clone();
    let on_toggle = Callback::new(move |todo: Todo| {
        if !store_begin_mutation(&store, &todo.id) {
            log::debug!("[LIST] Mutation of {} already in flight", todo.id);
            return;
        }
        let api = api.clone();
        spawn_local(async move {
            match actions::toggle_status(api.as_ref(), &todo).await {
                Ok(_) => store_mutation_succeeded(&store, &todo.id),
                Err(e) => {
                    store_mutation_failed(&store, &todo.id);
                    store_report_error(&store, e);
                }
            }
        });
    });

    let api = ctx.api.clone();
    let on_delete = Callback::new(move |id: TodoId| {
        if !store_begin_mutation(&store, &id) {
            log::debug!("[LIST] Mutation of {} already in flight", id);
            return;
        }
        let api = api.clone();
        spawn_local(async move {
            match actions::delete_todo(api.as_ref(), &id).await {
                Ok(()) => store_mutation_succeeded(&store, &id),
                Err(e) => {
                    store_mutation_failed(&store, &id);
                    store_report_error(&store, e);
                }
            }
        });
    });

    let visible = Memo::new(move |_| {
        let filter = store.active_tab().get();
        store.todos().with(|todos| visible_todos(todos, filter))
    });

    // Rendered rows, including ones still animating out
    let (rows, set_rows) = signal(Vec::<AnimatedRow>::new());
    Effect::new(move |_| {
        let next = visible.get();
        let reconciled = reconcile(&rows.get_untracked(), &next);
        let batch = animating(&reconciled);
        set_rows.set(reconciled);
        if !batch.is_empty() {
            spawn_local(async move {
                TimeoutFuture::new(TRANSITION_MS).await;
                set_rows.update(|rows| *rows = settle(rows, &batch));
            });
        }
    });

    let is_empty = move || store.loaded().get() && visible.with(|v| v.is_empty());

    view! {
        <section class="todo-list-view">
            <FilterTabs />

            <ul id="todo-list" class="todo-list" role="tabpanel">
                <For
                    each=move || rows.get()
                    key=|row| (row.todo.id.clone(), row.phase == Phase::Leaving)
                    children=move |row: AnimatedRow| {
                        // Status and phase changes flow into the live node
                        let id = row.todo.id.clone();
                        let leaving = row.phase == Phase::Leaving;
                        let current = Memo::new(move |_| {
                            rows.with(|rows| {
                                rows.iter()
                                    .find(|r| r.todo.id == id && (r.phase == Phase::Leaving) == leaving)
                                    .cloned()
                            })
                            .unwrap_or_else(|| row.clone())
                        });
                        view! {
                            <TodoRow row=current on_toggle=on_toggle on_delete=on_delete />
                        }
                    }
                />
            </ul>

            <Show when=is_empty>
                <p class="empty-state">"No todos"</p>
            </Show>
        </section>
    }
}
