//! Filter Tab Bar Component
//!
//! Tabs for switching the status filter of the todo list.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::{store_select_tab, use_todo_store, TodoListStateStoreFields};

/// Filter tab bar
#[component]
pub fn FilterTabs() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <div class="filter-tabs" role="tablist" aria-label="Filter todos">
            {Filter::TABS.iter().map(|&filter| {
                let is_active = move || store.active_tab().get() == filter;
                view! {
                    <button
                        type="button"
                        role="tab"
                        class=move || if is_active() { "filter-tab active" } else { "filter-tab" }
                        aria-selected=move || if is_active() { "true" } else { "false" }
                        aria-controls="todo-list"
                        on:click=move |_| store_select_tab(&store, filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
