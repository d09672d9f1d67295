//! Todo List Frontend App
//!
//! Resolves the service transport, provides shared state and mounts the list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api;
use crate::components::{ErrorBanner, TodoListView};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::store::TodoListState;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_document();

    // Provide context to all children
    provide_context(AppContext::new(api::connect(&config)));
    provide_context(Store::new(TodoListState::default()));

    view! {
        <main class="app-layout">
            <h1>"Todos"</h1>
            <ErrorBanner />
            <TodoListView />
        </main>
    }
}
