//! Error Banner Component
//!
//! Shows the most recent failed operation until dismissed.

use leptos::prelude::*;

use crate::store::{use_todo_store, TodoListStateStoreFields};

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_todo_store();

    view! {
        {move || store.last_error().get().map(|message| view! {
            <div class="error-banner" role="alert">
                <span class="error-text">{message}</span>
                <button
                    type="button"
                    class="dismiss-btn"
                    aria-label="Dismiss error"
                    on:click=move |_| store.last_error().set(None)
                >
                    "×"
                </button>
            </div>
        })}
    }
}
