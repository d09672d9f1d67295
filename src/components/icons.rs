//! Icon Glyphs
//!
//! Inline SVG icons. Decorative only; the surrounding control carries the name.

use leptos::prelude::*;

/// Check mark drawn inside the custom checkbox
#[component]
pub fn CheckIcon() -> impl IntoView {
    view! {
        <svg class="icon icon-check" viewBox="0 0 24 24" width="16" height="16" aria-hidden="true" focusable="false">
            <path d="M20 6 9 17l-5-5" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}

/// Trash can for the delete button
#[component]
pub fn TrashIcon() -> impl IntoView {
    view! {
        <svg class="icon icon-trash" viewBox="0 0 24 24" width="16" height="16" aria-hidden="true" focusable="false">
            <path d="M3 6h18M8 6V4h8v2M19 6l-1 14H6L5 6M10 11v6M14 11v6" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}
