//! Todo Row Component
//!
//! A single todo: completion checkbox, label and delete button.
//! The DOM node lives as long as the todo id does; status changes update it in place.

use leptos::prelude::*;

use crate::components::{CheckIcon, TrashIcon};
use crate::models::Todo;
use crate::store::{use_todo_store, TodoListStateStoreFields};
use crate::transition::{AnimatedRow, Phase};

/// Accessible name of the icon-only delete button
pub const DELETE_LABEL: &str = "Delete todo";

/// What a row shows for a todo
#[derive(Debug, Clone, PartialEq)]
pub struct RowModel {
    pub checked: bool,
    /// Checkbox `id`
    pub input_id: String,
    /// Label `for`; always the checkbox id
    pub label_for: String,
    /// Label classes; strike-through comes from `.completed`
    pub body_class: &'static str,
    pub body: String,
}

impl RowModel {
    pub fn new(todo: &Todo) -> Self {
        let dom_id = todo.id.dom_id();
        Self {
            checked: todo.is_completed(),
            input_id: dom_id.clone(),
            label_for: dom_id,
            body_class: if todo.is_completed() { "todo-body completed" } else { "todo-body" },
            body: todo.body.clone(),
        }
    }
}

/// A single todo row
#[component]
pub fn TodoRow(
    #[prop(into)] row: Signal<AnimatedRow>,
    #[prop(into)] on_toggle: Callback<Todo>,
    #[prop(into)] on_delete: Callback<crate::models::TodoId>,
) -> impl IntoView {
    let store = use_todo_store();

    let initial = row.get_untracked();
    let leaving = initial.phase == Phase::Leaving;
    let ids = RowModel::new(&initial.todo);
    let model = Memo::new(move |_| row.with(|r| RowModel::new(&r.todo)));

    let busy = {
        let id = initial.todo.id.clone();
        Signal::derive(move || leaving || store.in_flight().with(|f| f.contains(&id)))
    };

    let delete_id = initial.todo.id.clone();

    view! {
        <li class=move || row.with(|r| r.phase.class()) aria-hidden=leaving.then_some("true")>
            <input
                type="checkbox"
                class="todo-checkbox"
                id=ids.input_id
                prop:checked=move || model.with(|m| m.checked)
                disabled=move || busy.get()
                on:change=move |ev| {
                    // Keep showing the confirmed status until the reload lands
                    let input = event_target::<web_sys::HtmlInputElement>(&ev);
                    input.set_checked(model.with_untracked(|m| m.checked));
                    on_toggle.run(row.with_untracked(|r| r.todo.clone()));
                }
            />
            <label for=ids.label_for class=move || model.with(|m| m.body_class)>
                <span class="todo-check" aria-hidden="true">
                    {move || model.with(|m| m.checked).then(|| view! { <CheckIcon /> })}
                </span>
                <span class="todo-text">{move || model.with(|m| m.body.clone())}</span>
            </label>
            <button
                type="button"
                class="delete-btn"
                aria-label=DELETE_LABEL
                title=DELETE_LABEL
                disabled=move || busy.get()
                on:click=move |_| on_delete.run(delete_id.clone())
            >
                <TrashIcon />
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TodoId, TodoStatus};

    fn make_todo(status: TodoStatus) -> Todo {
        Todo {
            id: TodoId::Int(1),
            body: "Buy milk".to_string(),
            status,
        }
    }

    #[test]
    fn test_pending_row_is_unchecked_and_plain() {
        let model = RowModel::new(&make_todo(TodoStatus::Pending));
        assert!(!model.checked);
        assert_eq!(model.body_class, "todo-body");
        assert_eq!(model.body, "Buy milk");
    }

    #[test]
    fn test_completed_row_is_checked_and_struck() {
        let model = RowModel::new(&make_todo(TodoStatus::Completed));
        assert!(model.checked);
        assert_eq!(model.body_class, "todo-body completed");
    }

    #[test]
    fn test_label_points_at_checkbox() {
        for id in [TodoId::Int(42), TodoId::Text("a b%".to_string())] {
            let todo = Todo { id: id.clone(), body: "x".to_string(), status: TodoStatus::Pending };
            let model = RowModel::new(&todo);
            assert_eq!(model.label_for, model.input_id);
            assert_eq!(model.input_id, id.dom_id());
        }
    }

    #[test]
    fn test_toggle_keeps_dom_identity() {
        // ids are what the row node is keyed on; they must not move with status
        let pending = RowModel::new(&make_todo(TodoStatus::Pending));
        let completed = RowModel::new(&make_todo(TodoStatus::Completed));
        assert_eq!(pending.input_id, completed.input_id);
        assert_ne!(pending.checked, completed.checked);
    }

    #[test]
    fn test_delete_button_name() {
        assert_eq!(DELETE_LABEL, "Delete todo");
    }
}
