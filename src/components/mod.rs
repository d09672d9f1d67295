//! UI Components
//!
//! Leptos components for the todo list view.

mod error_banner;
mod filter_tabs;
mod icons;
mod todo_list_view;
mod todo_row;

pub use error_banner::ErrorBanner;
pub use filter_tabs::FilterTabs;
pub use icons::{CheckIcon, TrashIcon};
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
