//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::SharedApi;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Configured todo service transport
    pub api: SharedApi,
}

impl AppContext {
    pub fn new(api: SharedApi) -> Self {
        Self { api }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
