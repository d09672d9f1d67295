//! Remote Todo Service
//!
//! The `TodoApi` trait is the only way the view reaches the service.
//! Two transports implement it: Tauri IPC and HTTP/JSON.

mod http;
mod tauri;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{ApiConfig, Backend};
use crate::models::{Todo, TodoId, TodoStatus};

pub use http::HttpApi;
pub use tauri::TauriApi;

/// Transport-level failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("service responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("could not encode arguments: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Remote todo service contract
///
/// Futures are not `Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait TodoApi: Send + Sync {
    /// List todos whose status is in `statuses`, in service order
    async fn list_todos(&self, statuses: &[TodoStatus]) -> ApiResult<Vec<Todo>>;

    /// Set a todo's status
    async fn update_todo_status(&self, id: &TodoId, status: TodoStatus) -> ApiResult<()>;

    /// Delete a todo
    async fn delete_todo(&self, id: &TodoId) -> ApiResult<()>;
}

/// Shared handle to the configured transport
pub type SharedApi = Arc<dyn TodoApi>;

/// Build the transport selected by `config`
pub fn connect(config: &ApiConfig) -> SharedApi {
    match &config.backend {
        Backend::Tauri => {
            log::info!("[API] Using Tauri IPC transport");
            Arc::new(TauriApi)
        }
        Backend::Http { base_url } => {
            log::info!("[API] Using HTTP transport at {}", base_url);
            Arc::new(HttpApi::new(base_url.clone()))
        }
    }
}
