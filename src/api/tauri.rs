//! Tauri IPC Transport
//!
//! Frontend bindings to the backend's todo commands.

use async_trait::async_trait;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{ApiError, ApiResult, TodoApi};
use crate::models::{Todo, TodoId, TodoStatus};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct ListTodosArgs<'a> {
    statuses: &'a [TodoStatus],
}

#[derive(Serialize)]
struct UpdateStatusArgs<'a> {
    #[serde(rename = "todoId")]
    todo_id: &'a TodoId,
    status: TodoStatus,
}

#[derive(Serialize)]
struct TodoIdArgs<'a> {
    #[serde(rename = "todoId")]
    todo_id: &'a TodoId,
}

/// Todo service reached through `window.__TAURI__.core.invoke`
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriApi;

async fn call<A: Serialize>(cmd: &str, args: &A) -> ApiResult<JsValue> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| ApiError::Encode(e.to_string()))?;
    invoke(cmd, js_args).await.map_err(|e| ApiError::Transport(rejection_message(&e)))
}

/// Tauri rejects with either a plain string or an Error object
fn rejection_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}

#[async_trait(?Send)]
impl TodoApi for TauriApi {
    async fn list_todos(&self, statuses: &[TodoStatus]) -> ApiResult<Vec<Todo>> {
        let result = call("list_todos", &ListTodosArgs { statuses }).await?;
        serde_wasm_bindgen::from_value(result).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn update_todo_status(&self, id: &TodoId, status: TodoStatus) -> ApiResult<()> {
        call("update_todo_status", &UpdateStatusArgs { todo_id: id, status }).await?;
        Ok(())
    }

    async fn delete_todo(&self, id: &TodoId) -> ApiResult<()> {
        call("delete_todo", &TodoIdArgs { todo_id: id }).await?;
        Ok(())
    }
}
