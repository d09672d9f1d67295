//! HTTP Transport
//!
//! JSON client for a todo service exposed over REST.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;

use super::{ApiError, ApiResult, TodoApi};
use crate::models::{Todo, TodoId, TodoStatus};

/// Characters escaped in a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Serialize)]
struct StatusBody {
    status: TodoStatus,
}

/// Todo service reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn todo_url(&self, id: &TodoId) -> String {
        let segment = id.to_string();
        format!("{}/todos/{}", self.base_url, utf8_percent_encode(&segment, PATH_SEGMENT))
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

/// Turn a non-2xx response into `ApiError::Status`
async fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status: status.as_u16(), body })
}

#[async_trait(?Send)]
impl TodoApi for HttpApi {
    async fn list_todos(&self, statuses: &[TodoStatus]) -> ApiResult<Vec<Todo>> {
        let query: Vec<(&str, &str)> = statuses.iter().map(|s| ("status", s.as_str())).collect();
        let response = self
            .client
            .get(self.collection_url())
            .query(&query)
            .send()
            .await
            .map_err(transport)?;
        check(response)
            .await?
            .json::<Vec<Todo>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn update_todo_status(&self, id: &TodoId, status: TodoStatus) -> ApiResult<()> {
        let response = self
            .client
            .patch(self.todo_url(id))
            .json(&StatusBody { status })
            .send()
            .await
            .map_err(transport)?;
        check(response).await?;
        Ok(())
    }

    async fn delete_todo(&self, id: &TodoId) -> ApiResult<()> {
        let response = self
            .client
            .delete(self.todo_url(id))
            .send()
            .await
            .map_err(transport)?;
        check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_url_escapes_path_segment() {
        let api = HttpApi::new("http://localhost:3000/api");
        assert_eq!(api.collection_url(), "http://localhost:3000/api/todos");
        assert_eq!(api.todo_url(&TodoId::Int(42)), "http://localhost:3000/api/todos/42");
        assert_eq!(
            api.todo_url(&TodoId::Text("a/b c".to_string())),
            "http://localhost:3000/api/todos/a%2Fb%20c"
        );
    }

    #[test]
    fn test_status_body_shape() {
        let body = serde_json::to_value(StatusBody { status: TodoStatus::Completed }).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "completed" }));
    }
}
