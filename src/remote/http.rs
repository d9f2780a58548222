//! HTTP Remote Source
//!
//! reqwest-backed implementation speaking the demo API's query dialect
//! (`?_page=&_limit=`). Transport errors are logged here and re-signaled as
//! a generic fetch failure; nothing is retried.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::domain::{DomainError, DomainResult, Todo, TodoPatch};
use super::source::RemoteSource;

/// Remote source over the demo REST API
pub struct HttpRemoteSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRemoteSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn todo_url(&self, id: u32) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }

    fn fetch_error(context: &str, e: impl std::fmt::Display) -> DomainError {
        log::error!("{}: {}", context, e);
        DomainError::Fetch("failed to reach remote collection".to_string())
    }
}

#[async_trait]
impl RemoteSource for HttpRemoteSource {
    async fn fetch_all(&self) -> DomainResult<Vec<Todo>> {
        let response = self
            .client
            .get(self.todos_url())
            .send()
            .await
            .map_err(|e| Self::fetch_error("full fetch failed", e))?;
        if !response.status().is_success() {
            return Err(Self::fetch_error("full fetch failed", response.status()));
        }
        response
            .json()
            .await
            .map_err(|e| Self::fetch_error("full fetch returned bad payload", e))
    }

    async fn fetch_page(&self, page: usize, limit: usize) -> DomainResult<Vec<Todo>> {
        let url = format!("{}?_page={}&_limit={}", self.todos_url(), page, limit);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::fetch_error("page fetch failed", e))?;
        if !response.status().is_success() {
            return Err(Self::fetch_error("page fetch failed", response.status()));
        }
        response
            .json()
            .await
            .map_err(|e| Self::fetch_error("page fetch returned bad payload", e))
    }

    async fn fetch_by_id(&self, id: u32) -> DomainResult<Option<Todo>> {
        let response = self
            .client
            .get(self.todo_url(id))
            .send()
            .await
            .map_err(|e| Self::fetch_error("todo fetch failed", e))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::fetch_error("todo fetch failed", response.status()));
        }
        let todo = response
            .json()
            .await
            .map_err(|e| Self::fetch_error("todo fetch returned bad payload", e))?;
        Ok(Some(todo))
    }

    async fn patch(&self, id: u32, patch: &TodoPatch) -> DomainResult<Todo> {
        let response = self
            .client
            .patch(self.todo_url(id))
            .json(patch)
            .send()
            .await
            .map_err(|e| Self::fetch_error("remote update failed", e))?;
        if !response.status().is_success() {
            return Err(Self::fetch_error("remote update failed", response.status()));
        }
        response
            .json()
            .await
            .map_err(|e| Self::fetch_error("remote update returned bad payload", e))
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let response = self
            .client
            .delete(self.todo_url(id))
            .send()
            .await
            .map_err(|e| Self::fetch_error("remote delete failed", e))?;
        if !response.status().is_success() {
            return Err(Self::fetch_error("remote delete failed", response.status()));
        }
        Ok(())
    }
}
