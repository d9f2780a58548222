//! Remote Collection - Core Trait
//!
//! Defines the abstract interface for the externally owned paginated
//! collection. Implementations can use HTTP, in-memory fixtures, etc.

use async_trait::async_trait;

use crate::domain::{DomainResult, Todo, TodoPatch};

/// The remote paginated to-do collection
///
/// Pages are addressed by 1-based page number and page size. The collection
/// accepts writes but is immutable in practice; update/delete are
/// best-effort passthrough.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch the entire collection (used to discover the total count)
    async fn fetch_all(&self) -> DomainResult<Vec<Todo>>;

    /// Fetch one page; may return fewer than `limit` items at the end of
    /// the collection
    async fn fetch_page(&self, page: usize, limit: usize) -> DomainResult<Vec<Todo>>;

    /// Fetch a single todo; `None` when the collection does not know the id
    async fn fetch_by_id(&self, id: u32) -> DomainResult<Option<Todo>>;

    /// Apply a partial update to a remote todo
    async fn patch(&self, id: u32, patch: &TodoPatch) -> DomainResult<Todo>;

    /// Delete a remote todo
    async fn delete(&self, id: u32) -> DomainResult<()>;
}
