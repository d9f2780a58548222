//! Paginated Merge Accessor
//!
//! Presents locally created todos as a virtual prefix in front of the
//! remote collection. Callers see one paginated source; the accessor
//! translates page requests into the correct remote sub-range and never
//! fetches more remote page data than the request needs.

use std::sync::Arc;

use crate::config::BridgeConfig;
use crate::domain::{DomainError, DomainResult, Todo, TodoPage, TodoPatch};
use crate::remote::{HttpRemoteSource, RemoteSource};
use crate::storage::{FileStorage, LocalTodoStore};


/// Data-access facade over the local store and the remote collection
///
/// Stateless between calls apart from the store contents; every operation
/// self-initializes the store on first use.
pub struct TodoApi {
    store: LocalTodoStore,
    remote: Arc<dyn RemoteSource>,
}

impl TodoApi {
    pub fn new(store: LocalTodoStore, remote: Arc<dyn RemoteSource>) -> Self {
        Self { store, remote }
    }

    /// File-backed store plus HTTP remote, wired from configuration
    pub fn from_config(config: &BridgeConfig) -> Self {
        let storage = Arc::new(FileStorage::new(&config.data_dir));
        Self::new(
            LocalTodoStore::new(storage),
            Arc::new(HttpRemoteSource::new(&config.base_url)),
        )
    }

    /// Fetch one virtual page: local todos first, then remote
    ///
    /// `page` is 1-based. The full remote fetch only discovers the total;
    /// page data beyond the local prefix comes from a single targeted
    /// remote page request, skipped entirely when the page is fully local.
    pub async fn get_todos(&self, page: usize, limit: usize) -> DomainResult<TodoPage> {
        if page == 0 {
            return Err(DomainError::InvalidInput("page must be >= 1".to_string()));
        }
        if limit == 0 {
            return Err(DomainError::InvalidInput("limit must be > 0".to_string()));
        }

        let local_count = self.store.count().await;
        let remote_total = self.remote.fetch_all().await?.len();
        let total = local_count + remote_total;

        let start = (page - 1) * limit;
        let end = start + limit;

        let mut data = self.store.page_slice(start, end).await;

        let needed = limit - data.len();
        if needed > 0 {
            // Map the global window's remote-relative start onto the remote
            // source's page/offset addressing. The fetch limit is inflated
            // by the offset so that, after discarding the first
            // `remote_offset` entries, `needed` items remain available.
            let remote_start = start.saturating_sub(local_count);
            let remote_page = remote_start / limit + 1;
            let remote_offset = remote_start % limit;

            let fetched = self
                .remote
                .fetch_page(remote_page, limit + remote_offset)
                .await?;
            data.extend(fetched.into_iter().skip(remote_offset).take(needed));
        }

        Ok(TodoPage {
            data,
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit),
        })
    }

    /// Look up one todo, local store first, then the remote collection
    pub async fn get_todo(&self, id: u32) -> DomainResult<Todo> {
        if let Some(todo) = self.store.find_by_id(id).await {
            return Ok(todo);
        }
        self.remote
            .fetch_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("todo {}", id)))
    }

    /// Create a local todo
    pub async fn create_todo(
        &self,
        title: String,
        completed: bool,
        user_id: u32,
    ) -> DomainResult<Todo> {
        if title.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "title must not be empty".to_string(),
            ));
        }
        Ok(self.store.create(title, completed, user_id).await)
    }

    /// Update a todo: local in place, otherwise remote PATCH passthrough
    pub async fn update_todo(&self, id: u32, patch: TodoPatch) -> DomainResult<Todo> {
        match self.store.update(id, &patch).await {
            Ok(todo) => Ok(todo),
            Err(DomainError::NotFound(_)) => self.remote.patch(id, &patch).await,
            Err(e) => Err(e),
        }
    }

    /// Delete a todo: local if present, otherwise remote DELETE passthrough
    pub async fn delete_todo(&self, id: u32) -> DomainResult<()> {
        match self.store.delete(id).await {
            Ok(()) => Ok(()),
            Err(DomainError::NotFound(_)) => self.remote.delete(id).await,
            Err(e) => Err(e),
        }
    }
}
