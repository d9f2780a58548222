//! Local Todo Store
//!
//! Holds and persists todos created by this client. The collection lives in
//! memory (newest-first) and is mirrored to two key-value slots on every
//! mutation; it is rehydrated from those slots once per process lifetime.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, Todo, TodoPatch};
use super::kv::KeyValueStorage;

/// Storage slot holding the serialized local todo list
pub const LOCAL_TODOS_KEY: &str = "local-todos";
/// Storage slot holding the serialized next-id counter
pub const NEXT_ID_KEY: &str = "next-id";

/// First id handed out locally. Sits above the remote demo collection's
/// 200 ids so local and remote ids never collide.
const FIRST_LOCAL_ID: u32 = 201;

struct StoreState {
    /// Newest-first
    todos: Vec<Todo>,
    next_id: u32,
    initialized: bool,
}

/// Persisted store for locally created todos
///
/// All operations, including the lazy first-use load, run under one async
/// mutex. That single-writer queue keeps `next_id` monotonic and ids unique
/// even when callers interleave across await points.
pub struct LocalTodoStore {
    storage: Arc<dyn KeyValueStorage>,
    state: Mutex<StoreState>,
}

impl LocalTodoStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            state: Mutex::new(StoreState {
                todos: Vec::new(),
                next_id: FIRST_LOCAL_ID,
                initialized: false,
            }),
        }
    }

    /// Load both slots on first use; no-op afterwards
    pub async fn initialize(&self) {
        let mut state = self.state.lock().await;
        self.load_locked(&mut state);
    }

    /// Create a todo with the next local id and persist both slots
    ///
    /// The new item is prepended so pages list newest first. Title
    /// validation is the caller's job; the store stays permissive.
    pub async fn create(&self, title: String, completed: bool, user_id: u32) -> Todo {
        let mut state = self.state.lock().await;
        self.load_locked(&mut state);

        let todo = Todo::new(state.next_id, title, completed, user_id);
        state.todos.insert(0, todo.clone());
        state.next_id += 1;

        self.persist_todos(&state);
        self.persist_next_id(&state);

        todo
    }

    /// Merge patch fields into a stored todo and persist the list
    pub async fn update(&self, id: u32, patch: &TodoPatch) -> DomainResult<Todo> {
        let mut state = self.state.lock().await;
        self.load_locked(&mut state);

        let todo = state
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("todo {}", id)))?;
        patch.apply_to(todo);
        let updated = todo.clone();

        self.persist_todos(&state);
        Ok(updated)
    }

    /// Remove a stored todo and persist the list
    pub async fn delete(&self, id: u32) -> DomainResult<()> {
        let mut state = self.state.lock().await;
        self.load_locked(&mut state);

        let before = state.todos.len();
        state.todos.retain(|todo| todo.id != id);
        if state.todos.len() == before {
            return Err(DomainError::NotFound(format!("todo {}", id)));
        }

        self.persist_todos(&state);
        Ok(())
    }

    /// Read-only lookup, no side effects beyond first-use load
    pub async fn find_by_id(&self, id: u32) -> Option<Todo> {
        let mut state = self.state.lock().await;
        self.load_locked(&mut state);
        state.todos.iter().find(|todo| todo.id == id).cloned()
    }

    /// Number of locally stored todos
    pub async fn count(&self) -> usize {
        let mut state = self.state.lock().await;
        self.load_locked(&mut state);
        state.todos.len()
    }

    /// Clone of the stored todos in `[start, end)`, clipped to the collection
    pub async fn page_slice(&self, start: usize, end: usize) -> Vec<Todo> {
        let mut state = self.state.lock().await;
        self.load_locked(&mut state);

        let len = state.todos.len();
        let start = start.min(len);
        let end = end.min(len);
        state.todos[start..end].to_vec()
    }

    fn load_locked(&self, state: &mut StoreState) {
        if state.initialized {
            return;
        }

        state.todos = match self.storage.read(LOCAL_TODOS_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
                log::error!("failed to parse stored todos, starting empty: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::error!("failed to read stored todos, starting empty: {}", e);
                Vec::new()
            }
        };

        state.next_id = match self.storage.read(NEXT_ID_KEY) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|e| {
                log::error!("failed to parse stored next id, using default: {}", e);
                FIRST_LOCAL_ID
            }),
            Ok(None) => FIRST_LOCAL_ID,
            Err(e) => {
                log::error!("failed to read stored next id, using default: {}", e);
                FIRST_LOCAL_ID
            }
        };

        state.initialized = true;
    }

    // Write failures are logged and swallowed; the in-memory mutation
    // stands. Accepted inconsistency window between memory and storage.
    fn persist_todos(&self, state: &StoreState) {
        match serde_json::to_string(&state.todos) {
            Ok(json) => {
                if let Err(e) = self.storage.write(LOCAL_TODOS_KEY, &json) {
                    log::error!("failed to persist local todos: {}", e);
                }
            }
            Err(e) => log::error!("failed to serialize local todos: {}", e),
        }
    }

    fn persist_next_id(&self, state: &StoreState) {
        if let Err(e) = self.storage.write(NEXT_ID_KEY, &state.next_id.to_string()) {
            log::error!("failed to persist next id: {}", e);
        }
    }
}
