//! Todo Bridge
//!
//! Data-access core for a to-do list manager backed by two sources: a
//! locally persisted item store and a remote paginated demo API. Consumers
//! talk to [`TodoApi`], which merges both into one virtual paginated
//! collection.
//!
//! Layered architecture:
//! - domain: Core entities and error taxonomy
//! - storage: Persisted key-value slots and the local todo store
//! - remote: Remote collection abstraction and HTTP implementation
//! - api: Paginated merge accessor tying both sources together

mod api;
mod config;
mod domain;
mod remote;
mod storage;

pub use api::TodoApi;
pub use config::BridgeConfig;
pub use domain::{DomainError, DomainResult, Entity, Todo, TodoPage, TodoPatch};
pub use remote::{HttpRemoteSource, RemoteSource};
pub use storage::{FileStorage, KeyValueStorage, LocalTodoStore, MemoryStorage};
