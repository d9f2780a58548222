//! Storage Layer
//!
//! Persisted key-value slots and the local todo store built on them.

mod kv;
mod local_store;

#[cfg(test)]
mod tests;

pub use kv::{FileStorage, KeyValueStorage, MemoryStorage};
pub use local_store::{LocalTodoStore, LOCAL_TODOS_KEY, NEXT_ID_KEY};
