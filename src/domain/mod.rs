//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization
//! and thiserror for the error taxonomy).

mod entity;
mod todo;

pub use entity::{DomainError, DomainResult, Entity};
pub use todo::{Todo, TodoPage, TodoPatch};
