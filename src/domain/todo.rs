//! Todo Entity
//!
//! Represents a single to-do item. The field names serialize in camelCase
//! so the struct round-trips the remote collection's JSON unchanged.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A to-do item, local or remote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier (caller-visible; local ids never collide with remote ones)
    pub id: u32,
    /// Item text content
    pub title: String,
    /// Completion status
    pub completed: bool,
    /// Owning user (not round-tripped faithfully by the remote demo API)
    #[serde(default)]
    pub user_id: u32,
}

impl Todo {
    pub fn new(id: u32, title: String, completed: bool, user_id: u32) -> Self {
        Self {
            id,
            title,
            completed,
            user_id,
        }
    }
}

impl Entity for Todo {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Partial update for a [`Todo`]
///
/// Absent fields are left untouched locally and omitted from remote PATCH
/// bodies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
}

impl TodoPatch {
    /// Patch that only flips the completion flag
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    /// Merge the present fields into an existing todo
    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(title) = &self.title {
            todo.title = title.clone();
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
        if let Some(user_id) = self.user_id {
            todo.user_id = user_id;
        }
    }
}

/// One page of merged results
///
/// Indistinguishable to the caller from a single paginated source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPage {
    pub data: Vec<Todo>,
    /// Combined size of the local and remote collections
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}
