//! Todo Entity
//!
//! A single task record: text content, an order key and a completion flag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::Entity;

/// Content used when a todo is created without any text
pub const DEFAULT_CONTENT: &str = "empty todo...";

/// Store-assigned unique identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for TodoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A todo item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Item text
    pub content: String,
    /// Sort key, assigned in increasing order
    pub order: u64,
    /// Completion status
    #[serde(default)]
    pub done: bool,
}

impl Todo {
    /// Build a fresh todo from a patch, filling unset fields with defaults
    pub fn new(id: TodoId, order: u64, patch: TodoPatch) -> Self {
        Self {
            id,
            content: patch.content.unwrap_or_else(|| DEFAULT_CONTENT.to_string()),
            order,
            done: patch.done.unwrap_or(false),
        }
    }

    pub fn toggle(&mut self) {
        self.done = !self.done;
    }
}

impl Entity for Todo {
    type Id = TodoId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Partial attribute set merged into a todo by `save`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    pub content: Option<String>,
    pub done: Option<bool>,
}

impl TodoPatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            done: None,
        }
    }

    pub fn done(done: bool) -> Self {
        Self {
            content: None,
            done: Some(done),
        }
    }

    /// Merge the set fields into `todo`
    pub fn apply(&self, todo: &mut Todo) {
        if let Some(content) = &self.content {
            todo.content = content.clone();
        }
        if let Some(done) = self.done {
            todo.done = done;
        }
    }
}
