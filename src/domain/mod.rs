//! Domain Layer
//!
//! Todo entity and the core abstractions shared by storage and store.

mod entity;
mod todo;

pub use entity::{DomainError, DomainResult, Entity};
pub use todo::{Todo, TodoId, TodoPatch, DEFAULT_CONTENT};
