//! Storage Layer
//!
//! Durable key-value storage and the repository that persists todos into it.

mod traits;
mod memory;
mod web;
mod local_repo;


pub use traits::{KeyValueStorage, Repository};
pub use memory::MemoryStorage;
pub use web::WebStorage;
pub use local_repo::{LocalRepository, DEFAULT_NAMESPACE};
