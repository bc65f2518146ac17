//! Todos
//!
//! Single-list todo manager for the browser. Layered like this:
//! - domain: the Todo entity and errors
//! - storage: key-value storage and the todo repository
//! - store / events: ordered in-memory list with change notifications
//! - actions / view_model: gesture handling and render state
//! - app / components: Leptos views

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod domain;
pub mod events;
pub mod logger;
pub mod storage;
pub mod store;
pub mod view_model;
