//! Domain types for the todo service.
//!
//! Nothing in this crate performs I/O; persistence lives in `todo-db` and
//! the HTTP surface in `todo-api`.

pub mod error;
pub mod todo;
pub mod types;
