//! Row structs matching database tables.

pub mod todo;
