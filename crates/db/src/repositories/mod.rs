//! Query functions, one zero-sized repo struct per table.

mod todo_repo;

pub use todo_repo::TodoRepo;
