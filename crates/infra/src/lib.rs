//! Infrastructure layer: repositories over Postgres and in-memory stores.

pub mod memory;
pub mod postgres;
pub mod repository;

pub use memory::{InMemoryRepository, InMemoryUserRepository};
pub use repository::{RepoError, RepoResult, Repository, UserRepository};
