//! Storage contracts: one per-entity repository shape plus the user lookup.

use std::sync::Arc;

use thiserror::Error;

use stockdesk_core::{NewUser, Record, User, UserId};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("no ids left in {0}")]
    IdsExhausted(&'static str),
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Data mapper for one entity.
///
/// Every call is a single statement; nothing spans calls (no transactions, no
/// optimistic-concurrency tokens, last write wins).
#[async_trait::async_trait]
pub trait Repository<E: Record>: Send + Sync {
    /// All rows, ordered by id.
    async fn get_all(&self) -> RepoResult<Vec<E>>;

    async fn get_by_id(&self, id: E::Id) -> RepoResult<Option<E>>;

    /// Insert and return the store-assigned id.
    async fn create(&self, draft: E::Draft) -> RepoResult<E::Id>;

    /// Replace every field of row `id`. Returns `false` when no such row exists.
    async fn update(&self, id: E::Id, draft: E::Draft) -> RepoResult<bool>;

    /// Returns `false` when no such row exists.
    async fn delete(&self, id: E::Id) -> RepoResult<bool>;
}

#[async_trait::async_trait]
impl<E, S> Repository<E> for Arc<S>
where
    E: Record,
    S: Repository<E> + ?Sized,
{
    async fn get_all(&self) -> RepoResult<Vec<E>> {
        (**self).get_all().await
    }

    async fn get_by_id(&self, id: E::Id) -> RepoResult<Option<E>> {
        (**self).get_by_id(id).await
    }

    async fn create(&self, draft: E::Draft) -> RepoResult<E::Id> {
        (**self).create(draft).await
    }

    async fn update(&self, id: E::Id, draft: E::Draft) -> RepoResult<bool> {
        (**self).update(id, draft).await
    }

    async fn delete(&self, id: E::Id) -> RepoResult<bool> {
        (**self).delete(id).await
    }
}

/// Account lookup for login.
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Case-insensitive lookup by e-mail.
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    async fn create(&self, user: NewUser) -> RepoResult<UserId>;
}
