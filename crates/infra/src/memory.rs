//! In-memory repositories for dev runs and tests.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use stockdesk_core::{NewUser, Record, SerialId, User, UserId, normalize_email};

use crate::repository::{RepoError, RepoResult, Repository, UserRepository};

#[derive(Debug)]
struct Table<K, V> {
    next_id: i32,
    rows: BTreeMap<K, V>,
}

impl<K, V> Table<K, V> {
    fn new() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }

    /// Mirrors `SERIAL`: ids are never reused, even after deletes. Past `i32::MAX`
    /// every allocation fails.
    fn allocate(&mut self, table: &'static str) -> RepoResult<i32> {
        let id = self.next_id;
        if id <= 0 {
            return Err(RepoError::IdsExhausted(table));
        }
        self.next_id = id.checked_add(1).unwrap_or(0);
        Ok(id)
    }
}

/// Map-backed stand-in for a table.
#[derive(Debug)]
pub struct InMemoryRepository<E: Record> {
    table: RwLock<Table<E::Id, E>>,
}

impl<E: Record> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl<E: Record> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl<E: Record> Repository<E> for InMemoryRepository<E> {
    async fn get_all(&self) -> RepoResult<Vec<E>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: E::Id) -> RepoResult<Option<E>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, draft: E::Draft) -> RepoResult<E::Id> {
        let mut table = self.table.write().await;
        let id = E::Id::from_raw(table.allocate(E::COLLECTION)?);
        table.rows.insert(id, E::from_draft(id, draft));
        Ok(id)
    }

    async fn update(&self, id: E::Id, draft: E::Draft) -> RepoResult<bool> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = E::from_draft(id, draft);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: E::Id) -> RepoResult<bool> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}

#[derive(Debug)]
pub struct InMemoryUserRepository {
    table: RwLock<Table<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email = normalize_email(email);
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .find(|u| normalize_email(&u.email) == email)
            .cloned())
    }

    async fn create(&self, user: NewUser) -> RepoResult<UserId> {
        let mut table = self.table.write().await;
        let id = UserId::from_raw(table.allocate("users")?);
        table.rows.insert(
            id,
            User {
                id,
                email: normalize_email(&user.email),
                password_hash: user.password_hash,
            },
        );
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdesk_core::{Category, CategoryDraft, CategoryId};

    fn draft(name: &str) -> CategoryDraft {
        CategoryDraft { name: name.into() }
    }

    #[tokio::test]
    async fn create_assigns_increasing_unique_ids() {
        let repo = InMemoryRepository::<Category>::new();
        let a = repo.create(draft("Tools")).await.unwrap();
        let b = repo.create(draft("Garden")).await.unwrap();
        assert_eq!(a, CategoryId::new(1));
        assert_eq!(b, CategoryId::new(2));

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(), ["Tools", "Garden"]);
    }

    #[tokio::test]
    async fn update_reports_whether_the_row_exists() {
        let repo = InMemoryRepository::<Category>::new();
        let id = repo.create(draft("Tools")).await.unwrap();

        assert!(repo.update(id, draft("Hand tools")).await.unwrap());
        assert_eq!(repo.get_by_id(id).await.unwrap().unwrap().name, "Hand tools");
        assert!(!repo.update(CategoryId::new(99), draft("x")).await.unwrap());
    }

    #[tokio::test]
    async fn delete_twice_finds_the_row_once() {
        let repo = InMemoryRepository::<Category>::new();
        let id = repo.create(draft("Tools")).await.unwrap();

        assert!(repo.delete(id).await.unwrap());
        assert!(!repo.delete(id).await.unwrap());
        assert!(repo.get_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = InMemoryRepository::<Category>::new();
        let first = repo.create(draft("a")).await.unwrap();
        repo.delete(first).await.unwrap();
        let second = repo.create(draft("b")).await.unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn allocation_stops_at_the_last_id() {
        let mut table = Table::<CategoryId, Category>::new();
        table.next_id = i32::MAX;

        assert_eq!(table.allocate("categories").unwrap(), i32::MAX);
        assert!(matches!(table.allocate("categories"), Err(RepoError::IdsExhausted("categories"))));
        assert!(table.allocate("categories").is_err());
    }

    #[tokio::test]
    async fn create_fails_once_ids_run_out() {
        let repo = InMemoryRepository::<Category>::new();
        repo.table.write().await.next_id = i32::MAX;

        let last = repo.create(draft("last")).await.unwrap();
        assert_eq!(last, CategoryId::new(i32::MAX));
        assert!(repo.create(draft("one more")).await.is_err());
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn users_are_found_case_insensitively() {
        let repo = InMemoryUserRepository::new();
        let id = repo
            .create(NewUser {
                email: "Admin@Example.com".into(),
                password_hash: "hash".into(),
            })
            .await
            .unwrap();

        let found = repo.find_by_email(" admin@example.COM").await.unwrap().unwrap();
        assert_eq!(found.id, id);
        assert!(repo.find_by_email("other@example.com").await.unwrap().is_none());
    }
}
