//! In-memory repository shared by every record type.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use byline_core::domain::{Author, Category, Post};
use byline_core::error::RepoError;
use byline_core::ports::{AuthorNameLookup, BaseRepository, PostRepository, StoredRecord};

/// Records kept in commit order behind an async `RwLock`.
///
/// Lookups are linear scans. Unique keys are enforced on save, the same way a
/// database uniqueness constraint would be.
/// Note: Data is lost on process restart.
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

/// In-memory author repository.
pub type InMemoryAuthorRepository = InMemoryRepository<Author>;

/// In-memory post repository.
pub type InMemoryPostRepository = InMemoryRepository<Post>;

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: StoredRecord> BaseRepository<T, Uuid> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == Some(id)).cloned())
    }

    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        Ok(self.records.read().await.clone())
    }

    async fn save(&self, mut entity: T) -> Result<T, RepoError> {
        let mut records = self.records.write().await;

        if let Some(key) = entity.unique_key() {
            let clash = records
                .iter()
                .any(|r| r.unique_key() == Some(key) && r.id() != entity.id());
            if clash {
                tracing::debug!(entity = T::ENTITY, "Unique key already taken");
                return Err(RepoError::Constraint(format!(
                    "{} with this key already exists",
                    T::ENTITY
                )));
            }
        }

        let now = Utc::now();
        match entity.id() {
            None => {
                let id = Uuid::new_v4();
                entity.mark_created(id, now);
                records.push(entity.clone());
                tracing::debug!(entity = T::ENTITY, %id, "Record inserted");
            }
            Some(id) => {
                let slot = records
                    .iter_mut()
                    .find(|r| r.id() == Some(id))
                    .ok_or(RepoError::NotFound)?;
                entity.mark_updated(now);
                *slot = entity.clone();
                tracing::debug!(entity = T::ENTITY, %id, "Record updated");
            }
        }

        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut records = self.records.write().await;
        let position = records
            .iter()
            .position(|r| r.id() == Some(id))
            .ok_or(RepoError::NotFound)?;
        records.remove(position);
        tracing::debug!(entity = T::ENTITY, %id, "Record deleted");
        Ok(())
    }
}

#[async_trait]
impl AuthorNameLookup for InMemoryRepository<Author> {
    async fn find_id_by_name(&self, name: &str) -> Result<Option<Uuid>, RepoError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|author| author.name() == name)
            .and_then(|author| author.id()))
    }
}

#[async_trait]
impl PostRepository for InMemoryRepository<Post> {
    async fn find_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|post| post.category() == category)
            .cloned()
            .collect())
    }
}
