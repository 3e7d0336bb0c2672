use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Author, Category, Post};
use crate::error::RepoError;

/// Lifecycle hooks a storage backend uses when committing a record.
///
/// Identity and timestamps belong to storage: a record has no id until its
/// first commit.
pub trait StoredRecord: Clone + Send + Sync + 'static {
    /// Entity name used in logs and errors.
    const ENTITY: &'static str;

    fn id(&self) -> Option<Uuid>;

    fn created_at(&self) -> Option<DateTime<Utc>>;

    /// Value that must be unique across all stored records of this type.
    fn unique_key(&self) -> Option<&str> {
        None
    }

    /// Assign identity and creation time at first commit.
    fn mark_created(&mut self, id: Uuid, at: DateTime<Utc>);

    /// Record the time of a later commit.
    fn mark_updated(&mut self, at: DateTime<Utc>);
}

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// All stored entities, oldest first.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Save an entity: insert when it has no id yet, update otherwise.
    ///
    /// Returns the entity as committed, with identity and timestamps stamped.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Uniqueness lookup used by author name validation.
#[async_trait]
pub trait AuthorNameLookup: Send + Sync {
    /// Identity of the persisted author whose name equals `name` exactly.
    async fn find_id_by_name(&self, name: &str) -> Result<Option<Uuid>, RepoError>;
}

/// Author repository.
pub trait AuthorRepository: BaseRepository<Author, Uuid> + AuthorNameLookup {}

impl<R> AuthorRepository for R where R: BaseRepository<Author, Uuid> + AuthorNameLookup {}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    async fn find_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError>;
}
