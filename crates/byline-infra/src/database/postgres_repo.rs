//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use byline_core::domain::{Category, Post};
use byline_core::error::RepoError;
use byline_core::ports::{AuthorNameLookup, PostRepository};

use super::entity::author::{self, Entity as AuthorEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL author repository.
pub type PostgresAuthorRepository = PostgresBaseRepository<AuthorEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl AuthorNameLookup for PostgresAuthorRepository {
    async fn find_id_by_name(&self, name: &str) -> Result<Option<Uuid>, RepoError> {
        tracing::debug!(author_name = %name, "Checking author name uniqueness");

        let result = AuthorEntity::find()
            .filter(author::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(|model| model.id))
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Category.eq(post::Category::from(category)))
            .order_by_asc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
