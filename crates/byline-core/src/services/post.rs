use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Category, NewPost, Post, PostChanges};
use crate::error::DomainError;
use crate::ports::{PostRepository, StoredRecord};
use crate::validation::{validate_category, validate_content, validate_title};

/// Post use cases.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    pub async fn create(&self, draft: NewPost) -> Result<Post, DomainError> {
        let post = Post::create(draft)?;
        Ok(self.posts.save(post).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, DomainError> {
        self.posts.find_by_id(id).await?.ok_or(DomainError::NotFound {
            entity_type: Post::ENTITY,
            id,
        })
    }

    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all().await?)
    }

    pub async fn by_category(&self, category: Category) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_by_category(category).await?)
    }

    /// Apply each present change through its setter, then commit.
    pub async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, DomainError> {
        let mut post = self.get(id).await?;

        // An explicit null goes to the validator as an absent value.
        match changes.title {
            Some(Some(title)) => post.set_title(title)?,
            Some(None) => {
                validate_title(None)?;
            }
            None => {}
        }
        match changes.content {
            Some(Some(content)) => post.set_content(content)?,
            Some(None) => {
                validate_content(None)?;
            }
            None => {}
        }
        match changes.category {
            Some(Some(category)) => post.set_category(&category)?,
            Some(None) => {
                validate_category(None)?;
            }
            None => {}
        }
        if let Some(summary) = changes.summary {
            post.set_summary(summary)?;
        }

        self.posts
            .save(post)
            .await
            .map_err(super::not_found(Post::ENTITY, id))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.posts
            .delete(id)
            .await
            .map_err(super::not_found(Post::ENTITY, id))
    }
}
