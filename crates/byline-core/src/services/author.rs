use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Author, AuthorChanges, NewAuthor};
use crate::error::{DomainError, InvalidField, Reason, RepoError};
use crate::ports::{AuthorRepository, StoredRecord};
use crate::validation::validate_name;

/// Author use cases.
#[derive(Clone)]
pub struct AuthorService {
    authors: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(authors: Arc<dyn AuthorRepository>) -> Self {
        Self { authors }
    }

    /// Validate a draft and commit it as a new author.
    pub async fn create(&self, draft: NewAuthor) -> Result<Author, DomainError> {
        let author = Author::create(draft, self.authors.as_ref()).await?;
        self.commit(author).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Author, DomainError> {
        self.authors
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: Author::ENTITY,
                id,
            })
    }

    pub async fn list(&self) -> Result<Vec<Author>, DomainError> {
        Ok(self.authors.find_all().await?)
    }

    /// Apply each present change through its setter, then commit.
    ///
    /// Any rejection aborts the update and leaves the stored author untouched.
    pub async fn update(&self, id: Uuid, changes: AuthorChanges) -> Result<Author, DomainError> {
        let mut author = self.get(id).await?;

        match changes.name {
            Some(Some(name)) => author.set_name(name, self.authors.as_ref()).await?,
            Some(None) => {
                validate_name(None, author.id(), self.authors.as_ref()).await?;
            }
            None => {}
        }
        if let Some(phone_number) = changes.phone_number {
            author.set_phone_number(phone_number)?;
        }

        self.commit(author).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.authors
            .delete(id)
            .await
            .map_err(super::not_found(Author::ENTITY, id))
    }

    /// Names are the only unique column, so a constraint hit at commit is a
    /// name that was claimed after validation ran.
    async fn commit(&self, author: Author) -> Result<Author, DomainError> {
        let id = author.id();
        self.authors.save(author).await.map_err(|err| match err {
            RepoError::Constraint(_) => InvalidField::new("name", Reason::NotUnique).into(),
            RepoError::NotFound => match id {
                Some(id) => DomainError::NotFound {
                    entity_type: Author::ENTITY,
                    id,
                },
                None => RepoError::NotFound.into(),
            },
            other => other.into(),
        })
    }
}
