//! Services - validate candidate values, then commit through a repository.

mod author;
mod post;

pub use author::AuthorService;
pub use post::PostService;

use uuid::Uuid;

use crate::error::{DomainError, RepoError};

/// Turn a storage miss on `id` into a domain `NotFound`.
fn not_found(entity_type: &'static str, id: Uuid) -> impl FnOnce(RepoError) -> DomainError {
    move |err| match err {
        RepoError::NotFound => DomainError::NotFound { entity_type, id },
        other => other.into(),
    }
}
