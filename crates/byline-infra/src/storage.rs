//! Storage handle - picks a backend and hands out services bound to it.

use std::sync::Arc;

use byline_core::error::RepoError;
use byline_core::ports::{AuthorRepository, PostRepository};
use byline_core::services::{AuthorService, PostService};

use crate::config::StorageConfig;
use crate::memory::{InMemoryAuthorRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use crate::database::{self, PostgresAuthorRepository, PostgresPostRepository};

/// Repositories for both record types, sharing one backend.
#[derive(Clone)]
pub struct Storage {
    pub authors: Arc<dyn AuthorRepository>,
    pub posts: Arc<dyn PostRepository>,
}

impl Storage {
    /// Process-local storage. Data is lost on restart.
    pub fn in_memory() -> Self {
        Self {
            authors: Arc::new(InMemoryAuthorRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
        }
    }

    /// Build storage from configuration.
    ///
    /// Without a database URL the in-memory store is used. A configured
    /// database that cannot be reached is an error.
    pub async fn connect(config: &StorageConfig) -> Result<Self, RepoError> {
        let Some(db_config) = &config.database else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(Self::in_memory());
        };

        #[cfg(feature = "postgres")]
        let storage = {
            let conn = database::connect(db_config).await.map_err(|e| {
                tracing::error!("Failed to connect to database: {}", e);
                RepoError::Connection(e.to_string())
            })?;

            Self {
                authors: Arc::new(PostgresAuthorRepository::new(conn.clone())),
                posts: Arc::new(PostgresPostRepository::new(conn)),
            }
        };

        #[cfg(not(feature = "postgres"))]
        let storage = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Self::in_memory()
        };

        tracing::info!("Storage initialized");
        Ok(storage)
    }

    pub fn author_service(&self) -> AuthorService {
        AuthorService::new(Arc::clone(&self.authors))
    }

    pub fn post_service(&self) -> PostService {
        PostService::new(Arc::clone(&self.posts))
    }
}
