//! # Byline Infrastructure
//!
//! Storage backends for the ports defined in `byline-core`, plus the
//! configuration and tracing setup around them.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL storage via SeaORM

pub mod config;
pub mod database;
pub mod memory;
pub mod storage;
pub mod telemetry;

pub use config::StorageConfig;
pub use database::DatabaseConfig;
pub use memory::{InMemoryAuthorRepository, InMemoryPostRepository, InMemoryRepository};
pub use storage::Storage;
pub use telemetry::{TelemetryConfig, init_telemetry};

#[cfg(feature = "postgres")]
pub use database::{PostgresAuthorRepository, PostgresPostRepository};
