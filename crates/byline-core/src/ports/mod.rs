//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that storage backends must implement.

mod repository;

pub use repository::{
    AuthorNameLookup, AuthorRepository, BaseRepository, PostRepository, StoredRecord,
};
