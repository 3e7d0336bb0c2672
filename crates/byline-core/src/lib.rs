//! # Byline Core
//!
//! The domain layer of Byline: author and post records whose fields are
//! validated at the moment they are assigned.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

pub use error::{DomainError, InvalidField, Reason, RepoError};
