//! Domain-level error types.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Why a proposed field value was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Absent, empty, or whitespace-only.
    Missing,
    /// Another persisted record already holds this value.
    NotUnique,
    /// None of the clickbait phrases appear in the value.
    NotClickbait,
    TooShort { min: usize },
    TooLong { max: usize },
    /// Not exactly ten decimal digits.
    NotPhoneNumber,
    /// Not one of the known post categories.
    NotCategory,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Missing => write!(f, "a value is required"),
            Reason::NotUnique => write!(f, "value is not unique"),
            Reason::NotClickbait => write!(f, "value is not sufficiently clickbait-y"),
            Reason::TooShort { min } => write!(f, "must be at least {} characters long", min),
            Reason::TooLong { max } => write!(f, "must be at most {} characters long", max),
            Reason::NotPhoneNumber => write!(f, "must be exactly 10 digits"),
            Reason::NotCategory => write!(f, "must be either 'Fiction' or 'Non-Fiction'"),
        }
    }
}

/// A rejected field assignment.
///
/// Raised at the point of assignment; the record keeps its previous value
/// (or is never constructed) and nothing reaches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid field `{field}`: {reason}")]
pub struct InvalidField {
    pub field: &'static str,
    pub reason: Reason,
}

impl InvalidField {
    pub fn new(field: &'static str, reason: Reason) -> Self {
        Self { field, reason }
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error(transparent)]
    InvalidField(#[from] InvalidField),

    #[error("Storage failure: {0}")]
    Repository(#[from] RepoError),
}

impl DomainError {
    /// The field rejection carried by this error, if any.
    pub fn invalid_field(&self) -> Option<&InvalidField> {
        match self {
            DomainError::InvalidField(invalid) => Some(invalid),
            _ => None,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
