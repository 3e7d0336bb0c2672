//! Field validators.
//!
//! Each validator takes the proposed value (`None` when absent) and either
//! hands it back accepted or rejects it with [`InvalidField`](crate::InvalidField).
//! Only the author name check touches storage.

mod author;
mod post;

pub use author::{validate_name, validate_phone_number};
pub use post::{
    CLICKBAIT_PHRASES, CONTENT_MIN_CHARS, SUMMARY_MAX_CHARS, validate_category, validate_content,
    validate_summary, validate_title,
};

