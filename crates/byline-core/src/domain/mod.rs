//! Domain entities - the core business objects.

mod author;

mod post;

use serde::{Deserialize, Deserializer};
use uuid::Uuid;

pub use author::{Author, AuthorChanges, NewAuthor};
pub use post::{Category, NewPost, Post, PostChanges};

/// Render an optional id the way records print themselves.
fn display_id(id: Option<Uuid>) -> String {
    id.map_or_else(|| "None".to_string(), |id| id.to_string())
}

/// Keep "field omitted" (`None`) apart from "field set to null" (`Some(None)`).
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
