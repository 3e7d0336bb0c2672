use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::InvalidField;
use crate::ports::StoredRecord;
use crate::validation::{validate_category, validate_content, validate_summary, validate_title};

/// Post category. Labels are matched exactly, case included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Fiction")]
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::NonFiction => "Non-Fiction",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Fiction" => Some(Category::Fiction),
            "Non-Fiction" => Some(Category::NonFiction),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate values for a new post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
}

/// Changes to an existing post. Omitted fields are left alone.
///
/// For the required fields `Some(None)` is an explicit null and is rejected;
/// for `summary` it clears the value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostChanges {
    #[serde(default, deserialize_with = "super::double_option")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub content: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub summary: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub category: Option<Option<String>>,
}

/// Post entity - a blog post whose fields passed validation on assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    id: Option<Uuid>,
    title: String,
    content: String,
    summary: Option<String>,
    category: Category,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Build an uncommitted post.
    ///
    /// Fields are checked title, content, category, summary; the first
    /// rejection aborts construction.
    pub fn create(draft: NewPost) -> Result<Self, InvalidField> {
        let title = validate_title(draft.title.as_deref())?.to_owned();
        let content = validate_content(draft.content.as_deref())?.to_owned();
        let category = validate_category(draft.category.as_deref())?;
        let summary = validate_summary(draft.summary.as_deref())?.map(str::to_owned);

        Ok(Self {
            id: None,
            title,
            content,
            summary,
            category,
            created_at: None,
            updated_at: None,
        })
    }

    /// Rebuild a post that storage already holds, without re-validating.
    pub fn restore(
        id: Uuid,
        title: String,
        content: String,
        summary: Option<String>,
        category: Category,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Some(id),
            title,
            content,
            summary,
            category,
            created_at: Some(created_at),
            updated_at,
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), InvalidField> {
        let title = title.into();
        validate_title(Some(title.as_str()))?;
        self.title = title;
        Ok(())
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> Result<(), InvalidField> {
        let content = content.into();
        validate_content(Some(content.as_str()))?;
        self.content = content;
        Ok(())
    }

    pub fn set_summary(&mut self, summary: Option<String>) -> Result<(), InvalidField> {
        validate_summary(summary.as_deref())?;
        self.summary = summary;
        Ok(())
    }

    pub fn set_category(&mut self, category: &str) -> Result<(), InvalidField> {
        self.category = validate_category(Some(category))?;
        Ok(())
    }
}

impl StoredRecord for Post {
    const ENTITY: &'static str = "Post";

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn mark_created(&mut self, id: Uuid, at: DateTime<Utc>) {
        self.id = Some(id);
        self.created_at = Some(at);
    }

    fn mark_updated(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Post(id={}, title={}, content={}, summary={})",
            super::display_id(self.id),
            self.title,
            self.content,
            self.summary.as_deref().unwrap_or("None")
        )
    }
}
