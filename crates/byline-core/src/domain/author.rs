use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, InvalidField};
use crate::ports::{AuthorNameLookup, StoredRecord};
use crate::validation::{validate_name, validate_phone_number};

/// Candidate values for a new author.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewAuthor {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

/// Changes to an existing author. Omitted fields are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorChanges {
    /// `Some(None)` is an explicit null and is rejected.
    #[serde(default, deserialize_with = "super::double_option")]
    pub name: Option<Option<String>>,
    /// `Some(None)` clears the phone number.
    #[serde(default, deserialize_with = "super::double_option")]
    pub phone_number: Option<Option<String>>,
}

/// Author entity.
///
/// Fields are only reachable through validating setters, so an `Author`
/// never holds a value its validators would reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: Option<Uuid>,
    name: String,
    phone_number: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl Author {
    /// Build an uncommitted author, validating name then phone number.
    pub async fn create<L>(draft: NewAuthor, lookup: &L) -> Result<Self, DomainError>
    where
        L: AuthorNameLookup + ?Sized,
    {
        let name = validate_name(draft.name.as_deref(), None, lookup)
            .await?
            .to_owned();
        let phone_number = validate_phone_number(draft.phone_number.as_deref())?.map(str::to_owned);

        Ok(Self {
            id: None,
            name,
            phone_number,
            created_at: None,
            updated_at: None,
        })
    }

    /// Rebuild an author that storage already holds.
    ///
    /// Values are trusted as committed and are not re-validated.
    pub fn restore(
        id: Uuid,
        name: String,
        phone_number: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            phone_number,
            created_at: Some(created_at),
            updated_at,
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Assign a new name. Re-assigning the current name is not a clash.
    pub async fn set_name<L>(&mut self, name: impl Into<String>, lookup: &L) -> Result<(), DomainError>
    where
        L: AuthorNameLookup + ?Sized,
    {
        let name = name.into();
        validate_name(Some(name.as_str()), self.id, lookup).await?;
        self.name = name;
        Ok(())
    }

    pub fn set_phone_number(&mut self, phone_number: Option<String>) -> Result<(), InvalidField> {
        validate_phone_number(phone_number.as_deref())?;
        self.phone_number = phone_number;
        Ok(())
    }
}

impl StoredRecord for Author {
    const ENTITY: &'static str = "Author";

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn mark_created(&mut self, id: Uuid, at: DateTime<Utc>) {
        self.id = Some(id);
        self.created_at = Some(at);
    }

    fn mark_updated(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Author(id={}, name={})",
            super::display_id(self.id),
            self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Reason, RepoError};
    use async_trait::async_trait;

    struct Taken(Option<(Uuid, &'static str)>);

    #[async_trait]
    impl AuthorNameLookup for Taken {
        async fn find_id_by_name(&self, name: &str) -> Result<Option<Uuid>, RepoError> {
            Ok(self.0.filter(|(_, n)| *n == name).map(|(id, _)| id))
        }
    }

    fn draft(name: Option<&str>, phone_number: Option<&str>) -> NewAuthor {
        NewAuthor {
            name: name.map(String::from),
            phone_number: phone_number.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_create_leaves_identity_to_storage() {
        let author = Author::create(draft(Some("Octavia"), Some("5551234567")), &Taken(None))
            .await
            .unwrap();

        assert_eq!(author.id(), None);
        assert_eq!(author.name(), "Octavia");
        assert_eq!(author.phone_number(), Some("5551234567"));
        assert_eq!(author.created_at(), None);
        assert_eq!(author.updated_at(), None);
        assert_eq!(author.to_string(), "Author(id=None, name=Octavia)");
    }

    #[tokio::test]
    async fn test_create_reports_name_before_phone() {
        let err = Author::create(draft(None, Some("nope")), &Taken(None))
            .await
            .unwrap_err();
        assert_eq!(err.invalid_field(), Some(&InvalidField::new("name", Reason::Missing)));

        let err = Author::create(draft(Some("Octavia"), Some("nope")), &Taken(None))
            .await
            .unwrap_err();
        assert_eq!(
            err.invalid_field(),
            Some(&InvalidField::new("phone_number", Reason::NotPhoneNumber))
        );
    }

    #[tokio::test]
    async fn test_rejected_assignment_keeps_prior_value() {
        let other = Uuid::new_v4();
        let mut author = Author::restore(
            Uuid::new_v4(),
            "Octavia".to_string(),
            Some("5551234567".to_string()),
            Utc::now(),
            None,
        );

        let err = author
            .set_name("Ursula", &Taken(Some((other, "Ursula"))))
            .await
            .unwrap_err();
        assert_eq!(err.invalid_field().map(|e| e.reason), Some(Reason::NotUnique));
        assert_eq!(author.name(), "Octavia");

        assert!(author.set_phone_number(Some("555-1234".to_string())).is_err());
        assert_eq!(author.phone_number(), Some("5551234567"));
    }

    #[tokio::test]
    async fn test_reassigning_own_name_is_accepted() {
        let id = Uuid::new_v4();
        let mut author = Author::restore(id, "Octavia".to_string(), None, Utc::now(), None);

        author
            .set_name("Octavia", &Taken(Some((id, "Octavia"))))
            .await
            .unwrap();
        author.set_phone_number(None).unwrap();
        assert_eq!(author.to_string(), format!("Author(id={}, name=Octavia)", id));
    }

    #[test]
    fn test_changes_distinguish_cleared_from_omitted() {
        let cleared: AuthorChanges = serde_json::from_str(r#"{"phone_number": null}"#).unwrap();
        assert_eq!(cleared.phone_number, Some(None));

        let omitted: AuthorChanges = serde_json::from_str(r#"{"name": "Octavia"}"#).unwrap();
        assert_eq!(omitted.phone_number, None);
        assert_eq!(omitted.name, Some(Some("Octavia".to_string())));

        let nulled: AuthorChanges = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(nulled.name, Some(None));
    }
}
