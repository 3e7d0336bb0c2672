use uuid::Uuid;

use crate::error::{DomainError, InvalidField, Reason};
use crate::ports::AuthorNameLookup;

const PHONE_DIGITS: usize = 10;

/// Check a proposed author name.
///
/// `current` is the identity of the author being assigned to, if it has been
/// committed before. A persisted author holding the same name is a clash
/// unless it is that same record.
pub async fn validate_name<'a, L>(
    candidate: Option<&'a str>,
    current: Option<Uuid>,
    lookup: &L,
) -> Result<&'a str, DomainError>
where
    L: AuthorNameLookup + ?Sized,
{
    let name = match candidate {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(InvalidField::new("name", Reason::Missing).into()),
    };

    match lookup.find_id_by_name(name).await? {
        Some(existing) if Some(existing) != current => {
            Err(InvalidField::new("name", Reason::NotUnique).into())
        }
        _ => Ok(name),
    }
}

/// Check a proposed phone number. Absent is fine; formatting characters are not.
pub fn validate_phone_number(candidate: Option<&str>) -> Result<Option<&str>, InvalidField> {
    match candidate {
        None => Ok(None),
        Some(phone)
            if phone.chars().count() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit()) =>
        {
            Ok(Some(phone))
        }
        Some(_) => Err(InvalidField::new("phone_number", Reason::NotPhoneNumber)),
    }
}
