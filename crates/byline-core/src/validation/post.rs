use crate::domain::Category;
use crate::error::{InvalidField, Reason};

/// A title must contain at least one of these, matched case-sensitively.
pub const CLICKBAIT_PHRASES: [&str; 4] = ["Won't Believe", "Secret", "Top", "Guess"];

pub const CONTENT_MIN_CHARS: usize = 250;

pub const SUMMARY_MAX_CHARS: usize = 250;

pub fn validate_title(candidate: Option<&str>) -> Result<&str, InvalidField> {
    let title = match candidate {
        Some(title) if !title.trim().is_empty() => title,
        _ => return Err(InvalidField::new("title", Reason::Missing)),
    };

    if CLICKBAIT_PHRASES.iter().any(|phrase| title.contains(phrase)) {
        Ok(title)
    } else {
        Err(InvalidField::new("title", Reason::NotClickbait))
    }
}

/// Length is counted in characters, untrimmed.
pub fn validate_content(candidate: Option<&str>) -> Result<&str, InvalidField> {
    match candidate {
        Some(content) if content.chars().count() >= CONTENT_MIN_CHARS => Ok(content),
        _ => Err(InvalidField::new(
            "content",
            Reason::TooShort {
                min: CONTENT_MIN_CHARS,
            },
        )),
    }
}

pub fn validate_summary(candidate: Option<&str>) -> Result<Option<&str>, InvalidField> {
    match candidate {
        Some(summary) if summary.chars().count() > SUMMARY_MAX_CHARS => Err(InvalidField::new(
            "summary",
            Reason::TooLong {
                max: SUMMARY_MAX_CHARS,
            },
        )),
        _ => Ok(candidate),
    }
}

pub fn validate_category(candidate: Option<&str>) -> Result<Category, InvalidField> {
    candidate
        .and_then(Category::from_label)
        .ok_or(InvalidField::new("category", Reason::NotCategory))
}
