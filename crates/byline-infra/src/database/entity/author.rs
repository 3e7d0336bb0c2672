//! Author entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use byline_core::domain::Author;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub phone_number: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Author.
impl From<Model> for Author {
    fn from(model: Model) -> Self {
        Author::restore(
            model.id,
            model.name,
            model.phone_number,
            model.created_at.into(),
            model.updated_at.map(Into::into),
        )
    }
}

/// Conversion from a committed Domain Author to SeaORM ActiveModel.
///
/// Storage stamps identity and `created_at` before converting, so both are
/// present here.
impl From<Author> for ActiveModel {
    fn from(author: Author) -> Self {
        Self {
            id: author.id().map_or(NotSet, Set),
            name: Set(author.name().to_owned()),
            phone_number: Set(author.phone_number().map(str::to_owned)),
            created_at: author.created_at().map_or(NotSet, |at| Set(at.into())),
            updated_at: Set(author.updated_at().map(Into::into)),
        }
    }
}
