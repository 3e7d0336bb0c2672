//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use byline_core::domain::{self, Post};

/// Stored category label.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Category {
    #[sea_orm(string_value = "Fiction")]
    Fiction,
    #[sea_orm(string_value = "Non-Fiction")]
    NonFiction,
}

impl From<domain::Category> for Category {
    fn from(category: domain::Category) -> Self {
        match category {
            domain::Category::Fiction => Category::Fiction,
            domain::Category::NonFiction => Category::NonFiction,
        }
    }
}

impl From<Category> for domain::Category {
    fn from(category: Category) -> Self {
        match category {
            Category::Fiction => domain::Category::Fiction,
            Category::NonFiction => domain::Category::NonFiction,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,
    pub category: Category,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Post::restore(
            model.id,
            model.title,
            model.content,
            model.summary,
            model.category.into(),
            model.created_at.into(),
            model.updated_at.map(Into::into),
        )
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: post.id().map_or(NotSet, Set),
            title: Set(post.title().to_owned()),
            content: Set(post.content().to_owned()),
            summary: Set(post.summary().map(str::to_owned)),
            category: Set(post.category().into()),
            created_at: post.created_at().map_or(NotSet, |at| Set(at.into())),
            updated_at: Set(post.updated_at().map(Into::into)),
        }
    }
}
