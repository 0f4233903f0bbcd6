use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::{Category as DomainCategory, NewCategory as DomainNewCategory};
use crate::domain::nested_set::Interval;
use crate::domain::types::{CategoryName, TypeConstraintError};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Category {
    pub id: i32,
    pub workspace_id: i32,
    pub name: String,
    pub description: String,
    pub lft: i32,
    pub rgt: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Category`].
///
/// Timestamps are left to the column defaults.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub workspace_id: i32,
    pub name: String,
    pub description: String,
    pub lft: i32,
    pub rgt: i32,
}

impl NewCategory {
    /// Places `category` at `interval`.
    pub fn positioned(category: &DomainNewCategory, interval: Interval) -> Self {
        Self {
            workspace_id: category.workspace_id.get(),
            name: category.name.as_str().to_string(),
            description: category.description.clone(),
            lft: interval.left(),
            rgt: interval.right(),
        }
    }
}

impl Category {
    pub fn interval(&self) -> Result<Interval, TypeConstraintError> {
        Interval::new(self.lft, self.rgt)
    }
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        let interval = category.interval()?;
        Ok(Self {
            id: category.id.try_into()?,
            workspace_id: category.workspace_id.try_into()?,
            name: CategoryName::new(category.name)?,
            description: category.description,
            interval,
            created_at: category.created_at,
            updated_at: category.updated_at,
        })
    }
}
