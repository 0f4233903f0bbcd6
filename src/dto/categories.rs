use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::tree::CategoryTree;

/// Flat JSON view of a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub id: i32,
    pub workspace_id: i32,
    pub name: String,
    pub description: String,
    pub left: i32,
    pub right: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.get(),
            workspace_id: value.workspace_id.get(),
            name: value.name.into_inner(),
            description: value.description,
            left: value.interval.left(),
            right: value.interval.right(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Nested JSON view of a category and its descendants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTreeDto {
    #[serde(flatten)]
    pub category: CategoryDto,
    pub depth: usize,
    pub children: Vec<CategoryTreeDto>,
}

impl From<CategoryTree> for CategoryTreeDto {
    fn from(value: CategoryTree) -> Self {
        Self {
            category: value.category.into(),
            depth: value.depth,
            children: value.children.into_iter().map(Into::into).collect(),
        }
    }
}
