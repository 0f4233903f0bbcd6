use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::nested_set::Interval;
use crate::domain::types::{CategoryId, CategoryName, WorkspaceId};

/// One node of a workspace-scoped category forest.
///
/// `interval` is owned by the tree engine; nothing else may change it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub workspace_id: WorkspaceId,
    pub name: CategoryName,
    pub description: String,
    pub interval: Interval,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Category {
    /// Whether `other` lies strictly inside this category's subtree.
    pub fn is_ancestor_of(&self, other: &Category) -> bool {
        self.workspace_id == other.workspace_id && self.interval.contains(other.interval)
    }
}

/// Data required to insert a new [`Category`].
///
/// Position is deliberately absent: the engine decides where the node goes.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewCategory {
    pub workspace_id: WorkspaceId,
    pub name: CategoryName,
    pub description: String,
}

impl NewCategory {
    pub fn new(
        workspace_id: WorkspaceId,
        name: CategoryName,
        description: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id,
            name,
            description: description.into().trim().to_string(),
        }
    }
}

/// Display attributes that may change after creation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryUpdate {
    pub name: CategoryName,
    pub description: String,
}
