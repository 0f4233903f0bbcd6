use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::{CategoryUpdate, NewCategory};
use crate::domain::types::{CategoryId, CategoryName, TypeConstraintError, WorkspaceId};

/// JSON body accepted when creating a category.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryForm {
    #[validate(range(min = 1))]
    pub workspace_id: i32,
    /// Omitted or `null` for a root category.
    #[validate(range(min = 1))]
    pub parent_id: Option<i32>,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCategoryFormPayload {
    pub parent_id: Option<CategoryId>,
    pub category: NewCategory,
}

#[derive(Debug, Error)]
pub enum CreateCategoryFormError {
    #[error("Create category form validation failed: {0}")]
    Validation(String),
    #[error("Create category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CreateCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CreateCategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CreateCategoryForm> for CreateCategoryFormPayload {
    type Error = CreateCategoryFormError;

    fn try_from(value: CreateCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let parent_id = value.parent_id.map(CategoryId::new).transpose()?;
        let category = NewCategory::new(
            WorkspaceId::new(value.workspace_id)?,
            CategoryName::new(value.name)?,
            value.description.unwrap_or_default(),
        );
        Ok(Self {
            parent_id,
            category,
        })
    }
}

/// JSON body accepted when renaming or re-describing a category.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

#[derive(Debug, Error)]
pub enum UpdateCategoryFormError {
    #[error("Update category form validation failed: {0}")]
    Validation(String),
    #[error("Update category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateCategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateCategoryForm> for CategoryUpdate {
    type Error = UpdateCategoryFormError;

    fn try_from(value: UpdateCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: CategoryName::new(value.name)?,
            description: value.description.unwrap_or_default().trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_form_has_no_parent() {
        let form = CreateCategoryForm {
            workspace_id: 3,
            parent_id: None,
            name: "  Fasteners ".to_string(),
            description: None,
        };

        let payload = CreateCategoryFormPayload::try_from(form).unwrap();

        assert_eq!(payload.parent_id, None);
        assert_eq!(payload.category.workspace_id, 3);
        assert_eq!(payload.category.name, "Fasteners");
        assert_eq!(payload.category.description, "");
    }

    #[test]
    fn child_form_keeps_parent() {
        let form = CreateCategoryForm {
            workspace_id: 3,
            parent_id: Some(8),
            name: "Screws".to_string(),
            description: Some("Wood and metal".to_string()),
        };

        let payload = CreateCategoryFormPayload::try_from(form).unwrap();

        assert_eq!(payload.parent_id, Some(CategoryId::new(8).unwrap()));
        assert_eq!(payload.category.description, "Wood and metal");
    }

    #[test]
    fn rejects_blank_names_and_bad_ids() {
        let blank = CreateCategoryForm {
            workspace_id: 1,
            parent_id: None,
            name: "   ".to_string(),
            description: None,
        };
        assert!(matches!(
            CreateCategoryFormPayload::try_from(blank),
            Err(CreateCategoryFormError::TypeConstraint(_))
        ));

        let bad_workspace = CreateCategoryForm {
            workspace_id: 0,
            parent_id: None,
            name: "Tools".to_string(),
            description: None,
        };
        assert!(matches!(
            CreateCategoryFormPayload::try_from(bad_workspace),
            Err(CreateCategoryFormError::Validation(_))
        ));
    }

    #[test]
    fn update_form_trims_description() {
        let form = UpdateCategoryForm {
            name: "Tools".to_string(),
            description: Some("  hand held  ".to_string()),
        };

        let update = CategoryUpdate::try_from(form).unwrap();

        assert_eq!(update.description, "hand held");
    }
}
