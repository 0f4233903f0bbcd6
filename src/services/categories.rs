//! Category tree engine.
//!
//! Stateless operations over any store implementing [`CategoryReader`] and
//! [`CategoryWriter`]. Structural mutations are delegated to the store as
//! single atomic units; this layer decides between root and child creation,
//! logs every change to the tree and translates store failures into
//! [`ServiceError`] without retrying them.

use crate::domain::category::{Category, CategoryUpdate, NewCategory};
use crate::domain::nested_set::validate_forest;
use crate::domain::tree::{CategoryTree, build_forest};
use crate::domain::types::{CategoryId, CategoryName, WorkspaceId};
use crate::repository::{CategoryReader, CategoryWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

fn storage_failure(action: &str, err: RepositoryError) -> ServiceError {
    match &err {
        RepositoryError::NotFound(what) => log::warn!("Failed to {action}: {what} not found"),
        _ => log::error!("Failed to {action}: {err}"),
    }
    err.into()
}

/// Append a new root category to its workspace.
pub fn create_root_category<R>(category: &NewCategory, repo: &R) -> ServiceResult<Category>
where
    R: CategoryWriter,
{
    let created = repo
        .create_root_category(category)
        .map_err(|e| storage_failure("create root category", e))?;

    log::info!(
        "Created root category {} at {} in workspace {}",
        created.id,
        created.interval,
        created.workspace_id
    );
    Ok(created)
}

/// Insert a category as the first child of `parent_id`.
///
/// Returns [`ServiceError::NotFound`] when the parent does not exist in the
/// category's workspace; in that case nothing is renumbered.
pub fn create_child_category<R>(
    parent_id: CategoryId,
    category: &NewCategory,
    repo: &R,
) -> ServiceResult<Category>
where
    R: CategoryWriter,
{
    let created = repo
        .create_child_category(parent_id, category)
        .map_err(|e| storage_failure("create child category", e))?;

    log::info!(
        "Created category {} under {} at {} in workspace {}",
        created.id,
        parent_id,
        created.interval,
        created.workspace_id
    );
    Ok(created)
}

/// Create a root category or, when `parent_id` is given, a child category.
pub fn create_category<R>(
    parent_id: Option<CategoryId>,
    category: &NewCategory,
    repo: &R,
) -> ServiceResult<Category>
where
    R: CategoryWriter,
{
    match parent_id {
        Some(parent_id) => create_child_category(parent_id, category, repo),
        None => create_root_category(category, repo),
    }
}

/// Delete a category together with its whole subtree.
///
/// Returns the deleted category as it was before removal. An unknown id is
/// not an error and yields `Ok(None)`.
pub fn delete_category_subtree<R>(id: CategoryId, repo: &R) -> ServiceResult<Option<Category>>
where
    R: CategoryWriter,
{
    let deleted = repo
        .delete_category_subtree(id)
        .map_err(|e| storage_failure("delete category subtree", e))?;

    match &deleted {
        Some(category) => log::info!(
            "Deleted category {} at {} with {} node(s) from workspace {}",
            category.id,
            category.interval,
            category.interval.subtree_size(),
            category.workspace_id
        ),
        None => log::debug!("Nothing to delete for category {id}"),
    }
    Ok(deleted)
}

/// Fetch a category and all of its descendants in pre-order.
///
/// An unknown id produces an empty list.
pub fn show_category_subtree<R>(id: CategoryId, repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader,
{
    repo.get_category_subtree(id)
        .map_err(|e| storage_failure("get category subtree", e))
}

/// Fetch the full forest of a workspace in pre-order.
pub fn list_workspace_categories<R>(
    workspace_id: WorkspaceId,
    repo: &R,
) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader,
{
    repo.list_categories(workspace_id)
        .map_err(|e| storage_failure("list categories", e))
}

pub fn show_category<R>(id: CategoryId, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    match repo.get_category_by_id(id) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(storage_failure("get category", e)),
    }
}

pub fn show_category_by_name<R>(
    workspace_id: WorkspaceId,
    name: &CategoryName,
    repo: &R,
) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    match repo.get_category_by_name(workspace_id, name) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(storage_failure("get category by name", e)),
    }
}

/// Render the workspace forest as nested trees.
pub fn show_category_forest<R>(
    workspace_id: WorkspaceId,
    repo: &R,
) -> ServiceResult<Vec<CategoryTree>>
where
    R: CategoryReader,
{
    let categories = list_workspace_categories(workspace_id, repo)?;
    Ok(build_forest(categories))
}

/// Render one subtree as a nested tree, or `None` when `id` is unknown.
pub fn show_category_tree<R>(id: CategoryId, repo: &R) -> ServiceResult<Option<CategoryTree>>
where
    R: CategoryReader,
{
    let categories = show_category_subtree(id, repo)?;
    Ok(build_forest(categories).into_iter().next())
}

/// Change the name and description of a category.
pub fn update_category_details<R>(
    id: CategoryId,
    update: &CategoryUpdate,
    repo: &R,
) -> ServiceResult<Category>
where
    R: CategoryWriter,
{
    match repo.update_category(id, update) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(storage_failure("update category", e)),
    }
}

/// Verify that the stored intervals of a workspace form a nested forest.
///
/// Returns the number of categories checked.
pub fn check_category_tree<R>(workspace_id: WorkspaceId, repo: &R) -> ServiceResult<usize>
where
    R: CategoryReader,
{
    let categories = list_workspace_categories(workspace_id, repo)?;
    let total = categories.len();

    if let Err(violation) = validate_forest(categories.into_iter().map(|c| c.interval)) {
        log::warn!("Category tree of workspace {workspace_id} is corrupt: {violation}");
        return Err(violation.into());
    }
    Ok(total)
}
