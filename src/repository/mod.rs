use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, CategoryUpdate, NewCategory};
use crate::domain::types::{CategoryId, CategoryName, WorkspaceId};

pub mod category;
pub mod errors;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers and worker threads.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
///
/// Every listing is ordered by `left`, i.e. in pre-order.
pub trait CategoryReader {
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// Retrieve the first category in a workspace carrying `name`.
    fn get_category_by_name(
        &self,
        workspace_id: WorkspaceId,
        name: &CategoryName,
    ) -> RepositoryResult<Option<Category>>;
    /// List the whole forest of a workspace.
    fn list_categories(&self, workspace_id: WorkspaceId) -> RepositoryResult<Vec<Category>>;
    /// List a category and all of its descendants. Empty when `id` is unknown.
    fn get_category_subtree(&self, id: CategoryId) -> RepositoryResult<Vec<Category>>;
}

/// Write operations for category entities.
///
/// Implementations run each structural mutation as one atomic unit: either
/// every renumbered bound and the inserted or deleted rows are persisted, or
/// nothing is.
pub trait CategoryWriter {
    /// Append a new root after every existing interval of its workspace.
    fn create_root_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Insert a leaf as the first child of `parent_id`.
    ///
    /// Fails with [`RepositoryError::NotFound`] when the parent does not exist
    /// in the category's workspace.
    fn create_child_category(
        &self,
        parent_id: CategoryId,
        category: &NewCategory,
    ) -> RepositoryResult<Category>;
    /// Delete a category with all of its descendants and close the gap.
    ///
    /// Returns the removed category as it was before deletion, or `None` when
    /// `id` is unknown.
    fn delete_category_subtree(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// Update display attributes. The position in the tree is never touched.
    fn update_category(
        &self,
        id: CategoryId,
        update: &CategoryUpdate,
    ) -> RepositoryResult<Option<Category>>;
}
