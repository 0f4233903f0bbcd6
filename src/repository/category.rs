use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::category::{Category, CategoryUpdate, NewCategory};
use crate::domain::nested_set::{
    BoundShift, Interval, plan_child_insertion, plan_subtree_removal, root_interval,
};
use crate::domain::types::{CategoryId, CategoryName, WorkspaceId};
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::{
    CategoryReader, CategoryWriter, DieselRepository, RepositoryError, RepositoryResult,
};

/// Moves every `lft` and `rgt` of a workspace that lies after `shift.after`.
///
/// The unique `(workspace_id, lft)` and `(workspace_id, rgt)` indexes are
/// checked row by row, so affected bounds are first parked in negative space
/// and flipped back once every row has moved.
fn shift_bounds(
    conn: &mut SqliteConnection,
    workspace_id: i32,
    shift: BoundShift,
) -> QueryResult<()> {
    use crate::schema::categories;

    diesel::update(
        categories::table
            .filter(categories::workspace_id.eq(workspace_id))
            .filter(categories::lft.gt(shift.after)),
    )
    .set(categories::lft.eq(categories::lft * -1 - shift.delta))
    .execute(conn)?;

    diesel::update(
        categories::table
            .filter(categories::workspace_id.eq(workspace_id))
            .filter(categories::lft.lt(0)),
    )
    .set(categories::lft.eq(categories::lft * -1))
    .execute(conn)?;

    diesel::update(
        categories::table
            .filter(categories::workspace_id.eq(workspace_id))
            .filter(categories::rgt.gt(shift.after)),
    )
    .set(categories::rgt.eq(categories::rgt * -1 - shift.delta))
    .execute(conn)?;

    diesel::update(
        categories::table
            .filter(categories::workspace_id.eq(workspace_id))
            .filter(categories::rgt.lt(0)),
    )
    .set(categories::rgt.eq(categories::rgt * -1))
    .execute(conn)?;

    Ok(())
}

fn insert_category(
    conn: &mut SqliteConnection,
    category: &NewCategory,
    interval: Interval,
) -> RepositoryResult<Category> {
    use crate::schema::categories;

    let inserted = diesel::insert_into(categories::table)
        .values(DbNewCategory::positioned(category, interval))
        .returning(DbCategory::as_returning())
        .get_result::<DbCategory>(conn)?;

    Ok(inserted.try_into()?)
}

fn find_category(conn: &mut SqliteConnection, id: CategoryId) -> QueryResult<Option<DbCategory>> {
    use crate::schema::categories;

    categories::table
        .filter(categories::id.eq(id.get()))
        .first::<DbCategory>(conn)
        .optional()
}

fn into_domain(rows: Vec<DbCategory>) -> RepositoryResult<Vec<Category>> {
    Ok(rows
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<Category>, _>>()?)
}

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        let mut conn = self.conn()?;

        let category = find_category(&mut conn, id)?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }

    fn get_category_by_name(
        &self,
        workspace_id: WorkspaceId,
        name: &CategoryName,
    ) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::workspace_id.eq(workspace_id.get()))
            .filter(categories::name.eq(name.as_str()))
            .order(categories::lft.asc())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }

    fn list_categories(&self, workspace_id: WorkspaceId) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let rows = categories::table
            .filter(categories::workspace_id.eq(workspace_id.get()))
            .order(categories::lft.asc())
            .load::<DbCategory>(&mut conn)?;

        into_domain(rows)
    }

    fn get_category_subtree(&self, id: CategoryId) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        // Both reads share one snapshot so a concurrent renumbering cannot
        // slip in between locating the target and reading its range.
        conn.transaction(|conn| -> RepositoryResult<Vec<Category>> {
            let Some(target) = find_category(conn, id)? else {
                return Ok(Vec::new());
            };

            let rows = categories::table
                .filter(categories::workspace_id.eq(target.workspace_id))
                .filter(categories::lft.between(target.lft, target.rgt))
                .order(categories::lft.asc())
                .load::<DbCategory>(conn)?;

            into_domain(rows)
        })
    }
}

impl CategoryWriter for DieselRepository {
    fn create_root_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        conn.immediate_transaction(|conn| -> RepositoryResult<Category> {
            let max_right = categories::table
                .filter(categories::workspace_id.eq(category.workspace_id.get()))
                .select(diesel::dsl::max(categories::rgt))
                .get_result::<Option<i32>>(conn)?;

            insert_category(conn, category, root_interval(max_right))
        })
    }

    fn create_child_category(
        &self,
        parent_id: CategoryId,
        category: &NewCategory,
    ) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        conn.immediate_transaction(|conn| -> RepositoryResult<Category> {
            let parent = categories::table
                .filter(categories::id.eq(parent_id.get()))
                .filter(categories::workspace_id.eq(category.workspace_id.get()))
                .first::<DbCategory>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound("parent category"))?;

            let plan = plan_child_insertion(parent.interval()?);
            shift_bounds(conn, parent.workspace_id, plan.shift)?;
            insert_category(conn, category, plan.child)
        })
    }

    fn delete_category_subtree(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        conn.immediate_transaction(|conn| -> RepositoryResult<Option<Category>> {
            let Some(target) = find_category(conn, id)? else {
                return Ok(None);
            };

            let plan = plan_subtree_removal(target.interval()?);
            let removed = if plan.is_leaf() {
                diesel::delete(categories::table.filter(categories::id.eq(target.id)))
                    .execute(conn)?
            } else {
                diesel::delete(
                    categories::table
                        .filter(categories::workspace_id.eq(target.workspace_id))
                        .filter(
                            categories::lft.between(plan.range.left(), plan.range.right()),
                        ),
                )
                .execute(conn)?
            };
            // A width that disagrees with the rows in range means the stored
            // intervals are already broken; renumbering would spread the damage.
            if i32::try_from(removed).ok() != Some(plan.removed_nodes()) {
                return Err(RepositoryError::ValidationError(format!(
                    "subtree {} of category {} holds {removed} rows, expected {}",
                    plan.range,
                    target.id,
                    plan.removed_nodes()
                )));
            }
            shift_bounds(conn, target.workspace_id, plan.shift)?;

            Ok(Some(target.try_into()?))
        })
    }

    fn update_category(
        &self,
        id: CategoryId,
        update: &CategoryUpdate,
    ) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let updated = diesel::update(categories::table.filter(categories::id.eq(id.get())))
            .set((
                categories::name.eq(update.name.as_str()),
                categories::description.eq(update.description.as_str()),
                categories::updated_at.eq(diesel::dsl::now),
            ))
            .returning(DbCategory::as_returning())
            .get_result::<DbCategory>(&mut conn)
            .optional()?;

        let updated = updated.map(TryInto::try_into).transpose()?;
        Ok(updated)
    }
}
