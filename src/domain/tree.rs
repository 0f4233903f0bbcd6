//! Nested rendering of pre-order category lists.

use std::iter::Peekable;

use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::nested_set::Interval;

/// A category together with its descendants.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryTree {
    pub category: Category,
    /// Distance from the top of the rendered forest; roots are at depth 0.
    pub depth: usize,
    pub children: Vec<CategoryTree>,
}

impl CategoryTree {
    /// Number of nodes in this tree, including the root.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(CategoryTree::node_count)
            .sum::<usize>()
    }
}

/// Builds a forest out of categories ordered by `left`.
///
/// The input is usually the result of a workspace listing or a subtree query.
/// The first category and every category not nested inside a previous one
/// become top-level entries.
pub fn build_forest(mut categories: Vec<Category>) -> Vec<CategoryTree> {
    categories.sort_by_key(|category| category.interval.left());
    collect_children(&mut categories.into_iter().peekable(), None, 0)
}

fn collect_children<I>(
    categories: &mut Peekable<I>,
    parent: Option<Interval>,
    depth: usize,
) -> Vec<CategoryTree>
where
    I: Iterator<Item = Category>,
{
    let mut nodes = Vec::new();
    while let Some(category) =
        categories.next_if(|next| parent.is_none_or(|parent| parent.contains(next.interval)))
    {
        let children = collect_children(categories, Some(category.interval), depth + 1);
        nodes.push(CategoryTree {
            category,
            depth,
            children,
        });
    }
    nodes
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::domain::types::{CategoryId, CategoryName, WorkspaceId};

    fn category(id: i32, name: &str, left: i32, right: i32) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            workspace_id: WorkspaceId::new(1).unwrap(),
            name: CategoryName::new(name).unwrap(),
            description: String::new(),
            interval: Interval::new(left, right).unwrap(),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn nests_children_under_their_parents() {
        let forest = build_forest(vec![
            category(5, "Paint", 8, 9),
            category(2, "Hand tools", 1, 4),
            category(1, "Tools", 0, 7),
            category(3, "Hammers", 2, 3),
            category(4, "Power tools", 5, 6),
        ]);

        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].category.name, "Tools");
        assert_eq!(forest[0].node_count(), 4);
        assert_eq!(forest[0].children.len(), 2);
        assert_eq!(forest[0].children[0].category.name, "Hand tools");
        assert_eq!(forest[0].children[0].children[0].category.name, "Hammers");
        assert_eq!(forest[0].children[0].children[0].depth, 2);
        assert_eq!(forest[0].children[1].category.name, "Power tools");
        assert_eq!(forest[1].category.name, "Paint");
        assert_eq!(forest[1].depth, 0);
        assert!(forest[1].children.is_empty());
    }

    #[test]
    fn subtree_listing_becomes_single_tree() {
        let forest = build_forest(vec![
            category(2, "Hand tools", 1, 4),
            category(3, "Hammers", 2, 3),
        ]);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].depth, 0);
        assert_eq!(forest[0].children[0].depth, 1);
    }

    #[test]
    fn empty_input_yields_empty_forest() {
        assert!(build_forest(Vec::new()).is_empty());
    }
}
