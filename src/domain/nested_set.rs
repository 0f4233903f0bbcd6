//! Nested-set interval arithmetic for category forests.
//!
//! Every category occupies a closed interval `[left, right]` inside its
//! workspace. Descendants are nested strictly inside their ancestors, siblings
//! are disjoint and ordered, and the bounds of one workspace are exactly the
//! integers `0..2n` for a forest of `n` categories. Selecting all descendants of
//! a node is therefore a single range query on `left`.
//!
//! This module is pure: it computes where a new node goes and which bounds move
//! on insertion or removal. Repositories apply the resulting plans inside a
//! single transaction.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Number of bounds a single category occupies.
pub const NODE_WIDTH: i32 = 2;

/// Closed interval owned by one category.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
pub struct Interval {
    left: i32,
    right: i32,
}

impl Interval {
    /// Validates a pair of bounds.
    ///
    /// Bounds must be non-negative, `left < right`, and the interval must span
    /// an even number of bounds (two per node in the subtree).
    pub fn new(left: i32, right: i32) -> Result<Self, TypeConstraintError> {
        if left < 0 {
            return Err(TypeConstraintError::NegativeNumber("left bound"));
        }
        if right <= left {
            return Err(TypeConstraintError::InvalidValue(format!(
                "right bound {right} must be greater than left bound {left}"
            )));
        }
        if (right - left) % 2 == 0 {
            return Err(TypeConstraintError::InvalidValue(format!(
                "interval [{left}, {right}] does not cover a whole number of nodes"
            )));
        }
        Ok(Self { left, right })
    }

    pub const fn left(self) -> i32 {
        self.left
    }

    pub const fn right(self) -> i32 {
        self.right
    }

    /// Number of bounds covered, i.e. twice the subtree size.
    pub const fn width(self) -> i32 {
        self.right - self.left + 1
    }

    /// Number of nodes in the subtree rooted here, including the node itself.
    pub const fn subtree_size(self) -> i32 {
        self.width() / NODE_WIDTH
    }

    pub const fn is_leaf(self) -> bool {
        self.width() == NODE_WIDTH
    }

    /// Whether `other` is a strict descendant of this interval.
    pub const fn contains(self, other: Interval) -> bool {
        self.left < other.left && other.right < self.right
    }

    /// Whether `bound` lies within `[left, right]`.
    pub const fn covers(self, bound: i32) -> bool {
        self.left <= bound && bound <= self.right
    }

    /// Applies `shift` to both bounds independently.
    pub fn shifted(self, shift: BoundShift) -> Result<Self, TypeConstraintError> {
        Self::new(shift.apply(self.left), shift.apply(self.right))
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.left, self.right)
    }
}

/// Relative move of every bound strictly greater than `after`.
///
/// The same rule is applied to the `left` and `right` columns independently,
/// which is what keeps the encoding consistent for ancestors whose `left` lies
/// before the pivot while their `right` lies after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundShift {
    pub after: i32,
    pub delta: i32,
}

impl BoundShift {
    pub const fn applies_to(self, bound: i32) -> bool {
        bound > self.after
    }

    pub const fn apply(self, bound: i32) -> i32 {
        if self.applies_to(bound) {
            bound + self.delta
        } else {
            bound
        }
    }
}

/// Interval for a new root placed after everything already in the workspace.
///
/// `max_right` is the greatest `right` bound of the workspace, or `None` when
/// the workspace has no categories yet.
pub fn root_interval(max_right: Option<i32>) -> Interval {
    let left = max_right.map_or(0, |right| right + 1);
    Interval {
        left,
        right: left + 1,
    }
}

/// Placement of a new child and the renumbering that makes room for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChildInsertion {
    /// Opens a two-wide gap immediately inside the parent's left bound.
    pub shift: BoundShift,
    /// Interval of the inserted node once the shift has been applied.
    pub child: Interval,
}

/// Plans the insertion of a leaf as the first child of `parent`.
pub fn plan_child_insertion(parent: Interval) -> ChildInsertion {
    ChildInsertion {
        shift: BoundShift {
            after: parent.left,
            delta: NODE_WIDTH,
        },
        child: Interval {
            left: parent.left + 1,
            right: parent.left + 2,
        },
    }
}

/// Removal of a whole subtree and the renumbering that closes the gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubtreeRemoval {
    /// Every node whose `left` falls in this range is deleted.
    pub range: Interval,
    /// Pulls every later bound back by the removed width.
    pub shift: BoundShift,
}

impl SubtreeRemoval {
    /// Whether only the target itself is removed.
    pub const fn is_leaf(&self) -> bool {
        self.range.is_leaf()
    }

    /// Number of nodes removed.
    pub const fn removed_nodes(&self) -> i32 {
        self.range.subtree_size()
    }
}

pub fn plan_subtree_removal(target: Interval) -> SubtreeRemoval {
    SubtreeRemoval {
        range: target,
        shift: BoundShift {
            after: target.right,
            delta: -target.width(),
        },
    }
}

/// Ways in which a workspace's intervals can fail to form a nested forest.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NestedSetViolation {
    #[error("bound {0} is used more than once")]
    DuplicateBound(i32),
    #[error("expected bound {expected} but found {found}")]
    Gap { expected: i32, found: i32 },
    #[error("interval {inner} partially overlaps {outer}")]
    PartialOverlap { outer: Interval, inner: Interval },
}

/// Checks that `intervals` describe one properly nested, contiguous forest.
///
/// The bounds must be exactly `0..2n` without repetition, and walking the
/// intervals in `left` order every interval must either nest strictly inside
/// the innermost open one or start after it closes. Together these imply that
/// every interval's width is twice its subtree size.
pub fn validate_forest<I>(intervals: I) -> Result<(), NestedSetViolation>
where
    I: IntoIterator<Item = Interval>,
{
    let mut intervals: Vec<Interval> = intervals.into_iter().collect();
    intervals.sort_by_key(|interval| interval.left);

    let mut bounds: Vec<i32> = intervals
        .iter()
        .flat_map(|interval| [interval.left, interval.right])
        .collect();
    bounds.sort_unstable();
    for (expected, pair) in (0..).zip(bounds.iter().enumerate()) {
        let (index, &found) = pair;
        if index > 0 && bounds[index - 1] == found {
            return Err(NestedSetViolation::DuplicateBound(found));
        }
        if found != expected {
            return Err(NestedSetViolation::Gap { expected, found });
        }
    }

    let mut open: Vec<Interval> = Vec::new();
    for interval in intervals {
        while open.last().is_some_and(|outer| outer.right < interval.left) {
            open.pop();
        }
        if let Some(&outer) = open.last() {
            if !outer.contains(interval) {
                return Err(NestedSetViolation::PartialOverlap {
                    outer,
                    inner: interval,
                });
            }
        }
        open.push(interval);
    }

    Ok(())
}
