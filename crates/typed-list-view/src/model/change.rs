//! Change records emitted by list adapters.

use super::animation::{AnimationPolicy, RowAnimation};
use super::position::Position;

/// The kind of row-level change a mutation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Rows were inserted.
    Insert,
    /// Rows were replaced in place.
    Update,
    /// Rows were deleted.
    Delete,
}

impl ChangeKind {
    /// Returns the animation `policy` assigns to this kind of change.
    pub fn animation(self, policy: &AnimationPolicy) -> RowAnimation {
        match self {
            Self::Insert => policy.insert,
            Self::Update => policy.update,
            Self::Delete => policy.delete,
        }
    }
}

/// A change notification: which rows changed, how, and how to animate it.
///
/// Row changes carry the positions as the widget must see them: insert
/// positions refer to the collection after the insert, delete positions to
/// the collection before the delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Rows were inserted at `positions`.
    Insert {
        positions: Vec<Position>,
        animation: RowAnimation,
    },
    /// Rows at `positions` were replaced and must be redrawn.
    Update {
        positions: Vec<Position>,
        animation: RowAnimation,
    },
    /// Rows at `positions` were deleted.
    Delete {
        positions: Vec<Position>,
        animation: RowAnimation,
    },
    /// The whole collection was replaced; every row must be redrawn.
    Reload,
}

impl Change {
    /// Builds a row change, taking the animation from `policy`.
    pub fn rows(kind: ChangeKind, positions: Vec<Position>, policy: &AnimationPolicy) -> Self {
        let animation = kind.animation(policy);
        match kind {
            ChangeKind::Insert => Self::Insert {
                positions,
                animation,
            },
            ChangeKind::Update => Self::Update {
                positions,
                animation,
            },
            ChangeKind::Delete => Self::Delete {
                positions,
                animation,
            },
        }
    }

    /// Returns the kind of row change, or `None` for a full reload.
    pub fn kind(&self) -> Option<ChangeKind> {
        match self {
            Self::Insert { .. } => Some(ChangeKind::Insert),
            Self::Update { .. } => Some(ChangeKind::Update),
            Self::Delete { .. } => Some(ChangeKind::Delete),
            Self::Reload => None,
        }
    }

    /// Returns the affected positions. Empty for a full reload.
    pub fn positions(&self) -> &[Position] {
        match self {
            Self::Insert { positions, .. }
            | Self::Update { positions, .. }
            | Self::Delete { positions, .. } => positions,
            Self::Reload => &[],
        }
    }

    /// Returns the animation hint, or `None` for a full reload.
    pub fn animation(&self) -> Option<RowAnimation> {
        match self {
            Self::Insert { animation, .. }
            | Self::Update { animation, .. }
            | Self::Delete { animation, .. } => Some(*animation),
            Self::Reload => None,
        }
    }

    /// Returns `true` if this is a full reload.
    pub fn is_reload(&self) -> bool {
        matches!(self, Self::Reload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_takes_animation_from_policy() {
        let policy = AnimationPolicy::default();

        let insert = Change::rows(ChangeKind::Insert, vec![Position::row(1)], &policy);
        assert_eq!(insert.kind(), Some(ChangeKind::Insert));
        assert_eq!(insert.animation(), Some(RowAnimation::Automatic));
        assert_eq!(insert.positions(), &[Position::row(1)]);

        let update = Change::rows(ChangeKind::Update, vec![Position::row(0)], &policy);
        assert_eq!(update.animation(), Some(RowAnimation::Fade));

        let delete = Change::rows(ChangeKind::Delete, Position::rows(0, 2), &policy);
        assert_eq!(delete.animation(), Some(RowAnimation::Bottom));
        assert_eq!(delete.positions().len(), 2);
    }

    #[test]
    fn test_custom_policy() {
        let policy = AnimationPolicy::none().with_update(RowAnimation::Middle);
        assert_eq!(ChangeKind::Insert.animation(&policy), RowAnimation::None);
        assert_eq!(ChangeKind::Update.animation(&policy), RowAnimation::Middle);
    }

    #[test]
    fn test_reload() {
        let change = Change::Reload;
        assert!(change.is_reload());
        assert_eq!(change.kind(), None);
        assert!(change.positions().is_empty());
        assert_eq!(change.animation(), None);
    }
}
