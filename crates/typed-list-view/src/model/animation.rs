//! Row animation hints and the policy that picks them.
//!
//! A list widget animates inserted, reloaded and deleted rows. The adapter
//! does not animate anything itself; it only tells the widget which style to
//! use. Which style goes with which kind of change is an [`AnimationPolicy`],
//! configurable per adapter and loadable from settings files through serde.

use serde::{Deserialize, Serialize};

/// How a list widget should animate rows that appear, change or disappear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAnimation {
    /// No animation; rows appear or disappear immediately.
    None,
    /// Let the widget pick a style appropriate for the change.
    #[default]
    Automatic,
    /// Cross-dissolve between old and new content.
    Fade,
    /// Slide in from, or out to, the right.
    Right,
    /// Slide in from, or out to, the left.
    Left,
    /// Slide in from, or out to, the top.
    Top,
    /// Slide in from, or out to, the bottom.
    Bottom,
    /// Keep the row centered while it grows or shrinks.
    Middle,
}

/// Maps each kind of change to the animation the widget should use.
///
/// The default policy is:
///
/// | change | animation |
/// |--------|-----------|
/// | insert | [`RowAnimation::Automatic`] |
/// | update | [`RowAnimation::Fade`] |
/// | delete | [`RowAnimation::Bottom`] |
///
/// # Example
///
/// ```
/// use typed_list_view::model::{AnimationPolicy, RowAnimation};
///
/// let policy = AnimationPolicy::default().with_delete(RowAnimation::Left);
/// assert_eq!(policy.delete, RowAnimation::Left);
/// assert_eq!(policy.insert, RowAnimation::Automatic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationPolicy {
    /// Animation for inserted rows.
    pub insert: RowAnimation,
    /// Animation for rows reloaded in place.
    pub update: RowAnimation,
    /// Animation for deleted rows.
    pub delete: RowAnimation,
}

impl Default for AnimationPolicy {
    fn default() -> Self {
        Self {
            insert: RowAnimation::Automatic,
            update: RowAnimation::Fade,
            delete: RowAnimation::Bottom,
        }
    }
}

impl AnimationPolicy {
    /// A policy that disables every animation.
    pub const fn none() -> Self {
        Self {
            insert: RowAnimation::None,
            update: RowAnimation::None,
            delete: RowAnimation::None,
        }
    }

    /// Sets the insert animation.
    pub fn with_insert(mut self, animation: RowAnimation) -> Self {
        self.insert = animation;
        self
    }

    /// Sets the update animation.
    pub fn with_update(mut self, animation: RowAnimation) -> Self {
        self.update = animation;
        self
    }

    /// Sets the delete animation.
    pub fn with_delete(mut self, animation: RowAnimation) -> Self {
        self.delete = animation;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = AnimationPolicy::default();
        assert_eq!(policy.insert, RowAnimation::Automatic);
        assert_eq!(policy.update, RowAnimation::Fade);
        assert_eq!(policy.delete, RowAnimation::Bottom);
    }

    #[test]
    fn test_policy_from_toml() {
        let policy: AnimationPolicy = toml::from_str(
            r#"
            insert = "top"
            delete = "none"
            "#,
        )
        .unwrap();

        assert_eq!(policy.insert, RowAnimation::Top);
        assert_eq!(policy.update, RowAnimation::Fade);
        assert_eq!(policy.delete, RowAnimation::None);
    }

    #[test]
    fn test_unknown_animation_rejected() {
        let result: Result<AnimationPolicy, _> = toml::from_str(r#"insert = "sideways""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_policy_to_json() {
        let json = serde_json::to_string(&AnimationPolicy::none()).unwrap();
        assert_eq!(json, r#"{"insert":"none","update":"none","delete":"none"}"#);
    }
}
