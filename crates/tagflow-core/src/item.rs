// crates/tagflow-core/src/item.rs
use glam::Vec2;
use serde::Deserialize;

use crate::{Axis, Proposal};

/// Layout priority of an item.
///
/// `Low` items are measured against the space left in the current row
/// instead of the full proposal, so a growing field can fill the tail of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    Low,
}

/// Everything the flow engine needs from a laid-out item.
pub trait FlowItem {
    /// Size of the item under the given proposal.
    fn measure(&self, proposal: Proposal) -> Vec2;

    fn priority(&self) -> Priority {
        Priority::Normal
    }

    /// Comfortable distance to a neighbour along `axis`.
    fn spacing_preference(&self, _axis: Axis) -> f32 {
        0.0
    }

    /// Position of a named anchor (e.g. a text baseline) measured from the
    /// item's leading edge on `axis`, for an item of the given size.
    fn anchor_value(&self, _axis: Axis, _size: Vec2) -> Option<f32> {
        None
    }
}

impl<T: FlowItem + ?Sized> FlowItem for &T {
    fn measure(&self, proposal: Proposal) -> Vec2 {
        (**self).measure(proposal)
    }

    fn priority(&self) -> Priority {
        (**self).priority()
    }

    fn spacing_preference(&self, axis: Axis) -> f32 {
        (**self).spacing_preference(axis)
    }

    fn anchor_value(&self, axis: Axis, size: Vec2) -> Option<f32> {
        (**self).anchor_value(axis, size)
    }
}

impl<T: FlowItem + ?Sized> FlowItem for Box<T> {
    fn measure(&self, proposal: Proposal) -> Vec2 {
        (**self).measure(proposal)
    }

    fn priority(&self) -> Priority {
        (**self).priority()
    }

    fn spacing_preference(&self, axis: Axis) -> f32 {
        (**self).spacing_preference(axis)
    }

    fn anchor_value(&self, axis: Axis, size: Vec2) -> Option<f32> {
        (**self).anchor_value(axis, size)
    }
}

/// Spacing an item (or a whole row) asks for on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SpacingPreference {
    pub horizontal: f32,
    pub vertical: f32,
}

impl SpacingPreference {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self { horizontal, vertical }
    }

    pub fn uniform(value: f32) -> Self {
        Self::new(value, value)
    }

    pub fn of<I: FlowItem + ?Sized>(item: &I) -> Self {
        Self {
            horizontal: item.spacing_preference(Axis::Horizontal),
            vertical: item.spacing_preference(Axis::Vertical),
        }
    }

    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    /// Merge another request in; the stricter value wins on each axis.
    pub fn union(&mut self, other: SpacingPreference) {
        self.horizontal = self.horizontal.max(other.horizontal);
        self.vertical = self.vertical.max(other.vertical);
    }

    /// Gap that satisfies both `self` and `other` along `axis`.
    pub fn distance_to(&self, other: &SpacingPreference, axis: Axis) -> f32 {
        self.along(axis).max(other.along(axis))
    }
}
