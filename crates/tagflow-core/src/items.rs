// crates/tagflow-core/src/items.rs
//! Stock flow items for hosts that do not bring their own measurement.

use glam::Vec2;
use unicode_width::UnicodeWidthStr;

use crate::{AvailableSpace, Axis, FlowItem, Priority, Proposal, SpacingPreference};

pub const DEFAULT_FONT_SIZE: f32 = 16.0;
/// Monospace advance as a fraction of the font size.
pub const CHAR_WIDTH_EM: f32 = 0.5;
pub const LINE_HEIGHT_EM: f32 = 1.25;
/// Baseline position as a fraction of the line height.
pub const BASELINE_RATIO: f32 = 0.8;

/// An item with a constant size that ignores the proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedItem {
    pub size: Vec2,
    pub priority: Priority,
    pub spacing: SpacingPreference,
    pub anchor: Option<f32>,
}

impl FixedItem {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            priority: Priority::Normal,
            spacing: SpacingPreference::default(),
            anchor: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_spacing(mut self, spacing: SpacingPreference) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_anchor(mut self, anchor: f32) -> Self {
        self.anchor = Some(anchor);
        self
    }
}

impl FlowItem for FixedItem {
    fn measure(&self, _proposal: Proposal) -> Vec2 {
        self.size
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn spacing_preference(&self, axis: Axis) -> f32 {
        self.spacing.along(axis)
    }

    fn anchor_value(&self, axis: Axis, _size: Vec2) -> Option<f32> {
        match axis {
            Axis::Vertical => self.anchor,
            Axis::Horizontal => None,
        }
    }
}

/// A single-line text token (a tag, a word) with a monospace size estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct TextToken {
    pub text: String,
    pub font_size: f32,
    pub padding: Vec2,
    pub spacing: SpacingPreference,
}

impl TextToken {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: DEFAULT_FONT_SIZE,
            padding: Vec2::new(4.0, 2.0),
            spacing: SpacingPreference::new(8.0, 4.0),
        }
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_padding(mut self, horizontal: f32, vertical: f32) -> Self {
        self.padding = Vec2::new(horizontal, vertical);
        self
    }

    pub fn with_spacing(mut self, spacing: SpacingPreference) -> Self {
        self.spacing = spacing;
        self
    }

    fn line_height(&self) -> f32 {
        self.font_size * LINE_HEIGHT_EM
    }
}

impl FlowItem for TextToken {
    // Tokens never wrap internally, so the proposal is ignored.
    fn measure(&self, _proposal: Proposal) -> Vec2 {
        let text_width = self.text.width() as f32 * self.font_size * CHAR_WIDTH_EM;
        Vec2::new(
            text_width + self.padding.x * 2.0,
            self.line_height() + self.padding.y * 2.0,
        )
    }

    fn spacing_preference(&self, axis: Axis) -> f32 {
        self.spacing.along(axis)
    }

    fn anchor_value(&self, axis: Axis, _size: Vec2) -> Option<f32> {
        match axis {
            Axis::Vertical => Some(self.padding.y + self.line_height() * BASELINE_RATIO),
            Axis::Horizontal => None,
        }
    }
}

/// A growing text entry that fills whatever width it is offered.
///
/// Low priority: inside a flow it is measured against the space left in the
/// current row, and wraps to a fresh row once that drops below `min_width`.
#[derive(Debug, Clone, PartialEq)]
pub struct InputField {
    pub text: String,
    pub min_width: f32,
    pub font_size: f32,
}

impl InputField {
    pub fn new(min_width: f32) -> Self {
        Self {
            text: String::new(),
            min_width,
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    fn natural_width(&self) -> f32 {
        (self.text.width() as f32 * self.font_size * CHAR_WIDTH_EM).max(self.min_width)
    }
}

impl FlowItem for InputField {
    fn measure(&self, proposal: Proposal) -> Vec2 {
        let natural = self.natural_width();
        let width = match proposal.width {
            AvailableSpace::Definite(width) => width.max(natural),
            AvailableSpace::MinContent | AvailableSpace::MaxContent => natural,
        };
        Vec2::new(width, self.font_size * LINE_HEIGHT_EM)
    }

    fn priority(&self) -> Priority {
        Priority::Low
    }

    fn anchor_value(&self, axis: Axis, size: Vec2) -> Option<f32> {
        match axis {
            Axis::Vertical => Some(size.y * BASELINE_RATIO),
            Axis::Horizontal => None,
        }
    }
}
