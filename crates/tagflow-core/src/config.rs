// crates/tagflow-core/src/config.rs
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::TagflowError;

/// Vertical placement rule for items inside a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
    /// Proportional alignment on the item's own anchor (text baseline).
    Anchor,
}

impl VerticalAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Center => "center",
            VerticalAlignment::Bottom => "bottom",
            VerticalAlignment::Anchor => "anchor",
        }
    }
}

impl fmt::Display for VerticalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerticalAlignment {
    type Err = TagflowError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(VerticalAlignment::Top),
            "center" | "centre" => Ok(VerticalAlignment::Center),
            "bottom" => Ok(VerticalAlignment::Bottom),
            "anchor" | "baseline" => Ok(VerticalAlignment::Anchor),
            other => Err(TagflowError::InvalidAlignment(other.to_string())),
        }
    }
}

/// Flow layout options. Immutable for the duration of a layout call.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub alignment: VerticalAlignment,
    /// Overrides every gap between items in a row.
    pub item_spacing: Option<f32>,
    /// Overrides every gap between rows.
    pub row_spacing: Option<f32>,
}

impl FlowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_item_spacing(mut self, spacing: f32) -> Self {
        self.item_spacing = Some(spacing);
        self
    }

    pub fn with_row_spacing(mut self, spacing: f32) -> Self {
        self.row_spacing = Some(spacing);
        self
    }
}
