// crates/tagflow-core/src/scene.rs
//! JSON scene files: a flow configuration, a proposal and a list of items.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    FixedItem, FlowConfig, FlowItem, InputField, Priority, Proposal, Result, SpacingPreference,
    TagflowError, TextToken,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub config: FlowConfig,
    /// Proposed width; absent means unbounded.
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
    pub items: Vec<ItemSpec>,
}

/// Declarative description of one stock item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemSpec {
    Fixed {
        width: f32,
        height: f32,
        #[serde(default)]
        priority: Priority,
        #[serde(default)]
        spacing: SpacingPreference,
        anchor: Option<f32>,
    },
    Token {
        text: String,
        font_size: Option<f32>,
        spacing: Option<SpacingPreference>,
    },
    Input {
        min_width: f32,
        #[serde(default)]
        text: String,
        font_size: Option<f32>,
    },
}

impl ItemSpec {
    pub fn build(&self) -> Box<dyn FlowItem> {
        match self {
            ItemSpec::Fixed { width, height, priority, spacing, anchor } => {
                let mut item = FixedItem::new(*width, *height)
                    .with_priority(*priority)
                    .with_spacing(*spacing);
                item.anchor = *anchor;
                Box::new(item)
            }
            ItemSpec::Token { text, font_size, spacing } => {
                let mut token = TextToken::new(text.clone());
                if let Some(font_size) = font_size {
                    token = token.with_font_size(*font_size);
                }
                if let Some(spacing) = spacing {
                    token = token.with_spacing(*spacing);
                }
                Box::new(token)
            }
            ItemSpec::Input { min_width, text, font_size } => {
                let mut field = InputField::new(*min_width).with_text(text.clone());
                if let Some(font_size) = font_size {
                    field = field.with_font_size(*font_size);
                }
                Box::new(field)
            }
        }
    }

    /// Short human-readable label used by debug output.
    pub fn label(&self) -> String {
        match self {
            ItemSpec::Fixed { width, height, .. } => format!("Fixed {}x{}", width, height),
            ItemSpec::Token { text, .. } => format!("Token \"{}\"", text),
            ItemSpec::Input { text, .. } => format!("Input \"{}\"", text),
        }
    }

    fn validate(&self, index: usize) -> Result<()> {
        let invalid = |reason: String| TagflowError::InvalidItem { index, reason };
        let check = |name: &str, value: f32| {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(invalid(format!("{} must be a finite non-negative number, got {}", name, value)))
            }
        };

        match self {
            ItemSpec::Fixed { width, height, spacing, anchor, .. } => {
                check("width", *width)?;
                check("height", *height)?;
                check("spacing.horizontal", spacing.horizontal)?;
                check("spacing.vertical", spacing.vertical)?;
                if let Some(anchor) = anchor {
                    check("anchor", *anchor)?;
                }
            }
            ItemSpec::Token { text, font_size, spacing } => {
                if text.is_empty() {
                    return Err(invalid("token text is empty".to_string()));
                }
                if let Some(font_size) = font_size {
                    check("font_size", *font_size)?;
                }
                if let Some(spacing) = spacing {
                    check("spacing.horizontal", spacing.horizontal)?;
                    check("spacing.vertical", spacing.vertical)?;
                }
            }
            ItemSpec::Input { min_width, font_size, .. } => {
                check("min_width", *min_width)?;
                if let Some(font_size) = font_size {
                    check("font_size", *font_size)?;
                }
            }
        }
        Ok(())
    }
}

impl Scene {
    pub fn from_json(source: &str) -> Result<Self> {
        let scene: Scene = serde_json::from_str(source)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if let Some(value) = value {
                if !(value.is_finite() && value >= 0.0) {
                    return Err(TagflowError::InvalidDimension(format!("scene {} {}", name, value)));
                }
            }
        }
        for (name, value) in [("item_spacing", self.config.item_spacing), ("row_spacing", self.config.row_spacing)] {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(TagflowError::InvalidDimension(format!("{} {}", name, value)));
                }
            }
        }
        for (index, item) in self.items.iter().enumerate() {
            item.validate(index)?;
        }
        Ok(())
    }

    pub fn proposal(&self) -> Proposal {
        Proposal::from_options(self.width, self.height)
    }

    pub fn build_items(&self) -> Vec<Box<dyn FlowItem>> {
        self.items.iter().map(ItemSpec::build).collect()
    }
}

pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    info!("Loading scene: {}", path.display());
    let source = fs::read_to_string(path)?;
    let scene = Scene::from_json(&source)?;
    debug!(
        "Scene has {} items, width={:?}, alignment={}",
        scene.items.len(),
        scene.width,
        scene.config.alignment
    );
    Ok(scene)
}
