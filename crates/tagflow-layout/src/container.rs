// crates/tagflow-layout/src/container.rs
//! Builder-style flow container owning its children.

use std::fmt;

use glam::Vec2;
use tagflow_core::{Axis, Bounds, FlowConfig, FlowItem, Proposal, VerticalAlignment};

use crate::{FlowLayout, FlowLayoutResult, Placement};

/// A flow of owned children, built up front and laid out on demand.
///
/// The container is itself a [`FlowItem`], so flows nest: a nested flow
/// reports its aggregate size for the proposal it is offered.
pub struct FlowContainer {
    children: Vec<Box<dyn FlowItem>>,
    config: FlowConfig,
    debug: bool,
}

impl FlowContainer {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            config: FlowConfig::default(),
            debug: false,
        }
    }

    pub fn with_config(config: FlowConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    pub fn alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.config.alignment = alignment;
        self
    }

    /// Set a fixed gap between items, replacing their preferences.
    pub fn item_spacing(mut self, spacing: f32) -> Self {
        self.config.item_spacing = Some(spacing);
        self
    }

    /// Set a fixed gap between rows, replacing their preferences.
    pub fn row_spacing(mut self, spacing: f32) -> Self {
        self.config.row_spacing = Some(spacing);
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn push(mut self, child: impl FlowItem + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn extend<I, T>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: FlowItem + 'static,
    {
        self.children
            .extend(children.into_iter().map(|child| Box::new(child) as Box<dyn FlowItem>));
        self
    }

    pub fn children(&self) -> &[Box<dyn FlowItem>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn layout(&self) -> FlowLayout {
        FlowLayout::new(self.config).with_debug(self.debug)
    }

    pub fn measure(&self, proposal: Proposal) -> Vec2 {
        self.layout().measure(&self.children, proposal)
    }

    pub fn place(&self, bounds: Bounds, proposal: Proposal) -> Vec<Placement> {
        self.layout().place(&self.children, bounds, proposal)
    }

    pub fn compute(&self, bounds: Bounds, proposal: Proposal) -> FlowLayoutResult {
        self.layout().compute(&self.children, bounds, proposal)
    }

    /// Total height needed when wrapped to `width`.
    pub fn height_for_width(&self, width: f32) -> f32 {
        self.measure(Proposal::width(width)).y
    }
}

impl Default for FlowContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FlowContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowContainer")
            .field("children", &self.children.len())
            .field("config", &self.config)
            .finish()
    }
}

impl FlowItem for FlowContainer {
    fn measure(&self, proposal: Proposal) -> Vec2 {
        FlowContainer::measure(self, proposal)
    }

    fn spacing_preference(&self, axis: Axis) -> f32 {
        self.children
            .iter()
            .map(|child| child.spacing_preference(axis))
            .fold(0.0, f32::max)
    }
}
