// crates/tagflow-layout/src/lib.rs

use glam::Vec2;
use tagflow_core::{Bounds, FlowConfig, FlowItem, Proposal};
use tracing::debug;

pub mod align;
pub mod container;
pub mod packer;
pub mod spacing;

pub use align::*;
pub use container::*;
pub use packer::*;
pub use spacing::*;

/// Final frame of one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Position of the item in the input sequence.
    pub index: usize,
    pub position: Vec2,
    pub size: Vec2,
}

/// Everything a single layout pass produces.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowLayoutResult {
    pub size: Vec2,
    pub rows: Vec<Row>,
    pub placements: Vec<Placement>,
}

/// Wraps items into rows like inline text.
///
/// `measure` and `place` both run the same packer over the same inputs, so
/// the size reported to a host always matches the placements it later gets.
#[derive(Debug, Clone, Default)]
pub struct FlowLayout {
    config: FlowConfig,
    debug: bool,
}

impl FlowLayout {
    pub fn new(config: FlowConfig) -> Self {
        Self { config, debug: false }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn rows<I: FlowItem>(&self, items: &[I], proposal: Proposal) -> Vec<Row> {
        pack(items, proposal, &self.config, self.debug)
    }

    /// Aggregate size: the widest row, and row heights plus row gaps.
    pub fn measure<I: FlowItem>(&self, items: &[I], proposal: Proposal) -> Vec2 {
        let size = content_size(&self.rows(items, proposal));
        debug!("Measured {} items: {:?}", items.len(), size);
        size
    }

    /// One placement per item, in input order, relative to `bounds.origin`.
    pub fn place<I: FlowItem>(&self, items: &[I], bounds: Bounds, proposal: Proposal) -> Vec<Placement> {
        let rows = self.rows(items, proposal);
        self.place_rows(items, &rows, bounds.origin)
    }

    /// Size, rows and placements from a single packing pass.
    pub fn compute<I: FlowItem>(&self, items: &[I], bounds: Bounds, proposal: Proposal) -> FlowLayoutResult {
        let rows = self.rows(items, proposal);
        let placements = self.place_rows(items, &rows, bounds.origin);
        FlowLayoutResult {
            size: content_size(&rows),
            rows,
            placements,
        }
    }

    fn place_rows<I: FlowItem>(&self, items: &[I], rows: &[Row], origin: Vec2) -> Vec<Placement> {
        let mut placements = Vec::with_capacity(items.len());
        let mut y = origin.y;

        for row in rows {
            y += row.spacing;
            let mut x = origin.x;
            for entry in &row.items {
                x += entry.spacing;
                let offset = vertical_offset(&items[entry.index], entry.size, row.size, self.config.alignment);
                let position = Vec2::new(x, y + offset);
                if self.debug {
                    debug!("Place item {} at {:?} size={:?}", entry.index, position, entry.size);
                }
                placements.push(Placement {
                    index: entry.index,
                    position,
                    size: entry.size,
                });
                x += entry.size.x;
            }
            y += row.size.y;
        }

        placements
    }
}

/// Aggregate size of packed rows.
pub fn content_size(rows: &[Row]) -> Vec2 {
    rows.iter().fold(Vec2::ZERO, |size, row| {
        Vec2::new(size.x.max(row.size.x), size.y + row.size.y + row.spacing)
    })
}
