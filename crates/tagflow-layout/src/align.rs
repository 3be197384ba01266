// crates/tagflow-layout/src/align.rs
use glam::Vec2;
use tagflow_core::{Axis, FlowItem, VerticalAlignment};

/// Vertical offset of an item inside its row.
///
/// Edge alignments put the item's top, middle or bottom on the row's. Anchor
/// alignment scales the item's anchor by the row/item height ratio:
/// `anchor * (row_height / item_height - 1)`. Items without an anchor, and
/// items with no height, sit at the top.
pub fn vertical_offset<I: FlowItem + ?Sized>(
    item: &I,
    item_size: Vec2,
    row_size: Vec2,
    alignment: VerticalAlignment,
) -> f32 {
    if item_size.y <= 0.0 {
        return 0.0;
    }

    match alignment {
        VerticalAlignment::Top => 0.0,
        VerticalAlignment::Center => (row_size.y - item_size.y) / 2.0,
        VerticalAlignment::Bottom => row_size.y - item_size.y,
        VerticalAlignment::Anchor => {
            let anchor = item.anchor_value(Axis::Vertical, item_size).unwrap_or(0.0);
            anchor * (row_size.y / item_size.y - 1.0)
        }
    }
}
