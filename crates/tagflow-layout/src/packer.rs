// crates/tagflow-layout/src/packer.rs
//! Greedy row packing shared by the measure and place passes.

use glam::Vec2;
use tagflow_core::{clamp_size, Axis, FlowConfig, FlowItem, Priority, Proposal, SpacingPreference};
use tracing::{debug, trace};

use crate::spacing::resolve_spacing;

/// An item placed in a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowItem {
    /// Position of the item in the input sequence.
    pub index: usize,
    pub size: Vec2,
    /// Horizontal gap before this item; 0 for the first item of a row.
    pub spacing: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub items: Vec<RowItem>,
    /// Width is the sum of item widths and gaps, height the tallest item.
    pub size: Vec2,
    /// Vertical gap before this row; 0 for the first row.
    pub spacing: f32,
    /// Union of the spacing preferences of every item in the row.
    pub preference: SpacingPreference,
}

impl Row {
    fn new(index: usize, size: Vec2, preference: SpacingPreference) -> Self {
        Self {
            items: vec![RowItem { index, size, spacing: 0.0 }],
            size,
            spacing: 0.0,
            preference,
        }
    }

    /// Row width after appending an item of `width` behind a gap of `spacing`.
    fn width_with(&self, spacing: f32, width: f32) -> f32 {
        self.size.x + (spacing + width)
    }

    fn push(&mut self, index: usize, size: Vec2, spacing: f32, preference: SpacingPreference) {
        self.items.push(RowItem { index, size, spacing });
        self.size.x = self.width_with(spacing, size.x);
        self.size.y = self.size.y.max(size.y);
        self.preference.union(preference);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().map(|item| item.index)
    }
}

fn measure_item<I: FlowItem + ?Sized>(item: &I, proposal: Proposal) -> Vec2 {
    clamp_size(item.measure(proposal))
}

/// Whether a row of `width` stays within the limit.
fn fits(width: f32, limit: Option<f32>) -> bool {
    // `width` must be the value the row stores, or f32 rounding can let an
    // accepted row exceed the limit.
    limit.map_or(true, |limit| width <= limit)
}

/// Partition `items` into rows no wider than the proposal's width.
///
/// Single greedy pass without backtracking. An item wider than the limit
/// still gets a row of its own. Low-priority items are measured against the
/// space left in the current row and re-measured against the full proposal
/// when they wrap.
pub fn pack<I: FlowItem>(items: &[I], proposal: Proposal, config: &FlowConfig, verbose: bool) -> Vec<Row> {
    let limit = proposal.width_limit();
    let mut rows: Vec<Row> = Vec::new();
    let mut previous = SpacingPreference::default();

    for (index, item) in items.iter().enumerate() {
        let preference = SpacingPreference::of(item);
        let low_priority = item.priority() == Priority::Low;

        let size = match rows.last_mut() {
            Some(row) => {
                let spacing = resolve_spacing(config.item_spacing, previous, preference, Axis::Horizontal);
                let consumed = row.size.x + spacing;
                let size = if low_priority {
                    measure_item(item, proposal.excluding_width(consumed))
                } else {
                    measure_item(item, proposal)
                };

                let width = row.width_with(spacing, size.x);
                if fits(width, limit) {
                    if verbose {
                        debug!("Item {} joins row: size={:?}, spacing={}", index, size, spacing);
                    } else {
                        trace!("Item {} joins row: size={:?}, spacing={}", index, size, spacing);
                    }
                    row.push(index, size, spacing, preference);
                    previous = preference;
                    continue;
                }

                if verbose {
                    debug!("Item {} wraps: row would be {} wide, limit {:?}", index, width, limit);
                } else {
                    trace!("Item {} wraps: row would be {} wide, limit {:?}", index, width, limit);
                }
                if low_priority {
                    measure_item(item, proposal)
                } else {
                    size
                }
            }
            None => measure_item(item, proposal),
        };

        rows.push(Row::new(index, size, preference));
        previous = preference;
    }

    for index in 1..rows.len() {
        let above = rows[index - 1].preference;
        let row = &mut rows[index];
        row.spacing = resolve_spacing(config.row_spacing, above, row.preference, Axis::Vertical);
    }

    debug!("Packed {} items into {} rows (limit {:?})", items.len(), rows.len(), limit);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tagflow_core::{AvailableSpace, FixedItem, InputField};

    fn fixed(widths: &[f32], spacing: f32) -> Vec<FixedItem> {
        widths
            .iter()
            .map(|&w| FixedItem::new(w, 20.0).with_spacing(SpacingPreference::uniform(spacing)))
            .collect()
    }

    fn partition(rows: &[Row]) -> Vec<Vec<usize>> {
        rows.iter().map(|row| row.indices().collect()).collect()
    }

    /// Records every proposal it is measured with.
    struct Probe {
        width: f32,
        priority: Priority,
        seen: RefCell<Vec<Proposal>>,
    }

    impl Probe {
        fn new(width: f32, priority: Priority) -> Self {
            Self { width, priority, seen: RefCell::new(Vec::new()) }
        }
    }

    impl FlowItem for Probe {
        fn measure(&self, proposal: Proposal) -> Vec2 {
            self.seen.borrow_mut().push(proposal);
            Vec2::new(self.width, 10.0)
        }

        fn priority(&self) -> Priority {
            self.priority
        }

        fn spacing_preference(&self, _axis: Axis) -> f32 {
            10.0
        }
    }

    #[test]
    fn test_four_items_wrap_into_two_rows() {
        let items = fixed(&[30.0, 30.0, 30.0, 30.0], 10.0);
        let rows = pack(&items, Proposal::width(100.0), &FlowConfig::default(), false);

        assert_eq!(partition(&rows), vec![vec![0, 1], vec![2, 3]]);
        assert_eq!(rows[0].size, Vec2::new(70.0, 20.0));
        assert_eq!(rows[1].size, Vec2::new(70.0, 20.0));
        assert_eq!(rows[0].items[1].spacing, 10.0);
        assert_eq!(rows[1].items[0].spacing, 0.0);
        assert_eq!(rows[0].spacing, 0.0);
        assert_eq!(rows[1].spacing, 10.0);
    }

    #[test]
    fn test_exact_fit_stays_on_row() {
        let items = fixed(&[45.0, 45.0], 10.0);
        let rows = pack(&items, Proposal::width(100.0), &FlowConfig::default(), false);
        assert_eq!(partition(&rows), vec![vec![0, 1]]);
        assert_eq!(rows[0].size.x, 100.0);
    }

    #[test]
    fn test_unbounded_width_packs_single_row() {
        let items = fixed(&[300.0, 500.0, 700.0], 10.0);
        let rows = pack(&items, Proposal::UNBOUNDED, &FlowConfig::default(), false);
        assert_eq!(partition(&rows), vec![vec![0, 1, 2]]);
        assert_eq!(rows[0].size.x, 1520.0);
    }

    #[test]
    fn test_min_content_puts_each_item_on_its_own_row() {
        let items = fixed(&[10.0, 10.0, 10.0], 0.0);
        let proposal = Proposal::new(AvailableSpace::MinContent, AvailableSpace::MaxContent);
        let rows = pack(&items, proposal, &FlowConfig::default(), false);
        assert_eq!(partition(&rows), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_oversized_item_gets_own_row() {
        let items = fixed(&[20.0, 150.0, 20.0], 10.0);
        let rows = pack(&items, Proposal::width(100.0), &FlowConfig::default(), false);
        assert_eq!(partition(&rows), vec![vec![0], vec![1], vec![2]]);
        assert_eq!(rows[1].size.x, 150.0);
    }

    #[test]
    fn test_empty_input_has_no_rows() {
        let items: Vec<FixedItem> = Vec::new();
        assert!(pack(&items, Proposal::width(100.0), &FlowConfig::default(), false).is_empty());
    }

    #[test]
    fn test_item_spacing_override() {
        let items = fixed(&[30.0, 30.0], 20.0);
        let config = FlowConfig::default().with_item_spacing(5.0);
        let rows = pack(&items, Proposal::width(100.0), &config, false);
        assert_eq!(rows[0].items[1].spacing, 5.0);
        assert_eq!(rows[0].size.x, 65.0);
    }

    #[test]
    fn test_row_spacing_uses_row_union() {
        let items = vec![
            FixedItem::new(60.0, 20.0).with_spacing(SpacingPreference::new(0.0, 3.0)),
            FixedItem::new(30.0, 20.0).with_spacing(SpacingPreference::new(0.0, 9.0)),
            FixedItem::new(60.0, 20.0).with_spacing(SpacingPreference::new(0.0, 1.0)),
        ];
        let rows = pack(&items, Proposal::width(100.0), &FlowConfig::default(), false);
        assert_eq!(partition(&rows), vec![vec![0, 1], vec![2]]);
        assert_eq!(rows[0].preference.vertical, 9.0);
        assert_eq!(rows[1].spacing, 9.0);

        let config = FlowConfig::default().with_row_spacing(2.0);
        let rows = pack(&items, Proposal::width(100.0), &config, false);
        assert_eq!(rows[1].spacing, 2.0);
    }

    #[test]
    fn test_low_priority_measured_against_remaining_width() {
        let first = Probe::new(40.0, Priority::Normal);
        let field = Probe::new(30.0, Priority::Low);
        let items: Vec<&dyn FlowItem> = vec![&first, &field];

        let rows = pack(&items, Proposal::width(100.0), &FlowConfig::default(), false);
        assert_eq!(partition(&rows), vec![vec![0, 1]]);

        let seen = field.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].width, AvailableSpace::Definite(50.0));
        assert_eq!(first.seen.borrow()[0].width, AvailableSpace::Definite(100.0));
    }

    #[test]
    fn test_low_priority_first_in_row_gets_full_width() {
        let field = Probe::new(30.0, Priority::Low);
        let items: Vec<&dyn FlowItem> = vec![&field];

        pack(&items, Proposal::width(100.0), &FlowConfig::default(), false);
        assert_eq!(field.seen.borrow()[0].width, AvailableSpace::Definite(100.0));
    }

    #[test]
    fn test_low_priority_wrap_remeasures_with_full_width() {
        let items = vec![
            Box::new(FixedItem::new(80.0, 20.0)) as Box<dyn FlowItem>,
            Box::new(InputField::new(50.0)),
        ];
        let rows = pack(&items, Proposal::width(200.0), &FlowConfig::default(), false);
        // 120 remain after the first item, so the field stays and fills them
        assert_eq!(partition(&rows), vec![vec![0, 1]]);
        assert_eq!(rows[0].items[1].size.x, 120.0);
        assert_eq!(rows[0].size.x, 200.0);

        let rows = pack(&items, Proposal::width(120.0), &FlowConfig::default(), false);
        // Only 40 remain, below the field's minimum: it wraps and takes the full row
        assert_eq!(partition(&rows), vec![vec![0], vec![1]]);
        assert_eq!(rows[1].items[0].size.x, 120.0);
    }

    #[test]
    fn test_fill_width_field_never_overflows_fractional_limit() {
        let config = FlowConfig::default().with_item_spacing(0.1);
        for first_step in 1..40 {
            for limit_step in 1..60 {
                let first = first_step as f32 * 0.1;
                let limit = limit_step as f32 * 0.1;
                let items = vec![
                    Box::new(FixedItem::new(first, 10.0)) as Box<dyn FlowItem>,
                    Box::new(InputField::new(0.0)),
                ];

                let rows = pack(&items, Proposal::width(limit), &config, false);
                if rows[0].len() > 1 {
                    assert!(
                        rows[0].size.x <= limit,
                        "first {} limit {}: row is {} wide",
                        first,
                        limit,
                        rows[0].size.x
                    );
                }
            }
        }
    }

    #[test]
    fn test_negative_measurement_is_clamped() {
        let items = vec![FixedItem::new(-10.0, -5.0), FixedItem::new(10.0, 5.0)];
        let rows = pack(&items, Proposal::width(100.0), &FlowConfig::default(), false);
        assert_eq!(rows[0].items[0].size, Vec2::ZERO);
        assert_eq!(rows[0].size, Vec2::new(10.0, 5.0));
    }
}
