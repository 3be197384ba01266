// crates/tagflow-layout/src/spacing.rs
use tagflow_core::{Axis, SpacingPreference};

/// Gap between two neighbours along `axis`.
///
/// A configured override wins unconditionally; otherwise the stricter of the
/// two declared preferences is used. The result is never negative.
pub fn resolve_spacing(
    override_spacing: Option<f32>,
    leading: SpacingPreference,
    trailing: SpacingPreference,
    axis: Axis,
) -> f32 {
    let spacing = match override_spacing {
        Some(spacing) => spacing,
        None => leading.distance_to(&trailing, axis),
    };
    // Also maps NaN to zero
    spacing.max(0.0)
}
