// crates/tagflow-core/src/geometry.rs
use glam::Vec2;

pub use taffy::style::AvailableSpace;

/// Layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Size hint handed to an item's measure function.
///
/// Each axis is a taffy [`AvailableSpace`]: a definite length, or one of the
/// intrinsic modes. `MaxContent` is treated as unbounded; `MinContent` packs
/// as a zero-width limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proposal {
    pub width: AvailableSpace,
    pub height: AvailableSpace,
}

impl Proposal {
    pub const UNBOUNDED: Proposal = Proposal {
        width: AvailableSpace::MaxContent,
        height: AvailableSpace::MaxContent,
    };

    pub fn new(width: AvailableSpace, height: AvailableSpace) -> Self {
        Self { width, height }
    }

    /// Definite width, unbounded height. The usual proposal for a flow.
    pub fn width(width: f32) -> Self {
        Self {
            width: AvailableSpace::Definite(width),
            height: AvailableSpace::MaxContent,
        }
    }

    pub fn definite(width: f32, height: f32) -> Self {
        Self {
            width: AvailableSpace::Definite(width),
            height: AvailableSpace::Definite(height),
        }
    }

    /// Build from optional dimensions, `None` meaning unbounded.
    pub fn from_options(width: Option<f32>, height: Option<f32>) -> Self {
        let axis = |value: Option<f32>| match value {
            Some(v) => AvailableSpace::Definite(v),
            None => AvailableSpace::MaxContent,
        };
        Self {
            width: axis(width),
            height: axis(height),
        }
    }

    /// Width that a row may not exceed, or `None` when unbounded.
    pub fn width_limit(&self) -> Option<f32> {
        match self.width {
            AvailableSpace::Definite(width) => Some(width.max(0.0)),
            AvailableSpace::MinContent => Some(0.0),
            AvailableSpace::MaxContent => None,
        }
    }

    /// Narrow a definite width by `consumed`, never below zero.
    /// Intrinsic widths pass through untouched.
    pub fn excluding_width(self, consumed: f32) -> Self {
        let width = match self.width {
            AvailableSpace::Definite(width) => AvailableSpace::Definite((width - consumed).max(0.0)),
            other => other,
        };
        Self { width, ..self }
    }
}

impl Default for Proposal {
    fn default() -> Self {
        Proposal::UNBOUNDED
    }
}

impl From<taffy::geometry::Size<AvailableSpace>> for Proposal {
    fn from(size: taffy::geometry::Size<AvailableSpace>) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

/// Rectangle a flow is placed into.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn from_size(size: Vec2) -> Self {
        Self {
            origin: Vec2::ZERO,
            size,
        }
    }

    /// Proposal matching this rectangle's size.
    pub fn proposal(&self) -> Proposal {
        Proposal::definite(self.size.x, self.size.y)
    }
}

/// Clamp a measured size to non-negative components.
pub fn clamp_size(size: Vec2) -> Vec2 {
    // f32::max drops NaN in favour of the other operand
    Vec2::new(size.x.max(0.0), size.y.max(0.0))
}
