//! Encapsulated planar value types and scatter summaries.
//!
//! - `plane::Coord2`: mutable 2D coordinate behind scalar accessors.
//! - `plane::GridShape`: integer pair fixed at construction.
//! - `plane::Extent2`: locally-owned width/height, captured from
//!   externally-owned vectors on receipt.
//! - `plane::rand`: deterministic scatter sampling with replay tokens.

pub mod plane;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use plane::{Coord2, Extent2, GridShape};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::plane::rand::{draw_coords, ReplayToken, ScatterCfg};
    pub use crate::plane::{bounding_extent, centroid, Coord2, Extent2, GridShape};
    pub use crate::span;
    pub use nalgebra::Vector2 as Vec2;
}

/// Extent of the axis-aligned box spanned by two coordinates.
#[inline]
pub fn span(a: &Coord2, b: &Coord2) -> Extent2 {
    Extent2::new((a.x() - b.x()).abs(), (a.y() - b.y()).abs())
}
