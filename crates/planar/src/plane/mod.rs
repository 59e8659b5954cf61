//! Planar measurement primitives.
//!
//! Purpose
//! - Keep storage of every public value type private and route all reads and
//!   writes through a small accessor surface; callers depend on operation
//!   signatures, never on the stored representation.
//! - Provide slice-level summaries and a deterministic sampler for demos,
//!   benches, and the cli runner.
//!
//! Code cross-refs: `types::{Coord2, GridShape, Extent2}`,
//! `util::{centroid, bounding_extent}`, `rand::draw_coords`.

pub mod rand;
mod types;
mod util;

pub use types::{Coord2, Extent2, GridShape};
pub use util::{bounding_extent, centroid};
