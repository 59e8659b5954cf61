//! Core value types: coordinates, grid shapes, extents.
//!
//! - `Coord2`: mutable 2D coordinate; storage private, access through scalar
//!   accessors and mutators.
//! - `GridShape`: integer pair fixed at construction, no mutators.
//! - `Extent2`: locally-owned width/height; `capture` copies an external
//!   vector's components on receipt.

use nalgebra::Vector2;

/// Mutable 2D coordinate with private storage.
///
/// Invariants:
/// - Components are reachable externally only through `x`/`y` and
///   `set_x`/`set_y`; the stored representation is free to change behind
///   them (it is currently a single `Vector2`, not two scalar fields).
/// - Any finite `f64` is accepted; construction and writes never fail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord2 {
    v: Vector2<f64>,
}

impl Coord2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            v: Vector2::new(x, y),
        }
    }
    /// Current first component.
    #[inline]
    pub fn x(&self) -> f64 {
        self.v.x
    }
    /// Current second component.
    #[inline]
    pub fn y(&self) -> f64 {
        self.v.y
    }
    /// Replace the first component.
    #[inline]
    pub fn set_x(&mut self, value: f64) {
        self.v.x = value;
    }
    /// Replace the second component.
    #[inline]
    pub fn set_y(&mut self, value: f64) {
        self.v.y = value;
    }
    /// Copy of the components as a vector.
    #[inline]
    pub(crate) fn to_vector(self) -> Vector2<f64> {
        self.v
    }
}

/// Grid dimensions fixed at construction.
///
/// Invariants:
/// - `(rows, cols)` never changes after `new`; no mutator exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridShape {
    rows: u32,
    cols: u32,
}

impl GridShape {
    #[inline]
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }
    /// Total cell count.
    #[inline]
    pub fn cell_count(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.cols)
    }
}

/// Locally-owned width/height.
///
/// Invariants:
/// - Values captured from an external vector are independent of it from the
///   moment of the call; later writes on either side do not propagate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent2 {
    width: f64,
    height: f64,
}

impl Extent2 {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
    /// Copy an externally-owned vector's components into a local extent.
    ///
    /// `Vector2` exposes its components to any holder of the value, so the
    /// copy happens on receipt, before the caller can touch them again.
    #[inline]
    pub fn capture(v: Vector2<f64>) -> Self {
        Self {
            width: v.x,
            height: v.y,
        }
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl From<Vector2<f64>> for Extent2 {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Extent2::capture(v)
    }
}
