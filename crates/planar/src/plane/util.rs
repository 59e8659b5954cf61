use nalgebra::Vector2;

use super::types::{Coord2, Extent2};

/// Crate-internal accumulator; the summaries below poke its fields directly,
/// visibility stops at the crate boundary.
pub(crate) struct RunningSum {
    pub sum: Vector2<f64>,
    pub count: usize,
}

impl RunningSum {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            sum: Vector2::zeros(),
            count: 0,
        }
    }
}

/// Arithmetic mean of the coordinates. `None` on an empty slice.
pub fn centroid(coords: &[Coord2]) -> Option<Coord2> {
    if coords.is_empty() {
        return None;
    }
    let mut acc = RunningSum::new();
    for c in coords {
        acc.sum += c.to_vector();
        acc.count += 1;
    }
    let mean = acc.sum / (acc.count as f64);
    Some(Coord2::new(mean.x, mean.y))
}

/// Width/height of the axis-aligned bounding box. `None` on an empty slice.
pub fn bounding_extent(coords: &[Coord2]) -> Option<Extent2> {
    let first = coords.first()?;
    let mut min = first.to_vector();
    let mut max = min;
    for c in &coords[1..] {
        let v = c.to_vector();
        min.x = min.x.min(v.x);
        min.y = min.y.min(v.y);
        max.x = max.x.max(v.x);
        max.y = max.y.max(v.y);
    }
    Some(Extent2::capture(max - min))
}
