//! Scatter summary timing probe.
//!
//! Purpose
//! - Provide a reproducible data point for how long the summary pass takes
//!   on a mid-sized scatter.
//!
//! Why this shape
//! - One fixed replay token, so repeated runs see the same coordinates and
//!   the timing difference is attributable to the machine, not the data.

use std::time::Instant;

use planar::plane::rand::{draw_coords, ReplayToken, ScatterCfg};
use planar::plane::{bounding_extent, centroid};

fn main() {
    let cfg = ScatterCfg {
        count: 10_000,
        width: 4.0,
        height: 3.0,
    };
    let tok = ReplayToken { seed: 7, index: 0 };
    let coords = draw_coords(cfg, tok);

    let start = Instant::now();
    let c = centroid(&coords).expect("non-empty scatter");
    let e = bounding_extent(&coords).expect("non-empty scatter");
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    println!("count={} seed={} index={}", coords.len(), tok.seed, tok.index);
    println!("centroid_x={:.6} centroid_y={:.6}", c.x(), c.y());
    println!("extent_w={:.6} extent_h={:.6}", e.width(), e.height());
    println!("summary_time_ms={elapsed_ms:.3}");
}
