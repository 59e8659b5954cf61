use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use planar::plane::{bounding_extent, centroid};
use planar::Coord2;
use serde::Serialize;
use serde_json::Value;

/// Summary block embedded in every report.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub count: usize,
    pub centroid: Option<[f64; 2]>,
    pub extent: Option<[f64; 2]>,
}

/// Summarize a coordinate slice; empty input gives null centroid/extent.
pub fn summarize(coords: &[Coord2]) -> Summary {
    Summary {
        count: coords.len(),
        centroid: centroid(coords).map(|c| [c.x(), c.y()]),
        extent: bounding_extent(coords).map(|e| [e.width(), e.height()]),
    }
}

/// Read a JSON array of `[x, y]` pairs into coordinates.
pub fn read_coords(path: &Path) -> Result<Vec<Coord2>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pairs: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(pairs.into_iter().map(|[x, y]| Coord2::new(x, y)).collect())
}

/// Write a report JSON and return its path. Parent directories are created.
pub fn write_report(
    out: &Path,
    label: Option<&str>,
    params: Value,
    summary: &Summary,
) -> Result<PathBuf> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    let doc = serde_json::json!({
        "version": planar::VERSION,
        "label": label,
        "params": params,
        "summary": summary,
    });
    fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(out.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn summarize_known_points() {
        let pts = [Coord2::new(0.0, 0.0), Coord2::new(2.0, 4.0)];
        let s = summarize(&pts);
        assert_eq!(s.count, 2);
        assert_eq!(s.centroid, Some([1.0, 2.0]));
        assert_eq!(s.extent, Some([2.0, 4.0]));
        let empty = summarize(&[]);
        assert_eq!(empty.count, 0);
        assert!(empty.centroid.is_none());
        assert!(empty.extent.is_none());
    }

    #[test]
    fn read_coords_parses_pairs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.json");
        fs::write(&path, "[[1.0, 2.0], [3.5, -4.0]]").unwrap();
        let pts = read_coords(&path).unwrap();
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[1].x(), 3.5);
        assert_eq!(pts[1].y(), -4.0);
    }

    #[test]
    fn read_coords_rejects_malformed_input() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{\"not\": \"pairs\"}").unwrap();
        assert!(read_coords(&path).is_err());
    }

    #[test]
    fn write_report_creates_parents() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("reports").join("run.json");
        let s = summarize(&[Coord2::new(1.0, 1.0)]);
        let path = write_report(&out, Some("demo"), json!({"count": 1}), &s).unwrap();
        assert!(path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["label"], "demo");
        assert_eq!(parsed["summary"]["count"], 1);
        assert_eq!(parsed["params"]["count"], 1);
    }
}
