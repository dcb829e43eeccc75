//! JSON file formats for point sets and hulls.

use anyhow::{Context, Result};
use planar_hull::Point;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// `{"points": [[x, y], ...]}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointFile {
    pub points: Vec<[f64; 2]>,
}

impl PointFile {
    pub fn from_points(points: &[Point]) -> Self {
        Self {
            points: points.iter().map(|&p| p.into()).collect(),
        }
    }

    pub fn to_points(&self) -> Vec<Point> {
        self.points.iter().map(|&c| Point::from(c)).collect()
    }
}

/// Hull output; `hull` is counter-clockwise and not closed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HullFile {
    pub algo: String,
    pub input_len: usize,
    pub hull: Vec<[f64; 2]>,
    /// Set when both builders ran: whether their vertex sets matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agree: Option<bool>,
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
