//! The three grid layouts and a dispatcher over them.

mod bounded;
mod irregular;
mod regular;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::GridLayoutConfig;
use crate::dataset::Dataset;
use crate::error::{GridError, Result};

pub use bounded::{build_bounded, cell_extent, cell_vertices, VERTICES};
pub use irregular::build_irregular;
pub use regular::build_regular;

/// Which layout to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridKind {
    /// 1D center coordinates.
    Regular,
    /// 2D lookup tables.
    Irregular,
    /// Per-cell vertex bounds.
    Bounded,
}

impl GridKind {
    /// Every layout, in build order.
    pub const ALL: [GridKind; 3] = [GridKind::Regular, GridKind::Irregular, GridKind::Bounded];

    pub fn as_str(&self) -> &'static str {
        match self {
            GridKind::Regular => "regular",
            GridKind::Irregular => "irregular",
            GridKind::Bounded => "bounded",
        }
    }
}

impl fmt::Display for GridKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GridKind {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Ok(GridKind::Regular),
            "irregular" => Ok(GridKind::Irregular),
            "bounded" => Ok(GridKind::Bounded),
            _ => Err(GridError::UnknownGridKind(s.to_string())),
        }
    }
}

/// Build one layout.
pub fn build_grid(kind: GridKind, config: &GridLayoutConfig) -> Result<Dataset> {
    match kind {
        GridKind::Regular => build_regular(config),
        GridKind::Irregular => build_irregular(config),
        GridKind::Bounded => build_bounded(config),
    }
}

/// Build every layout. The builders are independent, so the first failure
/// stops the rest.
pub fn build_all(config: &GridLayoutConfig) -> Result<Vec<(GridKind, Dataset)>> {
    GridKind::ALL
        .iter()
        .map(|&kind| Ok((kind, build_grid(kind, config)?)))
        .collect()
}
