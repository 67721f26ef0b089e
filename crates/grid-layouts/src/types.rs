//! Core geographic types.

use serde::{Deserialize, Serialize};

/// A geographic bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Degenerate box covering a single point.
    pub fn point(lon: f64, lat: f64) -> Self {
        Self::new(lon, lat, lon, lat)
    }

    /// Grow the box just enough to cover `(lon, lat)`.
    pub fn extend(self, lon: f64, lat: f64) -> Self {
        Self::new(
            self.min_lon.min(lon),
            self.min_lat.min(lat),
            self.max_lon.max(lon),
            self.max_lat.max(lat),
        )
    }

    /// East-west span in degrees.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// North-south span in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}
