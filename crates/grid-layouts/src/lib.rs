//! Labeled latitude/longitude grid datasets.
//!
//! Three ways of describing the same 6×10 patch of cells over
//! 32–35°N, 115–120°E:
//!
//! - **Regular**: `lat(lat)` and `lon(lon)` cell centers.
//! - **Irregular**: `latitude(y, x)` and `longitude(y, x)` lookup tables.
//! - **Bounded**: `lat_bounds(y, x, vertices)` and
//!   `lon_bounds(y, x, vertices)` cell corners.
//!
//! # Example
//!
//! ```
//! use grid_layouts::{build_grid, GridKind, GridLayoutConfig};
//!
//! let config = GridLayoutConfig::default();
//! let ds = build_grid(GridKind::Bounded, &config).unwrap();
//! assert_eq!(ds.shape_of("lat_bounds").unwrap(), vec![6, 10, 4]);
//! ```

pub mod axis;
pub mod builders;
pub mod config;
pub mod dataset;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use builders::{
    build_all, build_bounded, build_grid, build_irregular, build_regular, cell_extent,
    cell_vertices, GridKind, VERTICES,
};
pub use config::GridLayoutConfig;
pub use dataset::{Dataset, DatasetSummary, Variable, VariableSummary};
pub use error::{GridError, Result};
pub use types::BoundingBox;
