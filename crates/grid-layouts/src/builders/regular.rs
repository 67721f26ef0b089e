//! Regular grid: 1D cell-center coordinates on both axes.

use tracing::debug;

use crate::axis::{arange, shifted};
use crate::config::GridLayoutConfig;
use crate::dataset::{Dataset, Variable};
use crate::error::{GridError, Result};

/// Build a dataset whose `lat` and `lon` dimension coordinates are the
/// cell centers of the configured ranges.
pub fn build_regular(config: &GridLayoutConfig) -> Result<Dataset> {
    config.validate_axes().map_err(GridError::InvalidConfig)?;

    let lat = shifted(
        &arange(config.lat_start, config.lat_stop, config.step)?,
        config.center_offset,
    );
    let lon = shifted(
        &arange(config.lon_start, config.lon_stop, config.step)?,
        config.center_offset,
    );

    debug!(lat = lat.len(), lon = lon.len(), "Built regular grid");

    Ok(Dataset::new()
        .with_coord("lat", Variable::new(&["lat"], lat))?
        .with_coord("lon", Variable::new(&["lon"], lon))?
        .with_attr("grid_type", "regular"))
}
