//! Irregular grid: 2D latitude/longitude lookup tables.
//!
//! The base axes are nudged by a small per-step perturbation before the
//! Cartesian expansion, so neither 2D array is separable into a single
//! 1D coordinate.

use tracing::debug;

use crate::axis::{arange, combine, meshgrid_xy, Offset};
use crate::config::{GridLayoutConfig, MAX_CELLS};
use crate::dataset::{Dataset, Variable};
use crate::error::{GridError, Result};

/// Build a dataset with `latitude(y, x)` and `longitude(y, x)` auxiliary
/// coordinates.
///
/// Fails with [`GridError::ShapeMismatch`] if a perturbation sequence is not
/// the same length as the axis it perturbs.
pub fn build_irregular(config: &GridLayoutConfig) -> Result<Dataset> {
    config.validate_axes().map_err(GridError::InvalidConfig)?;
    config.validate_jitter().map_err(GridError::InvalidConfig)?;

    let lon = combine(
        "longitude perturbation",
        &arange(config.lon_start, config.lon_stop, config.step)?,
        &arange(0.0, config.lon_jitter_stop, config.jitter_step)?,
        Offset::Add,
    )?;
    let lat = combine(
        "latitude perturbation",
        &arange(config.lat_start, config.lat_stop, config.step)?,
        &arange(0.0, config.lat_jitter_stop, config.jitter_step)?,
        Offset::Subtract,
    )?;

    match lat.len().checked_mul(lon.len()) {
        Some(cells) if cells <= MAX_CELLS => {}
        _ => {
            return Err(GridError::invalid_config(format!(
                "irregular grid of {}x{} exceeds {} cells",
                lat.len(),
                lon.len(),
                MAX_CELLS
            )))
        }
    }

    let (lon_2d, lat_2d) = meshgrid_xy(&lon, &lat);

    debug!(shape = ?lat_2d.dim(), "Built irregular grid");

    Ok(Dataset::new()
        .with_coord("latitude", Variable::new(&["y", "x"], lat_2d))?
        .with_coord("longitude", Variable::new(&["y", "x"], lon_2d))?
        .with_attr("grid_type", "irregular"))
}
