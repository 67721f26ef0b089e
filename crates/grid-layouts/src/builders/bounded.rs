//! Bounded grid: explicit corner vertices for every cell.
//!
//! Vertices run counter-clockwise from the lower-left corner:
//!
//! ```text
//!   3 ──── 2
//!   │      │
//!   0 ──── 1
//! ```

use ndarray::Array3;
use tracing::debug;

use crate::axis::linspace;
use crate::config::GridLayoutConfig;
use crate::dataset::{Dataset, Variable};
use crate::error::{GridError, Result};
use crate::types::BoundingBox;

/// Corners per cell.
pub const VERTICES: usize = 4;

/// Build a dataset with `lat_bounds(y, x, vertices)` and
/// `lon_bounds(y, x, vertices)` data variables.
pub fn build_bounded(config: &GridLayoutConfig) -> Result<Dataset> {
    config.validate_bounded().map_err(GridError::InvalidConfig)?;

    let (ny, nx) = (config.bounded_rows, config.bounded_cols);
    let too_large = || {
        GridError::invalid_config(format!("bounded grid of {}x{} is too large", ny, nx))
    };
    let lat_edge_count = ny.checked_add(1).ok_or_else(too_large)?;
    let lon_edge_count = nx.checked_add(1).ok_or_else(too_large)?;
    let vertex_count = ny
        .checked_mul(nx)
        .and_then(|cells| cells.checked_mul(VERTICES))
        .ok_or_else(too_large)?;

    let lat_edges = linspace(config.lat_start, config.lat_stop, lat_edge_count);
    let lon_edges = linspace(config.lon_start, config.lon_stop, lon_edge_count);

    let mut lat_bounds = Array3::<f64>::zeros((ny, nx, VERTICES));
    let mut lon_bounds = Array3::<f64>::zeros((ny, nx, VERTICES));

    for i in 0..ny {
        for j in 0..nx {
            let lat = [lat_edges[i], lat_edges[i], lat_edges[i + 1], lat_edges[i + 1]];
            let lon = [lon_edges[j], lon_edges[j + 1], lon_edges[j + 1], lon_edges[j]];
            for v in 0..VERTICES {
                lat_bounds[[i, j, v]] = lat[v];
                lon_bounds[[i, j, v]] = lon[v];
            }
        }
    }

    debug!(rows = ny, cols = nx, vertices = vertex_count, "Built bounded grid");

    Ok(Dataset::new()
        .with_data_var("lat_bounds", Variable::new(&["y", "x", "vertices"], lat_bounds))?
        .with_data_var("lon_bounds", Variable::new(&["y", "x", "vertices"], lon_bounds))?
        .with_attr("grid_type", "bounded"))
}

/// The four `(lon, lat)` corners of cell `(row, col)` in vertex order.
pub fn cell_vertices(ds: &Dataset, row: usize, col: usize) -> Result<[(f64, f64); VERTICES]> {
    let lat = &ds.data_var("lat_bounds")?.data;
    let lon = &ds.data_var("lon_bounds")?.data;

    let (rows, cols) = match lat.shape() {
        [rows, cols, _] => (*rows, *cols),
        _ => {
            return Err(GridError::RankMismatch {
                name: "lat_bounds".to_string(),
                dims: 3,
                rank: lat.ndim(),
            })
        }
    };
    if row >= rows || col >= cols {
        return Err(GridError::IndexOutOfBounds {
            row,
            col,
            rows,
            cols,
        });
    }
    if lon.shape() != lat.shape() {
        return Err(GridError::shape_mismatch(
            "lon_bounds vs lat_bounds",
            lon.len(),
            lat.len(),
        ));
    }

    let mut corners = [(0.0, 0.0); VERTICES];
    for (v, corner) in corners.iter_mut().enumerate() {
        *corner = (lon[[row, col, v]], lat[[row, col, v]]);
    }
    Ok(corners)
}

/// Geographic extent of cell `(row, col)`.
pub fn cell_extent(ds: &Dataset, row: usize, col: usize) -> Result<BoundingBox> {
    let corners = cell_vertices(ds, row, col)?;
    let (lon, lat) = corners[0];
    Ok(corners[1..]
        .iter()
        .fold(BoundingBox::point(lon, lat), |bbox, &(lon, lat)| {
            bbox.extend(lon, lat)
        }))
}
