//! Expected-value generators for grid axes.
//!
//! These are written independently of the library's axis helpers, by plain
//! repeated addition, so tests compare two different computations.

/// `count` values starting at `start + offset`, spaced by `step`.
///
/// ```
/// use test_utils::expected_centers;
///
/// assert_eq!(expected_centers(32.0, 0.5, 0.25, 2), vec![32.25, 32.75]);
/// ```
pub fn expected_centers(start: f64, step: f64, offset: f64, count: usize) -> Vec<f64> {
    let mut values = Vec::with_capacity(count);
    let mut current = start + offset;
    for _ in 0..count {
        values.push(current);
        current += step;
    }
    values
}

/// The four `(lat, lon)` vertex lists of a cell bounded by
/// `[south, north] x [west, east]`, counter-clockwise from the lower-left.
pub fn expected_cell_vertices(
    south: f64,
    north: f64,
    west: f64,
    east: f64,
) -> ([f64; 4], [f64; 4]) {
    ([south, south, north, north], [west, east, east, west])
}
