//! Fixtures describing the default grid layouts.

/// Latitude range `[south, north]` of the default layouts.
pub const LAT_RANGE: (f64, f64) = (32.0, 35.0);

/// Longitude range `[west, east]` of the default layouts.
pub const LON_RANGE: (f64, f64) = (115.0, 120.0);

/// Spacing of the default base axes.
pub const STEP: f64 = 0.5;

/// Rows (latitude cells) of the default layouts.
pub const ROWS: usize = 6;

/// Columns (longitude cells) of the default layouts.
pub const COLS: usize = 10;

/// Default regular-grid latitude centers.
pub const REGULAR_LAT_CENTERS: [f64; ROWS] = [32.25, 32.75, 33.25, 33.75, 34.25, 34.75];

/// Tolerance for values built by floating-point arithmetic.
pub const EPSILON: f64 = 1e-9;
