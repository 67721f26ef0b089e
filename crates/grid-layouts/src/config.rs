//! Configuration for the grid builders.

use serde::{Deserialize, Serialize};

use crate::axis::MAX_AXIS_LEN;
use crate::types::BoundingBox;

/// Largest bounded grid, in cells.
pub const MAX_CELLS: usize = 1 << 22;

/// Constants shared by the regular, irregular and bounded builders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayoutConfig {
    /// Southern edge of the latitude range (degrees).
    pub lat_start: f64,
    /// Northern edge of the latitude range (degrees).
    pub lat_stop: f64,
    /// Western edge of the longitude range (degrees).
    pub lon_start: f64,
    /// Eastern edge of the longitude range (degrees).
    pub lon_stop: f64,
    /// Spacing of the base axes (degrees).
    pub step: f64,
    /// Shift from a cell's lower edge to its center.
    pub center_offset: f64,

    /// Exclusive end of the longitude perturbation sequence.
    pub lon_jitter_stop: f64,
    /// Exclusive end of the latitude perturbation sequence.
    pub lat_jitter_stop: f64,
    /// Spacing of both perturbation sequences.
    pub jitter_step: f64,

    /// Rows of the bounded grid.
    pub bounded_rows: usize,
    /// Columns of the bounded grid.
    pub bounded_cols: usize,
}

impl Default for GridLayoutConfig {
    fn default() -> Self {
        Self {
            lat_start: 32.0,
            lat_stop: 35.0,
            lon_start: 115.0,
            lon_stop: 120.0,
            step: 0.5,
            center_offset: 0.25,
            lon_jitter_stop: 0.1,
            lat_jitter_stop: 0.06,
            jitter_step: 0.01,
            bounded_rows: 6,
            bounded_cols: 10,
        }
    }
}

impl GridLayoutConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        override_from_env("GRID_LAT_START", &mut config.lat_start);
        override_from_env("GRID_LAT_STOP", &mut config.lat_stop);
        override_from_env("GRID_LON_START", &mut config.lon_start);
        override_from_env("GRID_LON_STOP", &mut config.lon_stop);
        override_from_env("GRID_STEP", &mut config.step);
        override_from_env("GRID_CENTER_OFFSET", &mut config.center_offset);
        override_from_env("GRID_BOUNDED_ROWS", &mut config.bounded_rows);
        override_from_env("GRID_BOUNDED_COLS", &mut config.bounded_cols);

        config
    }

    /// Validate the configuration used by every builder.
    pub fn validate(&self) -> Result<(), String> {
        self.validate_axes()?;
        self.validate_jitter()?;
        self.validate_bounded()
    }

    /// Validate the base axes used by the regular and irregular grids.
    pub fn validate_axes(&self) -> Result<(), String> {
        positive("step", self.step)?;
        self.validate_ranges()?;

        for (name, span) in [
            ("latitude", self.lat_stop - self.lat_start),
            ("longitude", self.lon_stop - self.lon_start),
        ] {
            if span / self.step > MAX_AXIS_LEN as f64 {
                return Err(format!(
                    "{} axis would exceed {} points",
                    name, MAX_AXIS_LEN
                ));
            }
        }

        Ok(())
    }

    /// Validate the perturbation sequences of the irregular grid.
    pub fn validate_jitter(&self) -> Result<(), String> {
        positive("jitter_step", self.jitter_step)?;

        for (name, stop) in [
            ("lon_jitter_stop", self.lon_jitter_stop),
            ("lat_jitter_stop", self.lat_jitter_stop),
        ] {
            if !stop.is_finite() || stop / self.jitter_step > MAX_AXIS_LEN as f64 {
                return Err(format!("{} is out of range", name));
            }
        }

        Ok(())
    }

    /// Validate the size and extent of the bounded grid.
    pub fn validate_bounded(&self) -> Result<(), String> {
        self.validate_ranges()?;

        if self.bounded_rows == 0 || self.bounded_cols == 0 {
            return Err("bounded_rows and bounded_cols must be > 0".to_string());
        }

        match self.bounded_rows.checked_mul(self.bounded_cols) {
            Some(cells) if cells <= MAX_CELLS => Ok(()),
            _ => Err(format!(
                "bounded grid of {}x{} exceeds {} cells",
                self.bounded_rows, self.bounded_cols, MAX_CELLS
            )),
        }
    }

    fn validate_ranges(&self) -> Result<(), String> {
        if !(self.lat_start.is_finite() && self.lat_stop.is_finite())
            || self.lat_stop <= self.lat_start
        {
            return Err("lat_stop must be > lat_start".to_string());
        }

        if !(self.lon_start.is_finite() && self.lon_stop.is_finite())
            || self.lon_stop <= self.lon_start
        {
            return Err("lon_stop must be > lon_start".to_string());
        }

        Ok(())
    }

    /// Geographic extent covered by the configured ranges.
    pub fn extent(&self) -> BoundingBox {
        BoundingBox::new(self.lon_start, self.lat_start, self.lon_stop, self.lat_stop)
    }
}

fn positive(name: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(format!("{} must be a positive number", name))
    }
}

fn override_from_env<T: std::str::FromStr>(key: &str, target: &mut T) {
    if let Ok(val) = std::env::var(key) {
        if let Ok(parsed) = val.parse() {
            *target = parsed;
        }
    }
}
