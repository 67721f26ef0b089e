//! One-dimensional coordinate sequences and their Cartesian expansion.
//!
//! These follow the usual array-library conventions: [`arange`] is
//! half-open, [`linspace`] includes both endpoints, and [`meshgrid_xy`]
//! puts the `y` axis on rows and the `x` axis on columns.

use ndarray::{Array1, Array2};

use crate::error::{GridError, Result};

/// Longest sequence [`arange`] will produce.
pub const MAX_AXIS_LEN: usize = 1 << 20;

/// Sign applied to a perturbation sequence in [`combine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    Add,
    Subtract,
}

/// Values `start, start + step, ...` strictly below `stop`.
///
/// Length is `ceil((stop - start) / step)`, clamped at zero. Element `i` is
/// computed as `start + i * step` so errors do not accumulate. A step that
/// would yield more than [`MAX_AXIS_LEN`] values is rejected.
pub fn arange(start: f64, stop: f64, step: f64) -> Result<Array1<f64>> {
    if step == 0.0 || !step.is_finite() || !start.is_finite() || !stop.is_finite() {
        return Err(GridError::InvalidStep { start, stop, step });
    }

    let len = ((stop - start) / step).ceil();
    if !len.is_finite() || len > MAX_AXIS_LEN as f64 {
        return Err(GridError::InvalidStep { start, stop, step });
    }
    let len = if len > 0.0 { len as usize } else { 0 };

    Ok(Array1::from_shape_fn(len, |i| start + i as f64 * step))
}

/// `num` evenly spaced values over `[start, stop]`.
///
/// The final element is pinned to `stop` so closed ranges end exactly on
/// their edge.
pub fn linspace(start: f64, stop: f64, num: usize) -> Array1<f64> {
    match num {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, start),
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values = Array1::from_shape_fn(num, |i| start + i as f64 * step);
            values[num - 1] = stop;
            values
        }
    }
}

/// Add a constant offset to every element.
pub fn shifted(values: &Array1<f64>, offset: f64) -> Array1<f64> {
    values.mapv(|v| v + offset)
}

/// Element-wise `base + perturbation` or `base - perturbation`.
///
/// The two sequences must have the same length; nothing is truncated or
/// padded.
pub fn combine(
    context: &str,
    base: &Array1<f64>,
    perturbation: &Array1<f64>,
    offset: Offset,
) -> Result<Array1<f64>> {
    if base.len() != perturbation.len() {
        return Err(GridError::shape_mismatch(
            context,
            base.len(),
            perturbation.len(),
        ));
    }

    Ok(match offset {
        Offset::Add => base + perturbation,
        Offset::Subtract => base - perturbation,
    })
}

/// Cartesian expansion with "xy" indexing.
///
/// Returns `(xx, yy)`, both shaped `(y.len(), x.len())`, where
/// `xx[[i, j]] == x[j]` and `yy[[i, j]] == y[i]`.
pub fn meshgrid_xy(x: &Array1<f64>, y: &Array1<f64>) -> (Array2<f64>, Array2<f64>) {
    let shape = (y.len(), x.len());
    let xx = Array2::from_shape_fn(shape, |(_, j)| x[j]);
    let yy = Array2::from_shape_fn(shape, |(i, _)| y[i]);
    (xx, yy)
}
