//! Shared test utilities for the grid-layouts workspace.
//!
//! This crate provides:
//! - Approximate floating-point assertions
//! - Expected-value generators for grid axes
//! - Fixtures describing the default layouts
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

/// Describe why `left` and `right` are not within `epsilon` of each other.
///
/// Returns `None` when they are close enough. NaN on either side never
/// compares close.
pub fn approx_mismatch(left: f64, right: f64, epsilon: f64) -> Option<String> {
    let diff = (left - right).abs();
    if diff <= epsilon {
        None
    } else {
        Some(format!(
            "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
            left, right, diff, epsilon
        ))
    }
}

/// Approximate floating-point equality, with optional context.
///
/// ```
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64);
/// assert_approx_eq!(32.25, 32.25, 1e-9, "cell ({}, {})", 0, 0);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr $(,)?) => {{
        if let Some(msg) = $crate::approx_mismatch($left as f64, $right as f64, $epsilon as f64) {
            panic!("{}", msg);
        }
    }};
    ($left:expr, $right:expr, $epsilon:expr, $($context:tt)+) => {{
        if let Some(msg) = $crate::approx_mismatch($left as f64, $right as f64, $epsilon as f64) {
            panic!("{}: {}", format!($($context)+), msg);
        }
    }};
}

/// Element-wise approximate equality of two sequences of the same length.
///
/// ```
/// use test_utils::assert_all_close;
///
/// assert_all_close!([32.25, 32.75], vec![32.25, 32.750000001], 1e-6);
/// ```
#[macro_export]
macro_rules! assert_all_close {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: Vec<f64> = $left.iter().map(|v| *v as f64).collect();
        let right: Vec<f64> = $right.iter().map(|v| *v as f64).collect();
        assert_eq!(
            left.len(),
            right.len(),
            "length mismatch: {:?} vs {:?}",
            left,
            right
        );
        for (i, (l, r)) in left.iter().zip(right.iter()).enumerate() {
            $crate::assert_approx_eq!(*l, *r, $epsilon, "index {}", i);
        }
    }};
}
