//! Integration tests for the three grid layouts with their default constants.

use grid_layouts::{
    build_all, build_bounded, build_irregular, build_regular, cell_extent, BoundingBox,
    GridError, GridKind, GridLayoutConfig,
};
use test_utils::{
    assert_all_close, assert_approx_eq, expected_cell_vertices, expected_centers, COLS,
    EPSILON, LAT_RANGE, LON_RANGE, REGULAR_LAT_CENTERS, ROWS, STEP,
};

// ============================================================================
// Regular grid
// ============================================================================

#[test]
fn test_regular_latitude_centers() {
    let ds = build_regular(&GridLayoutConfig::default()).unwrap();
    let lat = ds.coord("lat").unwrap();

    assert_eq!(lat.dims, vec!["lat".to_string()]);
    assert_all_close!(lat.data, REGULAR_LAT_CENTERS, EPSILON);
}

#[test]
fn test_regular_longitude_centers() {
    let ds = build_regular(&GridLayoutConfig::default()).unwrap();
    let lon = ds.coord("lon").unwrap();

    assert_eq!(lon.shape(), &[COLS]);
    assert_approx_eq!(lon.data[[0]], 115.25, EPSILON);
    assert_all_close!(
        lon.data,
        expected_centers(LON_RANGE.0, STEP, 0.25, COLS),
        EPSILON
    );
}

// ============================================================================
// Irregular grid
// ============================================================================

#[test]
fn test_irregular_meshgrid_layout() {
    let ds = build_irregular(&GridLayoutConfig::default()).unwrap();
    let lat = &ds.coord("latitude").unwrap().data;
    let lon = &ds.coord("longitude").unwrap().data;

    assert_eq!(lat.shape(), &[ROWS, COLS]);
    assert_eq!(lon.shape(), &[ROWS, COLS]);

    for i in 0..ROWS {
        for j in 0..COLS {
            // Latitude varies only along rows, longitude only along columns.
            assert_eq!(lat[[i, j]], lat[[i, 0]]);
            assert_eq!(lon[[i, j]], lon[[0, j]]);
        }
    }
}

#[test]
fn test_irregular_perturbation_values() {
    let ds = build_irregular(&GridLayoutConfig::default()).unwrap();
    let lat = &ds.coord("latitude").unwrap().data;
    let lon = &ds.coord("longitude").unwrap().data;

    // base - k * 0.01 on latitude, base + k * 0.01 on longitude
    assert_approx_eq!(lat[[0, 0]], 32.0, EPSILON);
    assert_approx_eq!(lat[[5, 0]], 34.5 - 0.05, EPSILON);
    assert_approx_eq!(lon[[0, 0]], 115.0, EPSILON);
    assert_approx_eq!(lon[[0, 9]], 119.5 + 0.09, EPSILON);
}

#[test]
fn test_irregular_length_mismatch_is_error() {
    let config = GridLayoutConfig {
        lon_jitter_stop: 0.195,
        ..Default::default()
    };

    match build_irregular(&config) {
        Err(GridError::ShapeMismatch { left, right, .. }) => {
            assert_eq!(left, COLS);
            assert_eq!(right, 20);
        }
        other => panic!("expected shape mismatch, got {:?}", other),
    }
}

// ============================================================================
// Bounded grid
// ============================================================================

#[test]
fn test_bounded_first_cell() {
    let ds = build_bounded(&GridLayoutConfig::default()).unwrap();
    let lat = &ds.data_var("lat_bounds").unwrap().data;
    let lon = &ds.data_var("lon_bounds").unwrap().data;

    let (expected_lat, expected_lon) = expected_cell_vertices(32.0, 32.5, 115.0, 115.5);
    for v in 0..4 {
        assert_approx_eq!(lat[[0, 0, v]], expected_lat[v], EPSILON);
        assert_approx_eq!(lon[[0, 0, v]], expected_lon[v], EPSILON);
    }
}

#[test]
fn test_bounded_edges_are_flat() {
    let ds = build_bounded(&GridLayoutConfig::default()).unwrap();
    let lat = &ds.data_var("lat_bounds").unwrap().data;
    let lon = &ds.data_var("lon_bounds").unwrap().data;

    for i in 0..ROWS {
        for j in 0..COLS {
            assert_eq!(lat[[i, j, 0]], lat[[i, j, 1]], "bottom edge at ({}, {})", i, j);
            assert_eq!(lat[[i, j, 2]], lat[[i, j, 3]], "top edge at ({}, {})", i, j);
            assert_eq!(lon[[i, j, 0]], lon[[i, j, 3]], "left edge at ({}, {})", i, j);
            assert_eq!(lon[[i, j, 1]], lon[[i, j, 2]], "right edge at ({}, {})", i, j);
            assert!(lat[[i, j, 2]] > lat[[i, j, 0]]);
            assert!(lon[[i, j, 1]] > lon[[i, j, 0]]);
        }
    }
}

#[test]
fn test_bounded_neighbors_share_edges() {
    let ds = build_bounded(&GridLayoutConfig::default()).unwrap();

    for i in 0..ROWS - 1 {
        for j in 0..COLS - 1 {
            let here = cell_extent(&ds, i, j).unwrap();
            let east = cell_extent(&ds, i, j + 1).unwrap();
            let north = cell_extent(&ds, i + 1, j).unwrap();
            assert_eq!(here.max_lon, east.min_lon);
            assert_eq!(here.max_lat, north.min_lat);
        }
    }
}

#[test]
fn test_bounded_covers_full_extent() {
    let ds = build_bounded(&GridLayoutConfig::default()).unwrap();
    let lat_range = ds.data_var("lat_bounds").unwrap().value_range().unwrap();
    let lon_range = ds.data_var("lon_bounds").unwrap().value_range().unwrap();

    assert_eq!(lat_range, LAT_RANGE);
    assert_eq!(lon_range, LON_RANGE);
    assert_eq!(
        GridLayoutConfig::default().extent(),
        BoundingBox::new(LON_RANGE.0, LAT_RANGE.0, LON_RANGE.1, LAT_RANGE.1)
    );
}

#[test]
fn test_bounded_custom_size() {
    let config = GridLayoutConfig {
        bounded_rows: 3,
        bounded_cols: 4,
        ..Default::default()
    };
    let ds = build_bounded(&config).unwrap();
    assert_eq!(ds.shape_of("lon_bounds").unwrap(), vec![3, 4, 4]);

    let extent = cell_extent(&ds, 0, 0).unwrap();
    assert_approx_eq!(extent.height(), 1.0, EPSILON);
    assert_approx_eq!(extent.width(), 1.25, EPSILON);
}

#[test]
fn test_bounded_rejects_sizes_that_cannot_be_allocated() {
    for (rows, cols) in [(usize::MAX, COLS), (ROWS, usize::MAX), (1 << 40, 1 << 40)] {
        let config = GridLayoutConfig {
            bounded_rows: rows,
            bounded_cols: cols,
            ..Default::default()
        };
        match build_bounded(&config) {
            Err(GridError::InvalidConfig(_)) => {}
            other => panic!("{}x{}: expected config error, got {:?}", rows, cols, other),
        }
    }
}

// ============================================================================
// Configuration scoping
// ============================================================================

#[test]
fn test_axis_builders_ignore_bounded_size() {
    let config = GridLayoutConfig {
        bounded_rows: 0,
        bounded_cols: 0,
        ..Default::default()
    };

    assert!(build_regular(&config).is_ok());
    assert!(build_irregular(&config).is_ok());
    assert!(matches!(
        build_bounded(&config),
        Err(GridError::InvalidConfig(_))
    ));
}

#[test]
fn test_tiny_step_is_an_error() {
    let config = GridLayoutConfig {
        step: 1e-12,
        ..Default::default()
    };

    assert!(build_regular(&config).is_err());
    assert!(build_irregular(&config).is_err());
    // The bounded grid does not use the step.
    assert!(build_bounded(&config).is_ok());
}

// ============================================================================
// All layouts
// ============================================================================

#[test]
fn test_rebuild_is_bit_identical() {
    let config = GridLayoutConfig::default();
    let first = build_all(&config).unwrap();
    let second = build_all(&config).unwrap();

    assert_eq!(first.len(), 3);
    for ((kind_a, ds_a), (kind_b, ds_b)) in first.iter().zip(second.iter()) {
        assert_eq!(kind_a, kind_b);
        for (name, var) in ds_a.coords().iter().chain(ds_a.data_vars()) {
            let other = ds_b.variable(name).unwrap();
            let bits_a: Vec<u64> = var.data.iter().map(|v| v.to_bits()).collect();
            let bits_b: Vec<u64> = other.data.iter().map(|v| v.to_bits()).collect();
            assert_eq!(bits_a, bits_b, "{} differs in {}", name, kind_a);
        }
    }
}

#[test]
fn test_build_all_order() {
    let kinds: Vec<GridKind> = build_all(&GridLayoutConfig::default())
        .unwrap()
        .into_iter()
        .map(|(kind, _)| kind)
        .collect();
    assert_eq!(kinds, GridKind::ALL.to_vec());
}

#[test]
fn test_summary_json_shape() {
    let ds = build_bounded(&GridLayoutConfig::default()).unwrap();
    let json = serde_json::to_value(ds.summary()).unwrap();

    assert_eq!(json["dims"]["vertices"], 4);
    assert_eq!(json["data_vars"]["lat_bounds"]["shape"], serde_json::json!([6, 10, 4]));
    assert_eq!(json["data_vars"]["lon_bounds"]["min"], 115.0);
    assert_eq!(json["attrs"]["grid_type"], "bounded");
}
