// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests for field synthesis.

use approx::*;
use ndarray::prelude::*;

use super::*;

fn four_element_linear() -> ArrayConfiguration {
    ArrayConfiguration::new(4, 0.5, 0.0).unwrap()
}

fn max_of(field: &FieldGrid) -> f64 {
    field.intensity.iter().copied().fold(f64::MIN, f64::max)
}

#[test]
fn test_default_domain() {
    let domain = FieldDomain::default();
    assert_eq!(domain.resolution, (200, 200));
    let x = domain.x_samples();
    let y = domain.y_samples();
    assert_eq!(x.len(), 200);
    assert_abs_diff_eq!(x[0], -10.0);
    assert_abs_diff_eq!(x[199], 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(y[0], 0.0);
    assert_abs_diff_eq!(y[199], 10.0, epsilon = 1e-12);
}

#[test]
fn test_normalised_single_array() {
    let state = SimulationState::new(1e9, 0.0).unwrap();
    let domain = FieldDomain::new((-5.0, 5.0), (0.0, 5.0), 60);
    let field = synthesize_field(&[four_element_linear()], &state, &domain).unwrap();

    assert_eq!(field.intensity.dim(), (60, 60));
    assert_eq!(field.x.len(), 60);
    assert_eq!(field.y.len(), 60);
    assert_abs_diff_eq!(max_of(&field), 1.0, epsilon = 1e-12);
    assert!(field.intensity.iter().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn test_normalised_many_arrays() {
    let state = SimulationState::new(700e6, 25.0).unwrap();
    let arrays = [
        ArrayConfiguration::new(8, 0.2, 0.0).unwrap(),
        ArrayConfiguration::new(5, 0.3, 90.0).unwrap(),
        ArrayConfiguration::new(1, 0.5, 180.0).unwrap(),
    ];
    let domain = FieldDomain {
        x_range: (-3.0, 3.0),
        y_range: (-1.0, 4.0),
        resolution: (37, 23),
    };
    let field = synthesize_field(&arrays, &state, &domain).unwrap();

    // Rows are y, columns are x.
    assert_eq!(field.intensity.dim(), (23, 37));
    assert_abs_diff_eq!(max_of(&field), 1.0, epsilon = 1e-12);
    assert!(field
        .intensity
        .iter()
        .all(|&v| v.is_finite() && (0.0..=1.0).contains(&v)));
}

#[test]
fn test_no_arrays_gives_zeros() {
    let state = SimulationState::new(1e9, 10.0).unwrap();
    let domain = FieldDomain::new((-1.0, 1.0), (0.0, 1.0), 17);
    let field = synthesize_field(&[], &state, &domain).unwrap();
    assert_eq!(field.intensity.dim(), (17, 17));
    assert_abs_diff_eq!(field.intensity, Array2::<f64>::zeros((17, 17)));
}

#[test]
fn test_broadside_field_is_symmetric() {
    // x samples symmetric about 0, and a linear array symmetric about 0 with no
    // steering; the field must be mirror-symmetric in x.
    let state = SimulationState::new(1e9, 0.0).unwrap();
    let domain = FieldDomain::new((-4.0, 4.0), (0.5, 4.0), 41);
    let field = synthesize_field(&[four_element_linear()], &state, &domain).unwrap();

    for row in field.intensity.rows() {
        for (a, b) in row.iter().zip(row.iter().rev()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-9);
        }
    }

    // The peak is mirrored too.
    let (peak_x, _, peak_value) = field.peak().unwrap();
    assert_abs_diff_eq!(peak_value, 1.0, epsilon = 1e-12);
    let j = field
        .intensity
        .rows()
        .into_iter()
        .position(|row| row.iter().any(|&v| v == peak_value))
        .unwrap();
    let i_mirror = field
        .x
        .iter()
        .position(|&x| (x + peak_x).abs() < 1e-9)
        .unwrap();
    assert_abs_diff_eq!(field.intensity[[j, i_mirror]], 1.0, epsilon = 1e-9);
}

#[test]
fn test_single_element_at_its_position() {
    // One element: |exp(i...)|^2 is 1 everywhere.
    let state = SimulationState::new(1e9, 45.0).unwrap();
    let domain = FieldDomain::new((-1.0, 1.0), (0.0, 1.0), 9);
    let arrays = [ArrayConfiguration::new(1, 0.5, 0.0).unwrap()];
    let field = synthesize_field(&arrays, &state, &domain).unwrap();
    assert_abs_diff_eq!(field.intensity, Array2::<f64>::ones((9, 9)), epsilon = 1e-12);
}

#[test]
fn test_normalisation_is_global() {
    // Two identical arrays add coherently; the unnormalised field is 4x that
    // of one array, so the normalised fields must be identical.
    let state = SimulationState::new(1e9, 15.0).unwrap();
    let domain = FieldDomain::new((-3.0, 3.0), (0.0, 3.0), 31);
    let one = synthesize_field(&[four_element_linear()], &state, &domain).unwrap();
    let two = synthesize_field(
        &[four_element_linear(), four_element_linear()],
        &state,
        &domain,
    )
    .unwrap();
    assert_abs_diff_eq!(one.intensity, two.intensity, epsilon = 1e-9);
}

#[test]
fn test_resolution_of_one() {
    let state = SimulationState::new(1e9, 0.0).unwrap();
    let domain = FieldDomain::new((2.0, 3.0), (1.0, 4.0), 1);
    let field = synthesize_field(&[four_element_linear()], &state, &domain).unwrap();
    assert_eq!(field.intensity.dim(), (1, 1));
    assert_abs_diff_eq!(field.x[0], 2.0);
    assert_abs_diff_eq!(field.y[0], 1.0);
    assert_abs_diff_eq!(field.intensity[[0, 0]], 1.0, epsilon = 1e-12);
}

#[test]
fn test_bad_domains() {
    let state = SimulationState::new(1e9, 0.0).unwrap();
    let arrays = [four_element_linear()];

    let domain = FieldDomain {
        resolution: (0, 10),
        ..Default::default()
    };
    assert_eq!(
        synthesize_field(&arrays, &state, &domain),
        Err(BeamformError::InvalidResolution { nx: 0, ny: 10 })
    );

    let domain = FieldDomain {
        x_range: (f64::NEG_INFINITY, 1.0),
        ..Default::default()
    };
    assert!(matches!(
        synthesize_field(&arrays, &state, &domain),
        Err(BeamformError::InvalidRange { axis: "x", .. })
    ));

    let domain = FieldDomain {
        y_range: (0.0, f64::NAN),
        ..Default::default()
    };
    assert!(matches!(
        synthesize_field(&arrays, &state, &domain),
        Err(BeamformError::InvalidRange { axis: "y", .. })
    ));
}

#[test]
fn test_peak() {
    let grid = FieldGrid {
        x: array![0.0, 1.0, 2.0],
        y: array![10.0, 20.0],
        intensity: array![[0.1, 0.2, 0.3], [0.4, 1.0, 0.5]],
    };
    assert_eq!(grid.peak(), Some((1.0, 20.0, 1.0)));
}

#[test]
fn test_peak_of_empty_grid() {
    let grid = FieldGrid {
        x: Array1::zeros(0),
        y: Array1::zeros(0),
        intensity: Array2::<f64>::zeros((0, 0)),
    };
    assert_eq!(grid.peak(), None);

    // Positions that don't cover the intensities.
    let grid = FieldGrid {
        x: array![0.0],
        y: Array1::zeros(0),
        intensity: Array2::<f64>::ones((2, 2)),
    };
    assert_eq!(grid.peak(), None);
}

#[test]
fn test_peak_skips_nan() {
    let grid = FieldGrid {
        x: array![0.0, 1.0],
        y: array![5.0],
        intensity: array![[f64::NAN, 0.5]],
    };
    assert_eq!(grid.peak(), Some((1.0, 5.0, 0.5)));
}
