// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code for the far-field array factor (beam profile) of a single array.


use ndarray::prelude::*;
use num_complex::Complex64 as c64;
use rayon::prelude::*;
use tracing::trace;

use crate::{
    constants::*, element_positions, field::normalise, ArrayConfiguration, BeamformError,
    SimulationState,
};

/// A set of evenly spaced observation angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSweep {
    /// \[degrees from broadside\]
    pub start_degrees: f64,

    /// \[degrees from broadside\]
    pub end_degrees: f64,

    /// The number of angles, including both ends.
    pub num_samples: usize,
}

impl Default for AngleSweep {
    fn default() -> Self {
        AngleSweep {
            start_degrees: DEFAULT_SWEEP_RANGE.0,
            end_degrees: DEFAULT_SWEEP_RANGE.1,
            num_samples: DEFAULT_SWEEP_SAMPLES,
        }
    }
}

impl AngleSweep {
    pub fn new(start_degrees: f64, end_degrees: f64, num_samples: usize) -> AngleSweep {
        AngleSweep {
            start_degrees,
            end_degrees,
            num_samples,
        }
    }

    /// The observation angles \[degrees\].
    pub fn angles(&self) -> Array1<f64> {
        Array1::linspace(self.start_degrees, self.end_degrees, self.num_samples)
    }
}

/// A normalised beam profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayFactorCurve {
    /// The observation angles \[degrees\].
    pub angles_degrees: Array1<f64>,

    /// The intensity at each angle. The maximum is 1, unless every angle
    /// cancelled out completely (or there are no angles).
    pub intensity: Array1<f64>,
}

impl ArrayFactorCurve {
    /// A curve of zeros over the given angles.
    pub(crate) fn zeros(angles_degrees: &[f64]) -> ArrayFactorCurve {
        ArrayFactorCurve {
            angles_degrees: Array1::from(angles_degrees.to_vec()),
            intensity: Array1::zeros(angles_degrees.len()),
        }
    }

    /// The angle of the most intense sample \[degrees\], or `None` if the curve
    /// has no comparable samples. If several samples share the maximum, the
    /// first wins. NaN intensities are skipped.
    pub fn peak_angle(&self) -> Option<f64> {
        let mut best: Option<(f64, f64)> = None;
        for (&angle, &value) in self.angles_degrees.iter().zip(self.intensity.iter()) {
            if value.is_nan() {
                continue;
            }
            match best {
                Some((_, b)) if value <= b => (),
                _ => best = Some((angle, value)),
            }
        }
        best.map(|(angle, _)| angle)
    }
}

/// Calculate the array factor of `reference` at each of `angles_degrees`.
///
/// Only the x positions of the elements matter; each element gets the same
/// steering phase as in the field synthesis. The result is normalised by its
/// own maximum. The angles are computed in parallel; the number of threads used
/// can be controlled by setting `RAYON_NUM_THREADS`.
///
/// Every angle must be finite; otherwise [`BeamformError::InvalidAngle`] is
/// returned for the first one that isn't, and nothing is calculated.
///
/// # Examples
///
/// ```
/// use beamform_sim::{array_factor, ArrayConfiguration, SimulationState};
///
/// let reference = ArrayConfiguration::new(4, 0.15, 0.0).unwrap();
/// let state = SimulationState::new(1e9, 0.0).unwrap();
/// let curve = array_factor(&reference, &state, &[-30.0, 0.0, 30.0]).unwrap();
/// assert_eq!(curve.peak_angle(), Some(0.0));
///
/// assert!(array_factor(&reference, &state, &[0.0, f64::NAN]).is_err());
/// ```
pub fn array_factor(
    reference: &ArrayConfiguration,
    state: &SimulationState,
    angles_degrees: &[f64],
) -> Result<ArrayFactorCurve, BeamformError> {
    check_angles(angles_degrees)?;

    let k = state.wavenumber();
    let sources: Vec<(f64, f64)> = element_positions(reference)
        .into_iter()
        .map(|pos| (pos.x, state.steering_phase(pos.x)))
        .collect();
    trace!(
        num_elements = sources.len(),
        num_angles = angles_degrees.len(),
        "calculating array factor"
    );

    let intensity: Vec<f64> = angles_degrees
        .par_iter()
        .map(|&angle| {
            let sin_theta = angle.to_radians().sin();
            sources
                .iter()
                .map(|&(x, phase)| c64::cis(k * x * sin_theta + phase))
                .sum::<c64>()
                .norm_sqr()
        })
        .collect();
    let mut intensity = Array1::from(intensity);
    normalise(intensity.view_mut());

    Ok(ArrayFactorCurve {
        angles_degrees: Array1::from(angles_degrees.to_vec()),
        intensity,
    })
}

/// Calculate the array factor of `reference` over an [`AngleSweep`].
pub fn array_factor_sweep(
    reference: &ArrayConfiguration,
    state: &SimulationState,
    sweep: &AngleSweep,
) -> Result<ArrayFactorCurve, BeamformError> {
    let angles = sweep.angles().to_vec();
    array_factor(reference, state, &angles)
}

pub(crate) fn check_angles(angles_degrees: &[f64]) -> Result<(), BeamformError> {
    match angles_degrees.iter().find(|a| !a.is_finite()) {
        Some(&angle) => Err(BeamformError::InvalidAngle(angle)),
        None => Ok(()),
    }
}
