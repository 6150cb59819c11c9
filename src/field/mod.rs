// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to synthesise the 2-D intensity field radiated by one or more arrays.

#[cfg(test)]
mod tests;

use ndarray::{prelude::*, Zip};
use num_complex::Complex64 as c64;
use tracing::trace;

use crate::{
    constants::*, element_positions, ArrayConfiguration, BeamformError, ElementPosition,
    SimulationState,
};

/// The region of space over which the field is sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDomain {
    /// The first and last horizontal sample positions \[metres\].
    pub x_range: (f64, f64),

    /// The first and last vertical sample positions \[metres\].
    pub y_range: (f64, f64),

    /// The number of samples along x and y.
    pub resolution: (usize, usize),
}

impl Default for FieldDomain {
    fn default() -> Self {
        FieldDomain {
            x_range: DEFAULT_X_RANGE,
            y_range: DEFAULT_Y_RANGE,
            resolution: (DEFAULT_GRID_RESOLUTION, DEFAULT_GRID_RESOLUTION),
        }
    }
}

impl FieldDomain {
    /// Create a new [`FieldDomain`] with the same number of samples along
    /// both axes.
    pub fn new(x_range: (f64, f64), y_range: (f64, f64), resolution: usize) -> FieldDomain {
        FieldDomain {
            x_range,
            y_range,
            resolution: (resolution, resolution),
        }
    }

    fn validate(&self) -> Result<(), BeamformError> {
        let (nx, ny) = self.resolution;
        if nx == 0 || ny == 0 {
            return Err(BeamformError::InvalidResolution { nx, ny });
        }
        for (axis, (start, end)) in [("x", self.x_range), ("y", self.y_range)] {
            if !(start.is_finite() && end.is_finite()) {
                return Err(BeamformError::InvalidRange { axis, start, end });
            }
        }
        Ok(())
    }

    /// The x sample positions (first and last inclusive).
    pub fn x_samples(&self) -> Array1<f64> {
        Array1::linspace(self.x_range.0, self.x_range.1, self.resolution.0)
    }

    /// The y sample positions (first and last inclusive).
    pub fn y_samples(&self) -> Array1<f64> {
        Array1::linspace(self.y_range.0, self.y_range.1, self.resolution.1)
    }
}

/// A normalised intensity field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGrid {
    /// The x sample positions \[metres\].
    pub x: Array1<f64>,

    /// The y sample positions \[metres\].
    pub y: Array1<f64>,

    /// Intensities with shape `(y.len(), x.len())`; `intensity[[j, i]]` is
    /// the intensity at `(x[i], y[j])`. The maximum is 1, unless no element
    /// contributed, in which case everything is 0.
    pub intensity: Array2<f64>,
}

impl FieldGrid {
    /// Get the position and value of the most intense sample, or `None` if the
    /// grid has no samples (or its sample positions don't cover the
    /// intensities). If several samples share the maximum, the first in
    /// row-major order wins. NaN intensities are skipped.
    pub fn peak(&self) -> Option<(f64, f64, f64)> {
        let mut best: Option<((usize, usize), f64)> = None;
        for (index, &value) in self.intensity.indexed_iter() {
            if value.is_nan() {
                continue;
            }
            match best {
                Some((_, b)) if value <= b => (),
                _ => best = Some((index, value)),
            }
        }
        let ((j, i), value) = best?;
        Some((*self.x.get(i)?, *self.y.get(j)?, value))
    }
}

/// Calculate the intensity field radiated by all elements of all `arrays`.
///
/// Each element contributes a spherical wave with a steering phase
/// proportional to its x position; all contributions are summed coherently
/// into one field, and the squared magnitude is normalised by its maximum over
/// the whole grid. The rows of the grid are computed in parallel; the number of
/// threads used can be controlled by setting `RAYON_NUM_THREADS`.
///
/// An empty `arrays` gives a grid of zeros.
///
/// # Examples
///
/// ```
/// use beamform_sim::{synthesize_field, ArrayConfiguration, FieldDomain, SimulationState};
///
/// let arrays = [ArrayConfiguration::new(4, 0.5, 0.0).unwrap()];
/// let state = SimulationState::new(1e9, 0.0).unwrap();
/// let domain = FieldDomain::new((-2.0, 2.0), (0.0, 2.0), 41);
/// let field = synthesize_field(&arrays, &state, &domain).unwrap();
/// assert_eq!(field.intensity.dim(), (41, 41));
/// ```
pub fn synthesize_field(
    arrays: &[ArrayConfiguration],
    state: &SimulationState,
    domain: &FieldDomain,
) -> Result<FieldGrid, BeamformError> {
    domain.validate()?;

    let x = domain.x_samples();
    let y = domain.y_samples();
    let (nx, ny) = domain.resolution;

    // Every element of every array, paired with its steering phase.
    let sources: Vec<(ElementPosition, f64)> = arrays
        .iter()
        .flat_map(element_positions)
        .map(|pos| (pos, state.steering_phase(pos.x)))
        .collect();
    trace!(
        num_arrays = arrays.len(),
        num_sources = sources.len(),
        nx,
        ny,
        "synthesising field"
    );

    let k = state.wavenumber();
    let mut intensity = Array2::<f64>::zeros((ny, nx));
    Zip::from(intensity.rows_mut())
        .and(&y)
        .par_for_each(|mut row, &y_pos| {
            row.iter_mut().zip(x.iter()).for_each(|(out, &x_pos)| {
                let sum: c64 = sources
                    .iter()
                    .map(|(pos, phase)| c64::cis(k * pos.distance_to(x_pos, y_pos) + phase))
                    .sum();
                *out = sum.norm_sqr();
            });
        });

    normalise(intensity.view_mut());
    Ok(FieldGrid { x, y, intensity })
}

/// Divide all values by their maximum. If the maximum isn't positive (i.e.
/// everything is 0), the values are left alone.
pub(crate) fn normalise<D: Dimension>(mut values: ArrayViewMut<f64, D>) {
    let max = values.iter().copied().fold(0.0, f64::max);
    if max > 0.0 {
        values.mapv_inplace(|v| v / max);
    }
}
