// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Errors associated with all aspects of the beamforming simulation.
 */

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BeamformError {
    #[error("The operating frequency must be positive and finite (got {0} Hz)")]
    InvalidFrequency(f64),

    #[error("The element spacing must be positive and finite (got {0} metres)")]
    InvalidSpacing(f64),

    #[error("An array must have at least one element (got {0})")]
    InvalidElementCount(i64),

    #[error("The array curvature must be finite (got {0} degrees)")]
    InvalidCurvature(f64),

    #[error("The steering angle must be finite (got {0} degrees)")]
    InvalidSteeringAngle(f64),

    /// An observation angle of the array factor.
    #[error("Observation angles must be finite (got {0} degrees)")]
    InvalidAngle(f64),

    /// The field grid needs at least one sample along each axis.
    #[error("The field resolution must be at least 1x1 (got {nx}x{ny})")]
    InvalidResolution { nx: usize, ny: usize },

    #[error("The {axis} range of the field must have finite bounds (got {start} to {end})")]
    InvalidRange {
        axis: &'static str,
        start: f64,
        end: f64,
    },

    /// An error associated with parsing a string into a scenario.
    #[error("Couldn't parse '{0}' to a scenario; expected one of '5G', 'Ultrasound' or 'Tumor Ablation'")]
    UnknownScenario(String),
}
