// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Phased-array beamforming simulation.

Given one or more element arrays, an operating frequency and a steering angle,
this crate calculates the normalised 2-D intensity field radiated by all arrays
and the normalised far-field array factor (beam profile) of the first array.
 */

pub mod array_factor;
pub mod constants;
pub mod errors;
pub mod field;
mod geometry;
pub mod scenario;
mod simulator;
mod state;
mod types;

#[cfg(feature = "python")]
mod python;

pub use array_factor::{array_factor, array_factor_sweep, AngleSweep, ArrayFactorCurve};
pub use constants::SPEED_OF_LIGHT;
pub use errors::*;
pub use field::{synthesize_field, FieldDomain, FieldGrid};
pub use geometry::element_positions;
pub use scenario::{format_frequency, Scenario, OPERATING_FREQUENCIES_HZ};
pub use simulator::{BeamformingSimulator, SimulationOutput};
pub use state::SimulationState;
pub use types::{ArrayConfiguration, ElementPosition};
