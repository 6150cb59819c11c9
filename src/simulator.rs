// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A simulator holding the operating point and array layout that a front end
//! edits between renders.

use tracing::debug;

use crate::{
    array_factor,
    array_factor::{check_angles, ArrayFactorCurve},
    synthesize_field, AngleSweep, ArrayConfiguration, BeamformError, FieldDomain, FieldGrid,
    SimulationState,
};

/// Everything needed to draw one frame: the intensity map and the beam
/// profile.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutput {
    pub field: FieldGrid,
    pub array_factor: ArrayFactorCurve,
}

/// The struct used to run beamforming simulations for a set of arrays sharing
/// an operating frequency and steering angle.
#[derive(Debug, Clone)]
pub struct BeamformingSimulator {
    state: SimulationState,

    /// The arrays radiating into the field. The first one is the reference
    /// for the array factor.
    arrays: Vec<ArrayConfiguration>,
}

impl BeamformingSimulator {
    /// Create a new [`BeamformingSimulator`].
    ///
    /// # Examples
    ///
    /// ```
    /// use beamform_sim::{ArrayConfiguration, BeamformingSimulator, FieldDomain};
    ///
    /// let arrays = vec![ArrayConfiguration::new(16, 0.1, 0.0).unwrap()];
    /// let mut sim = BeamformingSimulator::new(700e6, 0.0, arrays).unwrap();
    /// sim.update_steering_angle(20.0).unwrap();
    /// let field = sim.simulate_multiple_arrays(&FieldDomain::new((-1.0, 1.0), (0.0, 1.0), 20)).unwrap();
    /// assert_eq!(field.intensity.dim(), (20, 20));
    /// ```
    pub fn new(
        frequency_hz: f64,
        steering_angle_degrees: f64,
        arrays: Vec<ArrayConfiguration>,
    ) -> Result<BeamformingSimulator, BeamformError> {
        let state = SimulationState::new(frequency_hz, steering_angle_degrees)?;
        debug!(
            frequency_hz,
            steering_angle_degrees,
            num_arrays = arrays.len(),
            "created simulator"
        );
        Ok(BeamformingSimulator { state, arrays })
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn arrays(&self) -> &[ArrayConfiguration] {
        &self.arrays
    }

    /// \[metres\]
    pub fn wavelength(&self) -> f64 {
        self.state.wavelength()
    }

    /// \[radians per metre\]
    pub fn wavenumber(&self) -> f64 {
        self.state.wavenumber()
    }

    /// Change the operating frequency \[Hz\]. Array spacings are absolute, so
    /// they're left alone.
    pub fn update_operating_frequency(&mut self, frequency_hz: f64) -> Result<(), BeamformError> {
        self.state.update_frequency(frequency_hz)?;
        debug!(
            frequency_hz,
            wavelength = self.state.wavelength(),
            "updated operating frequency"
        );
        Ok(())
    }

    /// Change the steering angle \[degrees\].
    pub fn update_steering_angle(
        &mut self,
        steering_angle_degrees: f64,
    ) -> Result<(), BeamformError> {
        self.state.update_steering_angle(steering_angle_degrees)?;
        debug!(steering_angle_degrees, "updated steering angle");
        Ok(())
    }

    /// Replace all arrays. The list should be complete; there's no notion of a
    /// "selected" array here.
    pub fn set_arrays(&mut self, arrays: Vec<ArrayConfiguration>) {
        debug!(num_arrays = arrays.len(), "updated arrays");
        self.arrays = arrays;
    }

    /// Convert a spacing given in wavelengths to metres at the current
    /// operating frequency.
    pub fn spacing_for_wavelengths(&self, spacing_wavelengths: f64) -> f64 {
        spacing_wavelengths * self.state.wavelength()
    }

    /// Calculate the intensity field of all arrays over `domain`.
    pub fn simulate_multiple_arrays(&self, domain: &FieldDomain) -> Result<FieldGrid, BeamformError> {
        synthesize_field(&self.arrays, &self.state, domain)
    }

    /// Calculate the array factor of the first array at `angles_degrees`. With
    /// no arrays, the curve is all zeros. Non-finite angles are rejected either
    /// way.
    pub fn calculate_array_factor(
        &self,
        angles_degrees: &[f64],
    ) -> Result<ArrayFactorCurve, BeamformError> {
        match self.arrays.first() {
            Some(reference) => array_factor(reference, &self.state, angles_degrees),
            None => {
                check_angles(angles_degrees)?;
                Ok(ArrayFactorCurve::zeros(angles_degrees))
            }
        }
    }

    /// Calculate both the field and the beam profile.
    pub fn simulate(
        &self,
        domain: &FieldDomain,
        sweep: &AngleSweep,
    ) -> Result<SimulationOutput, BeamformError> {
        let field = self.simulate_multiple_arrays(domain)?;
        let angles = sweep.angles().to_vec();
        let array_factor = self.calculate_array_factor(&angles)?;
        Ok(SimulationOutput {
            field,
            array_factor,
        })
    }
}
