// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The operating point shared by every field and array-factor calculation.

use crate::{constants::*, BeamformError};

/// The operating frequency and steering angle of a simulation, along with the
/// quantities derived from the frequency.
///
/// The wavelength and wavenumber can't be set; they're only ever recomputed
/// from the frequency, so they can't disagree with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    frequency_hz: f64,
    steering_angle_degrees: f64,
    /// \[metres\]
    wavelength: f64,
    /// \[radians per metre\]
    wavenumber: f64,
}

impl SimulationState {
    /// Create a new [`SimulationState`].
    ///
    /// # Examples
    ///
    /// ```
    /// use beamform_sim::{SimulationState, SPEED_OF_LIGHT};
    ///
    /// let state = SimulationState::new(1e9, 0.0).unwrap();
    /// assert_eq!(state.wavelength(), SPEED_OF_LIGHT / 1e9);
    ///
    /// assert!(SimulationState::new(0.0, 0.0).is_err());
    /// ```
    pub fn new(
        frequency_hz: f64,
        steering_angle_degrees: f64,
    ) -> Result<SimulationState, BeamformError> {
        let (wavelength, wavenumber) = derive_from_frequency(frequency_hz)?;
        check_steering_angle(steering_angle_degrees)?;
        Ok(SimulationState {
            frequency_hz,
            steering_angle_degrees,
            wavelength,
            wavenumber,
        })
    }

    /// Change the operating frequency. The wavelength and wavenumber are
    /// updated with it; if the frequency is rejected, nothing changes.
    pub fn update_frequency(&mut self, frequency_hz: f64) -> Result<(), BeamformError> {
        let (wavelength, wavenumber) = derive_from_frequency(frequency_hz)?;
        self.frequency_hz = frequency_hz;
        self.wavelength = wavelength;
        self.wavenumber = wavenumber;
        Ok(())
    }

    /// Change the steering angle \[degrees from broadside\]. The angle isn't
    /// clamped.
    pub fn update_steering_angle(
        &mut self,
        steering_angle_degrees: f64,
    ) -> Result<(), BeamformError> {
        check_steering_angle(steering_angle_degrees)?;
        self.steering_angle_degrees = steering_angle_degrees;
        Ok(())
    }

    /// \[Hz\]
    pub fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }

    /// \[degrees\]
    pub fn steering_angle_degrees(&self) -> f64 {
        self.steering_angle_degrees
    }

    /// \[metres\]
    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    /// 2π / wavelength \[radians per metre\].
    pub fn wavenumber(&self) -> f64 {
        self.wavenumber
    }

    /// The phase applied to an element `x` metres along the array so that the
    /// beam points at the steering angle \[radians\].
    pub(crate) fn steering_phase(&self, x: f64) -> f64 {
        -self.wavenumber * x * self.steering_angle_degrees.to_radians().sin()
    }
}

fn derive_from_frequency(frequency_hz: f64) -> Result<(f64, f64), BeamformError> {
    if !(frequency_hz.is_finite() && frequency_hz > 0.0) {
        return Err(BeamformError::InvalidFrequency(frequency_hz));
    }
    let wavelength = SPEED_OF_LIGHT / frequency_hz;
    let wavenumber = TAU / wavelength;
    Ok((wavelength, wavenumber))
}

fn check_steering_angle(steering_angle_degrees: f64) -> Result<(), BeamformError> {
    if steering_angle_degrees.is_finite() {
        Ok(())
    } else {
        Err(BeamformError::InvalidSteeringAngle(steering_angle_degrees))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn derived_quantities() {
        let state = SimulationState::new(1e9, 0.0).unwrap();
        assert_eq!(state.wavelength(), SPEED_OF_LIGHT / 1e9);
        assert_eq!(state.wavenumber(), TAU / state.wavelength());
    }

    #[test]
    fn frequency_update_recomputes_everything() {
        let mut state = SimulationState::new(700e6, 30.0).unwrap();
        state.update_frequency(3.5e9).unwrap();
        assert_eq!(state.frequency_hz(), 3.5e9);
        assert_eq!(state.wavelength(), SPEED_OF_LIGHT / 3.5e9);
        assert_eq!(state.wavenumber(), TAU / (SPEED_OF_LIGHT / 3.5e9));
        // The steering angle is left alone.
        assert_eq!(state.steering_angle_degrees(), 30.0);
    }

    #[test]
    fn bad_frequency_changes_nothing() {
        let mut state = SimulationState::new(700e6, 0.0).unwrap();
        let before = state;
        for f in [0.0, -1e6, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                state.update_frequency(f),
                Err(BeamformError::InvalidFrequency(_))
            ));
            assert_eq!(state, before);
        }
    }

    #[test]
    fn bad_new() {
        assert_eq!(
            SimulationState::new(-5.0, 0.0),
            Err(BeamformError::InvalidFrequency(-5.0))
        );
        assert!(matches!(
            SimulationState::new(1e9, f64::NAN),
            Err(BeamformError::InvalidSteeringAngle(_))
        ));
    }

    #[test]
    fn steering_angle() {
        let mut state = SimulationState::new(1e9, 0.0).unwrap();
        let wavelength = state.wavelength();
        // Not clamped to [-90, 90].
        state.update_steering_angle(120.0).unwrap();
        assert_eq!(state.steering_angle_degrees(), 120.0);
        assert_eq!(state.wavelength(), wavelength);

        assert!(state.update_steering_angle(f64::INFINITY).is_err());
        assert_eq!(state.steering_angle_degrees(), 120.0);
    }

    #[test]
    fn steering_phase() {
        let mut state = SimulationState::new(1e9, 0.0).unwrap();
        assert_abs_diff_eq!(state.steering_phase(0.75), 0.0);

        state.update_steering_angle(90.0).unwrap();
        assert_abs_diff_eq!(
            state.steering_phase(0.75),
            -state.wavenumber() * 0.75,
            epsilon = 1e-12
        );
        state.update_steering_angle(-30.0).unwrap();
        assert_abs_diff_eq!(
            state.steering_phase(1.0),
            state.wavenumber() * 0.5,
            epsilon = 1e-12
        );
    }
}
