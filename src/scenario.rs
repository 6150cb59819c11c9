// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Preset application scenarios and the operating frequencies offered to
//! users.

use std::str::FromStr;

use tracing::debug;

use crate::{ArrayConfiguration, BeamformError, BeamformingSimulator};

/// The operating frequencies a front end offers \[Hz\]. The first six are 5G
/// bands, the rest are ultrasound (imaging, therapy and tumour ablation).
pub const OPERATING_FREQUENCIES_HZ: [f64; 11] = [
    700e6, 900e6, 1.8e9, 2.1e9, 3.5e9, 5e9, 1e6, 3e6, 5e6, 10e6, 20e6,
];

/// A preset combination of frequency and array layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// A flat 5G antenna panel.
    FiveG,

    /// A curved ultrasound imaging probe.
    Ultrasound,

    /// A dense, focused therapeutic ultrasound array.
    TumorAblation,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::FiveG, Scenario::Ultrasound, Scenario::TumorAblation];

    /// The scenario after `current` when cycling through presets. Nothing
    /// selected starts at 5G.
    pub fn next(current: Option<Scenario>) -> Scenario {
        match current {
            None | Some(Scenario::TumorAblation) => Scenario::FiveG,
            Some(Scenario::FiveG) => Scenario::Ultrasound,
            Some(Scenario::Ultrasound) => Scenario::TumorAblation,
        }
    }

    /// \[Hz\]
    pub fn frequency_hz(self) -> f64 {
        match self {
            Scenario::FiveG => 3.5e9,
            Scenario::Ultrasound => 5e6,
            Scenario::TumorAblation => 20e6,
        }
    }

    /// Element spacing as a multiple of the wavelength.
    pub fn spacing_wavelengths(self) -> f64 {
        match self {
            Scenario::FiveG => 0.25,
            Scenario::Ultrasound => 0.5,
            Scenario::TumorAblation => 0.1,
        }
    }

    /// \[degrees\]
    pub fn curvature_degrees(self) -> f64 {
        match self {
            Scenario::FiveG => 0.0,
            Scenario::Ultrasound => 180.0,
            Scenario::TumorAblation => 90.0,
        }
    }

    pub fn num_elements(self) -> usize {
        match self {
            Scenario::FiveG => 16,
            Scenario::Ultrasound => 32,
            Scenario::TumorAblation => 64,
        }
    }

    /// The array layout of this scenario at its own frequency.
    pub fn array_configuration(self) -> Result<ArrayConfiguration, BeamformError> {
        let wavelength = crate::SPEED_OF_LIGHT / self.frequency_hz();
        ArrayConfiguration::from_wavelengths(
            self.num_elements(),
            self.spacing_wavelengths(),
            self.curvature_degrees(),
            wavelength,
        )
    }

    /// Switch `simulator` to this scenario: the frequency is changed first,
    /// then `num_arrays` copies of the scenario's array replace the existing
    /// arrays. The steering angle is kept.
    pub fn apply(
        self,
        simulator: &mut BeamformingSimulator,
        num_arrays: usize,
    ) -> Result<(), BeamformError> {
        simulator.update_operating_frequency(self.frequency_hz())?;
        let config = ArrayConfiguration::from_wavelengths(
            self.num_elements(),
            self.spacing_wavelengths(),
            self.curvature_degrees(),
            simulator.wavelength(),
        )?;
        simulator.set_arrays(vec![config; num_arrays]);
        debug!(
            scenario = %self,
            frequency = %format_frequency(self.frequency_hz()),
            spacing_wavelengths = self.spacing_wavelengths(),
            curvature_degrees = self.curvature_degrees(),
            num_elements = self.num_elements(),
            "applied scenario"
        );
        Ok(())
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Scenario::FiveG => "5G",
                Scenario::Ultrasound => "Ultrasound",
                Scenario::TumorAblation => "Tumor Ablation",
            }
        )
    }
}

impl FromStr for Scenario {
    type Err = BeamformError;

    /// Case-insensitive; spaces, dashes and underscores are ignored, so "5g",
    /// "tumor-ablation" and "TumorAblation" all work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalised.as_str() {
            "5g" | "fiveg" => Ok(Scenario::FiveG),
            "ultrasound" => Ok(Scenario::Ultrasound),
            "tumorablation" | "tumourablation" => Ok(Scenario::TumorAblation),
            _ => Err(BeamformError::UnknownScenario(s.to_string())),
        }
    }
}

/// Format a frequency for display, e.g. "700 MHz" or "1.8 GHz". Frequencies
/// below 1 MHz are shown in Hz.
pub fn format_frequency(frequency_hz: f64) -> String {
    fn format_value(value: f64, unit: &str) -> String {
        if value.fract() == 0.0 {
            format!("{value:.0} {unit}")
        } else {
            format!("{value:.1} {unit}")
        }
    }

    if frequency_hz >= 1e9 {
        format_value(frequency_hz / 1e9, "GHz")
    } else if frequency_hz >= 1e6 {
        format_value(frequency_hz / 1e6, "MHz")
    } else {
        format!("{frequency_hz} Hz")
    }
}
