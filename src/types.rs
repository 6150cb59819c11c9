// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Generic types.

use crate::{constants::*, BeamformError};

/// The layout of a single phased array. A configuration can only be made
/// through [`ArrayConfiguration::new`] (or its siblings), so anything holding
/// one can assume the parameters are valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayConfiguration {
    /// The number of elements in the array. Never 0.
    num_elements: usize,

    /// The distance between adjacent elements \[metres\]. For curved arrays,
    /// this is the chord between adjacent elements.
    spacing: f64,

    /// The total angular span of the arc the elements sit on \[degrees\]. 0
    /// gives a linear array. Not wrapped or clamped.
    curvature_degrees: f64,
}

impl Default for ArrayConfiguration {
    fn default() -> Self {
        ArrayConfiguration {
            num_elements: DEFAULT_NUM_ELEMENTS,
            spacing: DEFAULT_SPACING,
            curvature_degrees: DEFAULT_CURVATURE,
        }
    }
}

impl ArrayConfiguration {
    /// Create a new [`ArrayConfiguration`]. `spacing` is in metres.
    ///
    /// # Examples
    ///
    /// ```
    /// use beamform_sim::ArrayConfiguration;
    ///
    /// let config = ArrayConfiguration::new(4, 0.5, 0.0).unwrap();
    /// assert_eq!(config.num_elements(), 4);
    ///
    /// // Arrays need elements.
    /// assert!(ArrayConfiguration::new(0, 0.5, 0.0).is_err());
    /// ```
    pub fn new(
        num_elements: usize,
        spacing: f64,
        curvature_degrees: f64,
    ) -> Result<ArrayConfiguration, BeamformError> {
        if num_elements == 0 {
            return Err(BeamformError::InvalidElementCount(0));
        }
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(BeamformError::InvalidSpacing(spacing));
        }
        if !curvature_degrees.is_finite() {
            return Err(BeamformError::InvalidCurvature(curvature_degrees));
        }

        Ok(ArrayConfiguration {
            num_elements,
            spacing,
            curvature_degrees,
        })
    }

    /// Create a new [`ArrayConfiguration`] with the element spacing expressed
    /// as a multiple of `wavelength` (e.g. 0.5 for half-wavelength spacing).
    pub fn from_wavelengths(
        num_elements: usize,
        spacing_wavelengths: f64,
        curvature_degrees: f64,
        wavelength: f64,
    ) -> Result<ArrayConfiguration, BeamformError> {
        ArrayConfiguration::new(
            num_elements,
            spacing_wavelengths * wavelength,
            curvature_degrees,
        )
    }

    pub fn num_elements(&self) -> usize {
        self.num_elements
    }

    /// The spacing between adjacent elements \[metres\].
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn curvature_degrees(&self) -> f64 {
        self.curvature_degrees
    }

    /// Is this a straight (uncurved) array?
    pub fn is_linear(&self) -> bool {
        self.curvature_degrees == 0.0
    }
}

/// Build a configuration from a signed `(num_elements, spacing,
/// curvature_degrees)` triple, as front ends without unsigned integers supply
/// it. Counts below 1 are rejected like 0 is by [`ArrayConfiguration::new`].
impl TryFrom<(i64, f64, f64)> for ArrayConfiguration {
    type Error = BeamformError;

    fn try_from(
        (num_elements, spacing, curvature_degrees): (i64, f64, f64),
    ) -> Result<Self, Self::Error> {
        let n = usize::try_from(num_elements)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(BeamformError::InvalidElementCount(num_elements))?;
        ArrayConfiguration::new(n, spacing, curvature_degrees)
    }
}

/// The position of an array element relative to its array's origin
/// \[metres\].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementPosition {
    pub x: f64,
    pub y: f64,
}

impl ElementPosition {
    pub fn new(x: f64, y: f64) -> ElementPosition {
        ElementPosition { x, y }
    }

    /// The Euclidean distance to a point \[metres\].
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (x - self.x).hypot(y - self.y)
    }
}
