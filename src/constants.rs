// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.
 */

pub use std::f64::consts::{PI, TAU};

/// The speed of light in a vacuum \[metres per second\].
pub const SPEED_OF_LIGHT: f64 = marlu::constants::VEL_C;

/// The default horizontal extent of the simulated field \[metres\].
pub const DEFAULT_X_RANGE: (f64, f64) = (-10.0, 10.0);
/// The default vertical extent of the simulated field \[metres\].
pub const DEFAULT_Y_RANGE: (f64, f64) = (0.0, 10.0);
/// The default number of field samples along each axis.
pub const DEFAULT_GRID_RESOLUTION: usize = 200;

/// The default beam-profile sweep \[degrees\].
pub const DEFAULT_SWEEP_RANGE: (f64, f64) = (-90.0, 90.0);
/// The default number of beam-profile samples.
pub const DEFAULT_SWEEP_SAMPLES: usize = 500;

/// The number of elements of the fallback array.
pub const DEFAULT_NUM_ELEMENTS: usize = 64;
/// The element spacing of the fallback array \[metres\].
pub const DEFAULT_SPACING: f64 = 0.5;
/// The curvature of the fallback array \[degrees\].
pub const DEFAULT_CURVATURE: f64 = 0.0;
