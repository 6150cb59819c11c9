// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Element layout of linear and curved arrays.

use crate::{ArrayConfiguration, ElementPosition};

/// Get the positions of all elements of an array, in element order.
///
/// A linear array (0 curvature) lies along the x axis, centred on x = 0. A
/// curved array lies on a circular arc spanning `curvature_degrees`, with
/// adjacent elements separated by a chord of `spacing`; the arc is shifted by
/// its radius so that it sits at positive x.
///
/// # Examples
///
/// ```
/// use beamform_sim::{element_positions, ArrayConfiguration};
///
/// let config = ArrayConfiguration::new(4, 0.5, 0.0).unwrap();
/// let positions = element_positions(&config);
/// let xs: Vec<f64> = positions.iter().map(|p| p.x).collect();
/// assert_eq!(xs, [-0.75, -0.25, 0.25, 0.75]);
/// ```
pub fn element_positions(config: &ArrayConfiguration) -> Vec<ElementPosition> {
    let n = config.num_elements();
    let spacing = config.spacing();

    if config.is_linear() {
        let offset = (n - 1) as f64 * spacing / 2.0;
        return (0..n)
            .map(|i| ElementPosition::new(i as f64 * spacing - offset, 0.0))
            .collect();
    }

    let curvature_rad = config.curvature_degrees().to_radians();
    // A single element has no neighbour to derive a radius from; put it on an
    // arc of radius `spacing` at angle 0.
    if n == 1 {
        return vec![arc_position(spacing, 0.0)];
    }

    let step = curvature_rad / (n - 1) as f64;
    let radius = arc_radius(spacing, step);
    let start = -curvature_rad / 2.0;
    (0..n)
        .map(|i| arc_position(radius, start + i as f64 * step))
        .collect()
}

/// The radius of a circle on which a chord of length `chord` subtends `angle`
/// radians.
fn arc_radius(chord: f64, angle: f64) -> f64 {
    chord / (2.0 * (angle / 2.0).sin())
}

fn arc_position(radius: f64, angle: f64) -> ElementPosition {
    let (s, c) = angle.sin_cos();
    ElementPosition::new(radius * c + radius, radius * s)
}
