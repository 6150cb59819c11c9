// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Python interface to the beamforming simulation via pyo3.
 */

use numpy::{IntoPyArray, PyArray1, PyArray2};
use pyo3::create_exception;
use pyo3::prelude::*;

use crate::{
    constants::DEFAULT_GRID_RESOLUTION, ArrayConfiguration, BeamformError as BeamformErrorRust,
    BeamformingSimulator as BeamformingSimulatorRust, FieldDomain, Scenario,
};

// Add a python exception for the simulation.
create_exception!(beamform_sim, BeamformError, pyo3::exceptions::PyException);
impl std::convert::From<BeamformErrorRust> for PyErr {
    fn from(err: BeamformErrorRust) -> PyErr {
        BeamformError::new_err(err.to_string())
    }
}

/// Arrays come from Python as (num_elements, spacing, curvature_degrees)
/// tuples. The count is signed; counts below 1 raise `BeamformError`.
fn to_configs(arrays: Vec<(i64, f64, f64)>) -> Result<Vec<ArrayConfiguration>, BeamformErrorRust> {
    arrays.into_iter().map(ArrayConfiguration::try_from).collect()
}

/// A Python class interfacing with the beamforming simulation written in
/// Rust.
#[pyclass]
struct BeamformingSimulator {
    sim: BeamformingSimulatorRust,
}

#[pymethods]
impl BeamformingSimulator {
    /// Create a new `BeamformingSimulator` object. `arrays` is a list of
    /// (num_elements, spacing_metres, curvature_degrees) tuples.
    #[new]
    #[pyo3(text_signature = "(frequency_hz, steering_angle_degrees, arrays)")]
    fn new(
        frequency_hz: f64,
        steering_angle_degrees: f64,
        arrays: Vec<(i64, f64, f64)>,
    ) -> PyResult<Self> {
        let sim =
            BeamformingSimulatorRust::new(frequency_hz, steering_angle_degrees, to_configs(arrays)?)?;
        Ok(BeamformingSimulator { sim })
    }

    /// The wavelength at the current operating frequency [metres].
    #[getter]
    fn wavelength(&self) -> f64 {
        self.sim.wavelength()
    }

    /// The wavenumber at the current operating frequency [radians per metre].
    #[getter]
    fn wavenumber(&self) -> f64 {
        self.sim.wavenumber()
    }

    #[pyo3(text_signature = "(frequency_hz)")]
    fn update_operating_frequency(&mut self, frequency_hz: f64) -> PyResult<()> {
        self.sim.update_operating_frequency(frequency_hz)?;
        Ok(())
    }

    #[pyo3(text_signature = "(steering_angle_degrees)")]
    fn update_steering_angle(&mut self, steering_angle_degrees: f64) -> PyResult<()> {
        self.sim.update_steering_angle(steering_angle_degrees)?;
        Ok(())
    }

    /// Replace all arrays with a list of (num_elements, spacing_metres,
    /// curvature_degrees) tuples.
    #[pyo3(text_signature = "(arrays)")]
    fn set_arrays(&mut self, arrays: Vec<(i64, f64, f64)>) -> PyResult<()> {
        self.sim.set_arrays(to_configs(arrays)?);
        Ok(())
    }

    /// Switch to one of the preset scenarios ("5G", "Ultrasound" or "Tumor
    /// Ablation"), applying its array to `num_arrays` arrays.
    #[pyo3(text_signature = "(scenario, num_arrays)")]
    fn apply_scenario(&mut self, scenario: &str, num_arrays: usize) -> PyResult<()> {
        let scenario: Scenario = scenario.parse()?;
        scenario.apply(&mut self.sim, num_arrays)?;
        Ok(())
    }

    /// Calculate the normalised intensity field of all arrays. Returns the x
    /// samples, the y samples and the intensities (one row per y sample). The
    /// GIL is released while calculating.
    #[pyo3(
        signature = (x_range, y_range, resolution = DEFAULT_GRID_RESOLUTION),
        text_signature = "(x_range, y_range, resolution=200)"
    )]
    #[allow(clippy::type_complexity)]
    fn simulate_multiple_arrays<'py>(
        &self,
        py: Python<'py>,
        x_range: (f64, f64),
        y_range: (f64, f64),
        resolution: usize,
    ) -> PyResult<(
        Bound<'py, PyArray1<f64>>,
        Bound<'py, PyArray1<f64>>,
        Bound<'py, PyArray2<f64>>,
    )> {
        let domain = FieldDomain::new(x_range, y_range, resolution);
        let sim = &self.sim;
        let field = py.allow_threads(|| sim.simulate_multiple_arrays(&domain))?;
        Ok((
            field.x.into_pyarray_bound(py),
            field.y.into_pyarray_bound(py),
            field.intensity.into_pyarray_bound(py),
        ))
    }

    /// Calculate the normalised array factor of the first array at the given
    /// angles [degrees].
    #[pyo3(text_signature = "(angles)")]
    fn calculate_array_factor<'py>(
        &self,
        py: Python<'py>,
        angles: Vec<f64>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let sim = &self.sim;
        let curve = py.allow_threads(|| sim.calculate_array_factor(&angles))?;
        Ok(curve.intensity.into_pyarray_bound(py))
    }
}

/// Format a frequency for display, e.g. "700 MHz".
#[pyfunction]
#[pyo3(name = "format_frequency")]
fn format_frequency_py(frequency_hz: f64) -> String {
    crate::format_frequency(frequency_hz)
}

/// A Python module interfacing with the beamforming code written in Rust. This
/// module depends on and will import numpy.
#[pymodule]
fn beamform_sim(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    py.import_bound("numpy")?;
    m.add_class::<BeamformingSimulator>()?;
    m.add_function(wrap_pyfunction!(format_frequency_py, m)?)?;
    m.add("BeamformError", py.get_type_bound::<BeamformError>())?;
    m.add("OPERATING_FREQUENCIES_HZ", crate::OPERATING_FREQUENCIES_HZ.to_vec())?;

    Ok(())
}
