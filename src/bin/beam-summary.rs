// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! This program runs the preset scenarios (or the ones named on the command
//! line) through the simulator and prints where the field and the beam
//! profile peak. Set `RUST_LOG=debug` to see what the simulator is doing.

use beamform_sim::{
    format_frequency, AngleSweep, BeamformError, BeamformingSimulator, FieldDomain, Scenario,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), BeamformError> {
    let scenarios = std::env::args()
        .skip(1)
        .map(|s| s.parse())
        .collect::<Result<Vec<Scenario>, _>>()?;
    let scenarios = if scenarios.is_empty() {
        Scenario::ALL.to_vec()
    } else {
        scenarios
    };

    let domain = FieldDomain::default();
    let sweep = AngleSweep::default();
    let mut sim = BeamformingSimulator::new(scenarios[0].frequency_hz(), 0.0, vec![])?;
    for scenario in scenarios {
        scenario.apply(&mut sim, 1)?;
        let output = sim.simulate(&domain, &sweep)?;

        let config = sim.arrays()[0];
        println!("{scenario} ({})", format_frequency(sim.state().frequency_hz()));
        println!(
            "  {} elements, {:.4} m spacing, {} degrees curvature",
            config.num_elements(),
            config.spacing(),
            config.curvature_degrees()
        );
        match output.field.peak() {
            Some((x, y, _)) => println!("  field peak at ({x:+.3} m, {y:+.3} m)"),
            None => println!("  no field"),
        }
        match output.array_factor.peak_angle() {
            Some(angle) => println!("  beam profile peak at {angle:+.2} degrees"),
            None => println!("  no beam profile"),
        }
    }

    Ok(())
}
