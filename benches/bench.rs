// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Benchmarks of the field and array-factor calculations.
 */

use criterion::*;

use beamform_sim::*;

fn field(c: &mut Criterion) {
    c.bench_function("synthesize_field 5G", |b| {
        let config = Scenario::FiveG.array_configuration().unwrap();
        let state = SimulationState::new(Scenario::FiveG.frequency_hz(), 20.0).unwrap();
        let domain = FieldDomain::default();
        b.iter(|| {
            synthesize_field(&[config], &state, &domain).unwrap();
        })
    });

    // The largest preset array, repeated like a front end with several arrays
    // would.
    c.bench_function("synthesize_field 4x tumor ablation", |b| {
        let config = Scenario::TumorAblation.array_configuration().unwrap();
        let state = SimulationState::new(Scenario::TumorAblation.frequency_hz(), 0.0).unwrap();
        let domain = FieldDomain::default();
        b.iter(|| {
            synthesize_field(&[config; 4], &state, &domain).unwrap();
        })
    });
}

fn profile(c: &mut Criterion) {
    c.bench_function("array_factor", |b| {
        let config = Scenario::Ultrasound.array_configuration().unwrap();
        let state = SimulationState::new(Scenario::Ultrasound.frequency_hz(), -30.0).unwrap();
        let sweep = AngleSweep::default();
        b.iter(|| {
            array_factor_sweep(&config, &state, &sweep).unwrap();
        })
    });

    c.bench_function("element_positions", |b| {
        let config = Scenario::TumorAblation.array_configuration().unwrap();
        b.iter(|| {
            element_positions(&config);
        })
    });
}

criterion_group!(benches, field, profile);
criterion_main!(benches);
