use std::time::Instant;

use tracing::info;

use crate::configuration::config::{ScenarioConfig, VariantConfig};
use crate::configuration::error::ConfigError;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::scenario::SimulationState;
use crate::simulation::states::{Electron, ElectronStore, NVec2};

/// Passes timed per electron count
const REPS: u32 = 200;

/// Time one integration pass over growing numbers of electrons
pub fn bench_field_step() -> Result<(), ConfigError> {
    // Different live-set sizes to test
    let ns = [100, 250, 500, 1000, 2000, 4000];

    let state = SimulationState::build(ScenarioConfig::for_variant(VariantConfig::Enhanced))?;

    for n in ns {
        // deterministic positions in a band above the anode, no rand needed
        let start: ElectronStore = (0..n)
            .map(|i| {
                let i_f = i as f64;
                Electron::at_rest(NVec2::new(
                    600.0 + (i_f * 0.37).sin() * 400.0,
                    150.0 + (i_f * 0.13).cos().abs() * 250.0,
                ))
            })
            .collect();

        // Warm up
        let mut electrons = start.clone();
        euler_integrator(&mut electrons, &state.bodies, &state.forces, &state.config);

        let mut total = 0.0;
        for _ in 0..REPS {
            let mut electrons = start.clone();
            let t0 = Instant::now();
            euler_integrator(&mut electrons, &state.bodies, &state.forces, &state.config);
            total += t0.elapsed().as_secs_f64();
        }

        let per_pass = total / REPS as f64;
        info!(
            n,
            per_pass_us = per_pass * 1e6,
            per_electron_ns = per_pass * 1e9 / n as f64,
            "field step"
        );
    }

    Ok(())
}
