//! Numerical and physical parameters for the simulation
//!
//! `SimulationConfig` holds the runtime settings derived from the sliders:
//! - anode and deflector charges, anode radius,
//! - electron mass and softening (`eps2`),
//! - spawn schedule and live-electron cap,
//! - removal rule (absorption, escape)
//!
//! It is rebuilt from the sliders whenever one of them moves.

use crate::configuration::sliders::Sliders;
use crate::simulation::clock::SpawnSchedule;
use crate::simulation::engine::Engine;
use crate::simulation::integrator::Boundary;

/// Canvas size in pixels
pub const CANVAS_WIDTH: f64 = 1200.0;
pub const CANVAS_HEIGHT: f64 = 900.0;

/// Draw and hit-test radii
pub const CATHODE_RADIUS: f64 = 10.0;
pub const DEFLECTOR_RADIUS: f64 = 12.0;
pub const ELECTRON_RADIUS: f64 = 4.0;

/// Anode radius when there is no anode-size slider
pub const CLASSIC_ANODE_RADIUS: f64 = 100.0;

/// Live-electron caps
pub const CLASSIC_LIVE_CAP: usize = 500;
pub const ENHANCED_LIVE_CAP: usize = 1000;

/// Distance from the anode past which an electron is counted as lost
pub const ESCAPE_DISTANCE: f64 = 1200.0;

/// Charge ranges used for colouring, independent of the slider step
pub const ANODE_CHARGE_SCALE: f64 = 50_000.0;
pub const DEFLECTOR_CHARGE_SCALE: f64 = 1_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub anode_charge: f64,     // anode charge
    pub deflector_charge: f64, // deflector charge, sign picks attract/repel
    pub anode_radius: f64,     // absorption radius
    pub electron_mass: f64,    // mass of one electron
    pub eps2: f64,             // softening
    pub spawn: SpawnSchedule,  // when to release electrons
    pub live_cap: usize,       // max electrons in flight
    pub boundary: Boundary,    // when to remove electrons
}

impl SimulationConfig {
    /// Derive the runtime settings from the current slider positions
    pub fn from_sliders(engine: &Engine, sliders: &Sliders, electron_mass: f64, eps2: f64) -> Self {
        let anode_radius = sliders
            .anode_size
            .as_ref()
            .map(|s| s.value())
            .unwrap_or(CLASSIC_ANODE_RADIUS);

        Self {
            anode_charge: sliders.anode_charge.value(),
            deflector_charge: sliders.deflector_charge.value(),
            anode_radius,
            electron_mass,
            eps2,
            spawn: engine.spawn_schedule(sliders.spawn.value()),
            live_cap: engine.live_cap(),
            boundary: engine.boundary(),
        }
    }
}
