//! Build and advance a fully-initialized beam simulation
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `SimulationState`, which owns:
//! - engine settings (`Engine`)
//! - sliders and the `SimulationConfig` derived from them
//! - the charged bodies and the live electrons
//! - the active force set (`AccelSet`)
//! - the spawn clock and the drag controller
//!
//! The state is inserted into Bevy as a `Resource` and advanced by the viewer,
//! or driven directly by the headless render loop

use std::time::Duration;

use bevy::prelude::Resource;
use tracing::{debug, info};

use crate::configuration::config::ScenarioConfig;
use crate::configuration::error::ConfigError;
use crate::configuration::sliders::{SliderId, Sliders};
use crate::simulation::clock::SimulationClock;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, Coulomb};
use crate::simulation::integrator::{euler_integrator, StepStats};
use crate::simulation::interaction::{DragState, InteractionController};
use crate::simulation::params::{SimulationConfig, CATHODE_RADIUS, DEFLECTOR_RADIUS};
use crate::simulation::states::{Bodies, BodyKind, ChargedBody, Electron, ElectronStore, NVec2};

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub spawned: bool,
    pub moved: Option<BodyKind>,
    pub absorbed: usize,
    pub escaped: usize,
    pub live: usize,
}

/// Bevy resource holding the whole simulation
#[derive(Resource)]
pub struct SimulationState {
    pub engine: Engine,
    pub sliders: Sliders,
    pub config: SimulationConfig,
    pub bodies: Bodies,
    pub electrons: ElectronStore,
    pub forces: AccelSet,
    pub clock: SimulationClock,
    pub interaction: InteractionController,
}

impl SimulationState {
    pub fn build(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        let p_cfg = cfg.parameters;
        if !(p_cfg.electron_mass > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "electron_mass",
                value: p_cfg.electron_mass,
            });
        }

        // Engine (runtime) from the variant and pacing
        let engine = Engine {
            variant: cfg.variant,
            frame_pause: Duration::from_millis(p_cfg.frame_pause_ms),
        };

        // Sliders, then the runtime settings they imply
        let sliders = Sliders::for_variant(cfg.variant, &cfg.sliders)?;
        let config = SimulationConfig::from_sliders(&engine, &sliders, p_cfg.electron_mass, p_cfg.eps2);

        // Bodies: map `[x, y]` arrays to nalgebra vectors
        let b_cfg = cfg.bodies;
        let bodies = Bodies {
            anode: ChargedBody::new(NVec2::from(b_cfg.anode), config.anode_charge, config.anode_radius),
            deflector: ChargedBody::new(NVec2::from(b_cfg.deflector), config.deflector_charge, DEFLECTOR_RADIUS),
            cathode: ChargedBody::new(NVec2::from(b_cfg.cathode), 0.0, CATHODE_RADIUS),
        };

        // Forces: construct an AccelSet and register the Coulomb field
        let forces = AccelSet::new().with(Coulomb { eps2: config.eps2 });

        let clock = SimulationClock::new(config.spawn, config.live_cap);
        let interaction = InteractionController::new(engine.pointer_mode());

        info!(
            variant = ?engine.variant,
            anode_charge = config.anode_charge,
            deflector_charge = config.deflector_charge,
            spawn = ?config.spawn,
            cap = config.live_cap,
            "simulation ready"
        );

        Ok(Self {
            engine,
            sliders,
            electrons: ElectronStore::with_capacity(config.live_cap),
            config,
            bodies,
            forces,
            clock,
            interaction,
        })
    }

    /// One frame of simulation: spawn, apply drag, integrate.
    /// `dt` is the wall-clock time the frame took.
    pub fn advance(&mut self, dt: Duration) -> FrameReport {
        let spawned = self.clock.tick(dt, self.electrons.len());
        if spawned {
            self.spawn_electron();
        }

        let moved = self.interaction.apply(&mut self.bodies);

        let StepStats { absorbed, escaped } =
            euler_integrator(&mut self.electrons, &self.bodies, &self.forces, &self.config);

        FrameReport {
            spawned,
            moved,
            absorbed,
            escaped,
            live: self.electrons.len(),
        }
    }

    /// Release an electron at the cathode, unless the live set is full
    pub fn spawn_electron(&mut self) -> bool {
        if self.electrons.len() >= self.config.live_cap {
            return false;
        }
        self.electrons.push(Electron::at_rest(self.bodies.cathode.x));
        debug!(live = self.electrons.len(), "electron spawned");
        true
    }

    pub fn clear_electrons(&mut self) {
        info!(cleared = self.electrons.len(), "electrons cleared");
        self.electrons.clear();
    }

    /// Move a slider and, if its value changed, rebuild the runtime settings
    pub fn set_slider(&mut self, id: SliderId, value: f64) -> bool {
        let changed = match self.sliders.get_mut(id) {
            Some(slider) => slider.set(value),
            None => false,
        };
        if changed {
            self.apply_sliders();
            info!(slider = ?id, value = ?self.sliders.get(id).map(|s| s.value()), "slider changed");
        }
        changed
    }

    /// Recompute `SimulationConfig` from the sliders and push it into the
    /// bodies and the spawn clock
    pub fn apply_sliders(&mut self) {
        self.config = SimulationConfig::from_sliders(
            &self.engine,
            &self.sliders,
            self.config.electron_mass,
            self.config.eps2,
        );
        self.bodies.anode.q = self.config.anode_charge;
        self.bodies.anode.radius = self.config.anode_radius;
        self.bodies.deflector.q = self.config.deflector_charge;
        self.clock.set_schedule(self.config.spawn);
    }

    pub fn pointer_pressed(&mut self, p: NVec2) -> DragState {
        self.interaction.press(&p, &self.bodies)
    }

    pub fn pointer_moved(&mut self, p: NVec2) {
        self.interaction.moved(&p);
    }

    pub fn pointer_released(&mut self) {
        self.interaction.release();
    }
}
