//! High-level runtime engine settings
//!
//! Selects the variant (classic or enhanced) and frame pacing used when
//! building and running a `SimulationState`. Everything that differs between
//! the two variants is answered here.

use std::time::Duration;

use crate::configuration::config::VariantConfig;
use crate::simulation::clock::SpawnSchedule;
use crate::simulation::integrator::Boundary;
use crate::simulation::interaction::PointerMode;
use crate::simulation::params::{CLASSIC_LIVE_CAP, ENHANCED_LIVE_CAP, ESCAPE_DISTANCE};

#[derive(Debug, Clone)]
pub struct Engine {
    pub variant: VariantConfig, // classic or enhanced
    pub frame_pause: Duration,  // pacing between frames
}

impl Engine {
    pub fn live_cap(&self) -> usize {
        match self.variant {
            VariantConfig::Classic => CLASSIC_LIVE_CAP,
            VariantConfig::Enhanced => ENHANCED_LIVE_CAP,
        }
    }

    pub fn boundary(&self) -> Boundary {
        match self.variant {
            VariantConfig::Classic => Boundary::SquaredRadius,
            VariantConfig::Enhanced => Boundary::Radius {
                escape: ESCAPE_DISTANCE,
            },
        }
    }

    pub fn pointer_mode(&self) -> PointerMode {
        match self.variant {
            VariantConfig::Classic => PointerMode::FollowWhileHeld,
            VariantConfig::Enhanced => PointerMode::HitTest,
        }
    }

    /// Map the spawn slider (beam density or flow rate) to a schedule
    pub fn spawn_schedule(&self, slider_value: f64) -> SpawnSchedule {
        match self.variant {
            VariantConfig::Classic => SpawnSchedule::from_beam_density(slider_value),
            VariantConfig::Enhanced => SpawnSchedule::from_flow_rate(slider_value),
        }
    }
}
