//! Per-frame time integration for the electron beam
//!
//! Semi-implicit Euler with one frame as the unit of time: velocity takes the
//! full acceleration, then position takes the new velocity. Electrons that
//! reach the anode (or fly too far from it) are removed in the same pass.

use super::forces::{coulomb_force, AccelSet};
use super::params::SimulationConfig;
use super::states::{Bodies, ChargedBody, Electron, ElectronStore, NVec2};

/// Rule deciding when an electron leaves the live set, judged on its
/// distance to the anode before the position update
///
/// An electron whose distance is not finite (it landed on a source and the
/// field blew up) counts as escaped under either rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary {
    /// Absorbed when `d² < r²`
    SquaredRadius,
    /// Absorbed when `d < r`, lost when `d > escape`
    Radius { escape: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Absorbed,
    Escaped,
}

impl Boundary {
    /// Classify an electron at squared distance `d2` from an anode of `radius`
    pub fn classify(&self, d2: f64, radius: f64) -> Option<Removal> {
        if !d2.is_finite() {
            return Some(Removal::Escaped);
        }
        match *self {
            Boundary::SquaredRadius => (d2 < radius * radius).then_some(Removal::Absorbed),
            Boundary::Radius { escape } => {
                let d = d2.sqrt();
                if d < radius {
                    Some(Removal::Absorbed)
                } else if d > escape {
                    Some(Removal::Escaped)
                } else {
                    None
                }
            }
        }
    }
}

/// Counts from one integration pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub absorbed: usize,
    pub escaped: usize,
}

/// One Coulomb's-law step for a single electron
///
/// Returns `(new_position, new_velocity)` with
/// `new_velocity = v + (F_anode + F_deflector) / mass` and
/// `new_position = x + new_velocity`. `eps2` softens both terms the same
/// way `Coulomb` does; pass 0 for the bare law
pub fn field_step(
    e: &Electron,
    anode: &ChargedBody,
    deflector: &ChargedBody,
    mass: f64,
    eps2: f64,
) -> (NVec2, NVec2) {
    let net = coulomb_force(&e.x, anode, eps2) + coulomb_force(&e.x, deflector, eps2);
    euler_update(e, net, mass)
}

/// Advance one electron given the net force on it
pub fn euler_update(e: &Electron, net_force: NVec2, mass: f64) -> (NVec2, NVec2) {
    // a = F / m
    let a = net_force / mass;

    // v_n+1 = v_n + a (dt = 1 frame)
    let v = e.v + a;

    // x_n+1 = x_n + v_n+1
    let x = e.x + v;
    (x, v)
}

/// Advance every live electron by one frame and drop the ones that crossed
/// the boundary
pub fn euler_integrator(
    electrons: &mut ElectronStore,
    bodies: &Bodies,
    forces: &AccelSet,
    params: &SimulationConfig,
) -> StepStats {
    let mut stats = StepStats::default();
    let anode = bodies.anode;

    let mut i = 0;
    while let Some(e) = electrons.get_mut(i) {
        // distance to the anode before the move decides removal
        let r = anode.x - e.x;
        let d2 = r.dot(&r);

        let f = forces.net_force(&e.x, bodies);
        let (x, v) = euler_update(e, f, params.electron_mass);
        e.x = x;
        e.v = v;

        // a non-finite position is dropped now rather than next frame
        let removal = if x.iter().all(|c| c.is_finite()) {
            params.boundary.classify(d2, anode.radius)
        } else {
            Some(Removal::Escaped)
        };

        match removal {
            Some(removal) => {
                // later electrons shift down, so `i` already names the next one
                electrons.remove(i);
                match removal {
                    Removal::Absorbed => stats.absorbed += 1,
                    Removal::Escaped => stats.escaped += 1,
                }
            }
            None => i += 1,
        }
    }

    stats
}
