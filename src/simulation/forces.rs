//! Force contributors acting on the electrons
//!
//! Defines the force trait, a set that sums its terms, and the
//! inverse-square Coulomb term used by the beam

use crate::simulation::states::{Bodies, ChargedBody, NVec2};

/// Collection of force terms (Coulomb field, later maybe drag etc.)
/// Each term implements [`Force`] and their contributions are summed
/// into a single net force per electron
pub struct AccelSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Net force on an electron at `x` from all terms
    pub fn net_force(&self, x: &NVec2, bodies: &Bodies) -> NVec2 {
        let mut f = NVec2::zeros();
        for term in &self.terms {
            f += term.force(x, bodies);
        }
        f
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources acting on a single electron
pub trait Force {
    fn force(&self, x: &NVec2, bodies: &Bodies) -> NVec2;
}

/// Coulomb's law between the electron and every charged source
///
/// The electron's charge is taken as -1 and Coulomb's constant as 1, so a
/// source of charge `q` at distance `d` pulls the electron toward itself with
/// magnitude `q / d²`; a negative `q` pushes it away
pub struct Coulomb {
    pub eps2: f64, // softening, 0 keeps the bare inverse-square law
}

impl Force for Coulomb {
    fn force(&self, x: &NVec2, bodies: &Bodies) -> NVec2 {
        let mut f = NVec2::zeros();
        for source in bodies.sources() {
            f += coulomb_force(x, source, self.eps2);
        }
        f
    }
}

/// Force exerted by `source` on an electron at `x`
///
/// With `eps2 == 0` an electron sitting exactly on the source gives a
/// non-finite result
pub fn coulomb_force(x: &NVec2, source: &ChargedBody, eps2: f64) -> NVec2 {
    // r points from the electron to the source
    let r = source.x - x;

    // squared distance, softened
    let d2 = r.dot(&r) + eps2;
    let d = d2.sqrt();

    // magnitude along the unit vector r / d
    let magnitude = source.q / d2;
    NVec2::new(magnitude * r.x / d, magnitude * r.y / d)
}
