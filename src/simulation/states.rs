//! Core state types for the electron beam.
//!
//! - `Electron`      one in-flight electron (position, velocity)
//! - `ChargedBody`   anode, deflector or cathode
//! - `Bodies`        the three fixed-role bodies of a scene
//! - `ElectronStore` the live set of electrons, in spawn order
//!
//! Coordinates are canvas pixels: origin top-left, y pointing down.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Electron {
    pub x: NVec2, // position
    pub v: NVec2, // velocity, pixels per frame
}

impl Electron {
    /// A new electron at `x` with zero velocity
    pub fn at_rest(x: NVec2) -> Self {
        Self {
            x,
            v: NVec2::zeros(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargedBody {
    pub x: NVec2,    // position
    pub q: f64,      // charge, positive attracts electrons
    pub radius: f64, // hit-test and draw radius
}

impl ChargedBody {
    pub fn new(x: NVec2, q: f64, radius: f64) -> Self {
        Self { x, q, radius }
    }

    /// Whether `p` lies inside (or on) the body's circle
    pub fn contains(&self, p: &NVec2) -> bool {
        (p - self.x).norm() <= self.radius
    }
}

/// Role of a body in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Deflector,
    Anode,
    Cathode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bodies {
    pub anode: ChargedBody,
    pub deflector: ChargedBody,
    pub cathode: ChargedBody, // emitter, carries no charge
}

impl Bodies {
    pub fn get(&self, kind: BodyKind) -> &ChargedBody {
        match kind {
            BodyKind::Deflector => &self.deflector,
            BodyKind::Anode => &self.anode,
            BodyKind::Cathode => &self.cathode,
        }
    }

    pub fn get_mut(&mut self, kind: BodyKind) -> &mut ChargedBody {
        match kind {
            BodyKind::Deflector => &mut self.deflector,
            BodyKind::Anode => &mut self.anode,
            BodyKind::Cathode => &mut self.cathode,
        }
    }

    /// Bodies whose field acts on the electrons
    pub fn sources(&self) -> [&ChargedBody; 2] {
        [&self.anode, &self.deflector]
    }
}

/// The live set. A single ordered `Vec`, so removal keeps every other
/// electron's data together and preserves spawn order.
#[derive(Debug, Clone, Default)]
pub struct ElectronStore {
    electrons: Vec<Electron>,
}

impl ElectronStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            electrons: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, e: Electron) {
        self.electrons.push(e);
    }

    /// Remove electron `i`, shifting the ones after it down by one index
    pub fn remove(&mut self, i: usize) -> Electron {
        self.electrons.remove(i)
    }

    pub fn clear(&mut self) {
        self.electrons.clear();
    }

    pub fn len(&self) -> usize {
        self.electrons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.electrons.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Electron> {
        self.electrons.get(i)
    }

    pub fn get_mut(&mut self, i: usize) -> Option<&mut Electron> {
        self.electrons.get_mut(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Electron> {
        self.electrons.iter()
    }
}

impl<'a> IntoIterator for &'a ElectronStore {
    type Item = &'a Electron;
    type IntoIter = std::slice::Iter<'a, Electron>;

    fn into_iter(self) -> Self::IntoIter {
        self.electrons.iter()
    }
}

impl FromIterator<Electron> for ElectronStore {
    fn from_iter<I: IntoIterator<Item = Electron>>(iter: I) -> Self {
        Self {
            electrons: iter.into_iter().collect(),
        }
    }
}
