//! Frame description
//!
//! [`render`] turns the simulation state into a flat list of shapes in draw
//! order. It does not touch any graphics API; a display sink decides how the
//! shapes reach the screen.

use crate::simulation::colour::{grey, particle_colour, sign_shade, Rgb};
use crate::simulation::params::{
    ANODE_CHARGE_SCALE, CATHODE_RADIUS, DEFLECTOR_CHARGE_SCALE, DEFLECTOR_RADIUS, ELECTRON_RADIUS,
};
use crate::simulation::scenario::SimulationState;
use crate::simulation::states::NVec2;

/// Half-length of the deflector's sign glyph
const DEFLECTOR_SIGN_HALF: f64 = 6.0;

/// What a shape depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Cathode,
    Anode,
    AnodeSign,
    Deflector,
    DeflectorSign,
    Electron,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Circle { center: NVec2, radius: f64, fill: Rgb },
    Line { from: NVec2, to: NVec2, colour: Rgb, width: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub role: Role,
    pub primitive: Primitive,
}

impl Shape {
    fn circle(role: Role, center: NVec2, radius: f64, fill: Rgb) -> Self {
        Self {
            role,
            primitive: Primitive::Circle { center, radius, fill },
        }
    }

    fn line(role: Role, from: NVec2, to: NVec2, colour: Rgb, width: f64) -> Self {
        Self {
            role,
            primitive: Primitive::Line { from, to, colour, width },
        }
    }
}

/// Everything drawn in one frame, back to front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn count(&self, role: Role) -> usize {
        self.shapes.iter().filter(|s| s.role == role).count()
    }
}

pub fn render(state: &SimulationState) -> Scene {
    let bodies = &state.bodies;
    let mut shapes = Vec::with_capacity(state.electrons.len() + 8);

    // cathode
    shapes.push(Shape::circle(Role::Cathode, bodies.cathode.x, CATHODE_RADIUS, Rgb::GREEN));

    // anode with a "+" as long as its radius
    let anode = &bodies.anode;
    shapes.push(Shape::circle(
        Role::Anode,
        anode.x,
        anode.radius,
        particle_colour(anode.q, ANODE_CHARGE_SCALE),
    ));
    let shade = grey(sign_shade(anode.q, ANODE_CHARGE_SCALE));
    let half = anode.radius / 2.0;
    shapes.push(Shape::line(
        Role::AnodeSign,
        anode.x - NVec2::new(0.0, half),
        anode.x + NVec2::new(0.0, half),
        shade,
        3.0,
    ));
    shapes.push(Shape::line(
        Role::AnodeSign,
        anode.x - NVec2::new(half, 0.0),
        anode.x + NVec2::new(half, 0.0),
        shade,
        3.0,
    ));

    // deflector, "-" or "+" depending on its charge, nothing when neutral
    let deflector = &bodies.deflector;
    shapes.push(Shape::circle(
        Role::Deflector,
        deflector.x,
        DEFLECTOR_RADIUS,
        particle_colour(deflector.q, DEFLECTOR_CHARGE_SCALE),
    ));
    let shade = grey(sign_shade(deflector.q, DEFLECTOR_CHARGE_SCALE));
    if deflector.q != 0.0 {
        shapes.push(Shape::line(
            Role::DeflectorSign,
            deflector.x - NVec2::new(DEFLECTOR_SIGN_HALF, 0.0),
            deflector.x + NVec2::new(DEFLECTOR_SIGN_HALF, 0.0),
            shade,
            1.0,
        ));
    }
    if deflector.q > 0.0 {
        shapes.push(Shape::line(
            Role::DeflectorSign,
            deflector.x - NVec2::new(0.0, DEFLECTOR_SIGN_HALF),
            deflector.x + NVec2::new(0.0, DEFLECTOR_SIGN_HALF),
            shade,
            1.0,
        ));
    }

    for e in &state.electrons {
        shapes.push(Shape::circle(Role::Electron, e.x, ELECTRON_RADIUS, Rgb::YELLOW));
    }

    Scene { shapes }
}
