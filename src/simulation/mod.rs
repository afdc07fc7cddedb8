pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod clock;
pub mod interaction;
pub mod colour;
pub mod scenario;
