pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Bodies, BodyKind, ChargedBody, Electron, ElectronStore, NVec2};
pub use simulation::forces::{AccelSet, Coulomb, Force};
pub use simulation::integrator::{euler_integrator, field_step, Boundary};
pub use simulation::clock::{SimulationClock, SpawnSchedule};
pub use simulation::interaction::{hit_test, DragState, InteractionController, PointerMode};
pub use simulation::colour::{particle_colour, sign_shade, Rgb};
pub use simulation::scenario::{FrameReport, SimulationState};

pub use configuration::config::{ScenarioConfig, VariantConfig};
pub use configuration::error::ConfigError;
pub use configuration::sliders::{SliderId, Sliders};

pub use visualization::scene::{render, Scene};
pub use visualization::render_loop::{run_loop, DisplaySink, FrameLog, LoopSummary};
pub use visualization::beam_vis2d::run_2d;

pub use benchmark::benchmark::bench_field_step;
