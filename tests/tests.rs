use std::path::PathBuf;
use std::time::Duration;

use ebeam::configuration::config::{ParametersConfig, ScenarioConfig, VariantConfig};
use ebeam::configuration::error::ConfigError;
use ebeam::configuration::sliders::SliderId;
use ebeam::simulation::clock::{SimulationClock, SpawnSchedule};
use ebeam::simulation::colour::{particle_colour, sign_shade, Rgb};
use ebeam::simulation::forces::{coulomb_force, AccelSet, Coulomb};
use ebeam::simulation::integrator::{euler_integrator, euler_update, field_step, Boundary, Removal};
use ebeam::simulation::interaction::{hit_test, DragState};
use ebeam::simulation::scenario::SimulationState;
use ebeam::simulation::states::{Bodies, BodyKind, ChargedBody, Electron, ElectronStore, NVec2};
use ebeam::visualization::render_loop::{run_loop, DisplaySink};
use ebeam::visualization::scene::{render, Role, Scene};

/// Anode, deflector and cathode at their usual spots
pub fn bodies(anode_q: f64, deflector_q: f64) -> Bodies {
    Bodies {
        anode: ChargedBody::new(NVec2::new(600.0, 700.0), anode_q, 80.0),
        deflector: ChargedBody::new(NVec2::new(500.0, 300.0), deflector_q, 12.0),
        cathode: ChargedBody::new(NVec2::new(600.0, 100.0), 0.0, 10.0),
    }
}

/// Default state for a variant, no frame pause
pub fn test_state(variant: VariantConfig) -> SimulationState {
    let cfg = ScenarioConfig {
        variant,
        parameters: ParametersConfig {
            frame_pause_ms: 0,
            ..Default::default()
        },
        ..Default::default()
    };
    SimulationState::build(cfg).unwrap()
}

/// Sink that keeps the last scene and counts calls
#[derive(Default)]
struct RecordingSink {
    presented: usize,
    cleared: usize,
    last: Option<Scene>,
}

impl DisplaySink for RecordingSink {
    fn present(&mut self, scene: &Scene) {
        self.presented += 1;
        self.last = Some(scene.clone());
    }

    fn clear(&mut self) {
        self.cleared += 1;
    }
}

const FRAME: Duration = Duration::from_millis(10);

// ==================================================================================
// Field tests
// ==================================================================================

#[test]
fn field_step_is_semi_implicit_euler() {
    let b = bodies(20_000.0, -400.0);
    let e = Electron {
        x: NVec2::new(550.0, 250.0),
        v: NVec2::new(0.3, -0.1),
    };

    for mass in [1.0, 2.0] {
        let (x, v) = field_step(&e, &b.anode, &b.deflector, mass, 0.0);

        let attraction = coulomb_force(&e.x, &b.anode, 0.0);
        let repulsion = coulomb_force(&e.x, &b.deflector, 0.0);
        let a = (attraction + repulsion) / mass;

        assert_eq!(v, e.v + a, "velocity must take the full acceleration");
        assert_eq!(x, e.x + v, "position must take the new velocity");
    }
}

#[test]
fn electron_above_anode_feels_half_unit_pull() {
    // anode 20000, deflector neutral, electron 200 above the anode at rest
    let b = bodies(20_000.0, 0.0);
    let e = Electron::at_rest(NVec2::new(600.0, 500.0));

    let (x, v) = field_step(&e, &b.anode, &b.deflector, 1.0, 0.0);

    assert_eq!(v, NVec2::new(0.0, 0.5));
    assert_eq!(x, NVec2::new(600.0, 500.5));
}

#[test]
fn coulomb_inverse_square_law() {
    let anode = ChargedBody::new(NVec2::new(0.0, 0.0), 1_000.0, 10.0);
    let near = coulomb_force(&NVec2::new(100.0, 0.0), &anode, 0.0);
    let far = coulomb_force(&NVec2::new(200.0, 0.0), &anode, 0.0);

    let ratio = near.norm() / far.norm();
    assert!((ratio - 4.0).abs() < 1e-9, "Expected 4x, got {}", ratio);
}

#[test]
fn deflector_sign_picks_attraction_or_repulsion() {
    let x = NVec2::new(500.0, 400.0); // 100 below the deflector

    let positive = bodies(0.0, 400.0);
    let f = coulomb_force(&x, &positive.deflector, 0.0);
    assert!(f.y < 0.0, "positive deflector should pull the electron up");

    let negative = bodies(0.0, -400.0);
    let f = coulomb_force(&x, &negative.deflector, 0.0);
    assert!(f.y > 0.0, "negative deflector should push the electron down");
    assert!((f.y - 0.04).abs() < 1e-12);
}

#[test]
fn accel_set_sums_both_sources() {
    let b = bodies(20_000.0, -400.0);
    let x = NVec2::new(420.0, 380.0);
    let forces = AccelSet::new().with(Coulomb { eps2: 0.0 });

    let expected = coulomb_force(&x, &b.anode, 0.0) + coulomb_force(&x, &b.deflector, 0.0);
    let net = forces.net_force(&x, &b);

    assert!((net - expected).norm() < 1e-12);
}

#[test]
fn softening_keeps_singularity_finite() {
    let b = bodies(20_000.0, -400.0);
    let on_deflector = b.deflector.x;

    let bare = AccelSet::new().with(Coulomb { eps2: 0.0 });
    let f = bare.net_force(&on_deflector, &b);
    assert!(!f.x.is_finite() || !f.y.is_finite(), "bare law is singular at the source");

    let soft = AccelSet::new().with(Coulomb { eps2: 1.0 });
    let f = soft.net_force(&on_deflector, &b);
    assert!(f.x.is_finite() && f.y.is_finite(), "Softening failed: {:?}", f);
}

#[test]
fn softened_field_step_matches_accel_set() {
    let b = bodies(20_000.0, -400.0);
    let e = Electron::at_rest(b.deflector.x + NVec2::new(0.5, 0.0));
    let forces = AccelSet::new().with(Coulomb { eps2: 4.0 });

    let (x, v) = field_step(&e, &b.anode, &b.deflector, 1.0, 4.0);
    let (x_set, v_set) = euler_update(&e, forces.net_force(&e.x, &b), 1.0);

    assert!((x - x_set).norm() < 1e-12);
    assert!((v - v_set).norm() < 1e-12);

    // the bare step differs this close to the deflector
    let (_, v_bare) = field_step(&e, &b.anode, &b.deflector, 1.0, 0.0);
    assert!((v - v_bare).norm() > 1.0);
}

// ==================================================================================
// Removal tests
// ==================================================================================

#[test]
fn absorbed_electrons_leave_in_the_same_pass() {
    let state = test_state(VariantConfig::Enhanced);
    let mut electrons: ElectronStore = [
        NVec2::new(100.0, 300.0),
        NVec2::new(600.0, 650.0), // 50 from the anode
        NVec2::new(350.0, 300.0),
        NVec2::new(600.0, 690.0), // 10 from the anode
        NVec2::new(1100.0, 300.0),
    ]
    .into_iter()
    .map(Electron::at_rest)
    .collect();

    let stats = euler_integrator(&mut electrons, &state.bodies, &state.forces, &state.config);

    assert_eq!(stats.absorbed, 2);
    assert_eq!(stats.escaped, 0);
    assert_eq!(electrons.len(), 3);

    // survivors keep their order
    let xs: Vec<f64> = electrons.iter().map(|e| e.x.x).collect();
    for (got, want) in xs.iter().zip([100.0, 350.0, 1100.0]) {
        assert!((got - want).abs() < 2.0, "expected x near {}, got {}", want, got);
    }
}

#[test]
fn removal_uses_distance_before_the_move() {
    let state = test_state(VariantConfig::Enhanced);

    // inside the anode but flying out fast
    let mut electrons: ElectronStore = [Electron {
        x: NVec2::new(600.0, 625.0),
        v: NVec2::new(0.0, -50.0),
    }]
    .into_iter()
    .collect();

    let stats = euler_integrator(&mut electrons, &state.bodies, &state.forces, &state.config);
    assert_eq!(stats.absorbed, 1);
    assert!(electrons.is_empty());
}

#[test]
fn non_finite_electrons_are_dropped() {
    for variant in [VariantConfig::Classic, VariantConfig::Enhanced] {
        let mut state = test_state(variant);
        // deflector parked on the cathode: every new electron sits on a source
        state.bodies.deflector.x = state.bodies.cathode.x;

        for _ in 0..60 {
            state.spawn_electron();
            let report = state.advance(FRAME);
            assert!(report.escaped >= 1, "{:?}: singular electron stayed live", variant);
            assert!(
                state.electrons.iter().all(|e| e.x.iter().chain(e.v.iter()).all(|c| c.is_finite())),
                "{:?}: non-finite electron in the live set",
                variant
            );
        }
        assert!(state.electrons.is_empty());
    }
}

#[test]
fn non_finite_distance_counts_as_escaped() {
    let classic = Boundary::SquaredRadius;
    let enhanced = Boundary::Radius { escape: 1200.0 };
    for d2 in [f64::NAN, f64::INFINITY] {
        assert_eq!(classic.classify(d2, 100.0), Some(Removal::Escaped));
        assert_eq!(enhanced.classify(d2, 80.0), Some(Removal::Escaped));
    }
}

#[test]
fn enhanced_electrons_escape_far_from_anode() {
    let state = test_state(VariantConfig::Enhanced);
    let mut electrons: ElectronStore = [Electron::at_rest(NVec2::new(600.0, -600.0))].into_iter().collect();

    let stats = euler_integrator(&mut electrons, &state.bodies, &state.forces, &state.config);
    assert_eq!(stats.escaped, 1);
    assert!(electrons.is_empty());
}

#[test]
fn classic_absorbs_on_squared_radius() {
    let state = test_state(VariantConfig::Classic);
    assert_eq!(state.bodies.anode.radius, 100.0);

    let mut electrons: ElectronStore = [
        Electron::at_rest(NVec2::new(600.0, 610.0)), // 90 away
        Electron::at_rest(NVec2::new(600.0, 590.0)), // 110 away
    ]
    .into_iter()
    .collect();

    let stats = euler_integrator(&mut electrons, &state.bodies, &state.forces, &state.config);
    assert_eq!(stats.absorbed, 1);
    assert_eq!(electrons.len(), 1);

    // nothing escapes in the classic variant
    assert_eq!(Boundary::SquaredRadius.classify(1.0e8, 100.0), None);
}

#[test]
fn boundary_classification() {
    let enhanced = Boundary::Radius { escape: 1200.0 };
    assert_eq!(enhanced.classify(79.0 * 79.0, 80.0), Some(Removal::Absorbed));
    assert_eq!(enhanced.classify(81.0 * 81.0, 80.0), None);
    assert_eq!(enhanced.classify(1300.0 * 1300.0, 80.0), Some(Removal::Escaped));
    assert_eq!(Boundary::SquaredRadius.classify(99.0 * 99.0, 100.0), Some(Removal::Absorbed));
}

// ==================================================================================
// Spawn tests
// ==================================================================================

#[test]
fn spawning_never_exceeds_classic_cap() {
    let mut state = test_state(VariantConfig::Classic);
    for i in 0..500 {
        let x = NVec2::new(100.0 + (i % 50) as f64 * 2.0, 200.0 + (i / 50) as f64 * 2.0);
        state.electrons.push(Electron::at_rest(x));
    }

    for _ in 0..50 {
        let report = state.advance(FRAME);
        assert!(report.live <= 500, "live set grew to {}", report.live);
    }
}

#[test]
fn spawning_never_exceeds_enhanced_cap() {
    let mut state = test_state(VariantConfig::Enhanced);
    let spawned = (0..1005).filter(|_| state.spawn_electron()).count();

    assert_eq!(spawned, 1000);
    assert_eq!(state.electrons.len(), 1000);
}

#[test]
fn capped_clock_does_not_spawn() {
    let mut clock = SimulationClock::new(SpawnSchedule::EveryNFrames(2), 3);
    assert!(!clock.tick(FRAME, 3));
    assert!(!clock.tick(FRAME, 2), "frame 1 is not a spawn frame");
    assert!(clock.tick(FRAME, 2));
}

#[test]
fn zero_flow_rate_disables_spawning() {
    let mut state = test_state(VariantConfig::Enhanced);
    assert!(state.set_slider(SliderId::Spawn, 0.0));

    for _ in 0..100 {
        let report = state.advance(Duration::from_millis(100));
        assert!(!report.spawned);
    }
    assert!(state.electrons.is_empty());
}

#[test]
fn flow_rate_spawns_after_interval() {
    // 4 per second -> every 250 ms
    let mut clock = SimulationClock::new(SpawnSchedule::from_flow_rate(4.0), 1000);
    let spawns: Vec<bool> = (0..6).map(|_| clock.tick(Duration::from_millis(100), 0)).collect();

    assert_eq!(spawns, [false, false, true, false, false, true]);
}

#[test]
fn slider_change_keeps_elapsed_time() {
    let mut clock = SimulationClock::new(SpawnSchedule::from_flow_rate(4.0), 1000);
    assert!(!clock.tick(Duration::from_millis(200), 0));

    // 10 per second -> 100 ms, already 200 ms since the last spawn
    clock.set_schedule(SpawnSchedule::from_flow_rate(10.0));
    assert!(clock.tick(Duration::from_millis(10), 0));
}

#[test]
fn beam_density_maps_to_frame_interval() {
    assert_eq!(SpawnSchedule::from_beam_density(5.0), SpawnSchedule::EveryNFrames(7));
    assert_eq!(SpawnSchedule::from_beam_density(10.0), SpawnSchedule::EveryNFrames(2));
    assert_eq!(SpawnSchedule::from_beam_density(1.0), SpawnSchedule::EveryNFrames(11));
}

#[test]
fn classic_spawns_on_multiples_of_interval() {
    let mut clock = SimulationClock::new(SpawnSchedule::from_beam_density(5.0), 500);
    let spawn_frames: Vec<u64> = (0..15u64).filter(|_| clock.tick(FRAME, 0)).collect();

    assert_eq!(spawn_frames, [0, 7, 14]);
}

// ==================================================================================
// State tests
// ==================================================================================

#[test]
fn clearing_empties_live_set_and_scene() {
    let mut state = test_state(VariantConfig::Enhanced);
    for _ in 0..10 {
        state.spawn_electron();
    }
    state.advance(FRAME);
    assert_eq!(render(&state).count(Role::Electron), state.electrons.len());

    state.clear_electrons();
    assert!(state.electrons.is_empty());
    assert_eq!(render(&state).count(Role::Electron), 0);
}

#[test]
fn electrons_spawn_at_the_cathode() {
    let mut state = test_state(VariantConfig::Enhanced);
    state.bodies.cathode.x = NVec2::new(200.0, 150.0);
    assert!(state.spawn_electron());

    let e = state.electrons.get(0).unwrap();
    assert_eq!(e.x, NVec2::new(200.0, 150.0));
    assert_eq!(e.v, NVec2::zeros());
}

#[test]
fn sliders_update_bodies() {
    let mut state = test_state(VariantConfig::Enhanced);

    assert!(state.set_slider(SliderId::AnodeSize, 120.0));
    assert!(state.set_slider(SliderId::AnodeCharge, 30_000.0));
    assert!(state.set_slider(SliderId::DeflectorCharge, 260.0)); // snaps to 250

    assert_eq!(state.bodies.anode.radius, 120.0);
    assert_eq!(state.bodies.anode.q, 30_000.0);
    assert_eq!(state.bodies.deflector.q, 250.0);

    let mut classic = test_state(VariantConfig::Classic);
    assert!(!classic.set_slider(SliderId::AnodeSize, 120.0), "classic has no anode size");
}

// ==================================================================================
// Interaction tests
// ==================================================================================

#[test]
fn dragging_deflector_moves_only_deflector() {
    let mut state = test_state(VariantConfig::Enhanced);
    let anode = state.bodies.anode.x;
    let cathode = state.bodies.cathode.x;

    let drag = state.pointer_pressed(NVec2::new(505.0, 295.0));
    assert_eq!(drag, DragState::Dragging(BodyKind::Deflector));

    state.pointer_moved(NVec2::new(700.0, 200.0));
    let report = state.advance(FRAME);

    assert_eq!(report.moved, Some(BodyKind::Deflector));
    assert_eq!(state.bodies.deflector.x, NVec2::new(700.0, 200.0));
    assert_eq!(state.bodies.anode.x, anode);
    assert_eq!(state.bodies.cathode.x, cathode);
}

#[test]
fn hit_test_priority() {
    let mut b = bodies(20_000.0, -400.0);

    // deflector sitting on the anode wins
    b.deflector.x = b.anode.x;
    assert_eq!(hit_test(&b.anode.x, &b), Some(BodyKind::Deflector));
    assert_eq!(hit_test(&NVec2::new(600.0, 760.0), &b), Some(BodyKind::Anode));
    assert_eq!(hit_test(&b.cathode.x, &b), Some(BodyKind::Cathode));
    assert_eq!(hit_test(&NVec2::new(50.0, 50.0), &b), None);

    // edge of the circle counts
    assert_eq!(hit_test(&NVec2::new(610.0, 100.0), &b), Some(BodyKind::Cathode));
}

#[test]
fn missed_press_stays_idle() {
    let mut state = test_state(VariantConfig::Enhanced);
    let before = state.bodies.clone();

    assert_eq!(state.pointer_pressed(NVec2::new(50.0, 50.0)), DragState::Idle);
    state.pointer_moved(NVec2::new(300.0, 300.0));
    state.advance(FRAME);

    assert_eq!(state.bodies, before);
}

#[test]
fn release_returns_to_idle() {
    let mut state = test_state(VariantConfig::Enhanced);
    state.pointer_pressed(NVec2::new(600.0, 100.0));
    assert_eq!(state.interaction.state(), DragState::Dragging(BodyKind::Cathode));

    state.pointer_released();
    assert_eq!(state.interaction.state(), DragState::Idle);

    let cathode = state.bodies.cathode.x;
    state.pointer_moved(NVec2::new(900.0, 800.0));
    state.advance(FRAME);
    assert_eq!(state.bodies.cathode.x, cathode);
}

#[test]
fn classic_deflector_follows_pointer_anywhere() {
    let mut state = test_state(VariantConfig::Classic);

    let drag = state.pointer_pressed(NVec2::new(50.0, 50.0));
    assert_eq!(drag, DragState::Dragging(BodyKind::Deflector));

    state.pointer_moved(NVec2::new(300.0, 400.0));
    state.advance(FRAME);
    assert_eq!(state.bodies.deflector.x, NVec2::new(300.0, 400.0));
}

// ==================================================================================
// Colour tests
// ==================================================================================

#[test]
fn neutral_charge_is_white() {
    assert_eq!(particle_colour(0.0, 1_000.0), Rgb::WHITE);
    assert_eq!(particle_colour(0.0, 50_000.0), Rgb::WHITE);
}

#[test]
fn colour_is_monotonic_in_charge() {
    let positive: Vec<Rgb> = (0..=10).map(|i| particle_colour(i as f64 * 100.0, 1_000.0)).collect();
    for pair in positive.windows(2) {
        assert!(pair[1].r < pair[0].r && pair[1].b < pair[0].b, "not moving toward green: {:?}", pair);
        assert_eq!(pair[1].g, 255);
    }
    assert_eq!(positive[10], Rgb::GREEN);

    let negative: Vec<Rgb> = (0..=10).map(|i| particle_colour(-(i as f64) * 100.0, 1_000.0)).collect();
    for pair in negative.windows(2) {
        assert!(pair[1].b < pair[0].b, "not moving toward yellow: {:?}", pair);
        assert_eq!((pair[1].r, pair[1].g), (255, 255));
    }
    assert_eq!(negative[10], Rgb::YELLOW);
}

#[test]
fn sign_darkens_with_magnitude() {
    assert!(sign_shade(200.0, 1_000.0) > sign_shade(800.0, 1_000.0));
    assert_eq!(sign_shade(-800.0, 1_000.0), sign_shade(800.0, 1_000.0));
    for q in [0.0, 1_000.0, 50_000.0, -5_000.0] {
        assert!((1..=99).contains(&sign_shade(q, 1_000.0)));
    }
}

// ==================================================================================
// Scene and loop tests
// ==================================================================================

#[test]
fn deflector_glyph_follows_charge_sign() {
    let mut state = test_state(VariantConfig::Enhanced);

    state.set_slider(SliderId::DeflectorCharge, 0.0);
    assert_eq!(render(&state).count(Role::DeflectorSign), 0);

    state.set_slider(SliderId::DeflectorCharge, -400.0);
    assert_eq!(render(&state).count(Role::DeflectorSign), 1);

    state.set_slider(SliderId::DeflectorCharge, 400.0);
    assert_eq!(render(&state).count(Role::DeflectorSign), 2);

    let scene = render(&state);
    assert_eq!(scene.count(Role::AnodeSign), 2);
    assert_eq!(scene.count(Role::Cathode), 1);
    assert_eq!(scene.count(Role::Anode), 1);
}

#[test]
fn render_loop_presents_every_frame() {
    let mut state = test_state(VariantConfig::Classic);
    let mut sink = RecordingSink::default();

    let summary = run_loop(&mut state, &mut sink, Some(15));

    assert_eq!(summary.frames, 15);
    assert_eq!(sink.presented, 15);
    assert_eq!(sink.cleared, 15);

    // density 5 -> frames 0, 7 and 14
    assert_eq!(summary.spawned, 3);
    assert_eq!(summary.live, 3);
    let last = sink.last.unwrap();
    assert_eq!(last.count(Role::Electron), 3);
}

// ==================================================================================
// Configuration tests
// ==================================================================================

#[test]
fn classic_scenario_from_yaml() {
    let yaml = r#"
variant: classic
sliders:
  anode_charge: 30000
  beam_density: 10
bodies:
  deflector: [400.0, 350.0]
"#;
    let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();
    let state = SimulationState::build(cfg).unwrap();

    assert_eq!(state.config.live_cap, 500);
    assert_eq!(state.config.spawn, SpawnSchedule::EveryNFrames(2));
    assert_eq!(state.bodies.anode.q, 30_000.0);
    assert_eq!(state.bodies.deflector.x, NVec2::new(400.0, 350.0));
    assert_eq!(state.bodies.cathode.x, NVec2::new(600.0, 100.0));
    assert_eq!(state.config.deflector_charge, -400.0);
}

#[test]
fn out_of_range_slider_is_rejected() {
    let cfg = ScenarioConfig::from_yaml_str("variant: enhanced\nsliders:\n  anode_size: 500\n").unwrap();
    let err = SimulationState::build(cfg).err().unwrap();
    assert!(matches!(err, ConfigError::SliderOutOfRange { name: "anode_size", .. }), "{}", err);
}

#[test]
fn bad_yaml_is_rejected() {
    assert!(ScenarioConfig::from_yaml_str("variant: turbo\n").is_err());
    assert!(ScenarioConfig::from_yaml_str("sliders:\n  anode_charge: 1000\n").is_err());
}

#[test]
fn non_positive_mass_is_rejected() {
    let cfg = ScenarioConfig {
        parameters: ParametersConfig {
            electron_mass: 0.0,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(matches!(
        SimulationState::build(cfg),
        Err(ConfigError::NonPositive { name: "electron_mass", .. })
    ));
}

fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(name)
}

#[test]
fn shipped_scenarios_load_and_build() {
    let classic = ScenarioConfig::load(&scenario_path("classic.yaml")).unwrap();
    assert_eq!(classic.variant, VariantConfig::Classic);
    let state = SimulationState::build(classic).unwrap();
    assert_eq!(state.config.live_cap, 500);
    assert_eq!(state.config.spawn, SpawnSchedule::EveryNFrames(7));
    assert_eq!(state.sliders.ids().len(), 3);

    let enhanced = ScenarioConfig::load(&scenario_path("enhanced.yaml")).unwrap();
    assert_eq!(enhanced.variant, VariantConfig::Enhanced);
    let state = SimulationState::build(enhanced).unwrap();
    assert_eq!(state.config.live_cap, 1000);
    assert_eq!(state.config.spawn, SpawnSchedule::Interval(Some(Duration::from_millis(200))));
    assert_eq!(state.bodies.anode.radius, 80.0);
    assert_eq!(state.sliders.ids().len(), 4);
}

#[test]
fn missing_scenario_is_io_error() {
    let path = scenario_path("no-such-scenario.yaml");
    match ScenarioConfig::load(&path) {
        Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn foreign_slider_in_yaml_is_rejected() {
    let cfg = ScenarioConfig::from_yaml_str("variant: classic\nsliders:\n  flow_rate: 3\n").unwrap();
    let err = SimulationState::build(cfg).err().unwrap();
    assert!(matches!(err, ConfigError::InvalidSlider { name: "flow_rate", .. }), "{}", err);
}
