use std::collections::HashMap;
use std::time::Duration;

use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::{Circle, Rectangle};
use bevy::window::{CursorMoved, PrimaryWindow, WindowResolution};
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use crate::simulation::colour::Rgb;
use crate::simulation::params::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::simulation::scenario::SimulationState;
use crate::simulation::states::NVec2;
use crate::visualization::render_loop::DisplaySink;
use crate::visualization::scene::{render, Primitive, Scene};

/// Tag on every entity drawn for the current frame
#[derive(Component)]
struct SceneShape;

/// Unit meshes scaled per shape, and one material per colour in use
#[derive(Resource)]
struct ShapeAssets {
    circle: Mesh2dHandle,
    quad: Mesh2dHandle,
    materials: HashMap<Rgb, Handle<ColorMaterial>>,
}

/// Set when egui owns the pointer this frame
#[derive(Resource, Default)]
struct UiPointer(bool);

/// Depth between consecutive shapes so later ones draw on top
const Z_STEP: f32 = 0.001;

/// Shortest physics tick the viewer will schedule
const MIN_TICK: Duration = Duration::from_millis(1);

pub fn run_2d(state: SimulationState) {
    info!(variant = ?state.engine.variant, "run_2d: starting Bevy 2D viewer");

    // one physics frame per pacing interval
    let tick = state.engine.frame_pause.max(MIN_TICK);

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_duration(tick))
        .insert_resource(state)
        .init_resource::<UiPointer>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Electron Beam Simulator".into(),
                resolution: WindowResolution::new(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .add_systems(Startup, setup_viewer)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(
            Update,
            (controls_ui_system, pointer_input_system, clear_key_system, draw_scene_system).chain(),
        )
        .run();
}

fn setup_viewer(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    commands.insert_resource(ShapeAssets {
        circle: Mesh2dHandle(meshes.add(Circle::new(1.0))),
        quad: Mesh2dHandle(meshes.add(Rectangle::new(1.0, 1.0))),
        materials: HashMap::new(),
    });
}

fn physics_step_system(mut state: ResMut<SimulationState>, time: Res<Time>) {
    let report = state.advance(time.delta());
    if report.absorbed + report.escaped > 0 {
        trace!(absorbed = report.absorbed, escaped = report.escaped, live = report.live, "electrons removed");
    }
}

fn controls_ui_system(
    mut contexts: EguiContexts,
    mut state: ResMut<SimulationState>,
    mut ui_pointer: ResMut<UiPointer>,
) {
    let ctx = contexts.ctx_mut();

    egui::Window::new("Controls")
        .default_pos([10.0, 30.0])
        .resizable(false)
        .show(ctx, |ui| {
            for id in state.sliders.ids() {
                let Some(slider) = state.sliders.get(id) else {
                    continue;
                };
                let spec = *slider.spec();
                let mut value = slider.value();

                let response = ui.add(
                    egui::Slider::new(&mut value, spec.min..=spec.max)
                        .step_by(spec.step)
                        .text(spec.label),
                );
                if response.changed() {
                    state.set_slider(id, value);
                }
            }

            ui.label(format!("Electrons: {}", state.electrons.len()));
            if ui.button("Clear Electrons").clicked() {
                state.clear_electrons();
            }
        });

    ui_pointer.0 = ctx.wants_pointer_input() || ctx.is_pointer_over_area();
}

fn pointer_input_system(
    mouse: Res<ButtonInput<MouseButton>>,
    mut cursor_moved: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    ui_pointer: Res<UiPointer>,
    mut state: ResMut<SimulationState>,
) {
    if mouse.just_pressed(MouseButton::Left) && !ui_pointer.0 {
        let cursor = windows.get_single().ok().and_then(|w| w.cursor_position());
        if let Some(p) = cursor {
            state.pointer_pressed(to_canvas(p));
        }
    }

    for moved in cursor_moved.read() {
        state.pointer_moved(to_canvas(moved.position));
    }

    if mouse.just_released(MouseButton::Left) {
        state.pointer_released();
    }
}

fn clear_key_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut state: ResMut<SimulationState>,
) {
    if keys.just_pressed(KeyCode::KeyC) && !contexts.ctx_mut().wants_keyboard_input() {
        state.clear_electrons();
    }
}

fn draw_scene_system(
    mut commands: Commands,
    drawn: Query<Entity, With<SceneShape>>,
    state: Res<SimulationState>,
    mut assets: ResMut<ShapeAssets>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let mut sink = BevySink {
        commands: &mut commands,
        assets: &mut *assets,
        materials: &mut *materials,
        previous: drawn.iter().collect(),
    };

    // erase last frame, then draw this one
    sink.clear();
    sink.present(&render(&state));
}

/// Display sink that spawns one mesh entity per shape
struct BevySink<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    assets: &'a mut ShapeAssets,
    materials: &'a mut Assets<ColorMaterial>,
    previous: Vec<Entity>,
}

impl BevySink<'_, '_, '_> {
    fn material(&mut self, c: Rgb) -> Handle<ColorMaterial> {
        let materials = &mut *self.materials;
        self.assets
            .materials
            .entry(c)
            .or_insert_with(|| materials.add(ColorMaterial::from(Color::srgb_u8(c.r, c.g, c.b))))
            .clone()
    }
}

impl DisplaySink for BevySink<'_, '_, '_> {
    fn present(&mut self, scene: &Scene) {
        for (i, shape) in scene.shapes.iter().enumerate() {
            let z = i as f32 * Z_STEP;

            let (mesh, colour, transform) = match shape.primitive {
                Primitive::Circle { center, radius, fill } => {
                    let r = radius as f32;
                    let transform = Transform::from_translation(to_world(&center, z))
                        .with_scale(Vec3::new(r, r, 1.0));
                    (self.assets.circle.clone(), fill, transform)
                }
                Primitive::Line { from, to, colour, width } => {
                    let a = to_world(&from, z);
                    let b = to_world(&to, z);
                    let d = (b - a).truncate();
                    let transform = Transform::from_translation((a + b) / 2.0)
                        .with_rotation(Quat::from_rotation_z(d.y.atan2(d.x)))
                        .with_scale(Vec3::new(d.length().max(1.0), width as f32, 1.0));
                    (self.assets.quad.clone(), colour, transform)
                }
            };

            let material = self.material(colour);
            let entity = self
                .commands
                .spawn((
                    MaterialMesh2dBundle {
                        mesh,
                        material,
                        transform,
                        ..Default::default()
                    },
                    SceneShape,
                ))
                .id();
            self.previous.push(entity);
        }
    }

    fn clear(&mut self) {
        for entity in self.previous.drain(..) {
            self.commands.entity(entity).despawn();
        }
    }
}

/// Canvas pixels (origin top-left, y down) to world units (origin centre, y up)
fn to_world(p: &NVec2, z: f32) -> Vec3 {
    Vec3::new(
        (p.x - CANVAS_WIDTH / 2.0) as f32,
        (CANVAS_HEIGHT / 2.0 - p.y) as f32,
        z,
    )
}

/// Window cursor position is already in canvas orientation
fn to_canvas(p: Vec2) -> NVec2 {
    NVec2::new(p.x as f64, p.y as f64)
}
