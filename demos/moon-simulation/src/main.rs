mod physics;
use physics::*;

mod trails;
use trails::*;

use bevy::{
    app::AppExit,
    prelude::*,
    sprite::MaterialMesh2dBundle,
    window::{WindowCloseRequested, WindowResolution},
};
use bevy_framepace::{FramepacePlugin, FramepaceSettings, Limiter};
use moonsim::{
    params::SimulationParams,
    scenario::Scenario,
    simulation::{Simulation, SimulationError},
};

fn main() -> Result<(), SimulationError> {
    let display = DisplaySettings::default();
    let simulation = Simulation::new(&Scenario::earth_luna(), SimulationParams::default())?;

    App::new()
        .add_plugins((
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: display.title.to_owned(),
                        resolution: WindowResolution::new(
                            display.width as f32,
                            display.height as f32,
                        ),
                        resizable: false,
                        ..default()
                    }),
                    close_when_requested: false,
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
            FramepacePlugin,
            PhysicsPlugin,
            TrailsPlugin,
        ))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(display)
        .insert_resource(MoonSimulation(simulation))
        .add_systems(Startup, (setup_scene, limit_frame_rate))
        .add_systems(Update, exit_on_close_request)
        .run();

    Ok(())
}

/// Size, title and frame rate of the window.
#[derive(Resource, Clone, Debug)]
pub struct DisplaySettings {
    pub width: u32,
    pub height: u32,
    pub title: &'static str,
    pub frame_rate: f64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            width: 900,
            height: 650,
            title: "Moon simulation",
            frame_rate: 60.0,
        }
    }
}

impl DisplaySettings {
    /// Converts window pixels (origin top-left, y down) to world coordinates (origin centre, y up).
    pub fn to_world(&self, x: f64, y: f64, z: f32) -> Vec3 {
        Vec3::new(
            x as f32 - self.width as f32 / 2.0,
            self.height as f32 / 2.0 - y as f32,
            z,
        )
    }
}

fn limit_frame_rate(display: Res<DisplaySettings>, mut settings: ResMut<FramepaceSettings>) {
    settings.limiter = Limiter::from_framerate(display.frame_rate);
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    display: Res<DisplaySettings>,
    simulation: Res<MoonSimulation>,
) {
    commands.spawn(Camera2dBundle::default());

    for (index, body) in simulation.bodies().iter().enumerate() {
        let [r, g, b] = body.color;

        commands.spawn((
            Name::new(body.name.clone()),
            BodyIndex(index),
            MaterialMesh2dBundle {
                mesh: meshes.add(shape::Circle::new(body.radius as f32).into()).into(),
                material: materials.add(ColorMaterial::from(Color::rgb_u8(r, g, b))),
                transform: Transform::from_translation(display.to_world(
                    body.position.x,
                    body.position.y,
                    BODY_LAYER,
                )),
                ..default()
            },
        ));
    }

    info!(
        bodies = simulation.bodies().len(),
        "starting {} at {} FPS", display.title, display.frame_rate
    );
}

fn exit_on_close_request(
    mut close_requests: EventReader<WindowCloseRequested>,
    mut exit: EventWriter<AppExit>,
    simulation: Res<MoonSimulation>,
) {
    if close_requests.read().next().is_some() {
        info!(
            ticks = simulation.ticks(),
            elapsed = simulation.elapsed(),
            "window closed, exiting"
        );
        exit.send(AppExit);
    }
}
