use crate::{DisplaySettings, MoonSimulation, PhysicsSet};

use bevy::{
    prelude::*,
    render::render_resource::{Extent3d, TextureDimension, TextureFormat},
};
use moonsim::trail::TrailCanvas;

/// Depth of the trail layer, beneath the bodies.
const TRAIL_LAYER: f32 = 0.0;

pub struct TrailsPlugin;

impl Plugin for TrailsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_trails)
            .add_systems(Update, plot_trails.in_set(PhysicsSet::Draw));
    }
}

/// Window-sized texture the trails are drawn into. It is never cleared.
#[derive(Resource)]
pub struct Trails(Handle<Image>);

fn setup_trails(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    display: Res<DisplaySettings>,
) {
    let image = Image::new_fill(
        Extent3d {
            width: display.width,
            height: display.height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &[0, 0, 0, u8::MAX],
        TextureFormat::Rgba8UnormSrgb,
    );
    let handle = images.add(image);

    commands.spawn((
        Name::new("Trails"),
        SpriteBundle {
            texture: handle.clone(),
            transform: Transform::from_xyz(0.0, 0.0, TRAIL_LAYER),
            ..default()
        },
    ));
    commands.insert_resource(Trails(handle));
}

fn plot_trails(
    display: Res<DisplaySettings>,
    simulation: Res<MoonSimulation>,
    trails: Res<Trails>,
    mut images: ResMut<Assets<Image>>,
) {
    let Some(image) = images.get_mut(&trails.0) else {
        return;
    };

    let mut canvas = match TrailCanvas::from_raw(
        display.width,
        display.height,
        image.data.as_mut_slice(),
    ) {
        Ok(canvas) => canvas,
        Err(error) => {
            error!(%error, "cannot draw trails");
            return;
        }
    };

    for body in simulation.bodies() {
        canvas.plot(body.position, body.color);
    }
}
