use crate::DisplaySettings;

use bevy::{app::AppExit, prelude::*};
use moonsim::simulation::Simulation;

/// Depth of the body circles, above the trail layer.
pub const BODY_LAYER: f32 = 1.0;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum PhysicsSet {
    Step,
    Draw,
}

#[derive(Resource, Deref, DerefMut)]
pub struct MoonSimulation(pub Simulation);

/// Index of the simulated body an entity draws.
#[derive(Component, Clone, Copy, Debug, Deref)]
pub struct BodyIndex(pub usize);

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (PhysicsSet::Step, PhysicsSet::Draw).chain())
            .add_systems(Update, step_simulation.in_set(PhysicsSet::Step))
            .add_systems(Update, update_transforms.in_set(PhysicsSet::Draw));
    }
}

/// Advances the simulation by exactly one tick per rendered frame.
fn step_simulation(mut simulation: ResMut<MoonSimulation>, mut exit: EventWriter<AppExit>) {
    if let Err(error) = simulation.step() {
        error!(%error, tick = simulation.ticks(), "simulation stopped");
        exit.send(AppExit);
    }
}

fn update_transforms(
    display: Res<DisplaySettings>,
    simulation: Res<MoonSimulation>,
    mut query: Query<(&BodyIndex, &mut Transform)>,
) {
    for (index, mut transform) in &mut query {
        if let Some(body) = simulation.bodies().get(**index) {
            transform.translation = display.to_world(body.position.x, body.position.y, BODY_LAYER);
        }
    }
}
