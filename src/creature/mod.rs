pub(crate) mod components;
pub(crate) mod resources;
mod systems;

use crate::FrameSet;
use crate::creature::resources::*;
use crate::creature::systems::*;
use crate::simulation::resources::ViewerSettings;
use bevy::prelude::*;

/// Loads creature models, swaps them into the scene and drives their walk cycle.
pub struct CreaturePlugin;

impl Plugin for CreaturePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewerSettings>();
        let reference_speed = app
            .world()
            .resource::<ViewerSettings>()
            .locomotion
            .reference_speed;

        app.init_resource::<ModelLoader>()
            .init_resource::<ActiveCreature>()
            .insert_resource(AnimationBinding::new(reference_speed))
            .add_systems(Startup, request_initial_model)
            .add_systems(
                Update,
                (start_model_loads, finish_model_loads, prepare_loaded_model)
                    .chain()
                    .in_set(FrameSet::Load),
            )
            .add_systems(Update, drive_animation.in_set(FrameSet::Animate));
    }
}
