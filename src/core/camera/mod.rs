pub(crate) mod components;
pub(crate) mod projection;
pub(crate) mod resources;
mod systems;

use crate::FrameSet;
use crate::core::camera::resources::*;
use crate::core::camera::systems::*;
use bevy::prelude::*;

/// Owns the three rig cameras and splits the window between them.
pub(crate) struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Compositor>()
            .init_resource::<PanelInset>()
            .add_systems(Startup, (spawn_cameras, spawn_environment))
            .add_systems(
                Update,
                (compose_viewports, draw_ground_grid).in_set(FrameSet::Compose),
            );
    }
}
