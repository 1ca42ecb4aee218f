pub(crate) mod bundles;
pub(crate) mod components;
mod panel;
mod systems;

use crate::core::state::AppState;
use crate::ui::panel::control_panel;
use crate::ui::systems::*;
use bevy::prelude::*;
use bevy_egui::{EguiGlobalSettings, EguiPlugin, EguiPrimaryContextPass};

/// Control panel and the on-canvas readouts.
pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        // the primary egui context lives on the full-window overlay camera,
        // not on the first rig camera and its viewport
        app.insert_resource(EguiGlobalSettings {
            auto_create_primary_context: false,
            ..default()
        })
        .add_plugins(EguiPlugin::default())
        .add_systems(EguiPrimaryContextPass, control_panel)
        .add_systems(OnEnter(AppState::Running), spawn_readouts)
        .add_systems(Update, update_readouts.run_if(in_state(AppState::Running)));
    }
}
