mod core;
mod creature;
mod events;
mod loading;
mod simulation;
mod ui;

use crate::core::camera::CameraPlugin;
use crate::core::state::AppState;
use crate::creature::CreaturePlugin;
use crate::events::{ControlCommand, LoadModelRequest, ModelSwapped};
use crate::loading::LoadingPlugin;
use crate::simulation::SimulationPlugin;
use crate::simulation::resources::ViewerSettings;
use crate::ui::UIPlugin;
use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;
use std::time::Duration;

/// Per-frame ordering: control input, model loading, temperature,
/// animation, then viewport composition.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Load,
    Simulate,
    Animate,
    Compose,
}

pub struct ViewerPlugin;

impl Plugin for ViewerPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<ViewerSettings>()
            .add_message::<ControlCommand>()
            .add_message::<LoadModelRequest>()
            .add_message::<ModelSwapped>()
            .configure_sets(
                Update,
                (
                    FrameSet::Input,
                    FrameSet::Load,
                    FrameSet::Simulate,
                    FrameSet::Animate,
                    FrameSet::Compose,
                )
                    .chain(),
            )
            .add_plugins((
                LoadingPlugin,
                CameraPlugin,
                SimulationPlugin,
                CreaturePlugin,
                UIPlugin,
            ))
            .add_systems(Startup, clamp_virtual_time);

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}

/// Animation players advance on virtual time, so clamping it here bounds the
/// step taken after the window was hidden or the app stalled.
fn clamp_virtual_time(settings: Res<ViewerSettings>, mut time: ResMut<Time<Virtual>>) {
    let max_delta = settings.simulation.max_frame_delta;
    if max_delta > 0.0 {
        time.set_max_delta(Duration::from_secs_f32(max_delta));
    }
}
