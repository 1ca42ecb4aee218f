use crate::core::state::AppState;
use bevy::prelude::*;
use bevy_asset_loader::prelude::*;

pub struct LoadingPlugin;

/// Assets needed before the first frame. Creature models are not listed here;
/// they are swapped in at runtime by the creature loader.
impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_loading_state(
            LoadingState::new(AppState::Loading)
                .continue_to_state(AppState::Running)
                // the readouts fall back to Bevy's default font
                .on_failure_continue_to_state(AppState::Running)
                .load_collection::<ReadoutAssets>(),
        );
    }
}

#[derive(AssetCollection, Resource)]
pub struct ReadoutAssets {
    #[asset(path = "fonts/readout.ttf")]
    pub font: Handle<Font>,
}
