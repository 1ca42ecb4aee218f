use crate::events::{ControlCommand, LoadModelRequest, ModelSwapped};
use crate::simulation::AMBIENT_RANGE;
use crate::simulation::resources::*;
use bevy::prelude::*;

pub fn apply_control_commands(
    mut control_commands: MessageReader<ControlCommand>,
    mut selection: ResMut<Selection>,
    mut locomotion: ResMut<Locomotion>,
    mut temperature: ResMut<Thermoregulation>,
    mut load_requests: MessageWriter<LoadModelRequest>,
) {
    for command in control_commands.read() {
        match *command {
            ControlCommand::SelectSpecies(species) => {
                let variant = selection.select(species);
                load_requests.write(LoadModelRequest { variant });
            }
            ControlCommand::ToggleLimbs(has_limbs) => {
                if !selection.species.has_limb_toggle() {
                    continue;
                }
                let variant = selection.set_limbs(has_limbs);
                load_requests.write(LoadModelRequest { variant });
            }
            ControlCommand::ToggleWalk(walking) => locomotion.set_walking(walking),
            ControlCommand::SetSpeed(speed) => locomotion.set_speed(speed),
            ControlCommand::SetAmbientTemperature(ambient) => {
                let ambient = ambient.clamp(*AMBIENT_RANGE.start(), *AMBIENT_RANGE.end());
                temperature.set_ambient(ambient as f32);
            }
        }
    }
}

/// A new creature starts from its species' resting temperature, and the
/// limbless variant locks locomotion until another variant is loaded.
pub fn apply_model_swaps(
    settings: Res<ViewerSettings>,
    mut swaps: MessageReader<ModelSwapped>,
    mut temperature: ResMut<Thermoregulation>,
    mut locomotion: ResMut<Locomotion>,
) {
    for swap in swaps.read() {
        temperature.reset_for_swap(settings.base_temperature(swap.variant.species()));
        if swap.variant.supports_locomotion() {
            locomotion.unlock();
        } else {
            locomotion.lock();
        }
    }
}

pub fn advance_temperature(
    time: Res<Time>,
    clock: Res<FrameClock>,
    mut temperature: ResMut<Thermoregulation>,
) {
    let delta = clock.clamp(time.delta_secs());
    temperature.advance(delta);
}
