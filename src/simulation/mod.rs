pub(crate) mod resources;
mod systems;

use crate::FrameSet;
use crate::events::{ControlCommand, LoadModelRequest, ModelSwapped};
use crate::simulation::resources::*;
use crate::simulation::systems::*;
use bevy::prelude::*;
use reptilesim::clock::SimulationClock;
use reptilesim::locomotion::LocomotionState;
use reptilesim::temperature::TemperatureModel;
use std::ops::RangeInclusive;

/// Ambient temperatures the control panel offers, °C.
pub(crate) const AMBIENT_RANGE: RangeInclusive<i32> = 0..=45;

/// Temperature relaxation and locomotion state driven by the control panel.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewerSettings>();
        let config = app.world().resource::<ViewerSettings>().0.clone();

        app.insert_resource(FrameClock(SimulationClock::new(
            config.simulation.max_frame_delta,
        )))
        .insert_resource(Thermoregulation(TemperatureModel::from_config(
            &config.simulation,
        )))
        .insert_resource(Locomotion(LocomotionState::new(&config.locomotion)))
        .init_resource::<Selection>()
        .add_message::<ControlCommand>()
        .add_message::<LoadModelRequest>()
        .add_message::<ModelSwapped>()
        .add_systems(Update, apply_control_commands.in_set(FrameSet::Input))
        .add_systems(
            Update,
            (apply_model_swaps, advance_temperature)
                .chain()
                .in_set(FrameSet::Simulate),
        );
    }
}
