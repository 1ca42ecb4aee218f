use bevy::prelude::*;
use reptilesim::clock::SimulationClock;
use reptilesim::config::ViewerConfig;
use reptilesim::locomotion::LocomotionState;
use reptilesim::species::SpeciesSelection;
use reptilesim::temperature::TemperatureModel;

/// Snapshot of `viewer_config.toml` taken at startup.
#[derive(Resource, Deref, Clone)]
pub struct ViewerSettings(pub ViewerConfig);

impl Default for ViewerSettings {
    fn default() -> Self {
        Self(reptilesim::get_config())
    }
}

#[derive(Resource, Deref, DerefMut)]
pub struct FrameClock(pub SimulationClock);

#[derive(Resource, Deref, DerefMut)]
pub struct Thermoregulation(pub TemperatureModel);

#[derive(Resource, Deref, DerefMut)]
pub struct Locomotion(pub LocomotionState);

#[derive(Resource, Deref, DerefMut, Default)]
pub struct Selection(pub SpeciesSelection);
