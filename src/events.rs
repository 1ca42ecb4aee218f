use bevy::prelude::*;
use reptilesim::species::{Species, VariantKey};

/// Input from the control panel.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum ControlCommand {
    SelectSpecies(Species),
    ToggleLimbs(bool),
    ToggleWalk(bool),
    SetSpeed(f32),
    SetAmbientTemperature(i32),
}

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadModelRequest {
    pub variant: VariantKey,
}

/// Emitted once the new model has replaced the previous one.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSwapped {
    pub variant: VariantKey,
}
