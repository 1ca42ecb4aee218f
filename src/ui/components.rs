use bevy::prelude::*;

/// One line of the on-canvas readout overlay.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readout {
    Speed,
    Ambient,
    Body,
}

impl Readout {
    pub const ALL: [Readout; 3] = [Readout::Speed, Readout::Ambient, Readout::Body];
}

#[derive(Component)]
pub struct ReadoutPanel;
