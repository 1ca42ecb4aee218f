use bevy::prelude::*;
use reptilesim::species::VariantKey;

/// Root of the scene subtree spawned from a creature model.
#[derive(Component, Debug)]
pub struct ModelRoot {
    pub variant: VariantKey,
}

/// Shadow flags and animation binding have been applied to this model.
#[derive(Component)]
pub struct ModelPrepared;
