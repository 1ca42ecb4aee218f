use bevy::prelude::*;
use reptilesim::layout::CameraView;

/// One of the three fixed viewpoints; its viewport and aspect belong to the compositor.
#[derive(Component, Debug, Clone, Copy)]
pub struct RigCamera {
    pub view: CameraView,
}

/// Full-window camera drawing the control panel and readouts over the rig.
#[derive(Component)]
pub struct OverlayCamera;
