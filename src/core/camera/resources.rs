use bevy::prelude::*;
use reptilesim::layout::DeviceClass;
use reptilesim::rig::CameraRig;

#[derive(Resource, Default)]
pub struct Compositor {
    pub rig: CameraRig,
    pub device_class: Option<DeviceClass>,
}

/// Height of the control panel when it is docked above the canvas, in
/// logical pixels. Zero while the panel floats over the canvas.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct PanelInset {
    pub logical_top: f32,
}
