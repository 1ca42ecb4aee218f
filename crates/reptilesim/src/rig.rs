use crate::layout::{CameraView, ViewRegion, ViewportLayout};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RigCamera {
    pub aspect: Option<f32>,
    pub region: Option<ViewRegion>,
}

/// Per-camera aspect and region as last applied by the compositor.
/// Reports only what actually changed so static frames cost nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CameraRig {
    cameras: [RigCamera; 3],
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RigChange {
    pub aspect: bool,
    pub region: bool,
}

impl RigChange {
    pub fn any(&self) -> bool {
        self.aspect || self.region
    }
}

impl CameraRig {
    pub fn camera(&self, view: CameraView) -> &RigCamera {
        &self.cameras[view.index()]
    }

    /// Records `layout` and returns, in render order, what changed per view.
    pub fn apply(&mut self, layout: &ViewportLayout) -> [(CameraView, RigChange); 3] {
        CameraView::ALL.map(|view| {
            let camera = &mut self.cameras[view.index()];
            let Some(slot) = layout.slot(view) else {
                return (view, RigChange::default());
            };
            let change = RigChange {
                aspect: camera.aspect != Some(slot.aspect),
                region: camera.region != Some(slot.region),
            };
            camera.aspect = Some(slot.aspect);
            camera.region = Some(slot.region);
            (view, change)
        })
    }
}
