use bevy::camera::{CameraProjection, PerspectiveProjection, SubCameraView};
use bevy::math::{Mat4, Vec3A};

/// Perspective projection whose aspect ratio is set by the compositor
/// instead of being derived from the viewport size. In the wide layout the
/// two secondary views keep a square aspect on non-square regions.
#[derive(Debug, Clone)]
pub struct RigProjection {
    pub perspective: PerspectiveProjection,
    pub aspect: f32,
}

impl RigProjection {
    pub fn new(fov_degrees: f32, near: f32, far: f32) -> Self {
        Self {
            perspective: PerspectiveProjection {
                fov: fov_degrees.to_radians(),
                near,
                far,
                aspect_ratio: 1.0,
                ..Default::default()
            },
            aspect: 1.0,
        }
    }
}

impl CameraProjection for RigProjection {
    fn get_clip_from_view(&self) -> Mat4 {
        self.perspective.get_clip_from_view()
    }

    fn get_clip_from_view_for_sub(&self, sub_view: &SubCameraView) -> Mat4 {
        self.perspective.get_clip_from_view_for_sub(sub_view)
    }

    // Called by bevy whenever the viewport size changes; the region size is
    // ignored on purpose, only the compositor's aspect counts.
    fn update(&mut self, _width: f32, _height: f32) {
        self.perspective.aspect_ratio = self.aspect;
    }

    fn far(&self) -> f32 {
        self.perspective.far
    }

    fn get_frustum_corners(&self, z_near: f32, z_far: f32) -> [Vec3A; 8] {
        self.perspective.get_frustum_corners(z_near, z_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_keeps_compositor_aspect() {
        let mut projection = RigProjection::new(45.0, 0.1, 1000.0);
        projection.aspect = 1.0;

        projection.update(500.0, 450.0);

        assert_eq!(projection.perspective.aspect_ratio, 1.0);
    }

    #[test]
    fn test_projection_follows_aspect() {
        let mut narrow = RigProjection::new(45.0, 0.1, 1000.0);
        narrow.aspect = 1.0;
        narrow.update(1.0, 1.0);
        let mut wide = narrow.clone();
        wide.aspect = 2.0;
        wide.update(1.0, 1.0);

        let narrow_x = narrow.get_clip_from_view().x_axis.x;
        let wide_x = wide.get_clip_from_view().x_axis.x;
        assert!((narrow_x / wide_x - 2.0).abs() < 1e-4);
    }
}
