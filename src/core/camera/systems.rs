use crate::core::camera::components::{OverlayCamera, RigCamera};
use crate::core::camera::projection::RigProjection;
use crate::core::camera::resources::{Compositor, PanelInset};
use crate::simulation::resources::ViewerSettings;
use bevy::camera::Viewport;
use bevy::light::{CascadeShadowConfigBuilder, DirectionalLight, AmbientLight as GlobalAmbientLight};
use bevy::math::Isometry3d;
use bevy::prelude::*;
use bevy::ui::IsDefaultUiCamera;
use bevy::window::PrimaryWindow;
use bevy_egui::PrimaryEguiContext;
use reptilesim::layout::{CameraView, ViewportLayout};
use std::f32::consts::FRAC_PI_2;

/// White fill light, a quarter of the sun's share of the scene.
const AMBIENT_BRIGHTNESS: f32 = 300.0;
const GROUND_OPACITY: f32 = 0.4;

pub fn spawn_cameras(mut commands: Commands) {
    for view in CameraView::ALL {
        let order = view.index() as isize;
        commands.spawn((
            Camera3d::default(),
            Camera {
                order,
                // the first pass clears the whole surface, later passes must
                // not wipe the regions drawn before them
                clear_color: if order == 0 {
                    ClearColorConfig::Default
                } else {
                    ClearColorConfig::None
                },
                ..default()
            },
            Projection::custom(RigProjection::new(45.0, 0.1, 1000.0)),
            Transform::from_translation(view.eye()).looking_at(Vec3::ZERO, view.up()),
            RigCamera { view },
            Name::new(format!("{} camera", view.label())),
        ));
    }

    commands.spawn((
        Camera2d,
        Camera {
            order: CameraView::ALL.len() as isize,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        OverlayCamera,
        PrimaryEguiContext,
        IsDefaultUiCamera,
        Name::new("overlay camera"),
    ));

    info!("Cameras spawned");
}

pub fn spawn_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        DirectionalLight {
            illuminance: 6_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        CascadeShadowConfigBuilder {
            maximum_distance: 50.0,
            ..default()
        }
        .build(),
        Name::new("sun"),
    ));

    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    // translucent matte floor: lit areas fade into the clear colour, shadows
    // show through as soft grey
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(100.0, 100.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 1.0, 1.0, GROUND_OPACITY),
            alpha_mode: AlphaMode::Blend,
            perceptual_roughness: 1.0,
            reflectance: 0.0,
            ..default()
        })),
        Transform::default(),
        Name::new("ground"),
    ));
}

pub fn draw_ground_grid(mut gizmos: Gizmos) {
    gizmos.grid(
        Isometry3d::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        UVec2::splat(12),
        Vec2::splat(1.0),
        Color::srgb(0.55, 0.55, 0.55),
    );
}

/// Splits the window into one viewport per rig camera. Viewports and
/// projections are only written when the layout actually changed.
pub fn compose_viewports(
    settings: Res<ViewerSettings>,
    inset: Res<PanelInset>,
    mut compositor: ResMut<Compositor>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cameras: Query<(&RigCamera, &mut Camera, &mut Projection)>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let inset_px = (inset.logical_top * window.scale_factor()).round().max(0.0) as u32;
    let surface = UVec2::new(
        window.physical_width(),
        window.physical_height().saturating_sub(inset_px),
    );
    let Some(layout) = ViewportLayout::compute(
        surface,
        UVec2::new(0, inset_px),
        settings.layout.compact_breakpoint,
    ) else {
        // minimised or not yet sized; keep whatever was shown last
        return;
    };

    if compositor.device_class != Some(layout.device_class) {
        info!("Viewport layout: {:?} at {}x{}", layout.device_class, surface.x, surface.y);
        compositor.device_class = Some(layout.device_class);
    }

    let changes = compositor.rig.apply(&layout);

    for (rig_camera, mut camera, mut projection) in &mut cameras {
        let (_, change) = changes[rig_camera.view.index()];
        let Some(slot) = layout.slot(rig_camera.view) else {
            continue;
        };

        let drawable = slot.region.is_drawable();
        if camera.is_active != drawable {
            camera.is_active = drawable;
        }
        if drawable && (change.region || camera.viewport.is_none()) {
            camera.viewport = Some(Viewport {
                physical_position: slot.region.position,
                physical_size: slot.region.size,
                ..default()
            });
        }

        if change.aspect {
            if let Projection::Custom(custom) = projection.as_mut() {
                if let Some(rig_projection) = custom.get_mut::<RigProjection>() {
                    rig_projection.aspect = slot.aspect;
                    rig_projection.perspective.aspect_ratio = slot.aspect;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_lighting_and_ground() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Mesh>()
            .init_asset::<StandardMaterial>()
            .add_systems(Startup, spawn_environment);
        app.update();

        let ambient = app.world().resource::<GlobalAmbientLight>();
        assert_eq!(ambient.color, Color::WHITE);
        assert_eq!(ambient.brightness, AMBIENT_BRIGHTNESS);

        let mut grounds = app
            .world_mut()
            .query::<(&Name, &MeshMaterial3d<StandardMaterial>)>();
        let material = grounds
            .iter(app.world())
            .find(|(name, _)| name.as_str() == "ground")
            .map(|(_, material)| material.0.clone())
            .unwrap();
        let material = app
            .world()
            .resource::<Assets<StandardMaterial>>()
            .get(&material)
            .unwrap();
        assert_eq!(material.alpha_mode, AlphaMode::Blend);
        assert_eq!(material.base_color.alpha(), GROUND_OPACITY);

        let mut suns = app.world_mut().query::<&DirectionalLight>();
        assert!(suns.iter(app.world()).all(|sun| sun.shadows_enabled));
    }
}
