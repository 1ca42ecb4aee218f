use crate::core::camera::resources::PanelInset;
use crate::creature::resources::ActiveCreature;
use crate::events::ControlCommand;
use crate::simulation::AMBIENT_RANGE;
use crate::simulation::resources::{Locomotion, Selection, Thermoregulation, ViewerSettings};
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::{EguiContexts, egui};
use reptilesim::readout::{ambient_text, body_text, speed_text};
use reptilesim::species::Species;

const PANEL_TITLE: &str = "Reptile Thermoregulation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelPlacement {
    /// Full-width strip above the canvas; the views shrink to make room.
    Docked,
    /// Window floating over the top-left of the canvas.
    Floating,
}

impl PanelPlacement {
    fn for_width(logical_width: f32, docked_breakpoint: f32) -> Self {
        if logical_width < docked_breakpoint {
            PanelPlacement::Docked
        } else {
            PanelPlacement::Floating
        }
    }
}

pub fn control_panel(
    mut contexts: EguiContexts,
    settings: Res<ViewerSettings>,
    selection: Res<Selection>,
    locomotion: Res<Locomotion>,
    temperature: Res<Thermoregulation>,
    active: Res<ActiveCreature>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut inset: ResMut<PanelInset>,
    mut control_commands: MessageWriter<ControlCommand>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };

    let mut contents = |ui: &mut egui::Ui| {
        render_controls(
            ui,
            &settings,
            &selection,
            &locomotion,
            &temperature,
            &active,
            &mut control_commands,
        )
    };

    let logical_top = match PanelPlacement::for_width(
        window.width(),
        settings.layout.docked_panel_breakpoint,
    ) {
        PanelPlacement::Docked => {
            let panel = egui::TopBottomPanel::top("control_panel")
                .resizable(false)
                .show(ctx, |ui| {
                    ui.heading(PANEL_TITLE);
                    contents(ui);
                });
            panel.response.rect.height()
        }
        PanelPlacement::Floating => {
            egui::Window::new(PANEL_TITLE)
                .default_pos([20.0, 20.0])
                .default_width(350.0)
                .resizable(false)
                .show(ctx, |ui| contents(ui));
            0.0
        }
    };

    inset.set_if_neq(PanelInset { logical_top });
}

fn render_controls(
    ui: &mut egui::Ui,
    settings: &ViewerSettings,
    selection: &Selection,
    locomotion: &Locomotion,
    temperature: &Thermoregulation,
    active: &ActiveCreature,
    control_commands: &mut MessageWriter<ControlCommand>,
) {
    let display_name = |species: Species| settings.species.get(species).display_name.clone();

    ui.horizontal(|ui| {
        ui.label("Species");
        let mut species = selection.species;
        egui::ComboBox::from_id_salt("species")
            .selected_text(display_name(species))
            .show_ui(ui, |ui| {
                for candidate in Species::ALL {
                    ui.selectable_value(&mut species, candidate, display_name(candidate));
                }
            });
        if species != selection.species {
            control_commands.write(ControlCommand::SelectSpecies(species));
        }
    });

    if selection.species.has_limb_toggle() {
        let mut has_limbs = selection.has_limbs;
        if ui.checkbox(&mut has_limbs, "Limbs").changed() {
            control_commands.write(ControlCommand::ToggleLimbs(has_limbs));
        }
    }

    ui.add_space(5.0);
    ui.separator();

    let enabled = locomotion.controls_enabled();
    let mut walking = locomotion.is_walking();
    if ui
        .add_enabled(enabled, egui::Checkbox::new(&mut walking, "Walking"))
        .changed()
    {
        control_commands.write(ControlCommand::ToggleWalk(walking));
    }

    ui.label("Speed (km/h)");
    let mut speed = locomotion.slider_speed();
    if ui
        .add_enabled(
            enabled,
            egui::Slider::new(&mut speed, 0.0..=locomotion.max_speed()).step_by(0.1),
        )
        .changed()
    {
        control_commands.write(ControlCommand::SetSpeed(speed));
    }

    let walkable = active.variant().is_some_and(|variant| variant.supports_locomotion());
    if walkable && !active.has_walk_clip() {
        ui.weak("This model has no walk animation");
    }

    ui.add_space(5.0);
    ui.separator();

    ui.label("Ambient temperature (°C)");
    let mut ambient = temperature.ambient().round() as i32;
    if ui
        .add(egui::Slider::new(&mut ambient, AMBIENT_RANGE))
        .changed()
    {
        control_commands.write(ControlCommand::SetAmbientTemperature(ambient));
    }

    ui.add_space(5.0);
    ui.separator();

    ui.label(speed_text(locomotion.speed_kmh()));
    ui.label(ambient_text(temperature.ambient()));
    ui.label(body_text(temperature.body()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(400.0, PanelPlacement::Docked)]
    #[case(649.9, PanelPlacement::Docked)]
    #[case(650.0, PanelPlacement::Floating)]
    #[case(1500.0, PanelPlacement::Floating)]
    fn test_panel_placement(#[case] width: f32, #[case] expected: PanelPlacement) {
        assert_eq!(PanelPlacement::for_width(width, 650.0), expected);
    }
}
