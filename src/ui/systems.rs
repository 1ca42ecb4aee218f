use crate::loading::ReadoutAssets;
use crate::simulation::resources::{Locomotion, Thermoregulation};
use crate::ui::bundles::{CornerColumnBundle, LabelBundle};
use crate::ui::components::{Readout, ReadoutPanel};
use bevy::prelude::*;
use reptilesim::readout::{ambient_text, body_text, speed_text};

pub fn spawn_readouts(mut commands: Commands, assets: Option<Res<ReadoutAssets>>) {
    let font = match assets {
        Some(assets) => assets.font.clone(),
        None => {
            warn!("Readout font unavailable, using the default font");
            Handle::default()
        }
    };

    commands
        .spawn((
            CornerColumnBundle::bottom_left(12.0),
            ReadoutPanel,
            Name::new("readouts"),
        ))
        .with_children(|parent| {
            for readout in Readout::ALL {
                parent.spawn((
                    LabelBundle::new("", 16.0, Color::srgb(0.15, 0.15, 0.15))
                        .with_font(font.clone()),
                    readout,
                ));
            }
        });
}

pub fn update_readouts(
    locomotion: Res<Locomotion>,
    temperature: Res<Thermoregulation>,
    mut texts: Query<(&Readout, &mut Text)>,
) {
    for (readout, mut text) in &mut texts {
        let value = match readout {
            Readout::Speed => speed_text(locomotion.speed_kmh()),
            Readout::Ambient => ambient_text(temperature.ambient()),
            Readout::Body => body_text(temperature.body()),
        };
        if text.0 != value {
            text.0 = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reptilesim::locomotion::LocomotionState;
    use reptilesim::temperature::TemperatureModel;

    #[test]
    fn test_readouts_follow_state() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(Locomotion(LocomotionState::default()))
            .insert_resource(Thermoregulation(TemperatureModel::new(25.0, 20.0, 0.2)))
            .add_systems(Update, update_readouts);
        let speed = app.world_mut().spawn((Text::new(""), Readout::Speed)).id();
        let ambient = app.world_mut().spawn((Text::new(""), Readout::Ambient)).id();
        let body = app.world_mut().spawn((Text::new(""), Readout::Body)).id();

        app.update();

        let text = |entity: Entity| app.world().get::<Text>(entity).unwrap().0.clone();
        assert_eq!(text(speed), "Speed: 4.0 km/h");
        assert_eq!(text(ambient), "Ambient temperature: 20.0°C");
        assert_eq!(text(body), "Body temperature: 25.0°C");

        app.world_mut()
            .resource_mut::<Locomotion>()
            .set_walking(false);
        app.update();
        assert_eq!(
            app.world().get::<Text>(speed).unwrap().0,
            "Speed: 0.0 km/h"
        );
    }
}
