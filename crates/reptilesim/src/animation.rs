use crate::locomotion::LocomotionState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// No clip is bound, e.g. right after a model swap.
    #[default]
    Unbound,
    Stopped,
    Playing,
}

/// What the host animation player has to do after a locomotion change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DriverCommand {
    /// Start or resume the clip from its current pose.
    Play { rate: f32 },
    /// Change the playback rate without restarting.
    SetRate { rate: f32 },
    /// Hold the current pose.
    Pause,
}

/// Maps walk/speed state onto a single clip's play state and playback rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDriver {
    state: PlaybackState,
    rate: f32,
    reference_speed: f32,
}

impl AnimationDriver {
    pub fn new(reference_speed: f32) -> Self {
        Self {
            state: PlaybackState::Unbound,
            rate: 0.0,
            reference_speed,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn is_bound(&self) -> bool {
        self.state != PlaybackState::Unbound
    }

    /// Playback rate for a speed: 1.0 at the reference walking speed.
    pub fn rate_for_speed(&self, speed_kmh: f32) -> f32 {
        if self.reference_speed <= 0.0 {
            return 0.0;
        }
        speed_kmh / self.reference_speed
    }

    /// A freshly loaded clip starts out stopped; the next `sync` decides
    /// whether it plays.
    pub fn bind(&mut self) {
        self.state = PlaybackState::Stopped;
        self.rate = 0.0;
    }

    /// The previous clip is gone once its model has been released.
    pub fn unbind(&mut self) {
        self.state = PlaybackState::Unbound;
        self.rate = 0.0;
    }

    pub fn sync(&mut self, locomotion: &LocomotionState) -> Option<DriverCommand> {
        let desired = self.rate_for_speed(locomotion.speed_kmh());
        match (self.state, locomotion.is_walking()) {
            (PlaybackState::Unbound, _) => None,
            (PlaybackState::Stopped, true) => {
                self.state = PlaybackState::Playing;
                self.rate = desired;
                Some(DriverCommand::Play { rate: desired })
            }
            (PlaybackState::Playing, true) if self.rate != desired => {
                self.rate = desired;
                Some(DriverCommand::SetRate { rate: desired })
            }
            (PlaybackState::Playing, true) => None,
            (PlaybackState::Playing, false) => {
                self.state = PlaybackState::Stopped;
                Some(DriverCommand::Pause)
            }
            (PlaybackState::Stopped, false) => None,
        }
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(4.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn playing_driver(locomotion: &LocomotionState) -> AnimationDriver {
        let mut driver = AnimationDriver::default();
        driver.bind();
        driver.sync(locomotion);
        driver
    }

    #[rstest]
    #[case(8.0, 2.0)]
    #[case(4.0, 1.0)]
    #[case(2.0, 0.5)]
    #[case(0.0, 0.0)]
    fn test_speed_sets_rate(#[case] speed: f32, #[case] expected: f32) {
        let mut locomotion = LocomotionState::default();
        let mut driver = playing_driver(&locomotion);

        locomotion.set_speed(speed);
        let command = driver.sync(&locomotion);

        assert_eq!(driver.rate(), expected);
        assert_eq!(driver.state(), PlaybackState::Playing);
        if speed == 4.0 {
            assert_eq!(command, None);
        } else {
            assert_eq!(command, Some(DriverCommand::SetRate { rate: expected }));
        }
    }

    #[test]
    fn test_zero_speed_holds_pose_instead_of_stopping() {
        let mut locomotion = LocomotionState::default();
        let mut driver = playing_driver(&locomotion);

        locomotion.set_speed(0.0);
        driver.sync(&locomotion);

        assert!(locomotion.is_walking());
        assert_eq!(driver.state(), PlaybackState::Playing);
        assert_eq!(driver.rate(), 0.0);
    }

    #[test]
    fn test_bind_plays_when_walking() {
        let locomotion = LocomotionState::default();
        let mut driver = AnimationDriver::default();
        driver.bind();

        assert_eq!(driver.sync(&locomotion), Some(DriverCommand::Play { rate: 1.0 }));
        assert_eq!(driver.sync(&locomotion), None);
    }

    #[test]
    fn test_toggle_pauses_and_resumes() {
        let mut locomotion = LocomotionState::default();
        let mut driver = playing_driver(&locomotion);

        locomotion.set_walking(false);
        assert_eq!(driver.sync(&locomotion), Some(DriverCommand::Pause));
        assert_eq!(driver.state(), PlaybackState::Stopped);
        assert_eq!(driver.sync(&locomotion), None);

        locomotion.set_walking(true);
        assert_eq!(driver.sync(&locomotion), Some(DriverCommand::Play { rate: 1.0 }));
    }

    #[test]
    fn test_unbound_driver_is_inert() {
        let locomotion = LocomotionState::default();
        let mut driver = AnimationDriver::default();

        assert_eq!(driver.sync(&locomotion), None);

        let mut driver = playing_driver(&locomotion);
        driver.unbind();
        assert_eq!(driver.sync(&locomotion), None);
        assert!(!driver.is_bound());
    }
}
