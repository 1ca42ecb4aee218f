use crate::config::LocomotionConfig;

/// Walk toggle and speed as chosen on the control surface.
///
/// `speed_kmh` is always 0 while not walking. `last_non_zero_speed` keeps the
/// most recent positive speed so walking resumes where it left off.
/// `slider_speed` is where the speed slider rests; it may sit at 0 while
/// standing without touching the resume memory.
#[derive(Debug, Clone, PartialEq)]
pub struct LocomotionState {
    is_walking: bool,
    speed_kmh: f32,
    last_non_zero_speed: f32,
    slider_speed: f32,
    locked: bool,
    default_resume_speed: f32,
    max_speed: f32,
}

impl LocomotionState {
    pub fn new(config: &LocomotionConfig) -> Self {
        let initial_speed = config.initial_speed.clamp(0.0, config.max_speed);
        Self {
            is_walking: config.walking_at_start,
            speed_kmh: if config.walking_at_start { initial_speed } else { 0.0 },
            last_non_zero_speed: initial_speed,
            slider_speed: initial_speed,
            locked: false,
            default_resume_speed: config.default_resume_speed,
            max_speed: config.max_speed,
        }
    }

    pub fn is_walking(&self) -> bool {
        self.is_walking
    }

    pub fn speed_kmh(&self) -> f32 {
        self.speed_kmh
    }

    pub fn last_non_zero_speed(&self) -> f32 {
        self.last_non_zero_speed
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Value the speed slider shows: the last speed picked on it, or the
    /// speed walking resumed at.
    pub fn slider_speed(&self) -> f32 {
        self.slider_speed
    }

    /// Whether the speed slider and walk toggle accept input.
    pub fn controls_enabled(&self) -> bool {
        !self.locked
    }

    pub fn set_walking(&mut self, walking: bool) {
        if self.locked {
            return;
        }
        if walking {
            if self.speed_kmh == 0.0 {
                self.speed_kmh = if self.last_non_zero_speed > 0.0 {
                    self.last_non_zero_speed
                } else {
                    self.default_resume_speed
                };
            }
            self.last_non_zero_speed = self.speed_kmh;
            self.slider_speed = self.speed_kmh;
        } else {
            if self.speed_kmh > 0.0 {
                self.last_non_zero_speed = self.speed_kmh;
            }
            self.speed_kmh = 0.0;
        }
        self.is_walking = walking;
    }

    /// Speed input from the slider. While standing still the value is only
    /// remembered for the next resume.
    pub fn set_speed(&mut self, speed_kmh: f32) {
        if self.locked || !speed_kmh.is_finite() {
            return;
        }
        let speed = speed_kmh.clamp(0.0, self.max_speed);
        self.slider_speed = speed;
        if self.is_walking {
            self.speed_kmh = speed;
        }
        if speed > 0.0 {
            self.last_non_zero_speed = speed;
        }
    }

    /// Forces the creature to stand still and disables speed/walk input.
    pub fn lock(&mut self) {
        if self.speed_kmh > 0.0 {
            self.last_non_zero_speed = self.speed_kmh;
        }
        self.is_walking = false;
        self.speed_kmh = 0.0;
        self.locked = true;
    }

    /// Re-enables input. Walking stays off until toggled back on.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    #[cfg(test)]
    pub(crate) fn with_last_non_zero_speed(mut self, speed: f32) -> Self {
        self.last_non_zero_speed = speed.clamp(0.0, self.max_speed);
        self
    }
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self::new(&LocomotionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn standing(last_speed: f32) -> LocomotionState {
        let mut state = LocomotionState::default();
        state.set_walking(false);
        state.with_last_non_zero_speed(last_speed)
    }

    #[test]
    fn test_defaults() {
        let state = LocomotionState::default();
        assert!(state.is_walking());
        assert_eq!(state.speed_kmh(), 4.0);
        assert!(state.controls_enabled());
    }

    #[rstest]
    #[case(6.0, 6.0)] // resumes at the previous speed
    #[case(0.0, 4.0)] // nothing remembered: default walk speed
    #[case(12.0, 12.0)]
    fn test_walk_toggle_resume(#[case] last_speed: f32, #[case] expected: f32) {
        let mut state = standing(last_speed);
        assert_eq!(state.speed_kmh(), 0.0);

        state.set_walking(true);

        assert!(state.is_walking());
        assert_eq!(state.speed_kmh(), expected);
        assert_eq!(state.last_non_zero_speed(), expected);
    }

    #[test]
    fn test_stopping_zeroes_speed_and_remembers_it() {
        let mut state = LocomotionState::default();
        state.set_speed(7.5);
        state.set_walking(false);

        assert_eq!(state.speed_kmh(), 0.0);
        assert_eq!(state.last_non_zero_speed(), 7.5);
    }

    #[test]
    fn test_stopping_at_zero_keeps_previous_memory() {
        let mut state = LocomotionState::default();
        state.set_speed(6.0);
        state.set_speed(0.0);
        state.set_walking(false);
        state.set_walking(true);

        assert_eq!(state.speed_kmh(), 6.0);
    }

    #[rstest]
    #[case(8.0, 8.0)]
    #[case(0.0, 0.0)]
    #[case(15.0, 12.0)]
    #[case(-3.0, 0.0)]
    fn test_set_speed_while_walking(#[case] input: f32, #[case] expected: f32) {
        let mut state = LocomotionState::default();
        state.set_speed(input);
        assert!(state.is_walking());
        assert_eq!(state.speed_kmh(), expected);
    }

    #[test]
    fn test_set_speed_while_standing_is_remembered() {
        let mut state = standing(4.0);
        state.set_speed(9.0);
        assert_eq!(state.speed_kmh(), 0.0);
        assert_eq!(state.slider_speed(), 9.0);

        state.set_walking(true);
        assert_eq!(state.speed_kmh(), 9.0);
    }

    #[test]
    fn test_slider_rests_at_zero_while_standing() {
        let mut state = LocomotionState::default();
        state.set_walking(false);
        state.set_speed(0.0);

        assert_eq!(state.slider_speed(), 0.0);
        assert_eq!(state.last_non_zero_speed(), 4.0);

        state.set_walking(true);
        assert_eq!(state.speed_kmh(), 4.0);
        assert_eq!(state.slider_speed(), 4.0);
    }

    #[test]
    fn test_lock_forces_stop_and_ignores_input() {
        let mut state = LocomotionState::default();
        state.lock();

        assert!(!state.is_walking());
        assert_eq!(state.speed_kmh(), 0.0);
        assert!(!state.controls_enabled());

        state.set_walking(true);
        state.set_speed(10.0);
        assert!(!state.is_walking());
        assert_eq!(state.speed_kmh(), 0.0);

        state.unlock();
        assert!(state.controls_enabled());
        assert!(!state.is_walking());
        state.set_walking(true);
        assert_eq!(state.speed_kmh(), 4.0);
    }
}
