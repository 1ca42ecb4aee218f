//! First-order relaxation of body temperature toward a target.

use crate::config::SimulationConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureModel {
    body: f32,
    target: f32,
    ambient: f32,
    /// Rate constant k, per second.
    rate: f32,
}

impl TemperatureModel {
    pub fn new(body: f32, ambient: f32, rate: f32) -> Self {
        Self {
            body,
            target: ambient,
            ambient,
            rate: rate.max(0.0),
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(
            config.initial_body_temperature,
            config.initial_ambient_temperature,
            config.relaxation_rate,
        )
    }

    pub fn body(&self) -> f32 {
        self.body
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn ambient(&self) -> f32 {
        self.ambient
    }

    /// `body += (target - body) * k * dt`. The step factor is capped at 1 so
    /// the body can never overshoot the target, even for a delta the clock
    /// did not clamp.
    pub fn advance(&mut self, delta_seconds: f32) {
        if !(delta_seconds > 0.0) {
            return;
        }
        let factor = (self.rate * delta_seconds).min(1.0);
        self.body += (self.target - self.body) * factor;
    }

    /// Ambient changes move the target instantly; the body follows via `advance`.
    pub fn set_ambient(&mut self, ambient: f32) {
        self.ambient = ambient;
        self.target = ambient;
    }

    /// Called after a model swap: the new creature starts at its species base
    /// temperature and relaxes toward the current ambient temperature.
    pub fn reset_for_swap(&mut self, base_temperature: f32) {
        self.body = base_temperature;
        self.target = self.ambient;
    }
}

impl Default for TemperatureModel {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}
