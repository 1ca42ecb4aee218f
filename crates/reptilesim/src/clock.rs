/// Turns raw frame times into the clamped delta fed to the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    max_delta: f32,
}

impl SimulationClock {
    pub fn new(max_delta: f32) -> Self {
        Self {
            max_delta: max_delta.max(0.0),
        }
    }

    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }

    /// Clamps a raw delta into `[0, max_delta]`. Negative or non-finite
    /// input (clock hiccups) yields zero.
    pub fn clamp(&self, raw_seconds: f32) -> f32 {
        if !raw_seconds.is_finite() || raw_seconds <= 0.0 {
            return 0.0;
        }
        raw_seconds.min(self.max_delta)
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(0.1)
    }
}
