use crate::error::ConfigError;
use crate::species::Species;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

pub const CONFIG_PATH: &str = "viewer_config.toml";

static CONFIG: OnceLock<Mutex<ViewerConfig>> = OnceLock::new();

/// Get a copy of the current configuration, loading it on first use.
/// Falls back to the built-in defaults when the file is missing or invalid.
pub fn get_config() -> ViewerConfig {
    let config_mutex = CONFIG.get_or_init(|| Mutex::new(load_or_default(CONFIG_PATH)));
    match config_mutex.lock() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

pub fn reload_config() {
    let new_config = load_or_default(CONFIG_PATH);
    let config_mutex = CONFIG.get_or_init(|| Mutex::new(new_config.clone()));
    match config_mutex.lock() {
        Ok(mut config) => *config = new_config,
        Err(poisoned) => *poisoned.into_inner() = new_config,
    }
}

fn load_or_default(path: &str) -> ViewerConfig {
    match ViewerConfig::load_from_file(path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using built-in defaults");
            ViewerConfig::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub simulation: SimulationConfig,
    pub locomotion: LocomotionConfig,
    pub layout: LayoutConfig,
    pub animation: AnimationConfig,
    pub species: SpeciesTable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Upper bound for a single frame's delta, in seconds.
    pub max_frame_delta: f32,
    /// Relaxation rate constant k, per second.
    pub relaxation_rate: f32,
    pub initial_body_temperature: f32,
    pub initial_ambient_temperature: f32,
    pub fallback_base_temperature: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Speed at which the walk clip plays at rate 1.0.
    pub reference_speed: f32,
    pub default_resume_speed: f32,
    pub max_speed: f32,
    pub initial_speed: f32,
    pub walking_at_start: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Surfaces narrower than this (physical px) use the stacked layout.
    pub compact_breakpoint: u32,
    /// Windows narrower than this (logical px) dock the control panel on top.
    pub docked_panel_breakpoint: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub walk_clip_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesConfig {
    pub display_name: String,
    pub asset: String,
    #[serde(default)]
    pub limbless_asset: Option<String>,
    #[serde(default)]
    pub base_temperature: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeciesTable {
    pub gecko: SpeciesConfig,
    pub snake: SpeciesConfig,
}

impl SpeciesTable {
    pub fn get(&self, species: Species) -> &SpeciesConfig {
        match species {
            Species::Gecko => &self.gecko,
            Species::Snake => &self.snake,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_frame_delta: 0.1,
            relaxation_rate: 0.2,
            initial_body_temperature: 25.0,
            initial_ambient_temperature: 20.0,
            fallback_base_temperature: 25.0,
        }
    }
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            reference_speed: 4.0,
            default_resume_speed: 4.0,
            max_speed: 12.0,
            initial_speed: 4.0,
            walking_at_start: true,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            compact_breakpoint: 1024,
            docked_panel_breakpoint: 650.0,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            walk_clip_name: "WALK".to_string(),
        }
    }
}

impl Default for SpeciesTable {
    fn default() -> Self {
        Self {
            gecko: SpeciesConfig {
                display_name: "Gecko".to_string(),
                asset: "models/gecko.glb".to_string(),
                limbless_asset: Some("models/gecko-no-limbs.glb".to_string()),
                base_temperature: None,
            },
            snake: SpeciesConfig {
                display_name: "Snake".to_string(),
                asset: "models/snake.glb".to_string(),
                limbless_asset: None,
                base_temperature: None,
            },
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            locomotion: LocomotionConfig::default(),
            layout: LayoutConfig::default(),
            animation: AnimationConfig::default(),
            species: SpeciesTable::default(),
        }
    }
}

impl ViewerConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resting temperature a species is reset to when its model is swapped in.
    pub fn base_temperature(&self, species: Species) -> f32 {
        self.species
            .get(species)
            .base_temperature
            .unwrap_or(self.simulation.fallback_base_temperature)
    }
}
