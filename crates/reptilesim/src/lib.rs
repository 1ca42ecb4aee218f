pub mod animation;
pub mod clock;
pub mod config;
pub mod error;
pub mod layout;
pub mod loader;
pub mod locomotion;
pub mod readout;
pub mod rig;
pub mod species;
pub mod temperature;

pub use config::{get_config, reload_config};
