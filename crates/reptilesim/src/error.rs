use std::path::PathBuf;

/// Errors raised while reading `viewer_config.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Non-fatal model load outcomes. Neither variant ever replaces the
/// currently displayed model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("failed to load model asset {path}: {reason}")]
    AssetLoadFailure { path: String, reason: String },

    #[error("load generation {generation} was superseded by generation {current}")]
    Stale { generation: u64, current: u64 },
}
