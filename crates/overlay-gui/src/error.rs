use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the overlay
///
/// Rendering and input dispatch never fail: a missing capability skips the
/// affected draw, degenerate geometry is simply never hovered. Errors only
/// come out of configuration and fallible tree construction.
#[derive(Debug, Error)]
pub enum HudError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("element kind `{0}` cannot hold children")]
    NotAContainer(&'static str),
}

pub type HudResult<T> = Result<T, HudError>;
