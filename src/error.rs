use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FreezeError {
    #[error("Not inside a git repository ({path}): {source}")]
    RepoRoot {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("Repository at {0} is bare and has no working tree")]
    BareRepository(PathBuf),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, FreezeError>;
