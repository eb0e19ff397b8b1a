use std::path::PathBuf;

use thiserror::Error;

use crate::ui::state::Icon;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("icon {icon:?} appears {count} times, expected exactly 2")]
    UnpairedIcon { icon: Icon, count: usize },
}
