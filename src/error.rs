use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Options nested too deep under '{prefix}' (depth {depth})")]
    DataDepth { prefix: String, depth: usize },

    #[error("Unable to read config file {}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Invalid content in config file {}: {reason}", .path.display())]
    FileContent { path: PathBuf, reason: String },

    #[error("No reader registered for config file {}", .0.display())]
    FileExtension(PathBuf),

    #[error("Support for {format} config files is not available: {reason}")]
    MissingSupport { format: String, reason: String },

    #[error("Options source is not a mapping: {0}")]
    InvalidOptions(String),

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}
