use std::path::PathBuf;

/// Errors raised while listing or loading category files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Category file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid category name: {0:?}")]
    InvalidCategory(String),

    #[error("Category file {0} is empty")]
    Empty(String),

    #[error("Category file {0} has no valid lines")]
    NoValidRecords(String),

    #[error("Error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while resolving a page address.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RouteError {
    #[error("Unknown learning type: {0}")]
    UnknownMode(String),

    #[error("Malformed route: {0}")]
    Malformed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Delimiter must not be empty")]
    EmptyDelimiter,
}
