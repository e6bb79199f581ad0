//! Error types for descriptor loading and validation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for loading an ecosystem descriptor.
///
/// Every variant is fatal to startup: the supervisor must not run with a
/// partial or malformed app list, so there is no recovery path.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed ecosystem source: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("no ecosystem file found (searched: {searched:?})")]
    NotFound { searched: Vec<String> },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Error type for structural violations in a parsed app list
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("app at index {index} has an empty name")]
    EmptyName { index: usize },
    #[error("app '{name}' is missing a script")]
    MissingScript { name: String },
    #[error("app '{name}' must run at least one instance")]
    ZeroInstances { name: String },
    #[error("duplicate name: {name}")]
    DuplicateName { name: String },
}
