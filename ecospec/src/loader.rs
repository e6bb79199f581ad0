//! Descriptor loading logic.
//!
//! Handles locating the ecosystem file, parsing it, and validating the
//! resulting app list. Any failure is returned to the caller; a partial
//! or defaulted app list is never produced.

use crate::error::ConfigError;
use crate::structs::Ecosystem;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Standard locations to search for ecosystem.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "ecosystem.toml",             // Current directory
    "../ecosystem.toml",          // Parent directory (when running from a subdirectory)
    "/etc/ecospec/ecosystem.toml", // System-wide install
];

/// Load the ecosystem descriptor.
///
/// Searches for ecosystem.toml in the following order:
/// 1. Path specified by the ECOSPEC_CONFIG environment variable
/// 2. Current directory (ecosystem.toml)
/// 3. Parent directory (../ecosystem.toml)
/// 4. System-wide path (/etc/ecospec/ecosystem.toml)
///
/// An ECOSPEC_CONFIG path that cannot be read is an error, not a fallback:
/// an explicit operator choice must not be silently ignored. If no file is
/// found anywhere, the searched locations are reported in the error.
pub fn load_config() -> Result<Ecosystem, ConfigError> {
    if let Ok(path) = std::env::var("ECOSPEC_CONFIG") {
        let path = PathBuf::from(&path);
        info!("loading ecosystem from ECOSPEC_CONFIG: {}", path.display());
        return load_from_path(&path);
    }

    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("loading ecosystem from {}", path.display());
            return load_from_path(path);
        }
        debug!("no ecosystem file at {}", path.display());
    }

    Err(ConfigError::NotFound {
        searched: CONFIG_SEARCH_PATHS.iter().map(|s| s.to_string()).collect(),
    })
}

/// Load the descriptor from a specific path.
pub fn load_from_path(path: &Path) -> Result<Ecosystem, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&content)
}

/// Parse and validate an in-memory descriptor source.
///
/// Loading is a pure function of the source content: the same input
/// always yields a structurally identical app list.
pub fn load_from_str(content: &str) -> Result<Ecosystem, ConfigError> {
    let ecosystem: Ecosystem = toml::from_str(content)?;
    ecosystem.validate()?;
    Ok(ecosystem)
}
