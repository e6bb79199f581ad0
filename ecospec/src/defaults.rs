//! Default descriptor values loaded from ecospec.defaults.toml.
//!
//! This module loads defaults from the shared TOML file at compile time,
//! so the file is the single source of default truth for every consumer.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../ecospec.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("ecospec.defaults.toml should be valid TOML")
});

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    app: AppDefaults,
}

#[derive(Debug, Deserialize)]
struct AppDefaults {
    autorestart: bool,
    instances: u32,
}

/// Whether the supervisor restarts an app that exits, unless overridden.
pub fn autorestart() -> bool {
    DEFAULTS.app.autorestart
}

/// Number of instances launched per app, unless overridden.
pub fn instances() -> u32 {
    DEFAULTS.app.instances
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        // Just accessing these will verify the TOML parses correctly
        assert!(autorestart());
        assert_eq!(instances(), 1);
    }
}
