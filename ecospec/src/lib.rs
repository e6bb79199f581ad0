//! Process supervision descriptors loaded from ecosystem.toml.
//!
//! This crate provides the descriptor structs and loading logic consumed
//! by the external supervisor daemon: an ordered list of apps, each with
//! a launch command, restart policy, and log/pid paths.
//!
//! # Resolution Order
//!
//! The ecosystem file is located with the following priority (highest to
//! lowest):
//! 1. Path named by the `ECOSPEC_CONFIG` environment variable
//! 2. Standard search locations (see [`CONFIG_SEARCH_PATHS`])
//!
//! Loading is fatal on failure: a malformed or structurally invalid
//! descriptor returns an error instead of a partial app list, since a
//! supervisor cannot safely run with an incomplete descriptor.
//!
//! # Example
//!
//! ```text
//! [[apps]]
//! name = "main-server"
//! cwd = "/home/deploy/main_server"
//! script = "java"
//! args = ["-Xmx512m", "-jar", "build/libs/main-server.jar"]
//! max_memory_restart = "600M"
//!
//! [apps.env]
//! SPRING_PROFILES_ACTIVE = "prod"
//! ```

mod defaults;
mod error;
mod loader;
mod memory;
mod structs;

pub use defaults::*;
pub use error::{ConfigError, ValidationError};
pub use loader::{load_config, load_from_path, load_from_str, CONFIG_SEARCH_PATHS};
pub use memory::{MemoryThreshold, ParseMemoryError};
pub use structs::{Ecosystem, ProcessSpec};
