//! Descriptor struct definitions.
//!
//! All descriptor structs with serde deserialization support and default
//! values. Field names are the interface contract with the external
//! supervisor; unknown fields are rejected at parse time.

use crate::defaults;
use crate::error::ValidationError;
use crate::memory::MemoryThreshold;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from the defaults module

fn d_autorestart() -> bool {
    defaults::autorestart()
}
fn d_instances() -> u32 {
    defaults::instances()
}

/// Root descriptor structure matching ecosystem.toml
///
/// Constructed once at load time and read-only thereafter; consumers
/// receive it by value or shared reference, never through a global.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Ecosystem {
    /// Ordered list of apps the supervisor manages
    #[serde(default)]
    pub apps: Vec<ProcessSpec>,
}

/// Launch and supervision parameters for a single app
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProcessSpec {
    /// Unique app identifier within the list
    #[serde(default)]
    pub name: String,
    /// Working directory the app is launched from
    #[serde(default)]
    pub cwd: Option<String>,
    /// Executable to launch
    #[serde(default)]
    pub script: String,
    /// Arguments passed to the executable, in order
    #[serde(default)]
    pub args: Vec<String>,
    /// Environment variables set for the app, on top of the supervisor's
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    /// Whether the supervisor restarts the app when it exits
    #[serde(default = "d_autorestart")]
    pub autorestart: bool,
    /// Number of instances to launch
    #[serde(default = "d_instances")]
    pub instances: u32,
    /// Resident-memory threshold that triggers a forced restart
    #[serde(default)]
    pub max_memory_restart: Option<MemoryThreshold>,
    /// Pid file path (None = supervisor default)
    #[serde(default)]
    pub pid_file: Option<String>,
    /// Stdout log path (None = supervisor default)
    #[serde(default)]
    pub out_file: Option<String>,
    /// Stderr log path (None = supervisor default)
    #[serde(default)]
    pub error_file: Option<String>,
}

impl Default for ProcessSpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            cwd: None,
            script: String::new(),
            args: Vec::new(),
            env: BTreeMap::new(),
            autorestart: defaults::autorestart(),
            instances: defaults::instances(),
            max_memory_restart: None,
            pid_file: None,
            out_file: None,
            error_file: None,
        }
    }
}

impl Ecosystem {
    /// Check the structural invariants of the app list.
    ///
    /// Paths are treated as opaque strings; no filesystem access happens
    /// here. The first violation is returned.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.apps.len());
        for (index, app) in self.apps.iter().enumerate() {
            if app.name.is_empty() {
                return Err(ValidationError::EmptyName { index });
            }
            if app.script.is_empty() {
                return Err(ValidationError::MissingScript {
                    name: app.name.clone(),
                });
            }
            if app.instances == 0 {
                return Err(ValidationError::ZeroInstances {
                    name: app.name.clone(),
                });
            }
            if !seen.insert(app.name.as_str()) {
                return Err(ValidationError::DuplicateName {
                    name: app.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Look up an app by name.
    pub fn app(&self, name: &str) -> Option<&ProcessSpec> {
        self.apps.iter().find(|app| app.name == name)
    }
}

impl ProcessSpec {
    /// The full launch command as a single display string.
    pub fn command_line(&self) -> String {
        let mut parts = Vec::with_capacity(1 + self.args.len());
        parts.push(self.script.as_str());
        parts.extend(self.args.iter().map(String::as_str));
        parts.join(" ")
    }
}
