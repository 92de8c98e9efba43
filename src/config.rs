//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rsbst/rsbst.toml`
//! 3. Local config: `./.rsbst.toml` (current working directory)
//! 4. Environment variables: `RSBST_*` prefix (`__` separates nesting,
//!    e.g. `RSBST_DEMO__COUNT=20`)

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// How a tree is drawn on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Sideways connector diagram, root at the bottom left
    #[default]
    Diagram,
    /// Top-down outline, one branch per line
    Outline,
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::Diagram => f.write_str("diagram"),
            RenderStyle::Outline => f.write_str("outline"),
        }
    }
}

/// Parameters for the demo run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DemoSettings {
    /// Number of random values seeding the initial tree
    pub count: usize,
    /// Inclusive upper bound for seed values (lower bound is 1)
    pub max_value: u64,
    /// Number of values above `max_value` inserted to unbalance the tree
    pub extra_count: usize,
    /// RNG seed for reproducible runs (random when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            count: 15,
            max_value: 100,
            extra_count: 5,
            seed: None,
        }
    }
}

/// Unified configuration for rsbst.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Default rendering style for trees
    pub style: RenderStyle,
    /// Demo parameters
    pub demo: DemoSettings,
}

/// Get the XDG config directory for rsbst.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rsbst").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rsbst.toml"))
}

/// Get the path to the local config file in the given directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".rsbst.toml")
}

impl Settings {
    /// Load settings with layered precedence, reading the local config
    /// from the current working directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Directory holding the local `.rsbst.toml`
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/rsbst/rsbst.toml`
    /// 3. Local config: `<local_dir>/.rsbst.toml`
    /// 4. Environment variables: `RSBST_*` prefix
    pub fn load_from(local_dir: &Path) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        let local_path = local_config_path(local_dir);
        if local_path.exists() {
            builder = builder.add_source(File::from(local_path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("RSBST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Message(e.to_string()))
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# rsbst configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/rsbst/rsbst.toml
#   Local:  ./.rsbst.toml
#   Env:    RSBST_* environment variables (RSBST_STYLE, RSBST_DEMO__COUNT, ...)

# Rendering style for trees: "diagram" (sideways) or "outline" (top-down)
# style = "diagram"

[demo]
# How many random values seed the demo tree
# count = 15

# Inclusive upper bound for the seed values; extras are drawn above it
# max_value = 100

# How many larger values get inserted to unbalance the tree
# extra_count = 5

# Fix the RNG seed for reproducible runs
# seed = 42
"#
        .to_string()
    }
}
