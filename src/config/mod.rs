//! Configuration module for plugdeploy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PLUGDEPLOY_*)
//! 3. Project config (./plugdeploy.toml)
//! 4. User config (<config dir>/plugdeploy/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{
    ArtifactsConfig, ColorMode, Config, DeployConfig, OrchestratorConfig, OutputConfig,
    PatchConfig, PathsConfig, SourcesConfig,
};
