//! Command handlers
//!
//! Each handler returns the process exit code; errors bubble up to `main`.

pub mod artifacts;
pub mod build;
pub mod deploy;
pub mod exec;
pub mod patch;
pub mod status;

use std::path::PathBuf;

use plugdeploy::config::Config;

use crate::ui::context::UiContext;

/// Everything a command needs from the invocation
pub struct CommandContext {
    pub config: Config,
    /// Directory the tool was started from; relative config paths resolve here
    pub project_root: PathBuf,
    pub ui: UiContext,
}
