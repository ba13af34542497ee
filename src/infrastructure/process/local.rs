//! Local process runner
//!
//! Spawns the child with inherited stdio and waits for it.

use std::process::{Command, Stdio};

use crate::domain::ports::{ProcessRunner, ProcessSpec};
use crate::error::{DeployError, DeployResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProcessRunner;

impl LocalProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for LocalProcessRunner {
    fn run(&self, spec: &ProcessSpec) -> DeployResult<Option<i32>> {
        tracing::debug!(command = %spec, cwd = %spec.cwd.display(), "spawning process");

        let status = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&spec.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| DeployError::Spawn {
                program: spec.program.clone(),
                source,
            })?;

        tracing::debug!(code = ?status.code(), "process exited");
        Ok(status.code())
    }
}
