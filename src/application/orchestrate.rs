//! Orchestrator Use Case
//!
//! Runs the external build orchestrator from its own folder with the fixed
//! `-d <build_dir>` flag in front of whatever arguments the caller passes.

use std::path::{Path, PathBuf};

use crate::domain::ports::{FileSystem, ProcessRunner, ProcessSpec};
use crate::domain::services::{discover_projects, resolve_project};
use crate::domain::value_objects::UnitName;
use crate::error::{DeployError, DeployResult};

/// Exit code used when the child ended without one (killed by a signal)
const SIGNALLED_EXIT_CODE: i32 = 1;

pub struct OrchestratorUseCase<FS, PR>
where
    FS: FileSystem,
    PR: ProcessRunner,
{
    file_system: FS,
    runner: PR,
    executable: PathBuf,
    build_dir: String,
}

impl<FS, PR> OrchestratorUseCase<FS, PR>
where
    FS: FileSystem,
    PR: ProcessRunner,
{
    pub fn new(
        file_system: FS,
        runner: PR,
        executable: impl Into<PathBuf>,
        build_dir: impl Into<String>,
    ) -> Self {
        Self {
            file_system,
            runner,
            executable: executable.into(),
            build_dir: build_dir.into(),
        }
    }

    /// The command line `exec` would run, after checking the executable exists
    pub fn command<I, S>(&self, args: I) -> DeployResult<ProcessSpec>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !self.file_system.is_file(&self.executable) {
            return Err(DeployError::ExecutableNotFound {
                path: self.executable.clone(),
            });
        }

        let cwd = match self.executable.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(ProcessSpec::new(&self.executable, cwd)
            .arg("-d")
            .arg(self.build_dir.as_str())
            .args(args))
    }

    /// Run the orchestrator with forwarded arguments; returns its exit code
    pub fn exec<I, S>(&self, args: I) -> DeployResult<i32>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let spec = self.command(args)?;
        self.run(&spec)
    }

    /// Projects `build` would pass on; explicit names must be folders under `root`
    pub fn build_targets(&self, root: &Path, names: &[String]) -> DeployResult<Vec<UnitName>> {
        if names.is_empty() {
            return discover_projects(&self.file_system, root);
        }
        names
            .iter()
            .map(|raw| resolve_project(&self.file_system, root, raw))
            .collect()
    }

    /// Validate project names under `root`, then run `build <names>`
    pub fn build(&self, root: &Path, names: &[String]) -> DeployResult<i32> {
        let spec = self.build_command(root, names)?;
        self.run(&spec)
    }

    pub fn build_command(&self, root: &Path, names: &[String]) -> DeployResult<ProcessSpec> {
        let targets = self.build_targets(root, names)?;
        let args =
            std::iter::once("build".to_string()).chain(targets.iter().map(|n| n.to_string()));
        self.command(args)
    }

    /// Run a prepared command line; a child killed by a signal counts as exit code 1
    pub fn run(&self, spec: &ProcessSpec) -> DeployResult<i32> {
        tracing::info!(command = %spec, cwd = %spec.cwd.display(), "running orchestrator");
        let code = self.runner.run(spec)?;
        tracing::debug!(?code, "orchestrator finished");
        Ok(code.unwrap_or(SIGNALLED_EXIT_CODE))
    }
}
