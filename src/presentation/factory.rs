//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{
    ArtifactDeployUseCase, ConfigPatchUseCase, OrchestratorUseCase, SourceDeployUseCase,
    StatusUseCase,
};
use crate::config::Config;
use crate::infrastructure::{LocalFs, LocalProcessRunner};

/// Type alias for the concrete OrchestratorUseCase with all dependencies
pub type ConcreteOrchestratorUseCase = OrchestratorUseCase<LocalFs, LocalProcessRunner>;

/// Create a source deploy use case rooted at `project_root`
pub fn create_deploy_use_case(
    config: &Config,
    project_root: &Path,
) -> SourceDeployUseCase<LocalFs> {
    SourceDeployUseCase::new(LocalFs::new(), config.source_layout(project_root))
}

pub fn create_artifact_use_case(
    config: &Config,
    project_root: &Path,
) -> ArtifactDeployUseCase<LocalFs> {
    ArtifactDeployUseCase::new(LocalFs::new(), config.artifact_layout(project_root))
}

pub fn create_status_use_case(config: &Config, project_root: &Path) -> StatusUseCase<LocalFs> {
    StatusUseCase::new(LocalFs::new(), config.source_layout(project_root))
}

/// Create an orchestrator use case that spawns real processes
pub fn create_orchestrator_use_case(
    config: &Config,
    project_root: &Path,
) -> ConcreteOrchestratorUseCase {
    OrchestratorUseCase::new(
        LocalFs::new(),
        LocalProcessRunner::new(),
        config.orchestrator_path(project_root),
        config.orchestrator.build_dir.clone(),
    )
}

pub fn create_patch_use_case(config: &Config) -> ConfigPatchUseCase<LocalFs> {
    ConfigPatchUseCase::new(LocalFs::new(), config.patch.placeholder.clone())
}
