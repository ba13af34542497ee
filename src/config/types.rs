//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ArtifactLayout, SourceLayout};
use crate::error::DeployResult;

use super::loader::{self, LoadedConfig};

/// Filesystem roots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Installation directory of the host application's plugins
    #[serde(default = "default_destination")]
    pub destination: PathBuf,

    /// Python plugin sources, relative to the project root
    #[serde(default = "default_source_root")]
    pub source_root: PathBuf,

    /// Compiled plugin projects, relative to the project root
    #[serde(default = "default_artifact_root")]
    pub artifact_root: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            destination: default_destination(),
            source_root: default_source_root(),
            artifact_root: default_artifact_root(),
        }
    }
}

fn default_destination() -> PathBuf {
    PathBuf::from(r"C:\Modding\MO2\plugins")
}

fn default_source_root() -> PathBuf {
    PathBuf::from("python_examples")
}

fn default_artifact_root() -> PathBuf {
    PathBuf::from("cpp_examples")
}

/// Source unit settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_source_extension")]
    pub extension: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            extension: default_source_extension(),
        }
    }
}

fn default_source_extension() -> String {
    "py".to_string()
}

/// Compiled artifact settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    /// Build output folder inside each plugin project
    #[serde(default = "default_artifact_subdir")]
    pub subdir: PathBuf,

    #[serde(default = "default_primary_extension")]
    pub primary_extension: String,

    /// Debug symbols, deployed only when present
    #[serde(default = "default_companion_extension")]
    pub companion_extension: String,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            subdir: default_artifact_subdir(),
            primary_extension: default_primary_extension(),
            companion_extension: default_companion_extension(),
        }
    }
}

fn default_artifact_subdir() -> PathBuf {
    PathBuf::from("vsbuild/src/RelWithDebInfo")
}

fn default_primary_extension() -> String {
    "dll".to_string()
}

fn default_companion_extension() -> String {
    "pdb".to_string()
}

/// External build orchestrator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    #[serde(default = "default_executable")]
    pub executable: PathBuf,

    /// Passed as `-d <build_dir>`, relative to the executable's folder
    #[serde(default = "default_build_dir")]
    pub build_dir: String,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            build_dir: default_build_dir(),
        }
    }
}

fn default_executable() -> PathBuf {
    PathBuf::from("mob/mob.exe")
}

fn default_build_dir() -> String {
    "../build".to_string()
}

/// IDE config patching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchConfig {
    #[serde(default = "default_patch_file")]
    pub file: PathBuf,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            file: default_patch_file(),
            placeholder: default_placeholder(),
        }
    }
}

fn default_patch_file() -> PathBuf {
    PathBuf::from(".clangd")
}

fn default_placeholder() -> String {
    "build/build".to_string()
}

/// Deploy behaviour
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeployConfig {
    /// Stop a bulk run at the first failing unit
    #[serde(default)]
    pub fail_fast: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub artifacts: ArtifactsConfig,

    #[serde(default)]
    pub orchestrator: OrchestratorConfig,

    #[serde(default)]
    pub patch: PatchConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load the explicit file, else project config, else user config, else defaults
    pub fn discover(project_root: &Path, explicit: Option<&Path>) -> DeployResult<LoadedConfig> {
        loader::discover(project_root, explicit)
    }

    /// Source layout with relative roots resolved against `project_root`
    pub fn source_layout(&self, project_root: &Path) -> SourceLayout {
        SourceLayout::new(
            project_root.join(&self.paths.source_root),
            project_root.join(&self.paths.destination),
            self.sources.extension.clone(),
        )
    }

    /// Artifact layout with relative roots resolved against `project_root`
    pub fn artifact_layout(&self, project_root: &Path) -> ArtifactLayout {
        ArtifactLayout {
            artifact_root: project_root.join(&self.paths.artifact_root),
            subdir: self.artifacts.subdir.clone(),
            destination_root: project_root.join(&self.paths.destination),
            primary_extension: self.artifacts.primary_extension.clone(),
            companion_extension: self.artifacts.companion_extension.clone(),
        }
    }

    pub fn orchestrator_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.orchestrator.executable)
    }

    pub fn patch_file(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.patch.file)
    }
}
