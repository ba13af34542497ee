//! Compiled plugin artifacts

use std::path::{Path, PathBuf};

use crate::domain::value_objects::UnitName;

/// Where compiled plugins are built and installed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    /// Root holding one folder per plugin project
    pub artifact_root: PathBuf,
    /// Build output folder inside each plugin project
    pub subdir: PathBuf,
    pub destination_root: PathBuf,
    pub primary_extension: String,
    pub companion_extension: String,
}

impl ArtifactLayout {
    pub fn project_dir(&self, name: &UnitName) -> PathBuf {
        self.artifact_root.join(name.as_str())
    }

    pub fn unit(&self, name: UnitName) -> ArtifactUnit {
        let output_dir = self.project_dir(&name).join(&self.subdir);
        let primary = output_dir.join(name.with_extension(&self.primary_extension));
        let companion = output_dir.join(name.with_extension(&self.companion_extension));
        ArtifactUnit {
            name,
            primary,
            companion,
            destination_root: self.destination_root.clone(),
        }
    }
}

/// A plugin binary plus its optional debug-symbol companion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactUnit {
    pub name: UnitName,
    pub primary: PathBuf,
    pub companion: PathBuf,
    pub destination_root: PathBuf,
}

impl ArtifactUnit {
    pub fn primary_destination(&self) -> PathBuf {
        destination_for(&self.destination_root, &self.primary)
    }

    pub fn companion_destination(&self) -> PathBuf {
        destination_for(&self.destination_root, &self.companion)
    }
}

fn destination_for(root: &Path, source: &Path) -> PathBuf {
    match source.file_name() {
        Some(file_name) => root.join(file_name),
        None => root.to_path_buf(),
    }
}
