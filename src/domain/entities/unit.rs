//! Source units and the destination slots they own.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{UnitKind, UnitName};

/// Where source units live and where they are installed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    pub source_root: PathBuf,
    pub destination_root: PathBuf,
    /// Extension of single-file units, without the dot (e.g. `py`)
    pub extension: String,
}

impl SourceLayout {
    pub fn new(
        source_root: impl Into<PathBuf>,
        destination_root: impl Into<PathBuf>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            destination_root: destination_root.into(),
            extension: extension.into().trim_start_matches('.').to_string(),
        }
    }

    /// Candidate directory source for a name
    pub fn directory_source(&self, name: &UnitName) -> PathBuf {
        self.source_root.join(name.as_str())
    }

    /// Candidate file source for a name
    pub fn file_source(&self, name: &UnitName) -> PathBuf {
        self.source_root.join(name.with_extension(&self.extension))
    }

    pub fn slot(&self, name: &UnitName) -> DestinationSlot {
        DestinationSlot {
            directory: self.destination_root.join(name.as_str()),
            file: self.destination_root.join(name.with_extension(&self.extension)),
        }
    }

    /// Strip the unit extension from a file name, if it carries it
    pub fn unit_name_for_file<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        let stem = file_name.strip_suffix(&self.extension)?.strip_suffix('.')?;
        if stem.is_empty() {
            None
        } else {
            Some(stem)
        }
    }
}

/// Both destination paths a unit name can occupy.
///
/// Deploying a name clears both, so a stale folder never survives next to a
/// fresh file of the same name (or the reverse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationSlot {
    pub directory: PathBuf,
    pub file: PathBuf,
}

impl DestinationSlot {
    pub fn paths(&self) -> [&Path; 2] {
        [self.directory.as_path(), self.file.as_path()]
    }

    /// Destination path for a unit of the given kind
    pub fn target(&self, kind: UnitKind) -> &Path {
        match kind {
            UnitKind::Directory => &self.directory,
            UnitKind::File => &self.file,
        }
    }

    /// The slot path a unit of the given kind must not leave behind
    pub fn other(&self, kind: UnitKind) -> &Path {
        match kind {
            UnitKind::Directory => &self.file,
            UnitKind::File => &self.directory,
        }
    }
}

/// A resolved source unit, ready to copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployableUnit {
    pub name: UnitName,
    pub kind: UnitKind,
    pub source: PathBuf,
    pub slot: DestinationSlot,
}

impl DeployableUnit {
    pub fn new(name: UnitName, kind: UnitKind, layout: &SourceLayout) -> Self {
        let source = match kind {
            UnitKind::Directory => layout.directory_source(&name),
            UnitKind::File => layout.file_source(&name),
        };
        let slot = layout.slot(&name);
        Self {
            name,
            kind,
            source,
            slot,
        }
    }

    pub fn destination(&self) -> &Path {
        self.slot.target(self.kind)
    }
}
