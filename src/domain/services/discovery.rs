//! Unit discovery and resolution
//!
//! Turns explicit names or a directory scan into resolved units.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::entities::{DeployableUnit, SourceLayout};
use crate::domain::ports::{EntryKind, FileSystem};
use crate::domain::value_objects::{UnitKind, UnitName};
use crate::error::{DeployError, DeployResult};

/// Result of scanning a source root
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Units sorted by name, one per name
    pub units: Vec<DeployableUnit>,
    /// Files hidden by a folder of the same unit name
    pub shadowed: Vec<PathBuf>,
}

/// Parse an explicit argument into a unit name
pub fn parse_name(raw: &str) -> DeployResult<UnitName> {
    UnitName::new(raw).map_err(|e| DeployError::InvalidArgument {
        name: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Resolve one explicitly named source unit.
///
/// A folder wins over a file of the same name.
pub fn resolve_source(
    fs: &dyn FileSystem,
    layout: &SourceLayout,
    raw: &str,
) -> DeployResult<DeployableUnit> {
    let name = parse_name(raw)?;

    let kind = if fs.is_dir(&layout.directory_source(&name)) {
        UnitKind::Directory
    } else if fs.is_file(&layout.file_source(&name)) {
        UnitKind::File
    } else {
        return Err(DeployError::NotFound {
            name: raw.to_string(),
            root: layout.source_root.clone(),
        });
    };

    tracing::debug!(unit = %name, %kind, "resolved source unit");
    Ok(DeployableUnit::new(name, kind, layout))
}

/// Scan the source root for every deployable unit.
///
/// Folders become folder units, files carrying the unit extension become
/// file units named after their stem, everything else is ignored.
pub fn discover_sources(fs: &dyn FileSystem, layout: &SourceLayout) -> DeployResult<Discovery> {
    if !fs.is_dir(&layout.source_root) {
        return Err(DeployError::FileNotFound {
            path: layout.source_root.clone(),
        });
    }

    let mut by_name: BTreeMap<UnitName, UnitKind> = BTreeMap::new();
    let mut shadowed = Vec::new();

    for entry in fs.list_dir(&layout.source_root)? {
        let (raw, kind) = match entry.kind {
            EntryKind::Directory => (entry.name.as_str(), UnitKind::Directory),
            EntryKind::File => match layout.unit_name_for_file(&entry.name) {
                Some(stem) => (stem, UnitKind::File),
                None => continue,
            },
            EntryKind::Symlink => {
                // Follow the link to decide what it stands for.
                if fs.is_dir(&entry.path) {
                    (entry.name.as_str(), UnitKind::Directory)
                } else if let Some(stem) = layout.unit_name_for_file(&entry.name) {
                    (stem, UnitKind::File)
                } else {
                    continue;
                }
            }
        };

        let Ok(name) = UnitName::new(raw) else {
            tracing::warn!(entry = %entry.path.display(), "skipping entry with unusable name");
            continue;
        };

        match by_name.get(&name).copied() {
            Some(UnitKind::Directory) if kind == UnitKind::File => {
                shadowed.push(entry.path.clone());
            }
            Some(UnitKind::File) if kind == UnitKind::Directory => {
                shadowed.push(layout.file_source(&name));
                by_name.insert(name, kind);
            }
            _ => {
                by_name.insert(name, kind);
            }
        }
    }

    let units = by_name
        .into_iter()
        .map(|(name, kind)| DeployableUnit::new(name, kind, layout))
        .collect();

    Ok(Discovery { units, shadowed })
}

/// Resolve one explicitly named project folder under `root`
pub fn resolve_project(fs: &dyn FileSystem, root: &Path, raw: &str) -> DeployResult<UnitName> {
    let name = parse_name(raw)?;
    if !fs.is_dir(&root.join(name.as_str())) {
        return Err(DeployError::InvalidArgument {
            name: raw.to_string(),
            reason: format!("folder does not exist in '{}'", root.display()),
        });
    }
    Ok(name)
}

/// Every immediate subfolder of `root`, sorted by name
pub fn discover_projects(fs: &dyn FileSystem, root: &Path) -> DeployResult<Vec<UnitName>> {
    if !fs.is_dir(root) {
        return Err(DeployError::FileNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut names: Vec<UnitName> = fs
        .list_dir(root)?
        .into_iter()
        .filter(|entry| match entry.kind {
            EntryKind::Directory => true,
            EntryKind::Symlink => fs.is_dir(&entry.path),
            EntryKind::File => false,
        })
        .filter_map(|entry| UnitName::new(entry.name).ok())
        .collect();
    names.sort();
    Ok(names)
}
