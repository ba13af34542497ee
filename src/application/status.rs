//! Status Use Case
//!
//! Read-only comparison of each source unit against its destination slot.

use serde::Serialize;

use crate::domain::entities::{DeployableUnit, SourceLayout};
use crate::domain::ports::{EntryKind, FileSystem};
use crate::domain::services::{discover_sources, resolve_source};
use crate::domain::value_objects::UnitKind;
use crate::error::DeployResult;

/// How a destination slot compares to its source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitState {
    /// Nothing deployed under this name
    New,
    /// Deployed content differs, or a stale entry of the other kind remains
    Changed,
    /// Destination matches the source
    Current,
}

impl UnitState {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitState::New => "new",
            UnitState::Changed => "changed",
            UnitState::Current => "current",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitStatus {
    pub unit: DeployableUnit,
    pub state: UnitState,
}

pub struct StatusUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    layout: SourceLayout,
}

impl<FS> StatusUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS, layout: SourceLayout) -> Self {
        Self {
            file_system,
            layout,
        }
    }

    /// Status of the named units, or of every discoverable unit when `names` is empty
    pub fn execute(&self, names: &[String]) -> DeployResult<Vec<UnitStatus>> {
        let units = if names.is_empty() {
            discover_sources(&self.file_system, &self.layout)?.units
        } else {
            let mut units: Vec<DeployableUnit> = Vec::with_capacity(names.len());
            for raw in names {
                let unit = resolve_source(&self.file_system, &self.layout, raw)?;
                if !units.iter().any(|u| u.name == unit.name) {
                    units.push(unit);
                }
            }
            units
        };

        units
            .into_iter()
            .map(|unit| {
                let state = self.compare(&unit)?;
                Ok(UnitStatus { unit, state })
            })
            .collect()
    }

    fn compare(&self, unit: &DeployableUnit) -> DeployResult<UnitState> {
        let target = self.file_system.entry_kind(unit.destination());
        let other = self.file_system.entry_kind(unit.slot.other(unit.kind));

        if target.is_none() && other.is_none() {
            return Ok(UnitState::New);
        }
        if other.is_some() {
            return Ok(UnitState::Changed);
        }

        let kind_matches = match unit.kind {
            UnitKind::Directory => self.file_system.is_dir(unit.destination()),
            UnitKind::File => {
                target != Some(EntryKind::Directory) && self.file_system.is_file(unit.destination())
            }
        };
        if !kind_matches {
            return Ok(UnitState::Changed);
        }

        let source = self.file_system.hash(&unit.source)?;
        let deployed = self.file_system.hash(unit.destination())?;
        tracing::trace!(unit = %unit.name, %source, %deployed, "compared hashes");

        Ok(if source == deployed {
            UnitState::Current
        } else {
            UnitState::Changed
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeployError;
    use crate::infrastructure::fs::LocalFs;
    use std::fs;
    use tempfile::tempdir;

    fn layout(root: &std::path::Path) -> SourceLayout {
        let layout = SourceLayout::new(root.join("src"), root.join("dest"), "py");
        fs::create_dir_all(&layout.source_root).unwrap();
        fs::create_dir_all(&layout.destination_root).unwrap();
        layout
    }

    fn state_of(statuses: &[UnitStatus], name: &str) -> UnitState {
        statuses
            .iter()
            .find(|s| s.unit.name.as_str() == name)
            .map(|s| s.state)
            .unwrap()
    }

    #[test]
    fn classifies_new_changed_and_current() {
        let dir = tempdir().unwrap();
        let l = layout(dir.path());
        fs::write(l.source_root.join("fresh.py"), "a").unwrap();
        fs::write(l.source_root.join("edited.py"), "new").unwrap();
        fs::write(l.destination_root.join("edited.py"), "old").unwrap();
        fs::create_dir_all(l.source_root.join("tree")).unwrap();
        fs::write(l.source_root.join("tree/__init__.py"), "t").unwrap();
        fs::create_dir_all(l.destination_root.join("tree")).unwrap();
        fs::write(l.destination_root.join("tree/__init__.py"), "t").unwrap();

        let statuses = StatusUseCase::new(LocalFs::new(), l).execute(&[]).unwrap();

        assert_eq!(state_of(&statuses, "fresh"), UnitState::New);
        assert_eq!(state_of(&statuses, "edited"), UnitState::Changed);
        assert_eq!(state_of(&statuses, "tree"), UnitState::Current);
    }

    #[test]
    fn stale_entry_of_other_kind_is_changed() {
        let dir = tempdir().unwrap();
        let l = layout(dir.path());
        fs::write(l.source_root.join("plugin.py"), "a").unwrap();
        fs::write(l.destination_root.join("plugin.py"), "a").unwrap();
        fs::create_dir_all(l.destination_root.join("plugin")).unwrap();

        let statuses = StatusUseCase::new(LocalFs::new(), l)
            .execute(&["plugin".to_string()])
            .unwrap();
        assert_eq!(statuses[0].state, UnitState::Changed);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let dir = tempdir().unwrap();
        let l = layout(dir.path());
        let err = StatusUseCase::new(LocalFs::new(), l)
            .execute(&["ghost".to_string()])
            .unwrap_err();
        assert!(matches!(err, DeployError::NotFound { .. }));
    }
}
