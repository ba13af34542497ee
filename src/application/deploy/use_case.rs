//! Source Deploy Use Case
//!
//! Flow:
//! 1. Resolve explicit names (all of them, before copying anything) or scan
//!    the source root
//! 2. For each unit: clear both destination slot paths, then copy
//! 3. Report every step through the event sink

use std::path::{Path, PathBuf};

use crate::domain::entities::{DeployableUnit, SourceLayout};
use crate::domain::ports::{DeployEvent, DeployEventSink, EntryKind, FileSystem};
use crate::domain::services::{discover_sources, resolve_source};
use crate::domain::value_objects::UnitKind;
use crate::error::DeployResult;

use super::options::DeployOptions;
use super::result::{DeployReport, UnitFailure};

/// Deploys source units from `layout.source_root` into `layout.destination_root`
pub struct SourceDeployUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    layout: SourceLayout,
}

impl<FS> SourceDeployUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS, layout: SourceLayout) -> Self {
        Self {
            file_system,
            layout,
        }
    }

    pub fn layout(&self) -> &SourceLayout {
        &self.layout
    }

    /// Resolve the units a run would touch.
    ///
    /// Explicit names fail on the first invalid or missing one.
    pub fn plan(
        &self,
        options: &DeployOptions,
    ) -> DeployResult<(Vec<DeployableUnit>, Vec<PathBuf>)> {
        if options.is_bulk() {
            let found = discover_sources(&self.file_system, &self.layout)?;
            for path in &found.shadowed {
                tracing::info!(path = %path.display(), "source file shadowed by a folder");
            }
            return Ok((found.units, found.shadowed));
        }

        let mut units: Vec<DeployableUnit> = Vec::with_capacity(options.names.len());
        for raw in &options.names {
            let unit = resolve_source(&self.file_system, &self.layout, raw)?;
            if !units.iter().any(|u| u.name == unit.name) {
                units.push(unit);
            }
        }
        Ok((units, Vec::new()))
    }

    /// Execute a deploy run
    ///
    /// Returns `Err` only for problems that stop the run before any copy
    /// (bad explicit name, missing source root). Per-unit failures land in
    /// the report.
    pub fn execute(
        &self,
        options: &DeployOptions,
        sink: &dyn DeployEventSink,
    ) -> DeployResult<DeployReport> {
        let (units, shadowed) = self.plan(options)?;

        let mut report = DeployReport::new();
        report.unit_count = units.len();
        report.dry_run = options.dry_run;
        report.shadowed = shadowed;

        sink.on_event(DeployEvent::Started {
            source_root: self.layout.source_root.clone(),
            destination_root: self.layout.destination_root.clone(),
            unit_count: units.len(),
            dry_run: options.dry_run,
        });

        for (index, unit) in units.iter().enumerate() {
            if options.dry_run {
                sink.on_event(DeployEvent::Planned {
                    index,
                    name: unit.name.to_string(),
                    kind: unit.kind,
                    source: unit.source.clone(),
                    destination: unit.destination().to_path_buf(),
                });
                report.deployed.push(unit.destination().to_path_buf());
                continue;
            }

            match self.deploy_unit(index, unit, sink) {
                Ok(()) => report.deployed.push(unit.destination().to_path_buf()),
                Err(e) => {
                    tracing::debug!(unit = %unit.name, error = %e, "deploy failed");
                    sink.on_event(DeployEvent::Failed {
                        index,
                        name: unit.name.to_string(),
                        error: e.to_string(),
                    });
                    report.failed.push(UnitFailure {
                        name: unit.name.to_string(),
                        error: e.to_string(),
                    });
                    if options.stops_on_failure() {
                        report.stopped_early = index + 1 < units.len();
                        break;
                    }
                }
            }
        }

        sink.on_event(DeployEvent::Completed {
            deployed: report.deployed.len(),
            skipped: report.skipped.len(),
            failed: report.failed.len(),
        });

        Ok(report)
    }

    /// Resolve and deploy a single named unit
    pub fn deploy(&self, name: &str, sink: &dyn DeployEventSink) -> DeployResult<DeployableUnit> {
        let unit = resolve_source(&self.file_system, &self.layout, name)?;
        self.deploy_unit(0, &unit, sink)?;
        Ok(unit)
    }

    /// Replace whatever occupies the unit's slot with a fresh copy
    fn deploy_unit(
        &self,
        index: usize,
        unit: &DeployableUnit,
        sink: &dyn DeployEventSink,
    ) -> DeployResult<()> {
        for path in unit.slot.paths() {
            self.clear(index, path, sink)?;
        }

        self.file_system.create_dir_all(&self.layout.destination_root)?;

        let destination = unit.destination();
        match unit.kind {
            UnitKind::Directory => self.file_system.copy_tree(&unit.source, destination)?,
            UnitKind::File => self.file_system.copy_file(&unit.source, destination)?,
        }

        tracing::info!(
            unit = %unit.name,
            source = %unit.source.display(),
            destination = %destination.display(),
            "deployed"
        );
        sink.on_event(DeployEvent::Copied {
            index,
            name: unit.name.to_string(),
            kind: unit.kind,
            source: unit.source.clone(),
            destination: destination.to_path_buf(),
        });
        Ok(())
    }

    fn clear(&self, index: usize, path: &Path, sink: &dyn DeployEventSink) -> DeployResult<()> {
        match self.file_system.entry_kind(path) {
            None => return Ok(()),
            Some(EntryKind::Directory) => self.file_system.remove_dir_all(path)?,
            Some(EntryKind::File) | Some(EntryKind::Symlink) => {
                self.file_system.remove_file(path)?
            }
        }
        tracing::debug!(path = %path.display(), "removed stale destination entry");
        sink.on_event(DeployEvent::Removed {
            index,
            path: path.to_path_buf(),
        });
        Ok(())
    }
}
