//! Artifact Deploy Use Case
//!
//! Copies compiled plugin binaries (and their debug symbols when present)
//! from each project's build output folder into the destination root.

use std::path::PathBuf;

use crate::application::deploy::{DeployOptions, DeployReport, UnitFailure};
use crate::domain::entities::{ArtifactLayout, ArtifactUnit};
use crate::domain::ports::{DeployEvent, DeployEventSink, FileSystem};
use crate::domain::services::{discover_projects, resolve_project};
use crate::domain::value_objects::{UnitKind, UnitName};
use crate::error::DeployResult;

/// Reason recorded for projects without a primary artifact
pub const NOT_BUILT: &str = "has not been built";

pub struct ArtifactDeployUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    layout: ArtifactLayout,
}

impl<FS> ArtifactDeployUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS, layout: ArtifactLayout) -> Self {
        Self {
            file_system,
            layout,
        }
    }

    pub fn layout(&self) -> &ArtifactLayout {
        &self.layout
    }

    /// Project names a run would visit; explicit names are validated up front
    pub fn plan(&self, options: &DeployOptions) -> DeployResult<Vec<UnitName>> {
        if options.is_bulk() {
            return discover_projects(&self.file_system, &self.layout.artifact_root);
        }

        let mut names: Vec<UnitName> = Vec::with_capacity(options.names.len());
        for raw in &options.names {
            let name = resolve_project(&self.file_system, &self.layout.artifact_root, raw)?;
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Ok(names)
    }

    pub fn execute(
        &self,
        options: &DeployOptions,
        sink: &dyn DeployEventSink,
    ) -> DeployResult<DeployReport> {
        let names = self.plan(options)?;

        let mut report = DeployReport::new();
        report.unit_count = names.len();
        report.dry_run = options.dry_run;

        sink.on_event(DeployEvent::Started {
            source_root: self.layout.artifact_root.clone(),
            destination_root: self.layout.destination_root.clone(),
            unit_count: names.len(),
            dry_run: options.dry_run,
        });

        let total = names.len();
        for (index, name) in names.into_iter().enumerate() {
            let unit = self.layout.unit(name);

            if !self.file_system.is_file(&unit.primary) {
                tracing::debug!(unit = %unit.name, path = %unit.primary.display(), "{}", NOT_BUILT);
                sink.on_event(DeployEvent::Skipped {
                    index,
                    name: unit.name.to_string(),
                    reason: NOT_BUILT.to_string(),
                });
                report
                    .skipped
                    .push((unit.name.to_string(), NOT_BUILT.to_string()));
                continue;
            }

            if options.dry_run {
                for (source, destination) in self.copies(&unit) {
                    sink.on_event(DeployEvent::Planned {
                        index,
                        name: unit.name.to_string(),
                        kind: UnitKind::File,
                        source,
                        destination: destination.clone(),
                    });
                    report.deployed.push(destination);
                }
                continue;
            }

            if let Err(e) = self.deploy_unit(index, &unit, &mut report, sink) {
                tracing::debug!(unit = %unit.name, error = %e, "artifact deploy failed");
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
                    report.stopped_early = index + 1 < total;
                    break;
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

    /// Source/destination pairs for a built unit: primary, then companion if present
    fn copies(&self, unit: &ArtifactUnit) -> Vec<(PathBuf, PathBuf)> {
        let mut pairs = vec![(unit.primary.clone(), unit.primary_destination())];
        if self.file_system.is_file(&unit.companion) {
            pairs.push((unit.companion.clone(), unit.companion_destination()));
        }
        pairs
    }

    fn deploy_unit(
        &self,
        index: usize,
        unit: &ArtifactUnit,
        report: &mut DeployReport,
        sink: &dyn DeployEventSink,
    ) -> DeployResult<()> {
        self.file_system.create_dir_all(&self.layout.destination_root)?;

        for (source, destination) in self.copies(unit) {
            self.file_system.copy_file(&source, &destination)?;
            tracing::info!(
                unit = %unit.name,
                source = %source.display(),
                destination = %destination.display(),
                "copied artifact"
            );
            sink.on_event(DeployEvent::Copied {
                index,
                name: unit.name.to_string(),
                kind: UnitKind::File,
                source,
                destination: destination.clone(),
            });
            report.deployed.push(destination);
        }
        Ok(())
    }
}
