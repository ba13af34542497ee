use std::path::Path;

use plugdeploy::domain::ports::{DeployEvent, DeployEventSink};
use plugdeploy::DeployReport;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_deploy_header(
    action: &str,
    source: &Path,
    destination: &Path,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Deploy, action);
    header.add("Source", source.display().to_string());
    header.add("Destination", destination.display().to_string());
    if dry_run {
        header.add("Mode", "dry run");
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_deploy_summary(
    action: &str,
    report: &DeployReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let clean = report.is_success() && report.skipped.is_empty();
    let mut summary = if clean {
        ResultSummary::success(format!("{action} Complete"))
    } else {
        ResultSummary::partial(format!("{action} Results"))
    };

    let verb = if report.dry_run { "planned" } else { "deployed" };
    summary.add_stat(format!("paths {verb}"), report.deployed.len());
    summary.add_stat("skipped", report.skipped.len());
    summary.add_stat("failed", report.failed.len());

    for path in &report.shadowed {
        summary.add_warning(format!("{} ignored, a folder of the same name wins", path.display()));
    }
    if !report.failed.is_empty() {
        summary.add_warning(format!("{} unit(s) failed", report.failed.len()));
    }
    if report.stopped_early {
        summary.add_warning("stopped at the first failure");
    }
    if report.dry_run {
        summary.with_next_step("Run again without --dry-run to apply");
    }

    summary.render(supports_color, supports_unicode)
}

/// One progress line per event; `None` for events the console does not show
pub fn render_event(
    event: &DeployEvent,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    let line = match event {
        DeployEvent::Started { .. } | DeployEvent::Completed { .. } => return None,
        DeployEvent::Removed { path, .. } => {
            if verbose == 0 {
                return None;
            }
            format!(
                "  {} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim(format!("removed {}", path.display())).render(supports_color)
            )
        }
        DeployEvent::Copied {
            name,
            kind,
            destination,
            ..
        } => format!(
            "{} Deployed {} {} to {}",
            Icon::Success.colored(supports_color, supports_unicode),
            kind,
            name,
            destination.display()
        ),
        DeployEvent::Planned {
            name,
            kind,
            destination,
            ..
        } => format!(
            "{} Would deploy {} {} to {}",
            Icon::Pending.colored(supports_color, supports_unicode),
            kind,
            name,
            destination.display()
        ),
        DeployEvent::Skipped { name, reason, .. } => format!(
            "{} {} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            name,
            reason
        ),
        DeployEvent::Failed { name, error, .. } => format!(
            "{} {}: {}",
            Icon::Error.colored(supports_color, supports_unicode),
            name,
            ColoredText::error(error.as_str()).render(supports_color)
        ),
    };
    Some(line)
}

/// Prints deploy progress for humans
pub struct ConsoleEventSink {
    ui: UiContext,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let Some(line) = render_event(&event, self.ui.verbose, self.ui.color, self.ui.unicode)
        else {
            return;
        };
        if matches!(event, DeployEvent::Failed { .. }) {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugdeploy::domain::value_objects::UnitKind;
    use plugdeploy::UnitFailure;
    use std::path::PathBuf;

    #[test]
    fn header_includes_source_and_destination() {
        let rendered = render_deploy_header(
            "Deploy",
            Path::new("python_examples"),
            Path::new("plugins"),
            true,
            false,
            false,
        );
        assert!(rendered.contains("Source: python_examples"));
        assert!(rendered.contains("Destination: plugins"));
        assert!(rendered.contains("Mode: dry run"));
    }

    #[test]
    fn copied_event_reads_like_a_sentence() {
        let line = render_event(
            &DeployEvent::Copied {
                index: 0,
                name: "hello".to_string(),
                kind: UnitKind::Directory,
                source: PathBuf::from("python_examples/hello"),
                destination: PathBuf::from("plugins/hello"),
            },
            0,
            false,
            false,
        )
        .unwrap();
        assert_eq!(
            line,
            format!("[OK] Deployed folder hello to {}", Path::new("plugins/hello").display())
        );
    }

    #[test]
    fn removed_event_only_when_verbose() {
        let event = DeployEvent::Removed {
            index: 0,
            path: PathBuf::from("plugins/hello"),
        };
        assert!(render_event(&event, 0, false, false).is_none());
        assert!(render_event(&event, 1, false, false).is_some());
    }

    #[test]
    fn summary_reports_failures_as_partial() {
        let mut report = DeployReport::new();
        report.deployed.push(PathBuf::from("plugins/a.py"));
        report.failed.push(UnitFailure {
            name: "b".to_string(),
            error: "denied".to_string(),
        });

        let rendered = render_deploy_summary("Deploy", &report, false, false);
        assert!(rendered.contains("[WARN] Deploy Results"));
        assert!(rendered.contains("1 paths deployed"));
        assert!(rendered.contains("1 unit(s) failed"));
    }
}
