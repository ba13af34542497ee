use plugdeploy::DeployError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn hint(err: &DeployError) -> Option<&'static str> {
    match err {
        DeployError::NotFound { .. } => Some("Run `plugdeploy status` to list deployable units."),
        DeployError::ExecutableNotFound { .. } => Some(
            "Set `orchestrator.executable` in plugdeploy.toml or PLUGDEPLOY_ORCHESTRATOR.",
        ),
        DeployError::InvalidArgument { .. } => {
            Some("Pass plain folder or file names without path separators.")
        }
        DeployError::Config { .. } => Some("Fix the configuration file and try again."),
        _ => None,
    }
}

pub fn format_error_with(
    err: &anyhow::Error,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(format!("{:#}", err)).render(supports_color)
    );

    if let Some(fix) = err.downcast_ref::<DeployError>().and_then(hint) {
        out.push_str(&format!(
            "  {} {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim("FIX:").render(supports_color),
            fix
        ));
    }
    out
}

/// JSON error event for `--json` runs
pub fn error_event(err: &anyhow::Error) -> serde_json::Value {
    let code = err
        .downcast_ref::<DeployError>()
        .map(DeployError::code)
        .unwrap_or("error");
    serde_json::json!({
        "event": "error",
        "code": code,
        "message": format!("{:#}", err),
    })
}

/// Report a fatal error the way the run's output mode and colors ask for
pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let _ = crate::ui::json::emit(error_event(err));
        return;
    }

    eprint!("{}", format_error_with(err, ui.color, ui.unicode));
}
