use std::path::PathBuf;

use anyhow::Result;

use plugdeploy::presentation::factory::create_patch_use_case;

use super::CommandContext;
use crate::ui::primitives::icon::Icon;

pub fn cmd_patch_config(ctx: &CommandContext, file: Option<PathBuf>) -> Result<i32> {
    let path = match file {
        Some(file) => ctx.project_root.join(file),
        None => ctx.config.patch_file(&ctx.project_root),
    };

    let outcome = create_patch_use_case(&ctx.config).execute(&path, &ctx.project_root)?;

    let ui = &ctx.ui;
    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "patch-config",
            "file": outcome.path.display().to_string(),
            "changed": outcome.changed(),
            "replaced": outcome.replaced,
        }))?;
        return Ok(0);
    }

    let name = outcome
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| outcome.path.display().to_string());
    if outcome.changed() {
        println!(
            "{} {} file updated successfully.",
            Icon::Patch.colored(ui.color, ui.unicode),
            name
        );
    } else {
        println!(
            "{} {} file already up to date.",
            Icon::Success.colored(ui.color, ui.unicode),
            name
        );
    }
    Ok(0)
}
