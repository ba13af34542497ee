use anyhow::Result;

use plugdeploy::presentation::factory::create_orchestrator_use_case;

use super::CommandContext;
use crate::ui::primitives::icon::Icon;

pub fn cmd_build(ctx: &CommandContext, names: Vec<String>) -> Result<i32> {
    let use_case = create_orchestrator_use_case(&ctx.config, &ctx.project_root);
    let artifact_root = ctx.project_root.join(&ctx.config.paths.artifact_root);
    let spec = use_case.build_command(&artifact_root, &names)?;

    let ui = &ctx.ui;
    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "build",
            "program": spec.program.display().to_string(),
            "args": spec.args,
        }))?;
    } else {
        println!(
            "{} Running command: {}",
            Icon::Build.colored(ui.color, ui.unicode),
            spec
        );
    }

    let code = use_case.run(&spec)?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "build",
            "exit_code": code,
        }))?;
    }
    Ok(code)
}
