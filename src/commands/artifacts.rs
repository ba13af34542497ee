use anyhow::Result;

use plugdeploy::infrastructure::JsonEventSink;
use plugdeploy::presentation::factory::create_artifact_use_case;
use plugdeploy::DeployOptions;

use super::CommandContext;
use crate::ui::views::deploy::{render_deploy_header, render_deploy_summary, ConsoleEventSink};

pub fn cmd_deploy_artifacts(
    ctx: &CommandContext,
    names: Vec<String>,
    dry_run: bool,
    fail_fast: bool,
) -> Result<i32> {
    let use_case = create_artifact_use_case(&ctx.config, &ctx.project_root);
    let options = DeployOptions::named(names)
        .with_dry_run(dry_run)
        .with_fail_fast(fail_fast || ctx.config.deploy.fail_fast);

    let ui = &ctx.ui;
    if ui.json {
        let report = use_case.execute(&options, &JsonEventSink::stdout("deploy-artifacts"))?;
        return Ok(report.exit_code());
    }

    let layout = use_case.layout();
    print!(
        "{}",
        render_deploy_header(
            "Deploy Artifacts",
            &layout.artifact_root,
            &layout.destination_root,
            dry_run,
            ui.color,
            ui.unicode,
        )
    );

    let report = use_case.execute(&options, &ConsoleEventSink::new(*ui))?;
    print!(
        "{}",
        render_deploy_summary("Deploy Artifacts", &report, ui.color, ui.unicode)
    );
    Ok(report.exit_code())
}
