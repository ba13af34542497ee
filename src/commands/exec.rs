use anyhow::Result;

use plugdeploy::presentation::factory::create_orchestrator_use_case;

use super::CommandContext;

/// Forward `args` to the orchestrator; its exit code becomes ours
pub fn cmd_exec(ctx: &CommandContext, args: Vec<String>) -> Result<i32> {
    let use_case = create_orchestrator_use_case(&ctx.config, &ctx.project_root);
    Ok(use_case.exec(args)?)
}
