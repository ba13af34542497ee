use anyhow::Result;

use plugdeploy::presentation::factory::create_status_use_case;

use super::CommandContext;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::status::render_status;

pub fn cmd_status(ctx: &CommandContext, names: Vec<String>) -> Result<i32> {
    let use_case = create_status_use_case(&ctx.config, &ctx.project_root);
    let statuses = use_case.execute(&names)?;
    let ui = &ctx.ui;

    if ui.json {
        for status in &statuses {
            crate::ui::json::emit(serde_json::json!({
                "event": "status",
                "command": "status",
                "name": status.unit.name.as_str(),
                "kind": status.unit.kind,
                "state": status.state,
                "destination": status.unit.destination().display().to_string(),
            }))?;
        }
        return Ok(0);
    }

    let layout = ctx.config.source_layout(&ctx.project_root);
    let mut header = CommandHeader::new(Icon::Status, "Status");
    header.add("Source", layout.source_root.display().to_string());
    header.add("Destination", layout.destination_root.display().to_string());
    print!("{}", header.render(ui.color, ui.unicode));
    print!("{}", render_status(&statuses, ui.color, ui.unicode));
    Ok(0)
}
