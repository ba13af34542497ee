use plugdeploy::application::{UnitState, UnitStatus};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_status(
    statuses: &[UnitStatus],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if statuses.is_empty() {
        return "No deployable units found.\n".to_string();
    }

    let width = statuses
        .iter()
        .map(|s| s.unit.name.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for status in statuses {
        let (icon, state) = match status.state {
            UnitState::Current => (Icon::Success, ColoredText::success("current")),
            UnitState::Changed => (Icon::Warning, ColoredText::warning("changed")),
            UnitState::New => (Icon::Pending, ColoredText::info("new")),
        };
        out.push_str(&format!(
            "{} {:<width$}  {:<7}  {}\n",
            icon.colored(supports_color, supports_unicode),
            status.unit.name.as_str(),
            state.render(supports_color),
            ColoredText::dim(status.unit.kind.as_str()).render(supports_color),
            width = width
        ));
    }
    out
}
