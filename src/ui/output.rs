use plugdeploy::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn format_config_warning(
    w: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = Icon::Warning.colored(supports_color, supports_unicode);
    let mut out = match w.line {
        Some(line) => format!(
            "{} Unknown config key '{}' in {}:{}\n",
            icon,
            w.key,
            w.file.display(),
            line
        ),
        None => format!("{} Unknown config key '{}' in {}\n", icon, w.key, w.file.display()),
    };
    if let Some(suggestion) = &w.suggestion {
        out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
    }
    out
}

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for w in warnings {
        eprint!("{}", format_config_warning(w, ui.color, ui.unicode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn warning_mentions_key_line_and_suggestion() {
        let w = ConfigWarning {
            key: "destnation".to_string(),
            file: PathBuf::from("plugdeploy.toml"),
            line: Some(2),
            suggestion: Some("destination".to_string()),
        };
        let rendered = format_config_warning(&w, false, false);
        assert!(rendered.contains("[WARN] Unknown config key 'destnation' in plugdeploy.toml:2"));
        assert!(rendered.contains("Did you mean 'destination'?"));
    }
}
