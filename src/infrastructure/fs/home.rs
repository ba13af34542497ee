//! User configuration directory resolution with test isolation support.
//!
//! `dirs::config_dir()` ignores environment overrides on some platforms, so
//! `PLUGDEPLOY_HOME` is checked first. Integration tests point it at a temp
//! directory to keep the developer's own config out of the run.

use std::path::PathBuf;

/// Environment variable overriding the user configuration directory.
pub const PLUGDEPLOY_HOME_VAR: &str = "PLUGDEPLOY_HOME";

/// Directory holding the user-level `config.toml`.
///
/// - `$PLUGDEPLOY_HOME` when set
/// - otherwise `<platform config dir>/plugdeploy`
/// - `None` if neither can be determined
pub fn user_config_dir() -> Option<PathBuf> {
    resolve_config_dir(std::env::var(PLUGDEPLOY_HOME_VAR).ok(), dirs::config_dir())
}

fn resolve_config_dir(override_dir: Option<String>, platform: Option<PathBuf>) -> Option<PathBuf> {
    match override_dir {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => platform.map(|p| p.join("plugdeploy")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_platform_dir() {
        let dir = resolve_config_dir(
            Some("/test/fake/home".to_string()),
            Some(PathBuf::from("/home/u/.config")),
        );
        assert_eq!(dir, Some(PathBuf::from("/test/fake/home")));
    }

    #[test]
    fn platform_dir_gets_tool_subfolder() {
        let dir = resolve_config_dir(None, Some(PathBuf::from("/home/u/.config")));
        assert_eq!(dir, Some(PathBuf::from("/home/u/.config/plugdeploy")));
    }

    #[test]
    fn empty_override_is_ignored() {
        let dir = resolve_config_dir(Some(String::new()), None);
        assert_eq!(dir, None);
    }
}
