//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeployError, DeployResult};
use crate::infrastructure::fs::user_config_dir;

use super::types::Config;

/// File name of the project-level configuration
pub const PROJECT_CONFIG_FILE: &str = "plugdeploy.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// `None` when built-in defaults are in use
    pub path: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DeployError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => DeployError::fs("read", path, e),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the configuration file for a run.
///
/// An explicit path must exist. Otherwise `plugdeploy.toml` in the project
/// root, then the user config, then defaults. Environment overrides are
/// applied on top in every case.
pub fn discover(project_root: &Path, explicit: Option<&Path>) -> DeployResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(project_root.join(path)),
        None => {
            let project = project_root.join(PROJECT_CONFIG_FILE);
            if project.is_file() {
                Some(project)
            } else {
                user_config_dir()
                    .map(|dir| dir.join("config.toml"))
                    .filter(|p| p.is_file())
            }
        }
    };

    let Some(path) = candidate else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(LoadedConfig {
            config: with_env_overrides(Config::default()),
            warnings: Vec::new(),
            path: None,
        });
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let (config, warnings) = load_with_warnings(&path)?;
    Ok(LoadedConfig {
        config: with_env_overrides(config),
        warnings,
        path: Some(path),
    })
}

/// Apply environment variable overrides (PLUGDEPLOY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // PLUGDEPLOY_DEST
    if let Some(dest) = get_env("PLUGDEPLOY_DEST").filter(|v| !v.is_empty()) {
        config.paths.destination = PathBuf::from(dest);
    }

    // PLUGDEPLOY_SOURCE_ROOT
    if let Some(root) = get_env("PLUGDEPLOY_SOURCE_ROOT").filter(|v| !v.is_empty()) {
        config.paths.source_root = PathBuf::from(root);
    }

    // PLUGDEPLOY_ARTIFACT_ROOT
    if let Some(root) = get_env("PLUGDEPLOY_ARTIFACT_ROOT").filter(|v| !v.is_empty()) {
        config.paths.artifact_root = PathBuf::from(root);
    }

    // PLUGDEPLOY_ORCHESTRATOR
    if let Some(exe) = get_env("PLUGDEPLOY_ORCHESTRATOR").filter(|v| !v.is_empty()) {
        config.orchestrator.executable = PathBuf::from(exe);
    }

    // PLUGDEPLOY_FAIL_FAST
    if let Some(val) = get_env("PLUGDEPLOY_FAIL_FAST") {
        config.deploy.fail_fast = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "destination",
        "source_root",
        "artifact_root",
        "sources",
        "extension",
        "artifacts",
        "subdir",
        "primary_extension",
        "companion_extension",
        "orchestrator",
        "executable",
        "build_dir",
        "patch",
        "file",
        "placeholder",
        "deploy",
        "fail_fast",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
