//! Config Patch Use Case
//!
//! Rewrites a relative build path placeholder in an IDE config file into an
//! absolute one rooted at the working directory.

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::error::DeployResult;

/// What a patch run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub path: PathBuf,
    /// Occurrences rewritten in this run
    pub replaced: usize,
    /// Occurrences that already carried the prefix
    pub already_patched: usize,
}

impl PatchOutcome {
    pub fn changed(&self) -> bool {
        self.replaced > 0
    }
}

/// Render a directory the way the config file expects it: forward slashes only
pub fn forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Prefix every bare `placeholder` in `content` with `<base>/`.
///
/// Returns the new content and the number of rewritten and skipped
/// occurrences. Occurrences already preceded by `<base>/` stay as they are,
/// unlike a plain `str::replace`, which would prefix them a second time.
pub fn patch_placeholder(content: &str, placeholder: &str, base: &str) -> (String, usize, usize) {
    if placeholder.is_empty() {
        return (content.to_string(), 0, 0);
    }

    let prefix = format!("{}/", base.trim_end_matches('/'));
    let patched = format!("{prefix}{placeholder}");
    let mut out = String::with_capacity(content.len());
    let mut rest = content;
    let mut replaced = 0;
    let mut skipped = 0;

    // The patched form is matched first: the base may itself end in `build`.
    while let Some(ch) = rest.chars().next() {
        if rest.starts_with(&patched) {
            out.push_str(&patched);
            rest = &rest[patched.len()..];
            skipped += 1;
        } else if rest.starts_with(placeholder) {
            out.push_str(&patched);
            rest = &rest[placeholder.len()..];
            replaced += 1;
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    (out, replaced, skipped)
}

pub struct ConfigPatchUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    placeholder: String,
}

impl<FS> ConfigPatchUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS, placeholder: impl Into<String>) -> Self {
        Self {
            file_system,
            placeholder: placeholder.into(),
        }
    }

    /// Patch `file` in place using `base` as the absolute prefix.
    ///
    /// The file is only rewritten when something changed.
    pub fn execute(&self, file: &Path, base: &Path) -> DeployResult<PatchOutcome> {
        let content = self.file_system.read_to_string(file)?;
        let (updated, replaced, already_patched) =
            patch_placeholder(&content, &self.placeholder, &forward_slashes(base));

        if replaced > 0 {
            self.file_system.write_atomic(file, &updated)?;
            tracing::info!(file = %file.display(), replaced, "patched config file");
        } else {
            tracing::debug!(
                file = %file.display(),
                already_patched,
                "config file already up to date"
            );
        }

        Ok(PatchOutcome {
            path: file.to_path_buf(),
            replaced,
            already_patched,
        })
    }
}
