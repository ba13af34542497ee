//! FileSystem port - abstraction over file I/O operations
//!
//! The deploy use cases only touch the disk through this trait, so tests can
//! wrap the local implementation to inject failures.

use std::path::{Path, PathBuf};

use crate::error::DeployResult;

/// Kind of an entry as seen without following symlinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
}

/// One immediate child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
pub trait FileSystem {
    /// Kind of the entry at `path`, `None` if nothing is there
    fn entry_kind(&self, path: &Path) -> Option<EntryKind>;

    /// True if `path` is a directory (following symlinks)
    fn is_dir(&self, path: &Path) -> bool;

    /// True if `path` is a regular file (following symlinks)
    fn is_file(&self, path: &Path) -> bool;

    /// Immediate children of a directory, sorted by name
    fn list_dir(&self, path: &Path) -> DeployResult<Vec<DirEntryInfo>>;

    /// Remove a file or symlink
    fn remove_file(&self, path: &Path) -> DeployResult<()>;

    /// Remove a directory and everything below it
    fn remove_dir_all(&self, path: &Path) -> DeployResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> DeployResult<()>;

    /// Copy a single file, keeping permissions and modification time
    fn copy_file(&self, from: &Path, to: &Path) -> DeployResult<()>;

    /// Copy a directory tree; `to` must not exist yet
    fn copy_tree(&self, from: &Path, to: &Path) -> DeployResult<()>;

    /// Read file content as string
    fn read_to_string(&self, path: &Path) -> DeployResult<String>;

    /// Replace file content atomically
    fn write_atomic(&self, path: &Path, content: &str) -> DeployResult<()>;

    /// SHA-256 over a file, or over every file path and content in a tree
    fn hash(&self, path: &Path) -> DeployResult<String>;
}
