//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::{self, File, FileTimes};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use sha2::{Digest, Sha256};

use crate::domain::ports::file_system::{DirEntryInfo, EntryKind, FileSystem};
use crate::error::{DeployError, DeployResult};

/// Local file system implementation
///
/// Copies keep permissions and modification times; text rewrites are atomic.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn entry_kind(&self, path: &Path) -> Option<EntryKind> {
        let meta = fs::symlink_metadata(path).ok()?;
        let ft = meta.file_type();
        Some(if ft.is_symlink() {
            EntryKind::Symlink
        } else if ft.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        })
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_dir(&self, path: &Path) -> DeployResult<Vec<DirEntryInfo>> {
        let read = fs::read_dir(path).map_err(|e| DeployError::fs("read", path, e))?;

        let mut entries = Vec::new();
        for entry in read {
            let entry = entry.map_err(|e| DeployError::fs("read", path, e))?;
            let entry_path = entry.path();
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                tracing::warn!(entry = %entry_path.display(), "skipping non UTF-8 file name");
                continue;
            };
            let ft = entry
                .file_type()
                .map_err(|e| DeployError::fs("inspect", &entry_path, e))?;
            let kind = if ft.is_symlink() {
                EntryKind::Symlink
            } else if ft.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            entries.push(DirEntryInfo {
                name,
                path: entry_path,
                kind,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn remove_file(&self, path: &Path) -> DeployResult<()> {
        fs::remove_file(path).map_err(|e| DeployError::fs("remove", path, e))
    }

    fn remove_dir_all(&self, path: &Path) -> DeployResult<()> {
        fs::remove_dir_all(path).map_err(|e| DeployError::fs("remove", path, e))
    }

    fn create_dir_all(&self, path: &Path) -> DeployResult<()> {
        fs::create_dir_all(path).map_err(|e| DeployError::fs("create", path, e))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> DeployResult<()> {
        // fs::copy carries the permission bits over.
        fs::copy(from, to).map_err(|e| DeployError::fs("copy", from, e))?;
        if let Err(e) = copy_times(from, to) {
            tracing::debug!(path = %to.display(), error = %e, "could not preserve timestamps");
        }
        Ok(())
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> DeployResult<()> {
        let mut dirs: Vec<(PathBuf, PathBuf)> = Vec::new();

        for entry in tree_walker(from).build() {
            let entry = entry.map_err(|e| DeployError::fs("read", from, io::Error::other(e)))?;
            let rel = entry.path().strip_prefix(from).unwrap_or(entry.path());
            let target = to.join(rel);

            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if is_dir {
                fs::create_dir_all(&target).map_err(|e| DeployError::fs("create", &target, e))?;
                dirs.push((entry.path().to_path_buf(), target));
            } else {
                self.copy_file(entry.path(), &target)?;
            }
        }

        // Folder permissions last, children first, so read-only folders still get filled.
        for (source, target) in dirs.into_iter().rev() {
            if let Ok(meta) = fs::metadata(&source) {
                if let Err(e) = fs::set_permissions(&target, meta.permissions()) {
                    tracing::debug!(
                        path = %target.display(),
                        error = %e,
                        "could not copy folder permissions"
                    );
                }
            }
        }

        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> DeployResult<String> {
        fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DeployError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => DeployError::fs("read", path, e),
        })
    }

    fn write_atomic(&self, path: &Path, content: &str) -> DeployResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(&parent)
            .map_err(|e| DeployError::fs("write", path, e))?;
        tmp.write_all(content.as_bytes())
            .and_then(|_| tmp.flush())
            .map_err(|e| DeployError::fs("write", path, e))?;

        if let Ok(meta) = fs::metadata(path) {
            let _ = fs::set_permissions(tmp.path(), meta.permissions());
        }

        tmp.persist(path)
            .map_err(|e| DeployError::fs("write", path, e.error))?;
        Ok(())
    }

    fn hash(&self, path: &Path) -> DeployResult<String> {
        let mut hasher = Sha256::new();

        if path.is_dir() {
            for entry in tree_walker(path).build() {
                let entry = entry.map_err(|e| DeployError::fs("read", path, io::Error::other(e)))?;
                let rel = entry.path().strip_prefix(path).unwrap_or(entry.path());
                let rel = rel.to_string_lossy().replace('\\', "/");
                if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    hasher.update(b"d\0");
                    hasher.update(rel.as_bytes());
                    hasher.update(b"\0");
                } else {
                    hasher.update(b"f\0");
                    hasher.update(rel.as_bytes());
                    hasher.update(b"\0");
                    hash_file_into(entry.path(), &mut hasher)?;
                }
            }
        } else {
            hash_file_into(path, &mut hasher)?;
        }

        Ok(format!("sha256:{:x}", hasher.finalize()))
    }
}

/// Walker over every entry of a tree: hidden files and ignore files included,
/// links followed, stable order.
fn tree_walker(root: &Path) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b));
    builder
}

fn hash_file_into(path: &Path, hasher: &mut Sha256) -> DeployResult<()> {
    let mut file = File::open(path).map_err(|e| DeployError::fs("read", path, e))?;
    let mut buf = [0u8; 8192];
    loop {
        let n = file
            .read(&mut buf)
            .map_err(|e| DeployError::fs("read", path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(())
}

fn copy_times(from: &Path, to: &Path) -> io::Result<()> {
    let meta = fs::metadata(from)?;
    let times = FileTimes::new()
        .set_accessed(meta.accessed()?)
        .set_modified(meta.modified()?);
    // Read-only copies cannot be opened for writing; fall back to a read handle.
    let file = File::options().write(true).open(to).or_else(|_| File::open(to))?;
    file.set_times(times)
}
