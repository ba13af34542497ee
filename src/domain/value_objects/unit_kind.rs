use serde::Serialize;
use std::fmt;

/// What backs a deployable unit on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// A single source file, deployed under its file name
    File,
    /// A directory tree, deployed recursively
    #[serde(rename = "folder")]
    Directory,
}

impl UnitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::File => "file",
            UnitKind::Directory => "folder",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
