//! Unit Name Value Object
//!
//! A validated unit name that can be joined onto a root directory without
//! escaping it:
//! - Non-empty
//! - No path separators
//! - Not `.` or `..`

use std::fmt;

/// Error when name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Name is empty
    Empty,
    /// Name contains `/` or `\`
    ContainsSeparator,
    /// Name is `.` or `..`
    Traversal,
    /// Name contains a NUL byte
    ContainsNul,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::Empty => write!(f, "name is empty"),
            NameError::ContainsSeparator => write!(f, "name contains a path separator"),
            NameError::Traversal => write!(f, "name refers to a relative directory"),
            NameError::ContainsNul => write!(f, "name contains a NUL byte"),
        }
    }
}

impl std::error::Error for NameError {}

/// A validated unit name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitName(String);

impl UnitName {
    /// Create a new UnitName after validation
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        let name = name.into();

        if name.is_empty() {
            return Err(NameError::Empty);
        }
        if name.contains(['/', '\\']) {
            return Err(NameError::ContainsSeparator);
        }
        if name == "." || name == ".." {
            return Err(NameError::Traversal);
        }
        if name.contains('\0') {
            return Err(NameError::ContainsNul);
        }

        Ok(Self(name))
    }

    /// Name with `.ext` appended, e.g. `hello_plugin.py`
    pub fn with_extension(&self, ext: &str) -> String {
        if ext.is_empty() {
            self.0.clone()
        } else {
            format!("{}.{}", self.0, ext)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UnitName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for UnitName {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_name() {
        let name = UnitName::new("hello_plugin").unwrap();
        assert_eq!(name.as_str(), "hello_plugin");
    }

    #[test]
    fn accepts_dotted_name() {
        assert!(UnitName::new("v1.2").is_ok());
        assert!(UnitName::new(".hidden").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(UnitName::new(""), Err(NameError::Empty));
    }

    #[test]
    fn rejects_separators() {
        assert_eq!(UnitName::new("a/b"), Err(NameError::ContainsSeparator));
        assert_eq!(UnitName::new("a\\b"), Err(NameError::ContainsSeparator));
        assert_eq!(UnitName::new("../x"), Err(NameError::ContainsSeparator));
    }

    #[test]
    fn rejects_traversal() {
        assert_eq!(UnitName::new(".."), Err(NameError::Traversal));
        assert_eq!(UnitName::new("."), Err(NameError::Traversal));
    }

    #[test]
    fn with_extension_appends_dot() {
        let name = UnitName::new("hello").unwrap();
        assert_eq!(name.with_extension("py"), "hello.py");
        assert_eq!(name.with_extension(""), "hello");
    }
}
