//! Typed error handling for ezgroups.
//!
//! Callers can match on these variants. Each one carries the offending
//! name or path.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ezgroups operations.
#[derive(Error, Debug)]
pub enum GroupsError {
    /// A group name or segment failed validation
    #[error("Invalid group name '{name}': {message}")]
    InvalidGroupName { name: String, message: String },

    /// A legacy alias no longer matches its canonical constant
    #[error("Alias {legacy} = {legacy_value:?} does not match {canonical} = {canonical_value:?}")]
    AliasMismatch {
        legacy: &'static str,
        canonical: &'static str,
        legacy_value: &'static str,
        canonical_value: &'static str,
    },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// I/O error when reading files
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl GroupsError {
    /// Create an invalid group name error.
    pub fn invalid_name(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidGroupName {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Whether the caller can reject the input and carry on.
    ///
    /// An alias mismatch means the build itself is inconsistent.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidGroupName { .. } | Self::Config { .. })
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Config { path, .. } => Some(path),
            Self::Io { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for ezgroups results.
pub type GroupsResult<T> = Result<T, GroupsError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> GroupsResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> GroupsResult<T> {
        self.map_err(|e| GroupsError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_display() {
        let err = GroupsError::invalid_name("root..app", "empty segment");
        assert!(err.to_string().contains("root..app"));
        assert!(err.to_string().contains("empty segment"));
        assert!(err.path().is_none());
    }

    #[test]
    fn test_alias_mismatch_display() {
        let err = GroupsError::AliasMismatch {
            legacy: "names::ROOT",
            canonical: "constants::ROOT",
            legacy_value: "Root",
            canonical_value: "root",
        };
        let msg = err.to_string();
        assert!(msg.contains("names::ROOT"));
        assert!(msg.contains("\"root\""));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_is_recoverable() {
        assert!(GroupsError::invalid_name("x y", "whitespace").is_recoverable());
        assert!(GroupsError::config("/tmp/ezgroups.toml", "bad").is_recoverable());
        let io = GroupsError::io(
            "/missing",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(!io.is_recoverable());
    }

    #[test]
    fn test_io_result_ext() {
        let result: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let err = result.with_path("/missing/ezgroups.toml").unwrap_err();
        assert_eq!(err.path(), Some(&PathBuf::from("/missing/ezgroups.toml")));
    }
}
