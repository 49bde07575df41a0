//! Namespace operations
//!
//! This module defines the operations provided by the namespace service.

use fs_tree::PathError;
use std::fmt;
use thiserror::Error;

/// Which side of a move is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Source,
    Destination,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Source => write!(f, "source"),
            Operand::Destination => write!(f, "destination"),
        }
    }
}

/// Errors that can occur during namespace operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamespaceError {
    /// One or more segments are not valid names, or the path is empty
    #[error("Invalid directory name(s): [{}]", .names.join(" "))]
    InvalidName { names: Vec<String> },

    /// Delete called with a path that has no segments
    #[error("Directory name required.")]
    NameRequired,

    /// A segment is missing during resolution
    #[error("{segment} does not exist")]
    SegmentNotFound { segment: String },

    /// The destination already holds a child with exactly this name
    #[error("{name} already exists")]
    AlreadyExists { name: String },

    /// Move called with identical source and destination text
    #[error("Cannot move [{src}] to [{dest}] - source and destination is the same")]
    SameSourceDestination { src: String, dest: String },

    /// Move called with a path that has no segments
    #[error("Cannot move [{src}] to [{dest}] - no {operand} directory provided")]
    MissingOperand {
        src: String,
        dest: String,
        operand: Operand,
    },

    /// Resolving either side of a move failed
    #[error("Cannot move [{src}] to [{dest}] - {source}")]
    MoveFailed {
        src: String,
        dest: String,
        source: Box<NamespaceError>,
    },
}

impl NamespaceError {
    /// Wraps a resolution error raised while moving `src` to `dest`
    pub fn move_failed(src: &str, dest: &str, source: NamespaceError) -> Self {
        NamespaceError::MoveFailed {
            src: src.to_string(),
            dest: dest.to_string(),
            source: Box::new(source),
        }
    }
}

impl From<PathError> for NamespaceError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::InvalidName(names) => NamespaceError::InvalidName { names },
        }
    }
}

/// Namespace operations trait
///
/// This trait defines the operations a command front-end may call.
pub trait NamespaceOperations {
    /// Create a directory
    ///
    /// Missing intermediate directories are created; existing ones are
    /// reused. Creating a path that already exists succeeds.
    fn create(&mut self, path: &str) -> Result<(), NamespaceError>;

    /// Delete a directory
    ///
    /// Removes the directory at `path` together with its whole subtree.
    fn delete(&mut self, path: &str) -> Result<(), NamespaceError>;

    /// Move a directory
    ///
    /// Detaches the directory at `src` and attaches it under `dest`.
    fn move_dir(&mut self, src: &str, dest: &str) -> Result<(), NamespaceError>;

    /// List the tree
    ///
    /// Depth-first, children in ascending order, two spaces of indentation
    /// per level, one line per directory. An empty tree renders as "".
    fn list(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_message() {
        let err = NamespaceError::InvalidName {
            names: vec!["fru its".to_string()],
        };
        assert_eq!(err.to_string(), "Invalid directory name(s): [fru its]");
    }

    #[test]
    fn test_invalid_name_message_empty() {
        let err = NamespaceError::InvalidName { names: vec![] };
        assert_eq!(err.to_string(), "Invalid directory name(s): []");
    }

    #[test]
    fn test_segment_not_found_message() {
        let err = NamespaceError::SegmentNotFound {
            segment: "grains".to_string(),
        };
        assert_eq!(err.to_string(), "grains does not exist");
    }

    #[test]
    fn test_missing_operand_message() {
        let err = NamespaceError::MissingOperand {
            src: "/".to_string(),
            dest: "foods".to_string(),
            operand: Operand::Source,
        };
        assert_eq!(
            err.to_string(),
            "Cannot move [/] to [foods] - no source directory provided"
        );
    }

    #[test]
    fn test_move_failed_wraps_source() {
        let err = NamespaceError::move_failed(
            "fruits",
            "foods",
            NamespaceError::SegmentNotFound {
                segment: "foods".to_string(),
            },
        );
        assert_eq!(
            err.to_string(),
            "Cannot move [fruits] to [foods] - foods does not exist"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_from_path_error() {
        let err: NamespaceError = PathError::InvalidName(vec!["a:b".to_string()]).into();
        assert_eq!(
            err,
            NamespaceError::InvalidName {
                names: vec!["a:b".to_string()]
            }
        );
    }
}
