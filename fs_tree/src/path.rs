//! Path syntax
//!
//! This module handles splitting paths into segments and validating names.

use thiserror::Error;

/// Errors that can occur while validating a path
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// One or more segments are not valid directory names
    #[error("Invalid directory name(s): [{}]", .0.join(" "))]
    InvalidName(Vec<String>),
}

/// Path resolver
///
/// Handles splitting paths into segments and validating segment names.
pub struct PathResolver;

impl PathResolver {
    /// Segment delimiter
    pub const DELIMITER: char = '/';

    /// Characters a directory name may not contain
    pub const INVALID_CHARS: [char; 2] = [' ', ':'];

    /// Splits a path into segments
    ///
    /// Trailing empty segments are dropped, so a path made only of
    /// delimiters has no segments at all. An empty path is a single empty
    /// segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use fs_tree::PathResolver;
    ///
    /// assert_eq!(PathResolver::split_path("fruits/apples"), vec!["fruits", "apples"]);
    /// assert_eq!(PathResolver::split_path("fruits/"), vec!["fruits"]);
    /// assert_eq!(PathResolver::split_path(""), vec![""]);
    /// assert!(PathResolver::split_path("//").is_empty());
    /// ```
    pub fn split_path(path: &str) -> Vec<&str> {
        let mut segments: Vec<&str> = path.split(Self::DELIMITER).collect();
        if path.is_empty() {
            return segments;
        }

        while segments.last().is_some_and(|segment| segment.is_empty()) {
            segments.pop();
        }

        segments
    }

    /// Validates a single segment name
    ///
    /// Returns true if the name can be used for a directory.
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && !name.contains(&Self::INVALID_CHARS[..])
    }

    /// Returns the segments that are not valid names, in original order
    pub fn invalid_names(segments: &[&str]) -> Vec<String> {
        segments
            .iter()
            .filter(|segment| !Self::is_valid_name(segment))
            .map(|segment| segment.to_string())
            .collect()
    }

    /// Splits a path that is about to be created and validates every segment
    ///
    /// An empty path, a path with no segments, or a path with any invalid
    /// segment is rejected. The error lists the offending segments.
    pub fn validate_new_path(path: &str) -> Result<Vec<&str>, PathError> {
        if path.is_empty() {
            return Err(PathError::InvalidName(Vec::new()));
        }

        let segments = Self::split_path(path);
        let invalid = Self::invalid_names(&segments);
        if !invalid.is_empty() || segments.is_empty() {
            return Err(PathError::InvalidName(invalid));
        }

        Ok(segments)
    }
}
