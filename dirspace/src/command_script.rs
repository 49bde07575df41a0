//! # Command Script Parser
//!
//! Provides a line-based command format for deterministic runs and demos.
//!
//! ## Format
//!
//! Each line is one console command, exactly as it would be typed:
//! - Commands: `CREATE fruits/apples`, `MOVE a b`, `LIST`
//! - Comments: `# This is a comment`
//! - Blank lines are ignored
//!
//! ## Example
//!
//! ```text
//! # Build a small tree
//! CREATE fruits/apples
//! CREATE foods
//! MOVE fruits foods
//! LIST
//! ```

use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Command script error types
#[derive(Debug, Error)]
pub enum CommandScriptError {
    #[error("Empty script")]
    EmptyScript,

    #[error("Failed to read script {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
}

/// Command script
///
/// Holds the command lines of a script in the order they run.
#[derive(Debug, Clone, Default)]
pub struct CommandScript {
    lines: VecDeque<String>,
}

impl CommandScript {
    /// Creates a new empty command script
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, CommandScriptError> {
        let lines: VecDeque<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        if lines.is_empty() {
            return Err(CommandScriptError::EmptyScript);
        }

        Ok(Self { lines })
    }

    /// Reads and parses a script file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CommandScriptError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CommandScriptError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_text(&text)
    }

    /// Returns the next command line, if any
    pub fn next_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }

    /// Returns true if the script has more lines
    pub fn has_more(&self) -> bool {
        !self.lines.is_empty()
    }

    /// Returns the number of remaining lines
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}
