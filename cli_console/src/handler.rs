//! Console command handler
//!
//! Evaluates parsed commands against a namespace and formats the replies.

use crate::commands::{CommandLine, CommandParser, ConsoleCommand};
use services_logger::{LogEntry, LogLevel};
use services_namespace::{NamespaceOperations, NamespaceService};

/// Command summary printed by `HELP`
pub const HELP_TEXT: &str = "\
Commands:
CREATE          creates a directory. (CREATE dir)
DELETE          deletes a directory. (DELETE dir)
LIST            list all existing directories.
MOVE            move a directory (MOVE src dest)
HELP            show this summary.
QUIT            leave the console (also EXIT).
";

/// Result of evaluating one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalOutcome {
    /// Print the text and keep reading
    Continue(String),
    /// The user asked to leave
    Stop,
}

/// Console command handler
pub struct CommandHandler {
    /// Namespace the commands operate on
    pub namespace: NamespaceService,
}

impl CommandHandler {
    /// Creates a new command handler with an empty namespace
    pub fn new() -> Self {
        Self::with_namespace(NamespaceService::new())
    }

    /// Creates a command handler over an existing namespace
    pub fn with_namespace(namespace: NamespaceService) -> Self {
        Self { namespace }
    }

    /// Evaluates one raw input line
    ///
    /// Every failure is turned into reply text; only `QUIT`/`EXIT` stop.
    pub fn eval(&mut self, input: &str) -> EvalOutcome {
        let CommandLine { command, argument } = match CommandParser::parse(input) {
            Ok(line) => line,
            Err(e) => {
                let message = e.to_string();
                let (keyword, argument) = CommandParser::split_line(input);
                Self::record(&keyword, argument, Err(message.as_str()));
                return EvalOutcome::Continue(message);
            }
        };

        let result = match command {
            ConsoleCommand::Create { path } => self.create(&path),
            ConsoleCommand::Delete { path } => self.delete(&path),
            ConsoleCommand::Move { src, dest } => self.move_dir(&src, &dest, &argument),
            ConsoleCommand::List => Ok(self.list()),
            ConsoleCommand::Help => Ok(HELP_TEXT.to_string()),
            ConsoleCommand::Quit => {
                Self::record("QUIT", &argument, Ok(""));
                return EvalOutcome::Stop;
            }
        };

        let keyword = CommandParser::split_line(input).0;
        Self::record(&keyword, &argument, result.as_deref().map_err(String::as_str));

        match result {
            Ok(reply) | Err(reply) => EvalOutcome::Continue(reply),
        }
    }

    /// Creates a directory
    ///
    /// Example: `CREATE fruits/apples`
    pub fn create(&mut self, path: &str) -> Result<String, String> {
        self.namespace
            .create(path)
            .map_err(|e| e.to_string())?;

        Ok(format!("CREATE {}", path))
    }

    /// Deletes a directory
    ///
    /// Example: `DELETE fruits/apples`
    pub fn delete(&mut self, path: &str) -> Result<String, String> {
        self.namespace
            .delete(path)
            .map_err(|e| format!("Cannot delete {} - {}", path, e))?;

        Ok(format!("DELETE {}", path))
    }

    /// Moves a directory
    ///
    /// Example: `MOVE grains/squash vegetables`
    pub fn move_dir(&mut self, src: &str, dest: &str, argument: &str) -> Result<String, String> {
        self.namespace
            .move_dir(src, dest)
            .map_err(|e| e.to_string())?;

        Ok(format!("MOVE {}", argument))
    }

    /// Lists the tree under a `LIST` header line
    ///
    /// Example: `LIST`
    pub fn list(&self) -> String {
        let tree = self.namespace.list();
        if tree.is_empty() {
            "LIST".to_string()
        } else {
            format!("LIST\n{}", tree)
        }
    }

    /// Records the outcome of one command as a structured log entry
    fn record(keyword: &str, argument: &str, outcome: Result<&str, &str>) {
        let entry = match outcome {
            Ok(_) => LogEntry::new(LogLevel::Info, "command evaluated"),
            Err(reason) => {
                LogEntry::new(LogLevel::Warn, "command failed").with_field("reason", reason)
            }
        };

        entry
            .with_source("cli_console")
            .with_field("command", keyword)
            .with_field("argument", argument)
            .emit();
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
