//! # Console Commands
//!
//! Turns one raw input line into a typed command.
//!
//! ## Command Set
//!
//! - `CREATE <path>` - Create a directory (and missing ancestors)
//! - `DELETE <path>` - Delete a directory and its subtree
//! - `MOVE <src> <dest>` - Move a directory under another one
//! - `LIST` - Print the whole tree
//! - `HELP` - Print the command summary
//! - `QUIT` / `EXIT` - Leave the console
//!
//! Keywords are case-insensitive. Everything after the first run of
//! whitespace is the argument.

use thiserror::Error;

/// Console command error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Console commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Create a directory path
    Create { path: String },

    /// Delete a directory path
    Delete { path: String },

    /// Move `src` under `dest`
    Move { src: String, dest: String },

    /// List the tree
    List,

    /// Show help
    Help,

    /// Leave the console
    Quit,
}

/// A parsed line: the command plus the argument text it was given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub command: ConsoleCommand,
    /// Argument exactly as typed (leading whitespace removed)
    pub argument: String,
}

/// Console command parser
pub struct CommandParser;

impl CommandParser {
    /// Splits a line into its uppercased keyword and its argument
    pub fn split_line(input: &str) -> (String, &str) {
        let input = input.trim();

        match input.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword.to_uppercase(), rest.trim_start()),
            None => (input.to_uppercase(), ""),
        }
    }

    /// Parses a command line
    pub fn parse(input: &str) -> Result<CommandLine, CommandError> {
        let (keyword, argument) = Self::split_line(input);

        let command = match keyword.as_str() {
            "CREATE" => ConsoleCommand::Create {
                path: argument.to_string(),
            },
            "DELETE" => ConsoleCommand::Delete {
                path: argument.to_string(),
            },
            "MOVE" => Self::parse_move(argument),
            "LIST" => ConsoleCommand::List,
            "HELP" => ConsoleCommand::Help,
            "QUIT" | "EXIT" => ConsoleCommand::Quit,
            _ => return Err(CommandError::UnknownCommand(keyword)),
        };

        Ok(CommandLine {
            command,
            argument: argument.to_string(),
        })
    }

    /// Parses the "move" argument
    ///
    /// Missing operands are left empty; the namespace reports them.
    fn parse_move(argument: &str) -> ConsoleCommand {
        let mut parts = argument.split_whitespace();
        let src = parts.next().unwrap_or_default().to_string();
        let dest = parts.next().unwrap_or_default().to_string();

        ConsoleCommand::Move { src, dest }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(input: &str) -> ConsoleCommand {
        CommandParser::parse(input).unwrap().command
    }

    #[test]
    fn test_parse_create() {
        assert_eq!(
            command("CREATE fruits/apples"),
            ConsoleCommand::Create {
                path: "fruits/apples".to_string()
            }
        );
    }

    #[test]
    fn test_parse_create_without_argument() {
        assert_eq!(
            command("CREATE"),
            ConsoleCommand::Create {
                path: String::new()
            }
        );
    }

    #[test]
    fn test_parse_keeps_spaces_inside_argument() {
        let line = CommandParser::parse("CREATE fru its").unwrap();
        assert_eq!(line.argument, "fru its");
        assert_eq!(
            line.command,
            ConsoleCommand::Create {
                path: "fru its".to_string()
            }
        );
    }

    #[test]
    fn test_parse_delete() {
        assert_eq!(
            command("DELETE fruits"),
            ConsoleCommand::Delete {
                path: "fruits".to_string()
            }
        );
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(
            command("MOVE grains/squash vegetables"),
            ConsoleCommand::Move {
                src: "grains/squash".to_string(),
                dest: "vegetables".to_string()
            }
        );
    }

    #[test]
    fn test_parse_move_missing_dest() {
        assert_eq!(
            command("MOVE grains"),
            ConsoleCommand::Move {
                src: "grains".to_string(),
                dest: String::new()
            }
        );
    }

    #[test]
    fn test_parse_move_extra_whitespace() {
        let line = CommandParser::parse("MOVE   a    b  ").unwrap();
        assert_eq!(line.argument, "a    b");
        assert_eq!(
            line.command,
            ConsoleCommand::Move {
                src: "a".to_string(),
                dest: "b".to_string()
            }
        );
    }

    #[test]
    fn test_parse_list_help_quit() {
        assert_eq!(command("LIST"), ConsoleCommand::List);
        assert_eq!(command("HELP"), ConsoleCommand::Help);
        assert_eq!(command("QUIT"), ConsoleCommand::Quit);
        assert_eq!(command("EXIT"), ConsoleCommand::Quit);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(command("list"), ConsoleCommand::List);
        assert_eq!(command("Quit"), ConsoleCommand::Quit);
        assert_eq!(
            command("create Fruits"),
            ConsoleCommand::Create {
                path: "Fruits".to_string()
            }
        );
    }

    #[test]
    fn test_parse_whitespace_handling() {
        assert_eq!(
            command("   CREATE fruits"),
            ConsoleCommand::Create {
                path: "fruits".to_string()
            }
        );
        assert_eq!(
            command("CREATE fruits   "),
            ConsoleCommand::Create {
                path: "fruits".to_string()
            }
        );
        assert_eq!(command("\tlist\t"), ConsoleCommand::List);
    }

    #[test]
    fn test_parse_empty_command() {
        assert_eq!(
            CommandParser::parse(""),
            Err(CommandError::UnknownCommand(String::new()))
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = CommandParser::parse("mkdir fruits").unwrap_err();
        assert_eq!(err, CommandError::UnknownCommand("MKDIR".to_string()));
        assert_eq!(err.to_string(), "Unknown command: MKDIR");
    }
}
