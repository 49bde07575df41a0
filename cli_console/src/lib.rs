//! # CLI Console
//!
//! The line-oriented front-end of the dirspace namespace.
//!
//! A line goes through [`CommandParser`] and then [`CommandHandler::eval`],
//! which always produces reply text except for `QUIT`/`EXIT`, which yield
//! [`EvalOutcome::Stop`]. The console never reads or prints on its own;
//! the host owns the terminal.

pub mod commands;
pub mod handler;

pub use commands::{CommandError, CommandLine, CommandParser, ConsoleCommand};
pub use handler::{CommandHandler, EvalOutcome, HELP_TEXT};
