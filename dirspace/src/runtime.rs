//! # Host Runtime
//!
//! The read → eval → print loop around the console.

use crate::command_script::{CommandScript, CommandScriptError};
use crate::config::HostRuntimeConfig;
use cli_console::{CommandHandler, EvalOutcome};
use services_logger::{LogEntry, LogLevel};
use services_namespace::NamespaceService;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Host runtime error types
#[derive(Debug, Error)]
pub enum HostRuntimeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Script error: {0}")]
    Script(#[from] CommandScriptError),
}

/// Host runtime
pub struct HostRuntime {
    /// Configuration
    config: HostRuntimeConfig,
    /// Console the lines are evaluated by
    handler: CommandHandler,
    /// Command script (script mode only)
    script: Option<CommandScript>,
    /// Commands evaluated so far
    commands: usize,
}

impl HostRuntime {
    /// Creates a new host runtime
    ///
    /// Loads the configured script up front so a missing or empty script
    /// fails before anything is printed.
    pub fn new(config: HostRuntimeConfig) -> Result<Self, HostRuntimeError> {
        let script = match &config.script {
            Some(path) => Some(CommandScript::from_file(path)?),
            None => None,
        };

        Ok(Self {
            config,
            handler: CommandHandler::new(),
            script,
            commands: 0,
        })
    }

    /// Creates a runtime that replays an already parsed script
    pub fn with_script(config: HostRuntimeConfig, script: CommandScript) -> Self {
        Self {
            config,
            handler: CommandHandler::new(),
            script: Some(script),
            commands: 0,
        }
    }

    /// Runs against the process terminal
    pub fn run(&mut self) -> Result<(), HostRuntimeError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), &mut stdout.lock())
    }

    /// Runs the session, reading from `input` and printing to `output`
    ///
    /// Returns when:
    /// - QUIT/EXIT is evaluated
    /// - Max commands reached (if configured)
    /// - Input or script exhausted
    pub fn run_with<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> Result<(), HostRuntimeError> {
        match self.script.take() {
            Some(script) => self.run_script(script, output)?,
            None => self.run_interactive(input, output)?,
        }

        if !self.config.farewell.is_empty() {
            writeln!(output, "{}", self.config.farewell)?;
        }
        output.flush()?;

        LogEntry::new(LogLevel::Debug, "session finished")
            .with_source("dirspace")
            .with_field("commands", self.commands.to_string())
            .emit();

        Ok(())
    }

    fn run_interactive<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> Result<(), HostRuntimeError> {
        if !self.config.banner.is_empty() {
            writeln!(output, "{}", self.config.banner)?;
        }

        let mut line = String::new();
        while !self.limit_reached() {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                // End of input ends the session like QUIT
                writeln!(output)?;
                break;
            }

            if !self.eval_line(line.trim_end_matches(&['\r', '\n'][..]), output)? {
                break;
            }
        }

        Ok(())
    }

    fn run_script<W: Write>(
        &mut self,
        mut script: CommandScript,
        output: &mut W,
    ) -> Result<(), HostRuntimeError> {
        while !self.limit_reached() {
            let Some(line) = script.next_line() else {
                break;
            };

            if self.config.echo_commands {
                writeln!(output, "{}{}", self.config.prompt, line)?;
            }

            if !self.eval_line(&line, output)? {
                break;
            }
        }

        Ok(())
    }

    /// Evaluates one line and prints the reply
    ///
    /// Returns false once the console asks to stop.
    fn eval_line<W: Write>(
        &mut self,
        line: &str,
        output: &mut W,
    ) -> Result<bool, HostRuntimeError> {
        self.commands += 1;

        match self.handler.eval(line) {
            EvalOutcome::Continue(reply) => {
                writeln!(output, "{}", reply)?;
                Ok(true)
            }
            EvalOutcome::Stop => Ok(false),
        }
    }

    fn limit_reached(&self) -> bool {
        self.config.max_commands > 0 && self.commands >= self.config.max_commands
    }

    /// Returns the number of commands evaluated
    pub fn command_count(&self) -> usize {
        self.commands
    }

    /// Returns the namespace the session operates on
    pub fn namespace(&self) -> &NamespaceService {
        &self.handler.namespace
    }

    /// Returns the active configuration
    pub fn config(&self) -> &HostRuntimeConfig {
        &self.config
    }
}
