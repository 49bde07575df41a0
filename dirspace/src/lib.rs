//! # dirspace Host Runtime
//!
//! This crate provides the host that drives the dirspace console.
//!
//! ## Philosophy
//!
//! - **Host owns I/O**: The console and namespace never print
//! - **Input is explicit lines**: From a terminal or a command script
//! - **Deterministic mode is first-class**: Scripts replay identically
//!
//! ## Responsibilities
//!
//! The host runtime:
//! - Loads configuration from defaults, a JSON file and the command line
//! - Runs the prompt loop (read → eval → print)
//! - Replays command scripts with optional echo
//! - Installs the log subscriber
//!
//! ## Non-Responsibilities
//!
//! The host does NOT:
//! - Persist the tree between runs
//! - Interpret commands itself (the console does)

pub mod command_script;
pub mod config;
pub mod runtime;

pub use command_script::{CommandScript, CommandScriptError};
pub use config::{ConfigError, HostRuntimeConfig};
pub use runtime::{HostRuntime, HostRuntimeError};
