//! # dirspace
//!
//! Main entry point for the dirspace console.

use dirspace::{HostRuntime, HostRuntimeConfig};
use std::env;
use std::path::PathBuf;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("dirspace");

    let config = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(program);
        process::exit(1);
    });

    services_logger::init(&config.log_filter);

    let mut runtime = HostRuntime::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to create runtime: {}", e);
        process::exit(1);
    });

    if let Err(e) = runtime.run() {
        eprintln!("Runtime error: {}", e);
        process::exit(1);
    }
}

/// Builds the configuration: defaults, then `--config`, then the other options
fn parse_args(args: &[String]) -> Result<HostRuntimeConfig, String> {
    let mut config = match config_path(args)? {
        Some(path) => HostRuntimeConfig::from_json_file(path).map_err(|e| e.to_string())?,
        None => HostRuntimeConfig::default(),
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                // Already applied
                i += 1;
            }
            "--script" | "-s" => {
                i += 1;
                let value = args.get(i).ok_or("Missing value for --script")?;
                config.script = Some(PathBuf::from(value));
            }
            "--max-commands" => {
                i += 1;
                let value = args.get(i).ok_or("Missing value for --max-commands")?;
                config.max_commands = value
                    .parse()
                    .map_err(|_| format!("Invalid max-commands value: {}", value))?;
            }
            "--log" => {
                i += 1;
                let value = args.get(i).ok_or("Missing value for --log")?;
                config.log_filter = value.clone();
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Finds the value of the last `--config` option
fn config_path(args: &[String]) -> Result<Option<&str>, String> {
    let mut path = None;
    let mut i = 1;

    while i < args.len() {
        if matches!(args[i].as_str(), "--config" | "-c") {
            i += 1;
            let value = args.get(i).ok_or("Missing value for --config")?;
            path = Some(value.as_str());
        }
        i += 1;
    }

    Ok(path)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -s, --script <FILE>      Run commands from a script instead of the terminal");
    eprintln!("  -c, --config <FILE>      Load settings from a JSON file");
    eprintln!("  --max-commands <N>       Maximum commands to evaluate (0 = unlimited)");
    eprintln!("  --log <FILTER>           Log filter when RUST_LOG is unset (default: warn)");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --script demos/groceries.dirs", program);
    eprintln!("  {} --log debug --max-commands 100", program);
}
