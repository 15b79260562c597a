//! Command-line interface entry point for `musicgraph`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use music_graph::config::Config;
use music_graph::exercises::Section;
use music_graph::info;
use music_graph::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let ok = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut config, &defaults),
        Command::Exercises { section } => {
            commands::exercises::run(section.map_or(Section::All, Section::from))
        }
        Command::Path {
            file,
            from,
            to,
            order,
            cheapest,
        } => commands::network::run_path(
            &file,
            &from,
            &to,
            order.map(Into::into),
            cheapest,
            &config,
        ),
        Command::Components { file } => commands::network::run_components(&file, &config),
        Command::Network {
            file,
            artist,
            release,
            connect,
        } => commands::network::run_network(
            &file,
            artist.as_deref(),
            release.as_deref(),
            connect.as_deref(),
            &config,
        ),
        Command::Report {
            file,
            output,
            format,
        } => commands::report::run(&file, output.as_deref(), &format, &config),
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
