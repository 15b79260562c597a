//! CLI argument definitions for `musicgraph`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use music_graph::config::ConfigOverrides;
use music_graph::exercises::Section;
use music_graph::logger::Level;
use music_graph::models::SearchOrder;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Successful checks and results
    Success,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Success => Self::Success,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// Path search order argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum OrderArg {
    /// Breadth-first: fewest hops
    Bfs,
    /// Depth-first
    Dfs,
}

impl From<OrderArg> for SearchOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Bfs => Self::BreadthFirst,
            OrderArg::Dfs => Self::DepthFirst,
        }
    }
}

/// Exercise section argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum SectionArg {
    /// Linked lists
    List,
    /// Binary trees and binary search trees
    Tree,
    /// Path search and connected groups
    Graph,
    /// Music network queries
    Network,
    /// Every section
    All,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::List => Self::List,
            SectionArg::Tree => Self::Tree,
            SectionArg::Graph => Self::Graph,
            SectionArg::Network => Self::Network,
            SectionArg::All => Self::All,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `networks_dir`, `order`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Run the built-in list, tree, graph and network exercises.
    Exercises {
        /// Section to run (defaults to all)
        #[arg(value_enum, value_name = "SECTION")]
        section: Option<SectionArg>,
    },
    /// Find a path between two entities of a network file.
    Path {
        /// Network TOML file (bare names are looked up in the networks directory)
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Entity to start from
        #[arg(value_name = "FROM")]
        from: String,
        /// Entity to reach
        #[arg(value_name = "TO")]
        to: String,
        /// Search order (defaults to config `order`)
        #[arg(long, value_enum)]
        order: Option<OrderArg>,
        /// Find the path with the lowest total edge weight instead
        #[arg(long, conflicts_with = "order")]
        cheapest: bool,
    },
    /// List the connected groups of a network file.
    Components {
        /// Network TOML file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Summarise a network file and answer entity queries.
    Network {
        /// Network TOML file
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Show groups, releases and collaborators of an artist
        #[arg(long, value_name = "NAME")]
        artist: Option<String>,
        /// Show personnel, studios and appearances of a release
        #[arg(long, value_name = "NAME")]
        release: Option<String>,
        /// Show how two entities are connected, ignoring edge direction
        #[arg(long, num_args = 2, value_names = ["A", "B"])]
        connect: Option<Vec<String>>,
    },
    /// Generate a report for a network file.
    ///
    /// Creates a formatted report with counts, tables and a diagram of the network.
    Report {
        /// Network TOML file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output file path (optional; defaults to the reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "musicgraph",
    about = "Lists, trees, graphs and music networks from the command line",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|success|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config networks directory
    #[arg(long = "config-networks-dir", value_name = "DIR")]
    pub config_networks_dir: Option<PathBuf>,

    /// Override config networks directory (short form)
    #[arg(long = "networks-dir", value_name = "DIR")]
    pub networks_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Override config search order
    #[arg(long = "search-order", value_enum)]
    pub search_order: Option<OrderArg>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--networks-dir`) take precedence over long-form flags
    /// (e.g., `--config-networks-dir`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            networks_dir: path_string(self.networks_dir.as_ref())
                .or_else(|| path_string(self.config_networks_dir.as_ref())),
            reports_dir: path_string(self.reports_dir.as_ref())
                .or_else(|| path_string(self.config_reports_dir.as_ref())),
            search_order: self
                .search_order
                .map(|order| SearchOrder::from(order).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Success.to_string(), "success");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Success), Level::Success);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = parse(&["musicgraph", "exercises"]);
        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.networks_dir.is_none());
        assert!(overrides.reports_dir.is_none());
        assert!(overrides.search_order.is_none());
    }

    #[test]
    fn test_short_form_wins_over_long_form() {
        let cli = parse(&[
            "musicgraph",
            "--config-networks-dir",
            "/long",
            "--networks-dir",
            "/short",
            "--config-reports-dir",
            "/reports",
            "--search-order",
            "dfs",
            "--config-verbose",
            "yes",
            "--config-level",
            "warn",
            "components",
            "jazz.toml",
        ]);
        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.networks_dir.as_deref(), Some("/short"));
        assert_eq!(overrides.reports_dir.as_deref(), Some("/reports"));
        assert_eq!(overrides.search_order.as_deref(), Some("dfs"));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_path_command() {
        let cli = parse(&[
            "musicgraph",
            "path",
            "jazz.toml",
            "Bill Evans",
            "Atlantic Studios",
            "--order",
            "dfs",
        ]);
        match cli.command {
            Command::Path {
                from,
                to,
                order,
                cheapest,
                ..
            } => {
                assert_eq!(from, "Bill Evans");
                assert_eq!(to, "Atlantic Studios");
                assert_eq!(order, Some(OrderArg::Dfs));
                assert!(!cheapest);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(Cli::try_parse_from(["musicgraph", "path", "f", "a", "b", "--order", "bfs", "--cheapest"]).is_err());
    }

    #[test]
    fn test_network_connect_takes_two_names() {
        let cli = parse(&["musicgraph", "network", "jazz.toml", "--connect", "A", "B"]);
        match cli.command {
            Command::Network { connect, .. } => {
                assert_eq!(connect, Some(vec!["A".to_string(), "B".to_string()]));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(Cli::try_parse_from(["musicgraph", "network", "f", "--connect", "A"]).is_err());
    }

    #[test]
    fn test_exercises_section_optional() {
        match parse(&["musicgraph", "exercises"]).command {
            Command::Exercises { section } => assert!(section.is_none()),
            other => panic!("unexpected command: {other:?}"),
        }
        match parse(&["musicgraph", "exercises", "tree"]).command {
            Command::Exercises { section } => {
                assert_eq!(section.map(Section::from), Some(Section::Tree));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_report_defaults_to_markdown() {
        match parse(&["musicgraph", "report", "jazz.toml"]).command {
            Command::Report { format, output, .. } => {
                assert_eq!(format, "markdown");
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
