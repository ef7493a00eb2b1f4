//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hypermedia pagination over a cached CSV dataset
#[derive(Parser, Debug)]
#[command(name = "hyperpage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dataset file (CSV, first row is a header)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Field delimiter of the dataset file
    #[arg(long, global = true)]
    pub delimiter: Option<char>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the start and end offsets of a page
    Range {
        /// Page number (1-indexed)
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Records per page
        #[arg(short = 's', long, default_value = "10", allow_negative_numbers = true)]
        page_size: i64,
    },

    /// Print the records on a page
    Page {
        /// Page number (1-indexed)
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Records per page (defaults to the configured page size)
        #[arg(short = 's', long, allow_negative_numbers = true)]
        page_size: Option<i64>,
    },

    /// Print a page with hypermedia metadata
    Hyper {
        /// Page number (1-indexed)
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Records per page (defaults to the configured page size)
        #[arg(short = 's', long, allow_negative_numbers = true)]
        page_size: Option<i64>,
    },

    /// Show dataset size and page count
    Info {
        /// Records per page (defaults to the configured page size)
        #[arg(short = 's', long, allow_negative_numbers = true)]
        page_size: Option<i64>,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Human-readable output
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hyper() {
        let cli = Cli::parse_from([
            "hyperpage", "--data", "names.csv", "hyper", "--page", "3", "-s", "10",
        ]);
        assert_eq!(cli.data, Some(PathBuf::from("names.csv")));
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Hyper { page, page_size } => {
                assert_eq!(page, 3);
                assert_eq!(page_size, Some(10));
            }
            other => panic!("Expected Hyper, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_page() {
        let cli = Cli::parse_from(["hyperpage", "page", "--page", "-2"]);
        match cli.command {
            Commands::Page { page, page_size } => {
                assert_eq!(page, -2);
                assert!(page_size.is_none());
            }
            other => panic!("Expected Page, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["hyperpage", "info", "--format", "pretty", "--delimiter", ";"]);
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert_eq!(cli.delimiter, Some(';'));
        assert!(matches!(cli.command, Commands::Info { page_size: None }));
    }

    #[test]
    fn test_parse_range_defaults() {
        let cli = Cli::parse_from(["hyperpage", "range"]);
        assert!(matches!(
            cli.command,
            Commands::Range {
                page: 1,
                page_size: 10
            }
        ));
    }
}
