//! CLI module
//!
//! Command-line interface for paging through a dataset.
//!
//! # Commands
//!
//! - `range` - Show the offsets a page covers
//! - `page` - Print the records on a page
//! - `hyper` - Print a page with navigation metadata
//! - `info` - Show dataset size and page count
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve, serve_with_listener, AppState, SharedPager};
