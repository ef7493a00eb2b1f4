// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # hyperpage
//!
//! Deterministic, offset-based pagination over an in-memory dataset,
//! with hypermedia metadata describing how the dataset is partitioned.
//!
//! ## Features
//!
//! - **Offset Arithmetic**: `index_range` maps a 1-indexed page onto record offsets
//! - **Cached Dataset**: rows are read from the source once and shared read-only
//! - **Hypermedia Pages**: next/prev page, total pages, RFC 5988 `Link` headers
//! - **Typed Parameters**: page numbers and sizes are validated at the boundary
//! - **CLI and HTTP**: page through a CSV file from the shell or over REST
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hyperpage::source::CsvSource;
//! use hyperpage::{PageNumber, PageSize, PaginationServer, Result};
//!
//! fn main() -> Result<()> {
//!     let server = PaginationServer::new(CsvSource::new("Popular_Baby_Names.csv"));
//!
//!     let hyper = server.get_hyper(PageNumber::new(3).unwrap(), PageSize::DEFAULT)?;
//!     println!("{} of {} pages", hyper.page, hyper.total_pages);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │              CLI (range/page/hyper/info)  │  HTTP (axum) │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────────────────────────────────────────────────┐
//! │  PaginationServer: OnceCell<Vec<Record>> cache           │
//! │  get_page() → Vec<Record>    get_hyper() → HyperPage     │
//! └──────────────────────────────────────────────────────────┘
//!              │                                │
//! ┌────────────────────────┐     ┌───────────────────────────┐
//! │ pagination             │     │ source                    │
//! │ index_range, HyperPage │     │ CsvSource, MemorySource   │
//! └────────────────────────┘     └───────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Offset arithmetic and hypermedia metadata
pub mod pagination;

/// Dataset sources (CSV, in-memory)
pub mod source;

/// Cached pagination server
pub mod server;

/// Service configuration
pub mod config;

/// Command-line interface and HTTP mode
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{load_config, load_config_from_str, AppConfig};
pub use pagination::{index_range, HyperPage, PageLinks};
pub use server::PaginationServer;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
