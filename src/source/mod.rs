//! Dataset source module
//!
//! Supports: CSV files, in-memory rows
//!
//! # Overview
//!
//! A source produces the raw rows of a dataset in a stable order. It is
//! read at most once per pagination server; the server owns the cache.

mod sources;
mod types;

pub use sources::{parse_csv, CsvSource, MemorySource};
pub use types::DatasetSource;
