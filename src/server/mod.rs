//! Pagination server module
//!
//! Caches a dataset from a source and serves pages and hypermedia pages
//! over it.

mod pager;

pub use pager::PaginationServer;

#[cfg(test)]
mod pager_tests;
