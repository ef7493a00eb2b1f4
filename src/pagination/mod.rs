//! Pagination module
//!
//! Offset arithmetic and hypermedia metadata.
//!
//! # Overview
//!
//! `index_range` maps a page request onto record offsets. `HyperPage`
//! wraps a sliced page with next/prev linkage and the total page count.
//! Neither touches a dataset; the `server` module does the slicing.

mod range;
mod types;

pub(crate) use range::clamp_range;
pub use range::index_range;
pub use types::{total_pages, HyperPage, PageLinks};
