//! Page index arithmetic
//!
//! Maps a 1-indexed page and a page size onto a half-open offset range
//! in the record sequence.

use crate::types::{PageNumber, PageSize};

/// Compute the `[start, end)` offsets covered by a page.
///
/// `start = (page - 1) * page_size` and `end = start + page_size`. The range
/// is not clamped to any dataset length; callers truncate when slicing.
/// Offsets saturate at `usize::MAX` instead of wrapping.
pub fn index_range(page: PageNumber, page_size: PageSize) -> (usize, usize) {
    let start = (page.get() - 1).saturating_mul(page_size.get());
    let end = start.saturating_add(page_size.get());
    (start, end)
}

/// Clamp a page range to a sequence of `len` items.
///
/// Returns `None` when the page starts at or beyond the end.
pub(crate) fn clamp_range((start, end): (usize, usize), len: usize) -> Option<(usize, usize)> {
    if start >= len {
        None
    } else {
        Some((start, end.min(len)))
    }
}
