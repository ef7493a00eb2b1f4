//! Common types used throughout hyperpage
//!
//! This module contains the record alias and the strongly typed
//! page parameters accepted at every API boundary.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

// ============================================================================
// Type Aliases
// ============================================================================

/// A single dataset row. Fields are never inspected by the engine.
pub type Record = Vec<String>;

// ============================================================================
// Page Number
// ============================================================================

/// A 1-indexed page number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    /// The first page
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Create a page number, returning `None` for zero
    pub fn new(page: usize) -> Option<Self> {
        NonZeroUsize::new(page).map(Self)
    }

    /// Validate a loosely typed page number
    pub fn try_from_i64(page: i64) -> Result<Self> {
        usize::try_from(page)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| Error::invalid_argument("page", page))
    }

    /// Get the raw page number
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// The page before this one, if any
    pub fn prev(self) -> Option<Self> {
        Self::new(self.get() - 1)
    }

    /// The page after this one
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for PageNumber {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::try_from_i64(value)
    }
}

// ============================================================================
// Page Size
// ============================================================================

/// Number of records per page (always at least one)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Page size used when the caller does not pick one
    pub const DEFAULT: Self = Self(match NonZeroUsize::new(10) {
        Some(n) => n,
        None => unreachable!(),
    });

    /// Create a page size, returning `None` for zero
    pub fn new(size: usize) -> Option<Self> {
        NonZeroUsize::new(size).map(Self)
    }

    /// Validate a loosely typed page size
    pub fn try_from_i64(size: i64) -> Result<Self> {
        usize::try_from(size)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| Error::invalid_argument("page_size", size))
    }

    /// Get the raw page size
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for PageSize {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::try_from_i64(value)
    }
}
