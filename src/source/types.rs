//! Dataset source trait
//!
//! Defines the seam between the pagination server and wherever rows live.

use crate::error::Result;
use crate::types::Record;

/// Something that can produce the raw rows of a dataset
///
/// `load` returns every row in source order, header row included.
/// The pagination server decides whether the first row is dropped.
pub trait DatasetSource: Send + Sync {
    /// Human-readable name used in logs and errors
    fn name(&self) -> &str;

    /// Read every row from the source
    fn load(&self) -> Result<Vec<Record>>;
}

impl<S: DatasetSource + ?Sized> DatasetSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load(&self) -> Result<Vec<Record>> {
        (**self).load()
    }
}
