//! Pagination server implementation
//!
//! Owns a dataset source and a once-initialized cache of its rows.

use crate::error::Result;
use crate::pagination::{clamp_range, index_range, total_pages, HyperPage};
use crate::source::DatasetSource;
use crate::types::{PageNumber, PageSize, Record};
use once_cell::sync::OnceCell;

/// Serves fixed-size pages over a lazily loaded dataset
///
/// The dataset is read from the source at most once. Concurrent first
/// accesses block on a single load; afterwards reads take no lock.
/// A failed load leaves the cache empty, so the next call retries.
#[derive(Debug)]
pub struct PaginationServer<S> {
    /// Where rows come from
    source: S,
    /// Whether row 0 of the source is a header to drop
    skip_header: bool,
    /// Cached rows (header removed)
    dataset: OnceCell<Vec<Record>>,
}

impl<S: DatasetSource> PaginationServer<S> {
    /// Create a server whose source starts with a header row
    pub fn new(source: S) -> Self {
        Self::with_header(source, true)
    }

    /// Create a server whose source has no header row
    pub fn without_header(source: S) -> Self {
        Self::with_header(source, false)
    }

    /// Create a server, choosing whether row 0 of the source is a header
    pub fn with_header(source: S, has_header: bool) -> Self {
        Self {
            source,
            skip_header: has_header,
            dataset: OnceCell::new(),
        }
    }

    /// Create a server and load the dataset immediately
    pub fn eager(source: S, has_header: bool) -> Result<Self> {
        let server = Self::with_header(source, has_header);
        server.preload()?;
        Ok(server)
    }

    /// The underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The cached dataset, loading it on first access
    pub fn dataset(&self) -> Result<&[Record]> {
        self.dataset
            .get_or_try_init(|| self.load())
            .map(Vec::as_slice)
    }

    /// Load the dataset now; returns the number of records
    pub fn preload(&self) -> Result<usize> {
        self.dataset().map(<[Record]>::len)
    }

    /// Check if the dataset has been loaded
    pub fn is_loaded(&self) -> bool {
        self.dataset.get().is_some()
    }

    /// Number of records in the dataset
    pub fn total_items(&self) -> Result<usize> {
        self.preload()
    }

    /// Number of pages of `page_size` needed to cover the dataset
    pub fn total_pages(&self, page_size: PageSize) -> Result<usize> {
        Ok(total_pages(self.total_items()?, page_size))
    }

    /// Records on one page.
    ///
    /// A page starting past the end yields an empty result, not an error.
    /// The tail page may be shorter than `page_size`.
    pub fn get_page(&self, page: PageNumber, page_size: PageSize) -> Result<Vec<Record>> {
        let data = self.dataset()?;
        let range = index_range(page, page_size);

        let records = match clamp_range(range, data.len()) {
            Some((start, end)) => data[start..end].to_vec(),
            None => Vec::new(),
        };

        tracing::debug!(
            page = page.get(),
            page_size = page_size.get(),
            start = range.0,
            end = range.1,
            returned = records.len(),
            "Sliced page"
        );

        Ok(records)
    }

    /// Records on one page plus navigation metadata
    pub fn get_hyper(&self, page: PageNumber, page_size: PageSize) -> Result<HyperPage> {
        let data = self.get_page(page, page_size)?;
        let total_items = self.total_items()?;
        Ok(HyperPage::assemble(page, page_size, data, total_items))
    }

    /// `get_page` for untyped integers; rejects non-positive values before any I/O
    pub fn get_page_raw(&self, page: i64, page_size: i64) -> Result<Vec<Record>> {
        let (page, page_size) = validate(page, page_size)?;
        self.get_page(page, page_size)
    }

    /// `get_hyper` for untyped integers; rejects non-positive values before any I/O
    pub fn get_hyper_raw(&self, page: i64, page_size: i64) -> Result<HyperPage> {
        let (page, page_size) = validate(page, page_size)?;
        self.get_hyper(page, page_size)
    }

    fn load(&self) -> Result<Vec<Record>> {
        tracing::info!(source = self.source.name(), "Loading dataset");

        let mut rows = self.source.load().inspect_err(|e| {
            tracing::warn!(source = self.source.name(), error = %e, "Dataset load failed");
        })?;

        if self.skip_header && !rows.is_empty() {
            rows.remove(0);
        }

        tracing::info!(
            source = self.source.name(),
            records = rows.len(),
            "Dataset loaded"
        );
        Ok(rows)
    }
}

fn validate(page: i64, page_size: i64) -> Result<(PageNumber, PageSize)> {
    Ok((
        PageNumber::try_from_i64(page)?,
        PageSize::try_from_i64(page_size)?,
    ))
}
