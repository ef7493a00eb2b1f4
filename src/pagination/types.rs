//! Hypermedia page types
//!
//! A `HyperPage` bundles one window of records with the navigation
//! metadata a client needs to walk the rest of the dataset.

use super::range::index_range;
use crate::types::{PageNumber, PageSize, Record};
use serde::{Deserialize, Serialize};

/// One page of records plus navigation metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HyperPage {
    /// Number of records actually returned (not the requested window width)
    pub page_size: usize,
    /// Requested page number
    pub page: PageNumber,
    /// Records on this page
    pub data: Vec<Record>,
    /// Following page, absent once the window reaches the last record
    pub next_page: Option<PageNumber>,
    /// Preceding page, absent on page 1
    pub prev_page: Option<PageNumber>,
    /// Number of pages needed to cover the dataset
    pub total_pages: usize,
    /// Window width the page was requested with
    #[serde(skip)]
    pub requested_page_size: PageSize,
}

impl HyperPage {
    /// Assemble hypermedia metadata around an already sliced page.
    ///
    /// `next_page` is decided by the unclamped end offset of the window,
    /// never by the length of `data`.
    pub fn assemble(
        page: PageNumber,
        page_size: PageSize,
        data: Vec<Record>,
        total_items: usize,
    ) -> Self {
        let (_, end) = index_range(page, page_size);

        Self {
            page_size: data.len(),
            page,
            data,
            next_page: (end < total_items).then(|| page.next()),
            prev_page: page.prev(),
            total_pages: total_pages(total_items, page_size),
            requested_page_size: page_size,
        }
    }

    /// Check if this page holds no records
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if there is a page after this one
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    /// Check if there is a page before this one
    pub fn has_prev(&self) -> bool {
        self.prev_page.is_some()
    }

    /// Build navigation URLs relative to `base_url`
    pub fn links(&self, base_url: &str) -> PageLinks {
        let size = self.requested_page_size;
        let url = |page: PageNumber| page_url(base_url, page, size);

        PageLinks {
            self_link: url(self.page),
            first: url(PageNumber::FIRST),
            last: PageNumber::new(self.total_pages).map(url),
            next: self.next_page.map(url),
            prev: self.prev_page.map(url),
        }
    }
}

/// Number of pages needed to cover `total_items` (ceiling division)
pub fn total_pages(total_items: usize, page_size: PageSize) -> usize {
    total_items.div_ceil(page_size.get())
}

/// Navigation URLs for a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    /// URL of the current page
    #[serde(rename = "self")]
    pub self_link: String,
    /// URL of page 1
    pub first: String,
    /// URL of the final page (absent for an empty dataset)
    pub last: Option<String>,
    /// URL of the next page
    pub next: Option<String>,
    /// URL of the previous page
    pub prev: Option<String>,
}

impl PageLinks {
    /// Render as an RFC 5988 `Link` header value
    ///
    /// Format: `<url>; rel="next", <url>; rel="prev"`
    pub fn link_header(&self) -> String {
        let mut parts = Vec::with_capacity(5);
        parts.push(format!("<{}>; rel=\"self\"", self.self_link));
        if let Some(next) = &self.next {
            parts.push(format!("<{next}>; rel=\"next\""));
        }
        if let Some(prev) = &self.prev {
            parts.push(format!("<{prev}>; rel=\"prev\""));
        }
        parts.push(format!("<{}>; rel=\"first\"", self.first));
        if let Some(last) = &self.last {
            parts.push(format!("<{last}>; rel=\"last\""));
        }
        parts.join(", ")
    }
}

fn page_url(base_url: &str, page: PageNumber, page_size: PageSize) -> String {
    let sep = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{sep}page={page}&page_size={page_size}")
}
