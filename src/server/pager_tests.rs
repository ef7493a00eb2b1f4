//! Tests for the pagination server

use super::PaginationServer;
use crate::error::{Error, Result};
use crate::source::{DatasetSource, MemorySource};
use crate::types::{PageNumber, PageSize, Record};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn page(n: usize) -> PageNumber {
    PageNumber::new(n).unwrap()
}

fn size(n: usize) -> PageSize {
    PageSize::new(n).unwrap()
}

fn record(i: usize) -> Record {
    vec![i.to_string(), format!("name-{i}")]
}

/// 25 records (indices 0..25) behind a header row
fn names_source() -> MemorySource {
    MemorySource::generated(
        "names",
        vec!["id".to_string(), "name".to_string()],
        25,
        record,
    )
}

fn records(range: std::ops::Range<usize>) -> Vec<Record> {
    range.map(record).collect()
}

/// Fails the first `failures` loads, then serves one record
struct FlakySource {
    failures: usize,
    attempts: AtomicUsize,
}

impl DatasetSource for FlakySource {
    fn name(&self) -> &str {
        "flaky"
    }

    fn load(&self) -> Result<Vec<Record>> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt < self.failures {
            Err(Error::source_unavailable("flaky", "not yet"))
        } else {
            Ok(vec![vec!["header".to_string()], vec!["row".to_string()]])
        }
    }
}

// ============================================================================
// Dataset Cache Tests
// ============================================================================

#[test]
fn test_dataset_drops_header() {
    let server = PaginationServer::new(names_source());
    let data = server.dataset().unwrap();

    assert_eq!(data.len(), 25);
    assert_eq!(data[0], record(0));
    assert_eq!(data[24], record(24));
}

#[test]
fn test_dataset_without_header_keeps_first_row() {
    let source = MemorySource::new("raw", records(0..3));
    let server = PaginationServer::without_header(source);

    assert_eq!(server.dataset().unwrap(), records(0..3).as_slice());
}

#[test]
fn test_dataset_loaded_once() {
    let server = PaginationServer::new(names_source());
    assert!(!server.is_loaded());

    let first = server.dataset().unwrap().to_vec();
    let second = server.dataset().unwrap().to_vec();
    server.get_page(page(2), size(10)).unwrap();
    server.get_hyper(page(1), size(5)).unwrap();

    assert_eq!(first, second);
    assert!(server.is_loaded());
    assert_eq!(server.source().load_count(), 1);
}

#[test]
fn test_eager_loads_at_construction() {
    let server = PaginationServer::eager(names_source(), true).unwrap();
    assert!(server.is_loaded());
    assert_eq!(server.source().load_count(), 1);
}

#[test]
fn test_eager_without_header_keeps_first_row() {
    let source = MemorySource::generated("headless", vec!["0".to_string()], 4, |i| {
        vec![(i + 1).to_string()]
    });
    let server = PaginationServer::eager(source, false).unwrap();

    assert!(server.is_loaded());
    assert_eq!(server.total_items().unwrap(), 5);
    assert_eq!(
        server.get_page(page(1), size(2)).unwrap(),
        vec![vec!["0".to_string()], vec!["1".to_string()]]
    );
}

#[test]
fn test_empty_source() {
    let server = PaginationServer::new(MemorySource::new("empty", Vec::new()));
    assert_eq!(server.total_items().unwrap(), 0);
    assert!(server.get_page(page(1), size(10)).unwrap().is_empty());
}

#[test]
fn test_failed_load_is_not_cached() {
    let server = PaginationServer::new(FlakySource {
        failures: 1,
        attempts: AtomicUsize::new(0),
    });

    let err = server.dataset().unwrap_err();
    assert!(matches!(err, Error::SourceUnavailable { .. }));
    assert!(!server.is_loaded());

    assert_eq!(server.dataset().unwrap().len(), 1);
    assert!(server.is_loaded());
}

#[test]
fn test_concurrent_first_access_loads_once() {
    let server = Arc::new(PaginationServer::new(names_source()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let server = Arc::clone(&server);
            std::thread::spawn(move || server.get_page(page(i % 3 + 1), size(10)).unwrap().len())
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(server.source().load_count(), 1);
}

// ============================================================================
// get_page Tests
// ============================================================================

#[test]
fn test_get_page_first() {
    let server = PaginationServer::new(names_source());
    assert_eq!(server.get_page(page(1), size(10)).unwrap(), records(0..10));
}

#[test]
fn test_get_page_tail() {
    let server = PaginationServer::new(names_source());
    assert_eq!(server.get_page(page(3), size(10)).unwrap(), records(20..25));
}

#[test]
fn test_get_page_past_end_is_empty() {
    let server = PaginationServer::new(names_source());
    assert!(server.get_page(page(4), size(10)).unwrap().is_empty());
    assert!(server.get_page(page(1000), size(1000)).unwrap().is_empty());
}

#[test]
fn test_get_page_length_bound() {
    let server = PaginationServer::new(names_source());
    let len = 25usize;

    for s in 1..=30 {
        for p in 1..=30 {
            let start = (p - 1) * s;
            let expected = s.min(len.saturating_sub(start));
            let got = server.get_page(page(p), size(s)).unwrap();
            assert_eq!(got.len(), expected, "page={p} page_size={s}");
        }
    }
}

#[test]
fn test_get_page_defaults() {
    let server = PaginationServer::new(names_source());
    let data = server
        .get_page(PageNumber::default(), PageSize::default())
        .unwrap();
    assert_eq!(data, records(0..10));
}

// ============================================================================
// get_hyper Tests
// ============================================================================

#[test]
fn test_get_hyper_first() {
    let server = PaginationServer::new(names_source());
    let hyper = server.get_hyper(page(1), size(10)).unwrap();

    assert_eq!(hyper.page_size, 10);
    assert_eq!(hyper.page, page(1));
    assert_eq!(hyper.data, records(0..10));
    assert_eq!(hyper.next_page, Some(page(2)));
    assert_eq!(hyper.prev_page, None);
    assert_eq!(hyper.total_pages, 3);
}

#[test]
fn test_get_hyper_tail() {
    let server = PaginationServer::new(names_source());
    let hyper = server.get_hyper(page(3), size(10)).unwrap();

    assert_eq!(hyper.page_size, 5);
    assert_eq!(hyper.page, page(3));
    assert_eq!(hyper.data, records(20..25));
    assert_eq!(hyper.next_page, None);
    assert_eq!(hyper.prev_page, Some(page(2)));
    assert_eq!(hyper.total_pages, 3);
}

#[test]
fn test_get_hyper_past_end() {
    let server = PaginationServer::new(names_source());
    let hyper = server.get_hyper(page(4), size(10)).unwrap();

    assert_eq!(hyper.page_size, 0);
    assert_eq!(hyper.page, page(4));
    assert!(hyper.data.is_empty());
    assert_eq!(hyper.next_page, None);
    assert_eq!(hyper.prev_page, Some(page(3)));
    assert_eq!(hyper.total_pages, 3);
}

#[test]
fn test_total_pages() {
    let server = PaginationServer::new(names_source());
    assert_eq!(server.total_pages(size(10)).unwrap(), 3);
    assert_eq!(server.total_pages(size(5)).unwrap(), 5);
    assert_eq!(server.total_pages(size(100)).unwrap(), 1);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_raw_rejects_before_loading() {
    let server = PaginationServer::new(names_source());

    for (p, s) in [(0, 10), (-1, 10), (1, 0), (1, -5), (0, 0)] {
        let err = server.get_page_raw(p, s).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));

        let err = server.get_hyper_raw(p, s).unwrap_err();
        assert!(err.is_client_error());
    }

    assert!(!server.is_loaded());
    assert_eq!(server.source().load_count(), 0);
}

#[test]
fn test_raw_reports_offending_argument() {
    let server = PaginationServer::new(names_source());

    let err = server.get_page_raw(1, 0).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidArgument {
            name: "page_size",
            value: 0
        }
    ));
}

#[test]
fn test_raw_valid_matches_typed() {
    let server = PaginationServer::new(names_source());
    assert_eq!(
        server.get_hyper_raw(2, 10).unwrap(),
        server.get_hyper(page(2), size(10)).unwrap()
    );
}

#[test]
fn test_source_failure_propagates_from_get_hyper() {
    let server = PaginationServer::new(FlakySource {
        failures: usize::MAX,
        attempts: AtomicUsize::new(0),
    });

    let err = server.get_hyper(page(1), size(10)).unwrap_err();
    assert!(matches!(err, Error::SourceUnavailable { .. }));
    assert!(!err.is_client_error());
}
