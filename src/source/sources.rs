//! Dataset source implementations

use super::types::DatasetSource;
use crate::error::{Error, Result};
use crate::types::Record;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// CSV Source
// ============================================================================

/// Delimited text file on disk
#[derive(Debug, Clone)]
pub struct CsvSource {
    /// Path to the file
    path: PathBuf,
    /// Field delimiter
    delimiter: char,
    /// Display name (the path as given)
    name: String,
}

impl CsvSource {
    /// Create a comma-delimited source
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_delimiter(path, ',')
    }

    /// Create a source with a custom delimiter
    pub fn with_delimiter(path: impl AsRef<Path>, delimiter: char) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            name: path.display().to_string(),
            path,
            delimiter,
        }
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Field delimiter
    pub fn delimiter(&self) -> char {
        self.delimiter
    }
}

impl DatasetSource for CsvSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<Record>> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| Error::source_unavailable(&self.name, e.to_string()))?;

        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

        parse_csv(content, self.delimiter)
            .map_err(|e| Error::source_unavailable(&self.name, e.to_string()))
    }
}

/// Parse delimited text into rows.
///
/// Quoted fields may contain the delimiter, doubled quotes and line breaks.
/// Rows may have differing field counts. Lines end at `\n`, `\r\n` or a
/// bare `\r`; a blank line is an empty row. The final line terminator does
/// not start another row.
pub fn parse_csv(text: &str, delimiter: char) -> Result<Vec<Record>> {
    let mut rows = Vec::new();
    let mut row: Record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut row_has_content = false;
    let mut line = 1;
    let mut quote_line = 0;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' | '\n' => {
                if row_has_content {
                    row.push(std::mem::take(&mut field));
                }
                rows.push(std::mem::take(&mut row));
                row_has_content = false;
                at_field_start = true;
                line += 1;
            }
            c if c == delimiter => {
                row.push(std::mem::take(&mut field));
                row_has_content = true;
                at_field_start = true;
            }
            '"' if at_field_start => {
                in_quotes = true;
                quote_line = line;
                row_has_content = true;
                at_field_start = false;
            }
            _ => {
                field.push(c);
                row_has_content = true;
                at_field_start = false;
            }
        }
    }

    if in_quotes {
        return Err(Error::csv_parse(quote_line, "unterminated quoted field"));
    }

    if row_has_content {
        row.push(field);
        rows.push(row);
    }

    Ok(rows)
}

// ============================================================================
// Memory Source
// ============================================================================

/// Rows held in memory
///
/// Counts how often it has been loaded, which makes cache behaviour observable.
#[derive(Debug, Default)]
pub struct MemorySource {
    name: String,
    rows: Vec<Record>,
    loads: AtomicUsize,
}

impl MemorySource {
    /// Create a source from rows (header row first, if any)
    pub fn new(name: impl Into<String>, rows: Vec<Record>) -> Self {
        Self {
            name: name.into(),
            rows,
            loads: AtomicUsize::new(0),
        }
    }

    /// Create a source with a header followed by generated rows
    pub fn generated<F>(name: impl Into<String>, header: Record, count: usize, row: F) -> Self
    where
        F: FnMut(usize) -> Record,
    {
        let mut rows = Vec::with_capacity(count + 1);
        rows.push(header);
        rows.extend((0..count).map(row));
        Self::new(name, rows)
    }

    /// Number of times `load` has been called
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl DatasetSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<Record>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.clone())
    }
}
