//! Catalog loader: comma-separated chapter tables into a [`Catalog`].
//!
//! The first non-blank line is a header and is discarded. Fields may be
//! wrapped in double quotes (with `""` as an escaped quote), surrounding
//! whitespace is trimmed, and blank lines are skipped. Which column holds
//! which value is configurable through [`CatalogColumns`]; the default
//! matches the chapter table layout `id, name, <unused>, verses, words`.
//!
//! Every error carries the 1-based line number of the offending row.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use qanit_kernel::carrier::catalog::{Catalog, CatalogError, CatalogRecord, ItemId};
use tracing::debug;

/// Column positions (0-based) of the fields the catalog needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogColumns {
    pub id: usize,
    pub label: usize,
    pub quantity: usize,
    pub side_cost: usize,
}

impl Default for CatalogColumns {
    fn default() -> Self {
        Self {
            id: 0,
            label: 1,
            quantity: 3,
            side_cost: 4,
        }
    }
}

/// The error type for catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to open catalog {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read catalog: {0}")]
    Read(#[from] std::io::Error),
    /// No header row (the input was empty or all blank).
    #[error("catalog is empty")]
    Empty,
    #[error("line {line}: column {column} missing (row has {found} fields)")]
    MissingColumn {
        line: usize,
        column: usize,
        found: usize,
    },
    #[error("line {line}: column {column} is not a non-negative integer: {value:?}")]
    InvalidInteger {
        line: usize,
        column: usize,
        value: String,
    },
    #[error("line {line}: unterminated quoted field")]
    UnterminatedQuote { line: usize },
    #[error("line {line}: item {item_id} appears more than once")]
    DuplicateItem { line: usize, item_id: ItemId },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Load a catalog from a file.
///
/// # Errors
///
/// Returns [`CatalogLoadError::Open`] if the file cannot be opened, or any
/// parse error from [`parse_catalog`].
pub fn load_catalog(
    path: impl AsRef<Path>,
    columns: &CatalogColumns,
) -> Result<Catalog, CatalogLoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CatalogLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(BufReader::new(file), columns)?;
    debug!(path = %path.display(), items = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Parse a catalog from a string slice.
///
/// # Errors
///
/// See [`parse_catalog`].
pub fn parse_catalog_str(input: &str, columns: &CatalogColumns) -> Result<Catalog, CatalogLoadError> {
    parse_catalog(input.as_bytes(), columns)
}

/// Parse a catalog from any buffered reader.
///
/// # Errors
///
/// Returns [`CatalogLoadError`] for I/O failures, an empty input, rows with
/// too few fields, non-integer id/quantity/side-cost fields, unterminated
/// quotes, or repeated ids.
pub fn parse_catalog<R: BufRead>(
    reader: R,
    columns: &CatalogColumns,
) -> Result<Catalog, CatalogLoadError> {
    let mut saw_header = false;
    let mut records: Vec<CatalogRecord> = Vec::new();
    let mut seen = BTreeSet::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        if !saw_header {
            saw_header = true;
            continue;
        }

        let fields = split_fields(&line, line_no)?;
        let record = CatalogRecord {
            item_id: parse_integer(&fields, columns.id, line_no)?,
            label: field(&fields, columns.label, line_no)?.to_string(),
            quantity: parse_integer(&fields, columns.quantity, line_no)?,
            side_cost: parse_integer(&fields, columns.side_cost, line_no)?,
        };
        if !seen.insert(record.item_id) {
            return Err(CatalogLoadError::DuplicateItem {
                line: line_no,
                item_id: record.item_id,
            });
        }
        records.push(record);
    }

    if !saw_header {
        return Err(CatalogLoadError::Empty);
    }
    Ok(Catalog::from_records(records)?)
}

fn field<'a>(fields: &'a [String], column: usize, line: usize) -> Result<&'a str, CatalogLoadError> {
    fields
        .get(column)
        .map(String::as_str)
        .ok_or(CatalogLoadError::MissingColumn {
            line,
            column,
            found: fields.len(),
        })
}

fn parse_integer<T: std::str::FromStr>(
    fields: &[String],
    column: usize,
    line: usize,
) -> Result<T, CatalogLoadError> {
    let raw = field(fields, column, line)?;
    raw.parse().map_err(|_| CatalogLoadError::InvalidInteger {
        line,
        column,
        value: raw.to_string(),
    })
}

/// Split one row into trimmed fields, honouring double quotes.
fn split_fields(line: &str, line_no: usize) -> Result<Vec<String>, CatalogLoadError> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            ('"', true) => in_quotes = false,
            ('"', false) if current.trim().is_empty() => {
                current.clear();
                in_quotes = true;
            }
            (',', false) => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    if in_quotes {
        return Err(CatalogLoadError::UnterminatedQuote { line: line_no });
    }
    fields.push(current.trim().to_string());
    Ok(fields)
}
