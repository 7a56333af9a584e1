//! Core data types: records, parsed tables, and the cursored dataset

use indexmap::IndexMap;

use crate::delimiter::Delimiter;

/// One data row, mapped from column name to cell value
///
/// Key order follows header order; lookups are by name, not position.
/// Values are opaque trimmed text — empty cell means empty string.
pub type Record = IndexMap<String, String>;

/// Parser output: the header row plus the shaped data rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTable {
    /// Column names in source order (blank cells get synthetic names)
    pub header: Vec<String>,
    /// Data rows keyed by column name
    pub records: Vec<Record>,
}

impl ParsedTable {
    /// True when parsing produced no data rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// In-memory dataset with a cursor over its records
///
/// Invariant: `cursor < records.len()` whenever records is non-empty;
/// an empty dataset keeps cursor at 0. Every constructor and mutator
/// clamps, so the invariant cannot be broken from outside.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    delimiter: Delimiter,
    header: Vec<String>,
    records: Vec<Record>,
    cursor: usize,
}

impl Dataset {
    /// Build a dataset from a parse result, cursor at the first record
    pub fn new(delimiter: Delimiter, table: ParsedTable) -> Self {
        Dataset {
            delimiter,
            header: table.header,
            records: table.records,
            cursor: 0,
        }
    }

    /// Rebuild a dataset from loose parts, clamping the cursor
    ///
    /// Used by the session codec, which cannot trust a decoded cursor.
    pub fn from_parts(
        delimiter: Delimiter,
        header: Vec<String>,
        records: Vec<Record>,
        cursor: usize,
    ) -> Self {
        let clamped = cursor.min(records.len().saturating_sub(1));
        Dataset {
            delimiter,
            header,
            records,
            cursor: clamped,
        }
    }

    /// The delimiter this dataset was parsed with
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Column names in header order
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// All records in source order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Zero-based index of the current record
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record under the cursor, if any
    pub fn current(&self) -> Option<&Record> {
        self.records.get(self.cursor)
    }

    /// Value of `name` in the current record; empty if absent
    pub fn field(&self, name: &str) -> &str {
        self.current()
            .and_then(|record| record.get(name))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Move the cursor forward one record; returns whether it moved
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.records.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor back one record; returns whether it moved
    pub fn retreat(&mut self) -> bool {
        if self.cursor > 0 && !self.records.is_empty() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }
}
