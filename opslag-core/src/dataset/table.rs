//! Tabular dataset parsing and column selection.
//!
//! Historical posts arrive as comma-delimited text with a header line. Post
//! bodies legitimately contain commas, quotes, and embedded newlines, so
//! parsing goes through the `csv` crate's RFC 4180 state machine rather than
//! a line split. The parser never fails: empty or headerless input yields an
//! empty table and callers treat that as "no data".

use csv::{ReaderBuilder, Trim};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::constants::datasets;

/// One row keyed by column name, in header order.
pub type Row = IndexMap<String, String>;

/// In-memory row/column representation of a tabular source.
///
/// Columns keep first-seen header order; rows keep source order, which
/// reflects chronological post order where the source guarantees it. Every
/// row carries exactly the column key set, padding short records with empty
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl ParsedTable {
    /// Parse raw delimited text into a table.
    pub fn parse(raw: &str) -> Self {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(raw.as_bytes());

        let headers = match reader.headers() {
            Ok(headers) => headers.clone(),
            Err(_) => return Self::default(),
        };

        // First occurrence wins for duplicate header names so every row has
        // exactly the column key set.
        let mut columns: Vec<String> = Vec::with_capacity(headers.len());
        let mut positions: Vec<usize> = Vec::with_capacity(headers.len());
        for (idx, name) in headers.iter().enumerate() {
            if columns.iter().any(|existing| existing == name) {
                continue;
            }
            columns.push(name.to_string());
            positions.push(idx);
        }

        if columns.is_empty() {
            return Self::default();
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let Ok(record) = record else { continue };
            let mut row = Row::with_capacity(columns.len());
            for (name, &idx) in columns.iter().zip(&positions) {
                row.insert(name.clone(), record.get(idx).unwrap_or("").to_string());
            }
            rows.push(row);
        }

        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The column most likely to hold post bodies, per [`select_column`].
    pub fn default_selection(&self) -> Option<&str> {
        select_column(&self.columns)
    }

    /// Validate a caller-held selection against this table.
    ///
    /// A stale override from a previously loaded dataset is discarded and
    /// the selection rule is re-applied.
    pub fn effective_selection(&self, wanted: Option<&str>) -> Option<String> {
        match wanted {
            Some(name) if self.columns.iter().any(|c| c == name) => Some(name.to_string()),
            _ => self.default_selection().map(|name| name.to_string()),
        }
    }

    /// Concatenate the selected column's non-empty values, one per line, in
    /// row order. Empty cells are skipped rather than rendered blank.
    pub fn column_text(&self, column: &str) -> String {
        self.rows
            .iter()
            .filter_map(|row| row.get(column))
            .filter(|value| !value.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Re-serialize the table as delimited text with the same header.
    pub fn to_csv_text(&self) -> String {
        let mut writer = csv::Writer::from_writer(Vec::new());
        let _ = writer.write_record(&self.columns);
        for row in &self.rows {
            let _ = writer.write_record(
                self.columns
                    .iter()
                    .map(|c| row.get(c).map(String::as_str).unwrap_or("")),
            );
        }
        match writer.into_inner() {
            Ok(bytes) => String::from_utf8(bytes).unwrap_or_default(),
            Err(_) => String::new(),
        }
    }
}

/// Pick the column most likely to contain free-text historical posts.
///
/// Rule, in order: the canonical post-body column when present (exact,
/// case-sensitive), else the first column, else nothing.
pub fn select_column(columns: &[String]) -> Option<&str> {
    columns
        .iter()
        .find(|name| *name == datasets::POST_BODY_COLUMN)
        .or_else(|| columns.first())
        .map(String::as_str)
}
