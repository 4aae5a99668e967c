//! Roster loading: the tabular source of per-certificate variability.
//!
//! `data.csv` is comma-separated with a header row naming the columns. The
//! roster is loaded once per template and is immutable for the run; every
//! value is kept as a string, exactly as it will be substituted into
//! formatter templates.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::MetaError;

/// One roster row: column lookups by header name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    headers: std::sync::Arc<Vec<String>>,
    values: Vec<String>,
}

impl Row {
    /// Fetch a column value; a missing column is a fatal configuration error.
    pub fn get(&self, column: &str) -> Result<&str, MetaError> {
        self.headers
            .iter()
            .position(|h| h == column)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
            .ok_or_else(|| MetaError::MissingColumn {
                column: column.to_owned(),
            })
    }

    /// `(header, value)` pairs for diagnostics when a row fails.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .zip(self.values.iter())
            .map(|(h, v)| (h.as_str(), v.as_str()))
    }
}

/// The full roster: ordered rows sharing one header set.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    rows: Vec<Row>,
}

impl Roster {
    /// Load a roster from a CSV file with a header row.
    pub fn load(path: &Path) -> Result<Self, MetaError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|e| MetaError::Roster {
                path: path.to_path_buf(),
                source: e,
            })?;

        let headers: std::sync::Arc<Vec<String>> = std::sync::Arc::new(
            reader
                .headers()
                .map_err(|e| MetaError::Roster {
                    path: path.to_path_buf(),
                    source: e,
                })?
                .iter()
                .map(str::to_owned)
                .collect(),
        );

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| MetaError::Roster {
                path: path.to_path_buf(),
                source: e,
            })?;
            rows.push(Row {
                headers: std::sync::Arc::clone(&headers),
                values: record.iter().map(str::to_owned).collect(),
            });
        }
        Ok(Roster { rows })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Build a roster in memory. Test seam; the CLI always loads from disk.
    pub fn from_records(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        let headers = std::sync::Arc::new(headers);
        Roster {
            rows: records
                .into_iter()
                .map(|values| Row {
                    headers: std::sync::Arc::clone(&headers),
                    values,
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
