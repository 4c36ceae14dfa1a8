//! In-memory accident table loaded from CSV.

use crate::models::FrequencyTable;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("column '{0}' not found in dataset")]
    MissingColumn(String),
}

/// Immutable table of accident records with a header row.
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<csv::StringRecord>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Parse comma-separated data whose first row holds the column names.
    /// Surrounding whitespace is stripped from headers and cells alike.
    /// Rows with a different field count than the header are rejected.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.iter().map(str::to_string).collect();
        let records = reader.records().collect::<Result<Vec<_>, _>>()?;

        Ok(Self { headers, records })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Group rows by `column` and count them.
    pub fn frequencies(&self, column: &str) -> Result<FrequencyTable, DatasetError> {
        let index = self
            .headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| DatasetError::MissingColumn(column.to_string()))?;

        Ok(FrequencyTable::from_values(
            self.records
                .iter()
                .map(|record| record.get(index).unwrap_or_default()),
        ))
    }
}
