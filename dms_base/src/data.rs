/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DataError;

/// A single cell as returned by the DMS.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// One column of a table reply, before null cells are dropped.
pub type RawColumn = Vec<Option<CellValue>>;

/// Column list of a table reply as decoded from the wire. Null columns
/// and null cells are kept as `None`.
pub type RawTable = Vec<Option<RawColumn>>;

/// Column-oriented table. Column positions are defined by the remote
/// table layout; nothing in the table itself names them.
#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(transparent)]
pub struct ColumnTable(Vec<Vec<CellValue>>);

impl CellValue {
    /// Strict numeric conversion. Text is accepted only if it parses as
    /// a number in full (surrounding whitespace aside).
    pub fn as_f64(&self) -> Result<f64, DataError> {
        match self {
            Self::Integer(n) => Ok(*n as f64),
            Self::Float(n) => Ok(*n),
            Self::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| DataError::NotNumeric(s.to_string())),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(val: &str) -> Self {
        Self::Text(val.to_string())
    }
}

impl From<String> for CellValue {
    fn from(val: String) -> Self {
        Self::Text(val)
    }
}

impl From<i64> for CellValue {
    fn from(val: i64) -> Self {
        Self::Integer(val)
    }
}

impl From<f64> for CellValue {
    fn from(val: f64) -> Self {
        Self::Float(val)
    }
}

impl ColumnTable {
    /// Drop null columns and null cells from a raw reply.
    pub fn from_raw(raw: RawTable) -> Self {
        Self(
            raw.into_iter()
                .flatten()
                .map(|column| column.into_iter().flatten().collect())
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.0.len()
    }

    /// Number of rows, taken from the first column.
    pub fn row_count(&self) -> usize {
        self.0.first().map_or(0, Vec::len)
    }

    pub fn column(&self, index: usize) -> Option<&[CellValue]> {
        self.0.get(index).map(Vec::as_slice)
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<&CellValue> {
        self.0.get(column).and_then(|c| c.get(row))
    }
}
