/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use dms_base::{CellValue, ColumnTable};

use super::error::ExtractError;

/// Fields read from a collector's endpoint table.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum EndpointField {
    Key,
    Ip,
    CustomerName,
    VendorName,
    Jitter,
    Latency,
    PacketLossRate,
    Rtt,
}

impl EndpointField {
    /// Column positions in the endpoint table. These follow the
    /// collector's table layout and must change with it.
    pub const COLUMNS: [(Self, usize); 8] = [
        (Self::Key, 0),
        (Self::Ip, 1),
        (Self::CustomerName, 9),
        (Self::VendorName, 10),
        (Self::Jitter, 16),
        (Self::Latency, 17),
        (Self::PacketLossRate, 18),
        (Self::Rtt, 19),
    ];

    /// Minimum width of a non-empty endpoint table.
    pub const REQUIRED_COLUMNS: usize = 20;

    pub fn column(self) -> usize {
        Self::COLUMNS
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, column)| *column)
            .unwrap_or_default()
    }
}

impl fmt::Display for EndpointField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key => write!(f, "endpoint"),
            Self::Ip => write!(f, "ip"),
            Self::CustomerName => write!(f, "customer name"),
            Self::VendorName => write!(f, "vendor name"),
            Self::Jitter => write!(f, "jitter"),
            Self::Latency => write!(f, "latency"),
            Self::PacketLossRate => write!(f, "packet loss rate"),
            Self::Rtt => write!(f, "rtt"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EndpointRecord {
    pub key: String,
    pub ip: String,
    pub customer_name: String,
    pub vendor_name: String,
    pub packet_loss_rate: f64,
    pub jitter: f64,
    pub latency: f64,
    pub rtt: f64,
}

/// Endpoint records by key, iterated in first-insertion order. A record
/// inserted under an existing key replaces the earlier one in place.
#[derive(Clone, Default, Debug)]
pub struct EndpointMap {
    records: Vec<EndpointRecord>,
    index: HashMap<String, usize>,
}

impl EndpointMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it replaced.
    pub fn insert(
        &mut self,
        record: EndpointRecord,
    ) -> Option<EndpointRecord> {
        match self.index.get(&record.key) {
            Some(&i) => Some(std::mem::replace(&mut self.records[i], record)),
            None => {
                self.index.insert(record.key.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&EndpointRecord> {
        self.index.get(key).map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EndpointRecord> {
        self.records.iter()
    }
}

impl IntoIterator for EndpointMap {
    type Item = EndpointRecord;
    type IntoIter = std::vec::IntoIter<EndpointRecord>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Transpose a collector's endpoint table into one record per row,
/// keyed by endpoint name.
pub fn extract(table: &ColumnTable) -> Result<EndpointMap, ExtractError> {
    let mut endpoints = EndpointMap::new();
    if table.row_count() == 0 {
        return Ok(endpoints);
    }

    if table.column_count() < EndpointField::REQUIRED_COLUMNS {
        return Err(ExtractError::TooFewColumns {
            expected: EndpointField::REQUIRED_COLUMNS,
            got: table.column_count(),
        });
    }

    for row in 0..table.row_count() {
        let key = text(table, EndpointField::Key, row)?;
        let record = EndpointRecord {
            ip: text(table, EndpointField::Ip, row)?,
            customer_name: text(table, EndpointField::CustomerName, row)?,
            vendor_name: text(table, EndpointField::VendorName, row)?,
            packet_loss_rate: number(
                table,
                EndpointField::PacketLossRate,
                row,
            )?,
            jitter: number(table, EndpointField::Jitter, row)?,
            latency: number(table, EndpointField::Latency, row)?,
            rtt: number(table, EndpointField::Rtt, row)?,
            key,
        };
        if let Some(old) = endpoints.insert(record) {
            log::trace!("endpoint {} repeated in row {row}", old.key);
        }
    }

    Ok(endpoints)
}

fn cell(
    table: &ColumnTable,
    field: EndpointField,
    row: usize,
) -> Result<&CellValue, ExtractError> {
    table
        .cell(field.column(), row)
        .ok_or(ExtractError::MissingCell { field, row })
}

fn text(
    table: &ColumnTable,
    field: EndpointField,
    row: usize,
) -> Result<String, ExtractError> {
    Ok(cell(table, field, row)?.to_string())
}

fn number(
    table: &ColumnTable,
    field: EndpointField,
    row: usize,
) -> Result<f64, ExtractError> {
    cell(table, field, row)?
        .as_f64()
        .map_err(|source| ExtractError::NotNumeric { field, row, source })
}
