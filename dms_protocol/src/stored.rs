/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dms_base::{ElementAddress, RawTable, TableId};

use super::error::{Error, Result};
use super::predicate::Predicate;
use super::transport::Transport;

/// Tables previously retrieved from a DMS, replayed as replies.
#[derive(Serialize, Deserialize, Clone, Default, Debug)]
pub struct Snapshot {
    pub tables: Vec<StoredTable>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StoredTable {
    pub element: ElementAddress,
    pub table: TableId,
    /// Only answer requests with exactly these filters. Matches any
    /// request when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicates: Option<Vec<Predicate>>,
    #[serde(default)]
    pub columns: Option<RawTable>,
    /// Fail matching requests with this message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Error, Debug, Clone)]
pub enum StoredError {
    #[error("stored error reply: {0}")]
    Reply(String),
}

/// Transport answering from a [`Snapshot`]. Requests for tables not in
/// the snapshot get a reply without table value.
#[derive(Clone, Default, Debug)]
pub struct StoredTransport {
    snapshot: Snapshot,
}

impl StoredTransport {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::SnapshotIo(path.to_path_buf(), e))?;
        let snapshot = serde_path_to_error::deserialize(
            &mut serde_json::Deserializer::from_str(&data),
        )
        .map_err(|e| Error::SnapshotFormat(path.to_path_buf(), e))?;
        log::debug!("loaded snapshot from {}", path.display());
        Ok(Self::new(snapshot))
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    fn lookup(
        &self,
        element: ElementAddress,
        table_id: TableId,
        predicates: &[Predicate],
    ) -> Option<&StoredTable> {
        self.snapshot.tables.iter().find(|stored| {
            stored.element == element
                && stored.table == table_id
                && stored
                    .predicates
                    .as_ref()
                    .map_or(true, |ps| ps.as_slice() == predicates)
        })
    }
}

impl Transport for StoredTransport {
    type Error = StoredError;

    fn send_table_request(
        &self,
        dma_id: i32,
        element_id: i32,
        table_id: TableId,
        predicates: &[Predicate],
    ) -> std::result::Result<Option<RawTable>, StoredError> {
        let element = ElementAddress::new(dma_id, element_id);
        match self.lookup(element, table_id, predicates) {
            Some(StoredTable {
                error: Some(msg), ..
            }) => Err(StoredError::Reply(msg.clone())),
            Some(stored) => Ok(stored.columns.clone()),
            None => {
                log::debug!("no stored table {table_id} for {element}");
                Ok(None)
            }
        }
    }
}
