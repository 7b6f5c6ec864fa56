/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use dms_base::{ColumnTable, ElementAddress, TableId};

use super::error::{Error, Result};
use super::predicate::Predicate;
use super::transport::Transport;

/// Retrieves partial tables from DMS elements.
pub struct TableClient<T> {
    transport: T,
}

impl<T: Transport> TableClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch a table from the element at `element`. An address that
    /// does not parse yields an empty table rather than an error, as
    /// does a reply without table value.
    pub fn fetch_table(
        &self,
        element: &str,
        table_id: TableId,
        predicates: &[Predicate],
    ) -> Result<ColumnTable> {
        let addr = match element.parse::<ElementAddress>() {
            Ok(addr) => addr,
            Err(e) => {
                log::debug!("skipping table {table_id} request: {e}");
                return Ok(ColumnTable::default());
            }
        };

        log::trace!(
            "requesting table {table_id} from {addr} ({})",
            predicates
                .iter()
                .map(Predicate::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );

        let reply = self
            .transport
            .send_table_request(
                addr.dma_id,
                addr.element_id,
                table_id,
                predicates,
            )
            .map_err(|e| Error::Transport(addr, table_id, Box::new(e)))?;

        Ok(reply.map(ColumnTable::from_raw).unwrap_or_default())
    }
}
