/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use dms_base::{CollectorId, TableId};
use dms_protocol::{Predicate, TableClient, Transport};

use super::error::Result;

/// List the collectors attached to `root`, in table order. The first
/// column of the collector table holds the collector element addresses.
pub fn discover_collectors<T: Transport>(
    client: &TableClient<T>,
    root: &str,
    table: TableId,
) -> Result<Vec<CollectorId>> {
    let collectors =
        client.fetch_table(root, table, &[Predicate::force_full_table()])?;
    Ok(collectors
        .column(0)
        .unwrap_or_default()
        .iter()
        .map(|cell| CollectorId(cell.to_string()))
        .collect())
}
