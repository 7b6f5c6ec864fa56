/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::path::Path;

use serde::{Deserialize, Serialize};

use dms_base::TableId;

use super::error::{Error, Result};
use super::filter::{FilterDimension, FilterFields};

/* Config */

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Table on the root element listing its collectors.
    pub collector_table: TableId,
    /// Endpoint table on each collector.
    pub endpoint_table: TableId,
    pub filter_fields: FilterFields,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            collector_table: TableId(700),
            endpoint_table: TableId(2000),
            filter_fields: FilterDimension::default_fields(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigIo(path.to_path_buf(), e))?;
        serde_path_to_error::deserialize(
            &mut serde_json::Deserializer::from_str(&data),
        )
        .map_err(|e| Error::ConfigFormat(path.to_path_buf(), e))
    }
}
