/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::path::PathBuf;

use thiserror::Error;

use dms_base::{ElementAddress, TableId};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("table {1} request on {0} failed: {2}")]
    Transport(
        ElementAddress,
        TableId,
        Box<dyn std::error::Error + Send + Sync + 'static>,
    ),
    #[error("Failed to read snapshot {}: {}", .0.display(), .1)]
    SnapshotIo(PathBuf, std::io::Error),
    #[error("Invalid snapshot {}: {}", .0.display(), .1)]
    SnapshotFormat(PathBuf, serde_path_to_error::Error<serde_json::Error>),
}
