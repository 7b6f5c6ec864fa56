/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::path::PathBuf;

use thiserror::Error;

use dms_base::DataError;

use super::extract::EndpointField;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),
    #[error("Protocol error: {0}")]
    Protocol(#[from] dms_protocol::Error),
    #[error("Invalid endpoint table: {0}")]
    Extract(#[from] ExtractError),
    #[error("Failed to read config {}: {}", .0.display(), .1)]
    ConfigIo(PathBuf, std::io::Error),
    #[error("Invalid config {}: {}", .0.display(), .1)]
    ConfigFormat(PathBuf, serde_path_to_error::Error<serde_json::Error>),
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum ExtractError {
    #[error("expected at least {expected} columns, got {got}")]
    TooFewColumns { expected: usize, got: usize },
    #[error("missing {field} cell in row {row}")]
    MissingCell { field: EndpointField, row: usize },
    #[error("invalid {field} in row {row}: {source}")]
    NotNumeric {
        field: EndpointField,
        row: usize,
        source: DataError,
    },
}
