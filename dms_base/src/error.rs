/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("missing '/' separator in element address {0:?}")]
    MissingSeparator(String),
    #[error("invalid id {1:?} in element address {0:?}")]
    InvalidId(String, String),
}

#[derive(Serialize, Deserialize, Error, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "snake_case")]
pub enum DataError {
    #[error("Failed to parse value {0:?} as a number")]
    NotNumeric(String),
}
