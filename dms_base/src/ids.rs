/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseError;

/// Address of an element in the DMS, written as `<dma id>/<element id>`.
///
/// Any segments after the element id are ignored, so `"1/2/3"` addresses
/// the same element as `"1/2"`.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct ElementAddress {
    pub dma_id: i32,
    pub element_id: i32,
}

/// Remote table (parameter) id.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
)]
#[serde(transparent)]
pub struct TableId(pub i32);

/// Collector element, as listed in the root element's collector table.
#[derive(
    Serialize, Deserialize, Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct CollectorId(pub String);

impl ElementAddress {
    pub fn new(dma_id: i32, element_id: i32) -> Self {
        Self { dma_id, element_id }
    }
}

impl FromStr for ElementAddress {
    type Err = ParseError;
    fn from_str(val: &str) -> Result<Self, ParseError> {
        let mut parts = val.split('/');
        match (parts.next(), parts.next()) {
            (Some(dma_id), Some(element_id)) => Ok(Self {
                dma_id: parse_id(val, dma_id)?,
                element_id: parse_id(val, element_id)?,
            }),
            _ => Err(ParseError::MissingSeparator(val.to_string())),
        }
    }
}

fn parse_id(addr: &str, part: &str) -> Result<i32, ParseError> {
    part.trim()
        .parse()
        .map_err(|_| ParseError::InvalidId(addr.to_string(), part.to_string()))
}

impl TryFrom<String> for ElementAddress {
    type Error = ParseError;
    fn try_from(val: String) -> Result<Self, ParseError> {
        val.parse()
    }
}

impl From<ElementAddress> for String {
    fn from(val: ElementAddress) -> Self {
        val.to_string()
    }
}

impl fmt::Display for ElementAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.dma_id, self.element_id)
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CollectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CollectorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
