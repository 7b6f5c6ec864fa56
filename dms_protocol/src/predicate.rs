/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Partial table request filter, in the DMS filter syntax.
#[derive(
    Serialize, Deserialize, Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct Predicate(pub String);

impl Predicate {
    /// Request the complete table, without paging.
    pub fn force_full_table() -> Self {
        Self(String::from("forceFullTable=true"))
    }

    /// Request the complete table, keeping only rows where the column
    /// with parameter id `field` equals `value`.
    pub fn full_filter(field: u32, value: &str) -> Self {
        Self(format!("forceFullTable=true;fullFilter=({field}=={value})"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
