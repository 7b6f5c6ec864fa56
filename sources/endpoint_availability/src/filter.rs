/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use dms_protocol::Predicate;

/// Organizational level an endpoint query can be restricted to.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
pub enum FilterDimension {
    Customer,
    Vendor,
    Network,
    Region,
    #[serde(rename = "Sub-Region")]
    SubRegion,
    Hub,
    Station,
}

/// Collector table column (parameter id) to filter on, per dimension.
pub type FilterFields = BTreeMap<FilterDimension, u32>;

impl FilterDimension {
    pub const ALL: [Self; 7] = [
        Self::Customer,
        Self::Vendor,
        Self::Network,
        Self::Region,
        Self::SubRegion,
        Self::Hub,
        Self::Station,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Vendor => "Vendor",
            Self::Network => "Network",
            Self::Region => "Region",
            Self::SubRegion => "Sub-Region",
            Self::Hub => "Hub",
            Self::Station => "Station",
        }
    }

    /// Parameter id of the matching column in the collector's
    /// endpoint table.
    pub fn default_field(self) -> u32 {
        match self {
            Self::Customer => 2010,
            Self::Vendor => 2011,
            Self::Station => 2012,
            Self::Hub => 2013,
            Self::SubRegion => 2014,
            Self::Region => 2015,
            Self::Network => 2016,
        }
    }

    pub fn default_fields() -> FilterFields {
        Self::ALL
            .into_iter()
            .map(|dim| (dim, dim.default_field()))
            .collect()
    }
}

impl fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
#[error("unknown filter dimension: {0:?}")]
pub struct UnknownDimension(pub String);

impl FromStr for FilterDimension {
    type Err = UnknownDimension;
    fn from_str(s: &str) -> Result<Self, UnknownDimension> {
        Self::ALL
            .into_iter()
            .find(|dim| dim.name() == s)
            .ok_or_else(|| UnknownDimension(s.to_string()))
    }
}

/// Build the endpoint table filter for `dimension == value`. Returns
/// `None` for a dimension that is not recognized or has no configured
/// field, which means the query has no results.
pub fn translate(
    fields: &FilterFields,
    dimension: &str,
    value: &str,
) -> Option<Predicate> {
    let dimension = dimension.parse::<FilterDimension>().ok()?;
    let field = fields.get(&dimension)?;
    Some(Predicate::full_filter(*field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_all_dimensions() {
        let fields = FilterDimension::default_fields();
        for (name, code) in [
            ("Customer", 2010),
            ("Vendor", 2011),
            ("Network", 2016),
            ("Region", 2015),
            ("Sub-Region", 2014),
            ("Hub", 2013),
            ("Station", 2012),
        ] {
            let pred = translate(&fields, name, "x y").unwrap();
            assert_eq!(
                pred.as_str(),
                format!("forceFullTable=true;fullFilter=({code}==x y)")
            );
        }
    }

    #[test]
    fn translate_unknown_dimension() {
        let fields = FilterDimension::default_fields();
        for name in ["", "customer", "SubRegion", "Sub Region", "Site"] {
            assert_eq!(translate(&fields, name, "Acme"), None);
        }
    }

    #[test]
    fn translate_empty_value() {
        let fields = FilterDimension::default_fields();
        assert_eq!(
            translate(&fields, "Hub", "").unwrap().as_str(),
            "forceFullTable=true;fullFilter=(2013==)"
        );
    }

    #[test]
    fn translate_unconfigured_dimension() {
        let mut fields = FilterDimension::default_fields();
        fields.remove(&FilterDimension::Vendor);
        assert_eq!(translate(&fields, "Vendor", "Acme"), None);
        assert!(translate(&fields, "Customer", "Acme").is_some());
    }

    #[test]
    fn dimension_names() {
        for dim in FilterDimension::ALL {
            assert_eq!(dim.to_string().parse::<FilterDimension>(), Ok(dim));
        }
        assert_eq!(
            serde_json::to_string(&FilterDimension::SubRegion).unwrap(),
            "\"Sub-Region\""
        );
    }
}
