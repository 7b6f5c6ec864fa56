/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt;

use super::extract::EndpointMap;
use super::schema::{Cell, Row};

/// Shown in place of values the collector does not have.
pub const NOT_AVAILABLE: &str = "N/A";

const SENTINEL: f64 = -1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Percent,
    Milliseconds,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent => write!(f, "%"),
            Self::Milliseconds => write!(f, "ms"),
        }
    }
}

pub fn display_text(value: &str) -> String {
    match value {
        "" | "-1" => NOT_AVAILABLE.to_string(),
        _ => value.to_string(),
    }
}

pub fn display_number(value: f64, unit: Unit) -> String {
    if value == SENTINEL {
        NOT_AVAILABLE.to_string()
    } else {
        let text = format!("{value:.2}");
        // Values rounding to zero keep no sign.
        let text = text
            .strip_prefix('-')
            .filter(|digits| digits.bytes().all(|b| b == b'0' || b == b'.'))
            .unwrap_or(&text);
        format!("{text} {unit}")
    }
}

/// Append one output row per record, in map order.
pub fn assemble(records: EndpointMap, rows: &mut Vec<Row>) {
    rows.extend(records.into_iter().map(|r| {
        Row(vec![
            Cell::text(r.key),
            Cell::text(r.ip),
            Cell::text(display_text(&r.customer_name)),
            Cell::text(display_text(&r.vendor_name)),
            Cell::double(
                r.packet_loss_rate,
                display_number(r.packet_loss_rate, Unit::Percent),
            ),
            Cell::double(
                r.jitter,
                display_number(r.jitter, Unit::Milliseconds),
            ),
            Cell::double(
                r.latency,
                display_number(r.latency, Unit::Milliseconds),
            ),
            Cell::double(r.rtt, display_number(r.rtt, Unit::Milliseconds)),
        ])
    }));
}
