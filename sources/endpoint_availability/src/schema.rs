/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/* Input arguments */

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Argument {
    pub name: &'static str,
    pub required: bool,
}

impl Argument {
    pub const ROOT_ELEMENT: Self = Self {
        name: "FE Element",
        required: true,
    };
    pub const SYSTEM_TYPE: Self = Self {
        name: "System Type",
        required: false,
    };
    pub const SYSTEM_NAME: Self = Self {
        name: "System Name",
        required: false,
    };
}

pub const ARGUMENTS: [Argument; 3] =
    [Argument::ROOT_ELEMENT, Argument::SYSTEM_TYPE, Argument::SYSTEM_NAME];

/// Argument values supplied by the host, by argument name.
#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct Arguments(HashMap<String, String>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, arg: Argument, value: &str) -> Self {
        self.set(arg, value);
        self
    }

    pub fn set(&mut self, arg: Argument, value: &str) {
        self.0.insert(arg.name.to_string(), value.to_string());
    }

    pub fn get(&self, arg: Argument) -> Option<&str> {
        self.0.get(arg.name).map(String::as_str)
    }
}

/* Output columns */

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    String,
    Double,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub typ: ColumnType,
}

pub const COLUMNS: [Column; 8] = [
    Column::string("Endpoint"),
    Column::string("IP"),
    Column::string("Customer Name"),
    Column::string("Vendor Name"),
    Column::double("Packet Loss Rate"),
    Column::double("Jitter"),
    Column::double("Latency"),
    Column::double("RTT"),
];

impl Column {
    const fn string(name: &'static str) -> Self {
        Self {
            name,
            typ: ColumnType::String,
        }
    }

    const fn double(name: &'static str) -> Self {
        Self {
            name,
            typ: ColumnType::Double,
        }
    }
}

/* Rows */

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum CellData {
    Text(String),
    Double(f64),
}

/// Output cell. Numeric cells keep the raw value for sorting and
/// filtering next to the text shown to the user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Cell {
    pub value: CellData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct Row(pub Vec<Cell>);

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Page {
    pub rows: Vec<Row>,
    pub has_next_page: bool,
}

impl Cell {
    pub fn text(value: String) -> Self {
        Self {
            value: CellData::Text(value),
            display_value: None,
        }
    }

    pub fn double(value: f64, display_value: String) -> Self {
        Self {
            value: CellData::Double(value),
            display_value: Some(display_value),
        }
    }

    /// Text shown for this cell.
    pub fn display(&self) -> String {
        match (&self.display_value, &self.value) {
            (Some(s), _) => s.clone(),
            (None, CellData::Text(s)) => s.clone(),
            (None, CellData::Double(n)) => n.to_string(),
        }
    }
}

impl Row {
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    pub fn get(&self, column: &str) -> Option<&Cell> {
        COLUMNS
            .iter()
            .position(|c| c.name == column)
            .and_then(|i| self.0.get(i))
    }
}
