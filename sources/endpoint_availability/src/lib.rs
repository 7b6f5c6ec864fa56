/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

mod assemble;
mod config;
mod discovery;
mod error;
mod extract;
mod filter;
mod schema;
mod source;

pub use assemble::{
    assemble, display_number, display_text, Unit, NOT_AVAILABLE,
};
pub use config::Config;
pub use discovery::discover_collectors;
pub use error::{Error, ExtractError, Result};
pub use extract::{extract, EndpointField, EndpointMap, EndpointRecord};
pub use filter::{translate, FilterDimension, FilterFields, UnknownDimension};
pub use schema::{
    Argument, Arguments, Cell, CellData, Column, ColumnType, Page, Row,
    ARGUMENTS, COLUMNS,
};
pub use source::{EndpointSource, Query, QuerySource};
