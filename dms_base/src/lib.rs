/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

mod data;
mod error;
mod ids;

pub use data::{CellValue, ColumnTable, RawColumn, RawTable};
pub use error::{DataError, ParseError};
pub use ids::{CollectorId, ElementAddress, TableId};
