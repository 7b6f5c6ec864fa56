/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::error::Error;
use std::fmt::Debug;

use dms_base::{RawTable, TableId};

use super::predicate::Predicate;

/// Message channel towards the DMS.
///
/// Implementations own connection handling, serialization and any
/// timeout or retry policy. A call blocks until the reply is decoded.
pub trait Transport {
    type Error: Error + Debug + Send + Sync + 'static;

    /// Send a partial table request. `Ok(None)` means the DMS replied
    /// without a table value.
    fn send_table_request(
        &self,
        dma_id: i32,
        element_id: i32,
        table_id: TableId,
        predicates: &[Predicate],
    ) -> Result<Option<RawTable>, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Error = T::Error;

    fn send_table_request(
        &self,
        dma_id: i32,
        element_id: i32,
        table_id: TableId,
        predicates: &[Predicate],
    ) -> Result<Option<RawTable>, Self::Error> {
        (**self).send_table_request(dma_id, element_id, table_id, predicates)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    type Error = T::Error;

    fn send_table_request(
        &self,
        dma_id: i32,
        element_id: i32,
        table_id: TableId,
        predicates: &[Predicate],
    ) -> Result<Option<RawTable>, Self::Error> {
        (**self).send_table_request(dma_id, element_id, table_id, predicates)
    }
}
