/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use dms_base::{CellValue, RawTable, TableId};
use dms_protocol::{Predicate, Transport};

pub const COLLECTOR_TABLE: TableId = TableId(700);
pub const ENDPOINT_TABLE: TableId = TableId(2000);

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct MockError(pub String);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub element: (i32, i32),
    pub table: TableId,
    pub predicates: Vec<String>,
}

/// Transport replying from a fixed set of tables, recording requests.
#[derive(Default)]
pub struct MockTransport {
    replies: HashMap<((i32, i32), TableId), Result<RawTable, String>>,
    pub requests: RefCell<Vec<Request>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(
        mut self,
        element: (i32, i32),
        table: TableId,
        columns: RawTable,
    ) -> Self {
        self.replies.insert((element, table), Ok(columns));
        self
    }

    pub fn with_error(
        mut self,
        element: (i32, i32),
        table: TableId,
        msg: &str,
    ) -> Self {
        self.replies.insert((element, table), Err(msg.to_string()));
        self
    }

    pub fn with_collectors(
        self,
        root: (i32, i32),
        collectors: &[&str],
    ) -> Self {
        self.with_table(
            root,
            COLLECTOR_TABLE,
            vec![Some(
                collectors.iter().map(|c| Some(CellValue::from(*c))).collect(),
            )],
        )
    }

    pub fn with_endpoints(
        self,
        collector: (i32, i32),
        endpoints: &[Endpoint],
    ) -> Self {
        self.with_table(collector, ENDPOINT_TABLE, endpoint_table(endpoints))
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn requested_tables(&self) -> Vec<TableId> {
        self.requests.borrow().iter().map(|r| r.table).collect()
    }
}

impl Transport for MockTransport {
    type Error = MockError;

    fn send_table_request(
        &self,
        dma_id: i32,
        element_id: i32,
        table_id: TableId,
        predicates: &[Predicate],
    ) -> Result<Option<RawTable>, MockError> {
        self.requests.borrow_mut().push(Request {
            element: (dma_id, element_id),
            table: table_id,
            predicates: predicates.iter().map(|p| p.to_string()).collect(),
        });
        match self.replies.get(&((dma_id, element_id), table_id)) {
            Some(Ok(columns)) => Ok(Some(columns.clone())),
            Some(Err(msg)) => Err(MockError(msg.clone())),
            None => Ok(None),
        }
    }
}

/// One endpoint table row.
#[derive(Clone, Debug)]
pub struct Endpoint {
    pub name: CellValue,
    pub ip: CellValue,
    pub customer: CellValue,
    pub vendor: CellValue,
    pub jitter: CellValue,
    pub latency: CellValue,
    pub packet_loss: CellValue,
    pub rtt: CellValue,
}

impl Endpoint {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            ip: "10.0.0.1".into(),
            customer: "Acme".into(),
            vendor: "Cisco".into(),
            jitter: CellValue::Float(1.5),
            latency: CellValue::Float(20.0),
            packet_loss: CellValue::Float(0.25),
            rtt: CellValue::Float(40.126),
        }
    }

    pub fn ip(mut self, ip: &str) -> Self {
        self.ip = ip.into();
        self
    }

    pub fn customer(mut self, customer: &str) -> Self {
        self.customer = customer.into();
        self
    }

    pub fn vendor(mut self, vendor: &str) -> Self {
        self.vendor = vendor.into();
        self
    }

    pub fn metrics(
        mut self,
        packet_loss: impl Into<CellValue>,
        jitter: impl Into<CellValue>,
        latency: impl Into<CellValue>,
        rtt: impl Into<CellValue>,
    ) -> Self {
        self.packet_loss = packet_loss.into();
        self.jitter = jitter.into();
        self.latency = latency.into();
        self.rtt = rtt.into();
        self
    }
}

/// Build a 20-column endpoint table. Columns not read by the source are
/// filled with placeholder text.
pub fn endpoint_table(endpoints: &[Endpoint]) -> RawTable {
    (0..20)
        .map(|col| {
            Some(
                endpoints
                    .iter()
                    .map(|ep| {
                        Some(match col {
                            0 => ep.name.clone(),
                            1 => ep.ip.clone(),
                            9 => ep.customer.clone(),
                            10 => ep.vendor.clone(),
                            16 => ep.jitter.clone(),
                            17 => ep.latency.clone(),
                            18 => ep.packet_loss.clone(),
                            19 => ep.rtt.clone(),
                            _ => CellValue::from(format!("col{col}")),
                        })
                    })
                    .collect(),
            )
        })
        .collect()
}
