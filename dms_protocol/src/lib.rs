/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

mod client;
mod error;
mod predicate;
mod stored;
mod transport;

pub use client::TableClient;
pub use error::{Error, Result};
pub use predicate::Predicate;
pub use stored::{Snapshot, StoredError, StoredTable, StoredTransport};
pub use transport::Transport;
