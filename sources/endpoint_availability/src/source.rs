/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use dms_protocol::{TableClient, Transport};

use super::assemble::assemble;
use super::config::Config;
use super::discovery::discover_collectors;
use super::error::{Error, Result};
use super::extract::extract;
use super::filter::translate;
use super::schema::{
    Argument, Arguments, Column, Page, Row, ARGUMENTS, COLUMNS,
};

/// Host-facing lifecycle of a query data source.
pub trait QuerySource {
    fn input_arguments(&self) -> &'static [Argument];
    fn columns(&self) -> &'static [Column];

    /// Validate the arguments and compute the result. Only invalid
    /// arguments are reported; other failures leave an empty result.
    fn process_arguments(&mut self, args: &Arguments) -> Result<()>;

    /// The complete result is always returned as a single page.
    fn next_page(&mut self) -> Page;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub root_element: String,
    pub system_type: String,
    pub system_name: String,
}

impl Query {
    pub fn from_arguments(args: &Arguments) -> Result<Self> {
        let root_element = args
            .get(Argument::ROOT_ELEMENT)
            .filter(|s| !s.trim().is_empty())
            .ok_or(Error::MissingArgument(Argument::ROOT_ELEMENT.name))?;
        Ok(Self {
            root_element: root_element.to_string(),
            system_type: args
                .get(Argument::SYSTEM_TYPE)
                .unwrap_or_default()
                .to_string(),
            system_name: args
                .get(Argument::SYSTEM_NAME)
                .unwrap_or_default()
                .to_string(),
        })
    }
}

/// Endpoint availability for all collectors below a root element.
pub struct EndpointSource<T> {
    client: TableClient<T>,
    config: Config,
    rows: Vec<Row>,
}

impl<T: Transport> EndpointSource<T> {
    pub fn new(transport: T, config: Config) -> Self {
        Self {
            client: TableClient::new(transport),
            config,
            rows: Vec::new(),
        }
    }

    pub fn client(&self) -> &TableClient<T> {
        &self.client
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Replace the current result with the result of `query`. Any
    /// failure leaves the result empty.
    pub fn execute(&mut self, query: &Query) {
        self.rows.clear();
        match self.run(query) {
            Ok(rows) => self.rows = rows,
            Err(e) => log::debug!(
                "endpoint query on {} failed: {e}",
                query.root_element
            ),
        }
    }

    /// Run the complete query. Rows are in collector order, then in
    /// table order within each collector.
    pub fn run(&self, query: &Query) -> Result<Vec<Row>> {
        let filter = match translate(
            &self.config.filter_fields,
            &query.system_type,
            &query.system_name,
        ) {
            Some(filter) => filter,
            None => {
                log::debug!(
                    "no endpoint filter for system type {:?}",
                    query.system_type
                );
                return Ok(Vec::new());
            }
        };

        let collectors = discover_collectors(
            &self.client,
            &query.root_element,
            self.config.collector_table,
        )?;
        log::debug!(
            "found {} collectors on {}",
            collectors.len(),
            query.root_element
        );

        let mut rows = Vec::new();
        for collector in &collectors {
            let table = self.client.fetch_table(
                collector.as_ref(),
                self.config.endpoint_table,
                std::slice::from_ref(&filter),
            )?;
            let endpoints = extract(&table)?;
            log::trace!("{collector}: {} endpoints", endpoints.len());
            assemble(endpoints, &mut rows);
        }

        Ok(rows)
    }
}

impl<T: Transport> QuerySource for EndpointSource<T> {
    fn input_arguments(&self) -> &'static [Argument] {
        &ARGUMENTS
    }

    fn columns(&self) -> &'static [Column] {
        &COLUMNS
    }

    fn process_arguments(&mut self, args: &Arguments) -> Result<()> {
        self.rows.clear();
        let query = Query::from_arguments(args)?;
        self.execute(&query);
        Ok(())
    }

    fn next_page(&mut self) -> Page {
        Page {
            rows: self.rows.clone(),
            has_next_page: false,
        }
    }
}
