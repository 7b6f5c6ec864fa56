/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::path::Path;

use dms_protocol::{Snapshot, StoredTransport};
use endpoint_availability::{
    Argument, Arguments, Config, EndpointSource, QuerySource,
};

fn source() -> EndpointSource<StoredTransport> {
    let snapshot: Snapshot =
        serde_json::from_str(include_str!("data/snapshot.json")).unwrap();
    EndpointSource::new(StoredTransport::new(snapshot), Config::default())
}

fn query(system_type: &str, system_name: &str) -> Vec<Vec<String>> {
    let mut source = source();
    source
        .process_arguments(
            &Arguments::new()
                .with(Argument::ROOT_ELEMENT, "10/1000")
                .with(Argument::SYSTEM_TYPE, system_type)
                .with(Argument::SYSTEM_NAME, system_name),
        )
        .unwrap();
    source
        .next_page()
        .rows
        .iter()
        .map(|row| row.cells().iter().map(|c| c.display()).collect())
        .collect()
}

#[test]
fn snapshot_customer_query() {
    assert_eq!(
        query("Customer", "Acme"),
        vec![
            vec![
                "cpe-0001",
                "10.20.0.11",
                "Acme",
                "Cisco",
                "0.00 %",
                "1.25 ms",
                "12.50 ms",
                "25.00 ms"
            ],
            vec![
                "cpe-0002",
                "10.20.0.12",
                "Acme",
                "N/A",
                "N/A",
                "N/A",
                "N/A",
                "N/A"
            ],
            vec![
                "cpe-1001",
                "10.30.0.5",
                "Acme",
                "Nokia",
                "2.75 %",
                "0.50 ms",
                "30.13 ms",
                "60.25 ms"
            ],
        ]
    );
}

#[test]
fn snapshot_failing_collector() {
    assert!(query("Vendor", "Nokia").is_empty());
}

#[test]
fn snapshot_unfiltered_tables() {
    // No stored endpoint table carries rows for this filter.
    assert!(query("Hub", "H1").is_empty());
}

#[test]
fn snapshot_file_loads() {
    let path =
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/snapshot.json");
    let transport = StoredTransport::load(&path).unwrap();
    assert_eq!(transport.snapshot().tables.len(), 5);
}
