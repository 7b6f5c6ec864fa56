/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::path::PathBuf;

use clap::Parser;

use dms_protocol::StoredTransport;
use endpoint_availability::{
    Argument, Arguments, Config, EndpointSource, Page, QuerySource,
};

/// Run an endpoint availability query against a stored table snapshot.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Snapshot of DMS tables (JSON).
    #[arg(long, short = 's')]
    snapshot: PathBuf,
    /// Source configuration (JSON).
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
    /// Root element, as <dma id>/<element id>.
    #[arg(long, short = 'e')]
    element: String,
    /// Filter dimension (Customer, Vendor, Network, Region, Sub-Region,
    /// Hub or Station).
    #[arg(long, short = 't')]
    system_type: Option<String>,
    /// Filter value.
    #[arg(long, short = 'n')]
    system_name: Option<String>,
    /// Print the result page as JSON.
    #[arg(long)]
    json: bool,
    /// Increase logging verbosity.
    #[arg(long = "verbose", short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn verbosity(&self) -> simplelog::LevelFilter {
        match self.verbose {
            0 => simplelog::LevelFilter::Warn,
            1 => simplelog::LevelFilter::Info,
            2 => simplelog::LevelFilter::Debug,
            3.. => simplelog::LevelFilter::Trace,
        }
    }

    fn arguments(&self) -> Arguments {
        let mut args =
            Arguments::new().with(Argument::ROOT_ELEMENT, &self.element);
        if let Some(system_type) = &self.system_type {
            args.set(Argument::SYSTEM_TYPE, system_type);
        }
        if let Some(system_name) = &self.system_name {
            args.set(Argument::SYSTEM_NAME, system_name);
        }
        args
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = simplelog::TermLogger::init(
        args.verbosity(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("failed to initialize logging: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let transport = StoredTransport::load(&args.snapshot)?;

    let mut source = EndpointSource::new(transport, config);
    source.process_arguments(&args.arguments())?;
    let page = source.next_page();

    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&page)?),
        false => print!("{}", format_page(source.columns(), &page)),
    }

    log::info!("{} endpoints", page.rows.len());
    Ok(())
}

fn format_page(
    columns: &[endpoint_availability::Column],
    page: &Page,
) -> String {
    let cells = page
        .rows
        .iter()
        .map(|row| row.cells().iter().map(|c| c.display()).collect())
        .collect::<Vec<Vec<String>>>();

    let widths = columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|s| s.chars().count())
                .chain(std::iter::once(col.name.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect::<Vec<_>>();

    let mut out = String::new();
    let header: Vec<String> =
        columns.iter().map(|c| c.name.to_string()).collect();
    for line in std::iter::once(&header).chain(cells.iter()) {
        out.push_str(
            line.iter()
                .zip(&widths)
                .map(|(s, &w)| format!("{s:<w$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end(),
        );
        out.push('\n');
    }
    out
}
