use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter},
    path::PathBuf,
    time::Duration,
};

use anyhow::Context;
use log::{error, info, warn};
use mvc::{
    errors::InstanceError,
    log::build_logger_for_verbosity,
    prelude::*,
    utils::signal_handling,
};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct Opts {
    /// Instance stream; stdin when omitted
    #[structopt(short, long)]
    instance: Option<PathBuf>,

    /// Record sink, one row per processed graph
    #[structopt(short, long, default_value = "records.csv")]
    records: PathBuf,

    /// Wall-clock budget per sat decision, in seconds (15 when omitted)
    #[structopt(short, long)]
    timeout: Option<u64>,

    /// Write records as JSON lines instead of CSV
    #[structopt(long)]
    json: bool,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn open_instance_stream(path: &Option<PathBuf>) -> anyhow::Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        )),
        None => Box::new(std::io::stdin().lock()),
    })
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(::log::LevelFilter::Warn, opts.verbose);
    signal_handling::initialize();

    let budget = opts
        .timeout
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_DECISION_BUDGET);
    let format = if opts.json {
        RecordFormat::Json
    } else {
        RecordFormat::Csv
    };

    let sink = File::create(&opts.records)
        .with_context(|| format!("cannot create {}", opts.records.display()))?;
    let mut records = RecordWriter::try_new(BufWriter::new(sink), format)?;

    let stdout = std::io::stdout();

    for parsed in InstanceReader::new(open_instance_stream(&opts.instance)?) {
        if signal_handling::received_ctrl_c() {
            info!("interrupted, shutting down");
            break;
        }

        let graph = match parsed {
            Ok(graph) => graph,
            Err(e @ InstanceError::Io(_)) => {
                error!("instance stream broke: {e}");
                break;
            }
            Err(e) => {
                warn!("skipping malformed instance: {e}");
                continue;
            }
        };

        info!(
            "new graph: {} vertices, {} edges",
            graph.number_of_nodes(),
            graph.number_of_edges()
        );

        match run_round(&graph, budget) {
            Ok(outcome) => {
                outcome.write_report(stdout.lock())?;
                records.append(&outcome.to_record(&graph))?;
            }
            Err(e) => error!("dropping round: {e}"),
        }
    }

    Ok(())
}
