use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use lacuna::io_utils::{io_cli_error, lacuna_cli_error};
use lacuna::{
    scan_reader, LacunaError, LineSink, ScanConfig, ScanStats, Segment, SegmentSink,
    DEFAULT_SPARSE_THRESHOLD,
};

/// Locate the dense sections of a byte stream and checksum their
/// contents.
///
/// Dense sections are separated by sparse runs of at least the
/// threshold number of zero bytes. One record line is printed per
/// section: `<start> + <length> = <end> CHK <checksum>`.
#[derive(Parser)]
struct Args {
    /// Input file; standard input when omitted
    input: Option<PathBuf>,
    /// Minimum zero-run length classified as sparse
    #[arg(long, default_value_t = DEFAULT_SPARSE_THRESHOLD)]
    threshold: u64,
    /// Optional CSV output path for the section records
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Optional JSON output path for the section records
    #[arg(long)]
    json: Option<PathBuf>,
    /// Print scan totals to standard error
    #[arg(long)]
    stats: bool,
}

/// Line sink that also retains the records when a report file was
/// requested.
struct RecordSink<W: Write> {
    lines: LineSink<W>,
    records: Vec<Segment>,
    keep: bool,
}

impl<W: Write> SegmentSink for RecordSink<W> {
    fn emit(&mut self, segment: &Segment) -> Result<(), LacunaError> {
        self.lines.emit(segment)?;
        if self.keep {
            self.records.push(*segment);
        }
        Ok(())
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = ScanConfig::new(args.threshold);

    let stdout = io::stdout();
    let mut sink = RecordSink {
        lines: LineSink::new(BufWriter::new(stdout.lock())),
        records: Vec::new(),
        keep: args.csv.is_some() || args.json.is_some(),
    };

    let stats = scan_input(args.input.as_deref(), &config, &mut sink)?;
    sink.lines
        .into_inner()
        .map_err(|e| lacuna_cli_error("writing records", e))?;

    if let Some(path) = &args.csv {
        let f = File::create(path).map_err(|e| io_cli_error("creating csv", path, e))?;
        let mut wtr = csv::Writer::from_writer(f);
        wtr.write_record(["start", "length", "end", "checksum"])?;
        for seg in &sink.records {
            wtr.write_record(&[
                seg.start.to_string(),
                seg.length.to_string(),
                seg.end().to_string(),
                seg.checksum.to_string(),
            ])?;
        }
        wtr.flush()?;
    }

    if let Some(path) = &args.json {
        let mut f = File::create(path).map_err(|e| io_cli_error("creating json", path, e))?;
        serde_json::to_writer_pretty(&mut f, &sink.records)?;
        f.write_all(b"\n")?;
    }

    if args.stats {
        stats.report();
    }

    Ok(())
}

fn scan_input<S: SegmentSink>(
    input: Option<&std::path::Path>,
    config: &ScanConfig,
    sink: &mut S,
) -> Result<ScanStats, Box<dyn std::error::Error>> {
    let stats = match input {
        Some(path) => {
            let file = File::open(path).map_err(|e| io_cli_error("opening input file", path, e))?;
            scan_reader(file, config, sink)
        }
        None => scan_reader(io::stdin().lock(), config, sink),
    }
    .map_err(|e| lacuna_cli_error("scan failed", e))?;
    Ok(stats)
}
