use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use lacuna::io_utils::{io_cli_error, lacuna_cli_error};
use lacuna::{scan_sparse_runs, ScanConfig, SparseRun, DEFAULT_SPARSE_THRESHOLD};

/// Report the sparse sections (long zero runs) of a byte stream.
///
/// One line is printed per qualifying run, sorted by offset:
/// `<start> + <length> = <end>`, or `@<start>+<length>` with `--at`.
#[derive(Parser)]
struct Args {
    /// Input file; standard input when omitted
    input: Option<PathBuf>,
    /// Minimum zero-run length classified as sparse
    #[arg(long, default_value_t = DEFAULT_SPARSE_THRESHOLD)]
    threshold: u64,
    /// Print runs in the compact `@start+length` form
    #[arg(long)]
    at: bool,
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

    let runs: Vec<SparseRun> = match &args.input {
        Some(path) => {
            let file = File::open(path).map_err(|e| io_cli_error("opening input file", path, e))?;
            scan_sparse_runs(file, &config)
        }
        None => scan_sparse_runs(io::stdin().lock(), &config),
    }
    .map_err(|e| lacuna_cli_error("scan failed", e))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for run in &runs {
        if args.at {
            writeln!(out, "{}", run.format_at())?;
        } else {
            writeln!(out, "{run}")?;
        }
    }
    out.flush()?;
    Ok(())
}
