use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use lacuna::io_utils::{io_cli_error, lacuna_cli_error};
use lacuna::{combine_streams, CombineOp};

/// Bitwise-combine standard input with a second byte stream.
///
/// Reads binary data from standard input, applies the operation byte
/// for byte against the combine file, and writes the binary result to
/// standard output. The combine file must be at least as long as the
/// input.
#[derive(Parser)]
struct Args {
    /// File providing the combine data
    other: PathBuf,
    /// Bitwise operation to apply
    #[arg(long, value_enum, default_value = "xor")]
    op: CombineOp,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let other = File::open(&args.other)
        .map_err(|e| io_cli_error("opening combine file", &args.other, e))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    combine_streams(io::stdin().lock(), BufReader::new(other), args.op, &mut out).map_err(|e| {
        lacuna_cli_error(
            &format!("combining with '{}'", args.other.display()),
            e,
        )
    })?;
    Ok(())
}
