use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crcsum::{Variant, compute};

/// The input every catalogue check value is defined over.
const CHECK_INPUT: &[u8] = b"123456789";

#[derive(Parser, Debug)]
#[command(name = "crcsum", about = "Compute standard CRC checksums")]
struct Args {
    /// Files to checksum; "-" reads standard input. With no input at all,
    /// standard input is read.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Checksum the UTF-8 bytes of this text.
    #[arg(long, value_name = "TEXT")]
    text: Option<String>,

    /// Checksum hex-encoded bytes (whitespace ignored), e.g. "01 03 00 0A".
    #[arg(long, value_name = "HEX")]
    hex: Option<String>,

    /// CRC algorithm, by catalogue name or alias (e.g. CRC-16/XMODEM, crc32c).
    #[arg(
        short,
        long,
        value_name = "NAME",
        env = "CRCSUM_ALGORITHM",
        default_value = "CRC-32"
    )]
    algorithm: Variant,

    /// List every catalogued algorithm with its parameters and exit.
    #[arg(long)]
    list: bool,

    /// Verify every algorithm against its published check value and exit.
    #[arg(long)]
    check: bool,

    /// Log more detail to stderr (-v, -vv, -vvv). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("{path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("{failed} of {total} algorithms do not reproduce their check value")]
    CheckFailed { failed: usize, total: usize },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("crcsum: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(args: &Args) -> Result<(), Error> {
    if args.list {
        for variant in Variant::ALL {
            println!("{}", variant.parameters());
        }
        return Ok(());
    }

    if args.check {
        return check_catalog();
    }

    let algorithm = args.algorithm;
    tracing::info!(%algorithm, "computing checksums");

    if let Some(text) = &args.text {
        println!("{}  \"{}\"", compute(algorithm, text), text.escape_debug());
    }

    if let Some(hex) = &args.hex {
        let bytes = decode_hex(hex)?;
        println!("{}  {} bytes", compute(algorithm, &bytes), bytes.len());
    }

    let read_stdin = args.files.is_empty() && args.text.is_none() && args.hex.is_none();
    let stdin_path = PathBuf::from("-");
    let paths = if read_stdin {
        std::slice::from_ref(&stdin_path)
    } else {
        args.files.as_slice()
    };

    for path in paths {
        let label = path.display().to_string();
        let data = read_input(path).map_err(|source| Error::Read {
            path: label.clone(),
            source,
        })?;
        tracing::debug!(path = %label, len = data.len(), "read input");
        println!("{}  {}", compute(algorithm, &data), label);
    }

    Ok(())
}

/// The engine needs the whole input up front, so standard input is read to
/// its end before anything is computed.
fn read_input(path: &Path) -> io::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut data = Vec::new();
        io::stdin().lock().read_to_end(&mut data)?;
        Ok(data)
    } else {
        fs::read(path)
    }
}

fn decode_hex(input: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let digits: String = input.split_whitespace().collect();
    let digits = digits.strip_prefix("0x").unwrap_or(&digits);
    hex::decode(digits)
}

fn check_catalog() -> Result<(), Error> {
    let mut failed = 0;
    for &variant in Variant::ALL {
        let expected = variant.check();
        let actual = compute(variant, CHECK_INPUT);
        if actual == expected {
            println!("{:<20} {expected}  ok", variant.name());
        } else {
            failed += 1;
            println!("{:<20} {actual}  FAILED (expected {expected})", variant.name());
        }
    }

    if failed > 0 {
        return Err(Error::CheckFailed {
            failed,
            total: Variant::ALL.len(),
        });
    }
    Ok(())
}
