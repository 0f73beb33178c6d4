mod decode;
mod dump;

use std::io::stderr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a time-code frame from a raw capture file.
    ///
    /// A capture is one byte per sample with values of strictly 0 or 1 and no
    /// header. At least 60 seconds of samples are required; 120 seconds
    /// guarantees a whole frame is present regardless of alignment.
    ///
    /// Decoding always reports something, even for pure noise. Check the
    /// scores and the reliability verdict before trusting the result.
    Decode {
        /// Input capture file.
        input: PathBuf,

        /// Samples per second of the capture. Must be a multiple of 10.
        #[arg(short, long, default_value_t = wwvb::buffer::DEFAULT_RATE)]
        rate: u32,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: decode::Format,

        /// Also print the located frame, one second of samples per line.
        #[arg(short, long, action)]
        print_frame: bool,

        /// Rewrite the capture to this path after decoding.
        #[arg(short, long, value_name = "path")]
        save: Option<PathBuf>,
    },
    /// Print a capture one second of samples per line.
    ///
    /// With a correct alignment the first line is a marker: mostly low
    /// carrier with a short high tail.
    Dump {
        /// Input capture file.
        input: PathBuf,

        /// Samples per second of the capture. Must be a multiple of 10.
        #[arg(short, long, default_value_t = wwvb::buffer::DEFAULT_RATE)]
        rate: u32,

        /// Dump from this sample offset instead of synchronizing first.
        #[arg(short, long)]
        offset: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(stderr)
        .with_ansi(false)
        .without_time()
        .with_env_filter(
            EnvFilter::try_from_env("WWVB_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match &cli.command {
        Commands::Decode {
            input,
            rate,
            format,
            print_frame,
            save,
        } => decode::decode(input, *rate, format, *print_frame, save.as_deref()),
        Commands::Dump {
            input,
            rate,
            offset,
        } => dump::dump(input, *rate, *offset),
    }
}
