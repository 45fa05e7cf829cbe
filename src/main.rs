//! `txt2bin` - read a text B-tree index on stdin, write the packed form to
//! stdout.
//!
//! ```text
//! txt2bin <index.txt >index.bin
//! ```
//!
//! Output is written only after the whole input converted, so a failed run
//! leaves stdout empty. The exit code identifies the error class.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use btree_txt2bin::{Result, Transcoder};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "txt2bin=warn,btree_txt2bin=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if std::env::args_os().len() > 1 {
        warn!("txt2bin takes no arguments; ignoring them");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("txt2bin: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<()> {
    let mut input = Vec::new();
    io::stdin().lock().read_to_end(&mut input)?;
    debug!(bytes = input.len(), "read input");

    let mut transcoder = Transcoder::new(input.as_slice(), Vec::<u8>::new());
    let summary = transcoder.run()?;
    info!(%summary, "converted index");

    let output = transcoder.into_writer();
    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.flush()?;
    Ok(())
}
