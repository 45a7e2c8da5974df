use std::io::Write;

use clap::Parser;
use tracing::debug;

use card::animate;
use card::banner::Banner;
use card::cli::{Cli, RenderOptions};
use card::record::{ContactRecord, RECORD_FILE};
use card::render;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let opts = RenderOptions::from_cli(&cli);

    init_tracing(opts.debug);

    let record = ContactRecord::load(RECORD_FILE)?;
    debug!(name = record.name(), "loaded contact record");

    if opts.animation {
        let banner = Banner::new()?;
        let frames = animate::frames(&banner, record.name(), opts.color);
        debug!(frames = frames.len(), "playing name animation");
        animate::play(&frames)?;
    }

    let document = render::document(&record, &opts)?;

    let mut out = std::io::stdout();
    out.write_all(document.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
