//! hemisphere - terminal demo for the quantizer and filters
//!
//! A triangle LFO is quantized to the selected scale, glided through a
//! one-pole lowpass and played as a saw through the state-variable filter.
//! A clock on the other hemisphere periodically forces a requantize.
//!
//! Run with: cargo run -- --scale dorian

mod app;
mod engine;
mod ui;

use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = app::Args::parse();
    app::init_logging(&args.log_file)?;
    app::run(args)
}
