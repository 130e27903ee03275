//! Command line, logging and audio/TUI wiring

use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;
use tracing_subscriber::EnvFilter;

use hemisphere_dsp::quantize::{NoteMask, OctaveOffset, Preset, QuantizerConfig, PRESETS};

use super::engine::{Engine, EngineIo, EngineSettings};
use super::ui::{UiApp, UiIo};

#[derive(Parser, Debug)]
#[command(name = "hemisphere")]
#[command(about = "Scale quantizer and fixed-point filter demo", long_about = None)]
pub struct Args {
    /// Starting scale (Tab cycles at runtime)
    #[arg(short, long, default_value = "major", value_parser = parse_preset)]
    pub scale: Preset,

    /// Center bias subtracted before quantizing
    #[arg(short, long, value_enum, default_value_t = Offset::Standard)]
    pub offset: Offset,

    /// Comma separated scale degrees to keep (0-based); all when omitted
    #[arg(short, long, value_delimiter = ',')]
    pub degrees: Vec<usize>,

    /// Triangle LFO rate driving the quantizer
    #[arg(long, default_value = "0.05")]
    pub lfo_hz: f32,

    /// Log destination; the terminal belongs to the TUI
    #[arg(long, default_value = "hemisphere.log")]
    pub log_file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Offset {
    /// Two octaves
    Standard,
    /// Four octaves
    Extended,
}

impl From<Offset> for OctaveOffset {
    fn from(offset: Offset) -> Self {
        match offset {
            Offset::Standard => OctaveOffset::Standard,
            Offset::Extended => OctaveOffset::Extended,
        }
    }
}

fn parse_preset(name: &str) -> Result<Preset, String> {
    Preset::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = PRESETS.iter().map(|(name, _)| *name).collect();
        format!("unknown scale '{name}', expected one of: {}", known.join(", "))
    })
}

/// Route `tracing` output to a file. `RUST_LOG` overrides the default level.
pub fn init_logging(path: &Path) -> EyreResult<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hemisphere=info,hemisphere_dsp=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

pub fn run(args: Args) -> EyreResult<()> {
    let mask = if args.degrees.is_empty() {
        NoteMask::all()
    } else {
        NoteMask::from_degrees(&args.degrees).wrap_err("invalid --degrees")?
    };
    let settings = EngineSettings {
        preset: args.scale,
        mask,
        config: QuantizerConfig {
            offset: args.offset.into(),
        },
        lfo_hz: args.lfo_hz,
    };

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let sample_rate = config.sample_rate().0;
    let channels = config.channels() as usize;
    tracing::info!(
        sample_rate,
        channels,
        scale = settings.preset.name(),
        "starting audio"
    );

    let (control_tx, control_rx) = RingBuffer::new(64);
    let (scope_tx, scope_rx) = RingBuffer::new(4096);
    let (audio_tx, audio_rx) = RingBuffer::new(16_384);
    let (status_tx, status_rx) = RingBuffer::new(64);

    let mut engine = Engine::new(
        settings,
        sample_rate,
        EngineIo {
            control_rx,
            scope_tx,
            audio_tx,
            status_tx,
        },
    );
    let initial = engine.status();

    let stream = device.build_output_stream(
        &config.into(),
        move |data: &mut [f32], _| engine.process_block(data, channels),
        |err| tracing::error!(%err, "audio stream error"),
        None,
    )?;
    stream.play()?;

    let mut app = UiApp::new(
        UiIo {
            control_tx,
            scope_rx,
            audio_rx,
            status_rx,
        },
        initial,
    );

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    tracing::info!("shutting down");
    result
}
