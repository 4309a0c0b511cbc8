//! fmscope - terminal FM laboratory
//!
//! Run with: cargo run --bin fmscope [sine|square|sawtooth|triangle]
//!
//! Set FMSCOPE_LOG (e.g. `FMSCOPE_LOG=fm_lab=debug`) to write a trace of each
//! analysis pass to `fmscope.log`.

mod app;
mod ui;

use std::fs::File;
use std::sync::Mutex;

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use fm_lab::{ModulationConfig, WaveformKind};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::App;

const LOG_ENV: &str = "FMSCOPE_LOG";
const LOG_FILE: &str = "fmscope.log";

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    init_logging()?;

    let mut config = ModulationConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        let waveform: WaveformKind = arg.parse()?;
        config = config.with_waveform(waveform);
    }

    let mut app = App::new(config)?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}

/// Log to a file, never to the terminal the UI is drawing on.
fn init_logging() -> EyreResult<()> {
    let Ok(directives) = std::env::var(LOG_ENV) else {
        return Ok(());
    };
    let file = File::create(LOG_FILE).wrap_err_with(|| format!("failed to create {LOG_FILE}"))?;
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .wrap_err("failed to install log subscriber")?;
    tracing::info!(filter = %directives, "fmscope logging started");
    Ok(())
}
