//! fmscope application state and key handling

use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::warn;

use fm_lab::{Analysis, Deviation, ModulationConfig, SpectrumAnalyzer};

use super::ui;

const BETA_STEP: f64 = 0.5;
const BETA_RANGE: (f64, f64) = (0.1, 20.0);
const SNR_STEP: f64 = 1.0;
const SNR_RANGE: (f64, f64) = (0.0, 100.0);
const HARMONIC_RANGE: (u32, u32) = (1, 15);

pub struct App {
    config: ModulationConfig,
    /// Last pass that succeeded; kept on screen when a new one fails
    analysis: Analysis,
    analyzer: SpectrumAnalyzer,
    /// Why the most recent recompute was rejected
    error: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: ModulationConfig) -> EyreResult<Self> {
        let mut analyzer = SpectrumAnalyzer::new();
        let analysis = Analysis::run_with(&config, &mut analyzer)?;
        Ok(Self {
            config,
            analysis,
            analyzer,
            error: None,
            should_quit: false,
        })
    }

    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        let mut next = self.config.clone();
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('w') => next.waveform = next.waveform.next(),
            KeyCode::Up => next.deviation = Deviation::Beta(self.step_beta(BETA_STEP)),
            KeyCode::Down => next.deviation = Deviation::Beta(self.step_beta(-BETA_STEP)),
            KeyCode::Right => next.snr_db = step_snr(next.snr_db, SNR_STEP),
            KeyCode::Left => next.snr_db = step_snr(next.snr_db, -SNR_STEP),
            // harmonics move in odd steps
            KeyCode::Char('h') => {
                next.harmonics = next.harmonics.saturating_sub(2).max(HARMONIC_RANGE.0)
            }
            KeyCode::Char('H') => next.harmonics = (next.harmonics + 2).min(HARMONIC_RANGE.1),
            KeyCode::Char('s') => next.seed = next.seed.wrapping_add(1),
            _ => return,
        }
        self.apply(next);
    }

    fn step_beta(&self, delta: f64) -> f64 {
        let current = self.analysis.params.beta;
        let current = if current.is_finite() { current } else { BETA_RANGE.1 };
        (current + delta).clamp(BETA_RANGE.0, BETA_RANGE.1)
    }

    /// Recompute with `next`, keeping the previous pass if it fails.
    fn apply(&mut self, next: ModulationConfig) {
        match Analysis::run_with(&next, &mut self.analyzer) {
            Ok(analysis) => {
                self.config = next;
                self.analysis = analysis;
                self.error = None;
            }
            Err(err) => {
                warn!(%err, "analysis pass rejected");
                self.error = Some(err.to_string());
            }
        }
    }
}

fn step_snr(snr_db: f64, delta: f64) -> f64 {
    (snr_db + delta).clamp(SNR_RANGE.0, SNR_RANGE.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let config = ModulationConfig::default()
            .with_sampling(1_000_000.0, 0.002)
            .with_carrier(100_000.0);
        App::new(config).unwrap()
    }

    #[test]
    fn test_keys_edit_config() {
        let mut app = app();
        app.handle_key(KeyCode::Char('w'));
        assert_eq!(app.config.waveform, fm_lab::WaveformKind::Square);

        app.handle_key(KeyCode::Up);
        assert_eq!(app.config.deviation, Deviation::Beta(5.5));

        app.handle_key(KeyCode::Left);
        assert_eq!(app.config.snr_db, 19.0);

        app.handle_key(KeyCode::Char('H'));
        app.handle_key(KeyCode::Char('H'));
        assert_eq!(app.config.harmonics, 5);
        app.handle_key(KeyCode::Char('h'));
        assert_eq!(app.config.harmonics, 3);
        assert!(app.error().is_none());
    }

    #[test]
    fn test_ranges_are_clamped() {
        let mut app = app();
        for _ in 0..20 {
            app.handle_key(KeyCode::Char('h'));
        }
        assert_eq!(app.config.harmonics, 1);
        for _ in 0..200 {
            app.handle_key(KeyCode::Right);
        }
        assert_eq!(app.config.snr_db, 100.0);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
