//! TUI module for fmscope
//!
//! Draws one [`Analysis`] as a grid of time and frequency plots.

mod metrics;
mod spectrum;
mod waveform;

use std::rc::Rc;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use fm_lab::Analysis;

use super::app::App;
use metrics::{render_metrics, render_parameters};
use spectrum::render_spectrum;
use waveform::{render_traces, Trace};

const HELP: &str = " [W] Waveform  [↑/↓] β  [←/→] SNR  [h/H] Harmonics  [S] Reseed  [Q] Quit";

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let analysis = app.analysis();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Parameters
            Constraint::Min(8),    // Time domain
            Constraint::Min(8),    // Spectrum and demodulation
            Constraint::Length(5), // Channel metrics
            Constraint::Length(1), // Help / error
        ])
        .split(frame.area());

    render_parameters(frame, rows[0], analysis);

    let top = halves(rows[1]);
    render_message(frame, top[0], analysis);
    render_modulated(frame, top[1], analysis);

    let bottom = halves(rows[2]);
    render_spectrum(
        frame,
        bottom[0],
        "FM spectrum",
        &analysis.fm_spectrum,
        Some(analysis.params.carrier_hz),
    );
    render_demodulated(frame, bottom[1], analysis);

    render_metrics(frame, rows[3], analysis);

    let footer = match app.error() {
        Some(err) => {
            Paragraph::new(format!(" rejected: {err}")).style(Style::default().fg(Color::Red))
        }
        None => Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(footer, rows[4]);
}

fn halves(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

fn render_message(frame: &mut Frame, area: Rect, analysis: &Analysis) {
    let window = analysis.zoom.fm_view;
    let traces = [Trace::new(
        "m(t)",
        Color::Cyan,
        analysis.zoomed(&analysis.message, window),
    )];
    render_traces(frame, area, "Message", &traces);
}

fn render_modulated(frame: &mut Frame, area: Rect, analysis: &Analysis) {
    let window = analysis.zoom.carrier_view;
    let traces = [
        Trace::new(
            "carrier",
            Color::DarkGray,
            analysis.zoomed(&analysis.carrier, window),
        ),
        Trace::new("s(t)", Color::Green, analysis.zoomed(&analysis.fm.signal, window)),
    ];
    render_traces(frame, area, "FM signal", &traces);
}

fn render_demodulated(frame: &mut Frame, area: Rect, analysis: &Analysis) {
    let window = analysis.zoom.fm_view;
    let traces = [
        Trace::new(
            "message",
            Color::White,
            analysis.zoomed(&analysis.normalized_message, window),
        ),
        Trace::new("AM", Color::Red, analysis.zoomed(&analysis.recovered_am, window)),
        Trace::new("FM", Color::Green, analysis.zoomed(&analysis.recovered_fm, window)),
    ];
    render_traces(frame, area, "Demodulated", &traces);
}
