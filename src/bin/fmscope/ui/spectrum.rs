//! Spectrum widget
//!
//! Plots a precomputed [`Spectrum`] in dB against frequency in kHz.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use fm_lab::Spectrum;

/// dB range shown below the strongest bin
const DB_SPAN: f64 = 100.0;

/// (kHz, dB) pairs clipped to the visible dB window
fn chart_points(spectrum: &Spectrum, floor: f64) -> Vec<(f64, f64)> {
    spectrum
        .db_points()
        .into_iter()
        .map(|(f, db)| (f / 1_000.0, db.max(floor)))
        .collect()
}

/// Render the spectrum with a marker line at `marker_hz` (usually fc).
pub fn render_spectrum(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    spectrum: &Spectrum,
    marker_hz: Option<f64>,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL);

    let max_db = spectrum
        .magnitude_db
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let max_db = if max_db.is_finite() { max_db } else { 0.0 };
    let floor = max_db - DB_SPAN;
    let top = max_db + 10.0;

    let points = chart_points(spectrum, floor);
    let max_khz = points.last().map(|(f, _)| *f).unwrap_or(0.0).max(1e-3);

    let marker: Vec<(f64, f64)> = marker_hz
        .map(|f| vec![(f / 1_000.0, floor), (f / 1_000.0, top)])
        .unwrap_or_default();

    let mut datasets = vec![Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(&points)];
    if !marker.is_empty() {
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(&marker),
        );
    }

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("kHz")
                .bounds([0.0, max_khz])
                .labels(vec!["0".to_string(), format!("{max_khz:.0}")])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .title("dB")
                .bounds([floor, top])
                .labels(vec![format!("{floor:.0}"), format!("{top:.0}")])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
