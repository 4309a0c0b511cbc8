//! Time-domain oscilloscope widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Most points handed to a chart; Braille cells cannot show more anyway
const MAX_POINTS: usize = 2_000;

/// One labelled line on a chart
pub struct Trace {
    pub name: &'static str,
    pub color: Color,
    /// (t in seconds, y)
    pub points: Vec<(f64, f64)>,
}

impl Trace {
    pub fn new(name: &'static str, color: Color, points: Vec<(f64, f64)>) -> Self {
        Self {
            name,
            color,
            points: to_millis(decimate(points, MAX_POINTS)),
        }
    }
}

/// Keep every k-th point so at most `max` remain.
fn decimate(points: Vec<(f64, f64)>, max: usize) -> Vec<(f64, f64)> {
    if points.len() <= max {
        return points;
    }
    let step = points.len().div_ceil(max);
    points.into_iter().step_by(step).collect()
}

fn to_millis(points: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    points.into_iter().map(|(t, y)| (t * 1_000.0, y)).collect()
}

/// Render traces against a shared time axis (ms).
pub fn render_traces(frame: &mut Frame, area: Rect, title: &str, traces: &[Trace]) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL);

    let t_max = traces
        .iter()
        .filter_map(|tr| tr.points.last().map(|(t, _)| *t))
        .fold(0.0, f64::max)
        .max(1e-6);
    let y_max = traces
        .iter()
        .flat_map(|tr| tr.points.iter().map(|(_, y)| y.abs()))
        .fold(0.0, f64::max)
        .max(1e-3)
        * 1.1;

    let datasets: Vec<Dataset> = traces
        .iter()
        .map(|tr| {
            Dataset::default()
                .name(tr.name)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(tr.color))
                .data(&tr.points)
        })
        .collect();

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("ms")
                .bounds([0.0, t_max])
                .labels(vec!["0".to_string(), format!("{t_max:.2}")])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-y_max, y_max])
                .labels(vec![format!("{:.1}", -y_max), format!("{y_max:.1}")])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
