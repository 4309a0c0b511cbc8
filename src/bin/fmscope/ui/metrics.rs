//! Parameter and metrics bars

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use fm_lab::{Analysis, Severity, SnrQuality, ValidationResult};

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::Blue,
        Severity::Ok => Color::Green,
    }
}

fn quality_color(quality: SnrQuality) -> Color {
    match quality {
        SnrQuality::Excellent => Color::Green,
        SnrQuality::Good => Color::Yellow,
        SnrQuality::Fair | SnrQuality::Poor => Color::Red,
    }
}

/// Render the parameter bar: settings and derived FM quantities
pub fn render_parameters(frame: &mut Frame, area: Rect, analysis: &Analysis) {
    let block = Block::default().title(" fmscope ").borders(Borders::ALL);
    let p = &analysis.params;
    let config = &analysis.config;

    let band = if p.is_narrowband() { "NBFM" } else { "WBFM" };
    let line = Line::from(vec![
        Span::styled(
            format!(" {}  ", config.waveform),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!(
                "fc {:.3} MHz  fm {:.2} kHz  Am {:.2} V  ",
                p.carrier_mhz(),
                p.message_khz(),
                p.amplitude
            ),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("β {:.2} ({band})  Δf {:.2} kHz  ", p.beta, p.delta_f_khz()),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(
            format!("H {}  B {:.2} kHz  ", p.harmonics, p.carson_bandwidth_khz()),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(
            format!("Fs {:.1} MHz  N {}", config.sample_rate / 1e6, analysis.times.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn validation_line(result: &ValidationResult) -> Line<'_> {
    Line::from(Span::styled(
        format!(" {}: {}", result.severity, result.message),
        Style::default().fg(severity_color(result.severity)),
    ))
}

/// Render the noise comparison and any sampling warnings
pub fn render_metrics(frame: &mut Frame, area: Rect, analysis: &Analysis) {
    let block = Block::default().title(" Channel ").borders(Borders::ALL);
    let c = &analysis.comparison;

    let verdict = match c.improvement_percent() {
        Some(pct) if c.fm_wins() => format!("FM {pct:.1}% better"),
        Some(pct) => format!("AM {:.1}% better", -pct),
        None => "AM recovered exactly".to_string(),
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!(" SNR {:.0} dB ({})  ", c.snr_db, c.quality.label()),
            Style::default().fg(quality_color(c.quality)),
        ),
        Span::styled(
            format!("MSE FM {:.4}  MSE AM {:.4}  ", c.mse_fm, c.mse_am),
            Style::default().fg(Color::White),
        ),
        Span::styled(verdict, Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("  seed {}", analysis.config.seed),
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    if analysis.nyquist.severity != Severity::Ok {
        lines.push(validation_line(&analysis.nyquist));
    }
    if let Some(sampling) = &analysis.sampling {
        lines.push(validation_line(sampling));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
