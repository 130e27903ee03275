//! Status bar - scale, active degrees, quantizer state and filter settings

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use hemisphere_dsp::dsp::fixed::{OCTAVE, SEMITONE, TICK_HZ};

use super::state::StatusUpdate;

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

pub fn render_status(frame: &mut Frame, area: Rect, status: &StatusUpdate) {
    let block = Block::default().title(" hemisphere ").borders(Borders::ALL);

    let (state, state_color) = if status.enabled {
        ("●", Color::Green)
    } else {
        ("○ bypass", Color::Yellow)
    };
    let seconds = status.tick as f32 / TICK_HZ as f32;

    let mut spans = vec![
        Span::styled(format!(" {state} "), Style::default().fg(state_color)),
        Span::styled(
            format!("{}  ", status.preset.name()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ];
    spans.extend(degree_spans(status));
    spans.extend([
        Span::styled(
            format!(
                "  note {:>3}  {}  ",
                status.note_number,
                pitch_name(status.codeword + status.root)
            ),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!(
                "root {}  xpose {:+}  ",
                NOTE_NAMES[(status.root / SEMITONE).rem_euclid(12) as usize],
                status.transpose
            ),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!(
                "{} {} Hz q{}  ",
                status.response.name(),
                status.cutoff_hz,
                status.resonance
            ),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(
            format!(
                "link {}{}  {seconds:.1}s",
                status.link_hits,
                if status.looping { " loop" } else { "" }
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

/// One cell per scale degree: selected degrees lit, deselected dimmed
fn degree_spans(status: &StatusUpdate) -> Vec<Span<'static>> {
    status
        .preset
        .degrees()
        .iter()
        .enumerate()
        .map(|(i, &semitone)| {
            let style = if status.mask.contains(i) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!("{} ", NOTE_NAMES[semitone as usize % 12]), style)
        })
        .collect()
}

/// Relative pitch as note name plus octave number, C3 at zero
fn pitch_name(pitch: i32) -> String {
    let octave = pitch.div_euclid(OCTAVE) + 3;
    let semitone = (pitch.rem_euclid(OCTAVE) + SEMITONE / 2) / SEMITONE;
    let (name, octave) = if semitone == 12 {
        (NOTE_NAMES[0], octave + 1)
    } else {
        (NOTE_NAMES[semitone as usize], octave)
    };
    format!("{name}{octave}")
}
