//! CV scope widget - raw LFO, quantized steps and glide, in semitones

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use hemisphere_dsp::dsp::fixed::SEMITONE;

use super::state::ScopeFrame;

/// Vertical range either side of the center, in semitones
const RANGE_SEMITONES: f64 = 27.0;

pub fn render_scope(frame: &mut Frame, area: Rect, frames: &[ScopeFrame], center: i32) {
    let block = Block::default().title(" CV ").borders(Borders::ALL);

    let len = frames.len().max(1) as f64;
    let semitones = |pitch: i32| (pitch - center) as f64 / SEMITONE as f64;
    let trace = |value: fn(&ScopeFrame) -> i32| -> Vec<(f64, f64)> {
        frames
            .iter()
            .enumerate()
            .map(|(i, f)| (i as f64 / len, semitones(value(f))))
            .collect()
    };

    let cv = trace(|f| f.cv);
    let quantized = trace(|f| f.quantized);
    let glide = trace(|f| f.glide as i32);

    let datasets = vec![
        Dataset::default()
            .name("cv")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&cv),
        Dataset::default()
            .name("quantized")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&quantized),
        Dataset::default()
            .name("glide")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Magenta))
            .data(&glide),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-RANGE_SEMITONES, RANGE_SEMITONES])
                .labels(vec!["-2 oct", "0", "+2 oct"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
