//! Spectrum of the filtered voice
//!
//! The voice runs at the control tick rate, so the usable band tops out
//! a little over 8 kHz. Display bins are log spaced and each one shows the
//! loudest FFT bin it covers, which keeps narrow resonance peaks visible.

use std::sync::Arc;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};

const DISPLAY_BINS: usize = 64;
const LOW_HZ: f32 = 30.0;
const FLOOR_DB: f64 = -90.0;

pub struct SpectrumAnalyzer {
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    scratch: Vec<Complex<f32>>,
    /// FFT bin range `[start, end)` per display bin
    ranges: Vec<(usize, usize)>,
    /// (log10 Hz, dB)
    points: Vec<(f64, f64)>,
}

impl SpectrumAnalyzer {
    pub fn new(len: usize, sample_rate: f32) -> Self {
        let fft = FftPlanner::new().plan_fft_forward(len);

        let window = (0..len)
            .map(|i| {
                let phase = i as f32 / len.saturating_sub(1).max(1) as f32;
                0.5 - 0.5 * (std::f32::consts::TAU * phase).cos()
            })
            .collect();

        let half = (len / 2).max(1);
        let nyquist = sample_rate / 2.0;
        let hz_per_bin = sample_rate / len.max(1) as f32;
        let ratio = (nyquist / LOW_HZ).max(1.0);

        let edge = |i: usize| LOW_HZ * ratio.powf(i as f32 / DISPLAY_BINS as f32);
        let mut ranges = Vec::with_capacity(DISPLAY_BINS);
        let mut points = Vec::with_capacity(DISPLAY_BINS);
        for i in 0..DISPLAY_BINS {
            let (lo, hi) = (edge(i), edge(i + 1));
            let start = ((lo / hz_per_bin) as usize).min(half - 1);
            let end = ((hi / hz_per_bin).ceil() as usize).clamp(start + 1, half);
            ranges.push((start, end));
            points.push((((lo * hi).sqrt() as f64).log10(), FLOOR_DB));
        }

        Self {
            fft,
            window,
            scratch: vec![Complex::default(); len],
            ranges,
            points,
        }
    }

    /// Analyze the most recent window; ignored until enough samples exist
    pub fn update(&mut self, samples: &[f32]) {
        if samples.len() != self.window.len() {
            return;
        }

        for ((slot, sample), w) in self.scratch.iter_mut().zip(samples).zip(&self.window) {
            *slot = Complex::new(sample * w, 0.0);
        }
        self.fft.process(&mut self.scratch);

        let norm = (self.window.len() as f32 / 2.0).powi(2);
        for (point, &(start, end)) in self.points.iter_mut().zip(&self.ranges) {
            let peak = self.scratch[start..end]
                .iter()
                .map(|c| c.norm_sqr() / norm)
                .fold(1e-12_f32, f32::max);
            point.1 = (10.0 * (peak as f64).log10()).max(FLOOR_DB);
        }
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.points
    }
}

pub fn render_spectrum(frame: &mut Frame, area: Rect, points: &[(f64, f64)]) {
    let (min_x, max_x) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first.0, last.0),
        _ => (1.0, 4.0),
    };

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(points);

    let chart = Chart::new(vec![dataset])
        .block(Block::default().title(" Spectrum ").borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .bounds([min_x, max_x])
                .labels(vec!["30", "500", "8k"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([FLOOR_DB, 0.0])
                .labels(vec!["-90", "-45", "0 dB"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
