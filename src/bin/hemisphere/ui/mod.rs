//! TUI module for hemisphere
//!
//! Shows the CV path (raw, quantized, glide), the spectrum of the filtered
//! voice and a status bar. Keys are forwarded to the engine as
//! [`ControlMessage`]s.

mod scope;
mod spectrum;
pub mod state;
mod status;

use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};

use hemisphere_dsp::dsp::fixed::TICK_HZ;

use scope::render_scope;
use spectrum::{render_spectrum, SpectrumAnalyzer};
use state::{ControlMessage, ScopeFrame, StatusUpdate};
use status::render_status;

/// Scope history, in decimated frames
const SCOPE_LEN: usize = 512;
/// FFT window over the control-rate output
const FFT_LEN: usize = 1024;

/// Ring buffer endpoints owned by the UI side
pub struct UiIo {
    pub control_tx: Producer<ControlMessage>,
    pub scope_rx: Consumer<ScopeFrame>,
    pub audio_rx: Consumer<f32>,
    pub status_rx: Consumer<StatusUpdate>,
}

pub struct UiApp {
    io: UiIo,
    status: StatusUpdate,
    scope: Vec<ScopeFrame>,
    audio: Vec<f32>,
    spectrum: SpectrumAnalyzer,
    should_quit: bool,
}

impl UiApp {
    pub fn new(io: UiIo, initial: StatusUpdate) -> Self {
        Self {
            io,
            status: initial,
            scope: Vec::with_capacity(SCOPE_LEN * 2),
            audio: Vec::with_capacity(FFT_LEN * 2),
            spectrum: SpectrumAnalyzer::new(FFT_LEN, TICK_HZ as f32),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_engine();

            terminal.draw(|frame| self.render(frame))?;

            // ~60fps
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

    fn poll_engine(&mut self) {
        while let Ok(status) = self.io.status_rx.pop() {
            self.status = status;
        }

        while let Ok(frame) = self.io.scope_rx.pop() {
            self.scope.push(frame);
        }
        keep_last(&mut self.scope, SCOPE_LEN);

        while let Ok(sample) = self.io.audio_rx.pop() {
            self.audio.push(sample);
        }
        keep_last(&mut self.audio, FFT_LEN);
        self.spectrum.update(&self.audio);
    }

    fn handle_key(&mut self, key: KeyCode) {
        let message = match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => ControlMessage::NextScale,
            KeyCode::Char('0') => ControlMessage::ToggleDegree(9),
            KeyCode::Char(c @ '1'..='9') => ControlMessage::ToggleDegree(c as usize - '1' as usize),
            KeyCode::Up => ControlMessage::Transpose(1),
            KeyCode::Down => ControlMessage::Transpose(-1),
            KeyCode::Right => ControlMessage::Root(1),
            KeyCode::Left => ControlMessage::Root(-1),
            KeyCode::Char(']') => ControlMessage::Cutoff(true),
            KeyCode::Char('[') => ControlMessage::Cutoff(false),
            KeyCode::Char('.') => ControlMessage::Resonance(128),
            KeyCode::Char(',') => ControlMessage::Resonance(-128),
            KeyCode::Char('f') => ControlMessage::NextResponse,
            KeyCode::Char('r') => ControlMessage::Requantize,
            KeyCode::Char('s') => ControlMessage::Reseed,
            KeyCode::Char('l') => ControlMessage::ToggleLooping,
            _ => return,
        };

        if let Err(err) = self.io.control_tx.push(message) {
            tracing::warn!(?err, "control queue full, dropping message");
        }
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Status bar
                Constraint::Min(8),     // CV scope
                Constraint::Length(10), // Spectrum
                Constraint::Length(1),  // Help bar
            ])
            .split(frame.area());

        render_status(frame, chunks[0], &self.status);
        render_scope(frame, chunks[1], &self.scope, self.status.center);
        render_spectrum(frame, chunks[2], self.spectrum.data());

        let help = Paragraph::new(
            " [Q] Quit  [Tab] Scale  [1-0] Degrees  [↑↓] Transpose  [←→] Root  \
             [[ ]] Cutoff  [, .] Res  [F] Response  [R] Requantize  [S] Reseed  [L] Loop",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}

fn keep_last<T>(buffer: &mut Vec<T>, len: usize) {
    if buffer.len() > len {
        let excess = buffer.len() - len;
        buffer.drain(..excess);
    }
}
