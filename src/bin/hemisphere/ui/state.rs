//! Messages passed between the UI thread and the audio callback.
//!
//! Everything crossing the ring buffers is `Copy` so the audio side never
//! allocates.

use hemisphere_dsp::{
    dsp::SvfResponse,
    quantize::{NoteMask, Preset},
};

/// Commands sent from the UI thread to the engine
#[derive(Clone, Copy, Debug)]
pub enum ControlMessage {
    NextScale,
    ToggleDegree(usize),
    /// Shift by this many scale steps
    Transpose(i32),
    /// Shift by this many semitones
    Root(i32),
    /// Raise (`true`) or lower the filter cutoff
    Cutoff(bool),
    Resonance(i16),
    NextResponse,
    Requantize,
    Reseed,
    ToggleLooping,
}

/// One decimated sample of the CV path, in pitch units
#[derive(Clone, Copy, Debug, Default)]
pub struct ScopeFrame {
    pub cv: i32,
    pub quantized: i32,
    pub glide: i16,
}

/// Periodic engine snapshot for the status bar
#[derive(Clone, Copy, Debug)]
pub struct StatusUpdate {
    pub tick: u32,
    pub center: i32,
    pub preset: Preset,
    pub mask: NoteMask,
    pub enabled: bool,
    pub note_number: i32,
    pub codeword: i32,
    pub transpose: i32,
    pub root: i32,
    pub cutoff_hz: i32,
    pub resonance: i16,
    pub response: SvfResponse,
    pub link_hits: u32,
    pub looping: bool,
}
