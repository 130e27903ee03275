//! Fixed-point building blocks for a CV-driven musical instrument module.
//!
//! Everything here runs without floating point or heap allocation and in
//! bounded time, so it can be called from a per-tick interrupt loop:
//!
//! - [`quantize`] snaps pitch CV to a scale, with hysteresis.
//! - [`dsp`] holds a one-pole smoother and a state-variable filter.
//! - [`link`] coordinates two channels that act on the same clock.

pub mod dsp;
pub mod error;
pub mod link;
pub mod quantize;

pub use error::DspError;

/// Largest number of notes in a scale, and of degrees in a selection.
pub const MAX_NOTES: usize = 16;
