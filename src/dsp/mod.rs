//! Fixed-point filter primitives used to condition CV and audio signals.
//!
//! These components are allocation-free and run in constant time, so they
//! can be called once per control tick from an interrupt-driven loop.

/// Chamberlin state-variable filter with four simultaneous responses.
pub mod filter;
/// Fixed-point scale, corner-frequency and pitch-unit constants.
pub mod fixed;
/// Single-pole low-pass smoother.
pub mod lowpass;

pub use filter::{FilterStateVariable, SvfOutputs, SvfResponse};
pub use lowpass::FilterLp;
