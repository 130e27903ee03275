//! Scale-aware pitch quantization.
//!
//! A [`Scale`] describes which pitches are legal, a [`NoteMask`] picks the
//! degrees in play, and a [`Quantizer`] snaps incoming pitch CV to them with
//! hysteresis. All pitches are integers in 1/128 semitone units.

/// Center-offset selection for the supported voltage conventions.
pub mod config;
/// Fixed-capacity selection of scale degrees.
pub mod mask;
/// Built-in twelve-tone scales.
pub mod presets;
/// The hysteresis quantizer.
pub mod quantizer;
/// Scale definition and ordering.
pub mod scale;

pub use config::{OctaveOffset, QuantizerConfig};
pub use mask::NoteMask;
pub use presets::{Preset, PRESETS};
pub use quantizer::{Quantizer, LOOKUP_INDEX_OFFSET};
pub use scale::Scale;
