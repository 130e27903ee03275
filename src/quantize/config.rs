#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::fixed::OCTAVE;

/// Center bias removed from the input pitch before quantizing.
///
/// The bias trades usable CV range below zero for headroom above it. Both
/// settings reproduce a hardware voltage convention.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OctaveOffset {
    /// Two octaves (Eurorack 1V/oct).
    #[default]
    Standard,
    /// Four octaves (4U 1.2V/oct systems).
    Extended,
}

impl OctaveOffset {
    /// Offset in pitch units.
    #[inline]
    pub const fn pitch_offset(self) -> i32 {
        match self {
            OctaveOffset::Standard => OCTAVE << 1,
            OctaveOffset::Extended => OCTAVE << 2,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuantizerConfig {
    pub offset: OctaveOffset,
}
