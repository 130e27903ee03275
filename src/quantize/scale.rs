#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use heapless::Vec;

use crate::{
    dsp::fixed::{OCTAVE, SEMITONE},
    error::DspError,
    MAX_NOTES,
};

/// A repeating set of pitch offsets.
///
/// `notes` are offsets in pitch units within one `span`, and must be
/// ascending before a scale is handed to a quantizer (see [`Scale::sort`]).
/// Values outside `0..span` are the caller's responsibility.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    span: i16,
    notes: Vec<i16, MAX_NOTES>,
}

impl Scale {
    pub fn new(span: i16, notes: &[i16]) -> Result<Self, DspError> {
        let notes = Vec::from_slice(notes)
            .map_err(|_| DspError::TooManyNotes { count: notes.len() })?;
        Ok(Self { span, notes })
    }

    /// Build a twelve-tone scale from semitone degrees (0 = root).
    ///
    /// ```
    /// use hemisphere_dsp::quantize::Scale;
    /// let triad = Scale::from_semitones(&[0, 4, 7]).unwrap();
    /// assert_eq!(triad.notes(), &[0, 512, 896]);
    /// assert_eq!(triad.span(), 1536);
    /// ```
    pub fn from_semitones(degrees: &[u8]) -> Result<Self, DspError> {
        if degrees.len() > MAX_NOTES {
            return Err(DspError::TooManyNotes {
                count: degrees.len(),
            });
        }
        let mut notes = Vec::new();
        for &degree in degrees {
            // capacity checked above
            let _ = notes.push(degree as i16 * SEMITONE as i16);
        }
        Ok(Self {
            span: OCTAVE as i16,
            notes,
        })
    }

    /// Sort notes ascending. Quantization assumes this order.
    pub fn sort(&mut self) {
        self.notes.sort_unstable();
    }

    pub fn is_sorted(&self) -> bool {
        self.notes.windows(2).all(|w| w[0] <= w[1])
    }

    pub fn span(&self) -> i16 {
        self.span
    }

    pub fn notes(&self) -> &[i16] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
