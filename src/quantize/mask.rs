#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::DspError, MAX_NOTES};

/// Selection of scale degrees, at most [`MAX_NOTES`] wide.
///
/// Degree `i` refers to the `i`th note of a [`Scale`](super::Scale) in
/// ascending order. Degrees past the end of a scale are ignored when
/// configuring a quantizer.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteMask {
    degrees: [bool; MAX_NOTES],
}

impl Default for NoteMask {
    fn default() -> Self {
        Self::all()
    }
}

impl NoteMask {
    pub const fn all() -> Self {
        Self {
            degrees: [true; MAX_NOTES],
        }
    }

    pub const fn none() -> Self {
        Self {
            degrees: [false; MAX_NOTES],
        }
    }

    /// Bit `i` of `bits` selects degree `i`.
    ///
    /// ```
    /// use hemisphere_dsp::quantize::NoteMask;
    /// let mask = NoteMask::from_bits(0b101);
    /// assert!(mask.contains(0) && !mask.contains(1) && mask.contains(2));
    /// ```
    pub fn from_bits(bits: u16) -> Self {
        let mut mask = Self::none();
        for (i, selected) in mask.degrees.iter_mut().enumerate() {
            *selected = bits & (1 << i) != 0;
        }
        mask
    }

    pub fn from_degrees(degrees: &[usize]) -> Result<Self, DspError> {
        let mut mask = Self::none();
        for &degree in degrees {
            mask.insert(degree)?;
        }
        Ok(mask)
    }

    pub fn insert(&mut self, degree: usize) -> Result<(), DspError> {
        let slot = self
            .degrees
            .get_mut(degree)
            .ok_or(DspError::DegreeOutOfRange(degree))?;
        *slot = true;
        Ok(())
    }

    pub fn remove(&mut self, degree: usize) {
        if let Some(slot) = self.degrees.get_mut(degree) {
            *slot = false;
        }
    }

    pub fn toggle(&mut self, degree: usize) {
        if let Some(slot) = self.degrees.get_mut(degree) {
            *slot = !*slot;
        }
    }

    #[inline]
    pub fn contains(&self, degree: usize) -> bool {
        self.degrees.get(degree).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.degrees.iter().filter(|&&d| d).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.degrees.iter().any(|&d| d)
    }

    /// Selected degrees in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.degrees
            .iter()
            .enumerate()
            .filter_map(|(i, &d)| d.then_some(i))
    }

    pub fn bits(&self) -> u16 {
        self.iter().fold(0, |bits, i| bits | (1 << i))
    }
}
