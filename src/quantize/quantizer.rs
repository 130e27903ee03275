use heapless::Vec;

use super::{NoteMask, QuantizerConfig, Scale};
use crate::MAX_NOTES;

/*
Scale Quantizer
===============

A quantizer turns a continuous pitch CV into the nearest note of a scale.
This one trades a codebook for a little arithmetic so the active scale can
change at any time without rebuilding tables.

Vocabulary
----------

  span          Interval after which the scale repeats (1536 = one octave
                of 12-TET in 1/128 semitone units).

  step          Index into the active notes, 0..count.

  note number   octave * count + step. Counts scale steps, not semitones.

  codeword      The last chosen pitch, notes[step] + octave * span, before
                the root and center offset are added back.

  window        [previous_boundary, next_boundary]. While the input stays
                inside, the codeword is returned without recomputation.


Hysteresis Window
-----------------

A plain nearest-note quantizer flips between two notes whenever the input
sits near their midpoint. Here each boundary is pulled 10/16 of the way
toward the neighbouring note instead of 8/16:

    prev note        current         next note
        |-------|-------*-------|-------|
                  ^  codeword  ^
          previous_boundary   next_boundary
            (10·prev + 6·cur) >> 4

To leave the current note the input must travel past the midpoint by an
extra 1/8 of the interval, so a noisy CV parked near a midpoint does not
retrigger.


Folding
-------

    octave    = floor(pitch / span)
    rel_pitch = pitch - octave * span      (always in 0..span)

The nearest note is searched inside the octave, then checked against the
first note of the octave above (wins only if strictly closer) and the last
note of the octave below (wins on a tie). The asymmetry gives every pitch
exactly one answer at the span edges.

Transpose moves the chosen step, carrying into the octave:

    step = 6, count = 7, transpose = +2   ->  step 1, octave + 1
    step = 0, count = 7, transpose = -1   ->  step 6, octave - 1
*/

const NEIGHBOR_WEIGHT: i32 = 10; // out of 16
const CURRENT_WEIGHT: i32 = 16 - NEIGHBOR_WEIGHT;

/// Offset added to note numbers by callers of [`Quantizer::lookup`] so that
/// negative scale steps stay representable as unsigned display indices.
pub const LOOKUP_INDEX_OFFSET: i32 = 64;

/// Stateful pitch quantizer with hysteresis.
///
/// Owned by one channel. `configure` and `process` run on the same
/// execution context; neither allocates.
#[derive(Debug, Clone)]
pub struct Quantizer {
    config: QuantizerConfig,
    enabled: bool,

    // Active subset of the configured scale
    notes: Vec<i16, MAX_NOTES>,
    span: i32,

    // Last decision
    codeword: i32,
    transpose: i32,
    previous_boundary: i32,
    next_boundary: i32,
    note_number: i32,

    requantize: bool,
}

impl Default for Quantizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Quantizer {
    /// An unconfigured quantizer. It passes pitches through until
    /// [`configure`](Self::configure) selects a non-empty scale.
    pub fn new() -> Self {
        Self::with_config(QuantizerConfig::default())
    }

    pub fn with_config(config: QuantizerConfig) -> Self {
        Self {
            config,
            enabled: true,
            notes: Vec::new(),
            span: 0,
            codeword: 0,
            transpose: 0,
            previous_boundary: 0,
            next_boundary: 0,
            note_number: 0,
            requantize: true,
        }
    }

    /// Reset the last decision. The configured scale is kept.
    ///
    /// The zeroed window is not a real decision, so the next `process`
    /// recomputes.
    pub fn init(&mut self) {
        self.enabled = true;
        self.codeword = 0;
        self.transpose = 0;
        self.previous_boundary = 0;
        self.next_boundary = 0;
        self.requantize = true;
    }

    /// Select the degrees of `scale` chosen by `mask` as the active notes.
    ///
    /// `scale` must be sorted. Degrees past the end of the scale are
    /// ignored. An empty selection or a zero span disables quantization.
    ///
    /// This does not discard the current hysteresis window: call
    /// [`requantize`](Self::requantize) as well if the next `process` must
    /// snap to the new scale immediately.
    pub fn configure(&mut self, scale: &Scale, mask: &NoteMask) {
        debug_assert!(scale.is_sorted(), "scale must be sorted before configure");

        self.notes.clear();
        for (degree, &note) in scale.notes().iter().enumerate() {
            if mask.contains(degree) {
                // at most MAX_NOTES degrees exist, so this never overflows
                let _ = self.notes.push(note);
            }
        }
        self.span = scale.span() as i32;
        self.enabled = !self.notes.is_empty() && self.span != 0;

        if self.enabled {
            tracing::trace!(notes = self.notes.len(), span = self.span, "quantizer configured");
        } else {
            tracing::debug!(
                notes = self.notes.len(),
                span = self.span,
                "quantizer disabled: empty selection or zero span"
            );
        }
    }

    /// Make the next `process` call ignore the hysteresis window.
    pub fn requantize(&mut self) {
        self.requantize = true;
    }

    /// Quantize with no root shift and no transpose.
    #[inline]
    pub fn process_pitch(&mut self, pitch: i32) -> i32 {
        self.process(pitch, 0, 0)
    }

    /// Snap `pitch` to the active scale rooted at `root`, shifted by
    /// `transpose` scale steps.
    ///
    /// Returns `pitch` unchanged while disabled. Inputs must keep
    /// `pitch - root` and the resulting codeword well inside `i32`.
    ///
    /// ```
    /// use hemisphere_dsp::quantize::{NoteMask, Preset, Quantizer};
    ///
    /// let mut quantizer = Quantizer::new();
    /// quantizer.configure(&Preset::Major.scale(), &NoteMask::all());
    ///
    /// // 3072 is the centre (two octaves); +3 semitones snaps to the
    /// // nearer of D (+2) and E (+4), which ties and resolves downward
    /// assert_eq!(quantizer.process(3072 + 3 * 128, 0, 0), 3072 + 2 * 128);
    /// ```
    pub fn process(&mut self, pitch: i32, root: i32, transpose: i32) -> i32 {
        if !self.enabled() {
            return pitch;
        }

        let offset = self.config.offset.pitch_offset();
        let pitch = pitch - root - offset;

        let inside_window = pitch >= self.previous_boundary && pitch <= self.next_boundary;
        if !self.requantize && inside_window && transpose == self.transpose {
            return self.codeword + root + offset;
        }

        self.requantize = false;
        self.quantize(pitch, transpose);
        self.codeword + root + offset
    }

    fn quantize(&mut self, pitch: i32, transpose: i32) {
        let notes = &self.notes;
        let span = self.span;
        let count = notes.len() as i32;
        let first = notes[0] as i32;
        let last = notes[notes.len() - 1] as i32;

        let mut octave = pitch.div_euclid(span);
        let rel_pitch = pitch - span * octave;

        let mut best_distance = i32::MAX;
        let mut step = 0i32;
        for (i, &note) in notes.iter().enumerate() {
            let distance = (rel_pitch - note as i32).abs();
            if distance < best_distance {
                best_distance = distance;
                step = i as i32;
            }
        }

        if (pitch - (octave + 1) * span - first).abs() < best_distance {
            octave += 1;
            step = 0;
        } else if (pitch - (octave - 1) * span - last).abs() <= best_distance {
            octave -= 1;
            step = count - 1;
        }

        step += transpose;
        octave += step / count;
        step %= count;
        if step < 0 {
            step += count;
            octave -= 1;
        }

        let at = |step: i32, octave: i32| notes[step as usize] as i32 + octave * span;

        let codeword = at(step, octave);
        let previous = if step == 0 {
            at(count - 1, octave - 1)
        } else {
            at(step - 1, octave)
        };
        let next = if step == count - 1 {
            at(0, octave + 1)
        } else {
            at(step + 1, octave)
        };

        self.note_number = octave * count + step;
        self.codeword = codeword;
        self.previous_boundary = (NEIGHBOR_WEIGHT * previous + CURRENT_WEIGHT * codeword) >> 4;
        self.next_boundary = (NEIGHBOR_WEIGHT * next + CURRENT_WEIGHT * codeword) >> 4;
        self.transpose = transpose;
    }

    /// Pitch of scale step `index - LOOKUP_INDEX_OFFSET`, without root or
    /// center offset. Does not touch the hysteresis state.
    ///
    /// Returns 0 when no notes are active.
    pub fn lookup(&self, index: i32) -> i32 {
        let count = self.notes.len() as i32;
        if count == 0 {
            return 0;
        }
        let index = index - LOOKUP_INDEX_OFFSET;
        let octave = index.div_euclid(count);
        let step = index.rem_euclid(count);
        self.notes[step as usize] as i32 + octave * self.span
    }

    /// Whether `process` currently quantizes.
    pub fn enabled(&self) -> bool {
        self.enabled && !self.notes.is_empty() && self.span != 0
    }

    /// Note number (octave · count + step) of the last decision.
    pub fn latest_note_number(&self) -> i32 {
        self.note_number
    }

    pub fn codeword(&self) -> i32 {
        self.codeword
    }

    /// Current hysteresis window, inclusive.
    pub fn boundaries(&self) -> (i32, i32) {
        (self.previous_boundary, self.next_boundary)
    }

    pub fn transpose(&self) -> i32 {
        self.transpose
    }

    pub fn span(&self) -> i32 {
        self.span
    }

    pub fn active_notes(&self) -> &[i16] {
        &self.notes
    }

    pub fn config(&self) -> QuantizerConfig {
        self.config
    }
}
