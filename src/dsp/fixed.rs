//! Fixed-point constants shared by the filters and the quantizer.

/*
Fixed-Point Arithmetic
======================

The target processor has no floating point unit, so every quantity in this
crate is an integer carrying an implied scale.

Vocabulary
----------

  M           The unit scale. A coefficient of 1.0 is stored as M (2048).
              Products of two scaled values are divided by M once to get
              back into range.

  cHz         Centihertz. Corner frequencies are integers in 1/100 Hz so
              that sub-hertz smoothing (CV slew) needs no fractions.

  tick        One run of the control loop. The filter coefficients assume
              a fixed tick interval dt = 60 µs (≈16.667 kHz).

  pitch unit  1/128 of a semitone. One octave is 12 * 128 = 1536 units.


Truncation Is Behavior
----------------------

Every division here truncates toward zero and every narrowing cast wraps.
That is not an approximation waiting to be fixed: the stepping of the
quantizer and the decay of the filters are defined by it.

    exact:       alpha = 2652 * 2048 / (265258 + 2652) = 20.27...
    fixed-point: alpha = 20

The filters settle a few units short of a step input because the last
fractional increments are truncated away. Callers that need to land
exactly on a target should compare with a tolerance.


The CF Constant
---------------

For a first-order RC section the smoothing coefficient is

    alpha = 2π·fc·dt / (1 + 2π·fc·dt)

With fc in centihertz and dt = 60 µs this becomes

    alpha = fc / (CF + fc)      where CF = 100 / (2π · 60e-6) ≈ 265258
*/

/// Unit scale for coefficients (1.0 == `M`).
pub const M: i32 = 2048;

/// Largest resonance accepted by the state-variable filter.
pub const QMAX: i32 = M;

/// `1 / (2π·dt)` for corner frequencies in centihertz at dt = 60 µs.
pub const CF: i32 = 265_258;

/// Nominal control-tick rate in Hz implied by the 60 µs interval.
pub const TICK_HZ: u32 = 16_667;

/// Pitch units per semitone.
pub const SEMITONE: i32 = 128;

/// Pitch units per octave.
pub const OCTAVE: i32 = 12 * SEMITONE;

/// Convert a frequency in hertz to the centihertz used by `set_cfreq`.
#[inline]
pub const fn hz_to_cfreq(hz: i32) -> i32 {
    hz * 100
}
