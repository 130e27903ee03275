#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::fixed::{CF, M};

/*
| response  | output      | passes          | rejects      |
| --------- | ----------- | --------------- | ------------ |
| low-pass  | lp          | below cutoff    | above cutoff |
| high-pass | hp          | above cutoff    | below cutoff |
| band-pass | bp          | around cutoff   | both sides   |
| notch     | hp + lp     | both sides      | at cutoff    |

Chamberlin state-variable filter (Musical Applications of Microprocessors,
2nd ed., pp. 490-492). Two integrators in a loop:

    lp += ft·bp
    hp  = x - lp - qi·bp
    bp += ft·hp

Each line reads the value the previous line just wrote. Reordering them
changes the filter.

ft uses the first-order approximation 2π·fc·dt instead of 2·sin(π·fc·dt),
so the cutoff drifts sharp as fc approaches Nyquist (~8.3 kHz at 60 µs).
*/

/// Which output of the state-variable filter to read.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SvfResponse {
    #[default]
    LowPass,
    BandPass,
    HighPass,
    Notch,
}

impl SvfResponse {
    /// Cycle LP → BP → HP → Notch → LP.
    pub fn next(self) -> Self {
        match self {
            SvfResponse::LowPass => SvfResponse::BandPass,
            SvfResponse::BandPass => SvfResponse::HighPass,
            SvfResponse::HighPass => SvfResponse::Notch,
            SvfResponse::Notch => SvfResponse::LowPass,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SvfResponse::LowPass => "LP",
            SvfResponse::BandPass => "BP",
            SvfResponse::HighPass => "HP",
            SvfResponse::Notch => "Notch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvfOutputs {
    pub lowpass: i16,
    pub bandpass: i16,
    pub highpass: i16,
    pub notch: i16,
}

/// Fixed-point Chamberlin state-variable filter.
#[derive(Debug, Clone, Default)]
pub struct FilterStateVariable {
    lp: i16,
    bp: i16,
    hp: i16,
    no: i16,

    ft: i32,
    qi: i16, // inverse resonance (damping)
}

impl FilterStateVariable {
    /// Create a filter with corner frequency `cfreq` (cHz) and resonance `q`.
    pub fn new(cfreq: i32, q: i16) -> Self {
        let mut filter = Self::default();
        filter.set_cfreq(cfreq);
        filter.set_q(q);
        filter
    }

    /// Advance the filter by one sample.
    ///
    /// Intermediate results are narrowed to 16 bits with wrap-around.
    #[inline]
    pub fn feed(&mut self, signal: i16) {
        self.lp = (self.lp as i32 + self.ft * self.bp as i32 / M) as i16;
        self.hp = (signal as i32 - self.lp as i32 - self.qi as i32 * self.bp as i32 / M) as i16;
        self.bp = (self.bp as i32 + self.ft * self.hp as i32 / M) as i16;
        self.no = (self.hp as i32 + self.lp as i32) as i16;
    }

    /// Set frequency and resonance, then feed one sample.
    #[inline]
    pub fn feed_with(&mut self, signal: i16, cfreq: i32, q: i16) {
        self.set_cfreq(cfreq);
        self.set_q(q);
        self.feed(signal);
    }

    /// Set the corner frequency in centihertz.
    #[inline]
    pub fn set_cfreq(&mut self, cfreq: i32) {
        self.ft = (M * cfreq) / CF;
    }

    /// Set resonance in `0..=QMAX`. Anything above `QMAX` means no damping.
    #[inline]
    pub fn set_q(&mut self, q: i16) {
        self.qi = if q as i32 > M { 0 } else { (M - q as i32) as i16 };
    }

    /// Feed every sample of `buffer` and overwrite it with the chosen response.
    pub fn render(&mut self, buffer: &mut [i16], response: SvfResponse) {
        for sample in buffer.iter_mut() {
            self.feed(*sample);
            *sample = self.output(response);
        }
    }

    #[inline]
    pub fn output(&self, response: SvfResponse) -> i16 {
        match response {
            SvfResponse::LowPass => self.lp,
            SvfResponse::BandPass => self.bp,
            SvfResponse::HighPass => self.hp,
            SvfResponse::Notch => self.no,
        }
    }

    pub fn outputs(&self) -> SvfOutputs {
        SvfOutputs {
            lowpass: self.lp,
            bandpass: self.bp,
            highpass: self.hp,
            notch: self.no,
        }
    }

    pub fn lp(&self) -> i16 {
        self.lp
    }

    pub fn bp(&self) -> i16 {
        self.bp
    }

    pub fn hp(&self) -> i16 {
        self.hp
    }

    pub fn notch(&self) -> i16 {
        self.no
    }

    /// Frequency coefficient (scaled by `M`).
    pub fn ft(&self) -> i32 {
        self.ft
    }

    /// Inverse resonance (scaled by `M`).
    pub fn qi(&self) -> i16 {
        self.qi
    }
}
