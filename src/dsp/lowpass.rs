use super::fixed::{CF, M};

/*
One-Pole Low-Pass (Smoother)
============================

The simplest recursive filter: each output is a blend of the new input and
the previous output.

    y[n] = alpha·x[n] + (1 - alpha)·y[n-1]

In fixed point, with alpha scaled by M:

    y = (alpha·x + (M - alpha)·y) / M

Small alpha means heavy smoothing (slow glide), alpha near M means the
output follows the input almost immediately.

Typical uses on a CV module:

    slew / portamento    smooth a stepped quantizer output
    de-zipper            remove steps from a knob reading
    envelope follower    after rectifying an audio input


Time Constant
-------------

For small alpha, the output covers ~63% of a step after M/alpha ticks:

    cfreq = 2652 cHz  ->  alpha = 20  ->  ~102 ticks  (~6 ms at 60 µs)

    ┌────────────────── input
    │      ___________
    │   __/            output
    │  /
    │ /
    └/──────────────→ ticks
     |<-102->|  63%

Because of truncation, the output stalls just below a positive step once
alpha·(x - y) < M. Larger signal amplitudes make the gap relatively smaller.
*/

/// Single-pole recursive low-pass filter over 16-bit signals.
///
/// State persists across calls. There is no reset; build a new filter to
/// clear it.
#[derive(Debug, Clone, Default)]
pub struct FilterLp {
    y: i32,
    alpha: i32,
}

impl FilterLp {
    /// Create a filter with the given corner frequency (cHz).
    pub fn new(cfreq: i32) -> Self {
        let mut filter = Self::default();
        filter.set_cfreq(cfreq);
        filter
    }

    /// Derive the mixing coefficient from a corner frequency in centihertz.
    ///
    /// `alpha` approaches `M` as `cfreq` grows. `cfreq · M` must fit in an
    /// `i32`, so keep `cfreq` below ~1 MHz.
    #[inline]
    pub fn set_cfreq(&mut self, cfreq: i32) {
        self.alpha = (cfreq * M) / (CF + cfreq);
    }

    /// Feed one sample and return the new output.
    #[inline]
    pub fn filter(&mut self, signal: i16) -> i16 {
        self.y = (self.alpha * signal as i32 + (M - self.alpha) * self.y) / M;
        self.y as i16
    }

    /// Update the corner frequency, then filter one sample.
    #[inline]
    pub fn filter_with_cfreq(&mut self, signal: i16, cfreq: i32) -> i16 {
        self.set_cfreq(cfreq);
        self.filter(signal)
    }

    /// Current mixing coefficient (scaled by `M`).
    pub fn alpha(&self) -> i32 {
        self.alpha
    }

    /// Most recent output.
    pub fn value(&self) -> i16 {
        self.y as i16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: i16 = 10_000;

    #[test]
    fn alpha_from_cfreq() {
        assert_eq!(FilterLp::new(0).alpha(), 0);
        assert_eq!(FilterLp::new(2652).alpha(), 20);
        // cfreq == CF is the half-way point
        assert_eq!(FilterLp::new(CF).alpha(), M / 2);
    }

    #[test]
    fn alpha_saturates_toward_unity() {
        let mut previous = 0;
        for cfreq in [1_000, 10_000, 100_000, 500_000, 1_000_000] {
            let alpha = FilterLp::new(cfreq).alpha();
            assert!(alpha > previous);
            assert!(alpha < M);
            previous = alpha;
        }
    }

    #[test]
    fn step_response_reaches_one_time_constant() {
        let mut lp = FilterLp::new(2652);
        let tau = (M / lp.alpha()) as usize;

        let mut out = 0;
        for _ in 0..tau {
            out = lp.filter(STEP);
        }
        let ratio = out as f32 / STEP as f32;
        assert!(
            (0.58..0.68).contains(&ratio),
            "expected ~63% after one time constant, got {}",
            ratio
        );
    }

    #[test]
    fn step_response_settles_near_input() {
        let mut lp = FilterLp::new(2652);
        let mut previous = 0;
        for _ in 0..3000 {
            let out = lp.filter(STEP);
            assert!(out >= previous, "step response must be monotonic");
            previous = out;
        }
        assert!(previous <= STEP);
        assert!(previous as f32 > STEP as f32 * 0.98);
    }

    #[test]
    fn decays_back_to_zero() {
        let mut lp = FilterLp::new(2652);
        for _ in 0..3000 {
            lp.filter(STEP);
        }
        for _ in 0..3000 {
            lp.filter(0);
        }
        assert_eq!(lp.value(), 0);
    }

    #[test]
    fn zero_alpha_holds_state() {
        let mut lp = FilterLp::default();
        for _ in 0..100 {
            assert_eq!(lp.filter(STEP), 0);
        }
    }

    #[test]
    fn filter_with_cfreq_updates_alpha() {
        let mut lp = FilterLp::default();
        lp.filter_with_cfreq(STEP, CF);
        assert_eq!(lp.alpha(), M / 2);
        assert_eq!(lp.value(), STEP / 2);
    }

    #[test]
    fn negative_step_mirrors_positive() {
        let mut up = FilterLp::new(2652);
        let mut down = FilterLp::new(2652);
        for _ in 0..500 {
            let a = up.filter(STEP);
            let b = down.filter(-STEP);
            assert_eq!(a, -b);
        }
    }
}
