//! Benchmarks for the control-rate DSP path.
//!
//! Run with: cargo bench
//!
//! Everything here runs once per 60 µs control tick, so a block of N
//! samples has roughly N * 60 µs to finish:
//!   - 64 ticks  = 3.84ms
//!   - 256 ticks = 15.4ms
//!
//! Benchmark groups:
//!   - dsp/quantizer  Hysteresis hits, forced requantize, lookup
//!   - dsp/lowpass    One-pole glide
//!   - dsp/filter     State-variable filter, all four responses

use criterion::{criterion_group, criterion_main};

mod dsp;

/// Block sizes, in control ticks.
pub const BLOCK_SIZES: &[usize] = &[64, 256, 1024];

criterion_group!(
    benches,
    dsp::bench_quantizer,
    dsp::bench_lowpass,
    dsp::bench_filter,
);
criterion_main!(benches);
