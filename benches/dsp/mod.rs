//! Benchmarks for the fixed-point primitives.

mod filter;
mod lowpass;
mod quantizer;

pub use filter::bench_filter;
pub use lowpass::bench_lowpass;
pub use quantizer::bench_quantizer;
