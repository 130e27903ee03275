//! Benchmarks for the one-pole lowpass.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use hemisphere_dsp::dsp::{fixed::hz_to_cfreq, FilterLp};

use crate::BLOCK_SIZES;

pub fn bench_lowpass(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/lowpass");

    for &size in BLOCK_SIZES {
        // Square steps, the usual glide input
        let input: Vec<i16> = (0..size)
            .map(|i| if (i / 32) % 2 == 0 { 4000 } else { -4000 })
            .collect();

        let mut filter = FilterLp::new(hz_to_cfreq(20));
        group.bench_with_input(BenchmarkId::new("fixed", size), &size, |b, _| {
            b.iter(|| {
                for &x in &input {
                    black_box(filter.filter(black_box(x)));
                }
            })
        });

        let mut filter = FilterLp::default();
        group.bench_with_input(BenchmarkId::new("modulated", size), &size, |b, _| {
            b.iter(|| {
                for (i, &x) in input.iter().enumerate() {
                    let cfreq = hz_to_cfreq(10 + i as i32 % 500);
                    black_box(filter.filter_with_cfreq(black_box(x), cfreq));
                }
            })
        });
    }

    group.finish();
}
