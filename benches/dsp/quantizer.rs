//! Benchmarks for the scale quantizer.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use hemisphere_dsp::dsp::fixed::OCTAVE;
use hemisphere_dsp::quantize::{NoteMask, Preset, Quantizer};

use crate::BLOCK_SIZES;

pub fn bench_quantizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/quantizer");

    for &size in BLOCK_SIZES {
        // Slow ramp over four octaves: mostly window hits
        let ramp: Vec<i32> = (0..size)
            .map(|i| (i as i32 * 4 * OCTAVE) / size as i32)
            .collect();

        let mut quantizer = Quantizer::new();
        quantizer.configure(&Preset::Major.scale(), &NoteMask::all());
        group.bench_with_input(BenchmarkId::new("ramp", size), &size, |b, _| {
            b.iter(|| {
                for &pitch in &ramp {
                    black_box(quantizer.process(black_box(pitch), 0, 0));
                }
            })
        });

        // Every call recomputes
        let mut quantizer = Quantizer::new();
        quantizer.configure(&Preset::Chromatic.scale(), &NoteMask::all());
        group.bench_with_input(BenchmarkId::new("requantize", size), &size, |b, _| {
            b.iter(|| {
                for &pitch in &ramp {
                    quantizer.requantize();
                    black_box(quantizer.process(black_box(pitch), 0, 3));
                }
            })
        });

        let mut quantizer = Quantizer::new();
        quantizer.configure(&Preset::Blues.scale(), &NoteMask::all());
        group.bench_with_input(BenchmarkId::new("lookup", size), &size, |b, &size| {
            b.iter(|| {
                for index in 0..size as i32 {
                    black_box(quantizer.lookup(black_box(index)));
                }
            })
        });
    }

    group.finish();
}
