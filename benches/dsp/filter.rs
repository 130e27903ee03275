//! Benchmarks for the state-variable filter.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use hemisphere_dsp::dsp::{fixed::hz_to_cfreq, FilterStateVariable, SvfResponse};

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        // Sawtooth ramp
        let input: Vec<i16> = (0..size)
            .map(|i| ((i as i32 * 8000) / size as i32 - 4000) as i16)
            .collect();

        for response in [
            SvfResponse::LowPass,
            SvfResponse::BandPass,
            SvfResponse::HighPass,
            SvfResponse::Notch,
        ] {
            let mut filter = FilterStateVariable::new(hz_to_cfreq(1000), 1024);
            let mut buffer = input.clone();
            group.bench_with_input(
                BenchmarkId::new(response.name(), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        buffer.copy_from_slice(&input);
                        filter.render(black_box(&mut buffer), black_box(response));
                    })
                },
            );
        }

        // Cutoff swept every sample
        let mut filter = FilterStateVariable::new(hz_to_cfreq(1000), 1024);
        group.bench_with_input(BenchmarkId::new("swept", size), &size, |b, _| {
            b.iter(|| {
                for (i, &x) in input.iter().enumerate() {
                    filter.feed_with(black_box(x), hz_to_cfreq(200 + i as i32 % 2000), 1024);
                    black_box(filter.lp());
                }
            })
        });
    }

    group.finish();
}
