use hemisphere_dsp::{
    dsp::{
        fixed::{hz_to_cfreq, OCTAVE, QMAX, SEMITONE},
        FilterLp, FilterStateVariable, SvfResponse,
    },
    quantize::{
        NoteMask, OctaveOffset, Preset, Quantizer, QuantizerConfig, Scale, LOOKUP_INDEX_OFFSET,
    },
};

const CENTER: i32 = 2 * OCTAVE;

fn quantizer(preset: Preset) -> Quantizer {
    let mut q = Quantizer::new();
    q.configure(&preset.scale(), &NoteMask::all());
    q
}

#[test]
fn quantized_output_is_a_fixed_point() {
    for preset in Preset::ALL {
        let mut q = quantizer(preset);
        for pitch in (-2 * OCTAVE..6 * OCTAVE).step_by(37) {
            q.requantize();
            let out = q.process_pitch(pitch);
            assert_eq!(q.process_pitch(out), out, "{} at {pitch}", preset.name());
        }
    }
}

#[test]
fn output_lands_on_scale_notes() {
    let mut q = quantizer(Preset::MinorPentatonic);
    let degrees: Vec<i32> = Preset::MinorPentatonic
        .degrees()
        .iter()
        .map(|&d| d as i32 * SEMITONE)
        .collect();
    for pitch in (0..4 * OCTAVE).step_by(23) {
        let out = q.process_pitch(pitch) - CENTER;
        assert!(degrees.contains(&out.rem_euclid(OCTAVE)), "{out} off scale");
    }
}

#[test]
fn noisy_input_near_midpoint_does_not_retrigger() {
    let mut q = quantizer(Preset::Chromatic);
    // midpoint between C and C# above center
    let midpoint = CENTER + SEMITONE / 2;
    let first = q.process_pitch(midpoint - 10);
    for i in 0..200 {
        let jitter = (i % 7) * 3 - 9;
        assert_eq!(q.process_pitch(midpoint + jitter), first);
    }
}

#[test]
fn empty_selection_passes_through() {
    let mut q = Quantizer::new();
    q.configure(&Preset::Major.scale(), &NoteMask::none());
    assert!(!q.enabled());
    for pitch in [-5000, 0, 1, 3072, 9999] {
        assert_eq!(q.process(pitch, 384, 2), pitch);
    }
}

#[test]
fn lookup_matches_last_decision() {
    let mut q = quantizer(Preset::HarmonicMinor);
    for pitch in (-OCTAVE..5 * OCTAVE).step_by(101) {
        let out = q.process_pitch(pitch);
        let index = q.latest_note_number() + LOOKUP_INDEX_OFFSET;
        assert_eq!(q.lookup(index), out - CENTER);
    }
}

#[test]
fn span_edges_resolve_one_way() {
    let scale = Scale::new(OCTAVE as i16, &[0, 1024]).unwrap();
    let mut q = Quantizer::new();
    q.configure(&scale, &NoteMask::all());

    // 256 from both 1024 and the next octave's 0: the lower note keeps it
    assert_eq!(q.process_pitch(CENTER + 1280), CENTER + 1024);
    q.requantize();
    assert_eq!(q.process_pitch(CENTER + 1281), CENTER + OCTAVE);
}

#[test]
fn transpose_carries_across_octaves() {
    let mut q = quantizer(Preset::Major);
    assert_eq!(q.process(CENTER, 0, 7), CENTER + OCTAVE);
    assert_eq!(q.process(CENTER, 0, -1), CENTER - SEMITONE);
    assert_eq!(q.process(CENTER, 0, -8), CENTER - OCTAVE - SEMITONE);
}

#[test]
fn extended_offset_moves_the_center() {
    let mut q = Quantizer::with_config(QuantizerConfig {
        offset: OctaveOffset::Extended,
    });
    q.configure(&Preset::Major.scale(), &NoteMask::all());
    let center = 4 * OCTAVE;
    assert_eq!(q.process_pitch(center + 3 * SEMITONE), center + 2 * SEMITONE);
    assert_eq!(q.latest_note_number(), 1);
}

#[test]
fn lowpass_step_settles_without_overshoot() {
    // ~26.5 Hz, a 102-tick time constant
    let mut lp = FilterLp::new(2652);
    let mut last = 0;
    for _ in 0..3000 {
        let y = lp.filter(10_000);
        assert!(y >= last && y <= 10_000);
        last = y;
    }
    // truncation stalls the approach just short of the input
    assert_eq!(last, 9898);
}

#[test]
fn undamped_filter_keeps_ringing() {
    let ring = |q: i16| {
        let mut svf = FilterStateVariable::new(hz_to_cfreq(1000), q);
        svf.feed(8000);
        let mut peak = 0u16;
        for i in 0..4000 {
            svf.feed(0);
            if i >= 3000 {
                peak = peak.max(svf.output(SvfResponse::BandPass).unsigned_abs());
            }
        }
        peak
    };

    assert!(ring(1024) <= 1);
    assert!(ring(QMAX as i16) > 3000);
    // anything above QMAX is clamped to zero damping
    assert_eq!(ring(3000), ring(QMAX as i16));
}

#[test]
fn notch_is_sum_of_lowpass_and_highpass() {
    let mut svf = FilterStateVariable::new(hz_to_cfreq(500), 1536);
    for i in 0..500i32 {
        let x = ((i * 7919) % 8000 - 4000) as i16;
        svf.feed(x);
        let out = svf.outputs();
        assert_eq!(out.notch, out.lowpass.wrapping_add(out.highpass));
    }
}
