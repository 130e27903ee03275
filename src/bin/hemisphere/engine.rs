//! Engine - the control-tick loop driven from the audio callback
//!
//! The quantizer and filters assume a fixed 60 µs tick. The audio device
//! runs at its own rate, so a phase accumulator decides how many control
//! ticks fall inside each output frame and the last filter output is held
//! between ticks.

use hemisphere_dsp::{
    dsp::{
        fixed::{hz_to_cfreq, OCTAVE, QMAX, SEMITONE, TICK_HZ},
        FilterLp, FilterStateVariable, SvfResponse,
    },
    link::{Hemisphere, HemisphereLink},
    quantize::{NoteMask, Preset, Quantizer, QuantizerConfig},
};
use rtrb::{Consumer, Producer};

use super::ui::state::{ControlMessage, ScopeFrame, StatusUpdate};

/// Clock hemisphere fires twice a second
const CLOCK_TICKS: u32 = TICK_HZ / 2;
/// Push one scope frame every N ticks
const SCOPE_DECIMATION: u32 = 64;
/// Push one status snapshot every N ticks
const STATUS_INTERVAL: u32 = 1024;
/// Frequency at the center pitch (C3)
const CENTER_HZ: f32 = 130.81;
/// Triangle LFO swings this far either side of the center
const LFO_DEPTH: i32 = 2 * OCTAVE;
/// Portamento on the quantized pitch
const GLIDE_CFREQ: i32 = hz_to_cfreq(6);
const SAW_AMPLITUDE: f32 = 4000.0;
const OUTPUT_SCALE: f32 = 1.0 / 8192.0;
const CUTOFF_RANGE: (i32, i32) = (20, 4_000);
const RESONANCE_MAX: i16 = (QMAX - 128) as i16;

/// Startup settings taken from the command line
pub struct EngineSettings {
    pub preset: Preset,
    pub mask: NoteMask,
    pub config: QuantizerConfig,
    pub lfo_hz: f32,
}

/// Ring buffer endpoints owned by the audio side
pub struct EngineIo {
    pub control_rx: Consumer<ControlMessage>,
    pub scope_tx: Producer<ScopeFrame>,
    pub audio_tx: Producer<f32>,
    pub status_tx: Producer<StatusUpdate>,
}

pub struct Engine {
    // Left hemisphere: LFO -> quantizer -> glide
    quantizer: Quantizer,
    preset: Preset,
    mask: NoteMask,
    center: i32,
    root: i32,
    transpose: i32,
    glide: FilterLp,
    lfo_phase: u32,
    lfo_period: u32,

    // Voice: saw -> state-variable filter
    svf: FilterStateVariable,
    response: SvfResponse,
    cutoff_hz: i32,
    resonance: i16,
    osc_phase: f32,
    output: f32,

    // Right hemisphere is the clock; the link joins the two
    link: HemisphereLink,
    link_hits: u32,

    tick: u32,
    tick_accumulator: u32,
    sample_rate: u32,

    io: EngineIo,
}

impl Engine {
    pub fn new(settings: EngineSettings, sample_rate: u32, io: EngineIo) -> Self {
        let cutoff_hz = 800;
        let resonance = 1024;
        let lfo_period = (TICK_HZ as f32 / settings.lfo_hz.max(0.001)) as u32;

        let mut engine = Self {
            quantizer: Quantizer::with_config(settings.config),
            preset: settings.preset,
            mask: settings.mask,
            center: settings.config.offset.pitch_offset(),
            root: 0,
            transpose: 0,
            glide: FilterLp::new(GLIDE_CFREQ),
            lfo_phase: 0,
            lfo_period: lfo_period.max(2),
            svf: FilterStateVariable::new(hz_to_cfreq(cutoff_hz), resonance),
            response: SvfResponse::LowPass,
            cutoff_hz,
            resonance,
            osc_phase: 0.0,
            output: 0.0,
            link: HemisphereLink::default(),
            link_hits: 0,
            tick: 0,
            tick_accumulator: 0,
            sample_rate: sample_rate.max(1),
            io,
        };
        engine.reconfigure();
        engine
    }

    /// Fill an interleaved output buffer
    pub fn process_block(&mut self, data: &mut [f32], channels: usize) {
        self.poll_controls();

        for frame in data.chunks_mut(channels.max(1)) {
            self.tick_accumulator += TICK_HZ;
            while self.tick_accumulator >= self.sample_rate {
                self.tick_accumulator -= self.sample_rate;
                self.tick();
            }
            frame.fill(self.output);
        }
    }

    pub fn status(&self) -> StatusUpdate {
        StatusUpdate {
            tick: self.tick,
            center: self.center,
            preset: self.preset,
            mask: self.mask,
            enabled: self.quantizer.enabled(),
            note_number: self.quantizer.latest_note_number(),
            codeword: self.quantizer.codeword(),
            transpose: self.transpose,
            root: self.root,
            cutoff_hz: self.cutoff_hz,
            resonance: self.resonance,
            response: self.response,
            link_hits: self.link_hits,
            looping: self.link.is_looping(),
        }
    }

    fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        let now = self.tick;

        if now % CLOCK_TICKS == 0 {
            self.link.register_div(Hemisphere::Right, now);
            self.link.trigger();
        }
        if self.link.should_reseed() {
            self.lfo_phase = 0;
        }

        let cv = self.next_cv();
        let note = self.quantizer.latest_note_number();
        let quantized = self.quantizer.process(cv, self.root, self.transpose);
        if self.quantizer.enabled() && self.quantizer.latest_note_number() != note {
            self.link.register_melo(Hemisphere::Left, now);
        }
        // the forced decision lands on the next tick
        if self.link.ready(now) {
            self.link_hits = self.link_hits.wrapping_add(1);
            self.quantizer.requantize();
        }
        let glide = self
            .glide
            .filter(quantized.clamp(i16::MIN as i32, i16::MAX as i32) as i16);

        let octaves = (glide as i32 - self.center) as f32 / OCTAVE as f32;
        let freq = CENTER_HZ * octaves.exp2();
        self.osc_phase += freq / TICK_HZ as f32;
        if self.osc_phase >= 1.0 {
            self.osc_phase -= self.osc_phase.floor();
        }
        let saw = ((self.osc_phase * 2.0 - 1.0) * SAW_AMPLITUDE) as i16;

        self.svf.feed(saw);
        self.output = (self.svf.output(self.response) as f32 * OUTPUT_SCALE).clamp(-1.0, 1.0);

        let _ = self.io.audio_tx.push(self.output);
        if now % SCOPE_DECIMATION == 0 {
            let _ = self.io.scope_tx.push(ScopeFrame {
                cv,
                quantized,
                glide,
            });
        }
        if now % STATUS_INTERVAL == 0 {
            let _ = self.io.status_tx.push(self.status());
        }
    }

    /// Triangle LFO around the center pitch. While looping, the phase
    /// restarts at the latched loop step instead of the full period.
    fn next_cv(&mut self) -> i32 {
        let wrap = if self.link.is_looping() {
            (self.link.loop_step().max(1) as u32).min(self.lfo_period)
        } else {
            self.lfo_period
        };
        self.lfo_phase = (self.lfo_phase + 1) % wrap;

        let half = (self.lfo_period / 2).max(1);
        let rising = if self.lfo_phase < half {
            self.lfo_phase
        } else {
            self.lfo_period - self.lfo_phase
        };
        let swing = (rising as i64 * 2 * LFO_DEPTH as i64 / half as i64) as i32;
        self.center + swing - LFO_DEPTH
    }

    fn poll_controls(&mut self) {
        while let Ok(message) = self.io.control_rx.pop() {
            self.apply(message);
        }
    }

    fn apply(&mut self, message: ControlMessage) {
        match message {
            ControlMessage::NextScale => {
                self.preset = self.preset.next();
                self.mask = NoteMask::all();
                self.reconfigure();
            }
            ControlMessage::ToggleDegree(degree) => {
                self.mask.toggle(degree);
                self.reconfigure();
            }
            ControlMessage::Transpose(steps) => self.transpose += steps,
            ControlMessage::Root(semitones) => {
                self.root = (self.root + semitones * SEMITONE).rem_euclid(OCTAVE);
            }
            ControlMessage::Cutoff(up) => {
                let cutoff = if up {
                    self.cutoff_hz * 9 / 8 + 1
                } else {
                    self.cutoff_hz * 8 / 9
                };
                self.cutoff_hz = cutoff.clamp(CUTOFF_RANGE.0, CUTOFF_RANGE.1);
                self.svf.set_cfreq(hz_to_cfreq(self.cutoff_hz));
            }
            ControlMessage::Resonance(delta) => {
                self.resonance = (self.resonance + delta).clamp(0, RESONANCE_MAX);
                self.svf.set_q(self.resonance);
            }
            ControlMessage::NextResponse => self.response = self.response.next(),
            ControlMessage::Requantize => self.quantizer.requantize(),
            ControlMessage::Reseed => self.link.reseed(),
            ControlMessage::ToggleLooping => {
                let looping = !self.link.is_looping();
                if looping {
                    self.link.set_loop_step(self.lfo_phase.max(1) as i32);
                }
                self.link.set_looping(looping);
            }
        }
    }

    /// Apply the current scale and selection. Reconfiguring keeps the old
    /// hysteresis window, so force a fresh decision as well.
    fn reconfigure(&mut self) {
        self.quantizer.configure(&self.preset.scale(), &self.mask);
        self.quantizer.requantize();
    }
}
