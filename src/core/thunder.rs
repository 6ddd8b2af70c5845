//! Thunder synthesis parameters
//!
//! Thunder is brown noise pushed through a lowpass then a bandpass filter and
//! shaped by a fast attack, a long decay and an exponential release. Everything
//! here is plain data so the browser audio graph only has to wire it up.

use rand::Rng;

/// Master volume when sound is on
pub const MASTER_VOLUME: f32 = 0.8;
/// Time constant (seconds) for master volume ramps; avoids clicks
pub const VOLUME_RAMP_TIME_CONSTANT: f64 = 0.02;

pub const MIN_DURATION_SECS: f64 = 2.2;
pub const MAX_DURATION_SECS: f64 = 3.0;
pub const MIN_LOWPASS_HZ: f32 = 800.0;
pub const MAX_LOWPASS_HZ: f32 = 1200.0;
pub const MIN_ATTACK_SECS: f64 = 0.08;
pub const MAX_ATTACK_SECS: f64 = 0.12;

pub const BANDPASS_HZ: f32 = 120.0;
pub const BANDPASS_Q: f32 = 0.7;

pub const PEAK_GAIN: f32 = 0.9;
pub const DECAY_GAIN: f32 = 0.08;
/// Fraction of the duration at which the decay stage ends
pub const DECAY_FRACTION: f64 = 0.6;
/// Exponential ramps cannot reach zero
pub const RELEASE_FLOOR: f32 = 0.001;

/// Output scale applied to the brown noise
pub const NOISE_LEVEL: f32 = 0.7;
/// Leak of the brown noise integrator
const BROWN_STEP: f32 = 0.02;

/// How a gain automation point is reached
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ramp {
    Set,
    Linear,
    Exponential,
}

/// A point on the amplitude envelope, in audio-clock seconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnvelopePoint {
    pub ramp: Ramp,
    pub value: f32,
    pub at: f64,
}

/// Randomized parameters for one thunder clap
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThunderVoice {
    pub duration_secs: f64,
    pub lowpass_hz: f32,
    pub attack_secs: f64,
}

impl ThunderVoice {
    pub fn randomized<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            duration_secs: rng.gen_range(MIN_DURATION_SECS..MAX_DURATION_SECS),
            lowpass_hz: rng.gen_range(MIN_LOWPASS_HZ..MAX_LOWPASS_HZ),
            attack_secs: rng.gen_range(MIN_ATTACK_SECS..MAX_ATTACK_SECS),
        }
    }

    /// Number of mono frames in the noise buffer
    pub fn frame_count(&self, sample_rate: f32) -> usize {
        (f64::from(sample_rate) * self.duration_secs).floor() as usize
    }

    /// Gain automation starting at `start` (audio-clock seconds)
    pub fn envelope(&self, start: f64) -> [EnvelopePoint; 4] {
        [
            EnvelopePoint {
                ramp: Ramp::Set,
                value: 0.0,
                at: start,
            },
            EnvelopePoint {
                ramp: Ramp::Linear,
                value: PEAK_GAIN,
                at: start + self.attack_secs,
            },
            EnvelopePoint {
                ramp: Ramp::Exponential,
                value: DECAY_GAIN,
                at: start + self.duration_secs * DECAY_FRACTION,
            },
            EnvelopePoint {
                ramp: Ramp::Exponential,
                value: RELEASE_FLOOR,
                at: start + self.duration_secs,
            },
        ]
    }

    /// Render the noise buffer for this voice
    pub fn render<R: Rng + ?Sized>(&self, rng: &mut R, sample_rate: f32) -> Vec<f32> {
        brown_noise(rng, self.frame_count(sample_rate))
    }
}

/// Integrated white noise, scaled by [`NOISE_LEVEL`]
///
/// The integrator output stays within [-1, 1] so samples stay within
/// [-NOISE_LEVEL, NOISE_LEVEL].
pub fn brown_noise<R: Rng + ?Sized>(rng: &mut R, frames: usize) -> Vec<f32> {
    let mut last = 0.0f32;
    (0..frames)
        .map(|_| {
            let white: f32 = rng.gen_range(-1.0..1.0);
            last = (last + BROWN_STEP * white) / (1.0 + BROWN_STEP);
            last * NOISE_LEVEL
        })
        .collect()
}

/// Audio-clock start time for a clap requested `delay_ms` from `now`
pub fn start_time(now: f64, delay_ms: u32) -> f64 {
    now + f64::from(delay_ms) / 1000.0
}
