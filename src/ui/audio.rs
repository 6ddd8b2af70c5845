//! Sound context: Web Audio thunder gated by a user-controlled flag
//!
//! Browsers only allow an `AudioContext` to start after a user gesture, so the
//! audio graph is created lazily the first time sound is switched on and then
//! lives for the rest of the page session.

use leptos::prelude::*;

use crate::core::MASTER_VOLUME;
#[cfg(not(feature = "ssr"))]
use crate::core::{
    BANDPASS_HZ, BANDPASS_Q, Ramp, ThunderVoice, VOLUME_RAMP_TIME_CONSTANT, start_time,
};
#[cfg(not(feature = "ssr"))]
use leptos::web_sys;
#[cfg(not(feature = "ssr"))]
use wasm_bindgen::JsValue;

/// Label for the sound toggle button
pub fn sound_label(enabled: bool) -> &'static str {
    if enabled { "Sound: On" } else { "Sound: Off" }
}

/// An audio output that can be switched on and can play thunder
pub trait AudioBackend: Sized {
    type Error: std::fmt::Debug;

    /// Build the output; called lazily on the first enable
    fn create() -> Result<Self, Self::Error>;
    /// Wake an output the browser suspended before the first gesture
    fn resume(&self);
    /// Move master volume towards `target` without clicking
    fn ramp_master(&self, target: f32);
    /// Schedule one thunder clap `delay_ms` from now
    fn thunder(&self, delay_ms: u32) -> Result<(), Self::Error>;
}

/// Backend used by the page: Web Audio in the browser
#[cfg(not(feature = "ssr"))]
pub type PageAudio = AudioGraph;
/// Backend used by the page: no audio output during SSR
#[cfg(feature = "ssr")]
pub type PageAudio = NoAudio;

/// Owns the (lazily created) backend and the enabled flag
pub struct AudioEngine<B: AudioBackend = PageAudio> {
    enabled: bool,
    backend: Option<B>,
    init_failed: bool,
}

impl<B: AudioBackend> Default for AudioEngine<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: AudioBackend> AudioEngine<B> {
    pub fn new() -> Self {
        Self {
            enabled: false,
            backend: None,
            init_failed: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the backend exists
    pub fn is_initialized(&self) -> bool {
        self.backend.is_some()
    }

    pub fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }

    /// Switch sound on or off. Idempotent.
    ///
    /// Enabling creates the backend if needed and resumes it.
    /// Both directions ramp the master volume instead of jumping.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;

        if enabled {
            self.ensure_backend();
        }
        if let Some(backend) = &self.backend {
            if enabled {
                backend.resume();
            }
            backend.ramp_master(if enabled { MASTER_VOLUME } else { 0.0 });
        }
    }

    /// Schedule one thunder clap `delay_ms` from now
    ///
    /// Returns false without doing anything when sound is off, the backend
    /// was never created, or scheduling failed.
    pub fn play_thunder(&self, delay_ms: u32) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(backend) = &self.backend else {
            return false;
        };
        match backend.thunder(delay_ms) {
            Ok(()) => true,
            Err(err) => {
                leptos::logging::warn!("Failed to schedule thunder: {:?}", err);
                false
            }
        }
    }

    fn ensure_backend(&mut self) {
        if self.backend.is_some() || self.init_failed {
            return;
        }
        match B::create() {
            Ok(backend) => self.backend = Some(backend),
            Err(err) => {
                self.init_failed = true;
                leptos::logging::warn!("Audio unavailable, sound disabled: {:?}", err);
            }
        }
    }
}

/// Server-side stand-in: there is never an audio output to create
#[cfg(feature = "ssr")]
pub struct NoAudio;

#[cfg(feature = "ssr")]
impl AudioBackend for NoAudio {
    type Error = &'static str;

    fn create() -> Result<Self, Self::Error> {
        Err("Web Audio is only available in the browser")
    }

    fn resume(&self) {}

    fn ramp_master(&self, _target: f32) {}

    fn thunder(&self, _delay_ms: u32) -> Result<(), Self::Error> {
        Err("Web Audio is only available in the browser")
    }
}

/// Audio context plus the master volume node every voice feeds into
#[cfg(not(feature = "ssr"))]
pub struct AudioGraph {
    ctx: web_sys::AudioContext,
    master: web_sys::GainNode,
}

#[cfg(not(feature = "ssr"))]
impl AudioBackend for AudioGraph {
    type Error = JsValue;

    fn create() -> Result<Self, JsValue> {
        let ctx = web_sys::AudioContext::new()?;
        let master = ctx.create_gain()?;
        master.gain().set_value(MASTER_VOLUME);
        master.connect_with_audio_node(&ctx.destination())?;
        Ok(Self { ctx, master })
    }

    fn resume(&self) {
        if self.ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = self.ctx.resume();
        }
    }

    fn ramp_master(&self, target: f32) {
        let _ = self.master.gain().set_target_at_time(
            target,
            self.ctx.current_time(),
            VOLUME_RAMP_TIME_CONSTANT,
        );
    }

    /// noise buffer -> lowpass -> bandpass -> envelope -> master
    fn thunder(&self, delay_ms: u32) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let start = start_time(ctx.current_time(), delay_ms);

        let mut rng = rand::thread_rng();
        let voice = ThunderVoice::randomized(&mut rng);
        let sample_rate = ctx.sample_rate();
        let mut samples = voice.render(&mut rng, sample_rate);

        let buffer = ctx.create_buffer(1, samples.len() as u32, sample_rate)?;
        buffer.copy_to_channel(&mut samples, 0)?;

        let source = ctx.create_buffer_source()?;
        source.set_buffer(Some(&buffer));

        let lowpass = ctx.create_biquad_filter()?;
        lowpass.set_type(web_sys::BiquadFilterType::Lowpass);
        lowpass.frequency().set_value(voice.lowpass_hz);

        let bandpass = ctx.create_biquad_filter()?;
        bandpass.set_type(web_sys::BiquadFilterType::Bandpass);
        bandpass.frequency().set_value(BANDPASS_HZ);
        bandpass.q().set_value(BANDPASS_Q);

        let amp = ctx.create_gain()?;
        amp.gain().set_value(0.0);

        source.connect_with_audio_node(&lowpass)?;
        lowpass.connect_with_audio_node(&bandpass)?;
        bandpass.connect_with_audio_node(&amp)?;
        amp.connect_with_audio_node(&self.master)?;

        let gain = amp.gain();
        gain.cancel_scheduled_values(start)?;
        for point in voice.envelope(start) {
            match point.ramp {
                Ramp::Set => gain.set_value_at_time(point.value, point.at)?,
                Ramp::Linear => gain.linear_ramp_to_value_at_time(point.value, point.at)?,
                Ramp::Exponential => {
                    gain.exponential_ramp_to_value_at_time(point.value, point.at)?
                }
            };
        }

        source.start_with_when(start)?;
        source.stop_with_when(start + voice.duration_secs)?;
        Ok(())
    }
}

/// Reactive handle to the page's sound state
#[derive(Clone, Copy)]
pub struct SoundContext {
    /// Whether sound is currently on
    pub enabled: RwSignal<bool>,
    engine: StoredValue<AudioEngine, LocalStorage>,
}

impl SoundContext {
    pub fn set_enabled(&self, enabled: bool) {
        self.engine.update_value(|engine| engine.set_enabled(enabled));
        self.enabled.set(enabled);
    }

    pub fn toggle(&self) {
        self.set_enabled(!self.enabled.get_untracked());
    }

    /// Play thunder if sound is on; returns whether anything was scheduled
    pub fn play_thunder(&self, delay_ms: u32) -> bool {
        self.engine
            .try_with_value(|engine| engine.play_thunder(delay_ms))
            .unwrap_or(false)
    }
}

/// Provide sound context to the application
pub fn provide_sound_context() -> SoundContext {
    let ctx = SoundContext {
        enabled: RwSignal::new(false),
        engine: StoredValue::new_local(AudioEngine::new()),
    };
    provide_context(ctx);
    ctx
}

/// Use sound context from anywhere in the component tree
pub fn use_sound_context() -> SoundContext {
    use_context::<SoundContext>().expect("SoundContext should be provided")
}

/// Button that flips sound on and off
#[component]
pub fn SoundToggle() -> impl IntoView {
    let sound = use_sound_context();

    view! {
        <button
            id="sound-toggle"
            type="button"
            class="sound-toggle"
            aria-pressed=move || sound.enabled.get().to_string()
            on:click=move |_| sound.toggle()
        >
            {move || sound_label(sound.enabled.get())}
        </button>
    }
}
