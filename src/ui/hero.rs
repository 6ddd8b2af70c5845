//! Hero section: storm intro, lightning strike and brand reveal
//!
//! The intro starts the first time the hero is at least 40% on screen and
//! runs to completion exactly once. Users who prefer reduced motion get the
//! final frame straight away.

use leptos::prelude::*;

use crate::core::{BRAND_TITLE, HeroScene};
use crate::ui::audio::{SoundToggle, use_sound_context};

#[cfg(not(feature = "ssr"))]
use crate::core::{
    IntroStep, Playback, REDUCED_MOTION_QUERY, TriggerLatch, intro_timeline,
    observer_thresholds, viewport_coverage,
};
#[cfg(not(feature = "ssr"))]
use crate::ui::audio::SoundContext;
#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Hero section component
#[component]
pub fn Hero() -> impl IntoView {
    let sound = use_sound_context();
    let scene = RwSignal::new(HeroScene::default());
    let hero_ref = NodeRef::<leptos::html::Section>::new();

    // First click anywhere on the hero turns sound on
    let click_armed = RwSignal::new(true);
    let on_hero_click = move |_| {
        if !click_armed.get_untracked() {
            return;
        }
        click_armed.set(false);
        if !sound.enabled.get_untracked() {
            sound.set_enabled(true);
        }
    };

    #[cfg(not(feature = "ssr"))]
    {
        let started = StoredValue::new(false);
        Effect::new(move |_| {
            let Some(section) = hero_ref.get() else {
                return;
            };
            if started.get_value() {
                return;
            }
            started.set_value(true);

            match Playback::for_motion_preference(prefers_reduced_motion()) {
                Playback::Static => scene.set(HeroScene::static_end_state()),
                Playback::Animated => observe_once(&section, move || {
                    leptos::task::spawn_local(play_intro(scene, sound));
                }),
            }
        });
    }

    view! {
        <section class="hero" node_ref=hero_ref on:click=on_hero_click>
            <div
                class="storm-layer"
                class:rumble=move || scene.with(|s| s.rumble)
                aria-hidden="true"
            ></div>
            <div
                class="flash"
                class:active=move || scene.with(|s| s.flash_active)
                aria-hidden="true"
            ></div>

            <svg
                id="bolt"
                class="bolt"
                class:strike=move || scene.with(|s| s.bolt_struck)
                viewBox="0 0 64 160"
                aria-hidden="true"
            >
                <path d="M40 0 L10 88 H30 L18 160 L56 60 H36 L52 0 Z" />
            </svg>

            <div class="hero-copy">
                <p
                    id="message"
                    class="message"
                    class:visible=move || scene.with(|s| s.message_visible)
                    class:flicker=move || scene.with(|s| s.message_flicker)
                    aria-live="polite"
                >
                    {move || scene.with(|s| s.message.clone())}
                </p>
                <h1
                    class="brand-title"
                    class:reveal=move || scene.with(|s| s.title_revealed)
                >
                    {BRAND_TITLE}
                </h1>
            </div>

            <SoundToggle />
        </section>
    }
}

/// Walk the intro timeline once
#[cfg(not(feature = "ssr"))]
async fn play_intro(scene: RwSignal<HeroScene>, sound: SoundContext) {
    use gloo_timers::future::TimeoutFuture;

    for step in intro_timeline() {
        match step {
            IntroStep::Wait(ms) => TimeoutFuture::new(ms).await,
            IntroStep::Thunder { delay_ms } => {
                sound.play_thunder(delay_ms);
            }
            IntroStep::Flash { hold_ms } => {
                scene.update(|s| s.apply(&step));
                // The flash fades on its own clock while the timeline moves on
                wasm_bindgen_futures::spawn_local(async move {
                    TimeoutFuture::new(hold_ms).await;
                    scene.update(HeroScene::clear_flash);
                });
            }
            _ => scene.update(|s| s.apply(&step)),
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Call `on_enter` the first time `target` crosses the visibility threshold,
/// then stop observing.
#[cfg(not(feature = "ssr"))]
fn observe_once(target: &web_sys::Element, on_enter: impl Fn() + 'static) {
    use std::cell::RefCell;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let latch = RefCell::new(TriggerLatch::new());
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                let coverage = viewport_coverage(
                    entry.intersection_rect().height(),
                    viewport_height(&entry),
                );
                if latch.borrow_mut().observe(entry.intersection_ratio(), coverage) {
                    observer.disconnect();
                    on_enter();
                    break;
                }
            }
        },
    );

    let thresholds: js_sys::Array = observer_thresholds()
        .into_iter()
        .map(wasm_bindgen::JsValue::from_f64)
        .collect();
    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&thresholds);

    match web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => {
            observer.observe(target);
            // Keep the closure alive
            callback.forget();
        }
        Err(err) => {
            leptos::logging::warn!("IntersectionObserver unavailable, starting intro: {:?}", err);
            on_enter();
        }
    }
}

/// Height of the observer's root, or the window when the browser withholds it
#[cfg(not(feature = "ssr"))]
fn viewport_height(entry: &web_sys::IntersectionObserverEntry) -> f64 {
    entry
        .root_bounds()
        .map(|bounds| bounds.height())
        .filter(|height| *height > 0.0)
        .or_else(|| {
            web_sys::window()
                .and_then(|window| window.inner_height().ok())
                .and_then(|height| height.as_f64())
        })
        .unwrap_or(0.0)
}
