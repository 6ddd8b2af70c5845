//! Landing page component
//!
//! The HYDROBLT launch page:
//! - SEO meta tags
//! - Storm intro hero with thunder and brand reveal
//! - Waitlist signup
//! - Footer

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::clock::current_year;
use crate::ui::hero::Hero;
use crate::ui::waitlist_form::WaitlistForm;

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />
        <LandingStyles />

        <main class="landing">
            <Hero />

            <section id="waitlist" class="waitlist">
                <div class="waitlist-inner">
                    <h2 class="waitlist-heading">"Be first to the storm"</h2>
                    <p class="waitlist-copy">
                        "Recovery, hydration and 20 grams of protein, packed in one tinny shot. "
                        "Join the waitlist and we'll tell you the moment it lands."
                    </p>
                    <WaitlistForm />
                </div>
            </section>

            <Footer />
        </main>
    }
}

/// SEO meta tags component
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        // Page title
        <Title text="HYDROBLT - Recovery in one tinny shot" />

        // Basic meta tags
        <Meta name="description" content="HYDROBLT: recovery, hydration and 20 grams of protein packed in one tinny shot. Join the waitlist." />
        <Meta name="theme-color" content="#05070d" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="HYDROBLT - Recovery in one tinny shot" />
        <Meta property="og:description" content="Recovery, hydration and 20 grams of protein packed in one tinny shot." />

        // Twitter
        <Meta property="twitter:card" content="summary" />
        <Meta property="twitter:title" content="HYDROBLT" />

        <Link rel="icon" href="/favicon.svg" />
    }
}

/// Footer with the current year
#[component]
fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="footer">
            <p>
                "© "
                <span id="year">{year}</span>
                " HYDROBLT"
            </p>
        </footer>
    }
}

/// Styles for the hero animation states
///
/// Class names mirror the scene flags in `HeroScene`.
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .hero {
                position: relative;
                min-height: 100vh;
                display: flex;
                align-items: center;
                justify-content: center;
                overflow: hidden;
                background: radial-gradient(ellipse at top, #1b2233 0%, #05070d 70%);
                color: #f4f7ff;
            }

            .storm-layer {
                position: absolute;
                inset: -10%;
                background: radial-gradient(circle at 30% 20%, rgba(120, 140, 190, 0.25), transparent 60%),
                            radial-gradient(circle at 70% 30%, rgba(90, 110, 160, 0.2), transparent 55%);
                opacity: 0.6;
            }

            .storm-layer.rumble {
                animation: hero-rumble 6s ease-in-out infinite;
            }

            @keyframes hero-rumble {
                0%, 100% { transform: translate3d(0, 0, 0) scale(1); opacity: 0.6; }
                25% { transform: translate3d(-1%, 0.5%, 0) scale(1.02); opacity: 0.75; }
                50% { transform: translate3d(1%, -0.5%, 0) scale(1.01); opacity: 0.55; }
                75% { transform: translate3d(-0.5%, -1%, 0) scale(1.03); opacity: 0.8; }
            }

            .flash {
                position: absolute;
                inset: 0;
                background: #ffffff;
                opacity: 0;
                pointer-events: none;
                transition: opacity 380ms ease-out;
                z-index: 3;
            }

            .flash.active {
                opacity: 0.85;
                transition: opacity 40ms ease-in;
            }

            .bolt {
                position: absolute;
                top: 0;
                left: 50%;
                width: 96px;
                height: 60vh;
                transform: translateX(-50%);
                fill: #e8f0ff;
                filter: drop-shadow(0 0 18px rgba(170, 200, 255, 0.9));
                opacity: 0;
                clip-path: inset(0 0 100% 0);
                z-index: 2;
            }

            .bolt.strike {
                animation: hero-strike 700ms ease-out forwards;
            }

            @keyframes hero-strike {
                0% { opacity: 1; clip-path: inset(0 0 100% 0); }
                30% { opacity: 1; clip-path: inset(0 0 0 0); }
                60% { opacity: 0.4; }
                70% { opacity: 1; }
                100% { opacity: 0; clip-path: inset(0 0 0 0); }
            }

            .hero-copy {
                position: relative;
                text-align: center;
                z-index: 4;
                padding: 0 1.5rem;
            }

            .message {
                min-height: 2.5rem;
                font-size: clamp(1.25rem, 3vw, 2rem);
                letter-spacing: 0.08em;
                text-transform: uppercase;
                opacity: 0;
                transform: translateY(8px);
                transition: opacity 500ms ease, transform 500ms ease;
            }

            .message.visible {
                opacity: 1;
                transform: translateY(0);
            }

            .message.flicker {
                animation: hero-flicker 1.2s linear;
            }

            @keyframes hero-flicker {
                0%, 18%, 22%, 60%, 64%, 100% { opacity: 1; }
                20%, 62% { opacity: 0.35; }
            }

            .brand-title {
                margin-top: 1rem;
                font-size: clamp(3rem, 12vw, 9rem);
                font-weight: 900;
                letter-spacing: 0.12em;
                opacity: 0;
                transform: scale(0.96);
                transition: opacity 900ms ease, transform 900ms ease, text-shadow 900ms ease;
            }

            .brand-title.reveal {
                opacity: 1;
                transform: scale(1);
                text-shadow: 0 0 32px rgba(170, 200, 255, 0.6);
            }

            .sound-toggle {
                position: absolute;
                top: 1.25rem;
                right: 1.25rem;
                z-index: 5;
                padding: 0.5rem 0.9rem;
                border: 1px solid rgba(244, 247, 255, 0.4);
                border-radius: 999px;
                background: rgba(5, 7, 13, 0.5);
                color: inherit;
                font-size: 0.85rem;
                cursor: pointer;
            }

            .sound-toggle[aria-pressed="true"] {
                border-color: #aac8ff;
            }

            @media (prefers-reduced-motion: reduce) {
                .storm-layer.rumble,
                .bolt.strike,
                .message.flicker {
                    animation: none;
                }
                .message,
                .brand-title,
                .flash {
                    transition: none;
                }
            }
            "#
        </style>
    }
}
