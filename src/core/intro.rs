//! Intro sequence for the hero section
//!
//! The intro is a fixed, linear timeline of [`IntroStep`]s. The browser runner
//! walks the timeline once, sleeping on [`IntroStep::Wait`] and feeding every
//! visual step into a [`HeroScene`], which the view renders as CSS classes.

/// Text fragments shown before the lightning strike, in order
pub const MESSAGES: [&str; 5] = [
    "Thunder in the background",
    "Recovery",
    "Hydration",
    "20 grams of protein",
    "Packed in one tinny shot",
];

/// Brand name revealed after the strike
pub const BRAND_TITLE: &str = "HYDROBLT";

/// Delay between setting a message and fading it in
pub const MESSAGE_SETTLE_MS: u32 = 60;
/// How long each message stays on screen
pub const MESSAGE_HOLD_MS: u32 = 1200;
/// Pause after the last message before the strike
pub const PRE_STRIKE_PAUSE_MS: u32 = 300;
/// How long the white flash overlay stays active
pub const FLASH_HOLD_MS: u32 = 420;
/// Thunder lags the flash slightly
pub const THUNDER_DELAY_MS: u32 = 120;
/// Delay between the strike and the title reveal
pub const TITLE_REVEAL_DELAY_MS: u32 = 520;

/// One step of the intro timeline
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntroStep {
    /// Start the storm layer rumble
    StartRumble,
    /// Hide the message element and swap its text
    ShowMessage(&'static str),
    /// Fade the message in with the flicker effect
    Illuminate,
    /// Sleep before the next step
    Wait(u32),
    /// Drop the flicker but keep the last message visible
    Steady,
    /// Activate the flash overlay; it clears itself after `hold_ms`
    Flash { hold_ms: u32 },
    /// Animate the lightning bolt
    StrikeBolt,
    /// Schedule thunder `delay_ms` after this point
    Thunder { delay_ms: u32 },
    /// Reveal the brand title
    RevealTitle,
}

/// Build the full intro timeline
pub fn intro_timeline() -> Vec<IntroStep> {
    let mut steps = vec![IntroStep::StartRumble];

    for message in MESSAGES {
        steps.push(IntroStep::ShowMessage(message));
        steps.push(IntroStep::Wait(MESSAGE_SETTLE_MS));
        steps.push(IntroStep::Illuminate);
        steps.push(IntroStep::Wait(MESSAGE_HOLD_MS));
    }

    steps.extend([
        IntroStep::Steady,
        IntroStep::Wait(PRE_STRIKE_PAUSE_MS),
        IntroStep::Flash {
            hold_ms: FLASH_HOLD_MS,
        },
        IntroStep::StrikeBolt,
        IntroStep::Thunder {
            delay_ms: THUNDER_DELAY_MS,
        },
        IntroStep::Wait(TITLE_REVEAL_DELAY_MS),
        IntroStep::RevealTitle,
    ]);

    steps
}

/// Total time spent sleeping across a timeline
pub fn timeline_duration_ms(steps: &[IntroStep]) -> u32 {
    steps
        .iter()
        .map(|step| match step {
            IntroStep::Wait(ms) => *ms,
            _ => 0,
        })
        .sum()
}

/// Visual state of the hero section
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeroScene {
    pub message: String,
    pub message_visible: bool,
    pub message_flicker: bool,
    pub rumble: bool,
    pub flash_active: bool,
    pub bolt_struck: bool,
    pub title_revealed: bool,
}

impl HeroScene {
    /// Final frame shown to reduced-motion users without animating
    pub fn static_end_state() -> Self {
        Self {
            message: BRAND_TITLE.to_string(),
            message_visible: true,
            title_revealed: true,
            ..Self::default()
        }
    }

    /// Apply a visual step. Timing and sound steps leave the scene untouched.
    pub fn apply(&mut self, step: &IntroStep) {
        match step {
            IntroStep::StartRumble => self.rumble = true,
            IntroStep::ShowMessage(text) => {
                self.message_visible = false;
                self.message_flicker = false;
                self.message = (*text).to_string();
            }
            IntroStep::Illuminate => {
                self.message_visible = true;
                self.message_flicker = true;
            }
            IntroStep::Steady => self.message_flicker = false,
            IntroStep::Flash { .. } => self.flash_active = true,
            IntroStep::StrikeBolt => self.bolt_struck = true,
            IntroStep::RevealTitle => self.title_revealed = true,
            IntroStep::Wait(_) | IntroStep::Thunder { .. } => {}
        }
    }

    pub fn clear_flash(&mut self) {
        self.flash_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_starts_with_rumble_and_ends_with_title() {
        let steps = intro_timeline();
        assert_eq!(steps.first(), Some(&IntroStep::StartRumble));
        assert_eq!(steps.last(), Some(&IntroStep::RevealTitle));
    }

    #[test]
    fn test_each_message_is_settled_then_held() {
        let steps = intro_timeline();

        for (i, message) in MESSAGES.iter().enumerate() {
            let at = 1 + i * 4;
            assert_eq!(
                &steps[at..at + 4],
                &[
                    IntroStep::ShowMessage(*message),
                    IntroStep::Wait(MESSAGE_SETTLE_MS),
                    IntroStep::Illuminate,
                    IntroStep::Wait(MESSAGE_HOLD_MS),
                ]
            );
        }
    }

    #[test]
    fn test_strike_ordering() {
        let steps = intro_timeline();
        let tail = &steps[steps.len() - 7..];

        assert_eq!(
            tail,
            &[
                IntroStep::Steady,
                IntroStep::Wait(300),
                IntroStep::Flash { hold_ms: 420 },
                IntroStep::StrikeBolt,
                IntroStep::Thunder { delay_ms: 120 },
                IntroStep::Wait(520),
                IntroStep::RevealTitle,
            ]
        );
    }

    #[test]
    fn test_timeline_duration() {
        // 5 * (60 + 1200) + 300 + 520
        assert_eq!(timeline_duration_ms(&intro_timeline()), 7120);
    }

    #[test]
    fn test_show_message_resets_visibility() {
        let mut scene = HeroScene::default();
        scene.apply(&IntroStep::ShowMessage("Recovery"));
        scene.apply(&IntroStep::Illuminate);
        assert!(scene.message_visible && scene.message_flicker);

        scene.apply(&IntroStep::ShowMessage("Hydration"));
        assert_eq!(scene.message, "Hydration");
        assert!(!scene.message_visible);
        assert!(!scene.message_flicker);
    }

    #[test]
    fn test_steady_keeps_message_visible() {
        let mut scene = HeroScene::default();
        scene.apply(&IntroStep::ShowMessage("Recovery"));
        scene.apply(&IntroStep::Illuminate);
        scene.apply(&IntroStep::Steady);

        assert!(scene.message_visible);
        assert!(!scene.message_flicker);
    }

    #[test]
    fn test_timing_and_sound_steps_do_not_touch_scene() {
        let mut scene = HeroScene::default();
        scene.apply(&IntroStep::Wait(1200));
        scene.apply(&IntroStep::Thunder { delay_ms: 120 });
        assert_eq!(scene, HeroScene::default());
    }

    #[test]
    fn test_flash_clears() {
        let mut scene = HeroScene::default();
        scene.apply(&IntroStep::Flash { hold_ms: 420 });
        assert!(scene.flash_active);
        scene.clear_flash();
        assert!(!scene.flash_active);
    }

    #[test]
    fn test_static_end_state() {
        let scene = HeroScene::static_end_state();
        assert_eq!(scene.message, BRAND_TITLE);
        assert!(scene.message_visible);
        assert!(scene.title_revealed);
        assert!(!scene.rumble);
        assert!(!scene.bolt_struck);
        assert!(!scene.flash_active);
    }
}
