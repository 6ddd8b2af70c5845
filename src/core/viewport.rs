//! Viewport-triggered playback of the hero intro

/// Fraction of the hero that must be on screen before the intro starts.
/// Also the fraction of the viewport a hero taller than the screen must fill.
pub const HERO_VISIBILITY_THRESHOLD: f64 = 0.4;

/// Observer thresholds step from 0 to the visibility threshold in this many parts
const OBSERVER_THRESHOLD_STEPS: u32 = 40;

/// Media query honoured for reduced motion
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// How the hero intro is presented
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    /// Run the timed intro once the hero scrolls into view
    Animated,
    /// Show the end state immediately and never animate
    Static,
}

impl Playback {
    pub fn for_motion_preference(prefers_reduced_motion: bool) -> Self {
        if prefers_reduced_motion {
            Playback::Static
        } else {
            Playback::Animated
        }
    }
}

/// Intersection ratios at which the observer should report
///
/// A hero much taller than the viewport never reaches a 0.4 ratio, so the
/// observer also reports the small ratios in between. Coverage is then
/// re-checked on each report. Heroes over 40 viewports tall still never fire.
pub fn observer_thresholds() -> Vec<f64> {
    (0..=OBSERVER_THRESHOLD_STEPS)
        .map(|step| HERO_VISIBILITY_THRESHOLD * f64::from(step) / f64::from(OBSERVER_THRESHOLD_STEPS))
        .collect()
}

/// Share of the viewport filled by the visible part of the hero
pub fn viewport_coverage(visible_height: f64, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    (visible_height / viewport_height).clamp(0.0, 1.0)
}

/// One-shot latch fed with intersection reports
#[derive(Debug, Default)]
pub struct TriggerLatch {
    fired: bool,
}

impl TriggerLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true exactly once: the first time either the hero's visible
    /// `ratio` or its viewport `coverage` reaches the threshold
    pub fn observe(&mut self, ratio: f64, coverage: f64) -> bool {
        if self.fired
            || (ratio < HERO_VISIBILITY_THRESHOLD && coverage < HERO_VISIBILITY_THRESHOLD)
        {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_for_motion_preference() {
        assert_eq!(Playback::for_motion_preference(true), Playback::Static);
        assert_eq!(Playback::for_motion_preference(false), Playback::Animated);
    }

    #[test]
    fn test_latch_ignores_small_ratios() {
        let mut latch = TriggerLatch::new();
        assert!(!latch.observe(0.0, 0.0));
        assert!(!latch.observe(0.39, 0.39));
        assert!(!latch.has_fired());
    }

    #[test]
    fn test_latch_fires_once_at_threshold() {
        let mut latch = TriggerLatch::new();
        assert!(latch.observe(0.4, 0.4));
        assert!(latch.has_fired());

        assert!(!latch.observe(1.0, 1.0));
        assert!(!latch.observe(0.0, 0.0));
        assert!(!latch.observe(0.8, 0.8));
    }

    #[test]
    fn test_latch_fires_for_hero_taller_than_viewport() {
        // Hero three viewports tall: ratio tops out near 0.33
        let hero_height = 3000.0;
        let viewport_height = 1000.0;
        let mut latch = TriggerLatch::new();

        let visible = 200.0;
        assert!(!latch.observe(
            visible / hero_height,
            viewport_coverage(visible, viewport_height)
        ));

        let visible = 600.0;
        assert!(latch.observe(
            visible / hero_height,
            viewport_coverage(visible, viewport_height)
        ));
        assert!(!latch.observe(0.33, 1.0));
    }

    #[test]
    fn test_viewport_coverage() {
        assert_eq!(viewport_coverage(500.0, 1000.0), 0.5);
        assert_eq!(viewport_coverage(1200.0, 1000.0), 1.0);
        assert_eq!(viewport_coverage(-5.0, 1000.0), 0.0);
        assert_eq!(viewport_coverage(500.0, 0.0), 0.0);
    }

    #[test]
    fn test_observer_thresholds_reach_visibility_threshold() {
        let thresholds = observer_thresholds();
        assert_eq!(thresholds.first(), Some(&0.0));
        assert_eq!(thresholds.last(), Some(&HERO_VISIBILITY_THRESHOLD));
        assert!(thresholds.windows(2).all(|pair| pair[0] < pair[1]));
        // Fine enough for a hero ten viewports tall: 0.4 / 10
        assert!(thresholds.iter().any(|t| (*t - 0.04).abs() < 1e-9));
    }
}
