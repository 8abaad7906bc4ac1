//! Entry animations
//!
//! - Easing functions shared by every time-based animation
//! - `SectionTransition`: restarts the routed view's entry animation on route change
//! - `Reveal`: fade-in the first time a region scrolls into view
//! - `CountUp`: animated statistic counters
//!
//! All of these are polled with the frame time; nothing schedules callbacks.
//! Callers request a repaint only while `is_animating` is true.

use egui::Rect;

// =============================================================================
// EASING FUNCTIONS
// =============================================================================

/// Cubic ease-out: fast start, slow finish
/// t should be in [0, 1]
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Cubic ease-in-out: slow start, fast middle, slow finish
/// t should be in [0, 1]
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn elapsed_fraction(started_at: f64, duration: f64, now: f64) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    (((now - started_at) / duration) as f32).clamp(0.0, 1.0)
}

// =============================================================================
// SECTION TRANSITION
// =============================================================================

/// Distance the routed section slides up while fading in
const ENTRY_SLIDE_PX: f32 = 18.0;

#[derive(Debug, Clone)]
pub struct SectionTransition {
    key: Option<String>,
    started_at: f64,
    duration: f64,
}

impl SectionTransition {
    pub fn new(duration_secs: f64) -> Self {
        Self {
            key: None,
            started_at: 0.0,
            duration: duration_secs,
        }
    }

    /// Report the key being rendered; returns true if the animation restarted
    pub fn observe(&mut self, key: &str, now: f64) -> bool {
        if self.key.as_deref() == Some(key) {
            return false;
        }
        self.key = Some(key.to_string());
        self.started_at = now;
        true
    }

    /// Eased progress in [0, 1]
    pub fn progress(&self, now: f64) -> f32 {
        ease_out_cubic(elapsed_fraction(self.started_at, self.duration, now))
    }

    pub fn opacity(&self, now: f64) -> f32 {
        self.progress(now)
    }

    pub fn offset_y(&self, now: f64) -> f32 {
        lerp_f32(ENTRY_SLIDE_PX, 0.0, self.progress(now))
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.key.is_some() && now - self.started_at < self.duration
    }
}

// =============================================================================
// REVEAL
// =============================================================================

/// Fraction of `item`'s height that lies inside `clip`
pub fn visible_fraction(item: Rect, clip: Rect) -> f32 {
    let height = item.height();
    if height <= 0.0 {
        return 0.0;
    }
    let overlap = item.max.y.min(clip.max.y) - item.min.y.max(clip.min.y);
    (overlap / height).clamp(0.0, 1.0)
}

/// One-shot fade-in keyed on first visibility
#[derive(Debug, Clone)]
pub struct Reveal {
    revealed_at: Option<f64>,
    duration: f64,
    min_fraction: f32,
}

impl Reveal {
    pub fn new(duration_secs: f64, min_fraction: f32) -> Self {
        Self {
            revealed_at: None,
            duration: duration_secs,
            min_fraction,
        }
    }

    /// Feed the currently visible fraction; once revealed it stays revealed
    pub fn observe(&mut self, fraction: f32, now: f64) {
        if self.revealed_at.is_none() && fraction > 0.0 && fraction >= self.min_fraction {
            self.revealed_at = Some(now);
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    pub fn opacity(&self, now: f64) -> f32 {
        match self.revealed_at {
            Some(at) => ease_out_cubic(elapsed_fraction(at, self.duration, now)),
            None => 0.0,
        }
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.revealed_at
            .map(|at| now - at < self.duration)
            .unwrap_or(false)
    }
}

// =============================================================================
// COUNT UP
// =============================================================================

#[derive(Debug, Clone)]
pub struct CountUp {
    target: f64,
    started_at: Option<f64>,
    duration: f64,
}

impl CountUp {
    pub fn new(target: f64, duration_secs: f64) -> Self {
        Self {
            target,
            started_at: None,
            duration: duration_secs,
        }
    }

    /// Start counting; later calls are ignored
    pub fn start(&mut self, now: f64) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn value(&self, now: f64) -> f64 {
        match self.started_at {
            Some(at) => {
                self.target * ease_out_cubic(elapsed_fraction(at, self.duration, now)) as f64
            }
            None => 0.0,
        }
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.started_at
            .map(|at| now - at < self.duration)
            .unwrap_or(false)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_ease_out_cubic() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_ease_in_out_cubic() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_section_transition_restarts_on_key_change() {
        let mut transition = SectionTransition::new(0.4);
        assert!(transition.observe("about", 1.0));
        assert!(!transition.observe("about", 1.2));
        assert!(transition.is_animating(1.2));
        assert_eq!(transition.opacity(1.5), 1.0);
        assert!(!transition.is_animating(1.5));

        assert!(transition.observe("resume", 2.0));
        assert_eq!(transition.opacity(2.0), 0.0);
        assert_eq!(transition.offset_y(2.0), ENTRY_SLIDE_PX);
        assert_eq!(transition.offset_y(2.5), 0.0);
    }

    #[test]
    fn test_visible_fraction() {
        let clip = Rect::from_min_max(pos2(0.0, 0.0), pos2(400.0, 800.0));
        let inside = Rect::from_min_max(pos2(0.0, 100.0), pos2(400.0, 300.0));
        let half = Rect::from_min_max(pos2(0.0, 700.0), pos2(400.0, 900.0));
        let below = Rect::from_min_max(pos2(0.0, 900.0), pos2(400.0, 1200.0));

        assert_eq!(visible_fraction(inside, clip), 1.0);
        assert_eq!(visible_fraction(half, clip), 0.5);
        assert_eq!(visible_fraction(below, clip), 0.0);
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut reveal = Reveal::new(0.6, 0.15);
        reveal.observe(0.1, 1.0);
        assert!(!reveal.is_revealed());
        assert_eq!(reveal.opacity(1.0), 0.0);

        reveal.observe(0.2, 2.0);
        assert!(reveal.is_revealed());
        assert!(reveal.is_animating(2.3));
        assert_eq!(reveal.opacity(2.6), 1.0);

        // Scrolling away does not hide it again
        reveal.observe(0.0, 3.0);
        assert_eq!(reveal.opacity(3.0), 1.0);
    }

    #[test]
    fn test_count_up() {
        let mut counter = CountUp::new(250.0, 1.0);
        assert_eq!(counter.value(5.0), 0.0);
        counter.start(5.0);
        counter.start(5.5);
        assert!(counter.value(5.5) > 0.0 && counter.value(5.5) < 250.0);
        assert_eq!(counter.value(6.0), 250.0);
        assert!(!counter.is_animating(6.0));
    }
}
