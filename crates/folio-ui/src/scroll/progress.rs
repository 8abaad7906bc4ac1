//! Scroll progress tracking
//!
//! Derives a 0-100 percentage from the scroll position and maps progress-bar
//! clicks back to scroll offsets.

use crate::view::transition::ease_in_out_cubic;

/// Snapshot of the scroll container's geometry
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Offset of the viewport's top edge within the document
    pub scroll_top: f32,
    /// Full height of the scrollable content
    pub document_height: f32,
    /// Height of the visible area
    pub viewport_height: f32,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f32, document_height: f32, viewport_height: f32) -> Self {
        Self {
            scroll_top,
            document_height,
            viewport_height,
        }
    }

    /// Largest reachable scroll offset
    pub fn max_scroll(&self) -> f32 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// Distance between the viewport's bottom edge and the end of the document
    pub fn remaining(&self) -> f32 {
        self.document_height - (self.scroll_top + self.viewport_height)
    }
}

/// Percentage of the document scrolled, clamped to [0, 100].
///
/// A document that fits in the viewport reports 0.
pub fn scroll_progress(metrics: &ScrollMetrics) -> f32 {
    let scrollable = metrics.document_height - metrics.viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (metrics.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Scroll offset for a click at `fraction` of the progress bar's width
pub fn click_target(fraction: f32, metrics: &ScrollMetrics) -> f32 {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    fraction * metrics.max_scroll()
}

/// Holds the latest progress value, updated at most once per frame
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    progress: f32,
    last_frame: Option<u64>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a scroll observation; returns false if this frame was already sampled
    pub fn observe(&mut self, frame: u64, metrics: &ScrollMetrics) -> bool {
        if self.last_frame == Some(frame) {
            return false;
        }
        self.last_frame = Some(frame);
        self.progress = scroll_progress(metrics);
        true
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Progress as a [0, 1] fraction for drawing
    pub fn fraction(&self) -> f32 {
        self.progress / 100.0
    }
}

/// Eased scroll from one offset to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    started_at: f64,
    duration: f64,
}

impl SmoothScroll {
    pub fn new(from: f32, to: f32, now: f64, duration_secs: f64) -> Self {
        Self {
            from,
            to,
            started_at: now,
            duration: duration_secs.max(0.0),
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset to apply at time `now`
    pub fn offset_at(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = ((now - self.started_at) / self.duration) as f32;
        let eased = ease_in_out_cubic(t);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_complete(&self, now: f64) -> bool {
        now - self.started_at >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_endpoints() {
        let top = ScrollMetrics::new(0.0, 3000.0, 800.0);
        assert_eq!(scroll_progress(&top), 0.0);

        let bottom = ScrollMetrics::new(2200.0, 3000.0, 800.0);
        assert_eq!(scroll_progress(&bottom), 100.0);
    }

    #[test]
    fn test_progress_monotonic() {
        let mut previous = -1.0;
        for step in 0..=44 {
            let metrics = ScrollMetrics::new(step as f32 * 50.0, 3000.0, 800.0);
            let progress = scroll_progress(&metrics);
            assert!(progress >= previous, "step {step}: {progress} < {previous}");
            assert!((0.0..=100.0).contains(&progress));
            previous = progress;
        }
    }

    #[test]
    fn test_progress_guards_division_by_zero() {
        let fits = ScrollMetrics::new(0.0, 800.0, 800.0);
        assert_eq!(scroll_progress(&fits), 0.0);

        let shorter = ScrollMetrics::new(10.0, 500.0, 800.0);
        assert_eq!(scroll_progress(&shorter), 0.0);
    }

    #[test]
    fn test_progress_clamps_overscroll() {
        let over = ScrollMetrics::new(2500.0, 3000.0, 800.0);
        assert_eq!(scroll_progress(&over), 100.0);

        let under = ScrollMetrics::new(-40.0, 3000.0, 800.0);
        assert_eq!(scroll_progress(&under), 0.0);
    }

    #[test]
    fn test_click_target_half() {
        let metrics = ScrollMetrics::new(0.0, 3000.0, 800.0);
        assert_eq!(click_target(0.5, &metrics), 1100.0);
        assert_eq!(click_target(0.0, &metrics), 0.0);
        assert_eq!(click_target(1.0, &metrics), 2200.0);
        assert_eq!(click_target(1.7, &metrics), 2200.0);
    }

    #[test]
    fn test_tracker_samples_once_per_frame() {
        let mut tracker = ProgressTracker::new();
        assert!(tracker.observe(1, &ScrollMetrics::new(1100.0, 3000.0, 800.0)));
        assert_eq!(tracker.progress(), 50.0);

        assert!(!tracker.observe(1, &ScrollMetrics::new(2200.0, 3000.0, 800.0)));
        assert_eq!(tracker.progress(), 50.0);

        assert!(tracker.observe(2, &ScrollMetrics::new(2200.0, 3000.0, 800.0)));
        assert_eq!(tracker.fraction(), 1.0);
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let scroll = SmoothScroll::new(0.0, 1000.0, 10.0, 0.5);
        assert_eq!(scroll.offset_at(10.0), 0.0);
        let mid = scroll.offset_at(10.25);
        assert!(mid > 0.0 && mid < 1000.0);
        assert_eq!(scroll.offset_at(10.5), 1000.0);
        assert!(scroll.is_complete(10.5));
        assert!(!scroll.is_complete(10.2));
    }

    #[test]
    fn test_zero_duration_jumps() {
        let scroll = SmoothScroll::new(300.0, 0.0, 1.0, 0.0);
        assert_eq!(scroll.offset_at(1.0), 0.0);
        assert!(scroll.is_complete(1.0));
    }
}
