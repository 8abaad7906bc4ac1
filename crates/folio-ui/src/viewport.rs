//! Viewport classification
//!
//! Single source of truth for the mobile/desktop decision. Components receive
//! the resulting [`ViewportMode`] instead of looking at the window width
//! themselves.

use tracing::debug;

/// Default mobile breakpoint in logical pixels
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

/// Layout classification derived from window width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportMode {
    Mobile,
    #[default]
    Desktop,
}

impl ViewportMode {
    pub fn is_mobile(&self) -> bool {
        matches!(self, ViewportMode::Mobile)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewportMode::Mobile => "mobile",
            ViewportMode::Desktop => "desktop",
        }
    }
}

/// `Mobile` for widths at or below the breakpoint, `Desktop` above it
pub fn classify(width: f32, breakpoint: f32) -> ViewportMode {
    if width <= breakpoint {
        ViewportMode::Mobile
    } else {
        ViewportMode::Desktop
    }
}

/// Tracks the current mode across frames.
///
/// Re-evaluated every frame; no debounce and no hysteresis.
#[derive(Debug, Clone)]
pub struct ViewportClassifier {
    breakpoint: f32,
    mode: ViewportMode,
}

impl Default for ViewportClassifier {
    fn default() -> Self {
        Self::new(MOBILE_BREAKPOINT_PX)
    }
}

impl ViewportClassifier {
    pub fn new(breakpoint: f32) -> Self {
        Self {
            breakpoint,
            mode: ViewportMode::default(),
        }
    }

    /// Reclassify for a new width; returns true if the mode flipped
    pub fn update(&mut self, width: f32) -> bool {
        let mode = classify(width, self.breakpoint);
        if mode == self.mode {
            return false;
        }
        debug!(
            "Viewport {} -> {} at width {width}",
            self.mode.as_str(),
            mode.as_str()
        );
        self.mode = mode;
        true
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundary() {
        assert_eq!(classify(768.0, MOBILE_BREAKPOINT_PX), ViewportMode::Mobile);
        assert_eq!(classify(768.5, MOBILE_BREAKPOINT_PX), ViewportMode::Desktop);
        assert_eq!(classify(769.0, MOBILE_BREAKPOINT_PX), ViewportMode::Desktop);
    }

    #[test]
    fn test_classify_ranges() {
        for width in [0.0, 1.0, 320.0, 414.0, 767.0, 768.0] {
            assert!(classify(width, MOBILE_BREAKPOINT_PX).is_mobile(), "{width}");
        }
        for width in [769.0, 1024.0, 1920.0, 3840.0] {
            assert!(!classify(width, MOBILE_BREAKPOINT_PX).is_mobile(), "{width}");
        }
    }

    #[test]
    fn test_classifier_reports_changes_only() {
        let mut classifier = ViewportClassifier::default();
        assert_eq!(classifier.mode(), ViewportMode::Desktop);

        assert!(!classifier.update(1280.0));
        assert!(classifier.update(600.0));
        assert_eq!(classifier.mode(), ViewportMode::Mobile);
        assert!(!classifier.update(700.0));
        assert!(classifier.update(800.0));
        assert_eq!(classifier.mode(), ViewportMode::Desktop);
    }
}
