//! Section scroll navigator
//!
//! On mobile the portfolio behaves like a paged document: scrolling close to
//! the bottom of a section advances to the next one, scrolling back up to its
//! top returns to the previous one. A cooldown keeps a single long gesture
//! from skipping through several sections.
//!
//! The navigator only decides. Applying the decision (pushing the new path,
//! snapping the scroll position) is the caller's job.

use super::progress::ScrollMetrics;
use crate::config::NavigatorConfig;
use crate::routes::RouteTable;
use crate::viewport::ViewportMode;
use std::sync::Arc;
use tracing::debug;

/// Input events that trigger an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTrigger {
    /// The scroll offset changed
    Scroll,
    /// A touch gesture ended; short swipes may not produce scroll events
    TouchEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Forward,
    Backward,
}

/// A transition the caller should perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub direction: NavDirection,
    /// Index of the target route in the route table
    pub to_index: usize,
    /// Path to push onto the location
    pub to_path: String,
    /// Always true: the new section starts at its top, without animation
    pub reset_scroll: bool,
}

/// Minimum spacing between two triggered navigations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cooldown {
    interval_secs: f64,
    last: Option<f64>,
}

impl Cooldown {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            interval_secs: ms as f64 / 1000.0,
            last: None,
        }
    }

    pub fn is_active(&self, now: f64) -> bool {
        self.last
            .map(|last| now - last < self.interval_secs)
            .unwrap_or(false)
    }

    pub fn stamp(&mut self, now: f64) {
        self.last = Some(now);
    }
}

pub struct SectionNavigator {
    routes: Arc<RouteTable>,
    threshold: f32,
    enabled: bool,
    cooldown: Cooldown,
}

impl SectionNavigator {
    pub fn new(routes: Arc<RouteTable>, config: &NavigatorConfig) -> Self {
        Self {
            routes,
            threshold: config.threshold_px,
            enabled: config.enabled,
            cooldown: Cooldown::from_millis(config.cooldown_ms),
        }
    }

    /// Decide whether this event moves to an adjacent section.
    ///
    /// `current_path` is the location's path; `now` is a monotonic clock in
    /// seconds. At most one transition is returned per call.
    pub fn evaluate(
        &mut self,
        trigger: NavTrigger,
        mode: ViewportMode,
        metrics: &ScrollMetrics,
        current_path: &str,
        now: f64,
    ) -> Option<Navigation> {
        if !self.enabled || !mode.is_mobile() {
            return None;
        }

        if self.cooldown.is_active(now) {
            return None;
        }

        let remaining = metrics.remaining();

        // Unknown location: no auto-navigation this cycle
        let index = self.routes.index_of_path(current_path)?;

        let (direction, to_index) = if remaining <= self.threshold && !self.routes.is_last(index)
        {
            (NavDirection::Forward, index + 1)
        } else if metrics.scroll_top <= self.threshold && index > 0 {
            (NavDirection::Backward, index - 1)
        } else {
            return None;
        };

        let target = self.routes.get(to_index)?;
        self.cooldown.stamp(now);

        debug!(
            "Section navigator ({:?}): {} -> {} (remaining {remaining:.0}, top {:.0})",
            trigger, current_path, target.path, metrics.scroll_top
        );

        Some(Navigation {
            direction,
            to_index,
            to_path: target.path.clone(),
            reset_scroll: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator(ids: &[&str]) -> SectionNavigator {
        let routes = Arc::new(RouteTable::from_ids(ids).unwrap());
        SectionNavigator::new(routes, &NavigatorConfig::default())
    }

    /// Scrolled so that `remaining` equals the given value, well away from the top
    fn near_bottom(remaining: f32) -> ScrollMetrics {
        ScrollMetrics::new(2000.0 - 800.0 - remaining, 2000.0, 800.0)
    }

    fn middle() -> ScrollMetrics {
        ScrollMetrics::new(600.0, 2000.0, 800.0)
    }

    #[test]
    fn test_advances_once_then_cools_down() {
        let mut nav = navigator(&["a", "b", "c"]);
        let metrics = near_bottom(100.0);

        let first = nav
            .evaluate(NavTrigger::Scroll, ViewportMode::Mobile, &metrics, "/b", 10.0)
            .unwrap();
        assert_eq!(first.direction, NavDirection::Forward);
        assert_eq!(first.to_path, "/c");
        assert_eq!(first.to_index, 2);
        assert!(first.reset_scroll);

        // Condition still true but inside the 900ms window
        for dt in [0.0, 0.1, 0.5, 0.899] {
            assert_eq!(
                nav.evaluate(
                    NavTrigger::Scroll,
                    ViewportMode::Mobile,
                    &metrics,
                    "/b",
                    10.0 + dt
                ),
                None,
                "fired again after {dt}s"
            );
        }

        let again = nav.evaluate(NavTrigger::Scroll, ViewportMode::Mobile, &metrics, "/b", 10.9);
        assert!(again.is_some());
    }

    #[test]
    fn test_no_wrap_at_last_route() {
        let mut nav = navigator(&["a", "b", "c"]);
        let result = nav.evaluate(
            NavTrigger::Scroll,
            ViewportMode::Mobile,
            &near_bottom(0.0),
            "/c",
            1.0,
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_retreats_from_top() {
        let mut nav = navigator(&["a", "b", "c"]);
        let top = ScrollMetrics::new(50.0, 2000.0, 800.0);

        let result = nav
            .evaluate(NavTrigger::TouchEnd, ViewportMode::Mobile, &top, "/c", 1.0)
            .unwrap();
        assert_eq!(result.direction, NavDirection::Backward);
        assert_eq!(result.to_path, "/b");
    }

    #[test]
    fn test_no_wrap_at_first_route() {
        let mut nav = navigator(&["a", "b", "c"]);
        let top = ScrollMetrics::new(0.0, 2000.0, 800.0);
        assert_eq!(
            nav.evaluate(NavTrigger::Scroll, ViewportMode::Mobile, &top, "/", 1.0),
            None
        );
    }

    #[test]
    fn test_forward_wins_when_both_edges_are_near() {
        // Short section: top and bottom are both within the threshold
        let mut nav = navigator(&["a", "b", "c"]);
        let short = ScrollMetrics::new(0.0, 850.0, 800.0);
        let result = nav
            .evaluate(NavTrigger::Scroll, ViewportMode::Mobile, &short, "/b", 1.0)
            .unwrap();
        assert_eq!(result.direction, NavDirection::Forward);
        assert_eq!(result.to_index, 2);
    }

    #[test]
    fn test_unknown_route_is_noop() {
        let mut nav = navigator(&["a", "b", "c"]);
        let result = nav.evaluate(
            NavTrigger::Scroll,
            ViewportMode::Mobile,
            &near_bottom(0.0),
            "/elsewhere",
            1.0,
        );
        assert_eq!(result, None);

        // The failed lookup must not consume the cooldown
        let result = nav.evaluate(
            NavTrigger::Scroll,
            ViewportMode::Mobile,
            &near_bottom(0.0),
            "/b",
            1.1,
        );
        assert!(result.is_some());
    }

    #[test]
    fn test_inactive_on_desktop_or_disabled() {
        let mut nav = navigator(&["a", "b", "c"]);
        let metrics = near_bottom(10.0);
        assert_eq!(
            nav.evaluate(NavTrigger::Scroll, ViewportMode::Desktop, &metrics, "/a", 1.0),
            None
        );

        let routes = Arc::new(RouteTable::from_ids(&["a", "b", "c"]).unwrap());
        let config = NavigatorConfig {
            enabled: false,
            ..NavigatorConfig::default()
        };
        let mut nav = SectionNavigator::new(routes, &config);
        assert_eq!(
            nav.evaluate(NavTrigger::Scroll, ViewportMode::Mobile, &metrics, "/a", 1.0),
            None
        );
    }

    #[test]
    fn test_middle_of_section_is_noop() {
        let mut nav = navigator(&["a", "b", "c"]);
        assert_eq!(
            nav.evaluate(NavTrigger::Scroll, ViewportMode::Mobile, &middle(), "/b", 1.0),
            None
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut nav = navigator(&["a", "b"]);
        assert!(nav
            .evaluate(
                NavTrigger::Scroll,
                ViewportMode::Mobile,
                &near_bottom(120.0),
                "/",
                1.0
            )
            .is_some());

        let mut nav = navigator(&["a", "b"]);
        assert!(nav
            .evaluate(
                NavTrigger::Scroll,
                ViewportMode::Mobile,
                &near_bottom(121.0),
                "/",
                1.0
            )
            .is_none());
    }

    #[test]
    fn test_cooldown_window() {
        let mut cooldown = Cooldown::from_millis(900);
        assert!(!cooldown.is_active(0.0));
        cooldown.stamp(5.0);
        assert!(cooldown.is_active(5.5));
        assert!(!cooldown.is_active(5.9));
    }
}
