//! Scroll-driven behaviour: progress tracking and mobile section paging

pub mod document;
pub mod navigator;
pub mod progress;

pub use document::{SectionExtent, SinglePageDocument};
pub use navigator::{Cooldown, NavDirection, NavTrigger, Navigation, SectionNavigator};
pub use progress::{click_target, scroll_progress, ProgressTracker, ScrollMetrics, SmoothScroll};
