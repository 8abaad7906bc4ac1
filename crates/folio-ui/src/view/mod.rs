//! View management module
//!
//! This module provides:
//! - `ViewComposer`: single-page (mobile) vs routed (desktop) composition
//! - Entry animations: route transitions, scroll reveals, count-up counters

pub mod composer;
pub mod transition;

pub use composer::{Composition, SectionSlot, ViewComposer};
pub use transition::{
    ease_in_out_cubic, ease_out_cubic, lerp_f32, visible_fraction, CountUp, Reveal,
    SectionTransition,
};
