//! Hyperspace easter egg rendering
//!
//! - `animation`: spring-driven values
//! - `camera`: orbit camera and perspective projection
//! - `hyperspace`: the scene itself

pub mod animation;
pub mod camera;
pub mod hyperspace;

pub use animation::{SpringConfig, SpringF32};
pub use camera::{OrbitCamera, Vec3};
pub use hyperspace::{HyperspaceScene, Segment};
