//! Orbit camera with perspective projection
//!
//! World-to-screen transform for the wireframe scene. Yaw, pitch and distance
//! are springs so drags and the fly-in ease out instead of snapping.
//! Call `update(dt)` at the start of the frame, then project.

use super::animation::{SpringConfig, SpringF32};
use egui::{Pos2, Rect};

/// Point in scene space (y up, camera looks at the origin)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Vertical field of view in radians
const FOV_Y: f32 = 1.0;
const NEAR: f32 = 0.1;
const MIN_PITCH: f32 = -1.2;
const MAX_PITCH: f32 = 1.2;

#[derive(Debug, Clone)]
pub struct OrbitCamera {
    yaw: SpringF32,
    pitch: SpringF32,
    distance: SpringF32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitCamera {
    pub fn new(distance: f32) -> Self {
        Self {
            yaw: SpringF32::with_config(0.0, SpringConfig::CAMERA),
            pitch: SpringF32::with_config(0.35, SpringConfig::CAMERA),
            distance: SpringF32::with_config(distance, SpringConfig::GENTLE),
            min_distance: 2.0,
            max_distance: 60.0,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw.get()
    }

    pub fn pitch(&self) -> f32 {
        self.pitch.get()
    }

    pub fn distance(&self) -> f32 {
        self.distance.get()
    }

    pub fn update(&mut self, dt: f32) {
        self.yaw.tick(dt);
        self.pitch.tick(dt);
        self.distance.tick(dt);
    }

    pub fn is_animating(&self) -> bool {
        self.yaw.is_animating() || self.pitch.is_animating() || self.distance.is_animating()
    }

    /// Rotate the orbit target by a delta in radians
    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw.set_target(self.yaw.target() + d_yaw);
        self.pitch
            .set_target((self.pitch.target() + d_pitch).clamp(MIN_PITCH, MAX_PITCH));
    }

    pub fn fly_to_distance(&mut self, distance: f32) {
        self.distance
            .set_target(distance.clamp(self.min_distance, self.max_distance));
    }

    pub fn set_distance_immediate(&mut self, distance: f32) {
        self.distance
            .set_immediate(distance.clamp(self.min_distance, self.max_distance));
    }

    /// Point in camera space: x right, y up, z forward (depth)
    fn to_view(&self, p: Vec3) -> Vec3 {
        let (sy, cy) = self.yaw().sin_cos();
        let (sp, cp) = self.pitch().sin_cos();

        // Yaw around the y axis
        let x1 = p.x * cy - p.z * sy;
        let z1 = p.x * sy + p.z * cy;
        // Pitch around the x axis
        let y2 = p.y * cp - z1 * sp;
        let z2 = p.y * sp + z1 * cp;

        Vec3::new(x1, y2, z2 + self.distance())
    }

    /// Project to screen; `None` when behind the near plane
    pub fn project(&self, p: Vec3, screen: Rect) -> Option<(Pos2, f32)> {
        let v = self.to_view(p);
        if v.z <= NEAR {
            return None;
        }
        let focal = 0.5 * screen.height() / (FOV_Y * 0.5).tan();
        let center = screen.center();
        Some((
            Pos2::new(center.x + v.x * focal / v.z, center.y - v.y * focal / v.z),
            v.z,
        ))
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(12.0)
    }
}
