//! Hyperspace easter egg
//!
//! A wireframe core inside a star tunnel. Entering the scene drops out of
//! "warp": the camera flies in from far away while the star streaks shrink
//! to points. Drag orbits the camera; left alone it spins slowly.

use super::animation::{SpringConfig, SpringF32};
use super::camera::{OrbitCamera, Vec3};
use egui::{Color32, Pos2, Rect, Sense, Stroke, Ui, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const STAR_COUNT: usize = 180;
const STAR_SEED: u64 = 0x5eed_cafe;
const TUNNEL_RADIUS: f32 = 9.0;
const TUNNEL_DEPTH: f32 = 40.0;
const MAX_STREAK: f32 = 14.0;

const START_DISTANCE: f32 = 60.0;
const REST_DISTANCE: f32 = 12.0;

/// Radians per pixel of drag
const DRAG_SPEED: f32 = 0.008;
/// Seconds without input before idle spin resumes
const IDLE_AFTER_SECS: f64 = 2.5;
/// Radians per second
const IDLE_SPIN: f32 = 0.25;

const CORE_VERTICES: [Vec3; 6] = [
    Vec3::new(2.0, 0.0, 0.0),
    Vec3::new(-2.0, 0.0, 0.0),
    Vec3::new(0.0, 2.0, 0.0),
    Vec3::new(0.0, -2.0, 0.0),
    Vec3::new(0.0, 0.0, 2.0),
    Vec3::new(0.0, 0.0, -2.0),
];

#[derive(Debug, Clone, Copy)]
struct Star {
    position: Vec3,
}

/// A projected line ready to paint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Pos2,
    pub to: Pos2,
    /// 0..1, fades with depth
    pub intensity: f32,
}

pub struct HyperspaceScene {
    camera: OrbitCamera,
    warp: SpringF32,
    stars: Vec<Star>,
    last_interaction: f64,
}

impl HyperspaceScene {
    pub fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(STAR_SEED);
        let stars = (0..STAR_COUNT)
            .map(|_| {
                let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                let radius = rng.gen_range(3.0..TUNNEL_RADIUS);
                Star {
                    position: Vec3::new(
                        radius * angle.cos(),
                        radius * angle.sin(),
                        rng.gen_range(-TUNNEL_DEPTH..TUNNEL_DEPTH),
                    ),
                }
            })
            .collect();

        let mut scene = Self {
            camera: OrbitCamera::new(REST_DISTANCE),
            warp: SpringF32::with_config(0.0, SpringConfig::GENTLE),
            stars,
            last_interaction: f64::NEG_INFINITY,
        };
        scene.restart();
        scene
    }

    /// Begin the fly-in from the top
    pub fn restart(&mut self) {
        self.camera.set_distance_immediate(START_DISTANCE);
        self.camera.fly_to_distance(REST_DISTANCE);
        self.warp.set_immediate(1.0);
        self.warp.set_target(0.0);
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn warp(&self) -> f32 {
        self.warp.get()
    }

    pub fn drag(&mut self, delta: Vec2, now: f64) {
        self.camera
            .orbit(-delta.x * DRAG_SPEED, delta.y * DRAG_SPEED);
        self.last_interaction = now;
    }

    pub fn is_idle(&self, now: f64) -> bool {
        now - self.last_interaction > IDLE_AFTER_SECS
    }

    pub fn update(&mut self, dt: f32, now: f64) {
        if self.is_idle(now) {
            self.camera.orbit(IDLE_SPIN * dt, 0.0);
        }
        self.camera.update(dt);
        self.warp.tick(dt);
    }

    /// Project the whole scene into `screen`
    pub fn segments(&self, screen: Rect) -> Vec<Segment> {
        let mut out = Vec::with_capacity(STAR_COUNT + 12);
        let far = START_DISTANCE + TUNNEL_DEPTH;

        let streak = self.warp().max(0.0) * MAX_STREAK;
        for star in &self.stars {
            let tail = Vec3::new(
                star.position.x,
                star.position.y,
                star.position.z - streak - 0.05,
            );
            if let (Some((a, depth)), Some((b, _))) = (
                self.camera.project(star.position, screen),
                self.camera.project(tail, screen),
            ) {
                out.push(Segment {
                    from: a,
                    to: b,
                    intensity: (1.0 - depth / far).clamp(0.1, 1.0),
                });
            }
        }

        for (i, a) in CORE_VERTICES.iter().enumerate() {
            for (j, b) in CORE_VERTICES.iter().enumerate().skip(i + 1) {
                // Opposite vertices come in pairs (0,1), (2,3), (4,5)
                if i / 2 == j / 2 {
                    continue;
                }
                if let (Some((pa, _)), Some((pb, _))) = (
                    self.camera.project(*a, screen),
                    self.camera.project(*b, screen),
                ) {
                    out.push(Segment {
                        from: pa,
                        to: pb,
                        intensity: 1.0,
                    });
                }
            }
        }

        out
    }

    /// Paint the scene into the remaining space and handle drag input
    pub fn show(&mut self, ui: &mut Ui) {
        let now = ui.input(|i| i.time);
        let dt = ui.input(|i| i.stable_dt);

        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
        if response.dragged() {
            self.drag(response.drag_delta(), now);
        }
        self.update(dt, now);

        let rect = response.rect;
        painter.rect_filled(rect, 6.0, Color32::from_rgb(6, 8, 18));
        for segment in self.segments(rect) {
            let alpha = (segment.intensity * 255.0) as u8;
            painter.line_segment(
                [segment.from, segment.to],
                Stroke::new(1.2, Color32::from_rgba_unmultiplied(170, 210, 255, alpha)),
            );
        }

        // Idle spin never settles, so keep frames coming while visible
        ui.ctx().request_repaint();
    }
}

impl Default for HyperspaceScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn screen() -> Rect {
        Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))
    }

    fn run(scene: &mut HyperspaceScene, seconds: f64, start: f64) {
        let frames = (seconds * 60.0) as usize;
        for i in 0..frames {
            scene.update(1.0 / 60.0, start + i as f64 / 60.0);
        }
    }

    #[test]
    fn test_fly_in_settles() {
        let mut scene = HyperspaceScene::new();
        assert_eq!(scene.camera().distance(), START_DISTANCE);
        assert_eq!(scene.warp(), 1.0);

        run(&mut scene, 8.0, 0.0);
        assert!((scene.camera().distance() - REST_DISTANCE).abs() < 0.1);
        assert!(scene.warp() < 0.01);
    }

    #[test]
    fn test_core_wireframe_has_twelve_edges() {
        let mut scene = HyperspaceScene::new();
        run(&mut scene, 8.0, 0.0);
        let core_edges = scene
            .segments(screen())
            .iter()
            .filter(|s| s.intensity == 1.0)
            .count();
        assert!(core_edges >= 12);
    }

    #[test]
    fn test_drag_pauses_idle_spin() {
        let mut scene = HyperspaceScene::new();
        assert!(scene.is_idle(0.0));
        scene.drag(vec2(10.0, 0.0), 1.0);
        assert!(!scene.is_idle(2.0));
        assert!(scene.is_idle(4.0));
    }

    #[test]
    fn test_idle_spin_rotates() {
        let mut scene = HyperspaceScene::new();
        let before = scene.camera().yaw();
        run(&mut scene, 2.0, 100.0);
        assert!(scene.camera().yaw() > before);
    }

    #[test]
    fn test_restart_returns_to_warp() {
        let mut scene = HyperspaceScene::new();
        run(&mut scene, 8.0, 0.0);
        scene.restart();
        assert_eq!(scene.warp(), 1.0);
        assert_eq!(scene.camera().distance(), START_DISTANCE);
    }

    #[test]
    fn test_starfield_is_deterministic() {
        let a = HyperspaceScene::new().segments(screen());
        let b = HyperspaceScene::new().segments(screen());
        assert_eq!(a, b);
    }
}
