//! Spring-based animation for the hyperspace scene
//!
//! Critically-damped spring physics. Values are polled each frame:
//! call `tick(dt)` first, then render with `get()`.

/// Spring configuration parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Stiffness (higher = faster response)
    pub stiffness: f32,
    /// 1.0 = critically damped, < 1.0 overshoots, > 1.0 sluggish
    pub damping: f32,
}

impl SpringConfig {
    /// Slow approach used for the fly-in
    pub const GENTLE: Self = Self {
        stiffness: 40.0,
        damping: 1.0,
    };

    /// Orbit follow after a drag
    pub const CAMERA: Self = Self {
        stiffness: 120.0,
        damping: 1.0,
    };
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::CAMERA
    }
}

/// Animated f32 value with spring physics
///
/// ```ignore
/// let mut zoom = SpringF32::new(1.0);
/// zoom.set_target(2.0);
/// zoom.tick(dt);
/// let current = zoom.get();
/// ```
#[derive(Debug, Clone)]
pub struct SpringF32 {
    current: f32,
    target: f32,
    velocity: f32,
    config: SpringConfig,
}

impl SpringF32 {
    pub fn new(initial: f32) -> Self {
        Self::with_config(initial, SpringConfig::default())
    }

    pub fn with_config(initial: f32, config: SpringConfig) -> Self {
        Self {
            current: initial,
            target: initial,
            velocity: 0.0,
            config,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Jump to value (no animation)
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advance by `dt` seconds
    ///
    /// F = -k*x - c*v, with c = damping * 2 * sqrt(k)
    pub fn tick(&mut self, dt: f32) {
        // Large steps (tab in background) would blow up the integration
        let dt = dt.min(0.1);

        let displacement = self.current - self.target;
        let spring_force = -self.config.stiffness * displacement;
        let damping_force =
            -self.config.damping * 2.0 * self.config.stiffness.sqrt() * self.velocity;

        self.velocity += (spring_force + damping_force) * dt;
        self.current += self.velocity * dt;

        if (self.current - self.target).abs() < 0.0001 && self.velocity.abs() < 0.001 {
            self.current = self.target;
            self.velocity = 0.0;
        }
    }

    pub fn get(&self) -> f32 {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        (self.current - self.target).abs() > 0.0001 || self.velocity.abs() > 0.001
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(spring: &mut SpringF32, seconds: f32) {
        let steps = (seconds * 60.0) as usize;
        for _ in 0..steps {
            spring.tick(1.0 / 60.0);
        }
    }

    #[test]
    fn test_spring_converges() {
        let mut spring = SpringF32::new(0.0);
        spring.set_target(10.0);
        assert!(spring.is_animating());

        settle(&mut spring, 5.0);
        assert!((spring.get() - 10.0).abs() < 0.01);
        assert!(!spring.is_animating());
    }

    #[test]
    fn test_critically_damped_does_not_overshoot() {
        let mut spring = SpringF32::with_config(0.0, SpringConfig::GENTLE);
        spring.set_target(1.0);
        for _ in 0..600 {
            spring.tick(1.0 / 60.0);
            assert!(spring.get() <= 1.0 + 1e-3);
        }
    }

    #[test]
    fn test_set_immediate() {
        let mut spring = SpringF32::new(0.0);
        spring.set_target(5.0);
        spring.tick(0.016);
        spring.set_immediate(3.0);
        assert_eq!(spring.get(), 3.0);
        assert_eq!(spring.target(), 3.0);
        assert!(!spring.is_animating());
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let mut spring = SpringF32::new(0.0);
        spring.set_target(1.0);
        spring.tick(10.0);
        assert!(spring.get().is_finite());
        assert!(spring.get().abs() < 10.0);
    }
}
