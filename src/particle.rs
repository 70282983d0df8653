// Simple particle struct to keep track of individual position, velocity, size, and color

use crate::color::Color;
use crate::config::SplashConfig;
use crate::random::RandomSource;
use crate::theme::Theme;
use vecmath::{vec2_add, vec2_scale, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub size: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, size: f64, color: Color) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            size,
            color,
        }
    }

    // Random burst velocity on both axes, random radius, color from the
    // theme active at the moment of spawning
    pub fn spawn<R: RandomSource>(
        x: f64,
        y: f64,
        theme: Theme,
        config: &SplashConfig,
        rng: &mut R,
    ) -> Particle {
        let vel_x = (rng.next_unit() - 0.5) * config.spawn_speed;
        let vel_y = (rng.next_unit() - 0.5) * config.spawn_speed;
        let size = rng.next_unit() * config.size_spread + config.min_size;
        let color = Color::for_theme(theme, rng);
        Particle::new(x, y, vel_x, vel_y, size, color)
    }

    /// Advances the particle by one tick inside a `width` x `height` box
    /// whose floor is at `y = height`.
    pub fn step(&mut self, width: f64, height: f64, config: &SplashConfig) {
        self.vel[1] += config.gravity;
        self.vel = vec2_scale(self.vel, config.drag);
        self.pos = vec2_add(self.pos, self.vel);

        if self.pos[1] + self.size > height {
            self.pos[1] = height - self.size;
            self.vel[1] *= -config.restitution;
        }

        // Either wall flips vx exactly once
        if self.pos[0] + self.size > width || self.pos[0] - self.size < 0.0 {
            self.vel[0] *= -config.restitution;
        }

        if self.is_settled(height, config) {
            self.size *= config.shrink_factor;
        }
    }

    pub fn is_settled(&self, height: f64, config: &SplashConfig) -> bool {
        self.vel[0].abs() < config.settle_speed
            && self.vel[1].abs() < config.settle_speed
            && self.pos[1] > height - config.settle_band
    }

    pub fn is_exhausted(&self, config: &SplashConfig) -> bool {
        self.size <= config.exhaustion_size
    }
}
