// Ordered collection of live particles

use crate::config::SplashConfig;
use crate::particle::Particle;
use crate::random::RandomSource;
use crate::theme::Theme;

pub struct ParticleStore {
    particles: Vec<Particle>,
    config: SplashConfig,
}

impl ParticleStore {
    pub fn new(config: SplashConfig) -> ParticleStore {
        ParticleStore {
            particles: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &SplashConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SplashConfig {
        &mut self.config
    }

    /// Appends one freshly randomised particle at `(x, y)`.
    pub fn spawn<R: RandomSource>(&mut self, x: f64, y: f64, theme: Theme, rng: &mut R) {
        let particle = Particle::spawn(x, y, theme, &self.config, rng);
        self.particles.push(particle);
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Steps every particle once, in order, and drops the exhausted ones in
    /// the same pass. Survivors keep their relative order.
    pub fn tick(&mut self, width: f64, height: f64) {
        let config = &self.config;
        self.particles.retain_mut(|particle| {
            particle.step(width, height, config);
            !particle.is_exhausted(config)
        });
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

impl Default for ParticleStore {
    fn default() -> Self {
        ParticleStore::new(SplashConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::random::ScriptedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(x: f64, y: f64, size: f64) -> Particle {
        Particle::new(x, y, 0.0, 0.0, size, Color::hsl(220.0, 100.0, 70.0))
    }

    #[test]
    fn spawn_bounds() {
        let mut store = ParticleStore::default();
        let mut rng = StdRng::seed_from_u64(42);
        for i in 0..500 {
            store.spawn(i as f64, 10.0, Theme::Light, &mut rng);
        }
        assert_eq!(store.len(), 500);
        for p in store.iter() {
            assert!(p.vel[0] >= -7.5 && p.vel[0] <= 7.5);
            assert!(p.vel[1] >= -7.5 && p.vel[1] <= 7.5);
            assert!(p.size >= 4.0 && p.size <= 12.0);
            assert!(p.size > 0.0);
            assert!(p.color.hue >= 10.0 && p.color.hue < 70.0);
        }
    }

    #[test]
    fn spawn_appends_at_position() {
        let mut store = ParticleStore::default();
        let mut rng = ScriptedRandom::new(vec![0.5, 0.5, 0.25, 0.0]);
        store.spawn(100.0, 100.0, Theme::Dark, &mut rng);
        assert_eq!(store.len(), 1);
        let p = store.particles()[0];
        assert_eq!(p.pos, [100.0, 100.0]);
        assert_eq!(p.vel, [0.0, 0.0]);
        assert_eq!(p.size, 6.0);
    }

    #[test]
    fn spawn_then_tick_from_rest() {
        let mut store = ParticleStore::default();
        let mut rng = ScriptedRandom::new(vec![0.5, 0.5, 0.25, 0.0]);
        store.spawn(100.0, 100.0, Theme::Dark, &mut rng);
        store.tick(800.0, 600.0);
        let p = store.particles()[0];
        assert!((p.vel[1] - 0.495).abs() < 1e-9);
        assert!((p.pos[1] - 100.495).abs() < 1e-9);
        assert_eq!(p.vel[0], 0.0);
        assert_eq!(p.pos[0], 100.0);
        assert_eq!(p.size, 6.0);
    }

    #[test]
    fn tick_on_empty_store() {
        let mut store = ParticleStore::default();
        store.tick(800.0, 600.0);
        assert!(store.is_empty());
    }

    #[test]
    fn tick_never_grows() {
        let mut store = ParticleStore::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            store.spawn(400.0, 580.0, Theme::Dark, &mut rng);
        }
        let mut previous = store.len();
        for _ in 0..2000 {
            store.tick(800.0, 600.0);
            assert!(store.len() <= previous);
            previous = store.len();
        }
    }

    #[test]
    fn size_at_threshold_is_removed() {
        let mut store = ParticleStore::default();
        store.push(Particle::new(400.0, 100.0, 3.0, -2.0, 0.5, Color::hsl(0.0, 0.0, 0.0)));
        store.tick(800.0, 600.0);
        assert!(store.is_empty());
    }

    #[test]
    fn adjacent_exhausted_particles_are_both_removed() {
        let mut store = ParticleStore::default();
        store.push(at(100.0, 100.0, 6.0));
        store.push(at(200.0, 100.0, 0.5));
        store.push(at(300.0, 100.0, 0.4));
        store.push(at(400.0, 100.0, 7.0));
        store.tick(800.0, 600.0);

        assert_eq!(store.len(), 2);
        let xs: Vec<f64> = store.iter().map(|p| p.pos[0]).collect();
        assert_eq!(xs, vec![100.0, 400.0]);
        // Survivors were each stepped exactly once
        for p in store.iter() {
            assert!((p.pos[1] - 100.495).abs() < 1e-9);
        }
    }

    #[test]
    fn shrink_below_threshold_removes_same_tick() {
        let mut store = ParticleStore::default();
        // 0.52 * 0.95 = 0.494, settled on the floor
        store.push(Particle::new(400.0, 599.48, 0.0, -0.5, 0.52, Color::hsl(0.0, 0.0, 0.0)));
        store.tick(800.0, 600.0);
        assert!(store.is_empty());
    }

    #[test]
    fn clear_empties() {
        let mut store = ParticleStore::default();
        store.push(at(1.0, 1.0, 5.0));
        store.clear();
        assert_eq!(store.len(), 0);
    }
}
