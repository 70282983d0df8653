// The splash simulation: surface size, spawn triggers and the per-frame
// update-and-render step. Nothing here schedules itself, a driver calls
// run_frame once per display refresh (AnimationLoop in the browser, a plain
// loop in tests).

use crate::config::{ConfigError, SplashConfig};
use crate::random::RandomSource;
use crate::store::ParticleStore;
use crate::surface::DrawSurface;
use crate::theme::ThemeSource;
use wasm_bindgen::JsValue;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

pub struct SplashSimulation<R: RandomSource> {
    store: ParticleStore,
    rng: R,
    theme: Box<dyn ThemeSource>,
    width: f64,
    height: f64,
    state: LoopState,
    frame_count: u64,
}

impl<R: RandomSource> SplashSimulation<R> {
    pub fn new(config: SplashConfig, rng: R, theme: Box<dyn ThemeSource>) -> Self {
        SplashSimulation {
            store: ParticleStore::new(config),
            rng,
            theme,
            width: 0.0,
            height: 0.0,
            state: LoopState::Stopped,
            frame_count: 0,
        }
    }

    pub fn try_new(config: SplashConfig, rng: R, theme: Box<dyn ThemeSource>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(SplashSimulation::new(config, rng, theme))
    }

    /// Matches the drawing surface to the viewport. Particles are left where
    /// they are, even if that is now outside the bounds.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Ambient cursor movement. Returns whether a particle was spawned.
    pub fn on_ambient_move(&mut self, x: f64, y: f64, over_exclusion_zone: bool) -> bool {
        if over_exclusion_zone {
            return false;
        }
        let threshold = 1.0 - self.store.config().ambient_spawn_probability;
        if self.rng.next_unit() > threshold {
            let theme = self.theme.current_theme();
            self.store.spawn(x, y, theme, &mut self.rng);
            true
        } else {
            false
        }
    }

    /// Discrete activation such as a mouse press, always spawns a full burst.
    pub fn on_explicit_trigger(&mut self, x: f64, y: f64) {
        let theme = self.theme.current_theme();
        for _ in 0..self.store.config().burst_count {
            self.store.spawn(x, y, theme, &mut self.rng);
        }
    }

    /// Clears the surface, steps every particle and draws the survivors.
    pub fn run_frame<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> Result<(), JsValue> {
        if self.state == LoopState::Stopped && self.frame_count == 0 {
            self.state = LoopState::Running;
        }
        self.frame_count += 1;

        surface.clear(self.width, self.height);
        self.store.tick(self.width, self.height);
        for particle in self.store.iter() {
            surface.fill_circle(
                particle.pos[0],
                particle.pos[1],
                particle.size,
                &particle.color.to_css(),
            )?;
        }
        Ok(())
    }

    pub fn start(&mut self) {
        self.state = LoopState::Running;
    }

    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ParticleStore {
        &mut self.store
    }

    pub fn set_ambient_spawn_probability(&mut self, probability: f64) {
        let config = self.store.config_mut();
        *config = config.with_ambient_spawn_probability(probability);
    }
}
