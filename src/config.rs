// Tunable constants for the splash effect. Defaults reproduce the page's
// original feel, units are canvas pixels and frame ticks

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SplashConfig {
    /// Added to vertical velocity every tick.
    pub gravity: f64,
    /// Per-axis velocity multiplier every tick.
    pub drag: f64,
    /// Fraction of speed kept (and reversed) on a floor or wall bounce.
    pub restitution: f64,
    /// Spawn velocity per axis is drawn from `[-spawn_speed / 2, spawn_speed / 2]`.
    pub spawn_speed: f64,
    pub min_size: f64,
    pub size_spread: f64,
    /// Both velocity components must be below this to count as settled.
    pub settle_speed: f64,
    /// Settled particles only shrink within this distance of the floor.
    pub settle_band: f64,
    pub shrink_factor: f64,
    /// Particles at or below this radius are removed.
    pub exhaustion_size: f64,
    /// Chance that a single ambient move event spawns a particle.
    pub ambient_spawn_probability: f64,
    /// Particles spawned per explicit trigger.
    pub burst_count: usize,
}

impl Default for SplashConfig {
    fn default() -> Self {
        SplashConfig {
            gravity: 0.5,
            drag: 0.99,
            restitution: 0.6,
            spawn_speed: 15.0,
            min_size: 4.0,
            size_spread: 8.0,
            settle_speed: 0.1,
            settle_band: 50.0,
            shrink_factor: 0.95,
            exhaustion_size: 0.5,
            ambient_spawn_probability: 0.5,
            burst_count: 10,
        }
    }
}

impl SplashConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("gravity", self.gravity),
            ("drag", self.drag),
            ("restitution", self.restitution),
            ("spawn_speed", self.spawn_speed),
            ("min_size", self.min_size),
            ("size_spread", self.size_spread),
            ("settle_speed", self.settle_speed),
            ("settle_band", self.settle_band),
            ("shrink_factor", self.shrink_factor),
            ("exhaustion_size", self.exhaustion_size),
            ("ambient_spawn_probability", self.ambient_spawn_probability),
        ];
        for &(name, value) in fields.iter() {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
        }

        if self.drag <= 0.0 || self.drag > 1.0 {
            return Err(ConfigError::OutOfRange("drag", self.drag));
        }
        if self.restitution < 0.0 || self.restitution > 1.0 {
            return Err(ConfigError::OutOfRange("restitution", self.restitution));
        }
        if self.shrink_factor <= 0.0 || self.shrink_factor >= 1.0 {
            return Err(ConfigError::OutOfRange("shrink_factor", self.shrink_factor));
        }
        if self.ambient_spawn_probability < 0.0 || self.ambient_spawn_probability > 1.0 {
            return Err(ConfigError::OutOfRange(
                "ambient_spawn_probability",
                self.ambient_spawn_probability,
            ));
        }
        if self.size_spread < 0.0 {
            return Err(ConfigError::OutOfRange("size_spread", self.size_spread));
        }
        if self.min_size <= self.exhaustion_size {
            return Err(ConfigError::SpawnsExhausted {
                min_size: self.min_size,
                exhaustion_size: self.exhaustion_size,
            });
        }
        Ok(())
    }

    pub fn with_ambient_spawn_probability(mut self, probability: f64) -> Self {
        self.ambient_spawn_probability = probability.max(0.0).min(1.0);
        self
    }
}

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A field was NaN or infinite.
    NotFinite(&'static str),
    /// A field fell outside its allowed range.
    OutOfRange(&'static str, f64),
    /// Freshly spawned particles would already be below the removal size.
    SpawnsExhausted { min_size: f64, exhaustion_size: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFinite(name) => write!(f, "{} must be a finite number", name),
            ConfigError::OutOfRange(name, value) => {
                write!(f, "{} is out of range: {}", name, value)
            }
            ConfigError::SpawnsExhausted {
                min_size,
                exhaustion_size,
            } => write!(
                f,
                "min_size {} must be larger than exhaustion_size {}",
                min_size, exhaustion_size
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
