// Uniform random draws used when spawning particles. Everything random in the
// simulation goes through RandomSource so tests can replay exact values

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

pub trait RandomSource {
    /// Next draw from `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for ThreadRng {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

// Replays a fixed list of draws, wrapping around at the end
#[cfg(test)]
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        ScriptedRandom { values, next: 0 }
    }

    pub fn draws_taken(&self) -> usize {
        self.next
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
