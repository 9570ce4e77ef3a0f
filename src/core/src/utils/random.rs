use crate::error::{SimulationError, SimulationResult};
use serde::{Deserialize, Serialize};

const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;
const GOLDEN_GAMMA: u32 = 0x9E37_79B9;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Mulberry32 stream. The output sequence is fixed by the seed alone, so the
/// same seed consumed in the same call order always rebuilds the same world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        SeededRng { state: seed }
    }

    /// Seed used for everything that happens on one calendar day. Both the
    /// interactive and the worker context must derive it the same way.
    pub fn for_day(season: u32, day: u32) -> Self {
        SeededRng::new(season.wrapping_mul(1000).wrapping_add(day))
    }

    /// Independent stream keyed by `salt`, taken from the current state
    /// without advancing it.
    pub fn derive(&self, salt: u32) -> Self {
        let mixed = self.state ^ salt.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA);
        SeededRng::new(mixed.rotate_left(13) ^ GOLDEN_GAMMA)
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);

        let mut t = (self.state ^ (self.state >> 15)).wrapping_mul(self.state | 1);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61)) ^ t;

        t ^ (t >> 14)
    }

    /// Float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / TWO_POW_32
    }

    /// Uniform integer in `[min, max)`. Returns `min` for an empty range.
    pub fn range(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }

        let span = (max as i64 - min as i64) as f64;
        let offset = (self.next_f64() * span).floor() as i64;

        (min as i64 + offset) as i32
    }

    /// Uniform float in `[-amplitude, amplitude)`.
    pub fn jitter(&mut self, amplitude: f32) -> f32 {
        ((self.next_f64() * 2.0 - 1.0) as f32) * amplitude
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Blends a uniform draw with a fixed `bias` weighted by `influence`, then
    /// scales into `[min, max)`. `influence = 0` is a plain uniform draw,
    /// `influence = 1` always lands on the value `bias` points at.
    pub fn biased(&mut self, min: i32, max: i32, bias: f64, influence: f64) -> i32 {
        if max <= min {
            return min;
        }

        let bias = bias.clamp(0.0, 1.0);
        let influence = influence.clamp(0.0, 1.0);

        let blended = self.next_f64() * (1.0 - influence) + bias * influence;
        let span = (max as i64 - min as i64) as f64;
        let value = (min as f64 + blended * span).floor() as i64;

        value.clamp(min as i64, max as i64 - 1) as i32
    }

    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> SimulationResult<&'a T> {
        if items.is_empty() {
            return Err(SimulationError::EmptyDomain("choice"));
        }

        let idx = self.range(0, items.len() as i32) as usize;

        Ok(&items[idx])
    }

    /// Picks an item with probability proportional to its weight.
    pub fn weighted<'a, T>(&mut self, items: &'a [(T, f64)]) -> SimulationResult<&'a T> {
        let total: f64 = items.iter().map(|(_, w)| w.max(0.0)).sum();

        if items.is_empty() || total <= 0.0 {
            return Err(SimulationError::EmptyDomain("weighted choice"));
        }

        let mut roll = self.next_f64() * total;

        for (item, weight) in items {
            let weight = weight.max(0.0);
            if roll < weight {
                return Ok(item);
            }
            roll -= weight;
        }

        // float accumulation can leave a sliver past the last bucket
        Ok(&items[items.len() - 1].0)
    }
}
