use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::config::GameConfig;
use crate::domain::die::{DieValue, MAX_FACE, MIN_FACE};
use crate::engine::RandomSource;

/// Системный RNG (thread_rng).
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn roll_die(&mut self) -> DieValue {
        rand::thread_rng().gen_range(MIN_FACE..=MAX_FACE)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed даёт одинаковую последовательность бросков.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn roll_die(&mut self) -> DieValue {
        self.inner.gen_range(MIN_FACE..=MAX_FACE)
    }
}

/// RNG по конфигу: seed задан – детерминированный, иначе системный.
pub fn rng_for_config(config: &GameConfig) -> Box<dyn RandomSource> {
    match config.seed {
        Some(seed) => Box::new(DeterministicRng::from_seed(seed)),
        None => Box::new(SystemRng),
    }
}
