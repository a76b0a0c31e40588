//! Uniform random selection over a resolved quote list

use crate::services::QuoteList;
use quote_types::Quote;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Process-wide RNG, seeded once and shared by all request tasks
pub struct RandomSelector {
    rng: Mutex<StdRng>,
}

impl RandomSelector {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic sequence, for tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Pick one quote with uniform probability
    pub fn pick<'a>(&self, quotes: &'a QuoteList) -> &'a Quote {
        let slice = quotes.as_slice();
        let index = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            rng.gen_range(0..slice.len())
        };
        &slice[index]
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}
