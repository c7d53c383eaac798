use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::dataset::{DATASET_SIZES, KEY_BOUND};
use crate::{BenchError, BenchResult};

/// Workload parameters for [`crate::run_suite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Dataset lengths, run in this order.
    pub sizes: Vec<usize>,
    /// Keys and values are drawn from `0..key_bound`.
    pub key_bound: i32,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DATASET_SIZES.to_vec(),
            key_bound: KEY_BOUND,
            seed: None,
        }
    }
}

impl BenchConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_sizes(mut self, sizes: &[usize]) -> Self {
        self.sizes = sizes.to_vec();
        self
    }

    pub fn validate(&self) -> BenchResult<()> {
        if self.key_bound <= 0 {
            return Err(BenchError::EmptyKeyRange(self.key_bound));
        }
        if self.sizes.is_empty() {
            return Err(BenchError::NoDatasetSizes);
        }
        Ok(())
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
