//! Phase timing harness for associative containers.
//!
//! A benchmark run times three phases (insert, search, delete) of a single
//! container over one dataset. Containers take part through the
//! capability traits ([`Insertable`], [`Searchable`], [`Deletable`]);
//! timings are reported by [`ScopedTimer`] on drop.
//!
//! The `map_phase_bench` binary takes no arguments. The only environment
//! variable it consults is `RUST_LOG`, read by `env_logger` for stderr
//! diagnostics; stdout never depends on it.

use core::fmt;

mod bench;
mod config;
mod dataset;
mod suite;
mod timer;

pub use bench::{phase_label, run_benchmark, Deletable, Insertable, MapAdt, Phase, Searchable};
pub use config::BenchConfig;
pub use dataset::{generate_dataset, DATASET_SIZES, KEY_BOUND};
pub use suite::{run_suite, HASH_MAP_NAME, TREE_MAP_NAME};
pub use timer::{Sample, ScopedTimer, StdoutSink, TimingSink, WriteSink};

/// Configuration rejected before any dataset is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    EmptyKeyRange(i32),
    NoDatasetSizes,
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::EmptyKeyRange(bound) => {
                write!(f, "EmptyKeyRange: key bound {} leaves no keys to draw", bound)
            }
            BenchError::NoDatasetSizes => write!(f, "NoDatasetSizes"),
        }
    }
}

impl std::error::Error for BenchError {}

pub type BenchResult<T> = Result<T, BenchError>;
