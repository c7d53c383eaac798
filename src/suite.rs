use std::collections::{BTreeMap, HashMap};

use crate::bench::run_benchmark;
use crate::config::BenchConfig;
use crate::dataset::generate_dataset;
use crate::timer::TimingSink;
use crate::BenchResult;

pub const TREE_MAP_NAME: &str = "tree map";
pub const HASH_MAP_NAME: &str = "hash map";

/// Runs the tree map and then the hash map over each configured dataset.
///
/// All datasets are drawn from one RNG before any timing starts. Both
/// containers of a size group see the same slice, and each run gets a
/// fresh container.
pub fn run_suite<S: TimingSink>(config: &BenchConfig, sink: &mut S) -> BenchResult<()> {
    config.validate()?;

    let mut rng = config.rng();
    let datasets: Vec<Vec<(i32, i32)>> = config
        .sizes
        .iter()
        .map(|&n| generate_dataset(&mut rng, n, config.key_bound))
        .collect();

    for data in &datasets {
        log::info!("size group {}", data.len());

        let mut tree_map: BTreeMap<i32, i32> = BTreeMap::new();
        run_benchmark(&mut tree_map, data, TREE_MAP_NAME, &mut *sink);

        let mut hash_map: HashMap<i32, i32> = HashMap::new();
        run_benchmark(&mut hash_map, data, HASH_MAP_NAME, &mut *sink);
    }
    Ok(())
}
