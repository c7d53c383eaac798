use std::collections::{BTreeMap, HashMap, HashSet};

use map_phase_bench::{generate_dataset, run_benchmark, Sample, Searchable};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #[test]
    fn prop_same_seed_same_dataset(seed in any::<u64>(), len in 0usize..512, bound in 1i32..40_000) {
        let a = generate_dataset(&mut StdRng::seed_from_u64(seed), len, bound);
        let b = generate_dataset(&mut StdRng::seed_from_u64(seed), len, bound);
        prop_assert_eq!(a.len(), len);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_delete_phase_clears_every_key(pairs in prop::collection::vec((0i32..64, any::<i32>()), 0..200)) {
        let mut tree_map: BTreeMap<i32, i32> = BTreeMap::new();
        let mut hash_map: HashMap<i32, i32> = HashMap::new();
        let mut samples: Vec<Sample> = Vec::new();

        run_benchmark(&mut tree_map, &pairs, "tree map", &mut samples);
        run_benchmark(&mut hash_map, &pairs, "hash map", &mut samples);

        prop_assert_eq!(samples.len(), 6);
        prop_assert!(tree_map.is_empty());
        prop_assert!(hash_map.is_empty());

        let keys: HashSet<i32> = pairs.iter().map(|(k, _)| *k).collect();
        for k in &keys {
            prop_assert!(tree_map.search(k).is_none());
            prop_assert!(hash_map.search(k).is_none());
        }
    }
}
