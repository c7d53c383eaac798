use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::hint::black_box;

use crate::timer::{ScopedTimer, TimingSink};

/// Keyed insertion. An existing key keeps its first value.
pub trait Insertable<K, V> {
    fn insert_pair(&mut self, key: K, value: V);
}

/// Keyed lookup.
pub trait Searchable<K, V> {
    fn search(&self, key: &K) -> Option<&V>;
}

/// Keyed removal; absent keys are a no-op.
pub trait Deletable<K, V> {
    fn delete(&mut self, key: &K) -> Option<V>;
}

/// Everything [`run_benchmark`] needs from a container.
pub trait MapAdt<K, V>: Insertable<K, V> + Searchable<K, V> + Deletable<K, V> {}

impl<K, V, M> MapAdt<K, V> for M where M: Insertable<K, V> + Searchable<K, V> + Deletable<K, V> {}

impl<K: Ord, V> Insertable<K, V> for BTreeMap<K, V> {
    fn insert_pair(&mut self, key: K, value: V) {
        self.entry(key).or_insert(value);
    }
}

impl<K: Ord, V> Searchable<K, V> for BTreeMap<K, V> {
    fn search(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K: Ord, V> Deletable<K, V> for BTreeMap<K, V> {
    fn delete(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Insertable<K, V> for HashMap<K, V, S> {
    fn insert_pair(&mut self, key: K, value: V) {
        self.entry(key).or_insert(value);
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Searchable<K, V> for HashMap<K, V, S> {
    fn search(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Deletable<K, V> for HashMap<K, V, S> {
    fn delete(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }
}

/// One timed pass over a dataset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Insert,
    Search,
    Delete,
}

impl Phase {
    /// Execution order within one benchmark run.
    pub const ALL: [Phase; 3] = [Phase::Insert, Phase::Search, Phase::Delete];

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Insert => "insert",
            Phase::Search => "search",
            Phase::Delete => "delete",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timer label for one phase, e.g. `"tree map insert 10000"`.
pub fn phase_label(name: &str, phase: Phase, size: usize) -> String {
    format!("{} {} {}", name, phase, size)
}

/// Times insert, search and delete of every pair in `data`, in that order.
///
/// Phases run in [`Phase::ALL`] order. Each walks `data` front to back and
/// is covered by one [`ScopedTimer`], so `sink` receives exactly three
/// records. Lookup and removal results go through `black_box` to keep the
/// work in the loop.
pub fn run_benchmark<K, V, M, S>(map: &mut M, data: &[(K, V)], name: &str, sink: &mut S)
where
    K: Clone,
    V: Clone,
    M: MapAdt<K, V>,
    S: TimingSink,
{
    let size = data.len();
    log::debug!("benchmarking {} over {} pairs", name, size);

    for phase in Phase::ALL {
        let _timer = ScopedTimer::new(phase_label(name, phase, size), &mut *sink);
        match phase {
            Phase::Insert => {
                for (k, v) in data {
                    map.insert_pair(k.clone(), v.clone());
                }
            }
            Phase::Search => {
                for (k, _) in data {
                    black_box(map.search(k));
                }
            }
            Phase::Delete => {
                for (k, _) in data {
                    black_box(map.delete(k));
                }
            }
        }
    }
}
