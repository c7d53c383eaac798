use rand::Rng;

/// Exclusive upper bound for generated keys and values.
pub const KEY_BOUND: i32 = 1 << 15;

/// Dataset lengths exercised by the default suite, in run order.
pub const DATASET_SIZES: [usize; 2] = [10_000, 100_000];

/// Draws `len` pairs with key and value each uniform in `0..key_bound`.
///
/// Keys are not deduplicated. The key of each pair is drawn before its
/// value, so a given seed always yields the same sequence.
///
/// Panics if `key_bound <= 0`; [`crate::BenchConfig::validate`] rejects that
/// bound up front.
pub fn generate_dataset<R: Rng>(rng: &mut R, len: usize, key_bound: i32) -> Vec<(i32, i32)> {
    let mut data = Vec::with_capacity(len);
    for _ in 0..len {
        let key = rng.gen_range(0..key_bound);
        let value = rng.gen_range(0..key_bound);
        data.push((key, value));
    }
    log::debug!("generated {} pairs below {}", len, key_bound);
    data
}
