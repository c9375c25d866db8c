use crate::util::ihash;

/// Picks the shard a key is routed to, in `[0, n_shards)`.
///
/// Stable across processes and machines: every map task routes a given key to
/// the same shard, so a reduce task only has to read one shard index from each
/// map task's output.
///
/// Panics if `n_shards` is zero.
pub fn select_shard(key: &str, n_shards: usize) -> usize {
    assert!(n_shards > 0, "n_shards must be > 0");
    ihash(key) as usize % n_shards
}
