/// Storage and shard metadata for a single index, one entry of the
/// `_cat/indices` listing.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexInfo {
    pub name: String,
    pub size_bytes: i64,
    pub shard_count: i32,
}

/// Target storage per primary shard, in decimal gigabytes.
const GB_PER_SHARD_BUDGET: f64 = 30.0;

impl IndexInfo {
    pub fn new(name: impl Into<String>, size_bytes: i64, shard_count: i32) -> Self {
        IndexInfo {
            name: name.into(),
            size_bytes,
            shard_count,
        }
    }

    /// Primary-store size in decimal gigabytes (not GiB).
    pub fn size_gb(&self) -> f64 {
        self.size_bytes as f64 / 1_000_000_000.0
    }

    /// Gigabytes of storage per primary shard. A zero shard count yields an
    /// infinite (or NaN) ratio, which floats such indexes to the top of the
    /// balance report instead of hiding them.
    pub fn balance_ratio(&self) -> f64 {
        self.size_gb() / self.shard_count as f64
    }

    /// Shard count that would bring this index inside the per-shard storage
    /// budget, never below 1.
    pub fn recommended_shards(&self) -> i64 {
        ((self.size_gb() / GB_PER_SHARD_BUDGET).floor() as i64).max(1)
    }
}
