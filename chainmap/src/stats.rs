use serde::Serialize;

use crate::bucket::Bucket;

/// Snapshot of how entries are spread over the buckets
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    pub size: usize,
    pub capacity: usize,
    pub load_factor: f64,
    pub occupied_buckets: usize,
    pub empty_buckets: usize,
    /// Length of the longest chain
    pub max_bucket_len: usize,
    /// Sum of `len - 1` over non-empty buckets
    pub total_collisions: usize,
    /// `total_collisions / size`, or `0.0` for an empty map
    pub collision_rate: f64,
}

impl Stats {
    pub(crate) fn collect<V>(buckets: &[Bucket<V>], size: usize) -> Self {
        let capacity = buckets.len();
        let mut occupied_buckets = 0;
        let mut max_bucket_len = 0;
        let mut total_collisions = 0;

        for bucket in buckets.iter().filter(|b| !b.is_empty()) {
            occupied_buckets += 1;
            total_collisions += bucket.len() - 1;
            max_bucket_len = max_bucket_len.max(bucket.len());
        }

        let collision_rate = if size == 0 {
            0.0
        } else {
            total_collisions as f64 / size as f64
        };

        Self {
            size,
            capacity,
            load_factor: size as f64 / capacity as f64,
            occupied_buckets,
            empty_buckets: capacity - occupied_buckets,
            max_bucket_len,
            total_collisions,
            collision_rate,
        }
    }
}
