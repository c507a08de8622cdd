use std::hash::BuildHasher;

use crate::error::{ConfigError, Result};
use crate::hash_map::{DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, HashMap};
use crate::hasher::PolyBuildHasher;

/// Validated construction of a [`HashMap`].
///
/// ```
/// use chainmap::Builder;
///
/// let map = Builder::new()
///     .capacity(4)
///     .load_factor(0.5)
///     .build::<u32>()
///     .unwrap();
/// assert_eq!(map.capacity(), 4);
/// assert_eq!(map.max_load_factor(), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct Builder<S = PolyBuildHasher> {
    capacity: usize,
    load_factor: f64,
    hasher: S,
}

impl Default for Builder<PolyBuildHasher> {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
            hasher: PolyBuildHasher,
        }
    }
}

impl Builder<PolyBuildHasher> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: BuildHasher> Builder<S> {
    /// Initial number of buckets
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Ratio of entries to buckets at which the table doubles
    pub fn load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Swaps the hasher, e.g. for `rustc_hash::FxBuildHasher`
    pub fn hasher<T: BuildHasher>(self, hasher: T) -> Builder<T> {
        Builder {
            capacity: self.capacity,
            load_factor: self.load_factor,
            hasher,
        }
    }

    pub fn build<V>(self) -> Result<HashMap<V, S>> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !self.load_factor.is_finite() || self.load_factor <= 0.0 {
            return Err(ConfigError::InvalidLoadFactor(self.load_factor));
        }
        Ok(HashMap::from_parts(
            self.capacity,
            self.load_factor,
            self.hasher,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxBuildHasher;

    #[test]
    fn test_defaults() {
        let map = Builder::new().build::<i32>().unwrap();
        assert_eq!(map.capacity(), DEFAULT_CAPACITY);
        assert_eq!(map.max_load_factor(), DEFAULT_LOAD_FACTOR);
        assert!(map.is_empty());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = Builder::new().capacity(0).build::<i32>().unwrap_err();
        assert_eq!(err, ConfigError::ZeroCapacity);
        assert_eq!(err.to_string(), "capacity must be at least 1");
    }

    #[test]
    fn test_bad_load_factor_rejected() {
        for lf in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Builder::new().load_factor(lf).build::<i32>();
            assert!(
                matches!(result, Err(ConfigError::InvalidLoadFactor(_))),
                "load factor {lf} should be rejected"
            );
        }
    }

    #[test]
    fn test_load_factor_above_one_allowed() {
        let mut map = Builder::new()
            .capacity(2)
            .load_factor(2.0)
            .build::<i32>()
            .unwrap();
        for i in 0..4 {
            map.set(i, i);
        }
        assert_eq!(map.capacity(), 2);
        map.set(4, 4);
        assert_eq!(map.capacity(), 4);
    }

    #[test]
    fn test_custom_hasher() {
        let mut map = Builder::new()
            .capacity(8)
            .hasher(FxBuildHasher)
            .build::<&str>()
            .unwrap();
        map.set("a", "x").set("b", "y");
        assert_eq!(map.get("a"), Some(&"x"));
        assert_eq!(map.get("b"), Some(&"y"));
    }
}
