mod bucket;
pub mod config;
pub mod entry;
pub mod error;
pub mod hash_map;
pub mod hasher;
pub mod iter;
pub mod key;
pub mod stats;
pub use config::Builder;
pub use entry::{MapEntry, OccupiedEntry, VacantEntry};
pub use error::ConfigError;
pub use hash_map::{DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, FxChainMap, HashMap};
pub use hasher::{PolyBuildHasher, PolyHasher, hash_str};
pub use key::StrKey;
pub use stats::Stats;
