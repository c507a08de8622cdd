use std::hash::{BuildHasher, Hasher};

/// Polynomial string hash with multiplier 31 over UTF-16 code units,
/// accumulated in a wrapping 32-bit signed integer.
///
/// `finish` returns the absolute value of the accumulator, so the result
/// always fits in 32 bits and `i32::MIN` maps to `2^31`.
///
/// Only input fed through `write_u16`, one UTF-16 unit per call, yields
/// [`hash_str`]. That is what [`crate::HashMap`] does. Going through
/// `Hash for str` instead (`BuildHasher::hash_one`, std collections) feeds
/// UTF-8 bytes plus a trailing `0xff`, so the result differs from
/// [`hash_str`] for every key.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolyHasher {
    hash: i32,
}

impl PolyHasher {
    const MULTIPLIER: i32 = 31;

    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn push(&mut self, unit: u16) {
        self.hash = self
            .hash
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(unit as i32);
    }
}

impl Hasher for PolyHasher {
    fn finish(&self) -> u64 {
        self.hash.unsigned_abs() as u64
    }

    // raw bytes are folded as if each one were a code unit, so this only
    // agrees with `hash_str` for ASCII
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.push(b as u16);
        }
    }

    fn write_u16(&mut self, i: u16) {
        self.push(i);
    }
}

/// Builder for [`PolyHasher`], the default hasher of [`crate::HashMap`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PolyBuildHasher;

impl BuildHasher for PolyBuildHasher {
    type Hasher = PolyHasher;

    fn build_hasher(&self) -> Self::Hasher {
        PolyHasher::new()
    }
}

/// Computes the polynomial hash of `key` directly.
pub fn hash_str(key: &str) -> u32 {
    let mut hasher = PolyHasher::new();
    for unit in key.encode_utf16() {
        hasher.write_u16(unit);
    }
    hasher.hash.unsigned_abs()
}

/// Feeds `key` into a fresh hasher from `build` as UTF-16 code units.
pub(crate) fn hash_key<S: BuildHasher>(build: &S, key: &str) -> u64 {
    let mut hasher = build.build_hasher();
    for unit in key.encode_utf16() {
        hasher.write_u16(unit);
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(hash_str(""), 0);
        assert_eq!(hash_str("a"), 97);
        assert_eq!(hash_str("ab"), 97 * 31 + 98);
        assert_eq!(hash_str("hello"), 99_162_322);
    }

    #[test]
    fn test_wraparound_to_min_is_absolute() {
        // accumulator lands exactly on i32::MIN
        assert_eq!(hash_str("polygenelubricants"), 1u32 << 31);
    }

    #[test]
    fn test_negative_accumulator_is_absolute() {
        // "nombre" overflows to -1039904823
        let mut raw: i32 = 0;
        for unit in "nombre".encode_utf16() {
            raw = raw.wrapping_mul(31).wrapping_add(unit as i32);
        }
        assert_eq!(raw, -1_039_904_823);
        assert_eq!(hash_str("nombre"), 1_039_904_823);
    }

    #[test]
    fn test_utf16_code_units() {
        // U+1F600 is a surrogate pair: 0xD83D 0xDE00
        let expected = (0xD83Di32.wrapping_mul(31) + 0xDE00) as u32;
        assert_eq!(hash_str("\u{1F600}"), expected);
        assert_eq!(hash_str("é"), 0xE9);
    }

    #[test]
    fn test_equal_hash_strings() {
        assert_eq!(hash_str("Aa"), hash_str("BB"));
    }

    #[test]
    fn test_hash_key_matches_hash_str() {
        for key in ["", "a", "nombre", "polygenelubricants", "key19"] {
            assert_eq!(hash_key(&PolyBuildHasher, key), hash_str(key) as u64);
        }
    }

    #[test]
    fn test_hash_one_is_not_hash_str() {
        // `Hash for str` appends 0xff and feeds UTF-8 bytes
        let mut hasher = PolyHasher::new();
        hasher.write(b"hello");
        hasher.write_u8(0xff);
        assert_eq!(PolyBuildHasher.hash_one("hello"), hasher.finish());
        assert_ne!(PolyBuildHasher.hash_one("hello"), hash_str("hello") as u64);
    }

    #[test]
    fn test_write_bytes_differs_for_non_ascii() {
        let mut hasher = PolyHasher::new();
        hasher.write("é".as_bytes());
        assert_eq!(hasher.finish(), (0xC3 * 31 + 0xA9) as u64);
        assert_ne!(hasher.finish(), hash_str("é") as u64);
        assert_eq!(hash_key(&PolyBuildHasher, "é"), hash_str("é") as u64);
    }

    #[test]
    fn test_write_bytes_folds_ascii() {
        let mut hasher = PolyHasher::new();
        hasher.write(b"hello");
        assert_eq!(hasher.finish(), hash_str("hello") as u64);
    }
}
