// Hash function selections for the hash-map backends.
//
// The std selection uses `RandomState`, exactly what `HashMap::new`
// gives you. The xxhash and t1ha selections are keyed hashers sharing
// one fixed seed.

use std::hash::{BuildHasher, Hasher};

use t1ha::t1ha0;
use twox_hash::XxHash64;

/// Seed shared by the xxhash and t1ha selections.
pub const HASH_SEED: u64 = 2001;

/// `BuildHasher` producing XXH64 seeded with [`HASH_SEED`].
#[derive(Clone, Copy, Debug, Default)]
pub struct XxSeeded;

impl BuildHasher for XxSeeded {
    type Hasher = XxHash64;

    fn build_hasher(&self) -> XxHash64 {
        XxHash64::with_seed(HASH_SEED)
    }
}

/// `BuildHasher` for the t1ha selection.
#[derive(Clone, Copy, Debug, Default)]
pub struct T1haSeeded;

impl BuildHasher for T1haSeeded {
    type Hasher = T1haHasher;

    fn build_hasher(&self) -> T1haHasher {
        T1haHasher { state: HASH_SEED }
    }
}

/// Folds each written chunk through `t1ha0`, chaining the previous
/// state as the seed. Integer keys arrive as a single `write`, so the
/// common path is one `t1ha0` call per key.
#[derive(Clone, Copy, Debug)]
pub struct T1haHasher {
    state: u64,
}

impl Hasher for T1haHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        self.state = t1ha0(bytes, self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::Hash;

    fn hash_key<B: BuildHasher>(builder: &B, key: u64) -> u64 {
        let mut hasher = builder.build_hasher();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn xxhash_is_deterministic() {
        assert_eq!(hash_key(&XxSeeded, 42), hash_key(&XxSeeded, 42));
    }

    #[test]
    fn t1ha_is_deterministic() {
        assert_eq!(hash_key(&T1haSeeded, 42), hash_key(&T1haSeeded, 42));
    }

    #[test]
    fn distinct_keys_hash_apart() {
        // Not a collision-resistance claim, just a sanity check that
        // the hashers actually consume their input.
        assert_ne!(hash_key(&XxSeeded, 1), hash_key(&XxSeeded, 2));
        assert_ne!(hash_key(&T1haSeeded, 1), hash_key(&T1haSeeded, 2));
    }
}
