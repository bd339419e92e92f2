//! Deterministic random pool
//!
//! Every generator pulls its randomness from a [`RandomSource`] by index.
//! A [`RandomCursor`] is passed explicitly through each generator call and
//! advanced by one per float consumed, so independent call sites share one
//! reproducible consumption order without any global state.
//!
//! [`RandomPool`] is the production source: a PCG stream seeded from a hash of
//! the seed string, extended lazily as higher indices are requested. Values are
//! memoized, so an index always yields the same float once observed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// An index-addressable stream of floats in `[0, 1)`
pub trait RandomSource {
    /// Get the value at `index`
    fn get(&mut self, index: usize) -> f64;
}

/// Seeded, lazily extended pool of unit-interval floats
#[derive(Clone, Debug)]
pub struct RandomPool {
    seed: String,
    rng: Pcg64Mcg,
    values: Vec<f64>,
}

impl RandomPool {
    /// Seed used when the host supplies an empty seed
    pub const DEFAULT_SEED: &'static str = "isoart";

    /// Create a pool for the given seed
    ///
    /// An empty seed falls back to [`RandomPool::DEFAULT_SEED`] so output stays
    /// reproducible within a session.
    pub fn seeded(seed: &str) -> Self {
        let effective = if seed.is_empty() { Self::DEFAULT_SEED } else { seed };
        log::debug!("Seeding random pool with '{}'", effective);
        Self {
            seed: seed.to_string(),
            rng: Pcg64Mcg::seed_from_u64(seed_hash(effective)),
            values: Vec::new(),
        }
    }

    /// The seed string this pool was created with (as supplied by the host)
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Number of values generated so far
    pub fn generated(&self) -> usize {
        self.values.len()
    }

    /// Generate values up to (but not including) `len`
    pub fn extend_to(&mut self, len: usize) {
        if len > self.values.len() {
            self.values.reserve(len - self.values.len());
        }
        while self.values.len() < len {
            let value: f64 = self.rng.random();
            self.values.push(value);
        }
    }
}

impl RandomSource for RandomPool {
    fn get(&mut self, index: usize) -> f64 {
        self.extend_to(index + 1);
        self.values[index]
    }
}

/// A source that returns the same value at every index
///
/// Used to force generator decisions, e.g. `ConstantSource(1.0)` never
/// triggers a height-map decrement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantSource(pub f64);

impl RandomSource for ConstantSource {
    fn get(&mut self, _index: usize) -> f64 {
        self.0
    }
}

/// A finite, explicit sequence of values
///
/// Reading past the end is a programmer error and panics; values are never
/// wrapped or reused.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedSequence(pub Vec<f64>);

impl RandomSource for FixedSequence {
    fn get(&mut self, index: usize) -> f64 {
        match self.0.get(index) {
            Some(&value) => value,
            None => panic!(
                "random index {} out of range for a fixed sequence of {} values",
                index,
                self.0.len()
            ),
        }
    }
}

/// Read position into a [`RandomSource`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RandomCursor {
    index: usize,
}

impl RandomCursor {
    /// A cursor at index 0
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// A cursor at the given index
    pub const fn at(index: usize) -> Self {
        Self { index }
    }

    /// The next index this cursor will read
    pub fn index(&self) -> usize {
        self.index
    }

    /// Read the value at the current index and advance by one
    #[inline]
    pub fn draw<R: RandomSource + ?Sized>(&mut self, source: &mut R) -> f64 {
        let value = source.get(self.index);
        self.index += 1;
        value
    }
}

/// FNV-1a over the seed bytes
///
/// Stable across platforms and compiler versions, unlike `DefaultHasher`.
fn seed_hash(seed: &str) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    seed.bytes().fold(OFFSET_BASIS, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(PRIME)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomPool::seeded("schotter");
        let mut b = RandomPool::seeded("schotter");
        for i in 0..500 {
            assert_eq!(a.get(i), b.get(i));
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = RandomPool::seeded("alpha");
        let mut b = RandomPool::seeded("beta");
        let same = (0..64).filter(|&i| a.get(i) == b.get(i)).count();
        assert!(same < 64);
    }

    #[test]
    fn test_values_in_unit_interval() {
        let mut pool = RandomPool::seeded("range");
        for i in 0..10_000 {
            let v = pool.get(i);
            assert!((0.0..1.0).contains(&v), "value {} at {} out of range", v, i);
        }
    }

    #[test]
    fn test_sparse_access_matches_sequential() {
        let mut sequential = RandomPool::seeded("sparse");
        let expected: Vec<f64> = (0..100).map(|i| sequential.get(i)).collect();

        let mut sparse = RandomPool::seeded("sparse");
        assert_eq!(sparse.get(99), expected[99]);
        assert_eq!(sparse.get(3), expected[3]);
        assert_eq!(sparse.get(57), expected[57]);
        assert_eq!(sparse.generated(), 100);
    }

    #[test]
    fn test_observed_values_never_change() {
        let mut pool = RandomPool::seeded("stable");
        let first = pool.get(10);
        pool.get(5_000);
        assert_eq!(pool.get(10), first);
    }

    #[test]
    fn test_empty_seed_uses_default() {
        let mut empty = RandomPool::seeded("");
        let mut default = RandomPool::seeded(RandomPool::DEFAULT_SEED);
        assert_eq!(empty.seed(), "");
        for i in 0..32 {
            assert_eq!(empty.get(i), default.get(i));
        }
    }

    #[test]
    fn test_cursor_advances_one_per_draw() {
        let mut pool = RandomPool::seeded("cursor");
        let mut cursor = RandomCursor::new();
        let a = cursor.draw(&mut pool);
        let b = cursor.draw(&mut pool);
        assert_eq!(cursor.index(), 2);
        assert_eq!(a, pool.get(0));
        assert_eq!(b, pool.get(1));
    }

    #[test]
    fn test_interleaved_cursors_share_order() {
        let mut pool = RandomPool::seeded("interleave");
        let mut cursor = RandomCursor::at(7);
        let v = cursor.draw(&mut pool);
        assert_eq!(v, pool.get(7));
        assert_eq!(cursor, RandomCursor::at(8));
    }

    #[test]
    fn test_constant_source() {
        let mut source = ConstantSource(0.25);
        let mut cursor = RandomCursor::new();
        for _ in 0..10 {
            assert_eq!(cursor.draw(&mut source), 0.25);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_fixed_sequence_fails_fast() {
        let mut source = FixedSequence(vec![0.1, 0.2]);
        source.get(2);
    }

    #[test]
    fn test_seed_hash_is_stable() {
        // FNV-1a reference values
        assert_eq!(seed_hash(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(seed_hash("a"), 0xaf63_dc4c_8601_ec8c);
    }
}
