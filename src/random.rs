//! Random values for request nonces.
//!
//! Nonces are public values, so a statistically uniform PRNG is sufficient. The source is a trait
//! so tests can supply fixed nonces and reproduce exact signatures.

use {
    crate::constants::{ALPHA_CHARACTERS, HEX_CHARACTERS},
    rand::{rngs::StdRng, Rng, RngCore, SeedableRng},
    std::{fmt::Debug, sync::Mutex},
};

/// A provider of random bytes and strings.
///
/// Only [`fill_bytes`][RandomSource::fill_bytes] and [`pick`][RandomSource::pick] need to be
/// implemented; the remaining methods are built on them.
pub trait RandomSource: Debug {
    /// Fill `dest` with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]);

    /// Pick `len` characters uniformly from `alphabet`.
    fn pick(&self, alphabet: &[u8], len: usize) -> String;

    /// `len` random bytes.
    fn bytes(&self, len: usize) -> Vec<u8> {
        let mut result = vec![0; len];
        self.fill_bytes(&mut result);
        result
    }

    /// `len` random ASCII letters, upper and lower case.
    fn alpha_string(&self, len: usize) -> String {
        self.pick(ALPHA_CHARACTERS, len)
    }

    /// `len` random lower-case hex digits.
    fn hex_string(&self, len: usize) -> String {
        self.pick(HEX_CHARACTERS, len)
    }
}

fn pick_with<R: Rng>(rng: &mut R, alphabet: &[u8], len: usize) -> String {
    (0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char).collect()
}

/// Random values from the thread-local generator. This is the default source.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn fill_bytes(&self, dest: &mut [u8]) {
        rand::thread_rng().fill_bytes(dest);
    }

    fn pick(&self, alphabet: &[u8], len: usize) -> String {
        pick_with(&mut rand::thread_rng(), alphabet, len)
    }
}

/// Random values from a seeded generator; the same seed yields the same sequence.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Create a new generator from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn fill_bytes(&self, dest: &mut [u8]) {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.fill_bytes(dest);
    }

    fn pick(&self, alphabet: &[u8], len: usize) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        pick_with(&mut *rng, alphabet, len)
    }
}

#[cfg(test)]
mod tests {
    use super::{RandomSource, SeededRandom, ThreadRandom};

    #[test_log::test]
    fn test_lengths_and_alphabets() {
        let sources: [&dyn RandomSource; 2] = [&ThreadRandom, &SeededRandom::new(42)];
        for source in sources {
            for len in [0, 1, 32, 64, 257] {
                assert_eq!(source.bytes(len).len(), len);

                let hex = source.hex_string(len);
                assert_eq!(hex.len(), len);
                assert!(hex.bytes().all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(&c)), "{}", hex);

                let alpha = source.alpha_string(len);
                assert_eq!(alpha.len(), len);
                assert!(alpha.bytes().all(|c| c.is_ascii_alphabetic()), "{}", alpha);
            }
        }
    }

    #[test_log::test]
    fn test_seeded_is_reproducible() {
        let a = SeededRandom::new(7);
        let b = SeededRandom::new(7);
        assert_eq!(a.hex_string(64), b.hex_string(64));
        assert_eq!(a.alpha_string(16), b.alpha_string(16));
        assert_eq!(a.bytes(16), b.bytes(16));

        // Consecutive draws from one source differ.
        assert_ne!(a.hex_string(64), a.hex_string(64));
    }
}
