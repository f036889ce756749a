//! Seeds and the random streams that sampling draws from.
//!
//! A [`SeededStream`] is a pure function of its seed's text: the text is
//! folded into a 32-bit state by [`hash_seed`], and each draw advances that
//! state with a multiply-xor-shift step. The exact constants below are a
//! compatibility surface -- changing any of them changes every stored
//! character that was generated from a seed.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Initial accumulator for [`hash_seed`], xor-ed with the code point count.
const HASH_INIT: u32 = 0x6A09_E667;
/// Per-code-point multiplier for [`hash_seed`].
const HASH_MULTIPLIER: u32 = 0xCC9E_2D51;
/// Weyl increment added to the stream state on every draw.
const STREAM_INCREMENT: u32 = 0x6D2B_79F5;
/// `2^32`, used to normalise a `u32` into `[0, 1)`.
const U32_RANGE: f64 = 4_294_967_296.0;

// ---------------------------------------------------------------------------
// Seed
// ---------------------------------------------------------------------------

/// A generation seed, kept in its textual form.
///
/// Numeric seeds are stored as their decimal text, so `Seed::from(42_u64)`
/// and `Seed::from("42")` describe the same stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(String);

impl Seed {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

/// Hash a seed's text into a 32-bit stream state.
///
/// Order-dependent: every code point is xor-ed into the accumulator, which is
/// then multiplied and rotated. A final avalanche pass spreads short inputs
/// across all 32 bits. Total over all strings, including the empty one.
pub fn hash_seed(text: &str) -> u32 {
    let len = text.chars().count() as u32;
    let mut h = HASH_INIT ^ len;
    for ch in text.chars() {
        h = (h ^ ch as u32).wrapping_mul(HASH_MULTIPLIER);
        h = h.rotate_left(13);
    }
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^ (h >> 16)
}

// ---------------------------------------------------------------------------
// Streams
// ---------------------------------------------------------------------------

/// A source of uniformly distributed values in `[0, 1)`.
///
/// Every sampling call consumes values from exactly one stream, in order.
pub trait RandomStream {
    fn next_f64(&mut self) -> f64;
}

/// Deterministic stream derived from a [`Seed`].
#[derive(Debug, Clone)]
pub struct SeededStream {
    state: u32,
}

impl SeededStream {
    pub fn new(seed: &Seed) -> Self {
        Self::from_state(hash_seed(seed.as_str()))
    }

    pub fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Advance the state and return the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(STREAM_INCREMENT);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(s | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl RandomStream for SeededStream {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / U32_RANGE
    }
}

/// Non-deterministic stream used when no seed is supplied.
#[derive(Debug, Clone)]
pub struct EntropyStream {
    rng: StdRng,
}

impl EntropyStream {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Default for EntropyStream {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomStream for EntropyStream {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// The stream a generator draws from: seeded when a seed is present,
/// entropy-backed otherwise.
#[derive(Debug, Clone)]
pub enum Stream {
    Seeded(SeededStream),
    Entropy(EntropyStream),
}

impl Stream {
    pub fn for_seed(seed: Option<&Seed>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(SeededStream::new(seed)),
            None => Self::Entropy(EntropyStream::new()),
        }
    }

    pub fn is_seeded(&self) -> bool {
        matches!(self, Self::Seeded(_))
    }
}

impl RandomStream for Stream {
    fn next_f64(&mut self) -> f64 {
        match self {
            Self::Seeded(s) => s.next_f64(),
            Self::Entropy(s) => s.next_f64(),
        }
    }
}
