//! Sampling primitives over a [`RandomStream`].
//!
//! Each primitive is total: empty pools degrade to `None` or an empty vector
//! instead of failing, and in that case no value is drawn from the stream.

use crate::rng::RandomStream;

/// Wraps a stream and exposes the three draws the assembler is built from.
#[derive(Debug, Clone)]
pub struct Sampler<S: RandomStream> {
    stream: S,
}

impl<S: RandomStream> Sampler<S> {
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    pub fn into_inner(self) -> S {
        self.stream
    }

    /// Draw one raw value from the underlying stream.
    pub fn draw(&mut self) -> f64 {
        self.stream.next_f64()
    }

    /// Pick one element: index `floor(draw * len)`.
    pub fn choice<'a, T>(&mut self, pool: &'a [T]) -> Option<&'a T> {
        if pool.is_empty() {
            return None;
        }
        let index = (self.draw() * pool.len() as f64).floor() as usize;
        // `draw` is strictly below 1.0, the clamp only guards float rounding.
        pool.get(index.min(pool.len() - 1))
    }

    /// Integer in `[min, max]` inclusive. Callers guarantee `min <= max`.
    pub fn int_range(&mut self, min: i32, max: i32) -> i32 {
        let span = f64::from(max) - f64::from(min) + 1.0;
        (self.draw() * span).floor() as i32 + min
    }

    /// Up to `count` distinct elements of `pool`.
    ///
    /// Every element receives one key from the stream in pool order, the
    /// pool is stably sorted by key, and the first `min(count, len)` are
    /// kept.
    pub fn distinct_sample<T: Clone>(&mut self, pool: &[T], count: usize) -> Vec<T> {
        if pool.is_empty() || count == 0 {
            return Vec::new();
        }
        let mut keyed: Vec<(f64, &T)> = pool.iter().map(|item| (self.draw(), item)).collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        keyed
            .into_iter()
            .take(count.min(pool.len()))
            .map(|(_, item)| item.clone())
            .collect()
    }
}
