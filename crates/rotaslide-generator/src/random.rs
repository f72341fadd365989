//! Randomness sources consumed by the scrambler.

use rand::{
    SeedableRng as _,
    distr::{Distribution as _, StandardUniform},
};
use rand_pcg::Pcg64;

use crate::PuzzleSeed;

/// A source of uniformly distributed values in `[0, 1)`.
///
/// The scrambler draws from this and nothing else, so tests can script a
/// scramble with [`FixedSequence`] and games can share a seed through
/// [`SeededRandom`].
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<R> RandomSource for &mut R
where
    R: RandomSource + ?Sized,
{
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// A PCG-64 generator keyed by a [`PuzzleSeed`].
///
/// # Examples
///
/// ```
/// use rotaslide_generator::{PuzzleSeed, RandomSource, SeededRandom};
///
/// let seed = PuzzleSeed::daily("2026-10-18");
/// let mut a = SeededRandom::new(seed);
/// let mut b = SeededRandom::new(seed);
/// for _ in 0..8 {
///     let value = a.next_f64();
///     assert!((0.0..1.0).contains(&value));
///     assert_eq!(value.to_bits(), b.next_f64().to_bits());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: Pcg64,
}

impl SeededRandom {
    /// Creates a generator from a seed.
    #[must_use]
    pub fn new(seed: PuzzleSeed) -> Self {
        Self {
            rng: Pcg64::from_seed(*seed.as_bytes()),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        StandardUniform.sample(&mut self.rng)
    }
}

/// Replays a fixed list of values, starting over when it runs out.
///
/// An empty list yields `0.0` forever. Values are expected in `[0, 1)`;
/// anything else is clamped into that range.
///
/// # Examples
///
/// ```
/// use rotaslide_generator::{FixedSequence, RandomSource};
///
/// let mut random = FixedSequence::new([0.25, 0.75]);
/// assert_eq!(random.next_f64(), 0.25);
/// assert_eq!(random.next_f64(), 0.75);
/// assert_eq!(random.next_f64(), 0.25);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedSequence {
    values: Vec<f64>,
    next: usize,
}

impl FixedSequence {
    /// Creates a sequence that replays `values` in order.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

impl RandomSource for FixedSequence {
    fn next_f64(&mut self) -> f64 {
        let Some(&value) = self.values.get(self.next) else {
            return 0.0;
        };
        self.next = (self.next + 1) % self.values.len();
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// Maps a draw in `[0, 1)` to an index below `len`.
///
/// `len` must be non-zero.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub(crate) fn pick_index(draw: f64, len: usize) -> usize {
    let index = (draw * len as f64).floor() as usize;
    index.min(len - 1)
}
