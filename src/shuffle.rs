//! In-place shuffling.
//!
//! Fisher–Yates, back to front: for `i` in `n-1..=1`, swap position `i` with a
//! uniform position in `[0, i]`. Every permutation is equally likely given an
//! unbiased source, and a sequence of length `n` costs exactly `max(n-1, 0)`
//! draws and swaps with no allocation.
//!
//! ## References
//!
//! - Fisher & Yates (1938); Durstenfeld (1964), Algorithm 235.

use std::collections::VecDeque;

use crate::source::UniformSource;
use crate::view::SequenceView;

/// Shuffle `seq` in place, using the thread-local RNG.
#[cfg(feature = "thread-rng")]
pub fn shuffle<Q: SequenceView + ?Sized>(seq: &mut Q) {
    let mut rng = rand::rng();
    shuffle_with_rng(seq, &mut rng);
}

/// Shuffle `seq` in place, drawing from `rng`.
///
/// Works on anything implementing [`SequenceView`], including borrowed
/// sub-slices: only the elements inside the span move.
pub fn shuffle_with_rng<Q, S>(seq: &mut Q, rng: &mut S)
where
    Q: SequenceView + ?Sized,
    S: UniformSource + ?Sized,
{
    let n = seq.len();
    tracing::trace!(len = n, "shuffle");
    for i in (1..n).rev() {
        let k = rng.next_index(i + 1);
        seq.swap(k, i);
    }
}

/// Copy `source` into an owned queue in random order, using the thread-local RNG.
///
/// ```
/// let mut spawn_points = saikoro::shuffled_queue(0..50);
/// let first = spawn_points.pop_front();
/// assert!(first.is_some());
/// ```
#[cfg(feature = "thread-rng")]
pub fn shuffled_queue<I: IntoIterator>(source: I) -> VecDeque<I::Item> {
    let mut rng = rand::rng();
    shuffled_queue_with_rng(source, &mut rng)
}

/// Copy `source` into an owned queue in random order, drawing from `rng`.
///
/// The source is materialized first, so read-only and borrowed inputs are
/// never touched. Pop from the front to consume the items one by one.
pub fn shuffled_queue_with_rng<I, S>(source: I, rng: &mut S) -> VecDeque<I::Item>
where
    I: IntoIterator,
    S: UniformSource + ?Sized,
{
    let mut queue: VecDeque<I::Item> = source.into_iter().collect();
    shuffle_with_rng(&mut queue, rng);
    queue
}
