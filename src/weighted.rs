//! Weighted selection.
//!
//! Picks one item with probability proportional to a caller-supplied weight,
//! using two linear passes and a single draw:
//!
//! 1. Validate every weight (`> 0`) and accumulate the total in the weight's own
//!    width. Nothing is drawn if validation fails.
//! 2. Draw `value` uniformly in `[0, total)`.
//! 3. Walk the items again in the same order, subtracting each weight; the first
//!    item that takes `value` below zero wins. Item `i` therefore owns the
//!    half-open slice `[cum_{i-1}, cum_i)` of the draw range.
//!
//! No cumulative-weight table is allocated, so the weight function is called
//! twice per item. It must be pure: the same item must get the same weight in
//! both passes. Debug builds re-sum the weights after a pick and assert that
//! the two passes agree.
//!
//! Two widths are supported through [`Weight`]: `i32` for bounded weights and
//! `i64` for wide ones. The total never silently widens, so a bounded total
//! that exceeds `i32::MAX` is reported as [`SampleError::WeightOverflow`].

use std::fmt;

use crate::error::SampleError;
use crate::source::UniformSource;
use crate::view::{SequenceView, SetView};

/// An integer weight width.
pub trait Weight: Copy + Ord + Into<i64> + fmt::Debug {
    /// Additive identity.
    const ZERO: Self;

    /// Type name used in overflow errors.
    const NAME: &'static str;

    /// Addition that reports overflow instead of wrapping.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Subtraction that reports overflow instead of wrapping.
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Draw uniformly in `[0, total)` at this width. `total` is positive.
    fn draw<S: UniformSource + ?Sized>(source: &mut S, total: Self) -> Self;
}

impl Weight for i32 {
    const ZERO: Self = 0;
    const NAME: &'static str = "i32";

    #[inline]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        i32::checked_add(self, rhs)
    }

    #[inline]
    fn checked_sub(self, rhs: Self) -> Option<Self> {
        i32::checked_sub(self, rhs)
    }

    #[inline]
    fn draw<S: UniformSource + ?Sized>(source: &mut S, total: Self) -> Self {
        source.next_i32(total)
    }
}

impl Weight for i64 {
    const ZERO: Self = 0;
    const NAME: &'static str = "i64";

    #[inline]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        i64::checked_add(self, rhs)
    }

    #[inline]
    fn checked_sub(self, rhs: Self) -> Option<Self> {
        i64::checked_sub(self, rhs)
    }

    #[inline]
    fn draw<S: UniformSource + ?Sized>(source: &mut S, total: Self) -> Self {
        source.next_i64(total)
    }
}

/// Pick one item from a sequence, weighted by `weight_of`, using the thread-local RNG.
///
/// ```
/// let names = ["Abby", "Ben", "Carly"];
/// // "Abby" has a 4/12 chance, "Ben" 3/12, "Carly" 5/12.
/// let name = saikoro::weighted_next(&names, |n| n.len() as i32).unwrap();
/// assert!(names.contains(name));
/// ```
#[cfg(feature = "thread-rng")]
pub fn weighted_next<Q, W, F>(items: &Q, weight_of: F) -> Result<&Q::Item, SampleError>
where
    Q: SequenceView + ?Sized,
    W: Weight,
    F: Fn(&Q::Item) -> W,
{
    let mut rng = rand::rng();
    weighted_next_with_rng(items, weight_of, &mut rng)
}

/// Pick one item from a sequence, weighted by `weight_of`, drawing from `rng`.
///
/// Items are visited in index order in both passes. Consumes exactly one draw
/// on success and none when validation fails.
///
/// # Errors
///
/// - [`SampleError::InvalidWeight`] if any weight is `<= 0`.
/// - [`SampleError::EmptyInput`] if `items` is empty.
/// - [`SampleError::WeightOverflow`] if the total does not fit `W`.
/// - [`SampleError::InternalInvariantViolation`] if `weight_of` is not pure.
pub fn weighted_next_with_rng<'a, Q, W, F, S>(
    items: &'a Q,
    weight_of: F,
    rng: &mut S,
) -> Result<&'a Q::Item, SampleError>
where
    Q: SequenceView + ?Sized,
    W: Weight,
    F: Fn(&Q::Item) -> W,
    S: UniformSource + ?Sized,
{
    // `get` is `Some` for every index below `len`; a view that breaks this
    // ends the walk early instead of skipping ahead.
    let indexed = (0..items.len()).map_while(move |i| items.get(i));
    pick(indexed, weight_of, rng)
}

/// Pick one member from a set (or a map's keys), weighted by `weight_of`,
/// using the thread-local RNG.
#[cfg(feature = "thread-rng")]
pub fn weighted_next_in_set<Q, W, F>(set: &Q, weight_of: F) -> Result<&Q::Item, SampleError>
where
    Q: SetView + ?Sized,
    W: Weight,
    F: Fn(&Q::Item) -> W,
{
    let mut rng = rand::rng();
    weighted_next_in_set_with_rng(set, weight_of, &mut rng)
}

/// Pick one member from a set (or a map's keys), weighted by `weight_of`,
/// drawing from `rng`.
///
/// Both passes follow the set's own enumeration order. See
/// [`weighted_next_with_rng`] for the error cases.
pub fn weighted_next_in_set_with_rng<'a, Q, W, F, S>(
    set: &'a Q,
    weight_of: F,
    rng: &mut S,
) -> Result<&'a Q::Item, SampleError>
where
    Q: SetView + ?Sized,
    W: Weight,
    F: Fn(&Q::Item) -> W,
    S: UniformSource + ?Sized,
{
    pick(set.members(), weight_of, rng)
}

fn pick<'a, T, W, I, F, S>(items: I, weight_of: F, rng: &mut S) -> Result<&'a T, SampleError>
where
    T: 'a + ?Sized,
    W: Weight,
    I: Iterator<Item = &'a T> + Clone,
    F: Fn(&T) -> W,
    S: UniformSource + ?Sized,
{
    let mut total = W::ZERO;
    for (position, item) in items.clone().enumerate() {
        let weight = weight_of(item);
        if weight <= W::ZERO {
            let weight: i64 = weight.into();
            tracing::debug!(position, weight, "rejecting non-positive weight");
            return Err(SampleError::InvalidWeight { position, weight });
        }
        total = match total.checked_add(weight) {
            Some(t) => t,
            None => {
                tracing::debug!(position, width = W::NAME, "total weight overflow");
                return Err(SampleError::WeightOverflow {
                    position,
                    width: W::NAME,
                });
            }
        };
    }

    if total == W::ZERO {
        tracing::debug!("weighted selection over an empty collection");
        return Err(SampleError::EmptyInput);
    }

    let drawn = W::draw(rng, total);
    tracing::trace!(total = ?total, drawn = ?drawn, "weighted draw");

    let mut value = drawn;
    let mut rest = items;
    while let Some(item) = rest.next() {
        value = match value.checked_sub(weight_of(item)) {
            Some(v) => v,
            None => break,
        };
        if value < W::ZERO {
            #[cfg(debug_assertions)]
            {
                // Pass-two prefix is `drawn - value`; add the untouched suffix.
                let suffix: i128 = rest.by_ref().map(|i| widen(weight_of(i))).sum();
                let resummed = widen(drawn) - widen(value) + suffix;
                debug_assert_eq!(
                    resummed,
                    widen(total),
                    "weight function returned different weights across passes"
                );
            }
            return Ok(item);
        }
    }

    tracing::error!(total = ?total, drawn = ?drawn, "selection pass chose no item");
    Err(SampleError::InternalInvariantViolation)
}

#[cfg(debug_assertions)]
fn widen<W: Weight>(w: W) -> i128 {
    i128::from(Into::<i64>::into(w))
}
