//! Uniform selection: one draw picks one element.

use strum::VariantArray;

use crate::error::SampleError;
use crate::source::UniformSource;
use crate::view::{SequenceView, SetView};

/// Pick a uniformly random element from a sequence, using the thread-local RNG.
#[cfg(feature = "thread-rng")]
pub fn next_element<Q>(items: &Q) -> Result<&Q::Item, SampleError>
where
    Q: SequenceView + ?Sized,
{
    let mut rng = rand::rng();
    next_element_with_rng(items, &mut rng)
}

/// Pick a uniformly random element from a sequence, drawing once from `rng`.
///
/// # Errors
///
/// [`SampleError::EmptyInput`] if `items` is empty. Nothing is drawn in that case.
pub fn next_element_with_rng<'a, Q, S>(
    items: &'a Q,
    rng: &mut S,
) -> Result<&'a Q::Item, SampleError>
where
    Q: SequenceView + ?Sized,
    S: UniformSource + ?Sized,
{
    if items.is_empty() {
        tracing::debug!("uniform selection over an empty sequence");
        return Err(SampleError::EmptyInput);
    }
    let i = rng.next_index(items.len());
    items.get(i).ok_or(SampleError::InternalInvariantViolation)
}

/// Pick a uniformly random member from a set, using the thread-local RNG.
///
/// Maps implement [`SetView`] over their keys, so this also picks a random key.
#[cfg(feature = "thread-rng")]
pub fn next_member<Q>(set: &Q) -> Result<&Q::Item, SampleError>
where
    Q: SetView + ?Sized,
{
    let mut rng = rand::rng();
    next_member_with_rng(set, &mut rng)
}

/// Pick a uniformly random member from a set (or key of a map), drawing once from `rng`.
///
/// The draw is an ordinal into the set's enumeration, so this is O(n) for
/// hash and btree collections.
///
/// # Errors
///
/// [`SampleError::EmptyInput`] if `set` is empty. Nothing is drawn in that case.
pub fn next_member_with_rng<'a, Q, S>(
    set: &'a Q,
    rng: &mut S,
) -> Result<&'a Q::Item, SampleError>
where
    Q: SetView + ?Sized,
    S: UniformSource + ?Sized,
{
    if set.is_empty() {
        tracing::debug!("uniform selection over an empty set");
        return Err(SampleError::EmptyInput);
    }
    let n = rng.next_index(set.len());
    set.nth_member(n).ok_or(SampleError::InternalInvariantViolation)
}

/// Pick a uniformly random variant of a fieldless enum, using the thread-local RNG.
///
/// ```
/// #[derive(Debug, strum::VariantArray)]
/// enum Suit {
///     Clubs,
///     Diamonds,
///     Hearts,
///     Spades,
/// }
///
/// let suit: &Suit = saikoro::next_variant().unwrap();
/// println!("{suit:?}");
/// ```
#[cfg(feature = "thread-rng")]
pub fn next_variant<T: VariantArray>() -> Result<&'static T, SampleError> {
    let mut rng = rand::rng();
    next_variant_with_rng(&mut rng)
}

/// Pick a uniformly random variant of `T`, drawing once from `rng`.
///
/// Variants are indexed in declaration order.
///
/// # Errors
///
/// [`SampleError::EmptyInput`] if `T` has no variants.
pub fn next_variant_with_rng<T, S>(rng: &mut S) -> Result<&'static T, SampleError>
where
    T: VariantArray,
    S: UniformSource + ?Sized,
{
    next_element_with_rng(T::VARIANTS, rng)
}

/// A fair coin flip, using the thread-local RNG.
#[cfg(feature = "thread-rng")]
pub fn next_bool() -> bool {
    let mut rng = rand::rng();
    next_bool_with_rng(&mut rng)
}

/// A fair coin flip, drawing once from `rng`.
pub fn next_bool_with_rng<S: UniformSource + ?Sized>(rng: &mut S) -> bool {
    rng.next_index(2) == 1
}
