//! Random strings drawn from an alphabet.
//!
//! Characters are drawn independently and with replacement. A character that
//! appears twice in the alphabet is twice as likely to appear in the output.

use crate::error::SampleError;
use crate::source::UniformSource;
use crate::view::SequenceView;

/// A random string of `length` characters from `alphabet`, using the thread-local RNG.
///
/// ```
/// let code = saikoro::next_string("ABCDEFGHJKLMNPQRSTUVWXYZ23456789", 6).unwrap();
/// assert_eq!(code.chars().count(), 6);
/// ```
#[cfg(feature = "thread-rng")]
pub fn next_string(alphabet: &str, length: usize) -> Result<String, SampleError> {
    let mut rng = rand::rng();
    next_string_with_rng(alphabet, length, &mut rng)
}

/// A random string of `length` characters from the chars of `alphabet`, drawing from `rng`.
///
/// # Errors
///
/// [`SampleError::EmptyAlphabet`] if `alphabet` is empty and `length > 0`.
pub fn next_string_with_rng<S>(
    alphabet: &str,
    length: usize,
    rng: &mut S,
) -> Result<String, SampleError>
where
    S: UniformSource + ?Sized,
{
    if length == 0 {
        return Ok(String::new());
    }
    let chars: Vec<char> = alphabet.chars().collect();
    next_string_from_with_rng(chars.as_slice(), length, rng)
}

/// A random string of `length` characters from any char sequence, using the thread-local RNG.
#[cfg(feature = "thread-rng")]
pub fn next_string_from<Q>(alphabet: &Q, length: usize) -> Result<String, SampleError>
where
    Q: SequenceView<Item = char> + ?Sized,
{
    let mut rng = rand::rng();
    next_string_from_with_rng(alphabet, length, &mut rng)
}

/// A random string of `length` characters from any char sequence, drawing from `rng`.
///
/// Consumes exactly `length` draws. `length == 0` returns an empty string
/// without looking at the alphabet.
///
/// # Errors
///
/// [`SampleError::EmptyAlphabet`] if `alphabet` is empty and `length > 0`.
pub fn next_string_from_with_rng<Q, S>(
    alphabet: &Q,
    length: usize,
    rng: &mut S,
) -> Result<String, SampleError>
where
    Q: SequenceView<Item = char> + ?Sized,
    S: UniformSource + ?Sized,
{
    if length == 0 {
        return Ok(String::new());
    }
    if alphabet.is_empty() {
        tracing::debug!(length, "string requested from an empty alphabet");
        return Err(SampleError::EmptyAlphabet);
    }

    let n = alphabet.len();
    let mut out = String::with_capacity(length);
    for _ in 0..length {
        let c = alphabet
            .get(rng.next_index(n))
            .ok_or(SampleError::InternalInvariantViolation)?;
        out.push(*c);
    }
    Ok(out)
}
