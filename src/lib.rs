//! `saikoro`: random helpers layered on any uniform RNG.
//!
//! Turns raw uniform draws into the operations game and simulation code keeps
//! rewriting: pick an element, pick one by weight, shuffle in place, shuffle a
//! copy into a queue, build a random string.
//!
//! Exposed modules:
//! - `source`: the [`UniformSource`] seam (every `rand::RngCore` already is one).
//! - `view`: [`SequenceView`] / [`SetView`] capability traits over std containers.
//! - `uniform`: uniform element / set-member / map-key / enum-variant selection.
//! - `weighted`: two-pass weighted selection with `i32` or `i64` weights.
//! - `shuffle`: Fisher–Yates in place, and shuffled-copy-into-queue.
//! - `string`: random strings from an alphabet.
//!
//! Every operation has a `*_with_rng` form taking `&mut impl UniformSource` for
//! deterministic use. With the default `thread-rng` feature, a shorter form
//! draws from `rand::rng()`.
//!
//! Draw counts are fixed per call and callers may rely on them when replaying a
//! seeded generator: one draw per uniform or weighted pick, `max(n-1, 0)` per
//! shuffle of `n` elements, one per generated character.

#![forbid(unsafe_code)]

pub mod error;
pub mod shuffle;
pub mod source;
pub mod string;
pub mod uniform;
pub mod view;
pub mod weighted;

pub use error::SampleError;
pub use shuffle::{shuffle_with_rng, shuffled_queue_with_rng};
pub use source::UniformSource;
pub use string::{next_string_from_with_rng, next_string_with_rng};
pub use uniform::{
    next_bool_with_rng, next_element_with_rng, next_member_with_rng, next_variant_with_rng,
};
pub use view::{SequenceView, SetView};
pub use weighted::{weighted_next_in_set_with_rng, weighted_next_with_rng, Weight};

#[cfg(feature = "thread-rng")]
pub use shuffle::{shuffle, shuffled_queue};
#[cfg(feature = "thread-rng")]
pub use string::{next_string, next_string_from};
#[cfg(feature = "thread-rng")]
pub use uniform::{next_bool, next_element, next_member, next_variant};
#[cfg(feature = "thread-rng")]
pub use weighted::{weighted_next, weighted_next_in_set};
