//! The uniform random source every operation draws from.
//!
//! The crate never seeds, stores, or owns a source: callers pass `&mut S` into
//! each `*_with_rng` call. Any `rand::RngCore` works out of the box; tests can
//! implement [`UniformSource`] directly to script or count draws.

use rand::prelude::*;

/// A uniform pseudo-random generator.
///
/// Integer draws take an exclusive upper bound that must be positive. Callers
/// inside this crate guarantee that before drawing.
pub trait UniformSource {
    /// Uniform `i32` in `[0, exclusive_max)`.
    fn next_i32(&mut self, exclusive_max: i32) -> i32;

    /// Uniform `i64` in `[0, exclusive_max)`.
    fn next_i64(&mut self, exclusive_max: i64) -> i64;

    /// Uniform index in `[0, len)`.
    fn next_index(&mut self, len: usize) -> usize;

    /// Uniform `f64` in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> UniformSource for R {
    #[inline]
    fn next_i32(&mut self, exclusive_max: i32) -> i32 {
        debug_assert!(exclusive_max > 0, "next_i32: bound must be > 0");
        self.random_range(0..exclusive_max)
    }

    #[inline]
    fn next_i64(&mut self, exclusive_max: i64) -> i64 {
        debug_assert!(exclusive_max > 0, "next_i64: bound must be > 0");
        self.random_range(0..exclusive_max)
    }

    #[inline]
    fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "next_index: len must be > 0");
        self.random_range(0..len)
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }
}
