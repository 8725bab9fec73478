//! Generalized combination numbers for real upper index.
//!
//! ## Purpose
//!
//! The binomial series `(1 + x)^a` needs C(a, i) for non-integer `a`, where
//! the factorial form `a! / (i! (a - i)!)` does not apply. This module
//! computes the falling-factorial form directly.
//!
//! ## Design notes
//!
//! * **Formula**: C(a, i) = a (a-1) ... (a-i+1) / i!, accumulated as the
//!   running product of `(a - j + 1) / j` so intermediates stay near the
//!   magnitude of the result.
//!
//! ## Invariants
//!
//! * C(a, i) = 0 for i < 0.
//! * C(a, 0) = 1 for every `a`.
//! * For non-negative integer `a` and i > a, C(a, i) = 0 exactly.
//!
//! ## Non-goals
//!
//! * Overflow detection for very large `i` (callers bound `i`).

// External dependencies
use num_traits::Float;

/// Compute the generalized binomial coefficient C(a, i).
///
/// # Formula
///
/// ```text
/// C(a, i) = prod_{j=1..i} (a - j + 1) / j
/// ```
#[inline]
pub fn generalized_binomial<T: Float>(a: T, i: i64) -> T {
    if i < 0 {
        return T::zero();
    }

    let mut result = T::one();
    let mut j = T::one();
    for _ in 0..i {
        result = result * (a - j + T::one()) / j;
        j = j + T::one();
    }
    result
}
