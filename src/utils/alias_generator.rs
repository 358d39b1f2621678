//! Random alias generation.
//!
//! Candidates are drawn uniformly from the 62-symbol alphanumeric set
//! `[a-zA-Z0-9]`. Uniqueness is not guaranteed here; collision avoidance is
//! the allocation service's job.

use rand::{Rng, distr::Alphanumeric};

/// Generates a random alias of exactly `length` alphanumeric characters.
///
/// Stateless per call and safe to invoke from concurrent requests.
///
/// # Panics
///
/// Debug builds assert `length > 0`; a zero length is a programming error,
/// not a runtime condition to recover from.
pub fn generate(length: usize) -> String {
    debug_assert!(length > 0, "alias length must be positive");

    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
