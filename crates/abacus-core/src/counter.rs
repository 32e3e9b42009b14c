//! # Counter Helper
//!
//! A tap counter plus a handful of stateless arithmetic helpers. Independent
//! of the [`Engine`](crate::Engine); nothing here can fail.
//!
//! Integer helpers saturate at the `i64` bounds instead of overflowing.

use serde::{Deserialize, Serialize};

/// Counts taps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    count: i64,
}

impl Counter {
    pub const fn new() -> Self {
        Counter { count: 0 }
    }

    #[inline]
    pub const fn count(&self) -> i64 {
        self.count
    }

    /// Adds one.
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Back to zero.
    pub fn reset(&mut self) {
        self.count = 0;
    }
}

/// `a + b`
#[inline]
pub const fn add(a: i64, b: i64) -> i64 {
    a.saturating_add(b)
}

/// `a - b`
#[inline]
pub const fn subtract(a: i64, b: i64) -> i64 {
    a.saturating_sub(b)
}

/// `a × b`
#[inline]
pub const fn multiply(a: i64, b: i64) -> i64 {
    a.saturating_mul(b)
}

/// Whether `n` is divisible by two. Negative numbers work too.
#[inline]
pub const fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// `base` raised to `exponent`.
///
/// ## Example
/// ```rust
/// use abacus_core::counter::power;
///
/// assert_eq!(power(2.0, 10.0), 1024.0);
/// assert_eq!(power(2.0, -2.0), 0.25);
/// ```
#[inline]
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}
