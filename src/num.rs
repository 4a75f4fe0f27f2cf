use core::ops::*;

/// Defines an additive identity element for `Self`.
///
/// # Laws
///
/// ```text
/// a + 0 = a       ∀ a ∈ Self
/// 0 + a = a       ∀ a ∈ Self
/// ```
pub trait Zero: Sized + Add<Self, Output = Self> {
    /// Returns the additive identity element of `Self`, `0`.
    fn zero() -> Self;

    /// Returns `true` if `self` is equal to the additive identity.
    fn is_zero(&self) -> bool;
}

/// Defines a multiplicative identity element for `Self`.
///
/// # Laws
///
/// ```text
/// a * 1 = a       ∀ a ∈ Self
/// 1 * a = a       ∀ a ∈ Self
/// ```
pub trait One: Sized + Mul<Self, Output = Self> {
    /// Returns the multiplicative identity element of `Self`, `1`.
    fn one() -> Self;

    /// Returns `true` if `self` is equal to the multiplicative identity.
    fn is_one(&self) -> bool;
}

impl Zero for f64 {
    #[inline(always)]
    fn zero() -> f64 {
        0.0
    }
    #[inline(always)]
    fn is_zero(&self) -> bool {
        // true for both signed zeros
        *self == 0.0
    }
}
impl One for f64 {
    #[inline(always)]
    fn one() -> f64 {
        1.0
    }
    #[inline(always)]
    fn is_one(&self) -> bool {
        *self == 1.0
    }
}

/// General complex conjugate trait. Real numbers are their own conjugate.
pub trait Conjugate {
    /// complex conjugate of the value
    #[must_use]
    fn conj(&self) -> Self;
}

impl Conjugate for f64 {
    #[inline(always)]
    fn conj(&self) -> Self {
        *self
    }
}
