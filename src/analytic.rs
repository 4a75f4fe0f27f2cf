//! Exponential, logarithmic, trigonometric and hyperbolic functions.
//!
//! The inverse functions are written as the logarithmic forms in terms of [Complex::log]
//! and [Complex::sqrt], so all of them share the branch cut of the logarithm.
//! Squares in these forms are taken with [Complex::pow] and reciprocals with the division operator.

use crate::complex::Complex;
use crate::float;
use core::f64::consts::{FRAC_PI_2, LOG2_E, LOG10_E};

impl Complex {
    /// `e^z = e^re * (cos(im) + i*sin(im))`
    pub fn exp(&self) -> Self {
        let r = float::exp(self.re());
        Complex::new(r * float::cos(self.im()), r * float::sin(self.im()))
    }

    /// Computes the principal value of natural logarithm of `self`.
    ///
    /// This function has one branch cut:
    ///
    /// * `(-∞, 0]`, continuous from above.
    ///
    /// The branch satisfies `-π < Im(log(z)) ≤ π`.
    #[inline]
    pub fn log(&self) -> Self {
        let (r, phi) = self.to_polar();
        Complex::new(float::ln(r), phi)
    }

    /// The principal value of the base 2 logarithm, see [Complex::log].
    #[inline]
    pub fn log2(&self) -> Self {
        let (r, phi) = self.to_polar();
        Complex::new(float::log2(r), LOG2_E * phi)
    }

    /// The principal value of the base 10 logarithm, see [Complex::log].
    #[inline]
    pub fn log10(&self) -> Self {
        let (r, phi) = self.to_polar();
        Complex::new(float::log10(r), LOG10_E * phi)
    }

    pub fn sin(&self) -> Self {
        let (a, b) = self.to_vector();
        Complex::new(
            float::sin(a) * float::cosh(b),
            float::cos(a) * float::sinh(b),
        )
    }

    pub fn cos(&self) -> Self {
        let (a, b) = self.to_vector();
        Complex::new(
            float::cos(a) * float::cosh(b),
            -float::sin(a) * float::sinh(b),
        )
    }

    #[inline]
    pub fn tan(&self) -> Self {
        self.sin() / self.cos()
    }

    #[inline]
    pub fn cot(&self) -> Self {
        self.cos() / self.sin()
    }

    #[inline]
    pub fn sec(&self) -> Self {
        Complex::ONE / self.cos()
    }

    #[inline]
    pub fn csc(&self) -> Self {
        Complex::ONE / self.sin()
    }

    pub fn sinh(&self) -> Self {
        let (a, b) = self.to_vector();
        Complex::new(
            float::sinh(a) * float::cos(b),
            float::cosh(a) * float::sin(b),
        )
    }

    pub fn cosh(&self) -> Self {
        let (a, b) = self.to_vector();
        Complex::new(
            float::cosh(a) * float::cos(b),
            float::sinh(a) * float::sin(b),
        )
    }

    #[inline]
    pub fn tanh(&self) -> Self {
        self.sinh() / self.cosh()
    }

    #[inline]
    pub fn coth(&self) -> Self {
        self.cosh() / self.sinh()
    }

    #[inline]
    pub fn sech(&self) -> Self {
        Complex::ONE / self.cosh()
    }

    #[inline]
    pub fn csch(&self) -> Self {
        Complex::ONE / self.sinh()
    }

    /// Computes the principal value of the inverse sine of `self`.
    ///
    /// This function has two branch cuts:
    ///
    /// * `(-∞, -1)`
    /// * `(1, ∞)`
    ///
    /// The branch satisfies `-π/2 ≤ Re(asin(z)) ≤ π/2`.
    pub fn asin(&self) -> Self {
        // formula: arcsin(z) = -i ln(iz + sqrt(1 - z^2))
        let root = (Complex::ONE - self.pow(2.0)).sqrt();
        -Complex::I * (*self * Complex::I + root).log()
    }

    /// Computes the principal value of the inverse cosine of `self` as `π/2 - asin(z)`.
    ///
    /// The branch satisfies `0 ≤ Re(acos(z)) ≤ π`.
    #[inline]
    pub fn acos(&self) -> Self {
        Complex::from(FRAC_PI_2) - self.asin()
    }

    /// Computes the principal value of the inverse tangent of `self`.
    ///
    /// This function has two branch cuts:
    ///
    /// * `(-∞i, -i]`
    /// * `[i, ∞i)`
    pub fn atan(&self) -> Self {
        // formula: arctan(z) = i/2 (ln(1 - iz) - ln(1 + iz))
        let iz = Complex::I * self;
        Complex::I / 2.0 * ((Complex::ONE - iz).log() - (Complex::ONE + iz).log())
    }

    /// Computes the principal value of the inverse cotangent of `self`.
    pub fn acot(&self) -> Self {
        // formula: arccot(z) = i/2 (ln(1 - i/z) - ln(1 + i/z))
        let i_z = Complex::I / self;
        Complex::I / 2.0 * ((Complex::ONE - i_z).log() - (Complex::ONE + i_z).log())
    }

    /// Computes the principal value of the inverse secant of `self`.
    pub fn asec(&self) -> Self {
        // formula: arcsec(z) = -i ln(sqrt(1/z^2 - 1) + 1/z)
        let root = (Complex::ONE / self.pow(2.0) - 1.0).sqrt();
        -Complex::I * (root + self.inv()).log()
    }

    /// Computes the principal value of the inverse cosecant of `self`.
    pub fn acsc(&self) -> Self {
        // formula: arccsc(z) = -i ln(sqrt(1 - 1/z^2) + i/z)
        let root = (Complex::ONE - Complex::ONE / self.pow(2.0)).sqrt();
        -Complex::I * (root + Complex::I / self).log()
    }

    /// Computes the principal value of inverse hyperbolic sine of `self` as `i asin(-iz)`.
    ///
    /// This function has two branch cuts:
    ///
    /// * `(-∞i, -i)`
    /// * `(i, ∞i)`
    #[inline]
    pub fn asinh(&self) -> Self {
        Complex::I * (-Complex::I * self).asin()
    }

    /// Computes the principal value of inverse hyperbolic cosine of `self`.
    ///
    /// This function has one branch cut:
    ///
    /// * `(-∞, 1)`
    pub fn acosh(&self) -> Self {
        // formula: arcosh(z) = ln(z + sqrt(z + 1) sqrt(z - 1))
        (*self + (*self + 1.0).sqrt() * (*self - 1.0).sqrt()).log()
    }

    /// Computes the principal value of inverse hyperbolic tangent of `self`.
    ///
    /// This function has two branch cuts:
    ///
    /// * `(-∞, -1]`
    /// * `[1, ∞)`
    pub fn atanh(&self) -> Self {
        // formula: artanh(z) = (ln(1 + z) - ln(1 - z))/2
        (Complex::ONE / 2.0) * ((Complex::ONE + self).log() - (Complex::ONE - self).log())
    }

    /// Computes the principal value of inverse hyperbolic cotangent of `self`.
    pub fn acoth(&self) -> Self {
        // formula: arcoth(z) = (ln(1 + 1/z) - ln(1 - 1/z))/2
        let inv = Complex::ONE / self;
        (Complex::ONE / 2.0) * ((Complex::ONE + inv).log() - (Complex::ONE - inv).log())
    }

    /// Computes the principal value of inverse hyperbolic secant of `self`.
    pub fn asech(&self) -> Self {
        // formula: arsech(z) = ln(sqrt(1/z - 1) sqrt(1/z + 1) + 1/z)
        let inv = Complex::ONE / self;
        ((inv - 1.0).sqrt() * (inv + 1.0).sqrt() + inv).log()
    }

    /// Computes the principal value of inverse hyperbolic cosecant of `self`.
    pub fn acsch(&self) -> Self {
        // formula: arcsch(z) = ln(sqrt(1 + 1/z^2) + 1/z)
        let root = (Complex::ONE + Complex::ONE / self.pow(2.0)).sqrt();
        (root + Complex::ONE / self).log()
    }
}
