//! implements the `Complex` value type and its core arithmetic.
//!
//! The transcendental functions are in separate modules, but all of them are inherent methods of [Complex].

use crate::float;
use crate::*;
use core::fmt;
use core::iter::{Product, Sum};
use core::ops::*;

/// An immutable complex number `re + i*im` made from two `f64`.
///
/// The components never hold a negative zero. Every constructor rewrites `-0.0` to `0.0`,
/// while the arithmetic in between is free to use signed zeros, e.g. to get `1/(-0) = -∞`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Complex {
    re: f64,
    im: f64,
}

/// Rewrite `-0.0` to `0.0` and keep every other value (including NaN) as is.
#[inline(always)]
fn normalize(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x }
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };
    /// The imaginary unit.
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    /// Create a complex number from its rectangular components.
    #[inline(always)]
    pub fn new(re: f64, im: f64) -> Self {
        Self {
            re: normalize(re),
            im: normalize(im),
        }
    }

    /// Convert a polar representation `r * exp(i * phi)` into a complex number.
    ///
    /// There is no special handling of the axis angles, e.g. `from_polar(1, π/2)` has a real part of `6.1e-17`.
    #[inline]
    pub fn from_polar(r: f64, phi: f64) -> Self {
        Self::new(r * float::cos(phi), r * float::sin(phi))
    }

    #[inline(always)]
    pub fn re(&self) -> f64 {
        self.re
    }
    #[inline(always)]
    pub fn im(&self) -> f64 {
        self.im
    }
    /// Alias for [Complex::re].
    #[inline(always)]
    pub fn real(&self) -> f64 {
        self.re
    }
    /// Alias for [Complex::im].
    #[inline(always)]
    pub fn imag(&self) -> f64 {
        self.im
    }

    /// Check if both components are zero.
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
    /// Check if any component is not finite. Note that this includes NaN.
    #[inline(always)]
    pub fn is_infinite(&self) -> bool {
        !self.re.is_finite() || !self.im.is_finite()
    }
    /// Check if any component is NaN.
    #[inline(always)]
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// The magnitude `|z|`, computed with `hypot` to avoid intermediate overflow.
    #[inline(always)]
    pub fn abs(&self) -> f64 {
        float::hypot(self.re, self.im)
    }
    /// Calculate the principal argument of self in `(-π, π]`.
    #[inline(always)]
    pub fn arg(&self) -> f64 {
        float::atan2(self.im, self.re)
    }
    /// The unit vector `z/|z|`. Unlike [f64::signum] this results in NaN for zero.
    pub fn sign(&self) -> Self {
        let abs = self.abs();
        Self::new(self.re / abs, self.im / abs)
    }
    #[inline(always)]
    pub fn conj(&self) -> Self {
        Self::new(self.re, -self.im)
    }
    /// The multiplicative inverse `1/z`.
    ///
    /// Real values are inverted directly, so `1/0 = ∞` and `1/∞ = 0`.
    pub fn inv(&self) -> Self {
        if self.im == 0.0 {
            return Self::new(1.0 / self.re, 0.0);
        }
        let abs_sqr = self.abs_sqr();
        Self::new(self.re / abs_sqr, -self.im / abs_sqr)
    }
    /// `|z|^2` computed as the square of [Complex::abs].
    #[inline(always)]
    pub(crate) fn abs_sqr(&self) -> f64 {
        let abs = self.abs();
        abs * abs
    }

    /// Convert to polar form `(r, phi)`, such that `self = r * exp(i * phi)`.
    #[inline]
    pub fn to_polar(&self) -> (f64, f64) {
        (self.abs(), self.arg())
    }
    /// Convert to the rectangular pair `(re, im)`.
    #[inline(always)]
    pub fn to_vector(&self) -> (f64, f64) {
        (self.re, self.im)
    }

    /// Componentwise comparison within the machine epsilon. See [Complex::equals_eps].
    #[inline]
    pub fn equals(&self, other: impl Into<Complex>) -> bool {
        self.equals_eps(other, f64::EPSILON)
    }
    /// Componentwise comparison, where each pair of components needs to be
    /// exactly equal, or closer than `epsilon`. NaN is never equal to anything.
    pub fn equals_eps(&self, other: impl Into<Complex>, epsilon: f64) -> bool {
        let other = other.into();
        let close = |a: f64, b: f64| a == b || float::abs(a - b) < epsilon;
        close(self.re, other.re) && close(self.im, other.im)
    }
}

impl Zero for Complex {
    #[inline(always)]
    fn zero() -> Self {
        Self::ZERO
    }
    #[inline(always)]
    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex {
    #[inline(always)]
    fn one() -> Self {
        Self::ONE
    }
    #[inline(always)]
    fn is_one(&self) -> bool {
        self.re == 1.0 && self.im == 0.0
    }
}

impl Conjugate for Complex {
    #[inline(always)]
    fn conj(&self) -> Self {
        Complex::conj(self)
    }
}

// Safety: `Complex` is `repr(C)` and contains only two `f64`, so it has no padding
// and the all zero bit pattern is the valid value `0 + 0i`.
// `Pod` is not implemented, as arbitrary bytes could hold a negative zero.
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Zeroable for Complex {}

#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::NoUninit for Complex {}

impl Neg for Complex {
    type Output = Complex;
    #[inline(always)]
    fn neg(self) -> Self::Output {
        Complex::new(-self.re, -self.im)
    }
}
impl Neg for &Complex {
    type Output = Complex;
    #[inline(always)]
    fn neg(self) -> Self::Output {
        -*self
    }
}

macro_rules! impl_add {
    ($Add:ident, $add:ident, $op:tt) => {
        impl<T: Into<Complex>> $Add<T> for Complex {
            type Output = Complex;
            #[inline]
            fn $add(self, rhs: T) -> Self::Output {
                let rhs = rhs.into();
                Complex::new(self.re $op rhs.re, self.im $op rhs.im)
            }
        }
    };
}
impl_add!(Add, add, +);
impl_add!(Sub, sub, -);

impl<T: Into<Complex>> Mul<T> for Complex {
    type Output = Complex;
    /// Multiply two complex numbers.
    ///
    /// Two purely imaginary or two purely real factors skip the cross terms,
    /// so no `∞ * 0` term can turn the result into NaN.
    fn mul(self, rhs: T) -> Self::Output {
        let (a, b) = (self, rhs.into());
        if a.re == 0.0 && b.re == 0.0 {
            return Complex::new(-a.im * b.im, 0.0);
        }
        if a.im == 0.0 && b.im == 0.0 {
            return Complex::new(a.re * b.re, 0.0);
        }
        Complex::new(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
    }
}

impl<T: Into<Complex>> Div<T> for Complex {
    type Output = Complex;
    /// Divide two complex numbers.
    ///
    /// Purely imaginary or purely real pairs as well as real divisors are divided
    /// componentwise, everything else is divided by `hypot(re, im)^2` of the divisor.
    fn div(self, rhs: T) -> Self::Output {
        let (a, b) = (self, rhs.into());
        if a.re == 0.0 && b.re == 0.0 {
            return Complex::new(a.im / b.im, 0.0);
        }
        if a.im == 0.0 && b.im == 0.0 {
            return Complex::new(a.re / b.re, 0.0);
        }
        if b.im == 0.0 {
            return Complex::new(a.re / b.re, a.im / b.re);
        }
        let d = b.abs_sqr();
        Complex::new(
            (a.re * b.re + a.im * b.im) / d,
            (a.im * b.re - a.re * b.im) / d,
        )
    }
}

macro_rules! forward_ref_impl {
    ($($Add:ident, $add:ident),+) => {
        $(impl<T: Into<Complex>> $Add<T> for &Complex {
            type Output = Complex;
            #[inline(always)]
            fn $add(self, rhs: T) -> Self::Output {
                (*self).$add(rhs)
            }
        }
        impl $Add<Complex> for f64 {
            type Output = Complex;
            #[inline(always)]
            fn $add(self, rhs: Complex) -> Self::Output {
                Complex::from(self).$add(rhs)
            }
        }
        impl<'a> $Add<&'a Complex> for f64 {
            type Output = Complex;
            #[inline(always)]
            fn $add(self, rhs: &'a Complex) -> Self::Output {
                Complex::from(self).$add(rhs)
            }
        })+
    };
}
forward_ref_impl!(Add, add, Sub, sub, Mul, mul, Div, div);

macro_rules! forward_assign_impl {
    ($($AddAssign:ident, $add_assign:ident, $add:ident),+) => {
        $(impl<T: Into<Complex>> $AddAssign<T> for Complex {
            #[inline(always)]
            fn $add_assign(&mut self, rhs: T) {
                *self = (*self).$add(rhs);
            }
        })+
    };
}
forward_assign_impl!(
    AddAssign, add_assign, add,
    SubAssign, sub_assign, sub,
    MulAssign, mul_assign, mul,
    DivAssign, div_assign, div
);

impl Sum for Complex {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Complex::ZERO, |acc, c| acc + c)
    }
}
impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Complex>,
    {
        iter.fold(Complex::ZERO, |acc, c| acc + c)
    }
}

impl Product for Complex {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Complex::ONE, |acc, c| acc * c)
    }
}
impl<'a> Product<&'a Complex> for Complex {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Complex>,
    {
        iter.fold(Complex::ONE, |acc, c| acc * c)
    }
}

/// Create a [Complex] from a literal like expression.
/// ```
/// use zplane::{Complex, complex};
/// assert_eq!(complex![1.0 + 2.5 i], Complex::new(1.0, 2.5));
/// assert_eq!(complex![(0.5 + 0.5) - 3.0 i], Complex::new(1.0, -3.0));
/// assert_eq!(complex![4.0 i], Complex::I * 4.0);
/// assert_eq!(complex![(1.0, 2.0)], Complex::new(1.0, 2.0));
/// ```
#[macro_export]
macro_rules! complex {
    ($x:literal + $y:literal i) => {
        $crate::Complex::new($x, $y)
    };
    ($x:literal - $y:literal i) => {
        $crate::Complex::new($x, -$y)
    };
    (($x:expr) + ($y:expr) i) => {
        $crate::Complex::new($x, $y)
    };
    (($x:expr) - ($y:expr) i) => {
        $crate::Complex::new($x, -$y)
    };
    ($x:literal + ($y:expr) i) => {
        $crate::Complex::new($x, $y)
    };
    ($x:literal - ($y:expr) i) => {
        $crate::Complex::new($x, -$y)
    };
    (($x:expr) + $y:literal i) => {
        $crate::Complex::new($x, $y)
    };
    (($x:expr) - $y:literal i) => {
        $crate::Complex::new($x, -$y)
    };
    ($x:literal i) => {
        $crate::Complex::new(0.0, $x)
    };
    (($x:expr) i) => {
        $crate::Complex::new(0.0, $x)
    };
    ($x:expr) => {
        $crate::Complex::from($x)
    };
}

#[cfg(feature = "std")]
#[inline(always)]
// Currently, we can only apply width using an intermediate `String` (and thus `std`)
fn fmt_complex(f: &mut fmt::Formatter<'_>, complex: fmt::Arguments<'_>) -> fmt::Result {
    use std::string::ToString;
    if let Some(width) = f.width() {
        let s = complex.to_string();
        match f.align() {
            None | Some(fmt::Alignment::Right) => write!(f, "{s:>0$}", width),
            Some(fmt::Alignment::Center) => write!(f, "{s:^0$}", width),
            Some(fmt::Alignment::Left) => write!(f, "{s:<0$}", width),
        }
    } else {
        f.write_fmt(complex)
    }
}

#[cfg(not(feature = "std"))]
#[inline(always)]
fn fmt_complex(f: &mut fmt::Formatter<'_>, complex: fmt::Arguments<'_>) -> fmt::Result {
    f.write_fmt(complex)
}

// string conversions
// `0` and real numbers are written without imaginary part, imaginary numbers without real part.
// Otherwise the imaginary part is written unsigned behind an explicit operator.
macro_rules! impl_display {
    ($Display: ident, $s: literal) => {
        impl fmt::$Display for Complex {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let (re, im) = (self.re, self.im);
                let op = if im < 0.0 { '-' } else { '+' };
                let im_abs = float::abs(im);
                if let Some(prec) = f.precision() {
                    if im == 0.0 {
                        fmt_complex(f, format_args!(concat!("{0:.1$", $s, "}"), re, prec))
                    } else if re == 0.0 {
                        fmt_complex(f, format_args!(concat!("{0:.1$", $s, "}i"), im, prec))
                    } else {
                        fmt_complex(
                            f,
                            format_args!(
                                concat!("{0:.3$", $s, "} {1} {2:.3$", $s, "}i"),
                                re, op, im_abs, prec
                            ),
                        )
                    }
                } else if im == 0.0 {
                    fmt_complex(f, format_args!(concat!("{0:", $s, "}"), re))
                } else if re == 0.0 {
                    fmt_complex(f, format_args!(concat!("{0:", $s, "}i"), im))
                } else {
                    fmt_complex(
                        f,
                        format_args!(concat!("{0:", $s, "} {1} {2:", $s, "}i"), re, op, im_abs),
                    )
                }
            }
        }
    };
}
impl_display!(Display, "");
impl_display!(LowerExp, "e");
impl_display!(UpperExp, "E");
