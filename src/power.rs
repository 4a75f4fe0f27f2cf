use crate::complex::Complex;
use crate::float;

impl Complex {
    /// Raises `self` to a complex power, using the principal branch.
    ///
    /// The special cases are checked in this order, each assuming the previous ones didn't match:
    /// 1. `z^0 = 1` for all `z`, including zero, infinity and NaN.
    /// 2. `0^w = 0` if `Re(w) > 0` and `Im(w) != 0`.
    /// 3. Non negative real base with real exponent: the real power `Re(z)^Re(w)`.
    /// 4. Imaginary base with integer exponent: `Im(z)^w * i^w`, with `i^w` taken from the period 4 cycle.
    ///    Negative exponents walk the cycle backwards, so `i^-1 = -i` (not `i`, as a cycle
    ///    indexed by `|w| mod 4` would give).
    /// 5. `sqrt` of a negative real number is `i*sqrt(-Re(z))`.
    ///
    /// Otherwise `z^w = |z|^Re(w) * exp(-Im(w)*arg(z)) * cis(Re(w)*arg(z) + Im(w)*ln|z|)`.
    /// ```
    /// use zplane::Complex;
    /// assert_eq!(Complex::I.pow(2.0), Complex::from(-1.0));
    /// assert_eq!(Complex::from(0.0).pow(0.0), Complex::ONE);
    /// ```
    pub fn pow(&self, exponent: impl Into<Complex>) -> Self {
        let w = exponent.into();
        let (a, b) = (self.re(), self.im());
        let (c, d) = (w.re(), w.im());

        if w.is_zero() {
            return Complex::ONE;
        }
        if self.is_zero() && c > 0.0 && d != 0.0 {
            return Complex::ZERO;
        }
        if a >= 0.0 && b == 0.0 && d == 0.0 {
            return Complex::new(float::powf(a, c), 0.0);
        }
        if a == 0.0 && d == 0.0 && float::is_integer(c) {
            // (bi)^c = b^c * i^c, where i^c cycles through i, -1, -i, 1
            let ipow = float::powf(b, c);
            let quadrant = c % 4.0;
            let quadrant = if quadrant < 0.0 { quadrant + 4.0 } else { quadrant };
            return match quadrant as u8 {
                0 => Complex::new(ipow, 0.0),
                1 => Complex::new(0.0, ipow),
                2 => Complex::new(-ipow, 0.0),
                _ => Complex::new(0.0, -ipow),
            };
        }
        if c == 0.5 && d == 0.0 && a < 0.0 && b == 0.0 {
            return Complex::new(0.0, float::sqrt(-a));
        }

        let abs_sqr = self.abs_sqr();
        let arg = self.arg();
        let abs = float::powf(abs_sqr, c / 2.0) * float::exp(-d * arg);
        let phase = c * arg + d / 2.0 * float::ln(abs_sqr);
        Complex::new(abs * float::cos(phase), abs * float::sin(phase))
    }

    /// Computes the principal value of the square root of `self` as `self.pow(0.5)`.
    ///
    /// This function has one branch cut:
    ///
    /// * `(-∞, 0)`, on which it is continuous from above, i.e. `sqrt(-4) = 2i`.
    ///
    /// The branch satisfies `-π/2 < arg(sqrt(z)) ≤ π/2`.
    #[inline]
    pub fn sqrt(&self) -> Self {
        self.pow(0.5)
    }
}
