//! rand distributions for [Complex].
//!
//! - [StandardUniform] samples both components uniformly from `[0, 1)`.
//! - [StandardUnitary] samples uniformly from the unit circle.
//! - [StandardNormal] samples the complex standard normal distribution.

use crate::float;
use crate::Complex;
pub use ::rand::distr::StandardUniform;
use ::rand::{Rng, distr::Distribution};

/// Standard normal distribution
pub struct StandardNormal;
/// Unitary distribution, meaning a uniform distribution on the values where the norm is 1.
pub struct StandardUnitary;

impl Distribution<Complex> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Complex {
        Complex::new(rng.sample(self), rng.sample(self))
    }
}

impl Distribution<Complex> for StandardUnitary {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Complex {
        // hit or retry in the unit disk. It only needs a sqrt and no trigonometric functions,
        // but it requires generating a variable amount of random numbers.
        loop {
            let re = rng.sample::<f64, _>(StandardUniform) * 2.0 - 1.0;
            let im = rng.sample::<f64, _>(StandardUniform) * 2.0 - 1.0;
            let n = re * re + im * im;
            // true with a chance of 79% (99% after 3 tries)
            if n != 0.0 && n < 1.0 {
                let len = float::sqrt(n);
                return Complex::new(re / len, im / len);
            }
        }
    }
}

impl Distribution<Complex> for StandardNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Complex {
        // Box–Muller_transform, see https://en.wikipedia.org/wiki/Box%E2%80%93Muller_transform
        // random number in range (0, 1]
        let x = 1.0 - rng.sample::<f64, _>(StandardUniform);
        rng.sample::<Complex, _>(StandardUnitary) * float::sqrt(-2.0 * float::ln(x))
    }
}

impl Distribution<f64> for StandardNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.sample::<Complex, _>(StandardNormal).re()
    }
}
