//! An immutable `f64` complex number type with arithmetic and elementary functions
//! that follow IEEE-754 conventions extended to the complex plane.
//!
//! The crate is built around a single value type, [Complex]. Every value is created through
//! one normalization step, which rewrites negative zero components to positive zero. After that
//! a value is never mutated, every operation returns a fresh [Complex].
//!
//! Values can be constructed from several equivalent shapes, collected in the [Input] union:
//! another complex value, a real scalar, a rectangular record [Rect], a polar record [Polar],
//! a pair `(re, im)` or a one or two element slice. The slice and the [Fields] record
//! can fail to describe a complex number, which is reported as [Error::InvalidInput].
//! ```
//! use zplane::{Complex, Polar};
//!
//! let z = Complex::new(3.0, 4.0);
//! assert_eq!(z.abs(), 5.0);
//! let w = z * Polar { r: 1.0, phi: 0.0 };
//! assert!(w.equals(z));
//! assert_eq!(Complex::from(-9.0).sqrt(), Complex::new(0.0, 3.0));
//! assert_eq!(Complex::try_from(&[1.0, 2.0, 3.0][..]).is_err(), true);
//! ```
//!
//! Arithmetic never fails. Division by zero, overflow and invalid operations produce infinite
//! or NaN components the same way plain float arithmetic does. Several operations take shortcuts
//! for purely real or purely imaginary operands, so that e.g. `∞ * 2 = ∞` instead of picking up
//! a NaN from an `∞ * 0` cross term.
//!
//! # Multivalued functions
//! [Complex::log], [Complex::sqrt], [Complex::pow] and all inverse trigonometric and hyperbolic
//! functions return the principal value, with the argument in `(-π, π]` and the branch cut
//! of the logarithm along the negative real axis. The inverse functions are all expressed through
//! [Complex::log] and [Complex::sqrt], so their branch choices are consistent with each other.
//!
//! # Features
//! - `std` (default): use the float functions of the standard library.
//! - `libm`: use [libm](https://docs.rs/libm) for the float functions, for `no_std` targets.
//! - `serde`: serialize as `(re, im)`, deserialize from any member of [Input].
//! - `bytemuck`: view values as bytes.
//! - `rand`: sample complex numbers from uniform, unitary and normal distributions.

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the \"std\" or the \"libm\" feature needs to be enabled");

mod num;
pub mod complex;
mod analytic;
mod error;
mod float;
mod from;
mod power;
#[cfg(feature = "rand")]
pub mod rand;

pub use complex::Complex;
pub use error::*;
pub use from::*;
pub use num::*;
