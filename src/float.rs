//! Real valued float functions, taken from `std` if available and from `libm` otherwise.

macro_rules! forward_math_impl {
    ($($f:ident => $libm:ident),+ $(,)?) => {
        $(#[inline(always)]
        pub(crate) fn $f(x: f64) -> f64 {
            #[cfg(feature = "std")]
            {
                f64::$f(x)
            }
            #[cfg(not(feature = "std"))]
            {
                libm::$libm(x)
            }
        })+
    };
}
macro_rules! forward_math_impl2 {
    ($($f:ident => $libm:ident),+ $(,)?) => {
        $(#[inline(always)]
        pub(crate) fn $f(x: f64, y: f64) -> f64 {
            #[cfg(feature = "std")]
            {
                f64::$f(x, y)
            }
            #[cfg(not(feature = "std"))]
            {
                libm::$libm(x, y)
            }
        })+
    };
}

forward_math_impl!(
    abs => fabs,
    sqrt => sqrt,
    trunc => trunc,
    sin => sin,
    cos => cos,
    sinh => sinh,
    cosh => cosh,
    exp => exp,
    ln => log,
    log2 => log2,
    log10 => log10,
);
forward_math_impl2!(
    atan2 => atan2,
    hypot => hypot,
    powf => pow,
);

/// Check if a float is an integer. Infinities and NaN are not.
#[inline(always)]
pub(crate) fn is_integer(x: f64) -> bool {
    x.is_finite() && trunc(x) == x
}
