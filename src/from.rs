//! The input shapes, which can be converted into a [Complex].
//!
//! [Input] collects every accepted shape, and `Complex::try_from(Input)` is the one conversion,
//! which decides between them. The shapes which can never fail also implement [From] for [Complex],
//! which makes them usable directly as operands, e.g. `z + 1.0` or `z * (0.0, 1.0)`.

use crate::*;

/// A rectangular record `re + i*im`.
///
/// Unlike [Complex], this is a plain record, which is not normalized.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub re: f64,
    pub im: f64,
}

/// A polar record `r * exp(i*phi)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Polar {
    pub r: f64,
    pub phi: f64,
}

/// A record with optional fields, as it appears when reading loosely typed data.
///
/// The rectangular fields take priority. A record with both `re` and `im` is rectangular,
/// otherwise a record with both `r` and `phi` is polar. Any other combination is rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Fields {
    pub re: Option<f64>,
    pub im: Option<f64>,
    pub r: Option<f64>,
    pub phi: Option<f64>,
}

/// All the shapes, that can describe a complex number.
///
/// A pair is always interpreted as rectangular. Polar coordinates need the named [Polar] record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input<'a> {
    Complex(Complex),
    Real(f64),
    Rect(Rect),
    Polar(Polar),
    Fields(Fields),
    Pair(f64, f64),
    /// A sequence with 1 element (real) or 2 elements (rectangular).
    Seq(&'a [f64]),
}

impl TryFrom<Input<'_>> for Complex {
    type Error = Error;
    fn try_from(value: Input<'_>) -> Result<Self> {
        Ok(match value {
            // rebuilding is bit identical, as the components are normalized already.
            Input::Complex(z) => Complex::new(z.re(), z.im()),
            Input::Real(re) => re.into(),
            Input::Rect(rect) => rect.into(),
            Input::Polar(polar) => polar.into(),
            Input::Fields(Fields {
                re: Some(re),
                im: Some(im),
                ..
            }) => Complex::new(re, im),
            Input::Fields(Fields {
                r: Some(r),
                phi: Some(phi),
                ..
            }) => Complex::from_polar(r, phi),
            Input::Fields(_) => return Err(Mismatch::MissingFields.into()),
            Input::Pair(re, im) => (re, im).into(),
            Input::Seq(&[re]) => re.into(),
            Input::Seq(&[re, im]) => (re, im).into(),
            Input::Seq(seq) => return Err(Mismatch::SequenceLength(seq.len()).into()),
        })
    }
}

impl<'a> TryFrom<&'a [f64]> for Complex {
    type Error = Error;
    #[inline]
    fn try_from(value: &'a [f64]) -> Result<Self> {
        Input::Seq(value).try_into()
    }
}

impl TryFrom<Fields> for Complex {
    type Error = Error;
    #[inline]
    fn try_from(value: Fields) -> Result<Self> {
        Input::Fields(value).try_into()
    }
}

impl Complex {
    /// Convert any of the accepted input shapes into a complex number.
    ///
    /// # Errors
    /// [Error::InvalidInput] if the input is a sequence with a length other than 1 or 2,
    /// or a [Fields] record without a complete rectangular or polar pair of fields.
    #[inline]
    pub fn coerce<'a>(value: impl Into<Input<'a>>) -> Result<Self> {
        value.into().try_into()
    }
}

macro_rules! impl_input_from {
    ($($T:ty => |$v:ident| $e:expr),+ $(,)?) => {
        $(impl From<$T> for Input<'_> {
            #[inline(always)]
            fn from($v: $T) -> Self {
                $e
            }
        })+
    };
}
impl_input_from!(
    Complex => |v| Input::Complex(v),
    &Complex => |v| Input::Complex(*v),
    f64 => |v| Input::Real(v),
    Rect => |v| Input::Rect(v),
    Polar => |v| Input::Polar(v),
    Fields => |v| Input::Fields(v),
    (f64, f64) => |v| Input::Pair(v.0, v.1),
    [f64; 2] => |v| Input::Pair(v[0], v[1]),
    [f64; 1] => |v| Input::Real(v[0]),
);

impl<'a> From<&'a [f64]> for Input<'a> {
    #[inline(always)]
    fn from(value: &'a [f64]) -> Self {
        Input::Seq(value)
    }
}

// the infallible shapes, usable as operands everywhere.
macro_rules! impl_complex_from {
    ($($T:ty => |$v:ident| $e:expr),+ $(,)?) => {
        $(impl From<$T> for Complex {
            #[inline]
            fn from($v: $T) -> Self {
                $e
            }
        })+
    };
}
impl_complex_from!(
    &Complex => |v| *v,
    f64 => |v| Complex::new(v, 0.0),
    Rect => |v| Complex::new(v.re, v.im),
    Polar => |v| Complex::from_polar(v.r, v.phi),
    (f64, f64) => |v| Complex::new(v.0, v.1),
    [f64; 2] => |v| Complex::new(v[0], v[1]),
    [f64; 1] => |v| Complex::new(v[0], 0.0),
);

impl From<Complex> for Rect {
    #[inline]
    fn from(value: Complex) -> Self {
        let (re, im) = value.to_vector();
        Rect { re, im }
    }
}

impl From<Complex> for Polar {
    #[inline]
    fn from(value: Complex) -> Self {
        let (r, phi) = value.to_polar();
        Polar { r, phi }
    }
}

impl From<Complex> for (f64, f64) {
    #[inline]
    fn from(value: Complex) -> Self {
        value.to_vector()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Complex {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.re(), self.im()).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
mod de {
    use super::*;
    use core::fmt;
    use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};

    enum Field {
        Re,
        Im,
        R,
        Phi,
        Other,
    }

    impl<'de> serde::Deserialize<'de> for Field {
        fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            struct FieldVisitor;
            impl Visitor<'_> for FieldVisitor {
                type Value = Field;
                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a field name")
                }
                fn visit_str<E: de::Error>(self, v: &str) -> core::result::Result<Field, E> {
                    Ok(match v {
                        "re" => Field::Re,
                        "im" => Field::Im,
                        "r" => Field::R,
                        "phi" => Field::Phi,
                        _ => Field::Other,
                    })
                }
            }
            deserializer.deserialize_identifier(FieldVisitor)
        }
    }

    struct ComplexVisitor;

    impl<'de> Visitor<'de> for ComplexVisitor {
        type Value = Complex;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, a sequence of 1 or 2 numbers, or a record {re, im} or {r, phi}")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> core::result::Result<Complex, E> {
            Ok(Complex::from(v))
        }
        #[allow(clippy::cast_precision_loss)]
        fn visit_i64<E: de::Error>(self, v: i64) -> core::result::Result<Complex, E> {
            Ok(Complex::from(v as f64))
        }
        #[allow(clippy::cast_precision_loss)]
        fn visit_u64<E: de::Error>(self, v: u64) -> core::result::Result<Complex, E> {
            Ok(Complex::from(v as f64))
        }

        fn visit_seq<A>(self, mut seq: A) -> core::result::Result<Complex, A::Error>
        where
            A: SeqAccess<'de>,
        {
            // no allocation, only the first two elements are kept, the rest is counted.
            let mut buf = [0.0; 2];
            let mut len = 0;
            while let Some(x) = seq.next_element::<f64>()? {
                if let Some(slot) = buf.get_mut(len) {
                    *slot = x;
                }
                len += 1;
            }
            let input = match buf.get(..len) {
                Some(slice) => Input::Seq(slice),
                None => return Err(de::Error::custom(Error::from(Mismatch::SequenceLength(len)))),
            };
            Complex::try_from(input).map_err(de::Error::custom)
        }

        fn visit_map<A>(self, mut map: A) -> core::result::Result<Complex, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut fields = Fields::default();
            while let Some(key) = map.next_key::<Field>()? {
                let slot = match key {
                    Field::Re => &mut fields.re,
                    Field::Im => &mut fields.im,
                    Field::R => &mut fields.r,
                    Field::Phi => &mut fields.phi,
                    Field::Other => {
                        map.next_value::<IgnoredAny>()?;
                        continue;
                    }
                };
                *slot = Some(map.next_value()?);
            }
            Complex::try_from(fields).map_err(de::Error::custom)
        }
    }

    impl<'de> serde::Deserialize<'de> for Complex {
        fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            // binary formats can't describe the shape, they only get the serialized `(re, im)` back.
            if deserializer.is_human_readable() {
                deserializer.deserialize_any(ComplexVisitor)
            } else {
                deserializer.deserialize_tuple(2, ComplexVisitor)
            }
        }
    }
}
