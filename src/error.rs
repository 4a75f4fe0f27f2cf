use thiserror::Error;

/// Error returned when a value can not be converted into a [Complex](crate::Complex).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The argument matches none of the accepted input shapes.
    #[error("cannot create complex number, invalid arguments: {0}")]
    InvalidInput(Mismatch),
}

/// The shape check which rejected an input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    /// Only sequences with one (real) or two (rectangular) elements are accepted.
    #[error("expected a sequence of 1 or 2 numbers, found {0}")]
    SequenceLength(usize),
    /// A record needs both `re` and `im`, or both `r` and `phi`.
    #[error("expected a record with the fields `re` and `im` or `r` and `phi`")]
    MissingFields,
}

impl From<Mismatch> for Error {
    fn from(value: Mismatch) -> Self {
        Error::InvalidInput(value)
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
