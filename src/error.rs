//! Error kinds surfaced at the "failing form" API boundary.

use core::fmt;

/// An error produced by a fallible [`crate::Int`] operation.
///
/// Operations that have a natural "two-value form" (e.g. [`crate::Int::to_u64`])
/// return `Option`/`bool` instead and never produce an `Error`; this type is
/// only for the explicit, "failing form" entry points.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A division, remainder, or modular-square operation was attempted with
    /// a zero divisor/modulus.
    DivisionByZero,
    /// The operation is undefined for the given operand: constructing from a
    /// non-finite float, testing primality of a negative number, or taking
    /// an even-degree root of a negative number.
    Domain(&'static str),
    /// A narrowing numeric conversion was attempted and the value does not
    /// fit in the destination type.
    Overflow,
    /// An argument outside its valid domain was supplied: an out-of-range
    /// radix, a malformed digit string, a limb-array initializer with a zero
    /// top limb, or an invalid primality repetition count.
    InvalidArgument(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivisionByZero => f.write_str("division by zero"),
            Error::Domain(reason) => write!(f, "domain error: {reason}"),
            Error::Overflow => f.write_str("value does not fit in the destination type"),
            Error::InvalidArgument(reason) => write!(f, "invalid argument: {reason}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(Error::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            Error::Domain("sqrt of negative").to_string(),
            "domain error: sqrt of negative"
        );
    }
}
