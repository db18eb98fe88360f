//! Conversions to and from the native integer and floating-point types
//! (spec.md §7, SPEC_FULL.md §15 "mixed-mode arithmetic"), following the
//! teacher's per-primitive macro expansion (`apint::convert`) but rebuilt
//! around a sign/magnitude representation rather than raw two's-complement
//! limbs.

use alloc::vec::Vec;

use crate::limb::Limb;
use crate::Error;

use super::Int;

macro_rules! impl_from_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<const N: usize> From<$ty> for Int<N> {
                fn from(val: $ty) -> Int<N> {
                    if val == 0 {
                        return Int::ZERO;
                    }
                    let mut limbs = Vec::new();
                    let mut v: u128 = val as u128;
                    while v != 0 {
                        limbs.push(Limb::new(v as u64));
                        v >>= Limb::BITS;
                    }
                    Int::from_sign_magnitude(false, &limbs)
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<const N: usize> From<$ty> for Int<N> {
                fn from(val: $ty) -> Int<N> {
                    if val == 0 {
                        return Int::ZERO;
                    }
                    let negative = val < 0;
                    // `unsigned_abs` avoids overflow at the type's minimum value.
                    let mut v: u128 = val.unsigned_abs() as u128;
                    let mut limbs = Vec::new();
                    while v != 0 {
                        limbs.push(Limb::new(v as u64));
                        v >>= Limb::BITS;
                    }
                    Int::from_sign_magnitude(negative, &limbs)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_try_from_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<const N: usize> core::convert::TryFrom<&Int<N>> for $ty {
                type Error = Error;

                fn try_from(value: &Int<N>) -> Result<$ty, Error> {
                    let (negative, mag) = value.view();
                    if negative && !mag.is_empty() {
                        return Err(Error::Overflow);
                    }
                    magnitude_to_u128(mag)
                        .and_then(|v| <$ty>::try_from(v).ok())
                        .ok_or(Error::Overflow)
                }
            }

            impl<const N: usize> core::convert::TryFrom<Int<N>> for $ty {
                type Error = Error;

                #[inline]
                fn try_from(value: Int<N>) -> Result<$ty, Error> {
                    <$ty>::try_from(&value)
                }
            }
        )*
    };
}

macro_rules! impl_try_from_signed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<const N: usize> core::convert::TryFrom<&Int<N>> for $ty {
                type Error = Error;

                fn try_from(value: &Int<N>) -> Result<$ty, Error> {
                    let (negative, mag) = value.view();
                    let magnitude = magnitude_to_u128(mag).ok_or(Error::Overflow)?;
                    if negative {
                        // `magnitude as i128` would itself overflow (and, via
                        // unary `-`, panic in debug builds) for the widest
                        // negative value, `i128::MIN`, whose magnitude is
                        // `2^127` -- one past `i128::MAX`. Special-case it
                        // rather than negating an out-of-range cast.
                        const I128_MIN_MAGNITUDE: u128 = i128::MAX as u128 + 1;
                        let as_i128 = match magnitude {
                            I128_MIN_MAGNITUDE => i128::MIN,
                            m if m > I128_MIN_MAGNITUDE => return Err(Error::Overflow),
                            m => -(m as i128),
                        };
                        if as_i128 < <$ty>::MIN as i128 {
                            return Err(Error::Overflow);
                        }
                        <$ty>::try_from(as_i128).map_err(|_| Error::Overflow)
                    } else {
                        <$ty>::try_from(magnitude).map_err(|_| Error::Overflow)
                    }
                }
            }

            impl<const N: usize> core::convert::TryFrom<Int<N>> for $ty {
                type Error = Error;

                #[inline]
                fn try_from(value: Int<N>) -> Result<$ty, Error> {
                    <$ty>::try_from(&value)
                }
            }
        )*
    };
}

impl_try_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_try_from_signed!(i8, i16, i32, i64, i128, isize);

fn magnitude_to_u128(mag: &[Limb]) -> Option<u128> {
    if mag.len() > (u128::BITS / Limb::BITS) as usize {
        return None;
    }
    let mut v: u128 = 0;
    for (i, limb) in mag.iter().enumerate() {
        v |= (limb.get() as u128) << (i as u32 * Limb::BITS);
    }
    Some(v)
}

impl<const N: usize> Int<N> {
    /// The "two-value form" (spec.md §7) of a narrowing conversion: attempts
    /// the conversion and returns `None` instead of failing, never mutating
    /// `self`.
    pub fn get<T>(&self) -> Option<T>
    where
        T: core::convert::TryFrom<Self>,
        Self: Clone,
    {
        T::try_from(self.clone()).ok()
    }

    /// Builds an [`Int`] from a finite `f64`, truncating toward zero.
    ///
    /// # Errors
    /// Returns [`Error::Domain`] for NaN or infinite input, matching
    /// spec.md §7's "domain error ... non-finite floating-point value".
    pub fn from_f64(val: f64) -> Result<Int<N>, Error> {
        if !val.is_finite() {
            return Err(Error::Domain("non-finite floating-point value"));
        }
        Ok(Int::from_f64_truncated(val))
    }

    /// As [`Self::from_f64`], for `f32`.
    pub fn from_f32(val: f32) -> Result<Int<N>, Error> {
        Int::from_f64(val as f64)
    }

    fn from_f64_truncated(val: f64) -> Int<N> {
        let negative = val.is_sign_negative() && val != 0.0;
        let mut mantissa = val.abs().trunc();
        if mantissa == 0.0 {
            return Int::ZERO;
        }
        let mut limbs = Vec::new();
        let radix = (1u128 << Limb::BITS) as f64;
        while mantissa >= 1.0 {
            let digit = mantissa % radix;
            limbs.push(Limb::new(digit as u64));
            mantissa = (mantissa - digit) / radix;
        }
        Int::from_sign_magnitude(negative, &limbs)
    }

    /// Converts to the nearest representable `f64`, rounding toward zero on
    /// precision loss (the "two-value form" never fails: `Int` has no
    /// infinities, so every value maps to a finite or infinite `f64`
    /// per IEEE-754 overflow rules).
    pub fn to_f64(&self) -> f64 {
        let (negative, mag) = self.view();
        let mut v = 0.0f64;
        for &limb in mag.iter().rev() {
            v = v * (1u128 << Limb::BITS) as f64 + limb.get() as f64;
        }
        if negative {
            -v
        } else {
            v
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::int::Int2;
    use crate::Error;
    use core::convert::TryFrom;

    #[test]
    fn round_trips_small_signed_values() {
        let a = Int2::from(-42i64);
        assert_eq!(i64::try_from(&a), Ok(-42i64));
    }

    #[test]
    fn widest_negative_value_converts_safely() {
        // spec.md §8: "`-LIMB_MIN` of the widest machine signed integer
        // converts to an integer that crosses a sign boundary safely."
        let a = Int2::from(i128::MIN);
        assert_eq!(i128::try_from(&a), Ok(i128::MIN));
        assert_eq!(i64::try_from(&a), Err(Error::Overflow));
    }

    #[test]
    fn unsigned_conversion_rejects_negative() {
        let a = Int2::from(-1i64);
        assert_eq!(u64::try_from(&a), Err(Error::Overflow));
    }

    #[test]
    fn narrowing_conversion_overflows() {
        let a = Int2::from(300u64);
        assert_eq!(u8::try_from(&a), Err(Error::Overflow));
    }

    #[test]
    fn get_is_the_two_value_form() {
        let a = Int2::from(10u64);
        assert_eq!(a.get::<u8>(), Some(10u8));
        let big = Int2::from(1_000_000u64);
        assert_eq!(big.get::<u8>(), None);
    }

    #[test]
    fn non_finite_float_is_a_domain_error() {
        assert_eq!(
            Int2::from_f64(f64::NAN),
            Err(Error::Domain("non-finite floating-point value"))
        );
        assert_eq!(
            Int2::from_f64(f64::INFINITY),
            Err(Error::Domain("non-finite floating-point value"))
        );
    }

    #[test]
    fn f64_round_trip_for_small_values() {
        let a = Int2::from_f64(12345.0).unwrap();
        assert_eq!(a.to_f64(), 12345.0);
    }
}
