//! `Add`/`Sub`/`Mul`/`Div`/`Rem`/`Neg` operator trait implementations,
//! dispatching through [`super::dispatch`] (spec.md §4.F).

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use super::dispatch;
use super::Int;

impl<const N: usize> Neg for Int<N> {
    type Output = Int<N>;

    #[inline]
    fn neg(mut self) -> Int<N> {
        self.negate();
        self
    }
}

impl<const N: usize> Neg for &Int<N> {
    type Output = Int<N>;

    #[inline]
    fn neg(self) -> Int<N> {
        let mut n = self.clone();
        n.negate();
        n
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $dispatch:expr) => {
        impl<const N: usize> $trait<&Int<N>> for &Int<N> {
            type Output = Int<N>;

            #[inline]
            fn $method(self, rhs: &Int<N>) -> Int<N> {
                $dispatch(self, rhs)
            }
        }

        impl<const N: usize> $trait<Int<N>> for Int<N> {
            type Output = Int<N>;

            #[inline]
            fn $method(self, rhs: Int<N>) -> Int<N> {
                $dispatch(&self, &rhs)
            }
        }

        impl<const N: usize> $trait<&Int<N>> for Int<N> {
            type Output = Int<N>;

            #[inline]
            fn $method(self, rhs: &Int<N>) -> Int<N> {
                $dispatch(&self, rhs)
            }
        }

        impl<const N: usize> $trait<Int<N>> for &Int<N> {
            type Output = Int<N>;

            #[inline]
            fn $method(self, rhs: Int<N>) -> Int<N> {
                $dispatch(self, &rhs)
            }
        }

        impl<const N: usize> $assign_trait<Int<N>> for Int<N> {
            #[inline]
            fn $assign_method(&mut self, rhs: Int<N>) {
                *self = $dispatch(self, &rhs);
            }
        }

        impl<const N: usize> $assign_trait<&Int<N>> for Int<N> {
            #[inline]
            fn $assign_method(&mut self, rhs: &Int<N>) {
                *self = $dispatch(self, rhs);
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, |a, b| dispatch::add_sub(
    a, b, false
));
impl_binop!(Sub, sub, SubAssign, sub_assign, |a, b| dispatch::add_sub(
    a, b, true
));
impl_binop!(Mul, mul, MulAssign, mul_assign, dispatch::mul);

impl<const N: usize> Div<&Int<N>> for &Int<N> {
    type Output = Int<N>;

    #[inline]
    fn div(self, rhs: &Int<N>) -> Int<N> {
        assert!(!rhs.is_zero(), "division by zero");
        dispatch::div_rem(self, rhs).0
    }
}

impl<const N: usize> Div<Int<N>> for Int<N> {
    type Output = Int<N>;

    #[inline]
    fn div(self, rhs: Int<N>) -> Int<N> {
        &self / &rhs
    }
}

impl<const N: usize> DivAssign<Int<N>> for Int<N> {
    #[inline]
    fn div_assign(&mut self, rhs: Int<N>) {
        *self = &*self / &rhs;
    }
}

impl<const N: usize> Rem<&Int<N>> for &Int<N> {
    type Output = Int<N>;

    #[inline]
    fn rem(self, rhs: &Int<N>) -> Int<N> {
        assert!(!rhs.is_zero(), "division by zero");
        dispatch::div_rem(self, rhs).1
    }
}

impl<const N: usize> Rem<Int<N>> for Int<N> {
    type Output = Int<N>;

    #[inline]
    fn rem(self, rhs: Int<N>) -> Int<N> {
        &self % &rhs
    }
}

impl<const N: usize> RemAssign<Int<N>> for Int<N> {
    #[inline]
    fn rem_assign(&mut self, rhs: Int<N>) {
        *self = &*self % &rhs;
    }
}

/// The fallible counterparts of [`Div`]/[`Rem`], reporting
/// [`crate::Error::DivisionByZero`] instead of panicking (spec.md §7's
/// "failing form").
impl<const N: usize> Int<N> {
    /// Truncated division; `a / b` rounded toward zero.
    pub fn checked_div(&self, rhs: &Int<N>) -> Result<Int<N>, crate::Error> {
        if rhs.is_zero() {
            return Err(crate::Error::DivisionByZero);
        }
        Ok(dispatch::div_rem(self, rhs).0)
    }

    /// Truncated remainder; sign matches the dividend.
    pub fn checked_rem(&self, rhs: &Int<N>) -> Result<Int<N>, crate::Error> {
        if rhs.is_zero() {
            return Err(crate::Error::DivisionByZero);
        }
        Ok(dispatch::div_rem(self, rhs).1)
    }

    /// Truncated division and remainder in one call.
    pub fn checked_div_rem(&self, rhs: &Int<N>) -> Result<(Int<N>, Int<N>), crate::Error> {
        if rhs.is_zero() {
            return Err(crate::Error::DivisionByZero);
        }
        Ok(dispatch::div_rem(self, rhs))
    }

    /// `self * self`.
    pub fn square(&self) -> Int<N> {
        dispatch::square(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::int::Int2;

    #[test]
    fn add_requiring_promotion() {
        // (2^63) + (2^63) = 2^64, from two 1-limb operands.
        let a = Int2::from(1u64 << 63);
        let b = Int2::from(1u64 << 63);
        let sum = &a + &b;
        assert_eq!(sum, Int2::from(1u128 << 64));
    }

    #[test]
    fn sub_self_is_zero() {
        let a = Int2::from(12345u64);
        assert!((&a - &a).is_zero());
    }

    #[test]
    fn mul_large_promotes() {
        // (2^127) * (2^127) = 2^254.
        let a: Int2 = crate::int::dispatch::shl(&Int2::ONE, 127);
        let b: Int2 = crate::int::dispatch::shl(&Int2::ONE, 127);
        let p = &a * &b;
        let expect: Int2 = crate::int::dispatch::shl(&Int2::ONE, 254);
        assert_eq!(p, expect);
    }

    #[test]
    fn div_rem_matches_truncation_toward_zero() {
        let a = Int2::from(-7i64);
        let b = Int2::from(2i64);
        let (q, r) = a.checked_div_rem(&b).unwrap();
        assert_eq!(q, Int2::from(-3i64));
        assert_eq!(r, Int2::from(-1i64));

        let a = Int2::from(7i64);
        let b = Int2::from(-2i64);
        let (q, r) = a.checked_div_rem(&b).unwrap();
        assert_eq!(q, Int2::from(-3i64));
        assert_eq!(r, Int2::from(1i64));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let a = Int2::from(1u64);
        let z = Int2::ZERO;
        assert_eq!(a.checked_div(&z), Err(crate::Error::DivisionByZero));
    }
}
