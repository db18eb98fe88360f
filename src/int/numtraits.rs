//! `num_traits`/`num_integer` impls, the teacher's bridge to the wider
//! numeric-crate ecosystem (`apint::num`), rebuilt here without the `todo!()`
//! stubs the teacher left unfinished.

use num_integer::Integer;
use num_traits::{Num, One, Signed, Zero};

use super::Int;

impl<const N: usize> Zero for Int<N> {
    #[inline]
    fn zero() -> Self {
        Int::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Int::is_zero(self)
    }
}

impl<const N: usize> One for Int<N> {
    #[inline]
    fn one() -> Self {
        Int::ONE
    }

    #[inline]
    fn is_one(&self) -> bool {
        *self == Int::ONE
    }
}

impl<const N: usize> Signed for Int<N> {
    #[inline]
    fn abs(&self) -> Self {
        Int::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Int::ZERO
        } else {
            self - other
        }
    }

    #[inline]
    fn signum(&self) -> Self {
        Int::signum(self)
    }

    #[inline]
    fn is_positive(&self) -> bool {
        Int::is_positive(self)
    }

    #[inline]
    fn is_negative(&self) -> bool {
        Int::is_negative(self)
    }
}

impl<const N: usize> Num for Int<N> {
    type FromStrRadixErr = crate::Error;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        Int::from_str_radix(s, radix)
    }
}

impl<const N: usize> Integer for Int<N> {
    fn div_floor(&self, other: &Self) -> Self {
        let (q, r) = super::dispatch::div_rem(self, other);
        if !r.is_zero() && (r.is_negative() != other.is_negative()) {
            q - Int::ONE
        } else {
            q
        }
    }

    fn mod_floor(&self, other: &Self) -> Self {
        let r = self % other;
        if !r.is_zero() && (r.is_negative() != other.is_negative()) {
            r + other.clone()
        } else {
            r
        }
    }

    fn gcd(&self, other: &Self) -> Self {
        super::dispatch::gcd(self, other)
    }

    fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Int::ZERO;
        }
        let g = super::dispatch::gcd(self, other);
        (self / &g * other).abs()
    }

    fn divides(&self, other: &Self) -> bool {
        !self.is_zero() && (other % self).is_zero()
    }

    fn is_multiple_of(&self, other: &Self) -> bool {
        other.divides(self)
    }

    fn is_even(&self) -> bool {
        let (_, mag) = self.view();
        mag.first().map_or(true, |l| l.get() & 1 == 0)
    }

    fn is_odd(&self) -> bool {
        !self.is_even()
    }

    fn div_rem(&self, other: &Self) -> (Self, Self) {
        super::dispatch::div_rem(self, other)
    }
}

#[cfg(test)]
mod tests {
    use crate::int::Int2;
    use num_integer::Integer;
    use num_traits::{Signed, Zero};

    #[test]
    fn div_floor_rounds_toward_negative_infinity() {
        let a = Int2::from(-7i64);
        let b = Int2::from(2i64);
        assert_eq!(a.div_floor(&b), Int2::from(-4i64));
        assert_eq!(a.mod_floor(&b), Int2::from(1i64));
    }

    #[test]
    fn gcd_and_lcm_match_spec_examples() {
        let a = Int2::from(18u64);
        let b = Int2::from(12u64);
        assert_eq!(a.gcd(&b), Int2::from(6u64));
        assert_eq!(Int2::zero().lcm(&Int2::zero()), Int2::ZERO);
    }

    #[test]
    fn abs_sub_never_goes_negative() {
        let a = Int2::from(3u64);
        let b = Int2::from(10u64);
        assert!(a.abs_sub(&b).is_zero());
    }
}
