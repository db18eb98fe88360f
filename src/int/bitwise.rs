//! `Not`/`BitAnd`/`BitOr`/`BitXor`/`Shl`/`Shr` operator trait implementations
//! (spec.md §4.E "Bitwise NOT, AND, OR, XOR", "Left shift", "Truncated
//! division by power of two"), dispatching through [`super::dispatch`].

use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

use super::dispatch;
use super::Int;

impl<const N: usize> Not for Int<N> {
    type Output = Int<N>;

    #[inline]
    fn not(self) -> Int<N> {
        dispatch::not(&self)
    }
}

impl<const N: usize> Not for &Int<N> {
    type Output = Int<N>;

    #[inline]
    fn not(self) -> Int<N> {
        dispatch::not(self)
    }
}

macro_rules! impl_bitop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $dispatch:path) => {
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

impl_bitop!(BitAnd, bitand, BitAndAssign, bitand_assign, dispatch::and);
impl_bitop!(BitOr, bitor, BitOrAssign, bitor_assign, dispatch::or);
impl_bitop!(BitXor, bitxor, BitXorAssign, bitxor_assign, dispatch::xor);

macro_rules! impl_shift {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $dispatch:path) => {
        impl<const N: usize> $trait<u32> for Int<N> {
            type Output = Int<N>;

            #[inline]
            fn $method(self, rhs: u32) -> Int<N> {
                $dispatch(&self, rhs)
            }
        }

        impl<const N: usize> $trait<u32> for &Int<N> {
            type Output = Int<N>;

            #[inline]
            fn $method(self, rhs: u32) -> Int<N> {
                $dispatch(self, rhs)
            }
        }

        impl<const N: usize> $assign_trait<u32> for Int<N> {
            #[inline]
            fn $assign_method(&mut self, rhs: u32) {
                *self = $dispatch(self, rhs);
            }
        }
    };
}

impl_shift!(Shl, shl, ShlAssign, shl_assign, dispatch::shl);
impl_shift!(Shr, shr, ShrAssign, shr_assign, dispatch::shr);

#[cfg(test)]
mod tests {
    use crate::int::Int2;

    #[test]
    fn not_of_zero_is_neg_one() {
        assert_eq!(!Int2::ZERO, Int2::NEG_ONE);
        assert_eq!(!Int2::NEG_ONE, Int2::ZERO);
    }

    #[test]
    fn and_of_negatives_matches_twos_complement() {
        // (-1) & (-2) == -2
        let a = Int2::from(-1i64);
        let b = Int2::from(-2i64);
        assert_eq!(&a & &b, Int2::from(-2i64));
    }

    #[test]
    fn or_matches_twos_complement() {
        // (-5) | 3 == -5
        let a = Int2::from(-5i64);
        let b = Int2::from(3i64);
        assert_eq!(&a | &b, Int2::from(-5i64));
    }

    #[test]
    fn xor_matches_twos_complement() {
        // (-5) ^ 3 == -8
        let a = Int2::from(-5i64);
        let b = Int2::from(3i64);
        assert_eq!(&a ^ &b, Int2::from(-8i64));
    }

    #[test]
    fn shift_left_then_right_recovers_nonnegative_value() {
        let a = Int2::from(42u64);
        let shifted = &a << 128;
        assert_eq!(&shifted >> 128, a);
    }

    #[test]
    fn shl_requiring_promotion_from_small_capacity() {
        let a = crate::int::Int1::from(1u64);
        let shifted = a << 100;
        assert!(!shifted.is_static());
    }
}
