//! The public entry point: [`Int`], the small-size-optimized
//! arbitrary-precision signed integer (spec.md §1-§4).

mod bitwise;
mod cmp;
mod convert;
mod hash;
mod kernel;
mod math;
mod numtraits;
mod ops;
mod radix;
mod serialize;

#[cfg(test)]
mod tests;

use alloc::vec::Vec;
use core::fmt;

use crate::limb::Limb;
use crate::ll;
use crate::storage::Storage;

pub use self::math::RootError;

/// The sign of an [`Int`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(i8)]
pub enum Sign {
    /// Negative.
    Negative = -1,
    /// Zero.
    Zero = 0,
    /// Positive.
    Positive = 1,
}

/// An arbitrary-precision signed integer with inline storage for up to `N`
/// limbs (spec.md §3). Values that fit spill-free; larger values promote to
/// a heap-allocated representation transparently.
///
/// `N` defaults to `2`, the larger of the two mandatory small-size
/// specializations spec.md §4.E calls out. [`Int1`] and [`Int2`] name the
/// two mandatory specializations explicitly.
pub struct Int<const N: usize = 2> {
    pub(crate) storage: Storage<N>,
}

/// The 1-limb mandatory specialization.
pub type Int1 = Int<1>;
/// The 2-limb mandatory specialization.
pub type Int2 = Int<2>;

impl<const N: usize> Int<N> {
    /// The additive identity, `0`.
    pub const ZERO: Int<N> = Int {
        storage: Storage::Static(crate::static_int::StaticInt::ZERO),
    };
    /// The multiplicative identity, `1`.
    pub const ONE: Int<N> = Int {
        storage: Storage::Static(crate::static_int::StaticInt::ONE),
    };

    /// The additive inverse of [`ONE`][Self::ONE], `-1`.
    pub const NEG_ONE: Int<N> = {
        let mut limbs = [Limb::ZERO; N];
        limbs[0] = Limb::ONE;
        Int {
            storage: Storage::Static(crate::static_int::StaticInt { size: -1, limbs }),
        }
    };

    /// Returns the [`Sign`] of `self`.
    #[inline]
    pub fn sign(&self) -> Sign {
        if self.storage.is_zero() {
            Sign::Zero
        } else if self.storage.is_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// Returns an [`Int`] representing the sign of `self`: `-1`, `0`, or `1`.
    #[inline]
    pub fn signum(&self) -> Int<N> {
        match self.sign() {
            Sign::Negative => Int::NEG_ONE,
            Sign::Zero => Int::ZERO,
            Sign::Positive => Int::ONE,
        }
    }

    /// Returns `true` if `self` is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.storage.is_zero()
    }

    /// Returns `true` if `self` is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.storage.is_negative()
    }

    /// Returns `true` if `self` is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.storage.is_zero() && !self.storage.is_negative()
    }

    /// Returns the absolute value of `self`.
    #[inline]
    pub fn abs(&self) -> Int<N> {
        let (_, mag) = self.storage.view();
        Int::from_sign_magnitude(false, mag)
    }

    /// Negates `self` in place.
    #[inline]
    pub fn negate(&mut self) {
        match &mut self.storage {
            Storage::Static(s) => s.negate(),
            Storage::Dynamic(d) => d.size = -d.size,
        }
    }

    /// Returns `true` if `self` currently uses inline (heap-free) storage.
    #[inline]
    pub fn is_static(&self) -> bool {
        self.storage.is_static()
    }

    /// The number of significant limbs (spec.md's "asize").
    #[inline]
    pub(crate) fn asize(&self) -> usize {
        self.storage.asize()
    }

    /// A read-only `(negative, magnitude)` view.
    #[inline]
    pub(crate) fn view(&self) -> (bool, &[Limb]) {
        self.storage.view()
    }

    /// Attempts to demote dynamic storage back to inline, if it now fits.
    /// Returns whether `self` is (or already was) static afterwards.
    pub fn shrink_to_fit(&mut self) -> bool {
        self.storage.demote()
    }

    /// Builds an [`Int`] from a sign/magnitude pair, promoting to dynamic
    /// storage automatically if the magnitude doesn't fit in `N` limbs.
    pub(crate) fn from_sign_magnitude(negative: bool, magnitude: &[Limb]) -> Int<N> {
        Int::from_sign_magnitude_hint(negative, magnitude, 0)
    }

    /// As [`Self::from_sign_magnitude`], but preallocates at least
    /// `capacity_hint` limbs when promotion is needed -- the failed static
    /// kernel's size-hint, so the dispatcher doesn't reallocate again on the
    /// very next operation (spec.md §4.D/§4.F).
    pub(crate) fn from_sign_magnitude_hint(
        negative: bool,
        magnitude: &[Limb],
        capacity_hint: usize,
    ) -> Int<N> {
        let asize = magnitude
            .iter()
            .rposition(|l| !l.is_zero())
            .map_or(0, |i| i + 1);
        if asize <= N {
            Int {
                storage: Storage::Static(crate::static_int::StaticInt::from_parts(
                    negative,
                    &magnitude[..asize],
                )),
            }
        } else {
            Int {
                storage: Storage::Dynamic(crate::dynamic::Dynamic::from_magnitude(
                    negative,
                    &magnitude[..asize],
                    capacity_hint.max(asize),
                )),
            }
        }
    }

}

impl<const N: usize> Default for Int<N> {
    #[inline]
    fn default() -> Self {
        Int::ZERO
    }
}

impl<const N: usize> Clone for Int<N> {
    fn clone(&self) -> Self {
        Int {
            storage: self.storage.clone(),
        }
    }
}

impl<const N: usize> fmt::Debug for Int<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Int")
            .field("sign", &self.sign())
            .field("magnitude", &self.view().1)
            .finish()
    }
}

/// Dispatcher entry points shared by [`ops`] and [`math`]: inspect operand
/// storage, try the static kernel, promote-and-retry on overflow (spec.md
/// §4.F).
pub(crate) mod dispatch {
    use super::*;
    use crate::static_int::StaticInt;

    pub(crate) fn binary<const N: usize>(
        a: &Int<N>,
        b: &Int<N>,
        kernel: impl FnOnce(&StaticInt<N>, &StaticInt<N>) -> Result<StaticInt<N>, usize>,
        generic: impl FnOnce(bool, &[Limb], bool, &[Limb]) -> (bool, Vec<Limb>),
    ) -> Int<N> {
        let mut hint = N + 1;
        if let (Storage::Static(sa), Storage::Static(sb)) = (&a.storage, &b.storage) {
            match kernel(sa, sb) {
                Ok(result) => {
                    return Int {
                        storage: Storage::Static(result),
                    };
                }
                Err(h) => hint = h,
            }
        }
        let (a_neg, a_mag) = a.view();
        let (b_neg, b_mag) = b.view();
        let (neg, mag) = generic(a_neg, a_mag, b_neg, b_mag);
        Int::from_sign_magnitude_hint(neg, &mag, hint)
    }

    pub(crate) fn add_sub<const N: usize>(a: &Int<N>, b: &Int<N>, sub: bool) -> Int<N> {
        binary(
            a,
            b,
            |sa, sb| kernel::add_sub(sa, sb, sub),
            |a_neg, a_mag, b_neg, b_mag| {
                let b_neg = if sub { !b_neg } else { b_neg };
                sign_magnitude_add(a_neg, a_mag, b_neg, b_mag)
            },
        )
    }

    fn sign_magnitude_add(
        a_neg: bool,
        a_mag: &[Limb],
        b_neg: bool,
        b_mag: &[Limb],
    ) -> (bool, Vec<Limb>) {
        use core::cmp::Ordering;
        if a_neg == b_neg {
            (a_neg, ll::add::add_varlen(a_mag, b_mag))
        } else {
            match ll::add::cmp_varlen(a_mag, b_mag) {
                Ordering::Equal => (false, Vec::new()),
                Ordering::Greater => (a_neg, ll::trim(ll::add::sub_varlen(a_mag, b_mag))),
                Ordering::Less => (b_neg, ll::trim(ll::add::sub_varlen(b_mag, a_mag))),
            }
        }
    }

    pub(crate) fn mul<const N: usize>(a: &Int<N>, b: &Int<N>) -> Int<N> {
        binary(a, b, kernel::mul, |a_neg, a_mag, b_neg, b_mag| {
            if a_mag.is_empty() || b_mag.is_empty() {
                return (false, Vec::new());
            }
            (a_neg != b_neg, ll::trim(ll::mul::mul(a_mag, b_mag)))
        })
    }

    pub(crate) fn and<const N: usize>(a: &Int<N>, b: &Int<N>) -> Int<N> {
        binary(a, b, kernel::and, |a_neg, a_mag, b_neg, b_mag| {
            ll::bitwise::and_n(a_neg, a_mag, b_neg, b_mag)
        })
    }

    pub(crate) fn or<const N: usize>(a: &Int<N>, b: &Int<N>) -> Int<N> {
        binary(a, b, kernel::or, |a_neg, a_mag, b_neg, b_mag| {
            ll::bitwise::ior_n(a_neg, a_mag, b_neg, b_mag)
        })
    }

    pub(crate) fn xor<const N: usize>(a: &Int<N>, b: &Int<N>) -> Int<N> {
        binary(a, b, kernel::xor, |a_neg, a_mag, b_neg, b_mag| {
            ll::bitwise::xor_n(a_neg, a_mag, b_neg, b_mag)
        })
    }

    pub(crate) fn not<const N: usize>(a: &Int<N>) -> Int<N> {
        if let Storage::Static(sa) = &a.storage {
            if let Ok(result) = kernel::not(sa) {
                return Int {
                    storage: Storage::Static(result),
                };
            }
        }
        let (neg, mag) = a.view();
        let (rneg, rmag) = ll::bitwise::com(neg, mag);
        Int::from_sign_magnitude(rneg, &rmag)
    }

    pub(crate) fn shl<const N: usize>(a: &Int<N>, s: u32) -> Int<N> {
        if let Storage::Static(sa) = &a.storage {
            if let Ok(result) = kernel::shl(sa, s) {
                return Int {
                    storage: Storage::Static(result),
                };
            }
        }
        let (neg, mag) = a.view();
        let shifted = ll::trim(ll::shift::lshift(mag, s));
        Int::from_sign_magnitude(neg, &shifted)
    }

    pub(crate) fn shr<const N: usize>(a: &Int<N>, s: u32) -> Int<N> {
        match &a.storage {
            Storage::Static(sa) => Int {
                storage: Storage::Static(kernel::shr(sa, s)),
            },
            Storage::Dynamic(_) => {
                let (neg, mag) = a.view();
                let shifted = ll::trim(ll::shift::rshift(mag, s));
                Int::from_sign_magnitude(neg, &shifted)
            }
        }
    }

    pub(crate) fn div_rem<const N: usize>(a: &Int<N>, b: &Int<N>) -> (Int<N>, Int<N>) {
        if let (Storage::Static(sa), Storage::Static(sb)) = (&a.storage, &b.storage) {
            let (q, r) = kernel::div_rem(sa, sb);
            return (
                Int {
                    storage: Storage::Static(q),
                },
                Int {
                    storage: Storage::Static(r),
                },
            );
        }
        let (a_neg, a_mag) = a.view();
        let (b_neg, b_mag) = b.view();
        let (q, r) = ll::div::tdiv_qr(a_mag, b_mag);
        let qneg = a_neg != b_neg;
        let rneg = a_neg;
        (
            Int::from_sign_magnitude(qneg, &ll::trim(q)),
            Int::from_sign_magnitude(rneg, &ll::trim(r)),
        )
    }

    pub(crate) fn gcd<const N: usize>(a: &Int<N>, b: &Int<N>) -> Int<N> {
        if let (Storage::Static(sa), Storage::Static(sb)) = (&a.storage, &b.storage) {
            return Int {
                storage: Storage::Static(kernel::gcd(sa, sb)),
            };
        }
        let (_, a_mag) = a.view();
        let (_, b_mag) = b.view();
        if a_mag.is_empty() {
            return Int::from_sign_magnitude(false, b_mag);
        }
        if b_mag.is_empty() {
            return Int::from_sign_magnitude(false, a_mag);
        }
        Int::from_sign_magnitude(false, &ll::trim(ll::gcd::gcd(a_mag, b_mag)))
    }

    pub(crate) fn square<const N: usize>(a: &Int<N>) -> Int<N> {
        if let Storage::Static(sa) = &a.storage {
            if let Ok(result) = kernel::square(sa) {
                return Int {
                    storage: Storage::Static(result),
                };
            }
        }
        let (_, mag) = a.view();
        Int::from_sign_magnitude(false, &ll::trim(ll::mul::sqr(mag)))
    }

    pub(crate) fn cmp<const N: usize>(a: &Int<N>, b: &Int<N>) -> core::cmp::Ordering {
        use core::cmp::Ordering;
        if let (Storage::Static(sa), Storage::Static(sb)) = (&a.storage, &b.storage) {
            return match kernel::cmp(sa, sb) {
                n if n > 0 => Ordering::Greater,
                0 => Ordering::Equal,
                _ => Ordering::Less,
            };
        }
        let (a_neg, a_mag) = a.view();
        let (b_neg, b_mag) = b.view();
        let a_zero = a_mag.is_empty();
        let b_zero = b_mag.is_empty();
        if a_zero && b_zero {
            return Ordering::Equal;
        }
        if a_neg != b_neg {
            return if a_neg { Ordering::Less } else { Ordering::Greater };
        }
        let mag_cmp = ll::add::cmp_varlen(a_mag, b_mag);
        if a_neg {
            mag_cmp.reverse()
        } else {
            mag_cmp
        }
    }
}
