//! `sqrtrem`/`rootrem` (spec.md §6): integer square/n-th root with exact
//! remainder, via Newton's method over magnitudes.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::limb::Limb;

use super::add::cmp_varlen;
use super::div::tdiv_qr;
use super::mul::mul;
use super::shift::{lshift, rshift};

fn is_zero(a: &[Limb]) -> bool {
    a.is_empty()
}

fn sub_checked(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    super::trim(super::add::sub_varlen(a, b))
}

/// Integer square root of a nonnegative magnitude, by Newton's method.
/// Returns `(sqrt, remainder)` with `sqrt * sqrt + remainder == a` and
/// `0 <= remainder <= 2 * sqrt`.
pub(crate) fn sqrtrem(a: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    if is_zero(a) {
        return (Vec::new(), Vec::new());
    }

    let bits = super::bit_length(a);
    // Initial guess: 2^ceil(bits/2), which is >= the true root.
    let mut x = super::trim(lshift(&[Limb::ONE], bits.div_ceil(2)));

    loop {
        // next = (x + a / x) / 2
        let (q, _) = tdiv_qr(a, &x);
        let sum = super::add::add_varlen(&x, &q);
        let next = super::trim(rshift(&sum, 1));
        if cmp_varlen(&next, &x) != Ordering::Less {
            break;
        }
        x = next;
    }

    // `x` may be one too large due to truncation; correct downward.
    loop {
        let sq = super::trim(mul(&x, &x));
        if cmp_varlen(&sq, a) != Ordering::Greater {
            let r = sub_checked(a, &sq);
            return (x, r);
        }
        x = sub_checked(&x, &[Limb::ONE]);
    }
}

/// Integer n-th root (`n >= 2`) of a nonnegative magnitude, by Newton's
/// method. Returns `(root, remainder)` with `root^n + remainder == a`.
pub(crate) fn rootrem(a: &[Limb], n: u32) -> (Vec<Limb>, Vec<Limb>) {
    debug_assert!(n >= 2);
    if is_zero(a) {
        return (Vec::new(), Vec::new());
    }
    if n == 2 {
        return sqrtrem(a);
    }

    let bits = super::bit_length(a);
    let mut x = super::trim(lshift(&[Limb::ONE], bits.div_ceil(n) + 1));

    loop {
        // next = ((n-1)*x + a/x^(n-1)) / n
        let pow = npow(&x, n - 1);
        let (q, _) = tdiv_qr(a, &pow);
        let nm1_x = nmul(&x, n - 1);
        let sum = super::add::add_varlen(&nm1_x, &q);
        let (next, _) = super::div::divrem_1(&sum, Limb::new(n as u64));
        let next = super::trim(next);
        if cmp_varlen(&next, &x) != Ordering::Less {
            break;
        }
        x = next;
    }

    loop {
        let p = npow(&x, n);
        if cmp_varlen(&p, a) != Ordering::Greater {
            let r = sub_checked(a, &p);
            return (x, r);
        }
        x = sub_checked(&x, &[Limb::ONE]);
    }
}

fn npow(base: &[Limb], exp: u32) -> Vec<Limb> {
    let mut result = alloc::vec![Limb::ONE];
    let mut b = base.to_vec();
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result = super::trim(mul(&result, &b));
        }
        b = super::trim(mul(&b, &b));
        e >>= 1;
    }
    result
}

fn nmul(a: &[Limb], small: u32) -> Vec<Limb> {
    super::trim(super::mul::mul_1(a, Limb::new(small as u64)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrtrem_matches_known() {
        let a = [Limb::new(1_000_001)];
        let (s, r) = sqrtrem(&a);
        assert_eq!(s, [Limb::new(1000)]);
        assert_eq!(r, [Limb::new(1)]);
    }

    #[test]
    fn sqrtrem_perfect_square() {
        let a = [Limb::new(1_000_000)];
        let (s, r) = sqrtrem(&a);
        assert_eq!(s, [Limb::new(1000)]);
        assert!(r.is_empty());
    }

    #[test]
    fn rootrem_cube() {
        let a = [Limb::new(1000)];
        let (r, rem) = rootrem(&a, 3);
        assert_eq!(r, [Limb::new(10)]);
        assert!(rem.is_empty());
    }
}
