//! `tdiv_qr`/`divrem_1`/`divexact_1` (spec.md §6).
//!
//! `divrem_1` is the textbook base-2^64 long division digit loop built
//! directly on [`Limb::div_wide`]. `tdiv_qr` is Knuth's Algorithm D
//! (TAOCP vol. 2, §4.3.1), the standard normalize/estimate/correct
//! multi-limb long division every schoolbook bignum implementation uses.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::limb::Limb;

use super::add::cmp;

/// Divides a magnitude by a single limb; returns `(quotient, remainder)`.
/// `quotient.len() == a.len()`.
pub(crate) fn divrem_1(a: &[Limb], divisor: Limb) -> (Vec<Limb>, Limb) {
    debug_assert!(!divisor.is_zero());
    let mut quotient = vec![Limb::ZERO; a.len()];
    let mut rem = Limb::ZERO;
    for i in (0..a.len()).rev() {
        let (q, r) = Limb::div_wide(a[i], rem, divisor);
        quotient[i] = q;
        rem = r;
    }
    (quotient, rem)
}

/// Divides a magnitude by a single limb known to divide it exactly; returns
/// the quotient. Falls back to [`divrem_1`]; see DESIGN.md for why this
/// doesn't use a faster exact-division-only algorithm.
pub(crate) fn divexact_1(a: &[Limb], divisor: Limb) -> Vec<Limb> {
    let (q, r) = divrem_1(a, divisor);
    debug_assert!(r.is_zero(), "divexact_1 called with a non-exact divisor");
    q
}

fn shl_bits(src: &[Limb], shift: u32) -> Vec<Limb> {
    if shift == 0 {
        return src.to_vec();
    }
    let mut out = Vec::with_capacity(src.len());
    let mut carry = 0u64;
    for &limb in src {
        let v = limb.get();
        out.push(Limb::new((v << shift) | carry));
        carry = v >> (Limb::BITS - shift);
    }
    out
}

fn shl_bits_extend(src: &[Limb], shift: u32) -> Vec<Limb> {
    let mut out = Vec::with_capacity(src.len() + 1);
    if shift == 0 {
        out.extend_from_slice(src);
        out.push(Limb::ZERO);
        return out;
    }
    let mut carry = 0u64;
    for &limb in src {
        let v = limb.get();
        out.push(Limb::new((v << shift) | carry));
        carry = v >> (Limb::BITS - shift);
    }
    out.push(Limb::new(carry));
    out
}

fn shr_bits(src: &[Limb], shift: u32) -> Vec<Limb> {
    if shift == 0 {
        return src.to_vec();
    }
    let mut out = vec![Limb::ZERO; src.len()];
    let mut carry = 0u64;
    for i in (0..src.len()).rev() {
        let v = src[i].get();
        out[i] = Limb::new((v >> shift) | carry);
        carry = v << (Limb::BITS - shift);
    }
    out
}

/// Truncated division: `u / v` for normalized (no leading zero limbs)
/// magnitudes with `v` nonzero. Returns `(quotient, remainder)`, both
/// normalized.
pub(crate) fn tdiv_qr(u: &[Limb], v: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    debug_assert!(!v.is_empty());

    if u.len() < v.len() || (u.len() == v.len() && cmp(u, v) == Ordering::Less) {
        return (Vec::new(), u.to_vec());
    }
    if v.len() == 1 {
        let (q, r) = divrem_1(u, v[0]);
        let r = if r.is_zero() { Vec::new() } else { vec![r] };
        return (super::trim(q), r);
    }

    let n = v.len();
    let m = u.len() - n;
    let shift = v[n - 1].leading_zeros();

    let vn = shl_bits(v, shift);
    let mut un = shl_bits_extend(u, shift);

    let mut q = vec![Limb::ZERO; m + 1];

    for j in (0..=m).rev() {
        let top2 = ((un[j + n].get() as u128) << Limb::BITS) | (un[j + n - 1].get() as u128);
        let vtop = vn[n - 1].get() as u128;
        let mut qhat = top2 / vtop;
        let mut rhat = top2 % vtop;

        if qhat > u64::MAX as u128 {
            qhat = u64::MAX as u128;
            rhat = top2 - qhat * vtop;
        }
        while rhat <= u64::MAX as u128
            && qhat * (vn[n - 2].get() as u128) > (rhat << Limb::BITS) + un[j + n - 2].get() as u128
        {
            qhat -= 1;
            rhat += vtop;
        }

        // Multiply `vn` by `qhat` and subtract from `un[j..=j+n]`.
        let mut borrow: i128 = 0;
        let mut carry: u128 = 0;
        for i in 0..n {
            let p = qhat * (vn[i].get() as u128) + carry;
            carry = p >> Limb::BITS;
            let sub = (un[j + i].get() as i128) - (p as u64 as i128) - borrow;
            un[j + i] = Limb::new(sub as u64);
            borrow = if sub < 0 { 1 } else { 0 };
        }
        let final_sub = (un[j + n].get() as i128) - (carry as i128) - borrow;
        un[j + n] = Limb::new(final_sub as u64);

        if final_sub < 0 {
            // `qhat` was one too large; add `vn` back once.
            qhat -= 1;
            let mut carry2 = false;
            for i in 0..n {
                let (s, c) = un[j + i].adc(vn[i], carry2);
                un[j + i] = s;
                carry2 = c;
            }
            un[j + n] = un[j + n].adc(Limb::ZERO, carry2).0;
        }

        q[j] = Limb::new(qhat as u64);
    }

    let r = shr_bits(&un[..n], shift);
    (super::trim(q), super::trim(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divrem_1_matches_scalar_division() {
        let a = [Limb::new(100), Limb::new(3)];
        // value = 100 + 3*2^64
        let (q, r) = divrem_1(&a, Limb::new(7));
        let value = 100u128 + 3u128 * (1u128 << 64);
        let expect_q = value / 7;
        let expect_r = value % 7;
        let got_q = q[0].get() as u128 | ((q[1].get() as u128) << 64);
        assert_eq!(got_q, expect_q);
        assert_eq!(r.get() as u128, expect_r);
    }

    #[test]
    fn tdiv_qr_small_values() {
        let u = [Limb::new(17)];
        let v = [Limb::new(5)];
        let (q, r) = tdiv_qr(&u, &v);
        assert_eq!(q, [Limb::new(3)]);
        assert_eq!(r, [Limb::new(2)]);
    }

    #[test]
    fn tdiv_qr_multi_limb() {
        // u = 2^100, v = 3
        let mut u = vec![Limb::ZERO, Limb::ZERO, Limb::new(1u64 << (100 - 64))];
        while u.last().map_or(false, |l| l.is_zero()) {
            u.pop();
        }
        let v = [Limb::new(3)];
        let (q, r) = tdiv_qr(&u, &v);
        // reconstruct q value (fits in u128 for this small case is not guaranteed,
        // so just check q*3 + r == u via multiply-back).
        let prod = super::super::mul::mul(&q, &v);
        let prod = super::super::trim(prod);
        let rebuilt = super::super::add::add_varlen(&prod, &r);
        assert_eq!(super::super::trim(rebuilt), u);
    }
}
