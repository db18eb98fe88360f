//! The small-size specialized arithmetic kernels (spec.md §4.E): mandatory
//! 1-limb and 2-limb add/sub/mul/shift/div/bitwise/gcd/square
//! specializations, plus the `N >= 3` generic-capacity path that falls back
//! to [`crate::ll`] with the overflow precheck spec.md requires.
//!
//! Every kernel here builds its result as a fresh value before writing
//! anything into the caller's output slot, so self-aliased operands (`a +=
//! a`) and ternary in-place forms never observe a partially-overwritten
//! operand -- the "local buffer first, copy out" discipline spec.md asks
//! for falls out of this for free rather than needing separate handling.

use crate::limb::Limb;
use crate::ll;
use crate::static_int::StaticInt;

/// Either a successfully computed static result, or the number of limbs the
/// caller should promote to and retry with the generic (dynamic) path.
pub(crate) type KernelResult<const N: usize> = Result<StaticInt<N>, usize>;

fn signum(size: i32) -> i32 {
    size.signum()
}

/// Addition/subtraction, unified by spec.md §4.E (`AddOrSub`): subtraction is
/// addition with the second operand's sign flipped.
pub(crate) fn add_sub<const N: usize>(
    a: &StaticInt<N>,
    b: &StaticInt<N>,
    sub: bool,
) -> KernelResult<N> {
    let sign1 = signum(a.size);
    let sign2 = if sub { -signum(b.size) } else { signum(b.size) };

    match N {
        1 => add_sub_1(a, sign1, b, sign2),
        2 => add_sub_2(a, sign1, b, sign2),
        _ => add_sub_generic(a, sign1, b, sign2),
    }
}

fn add_sub_1<const N: usize>(
    a: &StaticInt<N>,
    sign1: i32,
    b: &StaticInt<N>,
    sign2: i32,
) -> KernelResult<N> {
    let (la, lb) = (a.limbs[0], b.limbs[0]);
    if sign1 == 0 && sign2 == 0 {
        return Ok(StaticInt::ZERO);
    }
    if sign1 == 0 {
        return Ok(StaticInt::from_parts(sign2 < 0, &[lb]));
    }
    if sign2 == 0 {
        return Ok(StaticInt::from_parts(sign1 < 0, &[la]));
    }
    if sign1 == sign2 {
        let (sum, carry) = la.add_carry(lb);
        if carry {
            return Err(2);
        }
        return Ok(StaticInt::from_parts(sign1 < 0, &[sum]));
    }
    // Opposite signs: larger magnitude wins the sign, subtract the smaller.
    if la == lb {
        return Ok(StaticInt::ZERO);
    }
    if la > lb {
        let (diff, _) = la.sub_borrow(lb);
        Ok(StaticInt::from_parts(sign1 < 0, &[diff]))
    } else {
        let (diff, _) = lb.sub_borrow(la);
        Ok(StaticInt::from_parts(sign2 < 0, &[diff]))
    }
}

fn add_sub_2<const N: usize>(
    a: &StaticInt<N>,
    sign1: i32,
    b: &StaticInt<N>,
    sign2: i32,
) -> KernelResult<N> {
    if sign1 == 0 && sign2 == 0 {
        return Ok(StaticInt::ZERO);
    }
    if sign1 == 0 {
        return Ok(StaticInt::from_parts(sign2 < 0, &[b.limbs[0], b.limbs[1]]));
    }
    if sign2 == 0 {
        return Ok(StaticInt::from_parts(sign1 < 0, &[a.limbs[0], a.limbs[1]]));
    }

    if sign1 == sign2 {
        let (lo, c_lo) = a.limbs[0].adc(b.limbs[0], false);
        // `adc` folds the two carry-outs spec.md describes separately
        // (`c_hi1` from `a.hi + b.hi`, then `c_hi2` from `+ c_lo`) into one.
        let (hi, c_hi) = a.limbs[1].adc(b.limbs[1], c_lo);
        if c_hi {
            return Err(3);
        }
        Ok(StaticInt::from_parts(sign1 < 0, &[lo, hi]))
    } else {
        // Opposite signs: compare magnitudes (asize then limbs top-down),
        // subtract smaller from larger.
        let a_mag = [a.limbs[0], a.limbs[1]];
        let b_mag = [b.limbs[0], b.limbs[1]];
        let cmp = cmp_mag(&a_mag, &b_mag);
        if cmp == 0 {
            return Ok(StaticInt::ZERO);
        }
        let (big, small, neg) = if cmp > 0 {
            (a_mag, b_mag, sign1 < 0)
        } else {
            (b_mag, a_mag, sign2 < 0)
        };
        let (lo, borrow) = big[0].sub_borrow(small[0]);
        let (hi, _) = big[1].sbb(small[1], borrow);
        Ok(StaticInt::from_parts(neg, &[lo, hi]))
    }
}

fn cmp_mag(a: &[Limb; 2], b: &[Limb; 2]) -> i32 {
    if a[1] != b[1] {
        return if a[1] > b[1] { 1 } else { -1 };
    }
    if a[0] != b[0] {
        return if a[0] > b[0] { 1 } else { -1 };
    }
    0
}

fn add_sub_generic<const N: usize>(
    a: &StaticInt<N>,
    sign1: i32,
    b: &StaticInt<N>,
    sign2: i32,
) -> KernelResult<N> {
    // Precheck: if either operand already fills all N limbs and its top
    // limb's high bit is set, the result may need N+1 limbs. The generic
    // `ll` routines write unconditionally, which would corrupt an aliased
    // in-place operand on a retry, so bail out before calling them.
    let a_full = a.asize() == N && N > 0 && a.limbs[N - 1].high_bit_set();
    let b_full = b.asize() == N && N > 0 && b.limbs[N - 1].high_bit_set();
    if a_full || b_full {
        return Err(N + 1);
    }

    if sign1 == 0 && sign2 == 0 {
        return Ok(StaticInt::ZERO);
    }
    if sign1 == 0 {
        return Ok(StaticInt::from_parts(sign2 < 0, b.limbs()));
    }
    if sign2 == 0 {
        return Ok(StaticInt::from_parts(sign1 < 0, a.limbs()));
    }

    if sign1 == sign2 {
        let sum = ll::add::add_varlen(a.limbs(), b.limbs());
        if sum.len() > N {
            return Err(N + 1);
        }
        Ok(StaticInt::from_parts(sign1 < 0, &sum))
    } else {
        use core::cmp::Ordering;
        match ll::add::cmp_varlen(a.limbs(), b.limbs()) {
            Ordering::Equal => Ok(StaticInt::ZERO),
            Ordering::Greater => {
                let diff = ll::trim(ll::add::sub_varlen(a.limbs(), b.limbs()));
                Ok(StaticInt::from_parts(sign1 < 0, &diff))
            }
            Ordering::Less => {
                let diff = ll::trim(ll::add::sub_varlen(b.limbs(), a.limbs()));
                Ok(StaticInt::from_parts(sign2 < 0, &diff))
            }
        }
    }
}

/// Multiplication (spec.md §4.E "Multiplication").
pub(crate) fn mul<const N: usize>(a: &StaticInt<N>, b: &StaticInt<N>) -> KernelResult<N> {
    match N {
        1 => mul_1(a, b),
        2 => mul_2(a, b),
        _ => mul_generic(a, b),
    }
}

fn mul_1<const N: usize>(a: &StaticInt<N>, b: &StaticInt<N>) -> KernelResult<N> {
    if a.is_zero() || b.is_zero() {
        return Ok(StaticInt::ZERO);
    }
    let (lo, hi) = a.limbs[0].mul_wide(b.limbs[0]);
    if !hi.is_zero() {
        return Err(2);
    }
    let neg = a.is_negative() != b.is_negative();
    Ok(StaticInt::from_parts(neg, &[lo]))
}

fn mul_2<const N: usize>(a: &StaticInt<N>, b: &StaticInt<N>) -> KernelResult<N> {
    if a.is_zero() || b.is_zero() {
        return Ok(StaticInt::ZERO);
    }
    let neg = a.is_negative() != b.is_negative();
    let asize = a.asize();
    let bsize = b.asize();

    if asize <= 1 && bsize <= 1 {
        let (lo, hi) = a.limbs[0].mul_wide(b.limbs[0]);
        return Ok(StaticInt::from_parts(neg, &[lo, hi]));
    }

    if asize + bsize > 2 && asize == 2 && bsize == 2 {
        // Always exceeds 2 limbs (the only exception, a zero operand, was
        // handled above).
        return Err(5);
    }

    // One operand is 1-limb, the other 2-limb.
    let (one_limb, two_limbs) = if asize == 1 {
        (a.limbs[0], [b.limbs[0], b.limbs[1]])
    } else {
        (b.limbs[0], [a.limbs[0], a.limbs[1]])
    };
    let (p0_lo, p0_hi) = one_limb.mul_wide(two_limbs[0]);
    let (p1_lo, p1_hi) = one_limb.mul_wide(two_limbs[1]);
    let (mid, carry) = p0_hi.adc(p1_lo, false);
    if carry || !p1_hi.is_zero() {
        return Err(4);
    }
    Ok(StaticInt::from_parts(neg, &[p0_lo, mid]))
}

fn mul_generic<const N: usize>(a: &StaticInt<N>, b: &StaticInt<N>) -> KernelResult<N> {
    if a.is_zero() || b.is_zero() {
        return Ok(StaticInt::ZERO);
    }
    let max_size = a.asize() + b.asize();
    if max_size > N {
        return Err(max_size);
    }
    let neg = a.is_negative() != b.is_negative();
    let product = ll::trim(ll::mul::mul(a.limbs(), b.limbs()));
    Ok(StaticInt::from_parts(neg, &product))
}

/// Square (spec.md §4.E "Square").
pub(crate) fn square<const N: usize>(a: &StaticInt<N>) -> KernelResult<N> {
    match N {
        1 => {
            if a.is_zero() {
                return Ok(StaticInt::ZERO);
            }
            let (lo, hi) = a.limbs[0].mul_wide(a.limbs[0]);
            if !hi.is_zero() {
                return Err(2);
            }
            Ok(StaticInt::from_parts(false, &[lo]))
        }
        2 => {
            if a.asize() == 2 {
                return Err(4);
            }
            if a.is_zero() {
                return Ok(StaticInt::ZERO);
            }
            let (lo, hi) = a.limbs[0].mul_wide(a.limbs[0]);
            Ok(StaticInt::from_parts(false, &[lo, hi]))
        }
        _ => {
            if a.is_zero() {
                return Ok(StaticInt::ZERO);
            }
            let max_size = a.asize() * 2;
            if max_size > N {
                return Err(max_size);
            }
            let sq = ll::trim(ll::mul::sqr(a.limbs()));
            Ok(StaticInt::from_parts(false, &sq))
        }
    }
}

/// Left shift by `s` bits (spec.md §4.E "Left shift by s bits").
pub(crate) fn shl<const N: usize>(a: &StaticInt<N>, s: u32) -> KernelResult<N> {
    if a.is_zero() {
        return Ok(StaticInt::ZERO);
    }
    let neg = a.is_negative();
    match N {
        1 => {
            if s >= Limb::BITS {
                return Err((s / Limb::BITS) as usize + 2);
            }
            let v = a.limbs[0].get();
            if s > 0 && v.leading_zeros() < s {
                // Bits would be shifted out of the single limb.
                return Err((s / Limb::BITS) as usize + 2);
            }
            Ok(StaticInt::from_parts(neg, &[Limb::new(v << s)]))
        }
        2 => {
            let asize = a.asize();
            if s >= 2 * Limb::BITS {
                return Err((s / Limb::BITS) as usize + 1 + asize);
            }
            if s == Limb::BITS {
                if asize < 2 {
                    return Ok(StaticInt::from_parts(neg, &[Limb::ZERO, a.limbs[0]]));
                }
                return Err((s / Limb::BITS) as usize + 1 + asize);
            }
            if s == 0 {
                return Ok(StaticInt::from_parts(neg, &[a.limbs[0], a.limbs[1]]));
            }
            let lo = a.limbs[0];
            let hi = a.limbs[1];
            let out_of_range_bits = hi.get() >> (Limb::BITS - s);
            if out_of_range_bits != 0 {
                return Err((s / Limb::BITS) as usize + 1 + asize);
            }
            let new_hi = Limb::new((hi.get() << s) | (lo.get() >> (Limb::BITS - s)));
            let new_lo = Limb::new(lo.get() << s);
            Ok(StaticInt::from_parts(neg, &[new_lo, new_hi]))
        }
        _ => {
            let shifted = ll::trim(ll::shift::lshift(a.limbs(), s));
            if shifted.len() > N {
                return Err(shifted.len());
            }
            Ok(StaticInt::from_parts(neg, &shifted))
        }
    }
}

/// Right shift (truncated division by `2^s`, spec.md §4.E "Truncated
/// division by power of two"). Never overflows.
pub(crate) fn shr<const N: usize>(a: &StaticInt<N>, s: u32) -> StaticInt<N> {
    if a.is_zero() {
        return StaticInt::ZERO;
    }
    let neg = a.is_negative();
    let shifted = ll::trim(ll::shift::rshift(a.limbs(), s));
    StaticInt::from_parts(neg, &shifted)
}

/// Truncated division and remainder (spec.md §4.E). Never overflows; the
/// dispatcher is responsible for reporting division-by-zero.
pub(crate) fn div_rem<const N: usize>(
    a: &StaticInt<N>,
    b: &StaticInt<N>,
) -> (StaticInt<N>, StaticInt<N>) {
    debug_assert!(!b.is_zero());
    if a.is_zero() {
        return (StaticInt::ZERO, StaticInt::ZERO);
    }
    let qsign = a.is_negative() != b.is_negative();
    let rsign = a.is_negative();

    match N {
        1 | 2 if a.asize() <= 1 && b.asize() <= 1 => {
            let (q, r) = Limb::div_wide(a.limbs[0], Limb::ZERO, b.limbs[0]);
            (
                StaticInt::from_parts(qsign, &[q]),
                StaticInt::from_parts(rsign, &[r]),
            )
        }
        _ => {
            let (q, r) = ll::div::tdiv_qr(a.limbs(), b.limbs());
            (
                StaticInt::from_parts(qsign, &ll::trim(q)),
                StaticInt::from_parts(rsign, &ll::trim(r)),
            )
        }
    }
}

/// Bitwise NOT (spec.md §4.E): `~x == -(x + 1)`.
pub(crate) fn not<const N: usize>(a: &StaticInt<N>) -> KernelResult<N> {
    match N {
        1 => {
            if !a.is_negative() {
                // ~x == -(x + 1); overflow iff x is already Limb::MAX.
                if a.limbs[0] == Limb::MAX {
                    return Err(2);
                }
                let (v, _) = a.limbs[0].add_carry(Limb::ONE);
                Ok(StaticInt::from_parts(true, &[v]))
            } else {
                // x negative: ~x = -(x + 1) = |x| - 1, always non-negative.
                let (v, _) = a.limbs[0].sub_borrow(Limb::ONE);
                Ok(StaticInt::from_parts(false, &[v]))
            }
        }
        _ => {
            let (neg, mag) = ll::bitwise::com(a.is_negative(), a.limbs());
            if mag.len() > N {
                return Err(mag.len());
            }
            Ok(StaticInt::from_parts(neg, &mag))
        }
    }
}

enum BitOp {
    And,
    Or,
    Xor,
}

fn bitop_generic<const N: usize>(a: &StaticInt<N>, b: &StaticInt<N>, op: BitOp) -> KernelResult<N> {
    let f = match op {
        BitOp::And => ll::bitwise::and_n,
        BitOp::Or => ll::bitwise::ior_n,
        BitOp::Xor => ll::bitwise::xor_n,
    };
    let (neg, mag) = f(a.is_negative(), a.limbs(), b.is_negative(), b.limbs());
    if mag.len() > N {
        return Err(mag.len());
    }
    Ok(StaticInt::from_parts(neg, &mag))
}

/// Bitwise AND (spec.md §4.E). Two negatives can cancel to zero; the
/// specialization fails that case to the generic path rather than
/// special-casing it, per spec.md.
pub(crate) fn and<const N: usize>(a: &StaticInt<N>, b: &StaticInt<N>) -> KernelResult<N> {
    if a.is_negative() && b.is_negative() {
        return Err(N + 1);
    }
    bitop_generic(a, b, BitOp::And)
}

/// Bitwise OR (spec.md §4.E). A negative operand can produce a two's
/// complement magnitude that overflows the static size.
pub(crate) fn or<const N: usize>(a: &StaticInt<N>, b: &StaticInt<N>) -> KernelResult<N> {
    bitop_generic(a, b, BitOp::Or)
}

/// Bitwise XOR (spec.md §4.E).
pub(crate) fn xor<const N: usize>(a: &StaticInt<N>, b: &StaticInt<N>) -> KernelResult<N> {
    bitop_generic(a, b, BitOp::Xor)
}

/// GCD (spec.md §4.E). `gcd(0, 0) == 0`.
pub(crate) fn gcd<const N: usize>(a: &StaticInt<N>, b: &StaticInt<N>) -> StaticInt<N> {
    if a.is_zero() {
        return StaticInt::from_parts(false, b.limbs());
    }
    if b.is_zero() {
        return StaticInt::from_parts(false, a.limbs());
    }
    if N == 1 || (a.asize() == 1 && b.asize() == 1) {
        let g = ll::gcd::gcd_1(a.limbs[0], b.limbs()[0]);
        return StaticInt::from_parts(false, &[g]);
    }
    let g = ll::trim(ll::gcd::gcd(a.limbs(), b.limbs()));
    StaticInt::from_parts(false, &g)
}

/// Tri-state comparison (spec.md §4.E "Comparison"): sizes first (signed),
/// then magnitudes top-down.
pub(crate) fn cmp<const N: usize>(a: &StaticInt<N>, b: &StaticInt<N>) -> i8 {
    if a.size != b.size {
        return if a.size > b.size { 1 } else { -1 };
    }
    if a.size == 0 {
        return 0;
    }
    let mag_cmp = {
        let mut result = 0i8;
        for i in (0..a.asize()).rev() {
            if a.limbs[i] != b.limbs[i] {
                result = if a.limbs[i] > b.limbs[i] { 1 } else { -1 };
                break;
            }
        }
        result
    };
    if a.is_negative() {
        -mag_cmp
    } else {
        mag_cmp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_1_overflow_reports_hint() {
        let a: StaticInt<1> = StaticInt::from_limb(Limb::MAX);
        let b: StaticInt<1> = StaticInt::from_limb(Limb::ONE);
        assert_eq!(add_sub(&a, &b, false), Err(2));
    }

    #[test]
    fn not_1_of_negative_is_positive() {
        // ~(-3) == 2, ~(-2) == 1, ~(-1) == 0: `~x == -(x + 1)` is always
        // non-negative for a negative `x`.
        let neg_three: StaticInt<1> = StaticInt::from_parts(true, &[Limb::new(3)]);
        let r = not(&neg_three).unwrap();
        assert!(!r.is_negative());
        assert_eq!(r.limbs(), &[Limb::new(2)]);

        let neg_one: StaticInt<1> = StaticInt::from_parts(true, &[Limb::ONE]);
        let r = not(&neg_one).unwrap();
        assert!(r.is_zero());
    }

    #[test]
    fn add_2_exact_sum() {
        let a: StaticInt<2> = StaticInt::from_parts(false, &[Limb::new(1), Limb::new(1)]);
        let b: StaticInt<2> = StaticInt::from_parts(false, &[Limb::new(2), Limb::new(0)]);
        let r = add_sub(&a, &b, false).unwrap();
        assert_eq!(r.limbs(), &[Limb::new(3), Limb::new(1)]);
    }

    #[test]
    fn sub_opposite_signs_cancel_to_zero() {
        let a: StaticInt<1> = StaticInt::from_limb(Limb::new(5));
        let b: StaticInt<1> = StaticInt::from_parts(true, &[Limb::new(5)]);
        // a - (-b's magnitude)... exercised through dispatcher normally;
        // here directly check equal-magnitude opposite-sign addition.
        let r = add_sub(&a, &b, false).unwrap();
        assert!(r.is_zero());
    }

    #[test]
    fn mul_2_both_two_limb_always_overflows() {
        let a: StaticInt<2> = StaticInt::from_parts(false, &[Limb::ONE, Limb::ONE]);
        let b: StaticInt<2> = StaticInt::from_parts(false, &[Limb::ONE, Limb::ONE]);
        assert_eq!(mul(&a, &b), Err(5));
    }

    #[test]
    fn shl_2_by_exactly_width_moves_lo_to_hi() {
        let a: StaticInt<2> = StaticInt::from_limb(Limb::new(7));
        let r = shl(&a, 64).unwrap();
        assert_eq!(r.limbs(), &[Limb::ZERO, Limb::new(7)]);
    }

    #[test]
    fn gcd_zero_zero_is_zero() {
        let a: StaticInt<2> = StaticInt::ZERO;
        let b: StaticInt<2> = StaticInt::ZERO;
        assert!(gcd(&a, &b).is_zero());
    }

    #[test]
    fn cmp_matches_sign_then_magnitude() {
        let a: StaticInt<2> = StaticInt::from_limb(Limb::new(5));
        let b: StaticInt<2> = StaticInt::from_parts(true, &[Limb::new(5)]);
        assert_eq!(cmp(&a, &b), 1);
        assert_eq!(cmp(&b, &a), -1);
        assert_eq!(cmp(&a, &a), 0);
    }
}
