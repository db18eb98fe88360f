//! `lshift`/`rshift` (spec.md §6), plus the trailing-zero-bit count the
//! binary GCD and Miller-Rabin implementations both need.

use alloc::vec;
use alloc::vec::Vec;

use crate::limb::Limb;

/// Left-shifts a magnitude by `bits` (any non-negative amount), growing the
/// result as needed.
pub(crate) fn lshift(a: &[Limb], bits: u32) -> Vec<Limb> {
    if a.is_empty() || bits == 0 {
        return a.to_vec();
    }
    let limb_shift = (bits / Limb::BITS) as usize;
    let bit_shift = bits % Limb::BITS;

    let mut out = vec![Limb::ZERO; limb_shift];
    out.reserve(a.len() + 1);
    if bit_shift == 0 {
        out.extend_from_slice(a);
    } else {
        let mut carry = 0u64;
        for &limb in a {
            let v = limb.get();
            out.push(Limb::new((v << bit_shift) | carry));
            carry = v >> (Limb::BITS - bit_shift);
        }
        if carry != 0 {
            out.push(Limb::new(carry));
        }
    }
    out
}

/// Right-shifts (truncating, i.e. floor-divides by `2^bits`) a magnitude.
pub(crate) fn rshift(a: &[Limb], bits: u32) -> Vec<Limb> {
    if a.is_empty() || bits == 0 {
        return a.to_vec();
    }
    let limb_shift = (bits / Limb::BITS) as usize;
    if limb_shift >= a.len() {
        return Vec::new();
    }
    let bit_shift = bits % Limb::BITS;
    let src = &a[limb_shift..];

    if bit_shift == 0 {
        return src.to_vec();
    }

    let mut out = vec![Limb::ZERO; src.len()];
    for i in 0..src.len() {
        let lo = src[i].get() >> bit_shift;
        let hi = if i + 1 < src.len() {
            src[i + 1].get() << (Limb::BITS - bit_shift)
        } else {
            0
        };
        out[i] = Limb::new(lo | hi);
    }
    out
}

/// Number of trailing zero bits in a nonzero magnitude (`0` for zero).
pub(crate) fn trailing_zero_bits(a: &[Limb]) -> u32 {
    for (i, limb) in a.iter().enumerate() {
        if !limb.is_zero() {
            return (i as u32) * Limb::BITS + limb.trailing_zeros();
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lshift_crosses_limb_boundary() {
        let a = [Limb::new(1)];
        let shifted = super::super::trim(lshift(&a, 64));
        assert_eq!(shifted, [Limb::ZERO, Limb::ONE]);
    }

    #[test]
    fn rshift_is_lshift_inverse_for_exact_multiples() {
        let a = [Limb::new(0x1234_5678)];
        let up = lshift(&a, 40);
        let down = super::super::trim(rshift(&up, 40));
        assert_eq!(down, a);
    }

    #[test]
    fn trailing_zero_bits_counts_across_limbs() {
        let a = [Limb::ZERO, Limb::new(4)];
        assert_eq!(trailing_zero_bits(&a), 64 + 2);
    }
}
