//! `sizeinbase`/`perfect_square_p`/`perfect_power_p` (spec.md §6).

use crate::limb::Limb;

use super::div::divrem_1;
use super::root::{rootrem, sqrtrem};

/// Number of digits needed to represent a normalized magnitude in the given
/// base (`2..=62`). May overestimate by one digit, mirroring GMP's
/// `mpz_sizeinbase`, which the caller compensates for by trimming a leading
/// zero digit after conversion if one appears.
pub(crate) fn sizeinbase(a: &[Limb], base: u32) -> usize {
    if a.is_empty() {
        return 1;
    }
    if base.is_power_of_two() {
        let bits = super::bit_length(a) as usize;
        let log2base = base.trailing_zeros() as usize;
        return (bits + log2base - 1) / log2base;
    }

    // Repeated division is simplest to get right for arbitrary bases; this
    // isn't used on a hot path (only text formatting).
    let mut count = 0usize;
    let mut cur = a.to_vec();
    while !cur.is_empty() {
        let (q, _) = divrem_1(&cur, Limb::new(base as u64));
        cur = super::trim(q);
        count += 1;
    }
    count.max(1)
}

/// Whether a nonnegative magnitude is a perfect square.
pub(crate) fn perfect_square_p(a: &[Limb]) -> bool {
    if a.is_empty() {
        return true;
    }
    let (_, r) = sqrtrem(a);
    r.is_empty()
}

/// Whether a nonnegative magnitude is a perfect `k`-th power for some
/// `k >= 2`.
pub(crate) fn perfect_power_p(a: &[Limb]) -> bool {
    if a.is_empty() {
        return true;
    }
    if a == [Limb::ONE] {
        return true;
    }
    let bits = super::bit_length(a);
    // Any exponent beyond the bit-length cannot produce a root > 1.
    for k in 2..=bits {
        let (_, r) = rootrem(a, k);
        if r.is_empty() {
            return true;
        }
    }
    false
}

/// Whether a nonnegative magnitude is a perfect `k`-th power for some *odd*
/// `k >= 3` -- the only exponents that can produce a negative result, since
/// an even power of any real base is nonnegative.
pub(crate) fn perfect_power_p_odd(a: &[Limb]) -> bool {
    if a.is_empty() {
        return false;
    }
    if a == [Limb::ONE] {
        return true;
    }
    let bits = super::bit_length(a);
    let mut k = 3;
    while k <= bits {
        let (_, r) = rootrem(a, k);
        if r.is_empty() {
            return true;
        }
        k += 2;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizeinbase_decimal() {
        assert_eq!(sizeinbase(&[Limb::new(999)], 10), 3);
        assert_eq!(sizeinbase(&[Limb::new(1000)], 10), 4);
    }

    #[test]
    fn sizeinbase_binary_matches_bit_length() {
        let a = [Limb::new(0b1010)];
        assert_eq!(sizeinbase(&a, 2), 4);
    }

    #[test]
    fn perfect_square_detection() {
        assert!(perfect_square_p(&[Limb::new(144)]));
        assert!(!perfect_square_p(&[Limb::new(145)]));
    }

    #[test]
    fn perfect_power_detection() {
        assert!(perfect_power_p(&[Limb::new(64)])); // 2^6, also 8^2, 4^3
        assert!(!perfect_power_p(&[Limb::new(15)]));
    }
}
