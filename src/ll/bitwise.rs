//! `and_n`/`ior_n`/`xor_n`/`com` (spec.md §6), realized over arbitrary-length
//! sign-magnitude values via a two's-complement conversion -- the same
//! technique Java's `BigInteger` and `num-bigint` use, since a negative
//! sign-magnitude value's bitwise operations are only well-defined once
//! reinterpreted as an infinite-precision two's-complement bit pattern.

use alloc::vec::Vec;

use crate::limb::Limb;

fn to_twos_complement(negative: bool, mag: &[Limb], len: usize) -> Vec<Limb> {
    let mut out = alloc::vec![Limb::ZERO; len];
    out[..mag.len()].copy_from_slice(mag);
    if negative {
        let mut carry = true;
        for limb in &mut out {
            let inv = !*limb;
            let (v, c) = inv.add_carry(Limb::new(carry as u64));
            *limb = v;
            carry = c;
        }
    }
    out
}

fn from_twos_complement(bits: &[Limb]) -> (bool, Vec<Limb>) {
    let negative = bits.last().map_or(false, |l| l.high_bit_set());
    if !negative {
        return (false, super::trim(bits.to_vec()));
    }
    let mut mag = bits.to_vec();
    let mut carry = true;
    for limb in &mut mag {
        let inv = !*limb;
        let (v, c) = inv.add_carry(Limb::new(carry as u64));
        *limb = v;
        carry = c;
    }
    (true, super::trim(mag))
}

fn op_len(a: &[Limb], b: &[Limb]) -> usize {
    // A guard limb so the sign bit of the narrower two's-complement operand
    // is always representable.
    a.len().max(b.len()) + 1
}

/// Bitwise complement: `~x == -(x + 1)`.
pub(crate) fn com(negative: bool, mag: &[Limb]) -> (bool, Vec<Limb>) {
    let len = mag.len() + 1;
    let t = to_twos_complement(negative, mag, len);
    let inverted: Vec<Limb> = t.iter().map(|&x| !x).collect();
    from_twos_complement(&inverted)
}

pub(crate) fn and_n(a_neg: bool, a: &[Limb], b_neg: bool, b: &[Limb]) -> (bool, Vec<Limb>) {
    let len = op_len(a, b);
    let ta = to_twos_complement(a_neg, a, len);
    let tb = to_twos_complement(b_neg, b, len);
    let r: Vec<Limb> = ta
        .iter()
        .zip(&tb)
        .map(|(&x, &y)| Limb::new(x.get() & y.get()))
        .collect();
    from_twos_complement(&r)
}

pub(crate) fn ior_n(a_neg: bool, a: &[Limb], b_neg: bool, b: &[Limb]) -> (bool, Vec<Limb>) {
    let len = op_len(a, b);
    let ta = to_twos_complement(a_neg, a, len);
    let tb = to_twos_complement(b_neg, b, len);
    let r: Vec<Limb> = ta
        .iter()
        .zip(&tb)
        .map(|(&x, &y)| Limb::new(x.get() | y.get()))
        .collect();
    from_twos_complement(&r)
}

pub(crate) fn xor_n(a_neg: bool, a: &[Limb], b_neg: bool, b: &[Limb]) -> (bool, Vec<Limb>) {
    let len = op_len(a, b);
    let ta = to_twos_complement(a_neg, a, len);
    let tb = to_twos_complement(b_neg, b, len);
    let r: Vec<Limb> = ta
        .iter()
        .zip(&tb)
        .map(|(&x, &y)| Limb::new(x.get() ^ y.get()))
        .collect();
    from_twos_complement(&r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_mixed_sign_matches_spec_example() {
        // (-5) ^ 3 == -8
        let (neg, mag) = xor_n(true, &[Limb::new(5)], false, &[Limb::new(3)]);
        assert!(neg);
        assert_eq!(mag, [Limb::new(8)]);
    }

    #[test]
    fn com_is_involutive() {
        let (neg1, mag1) = com(false, &[Limb::new(10)]);
        let (neg2, mag2) = com(neg1, &mag1);
        assert!(!neg2);
        assert_eq!(mag2, [Limb::new(10)]);
    }

    #[test]
    fn and_of_two_negatives() {
        // (-1) & (-1) == -1
        let (neg, mag) = and_n(true, &[Limb::ONE], true, &[Limb::ONE]);
        assert!(neg);
        assert_eq!(mag, [Limb::ONE]);
    }
}
