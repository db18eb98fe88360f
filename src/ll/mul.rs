//! `mul_1`/`mul`/`sqr` (spec.md §6), schoolbook grade.
//!
//! Grounded on the portable multiply-by-limb shape in
//! `other_examples/425c6b56_mortendahl-ramp__src-ll-mul.rs.rs`
//! (`mul_1_generic`/`addmul_1_generic`), generalized here to full
//! multi-limb-by-multi-limb multiplication via a `u128` accumulator rather
//! than tracked carry bits, to keep the overflow reasoning obviously correct.

use alloc::vec;
use alloc::vec::Vec;

use crate::limb::Limb;

/// Multiplies a magnitude by a single limb; the result is one limb longer
/// than `a` (the top limb may be zero).
pub(crate) fn mul_1(a: &[Limb], v: Limb) -> Vec<Limb> {
    let v = v.get() as u128;
    let mut carry: u128 = 0;
    let mut out = Vec::with_capacity(a.len() + 1);
    for &limb in a {
        let acc = limb.get() as u128 * v + carry;
        out.push(Limb::new(acc as u64));
        carry = acc >> Limb::BITS;
    }
    out.push(Limb::new(carry as u64));
    out
}

/// Schoolbook multiply: `a * b`, a magnitude of length `a.len() + b.len()`
/// (the top limb may be zero).
pub(crate) fn mul(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u64; a.len() + b.len()];
    for (i, &bv) in b.iter().enumerate() {
        let bv = bv.get() as u128;
        if bv == 0 {
            continue;
        }
        let mut carry: u128 = 0;
        for (j, &av) in a.iter().enumerate() {
            let av = av.get() as u128;
            let acc = av * bv + out[i + j] as u128 + carry;
            out[i + j] = acc as u64;
            carry = acc >> Limb::BITS;
        }
        let mut k = i + a.len();
        while carry != 0 {
            let acc = out[k] as u128 + carry;
            out[k] = acc as u64;
            carry = acc >> Limb::BITS;
            k += 1;
        }
    }
    out.into_iter().map(Limb::new).collect()
}

/// Squares a magnitude; no dedicated fast path, just `mul(a, a)`.
pub(crate) fn sqr(a: &[Limb]) -> Vec<Limb> {
    mul(a, a)
}
