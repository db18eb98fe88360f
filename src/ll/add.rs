//! `add_n`/`sub_n`/`add_1`/`sub_1`/`cmp` (spec.md §6).

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::limb::Limb;

/// Compares the magnitudes of two equal-length limb slices.
pub(crate) fn cmp(a: &[Limb], b: &[Limb]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    for i in (0..a.len()).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Compares magnitudes of normalized (no leading zero limbs), possibly
/// different-length limb slices.
pub(crate) fn cmp_varlen(a: &[Limb], b: &[Limb]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => cmp(a, b),
        ord => ord,
    }
}

/// `a + b` for equal-length `a`/`b`; returns the sum and the final carry-out.
pub(crate) fn add_n(a: &[Limb], b: &[Limb]) -> (Vec<Limb>, bool) {
    debug_assert_eq!(a.len(), b.len());
    let mut out = Vec::with_capacity(a.len());
    let mut carry = false;
    for i in 0..a.len() {
        let (v, c) = a[i].adc(b[i], carry);
        out.push(v);
        carry = c;
    }
    (out, carry)
}

/// `a - b` for equal-length `a`/`b` with `a >= b`; returns the difference and
/// the final borrow-out (`false` when the precondition holds).
pub(crate) fn sub_n(a: &[Limb], b: &[Limb]) -> (Vec<Limb>, bool) {
    debug_assert_eq!(a.len(), b.len());
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = false;
    for i in 0..a.len() {
        let (v, bo) = a[i].sbb(b[i], borrow);
        out.push(v);
        borrow = bo;
    }
    (out, borrow)
}

/// Adds a single limb to a (nonempty) multi-limb magnitude; returns the
/// result and carry-out.
pub(crate) fn add_1(a: &[Limb], b: Limb) -> (Vec<Limb>, bool) {
    debug_assert!(!a.is_empty());
    let mut out = Vec::with_capacity(a.len());
    let (v0, mut carry) = a[0].add_carry(b);
    out.push(v0);
    for &limb in &a[1..] {
        let (v, c) = limb.adc(Limb::ZERO, carry);
        out.push(v);
        carry = c;
    }
    (out, carry)
}

/// Subtracts a single limb from a (nonempty) multi-limb magnitude,
/// `a >= b`; returns the result and borrow-out.
pub(crate) fn sub_1(a: &[Limb], b: Limb) -> (Vec<Limb>, bool) {
    debug_assert!(!a.is_empty());
    let mut out = Vec::with_capacity(a.len());
    let (v0, mut borrow) = a[0].sub_borrow(b);
    out.push(v0);
    for &limb in &a[1..] {
        let (v, bo) = limb.sbb(Limb::ZERO, borrow);
        out.push(v);
        borrow = bo;
    }
    (out, borrow)
}

/// `a + b` for arbitrary-length magnitudes; the result may be one limb
/// longer than the longer operand.
pub(crate) fn add_varlen(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = false;
    for i in 0..short.len() {
        let (v, c) = long[i].adc(short[i], carry);
        out.push(v);
        carry = c;
    }
    for &limb in &long[short.len()..] {
        let (v, c) = limb.adc(Limb::ZERO, carry);
        out.push(v);
        carry = c;
    }
    if carry {
        out.push(Limb::ONE);
    }
    out
}

/// `a - b` for arbitrary-length normalized magnitudes with `a >= b`.
pub(crate) fn sub_varlen(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    debug_assert!(cmp_varlen(a, b) != Ordering::Less);
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = false;
    for i in 0..b.len() {
        let (v, bo) = a[i].sbb(b[i], borrow);
        out.push(v);
        borrow = bo;
    }
    for &limb in &a[b.len()..] {
        let (v, bo) = limb.sbb(Limb::ZERO, borrow);
        out.push(v);
        borrow = bo;
    }
    debug_assert!(!borrow);
    out
}
