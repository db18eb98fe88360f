//! `gcd_1`/`gcd` (spec.md §6), binary (Stein's) GCD.
//!
//! Binary GCD avoids the general multi-limb division `tdiv_qr` needs on
//! every step of the Euclidean algorithm, trading it for shifts and
//! subtractions, which is the standard trick every schoolbook bignum library
//! (including GMP's `mpn_gcd`) uses for the generic multi-limb case.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::limb::Limb;

use super::add::cmp_varlen;
use super::shift::{rshift, trailing_zero_bits};

/// GCD of two nonzero single limbs.
pub(crate) fn gcd_1(mut a: Limb, mut b: Limb) -> Limb {
    debug_assert!(!a.is_zero() && !b.is_zero());
    while !b.is_zero() {
        let t = Limb::new(a.get() % b.get());
        a = b;
        b = t;
    }
    a
}

/// GCD of two nonzero, normalized (no leading zero limbs) magnitudes.
pub(crate) fn gcd(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    debug_assert!(!a.is_empty() && !b.is_empty());

    if a.len() == 1 && b.len() == 1 {
        let g = gcd_1(a[0], b[0]);
        return if g.is_zero() { Vec::new() } else { alloc::vec![g] };
    }

    let shift = trailing_zero_bits(a).min(trailing_zero_bits(b));

    let mut u = super::trim(rshift(a, trailing_zero_bits(a)));
    let mut v = super::trim(rshift(b, trailing_zero_bits(b)));

    loop {
        let tz = trailing_zero_bits(&v);
        if tz > 0 {
            v = super::trim(rshift(&v, tz));
        }

        if cmp_varlen(&u, &v) == Ordering::Greater {
            core::mem::swap(&mut u, &mut v);
        }
        v = super::trim(super::add::sub_varlen(&v, &u));

        if v.is_empty() {
            return super::trim(super::shift::lshift(&u, shift));
        }
    }
}
