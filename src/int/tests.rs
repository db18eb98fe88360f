//! End-to-end scenarios from spec.md §8, spanning more than one module
//! (arithmetic + promotion + comparison + bitwise + GCD/sqrt). Coverage that
//! lives naturally inside a single module's own `#[cfg(test)]` block (basic
//! add/sub/mul/div, single-operation bitwise identities, round-trips) is
//! tested there instead of being duplicated here.

use super::{Int1, Int2};

#[test]
fn two_to_the_63_plus_two_to_the_63_is_two_to_the_64() {
    let a: Int1 = crate::int::dispatch::shl(&Int1::ONE, 63);
    let sum = a.clone() + a;
    let expected: Int1 = crate::int::dispatch::shl(&Int1::ONE, 64);
    assert_eq!(sum, expected);
    assert!(!sum.is_static(), "2^64 exceeds a single 64-bit limb");
}

#[test]
fn two_to_the_127_squared_is_two_to_the_254() {
    let a: Int2 = crate::int::dispatch::shl(&Int2::ONE, 127);
    let squared = a.square();
    let expected: Int2 = crate::int::dispatch::shl(&Int2::ONE, 254);
    assert_eq!(squared, expected);
}

#[test]
fn gcd_of_a_negative_operand_matches_spec_example() {
    let a = Int2::from(-18i64);
    let b = Int2::from(12u64);
    assert_eq!(a.gcd(&b), Int2::from(6u64));
}

#[test]
fn lcm_of_zero_and_zero_is_zero() {
    assert_eq!(Int2::ZERO.lcm(&Int2::ZERO), Int2::ZERO);
}

#[test]
fn truncated_division_rounds_toward_zero_both_signs() {
    // tdiv_qr(-7, 2) == (-3, -1)
    let (q, r) = crate::int::dispatch::div_rem(&Int2::from(-7i64), &Int2::from(2i64));
    assert_eq!(q, Int2::from(-3i64));
    assert_eq!(r, Int2::from(-1i64));

    // tdiv_qr(7, -2) == (-3, 1)
    let (q, r) = crate::int::dispatch::div_rem(&Int2::from(7i64), &Int2::from(-2i64));
    assert_eq!(q, Int2::from(-3i64));
    assert_eq!(r, Int2::from(1i64));
}

#[test]
fn bitwise_identities_match_twos_complement_examples() {
    assert_eq!(!Int2::ZERO, Int2::from(-1i64));
    assert_eq!(Int2::from(-1i64) & Int2::from(-2i64), Int2::from(-2i64));
    assert_eq!(Int2::from(-5i64) | Int2::from(3i64), Int2::from(-5i64));
    assert_eq!(Int2::from(-5i64) ^ Int2::from(3i64), Int2::from(-8i64));
}

#[test]
fn shift_left_by_128_promotes_a_two_limb_value() {
    let a = Int2::from(42u64);
    let shifted: Int2 = crate::int::dispatch::shl(&a, 128);
    assert!(!shifted.is_static());
    assert_eq!(shifted >> 128u32, a);
}

#[test]
fn sqrt_and_gcd_compose_across_promotion_boundaries() {
    // A value requiring promotion, whose square root nonetheless fits back
    // into static storage.
    let big: Int1 = crate::int::dispatch::shl(&Int1::ONE, 130);
    assert!(!big.is_static());
    let root = big.sqrt().unwrap();
    let expected: Int1 = crate::int::dispatch::shl(&Int1::ONE, 65);
    assert_eq!(root, expected);

    let a = Int1::from(18u64);
    let b = Int1::from(12u64);
    assert_eq!(a.gcd(&b).lcm(&a.gcd(&b)), a.gcd(&b));
}

#[test]
fn comparison_is_sign_then_magnitude_across_storage_class() {
    let small = Int2::from(5u64);
    let large: Int2 = crate::int::dispatch::shl(&Int2::ONE, 200);
    assert!(small < large);
    assert!(-large.clone() < small);
    assert!(-large.clone() < -small);
}
