use bigsso::Int2;
use num_traits::{One, Zero};

#[test]
fn zero() {
    assert!(Int2::ZERO.is_zero());
}

#[test]
fn one() {
    assert!(Int2::ONE.is_one());
}
