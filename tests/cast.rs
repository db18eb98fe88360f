//! Cross-type conversions. Unlike a primitive `as` cast, narrowing a
//! sign-magnitude [`Int`] into a smaller or differently-signed primitive
//! never silently wraps -- it fails (spec.md §7's "overflow" error kind,
//! surfaced through `TryFrom`/`get`'s two-value form).

use bigsso::Int2;

macro_rules! test_widens {
    ($from:ident into $to:ident) => {
        paste::item! {
            #[test]
            fn [< $from _widens_into_ $to >] () {
                let val: $from = $from::MAX;
                let int = Int2::from(val);
                assert_eq!(int.get::<$to>(), Some(val as $to));
            }
        }
    };
}

test_widens!(u8 into u16);
test_widens!(u8 into u32);
test_widens!(u8 into u64);
test_widens!(u8 into u128);
test_widens!(u16 into u32);
test_widens!(u16 into u64);
test_widens!(u32 into u64);
test_widens!(u32 into u128);
test_widens!(i8 into i16);
test_widens!(i8 into i32);
test_widens!(i8 into i64);
test_widens!(i16 into i32);
test_widens!(i16 into i64);
test_widens!(i32 into i64);
test_widens!(i32 into i128);

#[test]
fn narrowing_a_too_large_unsigned_value_overflows() {
    let int = Int2::from(300u32);
    assert_eq!(int.get::<u8>(), None);
}

#[test]
fn narrowing_a_too_large_signed_value_overflows() {
    let int = Int2::from(i64::from(i32::MAX) + 1);
    assert_eq!(int.get::<i32>(), None);
}

#[test]
fn negative_value_never_converts_to_an_unsigned_type() {
    let int = Int2::from(-1i64);
    assert_eq!(int.get::<u64>(), None);
    assert_eq!(int.get::<u8>(), None);
}

#[test]
fn a_value_exactly_at_the_signed_boundary_round_trips() {
    let int = Int2::from(i32::MIN);
    assert_eq!(int.get::<i32>(), Some(i32::MIN));
    assert_eq!(int.get::<i16>(), None);
}
