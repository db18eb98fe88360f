use bigsso::Int2;
use quickcheck::{QuickCheck, StdThreadGen, Testable};

fn quickcheck<A: Testable>(f: A) {
    const N_TESTS: u64 = 10_000;

    QuickCheck::with_gen(StdThreadGen::new(usize::MAX))
        .tests(N_TESTS)
        .max_tests(N_TESTS)
        .min_tests_passed(N_TESTS)
        .quickcheck(f)
}

macro_rules! quickcheck_round_trip {
    ($($ty:ident),* $(,)*) => {
        $(
            paste::item! {
               #[test]
               fn [< prop_equivalent_from_ $ty >] () {
                    fn prop(n: $ty) -> bool {
                        Some(n) == Int2::from(n).get::<$ty>()
                    }
                    quickcheck(prop as fn($ty) -> bool)
               }
            }
        )*
    };
}

macro_rules! quickcheck_widens {
    ($from:ident into $to:ident) => {
        paste::item! {
            #[test]
            fn [< prop_ $from _widens_into_ $to >] () {
                fn prop(n: $from) -> bool {
                    Some(n as $to) == Int2::from(n).get::<$to>()
                }
                quickcheck(prop as fn($from) -> bool)
            }
        }
    };
}

#[rustfmt::skip]
quickcheck_round_trip!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
);

quickcheck_widens!(u8 into u16);
quickcheck_widens!(u8 into u32);
quickcheck_widens!(u8 into u64);
quickcheck_widens!(u8 into u128);
quickcheck_widens!(u16 into u32);
quickcheck_widens!(u16 into u64);
quickcheck_widens!(u32 into u64);
quickcheck_widens!(u32 into u128);
quickcheck_widens!(i8 into i16);
quickcheck_widens!(i8 into i32);
quickcheck_widens!(i8 into i64);
quickcheck_widens!(i16 into i32);
quickcheck_widens!(i16 into i64);
quickcheck_widens!(i32 into i64);
quickcheck_widens!(i32 into i128);
