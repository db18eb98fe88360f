//! `Hash` for [`Int`] (spec.md's testable property 15: `a == b ⇒ hash(a) ==
//! hash(b)`). Hashes the sign/magnitude view rather than the storage
//! representation, so static and dynamic values that are numerically equal
//! always hash equal.

use core::hash::{Hash, Hasher};

use super::Int;

impl<const N: usize> Hash for Int<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (negative, mag) = self.view();
        // Zero has no sign; fold it into a single canonical hash so `0` and
        // `-0` (unreachable through the public API, but not through a raw
        // `Storage::assign_static`) would still hash identically.
        let negative = negative && !mag.is_empty();
        negative.hash(state);
        mag.len().hash(state);
        for limb in mag {
            limb.get().hash(state);
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use crate::int::Int1;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(a: &Int1) -> u64 {
        let mut h = DefaultHasher::new();
        a.hash(&mut h);
        h.finish()
    }

    #[test]
    fn equal_values_hash_equal_across_storage_class() {
        let direct = Int1::from(42u64);

        let mut demoted: Int1 = crate::int::dispatch::shl(&Int1::ONE, 200);
        assert!(!demoted.is_static());
        demoted = demoted >> 200;
        demoted += direct.clone();
        assert!(demoted.shrink_to_fit());
        assert!(demoted.is_static());

        assert_eq!(direct, demoted);
        assert_eq!(hash_of(&direct), hash_of(&demoted));
    }
}
