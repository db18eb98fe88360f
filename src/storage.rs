//! The tagged union between [`StaticInt`] and [`Dynamic`], and the
//! promotion/demotion controller that moves values between them (spec.md
//! §4.C "Storage union", §4.D "Promotion/demotion controller").
//!
//! spec.md's Design Notes explicitly endorse this: "a straightforward
//! tagged union with discriminant suffices and is cleaner" than the
//! sentinel-value trick some native mpz-backed libraries use, so this is a
//! plain Rust `enum`.

use crate::dynamic::Dynamic;
use crate::limb::Limb;
use crate::static_int::StaticInt;

pub(crate) enum Storage<const N: usize> {
    Static(StaticInt<N>),
    Dynamic(Dynamic),
}

impl<const N: usize> Storage<N> {
    #[inline]
    pub(crate) const fn is_static(&self) -> bool {
        matches!(self, Storage::Static(_))
    }

    #[inline]
    pub(crate) fn asize(&self) -> usize {
        match self {
            Storage::Static(s) => s.asize(),
            Storage::Dynamic(d) => d.asize(),
        }
    }

    #[inline]
    pub(crate) fn is_negative(&self) -> bool {
        match self {
            Storage::Static(s) => s.is_negative(),
            Storage::Dynamic(d) => d.is_negative(),
        }
    }

    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        match self {
            Storage::Static(s) => s.is_zero(),
            Storage::Dynamic(d) => d.is_zero(),
        }
    }

    #[inline]
    pub(crate) fn view(&self) -> (bool, &[Limb]) {
        match self {
            Storage::Static(s) => s.view(),
            Storage::Dynamic(d) => d.view(),
        }
    }

    /// Promotes static storage to dynamic, preserving value and
    /// preallocating at least `nlimbs_hint` limbs.
    pub(crate) fn promote(&mut self, nlimbs_hint: usize) {
        let Storage::Static(s) = self else {
            debug_assert!(false, "promote called on already-dynamic storage");
            return;
        };
        tracing::debug!(
            hint = nlimbs_hint,
            asize = s.asize(),
            "promoting static integer to dynamic storage"
        );
        let negative = s.is_negative();
        let dynamic = Dynamic::from_magnitude(negative, s.limbs(), nlimbs_hint.max(1));
        *self = Storage::Dynamic(dynamic);
    }

    /// Attempts to demote dynamic storage back to static. Returns `true`
    /// (and mutates `self`) on success; returns `false` and leaves `self`
    /// unchanged if the value no longer fits in `N` limbs.
    pub(crate) fn demote(&mut self) -> bool {
        let Storage::Dynamic(d) = self else {
            return true;
        };
        let fits = d.asize() <= N;
        tracing::trace!(
            asize = d.asize(),
            capacity = N,
            fits,
            "attempting demotion to static storage"
        );
        if !fits {
            return false;
        }
        let negative = d.is_negative();
        let s = StaticInt::from_parts(negative, d.limbs());
        *self = Storage::Static(s);
        true
    }

    /// Moves the current value out, leaving a static zero behind (the
    /// "zero-valued shell" move-source contract of spec.md §9).
    pub(crate) fn take(&mut self) -> Storage<N> {
        core::mem::replace(self, Storage::Static(StaticInt::ZERO))
    }

    /// Writes a static magnitude into `self`, demoting from dynamic storage
    /// if necessary (never re-promotes; `limbs_src.len()` must be `<= N`).
    pub(crate) fn assign_static(&mut self, negative: bool, limbs_src: &[Limb]) {
        debug_assert!(limbs_src.len() <= N);
        *self = Storage::Static(StaticInt::from_parts(negative, limbs_src));
    }
}

impl<const N: usize> Clone for Storage<N> {
    fn clone(&self) -> Self {
        match self {
            Storage::Static(s) => Storage::Static(*s),
            Storage::Dynamic(d) => Storage::Dynamic(d.clone()),
        }
    }
}
