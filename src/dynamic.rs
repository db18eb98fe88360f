//! The heap-allocated storage variant of [`crate::Int`] (spec.md §3 "Dynamic
//! handle").

use alloc::vec::Vec;
use core::mem;

use crate::limb::Limb;

/// A heap-allocated limb buffer plus a signed length.
///
/// spec.md describes the Dynamic handle as `{ pointer, allocated-count,
/// signed-length }`. Using [`Vec<Limb>`] rather than a hand-rolled
/// `(NonNull<Limb>, usize)` pair realizes that same shape (`buf.as_ptr()`,
/// `buf.capacity()`) in safe Rust, and lets the limb-buffer cache of
/// spec.md §5 recycle the allocation directly through [`crate::cache`] on
/// [`Drop`] -- see DESIGN.md.
#[derive(Debug)]
pub struct Dynamic {
    pub(crate) size: i32,
    pub(crate) buf: Vec<Limb>,
}

impl Dynamic {
    #[inline(always)]
    pub fn asize(&self) -> usize {
        self.size.unsigned_abs() as usize
    }

    #[inline(always)]
    pub fn is_negative(&self) -> bool {
        self.size < 0
    }

    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.size == 0
    }

    /// The significant limbs, little-endian.
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.buf[..self.asize()]
    }

    /// A read-only sign/magnitude view, for handing to [`crate::ll`].
    #[inline]
    pub fn view(&self) -> (bool, &[Limb]) {
        (self.is_negative(), self.limbs())
    }

    /// Builds a `Dynamic` from a sign/magnitude pair, with at least
    /// `capacity_hint` limbs of backing storage -- this realizes the
    /// promotion controller's "size-hint" contract (spec.md §4.D).
    pub(crate) fn from_magnitude(negative: bool, magnitude: &[Limb], capacity_hint: usize) -> Dynamic {
        let asize = magnitude
            .iter()
            .rposition(|l| !l.is_zero())
            .map_or(0, |i| i + 1);
        let cap = capacity_hint.max(asize).max(1);
        let mut buf = crate::cache::take(cap).unwrap_or_else(|| Vec::with_capacity(cap));
        buf.clear();
        buf.extend_from_slice(&magnitude[..asize]);
        buf.resize(cap, Limb::ZERO);
        let size = if asize == 0 {
            0
        } else if negative {
            -(asize as i32)
        } else {
            asize as i32
        };
        Dynamic { size, buf }
    }

    /// Replaces the magnitude in place, reallocating only if the new
    /// magnitude doesn't fit in the current backing buffer.
    pub(crate) fn assign_magnitude(&mut self, negative: bool, magnitude: &[Limb]) {
        let asize = magnitude
            .iter()
            .rposition(|l| !l.is_zero())
            .map_or(0, |i| i + 1);
        if self.buf.capacity() < asize {
            *self = Dynamic::from_magnitude(negative, magnitude, asize);
            return;
        }
        self.buf.clear();
        self.buf.extend_from_slice(&magnitude[..asize]);
        self.buf.resize(self.buf.capacity(), Limb::ZERO);
        self.size = if asize == 0 {
            0
        } else if negative {
            -(asize as i32)
        } else {
            asize as i32
        };
    }
}

impl Drop for Dynamic {
    fn drop(&mut self) {
        let buf = mem::take(&mut self.buf);
        crate::cache::give(buf);
    }
}

impl Clone for Dynamic {
    fn clone(&self) -> Dynamic {
        Dynamic::from_magnitude(self.is_negative(), self.limbs(), self.buf.capacity())
    }
}
