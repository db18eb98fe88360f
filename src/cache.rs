//! Thread-local limb-buffer cache (spec.md §3 "Limb-buffer cache", §5
//! "Concurrency / Resource Model").
//!
//! Every buffer that flows through [`take`]/[`give`] is a [`Vec<Limb>`]
//! allocated at an exact capacity; the cache is keyed by that capacity, so a
//! request for `n` limbs only ever returns a buffer originally sized for
//! exactly `n`.

use alloc::vec::Vec;

use crate::limb::Limb;

/// Largest size class (in limbs) the cache tracks. Buffers larger than this
/// are allocated/freed directly, same as when the `cache` feature is off.
const MAX_CACHED_LIMBS: usize = 16;
/// Maximum number of buffers retained per size class.
const MAX_CACHED_PER_SIZE: usize = 64;

struct Slots {
    // `slots[n]` holds buffers of exactly `n + 1` limbs.
    slots: [Vec<Vec<Limb>>; MAX_CACHED_LIMBS],
}

impl Slots {
    fn new() -> Slots {
        Slots {
            slots: Default::default(),
        }
    }

    fn take(&mut self, size: usize) -> Option<Vec<Limb>> {
        if size == 0 || size > MAX_CACHED_LIMBS {
            return None;
        }
        self.slots[size - 1].pop()
    }

    fn give(&mut self, mut buf: Vec<Limb>) {
        let size = buf.capacity();
        if size == 0 || size > MAX_CACHED_LIMBS {
            return;
        }
        let slot = &mut self.slots[size - 1];
        if slot.len() < MAX_CACHED_PER_SIZE {
            buf.clear();
            slot.push(buf);
        }
    }

    fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(all(feature = "std", feature = "cache"))] {
        use core::cell::RefCell;

        std::thread_local! {
            static CACHE: RefCell<Slots> = RefCell::new(Slots::new());
        }

        /// Pops a cached buffer of exactly `size` limbs, if one is available.
        pub(crate) fn take(size: usize) -> Option<Vec<Limb>> {
            CACHE.with(|c| c.borrow_mut().take(size))
        }

        /// Returns a buffer to the cache for reuse.
        pub(crate) fn give(buf: Vec<Limb>) {
            CACHE.with(|c| c.borrow_mut().give(buf));
        }

        /// Drops every cached buffer on the current thread.
        pub fn clear() {
            CACHE.with(|c| c.borrow_mut().clear());
        }
    } else if #[cfg(feature = "cache")] {
        // No `std` means no portable thread-local storage. spec.md §5
        // explicitly allows a single process-wide cache guarded by a mutex
        // as a fallback; we use a spinlock since `no_std` has no mutex.
        use core::sync::atomic::{AtomicBool, Ordering};

        static LOCK: AtomicBool = AtomicBool::new(false);
        static mut GLOBAL: Option<Slots> = None;

        struct Guard;
        impl Drop for Guard {
            fn drop(&mut self) {
                LOCK.store(false, Ordering::Release);
            }
        }

        fn lock() -> Guard {
            while LOCK
                .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
                .is_err()
            {
                core::hint::spin_loop();
            }
            Guard
        }

        fn with_cache<R>(f: impl FnOnce(&mut Slots) -> R) -> R {
            let _guard = lock();
            // SAFETY: `LOCK` ensures exclusive access to `GLOBAL`.
            #[allow(static_mut_refs)]
            unsafe {
                let cache = GLOBAL.get_or_insert_with(Slots::new);
                f(cache)
            }
        }

        pub(crate) fn take(size: usize) -> Option<Vec<Limb>> {
            with_cache(|c| c.take(size))
        }

        pub(crate) fn give(buf: Vec<Limb>) {
            with_cache(|c| c.give(buf));
        }

        /// Drops every cached buffer.
        pub fn clear() {
            with_cache(|c| c.clear());
        }
    } else {
        // Cache disabled: promote/demote allocate/free directly.
        pub(crate) fn take(_size: usize) -> Option<Vec<Limb>> {
            None
        }

        pub(crate) fn give(_buf: Vec<Limb>) {}

        /// No-op: the limb-buffer cache is disabled (`cache` feature is off).
        pub fn clear() {}
    }
}

#[cfg(all(test, feature = "std", feature = "cache"))]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_cache() {
        clear();
        let buf: Vec<Limb> = Vec::with_capacity(4);
        assert_eq!(buf.capacity(), 4);
        give(buf);
        let back = take(4).expect("buffer should have been cached");
        assert_eq!(back.capacity(), 4);
        assert!(take(4).is_none());
    }

    #[test]
    fn oversized_buffers_are_not_cached() {
        clear();
        let buf: Vec<Limb> = Vec::with_capacity(MAX_CACHED_LIMBS + 1);
        give(buf);
        assert!(take(MAX_CACHED_LIMBS + 1).is_none());
    }
}
