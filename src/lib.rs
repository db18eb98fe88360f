//! An arbitrary-precision signed integer with a small-size optimization:
//! values that fit in a compile-time-configured inline limb budget are held
//! without heap allocation; larger values transparently spill to a
//! heap-allocated multi-limb representation.
//!
//! See [`Int`] for the entry point.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

extern crate alloc;

mod cache;
mod dynamic;
mod error;
mod int;
mod limb;
mod ll;
mod static_int;
mod storage;

pub use crate::error::Error;
pub use crate::int::{Int, Int1, Int2, Sign};

#[cfg(feature = "cache")]
pub use crate::cache::clear as clear_cache;
