//! Scalar element support for `lanewise`.
//!
//! This crate defines the element-type trait layer the vector types of
//! [`lanewise-simd`] are generic over: which machine numeric types can be a
//! vector lane, how each maps to its signed/unsigned counterpart and to the
//! next element width up or down. It also carries a handful of free functions
//! pinning down floating-point corner cases (`min`/`max` ordering,
//! round-half-to-even) so that every backend computes the same lane values.
//!
//! # Feature Flags
//!
//! - `std` (default): enables `num-traits/std`.
//! - `libm`: enables `num-traits/libm`, providing the [`num_traits::Float`]
//!   methods on `no_std` builds. One of `std` or `libm` must be enabled for
//!   the floating-point element types to be usable.
//!
//! [`lanewise-simd`]: https://github.com/lanewise-rs/lanewise

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![forbid(unsafe_code)]
#![deny(clippy::std_instead_of_core)]

#[cfg(feature = "std")]
extern crate std;

mod element;
mod float;

pub use element::{Float, Int, Narrow, Scalar, Widen};
pub use float::{
    f32_max, f32_min, f32_round_ties_even, f64_max, f64_min, f64_round_ties_even,
};
