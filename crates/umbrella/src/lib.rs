//! Fixed-width SIMD abstraction layer with pluggable backends.
//!
//! Numeric code written against the vector, mask, and swizzle types of this
//! crate compiles unchanged against every supported backend: an
//! architecture-specific implementation selected at build time through
//! target-feature detection, or a portable scalar fallback with identical
//! observable behavior.
//!
//! # Related Crates
//!
//! The implementation is split into component crates:
//!
//! - [`lanewise_scalar`](scalar), re-exported as the [`scalar`] module:
//!   the element-type trait layer and the floating-point helpers pinning
//!   down cross-backend corner cases.
//! - [`lanewise_simd`](simd), re-exported as the [`simd`] module: the
//!   vector shape grid ([`simd::v128`], [`simd::v256`]), the predicate
//!   masks ([`simd::mask`]), the lane-index patterns ([`simd::swizzle`]),
//!   and the generic trait layer ([`simd::vector`]).
//!
//! # Feature Flags
//!
//! By default, the `std` and `simd-intrinsics` flags are enabled.
//!
//! ## `std`
//!
//! Enables a dependency on the Rust standard library.
//!
//! ## `libm`
//!
//! Routes the floating-point fallback paths through `libm`, so `no_std`
//! builds without `std` keep the full catalogue. One of `std`/`libm` is
//! required.
//!
//! ## `simd-intrinsics`
//!
//! Uses architecture-specific SIMD intrinsics where the target supports
//! them. Disable to force the portable fallback, e.g. for differential
//! testing of the two.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(clippy::std_instead_of_core)]

#[cfg(feature = "std")]
extern crate std;

pub use scalar;
pub use simd;

pub use simd::{
    Degrade, FloatVector, IntVector, LaneMask, NativeSimd, Pack, Promote, SignedVector, Vector,
};
