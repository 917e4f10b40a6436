//! Fixed-width SIMD vector, mask, and swizzle types behind one shared
//! operation contract.
//!
//! Every type in this crate has a fixed lane count and identical observable
//! behavior on every backend: arithmetic, comparisons, memory transfer,
//! gather/scatter, lane permutation, and the masked (per-lane predicated)
//! variant of each operation all produce the same lane values whether they
//! compile down to native vector instructions or to the portable fallback.
//!
//! The 128-bit shapes in [`v128`] each occupy one hardware register on the
//! native backend; the 256-bit shapes in [`v256`] are register pairs, split
//! and rejoined through the [`Pack`](vector::Pack) relationship. Masks live
//! in [`mask`], lane-index patterns in [`swizzle`], and the generic trait
//! layer tying the families together in [`vector`].
//!
//! # Utilizing SIMD Intrinsics
//!
//! If the `simd-intrinsics` feature is enabled, then [architecture-specific
//! SIMD intrinsics] are used to implement vector operations rather than
//! relying on the Rust compiler's auto-vectorization. SIMD intrinsics are
//! used on the following target architectures when the corresponding
//! [target features] are enabled:
//!
//! - `x86` and `x86-64`: requires `sse2`
//!   - Note that common targets such as `x86_64-unknown-linux-gnu` and
//!     `x86_64-pc-windows-msvc` already enable the `sse2` target feature by
//!     default.
//!
//! The `simd-intrinsics` feature flag is provided to allow testing the
//! fallback implementation of SIMD operations which doesn't use SIMD
//! intrinsics; running a test suite with and without the flag exercises the
//! same contract on both backends.
//!
//! Operations with no single native instruction (64-bit ordering, integer
//! division, gather/scatter, horizontal reductions, width and category
//! conversions) decompose into several instructions or a lane-at-a-time
//! loop; their results are identical to the fallback's by construction.
//!
//! # Feature Flags
//!
//! - `std` (default): enables `lanewise-scalar/std`.
//! - `libm`: enables `lanewise-scalar/libm` so the floating-point fallback
//!   paths work on `no_std` builds. One of `std`/`libm` is required for the
//!   floating-point shapes when intrinsics are unavailable.
//! - `simd-intrinsics` (default): see above.
//!
//! [architecture-specific SIMD intrinsics]: core::arch
//! [target features]: https://doc.rust-lang.org/reference/attributes/codegen.html#available-features

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::exhaustive_enums)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::std_instead_of_core)]

#[cfg(feature = "std")]
extern crate std;

mod catalogue;
mod cfg;
mod convert;
mod intrinsics;

pub mod mask;
pub mod swizzle;
pub mod v128;
pub mod v256;
pub mod vector;

pub use vector::{
    Degrade, FloatVector, IntVector, LaneMask, NativeSimd, Pack, Promote, SignedVector, Vector,
};
