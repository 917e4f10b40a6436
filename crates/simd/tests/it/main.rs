//! Unit tests for [`lanewise_simd`].
//!
//! Every module exercises the public contract only, so running the suite
//! with and without the `simd-intrinsics` feature checks both backends
//! against the same expectations.

#![no_std]
#![deny(clippy::std_instead_of_core)]

#[cfg(feature = "std")]
extern crate std;

mod arith;
mod convert;
mod gather;
mod generic;
mod mask;
mod masked;
