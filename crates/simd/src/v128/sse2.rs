//! Implements the 128-bit vector operations for `x86` and `x86_64` platforms,
//! utilizing [SSE2] intrinsics.
//!
//! Operations without a single SSE2 instruction are assembled from several
//! (the private helpers below), or fall back to a lane-at-a-time loop where
//! the instruction set offers nothing useful (64-bit ordering and multiply).
//! Either way the observable lane values match the portable fallback.
//!
//! [SSE2]: https://en.wikipedia.org/wiki/SSE2

use crate::intrinsics::sse2::{self, __m128, __m128d, __m128i};
use crate::mask::{Mask2, Mask4};
use crate::v128;

pub(in crate::v128) type U8x16 = __m128i;
pub(in crate::v128) type I8x16 = __m128i;
pub(in crate::v128) type U16x8 = __m128i;
pub(in crate::v128) type I16x8 = __m128i;
pub(in crate::v128) type U32x4 = __m128i;
pub(in crate::v128) type I32x4 = __m128i;
pub(in crate::v128) type U64x2 = __m128i;
pub(in crate::v128) type I64x2 = __m128i;
pub(in crate::v128) type F32x4 = __m128;
pub(in crate::v128) type F64x2 = __m128d;
pub(in crate::v128) type V128 = __m128i;

// Register-level helpers shared by the shape implementations. None of these
// are part of the public contract; they exist because SSE2 lacks a single
// instruction for the operation they compose.

fn zero128() -> __m128i {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe { sse2::_mm_setzero_si128() }
}

fn not128(value: __m128i) -> __m128i {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe { sse2::_mm_xor_si128(value, sse2::_mm_set1_epi32(-1)) }
}

/// Per-bit select: `mask ? if_true : if_false`.
fn select(mask: __m128i, if_true: __m128i, if_false: __m128i) -> __m128i {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe {
        sse2::_mm_or_si128(
            sse2::_mm_and_si128(mask, if_true),
            sse2::_mm_andnot_si128(mask, if_false),
        )
    }
}

fn select_ps(mask: __m128, if_true: __m128, if_false: __m128) -> __m128 {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe {
        sse2::_mm_or_ps(
            sse2::_mm_and_ps(mask, if_true),
            sse2::_mm_andnot_ps(mask, if_false),
        )
    }
}

fn select_pd(mask: __m128d, if_true: __m128d, if_false: __m128d) -> __m128d {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe {
        sse2::_mm_or_pd(
            sse2::_mm_and_pd(mask, if_true),
            sse2::_mm_andnot_pd(mask, if_false),
        )
    }
}

/// Places a shift count in the low quadword of a register, zero-extended, as
/// the `_mm_sll_*`/`_mm_srl_*`/`_mm_sra_*` family expects.
fn shift_count(count: u32) -> __m128i {
    // SAFETY: module compiled only when `sse2` is enabled. `_mm_cvtsi32_si128`
    // zeroes the upper lanes, so the count is never sign-extended.
    unsafe { sse2::_mm_cvtsi32_si128(count as i32) }
}

macro_rules! cmp_wrappers {
    ($($wrapper:ident => $intrinsic:ident;)*) => {$(
        fn $wrapper(lhs: __m128i, rhs: __m128i) -> __m128i {
            // SAFETY: module compiled only when `sse2` is enabled.
            unsafe { sse2::$intrinsic(lhs, rhs) }
        }
    )*};
}

cmp_wrappers! {
    cmpeq_epi8 => _mm_cmpeq_epi8;
    cmpeq_epi16 => _mm_cmpeq_epi16;
    cmpeq_epi32 => _mm_cmpeq_epi32;
    cmpgt_epi8 => _mm_cmpgt_epi8;
    cmpgt_epi16 => _mm_cmpgt_epi16;
    cmpgt_epi32 => _mm_cmpgt_epi32;
}

/// Unsigned compare via the sign-bias trick: flipping the sign bit maps the
/// unsigned order onto the signed order.
fn cmpgt_epu8(lhs: __m128i, rhs: __m128i) -> __m128i {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe {
        let bias = sse2::_mm_set1_epi8(i8::MIN);
        cmpgt_epi8(sse2::_mm_xor_si128(lhs, bias), sse2::_mm_xor_si128(rhs, bias))
    }
}

fn cmpgt_epu16(lhs: __m128i, rhs: __m128i) -> __m128i {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe {
        let bias = sse2::_mm_set1_epi16(i16::MIN);
        cmpgt_epi16(sse2::_mm_xor_si128(lhs, bias), sse2::_mm_xor_si128(rhs, bias))
    }
}

fn cmpgt_epu32(lhs: __m128i, rhs: __m128i) -> __m128i {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe {
        let bias = sse2::_mm_set1_epi32(i32::MIN);
        cmpgt_epi32(sse2::_mm_xor_si128(lhs, bias), sse2::_mm_xor_si128(rhs, bias))
    }
}

/// 64-bit equality from 32-bit equality: both halves of a quadword must
/// match.
fn cmpeq_epi64(lhs: __m128i, rhs: __m128i) -> __m128i {
    let eq32 = cmpeq_epi32(lhs, rhs);
    // SAFETY: module compiled only when `sse2` is enabled.
    let swapped = unsafe { sse2::_mm_shuffle_epi32::<0b10_11_00_01>(eq32) };
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe { sse2::_mm_and_si128(eq32, swapped) }
}

/// 8-bit multiply from 16-bit multiplies of the even and odd byte lanes.
fn mullo_epi8(lhs: __m128i, rhs: __m128i) -> __m128i {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe {
        let even = sse2::_mm_mullo_epi16(lhs, rhs);
        let odd = sse2::_mm_mullo_epi16(
            sse2::_mm_srli_epi16::<8>(lhs),
            sse2::_mm_srli_epi16::<8>(rhs),
        );
        sse2::_mm_or_si128(
            sse2::_mm_slli_epi16::<8>(odd),
            sse2::_mm_and_si128(even, sse2::_mm_set1_epi16(0xFF)),
        )
    }
}

/// 32-bit multiply from the 32×32→64 even-lane multiplier.
fn mullo_epi32(lhs: __m128i, rhs: __m128i) -> __m128i {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe {
        let even = sse2::_mm_mul_epu32(lhs, rhs);
        let odd = sse2::_mm_mul_epu32(
            sse2::_mm_srli_si128::<4>(lhs),
            sse2::_mm_srli_si128::<4>(rhs),
        );
        sse2::_mm_unpacklo_epi32(
            sse2::_mm_shuffle_epi32::<0b00_00_10_00>(even),
            sse2::_mm_shuffle_epi32::<0b00_00_10_00>(odd),
        )
    }
}

fn sll_epi16(value: __m128i, count: u32) -> __m128i {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe { sse2::_mm_sll_epi16(value, shift_count(count)) }
}

fn srl_epi16(value: __m128i, count: u32) -> __m128i {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe { sse2::_mm_srl_epi16(value, shift_count(count)) }
}

fn sra_epi16(value: __m128i, count: u32) -> __m128i {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe { sse2::_mm_sra_epi16(value, shift_count(count)) }
}

fn sll_epi32(value: __m128i, count: u32) -> __m128i {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe { sse2::_mm_sll_epi32(value, shift_count(count)) }
}

fn srl_epi32(value: __m128i, count: u32) -> __m128i {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe { sse2::_mm_srl_epi32(value, shift_count(count)) }
}

fn sra_epi32(value: __m128i, count: u32) -> __m128i {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe { sse2::_mm_sra_epi32(value, shift_count(count)) }
}

fn sll_epi64(value: __m128i, count: u32) -> __m128i {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe { sse2::_mm_sll_epi64(value, shift_count(count)) }
}

fn srl_epi64(value: __m128i, count: u32) -> __m128i {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe { sse2::_mm_srl_epi64(value, shift_count(count)) }
}

/// 8-bit logical left shift from the 16-bit shifter plus a byte mask.
fn sll_epi8(value: __m128i, count: u32) -> __m128i {
    if count >= 8 {
        return zero128();
    }
    #[allow(clippy::cast_possible_truncation)]
    let keep = ((0xFFu32 << count) & 0xFF) as u8 as i8;
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe { sse2::_mm_and_si128(sll_epi16(value, count), sse2::_mm_set1_epi8(keep)) }
}

/// 8-bit logical right shift from the 16-bit shifter plus a byte mask.
fn srl_epi8(value: __m128i, count: u32) -> __m128i {
    if count >= 8 {
        return zero128();
    }
    #[allow(clippy::cast_possible_truncation)]
    let keep = (0xFFu32 >> count) as u8 as i8;
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe { sse2::_mm_and_si128(srl_epi16(value, count), sse2::_mm_set1_epi8(keep)) }
}

/// 8-bit arithmetic right shift: logical shift, then sign-extend by the
/// xor-and-subtract bias trick.
fn sra_epi8(value: __m128i, count: u32) -> __m128i {
    let count = count.min(7);
    let shifted = srl_epi8(value, count);
    #[allow(clippy::cast_possible_truncation)]
    let bias = (0x80u32 >> count) as u8 as i8;
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe {
        let bias = sse2::_mm_set1_epi8(bias);
        sse2::_mm_sub_epi8(sse2::_mm_xor_si128(shifted, bias), bias)
    }
}

macro_rules! int_common {
    ($name:ident = [$int:ty; $lanes:literal], mask: $mask:ident) => {
        impl v128::$name {
            pub(in crate::v128) fn from_lanes_impl(lanes: [$int; $lanes]) -> __m128i {
                // SAFETY: module compiled only when `sse2` is enabled; the
                // load allows unaligned memory.
                unsafe { sse2::_mm_loadu_si128(lanes.as_ptr() as *const __m128i) }
            }

            pub(in crate::v128) fn into_lanes_impl(vec: __m128i) -> [$int; $lanes] {
                let mut lanes = [0 as $int; $lanes];
                // SAFETY: module compiled only when `sse2` is enabled; the
                // store allows unaligned memory.
                unsafe { sse2::_mm_storeu_si128(lanes.as_mut_ptr() as *mut __m128i, vec) };
                lanes
            }

            pub(in crate::v128) unsafe fn load_impl(src: *const $int) -> __m128i {
                // SAFETY: module compiled only when `sse2` is enabled; the
                // caller guarantees `src` is readable, and the load allows
                // unaligned memory.
                unsafe { sse2::_mm_loadu_si128(src as *const __m128i) }
            }

            pub(in crate::v128) unsafe fn loada_impl(src: *const $int) -> __m128i {
                // SAFETY: module compiled only when `sse2` is enabled; the
                // caller guarantees `src` is readable and 16-byte aligned.
                unsafe { sse2::_mm_load_si128(src as *const __m128i) }
            }

            pub(in crate::v128) unsafe fn store_impl(vec: __m128i, dst: *mut $int) {
                // SAFETY: module compiled only when `sse2` is enabled; the
                // caller guarantees `dst` is writable, and the store allows
                // unaligned memory.
                unsafe { sse2::_mm_storeu_si128(dst as *mut __m128i, vec) }
            }

            pub(in crate::v128) unsafe fn storea_impl(vec: __m128i, dst: *mut $int) {
                // SAFETY: module compiled only when `sse2` is enabled; the
                // caller guarantees `dst` is writable and 16-byte aligned.
                unsafe { sse2::_mm_store_si128(dst as *mut __m128i, vec) }
            }

            pub(in crate::v128) fn and_impl(lhs: __m128i, rhs: __m128i) -> __m128i {
                // SAFETY: module compiled only when `sse2` is enabled.
                unsafe { sse2::_mm_and_si128(lhs, rhs) }
            }

            pub(in crate::v128) fn or_impl(lhs: __m128i, rhs: __m128i) -> __m128i {
                // SAFETY: module compiled only when `sse2` is enabled.
                unsafe { sse2::_mm_or_si128(lhs, rhs) }
            }

            pub(in crate::v128) fn xor_impl(lhs: __m128i, rhs: __m128i) -> __m128i {
                // SAFETY: module compiled only when `sse2` is enabled.
                unsafe { sse2::_mm_xor_si128(lhs, rhs) }
            }

            pub(in crate::v128) fn not_impl(vec: __m128i) -> __m128i {
                not128(vec)
            }

            pub(in crate::v128) fn blend_impl(
                lhs: __m128i,
                mask: &crate::mask::$mask,
                rhs: __m128i,
            ) -> __m128i {
                select(mask.0, rhs, lhs)
            }
        }

        impl From<v128::$name> for v128::V128 {
            #[doc = concat!("Reinterprets the bits of the [`", stringify!($name), "`].")]
            #[inline]
            fn from(vec: v128::$name) -> Self {
                Self(vec.0)
            }
        }

        impl From<v128::V128> for v128::$name {
            #[doc = concat!("Reinterprets the contents of the [`V128`](v128::V128) as ")]
            #[doc = concat!(stringify!($lanes), " lanes of packed [`", stringify!($int), "`] values.")]
            #[inline]
            fn from(vec: v128::V128) -> Self {
                Self(vec.0)
            }
        }
    };
}

int_common!(U8x16 = [u8; 16], mask: Mask16);
int_common!(I8x16 = [i8; 16], mask: Mask16);
int_common!(U16x8 = [u16; 8], mask: Mask8);
int_common!(I16x8 = [i16; 8], mask: Mask8);
int_common!(U32x4 = [u32; 4], mask: Mask4);
int_common!(I32x4 = [i32; 4], mask: Mask4);
int_common!(U64x2 = [u64; 2], mask: Mask2);
int_common!(I64x2 = [i64; 2], mask: Mask2);

macro_rules! int_width {
    ($name:ident = $int:ty, set1: $set1:ident as $cast:ty, add: $add:ident, sub: $sub:ident) => {
        impl v128::$name {
            pub(in crate::v128) fn splat_impl(value: $int) -> __m128i {
                // SAFETY: module compiled only when `sse2` is enabled.
                unsafe { sse2::$set1(value as $cast) }
            }

            pub(in crate::v128) fn add_impl(lhs: __m128i, rhs: __m128i) -> __m128i {
                // SAFETY: module compiled only when `sse2` is enabled.
                unsafe { sse2::$add(lhs, rhs) }
            }

            pub(in crate::v128) fn sub_impl(lhs: __m128i, rhs: __m128i) -> __m128i {
                // SAFETY: module compiled only when `sse2` is enabled.
                unsafe { sse2::$sub(lhs, rhs) }
            }
        }
    };
}

int_width!(U8x16 = u8, set1: _mm_set1_epi8 as i8, add: _mm_add_epi8, sub: _mm_sub_epi8);
int_width!(I8x16 = i8, set1: _mm_set1_epi8 as i8, add: _mm_add_epi8, sub: _mm_sub_epi8);
int_width!(U16x8 = u16, set1: _mm_set1_epi16 as i16, add: _mm_add_epi16, sub: _mm_sub_epi16);
int_width!(I16x8 = i16, set1: _mm_set1_epi16 as i16, add: _mm_add_epi16, sub: _mm_sub_epi16);
int_width!(U32x4 = u32, set1: _mm_set1_epi32 as i32, add: _mm_add_epi32, sub: _mm_sub_epi32);
int_width!(I32x4 = i32, set1: _mm_set1_epi32 as i32, add: _mm_add_epi32, sub: _mm_sub_epi32);
int_width!(U64x2 = u64, set1: _mm_set1_epi64x as i64, add: _mm_add_epi64, sub: _mm_sub_epi64);
int_width!(I64x2 = i64, set1: _mm_set1_epi64x as i64, add: _mm_add_epi64, sub: _mm_sub_epi64);

macro_rules! int_mul {
    ($name:ident, $mul:path) => {
        impl v128::$name {
            pub(in crate::v128) fn mul_impl(lhs: __m128i, rhs: __m128i) -> __m128i {
                $mul(lhs, rhs)
            }
        }
    };
}

fn mullo_epi16(lhs: __m128i, rhs: __m128i) -> __m128i {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe { sse2::_mm_mullo_epi16(lhs, rhs) }
}

int_mul!(U8x16, mullo_epi8);
int_mul!(I8x16, mullo_epi8);
int_mul!(U16x8, mullo_epi16);
int_mul!(I16x8, mullo_epi16);
int_mul!(U32x4, mullo_epi32);
int_mul!(I32x4, mullo_epi32);

macro_rules! int_mul_lanes {
    ($name:ident = $int:ty) => {
        impl v128::$name {
            /// No 64-bit lane multiplier exists in SSE2; decompose.
            pub(in crate::v128) fn mul_impl(lhs: __m128i, rhs: __m128i) -> __m128i {
                let lhs = Self::into_lanes_impl(lhs);
                let rhs = Self::into_lanes_impl(rhs);
                Self::from_lanes_impl(core::array::from_fn(|i| lhs[i].wrapping_mul(rhs[i])))
            }
        }
    };
}

int_mul_lanes!(U64x2 = u64);
int_mul_lanes!(I64x2 = i64);

macro_rules! int_minmax_native {
    ($name:ident, min: $min:ident, max: $max:ident) => {
        impl v128::$name {
            pub(in crate::v128) fn min_impl(lhs: __m128i, rhs: __m128i) -> __m128i {
                // SAFETY: module compiled only when `sse2` is enabled.
                unsafe { sse2::$min(lhs, rhs) }
            }

            pub(in crate::v128) fn max_impl(lhs: __m128i, rhs: __m128i) -> __m128i {
                // SAFETY: module compiled only when `sse2` is enabled.
                unsafe { sse2::$max(lhs, rhs) }
            }
        }
    };
}

int_minmax_native!(U8x16, min: _mm_min_epu8, max: _mm_max_epu8);
int_minmax_native!(I16x8, min: _mm_min_epi16, max: _mm_max_epi16);

macro_rules! int_minmax_select {
    ($name:ident, gt: $gt:path) => {
        impl v128::$name {
            pub(in crate::v128) fn min_impl(lhs: __m128i, rhs: __m128i) -> __m128i {
                select($gt(lhs, rhs), rhs, lhs)
            }

            pub(in crate::v128) fn max_impl(lhs: __m128i, rhs: __m128i) -> __m128i {
                select($gt(lhs, rhs), lhs, rhs)
            }
        }
    };
}

int_minmax_select!(I8x16, gt: cmpgt_epi8);
int_minmax_select!(U16x8, gt: cmpgt_epu16);
int_minmax_select!(U32x4, gt: cmpgt_epu32);
int_minmax_select!(I32x4, gt: cmpgt_epi32);

macro_rules! int_minmax_lanes {
    ($name:ident = $int:ty) => {
        impl v128::$name {
            /// No 64-bit compare exists in SSE2; decompose.
            pub(in crate::v128) fn min_impl(lhs: __m128i, rhs: __m128i) -> __m128i {
                let lhs = Self::into_lanes_impl(lhs);
                let rhs = Self::into_lanes_impl(rhs);
                Self::from_lanes_impl(core::array::from_fn(|i| core::cmp::min(lhs[i], rhs[i])))
            }

            pub(in crate::v128) fn max_impl(lhs: __m128i, rhs: __m128i) -> __m128i {
                let lhs = Self::into_lanes_impl(lhs);
                let rhs = Self::into_lanes_impl(rhs);
                Self::from_lanes_impl(core::array::from_fn(|i| core::cmp::max(lhs[i], rhs[i])))
            }
        }
    };
}

int_minmax_lanes!(U64x2 = u64);
int_minmax_lanes!(I64x2 = i64);

macro_rules! int_cmp {
    ($name:ident, mask: $mask:ident, eq: $eq:path, gt: $gt:path) => {
        impl v128::$name {
            pub(in crate::v128) fn cmp_eq_impl(lhs: __m128i, rhs: __m128i) -> crate::mask::$mask {
                crate::mask::$mask($eq(lhs, rhs))
            }

            pub(in crate::v128) fn cmp_ne_impl(lhs: __m128i, rhs: __m128i) -> crate::mask::$mask {
                crate::mask::$mask(not128($eq(lhs, rhs)))
            }

            pub(in crate::v128) fn cmp_gt_impl(lhs: __m128i, rhs: __m128i) -> crate::mask::$mask {
                crate::mask::$mask($gt(lhs, rhs))
            }

            pub(in crate::v128) fn cmp_lt_impl(lhs: __m128i, rhs: __m128i) -> crate::mask::$mask {
                crate::mask::$mask($gt(rhs, lhs))
            }

            pub(in crate::v128) fn cmp_le_impl(lhs: __m128i, rhs: __m128i) -> crate::mask::$mask {
                crate::mask::$mask(not128($gt(lhs, rhs)))
            }

            pub(in crate::v128) fn cmp_ge_impl(lhs: __m128i, rhs: __m128i) -> crate::mask::$mask {
                crate::mask::$mask(not128($gt(rhs, lhs)))
            }
        }
    };
}

int_cmp!(U8x16, mask: Mask16, eq: cmpeq_epi8, gt: cmpgt_epu8);
int_cmp!(I8x16, mask: Mask16, eq: cmpeq_epi8, gt: cmpgt_epi8);
int_cmp!(U16x8, mask: Mask8, eq: cmpeq_epi16, gt: cmpgt_epu16);
int_cmp!(I16x8, mask: Mask8, eq: cmpeq_epi16, gt: cmpgt_epi16);
int_cmp!(U32x4, mask: Mask4, eq: cmpeq_epi32, gt: cmpgt_epu32);
int_cmp!(I32x4, mask: Mask4, eq: cmpeq_epi32, gt: cmpgt_epi32);

macro_rules! int_cmp_lanes64 {
    ($name:ident = $int:ty) => {
        impl v128::$name {
            pub(in crate::v128) fn cmp_eq_impl(lhs: __m128i, rhs: __m128i) -> Mask2 {
                Mask2(cmpeq_epi64(lhs, rhs))
            }

            pub(in crate::v128) fn cmp_ne_impl(lhs: __m128i, rhs: __m128i) -> Mask2 {
                Mask2(not128(cmpeq_epi64(lhs, rhs)))
            }

            /// No 64-bit ordered compare exists in SSE2; decompose.
            pub(in crate::v128) fn cmp_gt_impl(lhs: __m128i, rhs: __m128i) -> Mask2 {
                let lhs = Self::into_lanes_impl(lhs);
                let rhs = Self::into_lanes_impl(rhs);
                Mask2::from_lanes(core::array::from_fn(|i| lhs[i] > rhs[i]))
            }

            pub(in crate::v128) fn cmp_lt_impl(lhs: __m128i, rhs: __m128i) -> Mask2 {
                Self::cmp_gt_impl(rhs, lhs)
            }

            pub(in crate::v128) fn cmp_le_impl(lhs: __m128i, rhs: __m128i) -> Mask2 {
                Mask2(not128(Self::cmp_gt_impl(lhs, rhs).0))
            }

            pub(in crate::v128) fn cmp_ge_impl(lhs: __m128i, rhs: __m128i) -> Mask2 {
                Mask2(not128(Self::cmp_gt_impl(rhs, lhs).0))
            }
        }
    };
}

int_cmp_lanes64!(U64x2 = u64);
int_cmp_lanes64!(I64x2 = i64);

macro_rules! int_shift {
    ($name:ident, shl: $shl:path, shr: $shr:path) => {
        impl v128::$name {
            pub(in crate::v128) fn shl_impl(vec: __m128i, count: u32) -> __m128i {
                $shl(vec, count)
            }

            pub(in crate::v128) fn shr_impl(vec: __m128i, count: u32) -> __m128i {
                $shr(vec, count)
            }
        }
    };
}

int_shift!(U8x16, shl: sll_epi8, shr: srl_epi8);
int_shift!(I8x16, shl: sll_epi8, shr: sra_epi8);
int_shift!(U16x8, shl: sll_epi16, shr: srl_epi16);
int_shift!(I16x8, shl: sll_epi16, shr: sra_epi16);
int_shift!(U32x4, shl: sll_epi32, shr: srl_epi32);
int_shift!(I32x4, shl: sll_epi32, shr: sra_epi32);
int_shift!(U64x2, shl: sll_epi64, shr: srl_epi64);

impl v128::I64x2 {
    pub(in crate::v128) fn shl_impl(vec: __m128i, count: u32) -> __m128i {
        sll_epi64(vec, count)
    }

    /// No 64-bit arithmetic shifter exists in SSE2; decompose.
    pub(in crate::v128) fn shr_impl(vec: __m128i, count: u32) -> __m128i {
        let lanes = Self::into_lanes_impl(vec);
        let count = core::cmp::min(count, 63);
        Self::from_lanes_impl(lanes.map(|lane| lane >> count))
    }
}

impl v128::I32x4 {
    pub(in crate::v128) fn to_f32_impl(vec: __m128i) -> __m128 {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_cvtepi32_ps(vec) }
    }
}

// Floating-point shapes. The sign-bit mask is the only constant the
// compositions below need besides the rounding magic value.

fn sign_mask_ps() -> __m128 {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe { sse2::_mm_castsi128_ps(sse2::_mm_set1_epi32(i32::MIN)) }
}

fn sign_mask_pd() -> __m128d {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe { sse2::_mm_castsi128_pd(sse2::_mm_set1_epi64x(i64::MIN)) }
}

/// Round to nearest, ties to even, via the 2^23 magic constant. Matches
/// `lanewise_scalar::f32_round_ties_even` operation for operation.
fn round_ps(value: __m128) -> __m128 {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe {
        let magic = sse2::_mm_set1_ps(8_388_608.0);
        let sign = sse2::_mm_and_ps(value, sign_mask_ps());
        let signed_magic = sse2::_mm_or_ps(magic, sign);
        let rounded = sse2::_mm_sub_ps(sse2::_mm_add_ps(value, signed_magic), signed_magic);
        // The magic trick loses the sign of a zero result.
        let rounded = sse2::_mm_or_ps(rounded, sign);
        // Values at or past 2^23 (and NaN) are already integral.
        let small = sse2::_mm_cmplt_ps(sse2::_mm_andnot_ps(sign_mask_ps(), value), magic);
        select_ps(small, rounded, value)
    }
}

fn floor_ps(value: __m128) -> __m128 {
    let rounded = round_ps(value);
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe {
        let excess = sse2::_mm_cmpgt_ps(rounded, value);
        sse2::_mm_sub_ps(rounded, sse2::_mm_and_ps(excess, sse2::_mm_set1_ps(1.0)))
    }
}

fn ceil_ps(value: __m128) -> __m128 {
    let rounded = round_ps(value);
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe {
        let deficit = sse2::_mm_cmplt_ps(rounded, value);
        sse2::_mm_add_ps(rounded, sse2::_mm_and_ps(deficit, sse2::_mm_set1_ps(1.0)))
    }
}

fn trunc_ps(value: __m128) -> __m128 {
    let rounded = round_ps(value);
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe {
        let sign = sse2::_mm_and_ps(value, sign_mask_ps());
        let grew = sse2::_mm_cmpgt_ps(
            sse2::_mm_andnot_ps(sign_mask_ps(), rounded),
            sse2::_mm_andnot_ps(sign_mask_ps(), value),
        );
        let adjust = sse2::_mm_and_ps(grew, sse2::_mm_or_ps(sse2::_mm_set1_ps(1.0), sign));
        sse2::_mm_sub_ps(rounded, adjust)
    }
}

/// [`round_ps`] with the `f64` magic constant 2^52.
fn round_pd(value: __m128d) -> __m128d {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe {
        let magic = sse2::_mm_set1_pd(4_503_599_627_370_496.0);
        let sign = sse2::_mm_and_pd(value, sign_mask_pd());
        let signed_magic = sse2::_mm_or_pd(magic, sign);
        let rounded = sse2::_mm_sub_pd(sse2::_mm_add_pd(value, signed_magic), signed_magic);
        let rounded = sse2::_mm_or_pd(rounded, sign);
        let small = sse2::_mm_cmplt_pd(sse2::_mm_andnot_pd(sign_mask_pd(), value), magic);
        select_pd(small, rounded, value)
    }
}

fn floor_pd(value: __m128d) -> __m128d {
    let rounded = round_pd(value);
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe {
        let excess = sse2::_mm_cmpgt_pd(rounded, value);
        sse2::_mm_sub_pd(rounded, sse2::_mm_and_pd(excess, sse2::_mm_set1_pd(1.0)))
    }
}

fn ceil_pd(value: __m128d) -> __m128d {
    let rounded = round_pd(value);
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe {
        let deficit = sse2::_mm_cmplt_pd(rounded, value);
        sse2::_mm_add_pd(rounded, sse2::_mm_and_pd(deficit, sse2::_mm_set1_pd(1.0)))
    }
}

fn trunc_pd(value: __m128d) -> __m128d {
    let rounded = round_pd(value);
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe {
        let sign = sse2::_mm_and_pd(value, sign_mask_pd());
        let grew = sse2::_mm_cmpgt_pd(
            sse2::_mm_andnot_pd(sign_mask_pd(), rounded),
            sse2::_mm_andnot_pd(sign_mask_pd(), value),
        );
        let adjust = sse2::_mm_and_pd(grew, sse2::_mm_or_pd(sse2::_mm_set1_pd(1.0), sign));
        sse2::_mm_sub_pd(rounded, adjust)
    }
}

impl v128::F32x4 {
    pub(in crate::v128) fn splat_impl(value: f32) -> __m128 {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_set1_ps(value) }
    }

    pub(in crate::v128) fn from_lanes_impl(lanes: [f32; 4]) -> __m128 {
        // SAFETY: module compiled only when `sse2` is enabled; the load
        // allows unaligned memory.
        unsafe { sse2::_mm_loadu_ps(lanes.as_ptr()) }
    }

    pub(in crate::v128) fn into_lanes_impl(vec: __m128) -> [f32; 4] {
        let mut lanes = [0f32; 4];
        // SAFETY: module compiled only when `sse2` is enabled; the store
        // allows unaligned memory.
        unsafe { sse2::_mm_storeu_ps(lanes.as_mut_ptr(), vec) };
        lanes
    }

    pub(in crate::v128) unsafe fn load_impl(src: *const f32) -> __m128 {
        // SAFETY: module compiled only when `sse2` is enabled; the caller
        // guarantees `src` is readable, and the load allows unaligned memory.
        unsafe { sse2::_mm_loadu_ps(src) }
    }

    pub(in crate::v128) unsafe fn loada_impl(src: *const f32) -> __m128 {
        // SAFETY: module compiled only when `sse2` is enabled; the caller
        // guarantees `src` is readable and 16-byte aligned.
        unsafe { sse2::_mm_load_ps(src) }
    }

    pub(in crate::v128) unsafe fn store_impl(vec: __m128, dst: *mut f32) {
        // SAFETY: module compiled only when `sse2` is enabled; the caller
        // guarantees `dst` is writable, and the store allows unaligned memory.
        unsafe { sse2::_mm_storeu_ps(dst, vec) }
    }

    pub(in crate::v128) unsafe fn storea_impl(vec: __m128, dst: *mut f32) {
        // SAFETY: module compiled only when `sse2` is enabled; the caller
        // guarantees `dst` is writable and 16-byte aligned.
        unsafe { sse2::_mm_store_ps(dst, vec) }
    }

    pub(in crate::v128) fn add_impl(lhs: __m128, rhs: __m128) -> __m128 {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_add_ps(lhs, rhs) }
    }

    pub(in crate::v128) fn sub_impl(lhs: __m128, rhs: __m128) -> __m128 {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_sub_ps(lhs, rhs) }
    }

    pub(in crate::v128) fn mul_impl(lhs: __m128, rhs: __m128) -> __m128 {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_mul_ps(lhs, rhs) }
    }

    pub(in crate::v128) fn div_impl(lhs: __m128, rhs: __m128) -> __m128 {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_div_ps(lhs, rhs) }
    }

    pub(in crate::v128) fn min_impl(lhs: __m128, rhs: __m128) -> __m128 {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_min_ps(lhs, rhs) }
    }

    pub(in crate::v128) fn max_impl(lhs: __m128, rhs: __m128) -> __m128 {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_max_ps(lhs, rhs) }
    }

    pub(in crate::v128) fn sqrt_impl(vec: __m128) -> __m128 {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_sqrt_ps(vec) }
    }

    pub(in crate::v128) fn abs_impl(vec: __m128) -> __m128 {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_andnot_ps(sign_mask_ps(), vec) }
    }

    pub(in crate::v128) fn neg_impl(vec: __m128) -> __m128 {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_xor_ps(vec, sign_mask_ps()) }
    }

    pub(in crate::v128) fn floor_impl(vec: __m128) -> __m128 {
        floor_ps(vec)
    }

    pub(in crate::v128) fn ceil_impl(vec: __m128) -> __m128 {
        ceil_ps(vec)
    }

    pub(in crate::v128) fn trunc_impl(vec: __m128) -> __m128 {
        trunc_ps(vec)
    }

    pub(in crate::v128) fn round_impl(vec: __m128) -> __m128 {
        round_ps(vec)
    }

    pub(in crate::v128) fn blend_impl(lhs: __m128, mask: &Mask4, rhs: __m128) -> __m128 {
        // SAFETY: module compiled only when `sse2` is enabled.
        let mask = unsafe { sse2::_mm_castsi128_ps(mask.0) };
        select_ps(mask, rhs, lhs)
    }

    pub(in crate::v128) fn cmp_eq_impl(lhs: __m128, rhs: __m128) -> Mask4 {
        // SAFETY: module compiled only when `sse2` is enabled.
        Mask4(unsafe { sse2::_mm_castps_si128(sse2::_mm_cmpeq_ps(lhs, rhs)) })
    }

    pub(in crate::v128) fn cmp_ne_impl(lhs: __m128, rhs: __m128) -> Mask4 {
        // SAFETY: module compiled only when `sse2` is enabled.
        Mask4(unsafe { sse2::_mm_castps_si128(sse2::_mm_cmpneq_ps(lhs, rhs)) })
    }

    pub(in crate::v128) fn cmp_lt_impl(lhs: __m128, rhs: __m128) -> Mask4 {
        // SAFETY: module compiled only when `sse2` is enabled.
        Mask4(unsafe { sse2::_mm_castps_si128(sse2::_mm_cmplt_ps(lhs, rhs)) })
    }

    pub(in crate::v128) fn cmp_le_impl(lhs: __m128, rhs: __m128) -> Mask4 {
        // SAFETY: module compiled only when `sse2` is enabled.
        Mask4(unsafe { sse2::_mm_castps_si128(sse2::_mm_cmple_ps(lhs, rhs)) })
    }

    pub(in crate::v128) fn cmp_gt_impl(lhs: __m128, rhs: __m128) -> Mask4 {
        // SAFETY: module compiled only when `sse2` is enabled.
        Mask4(unsafe { sse2::_mm_castps_si128(sse2::_mm_cmpgt_ps(lhs, rhs)) })
    }

    pub(in crate::v128) fn cmp_ge_impl(lhs: __m128, rhs: __m128) -> Mask4 {
        // SAFETY: module compiled only when `sse2` is enabled.
        Mask4(unsafe { sse2::_mm_castps_si128(sse2::_mm_cmpge_ps(lhs, rhs)) })
    }
}

impl From<v128::F32x4> for v128::V128 {
    /// Reinterprets the bits of the [`F32x4`](v128::F32x4).
    #[inline]
    fn from(vec: v128::F32x4) -> Self {
        // SAFETY: module compiled only when `sse2` is enabled.
        Self(unsafe { sse2::_mm_castps_si128(vec.0) })
    }
}

impl From<v128::V128> for v128::F32x4 {
    /// Reinterprets the contents of the [`V128`](v128::V128) as 4 lanes of
    /// packed [`f32`] values.
    #[inline]
    fn from(vec: v128::V128) -> Self {
        // SAFETY: module compiled only when `sse2` is enabled.
        Self(unsafe { sse2::_mm_castsi128_ps(vec.0) })
    }
}

impl v128::F64x2 {
    pub(in crate::v128) fn splat_impl(value: f64) -> __m128d {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_set1_pd(value) }
    }

    pub(in crate::v128) fn from_lanes_impl(lanes: [f64; 2]) -> __m128d {
        // SAFETY: module compiled only when `sse2` is enabled; the load
        // allows unaligned memory.
        unsafe { sse2::_mm_loadu_pd(lanes.as_ptr()) }
    }

    pub(in crate::v128) fn into_lanes_impl(vec: __m128d) -> [f64; 2] {
        let mut lanes = [0f64; 2];
        // SAFETY: module compiled only when `sse2` is enabled; the store
        // allows unaligned memory.
        unsafe { sse2::_mm_storeu_pd(lanes.as_mut_ptr(), vec) };
        lanes
    }

    pub(in crate::v128) unsafe fn load_impl(src: *const f64) -> __m128d {
        // SAFETY: module compiled only when `sse2` is enabled; the caller
        // guarantees `src` is readable, and the load allows unaligned memory.
        unsafe { sse2::_mm_loadu_pd(src) }
    }

    pub(in crate::v128) unsafe fn loada_impl(src: *const f64) -> __m128d {
        // SAFETY: module compiled only when `sse2` is enabled; the caller
        // guarantees `src` is readable and 16-byte aligned.
        unsafe { sse2::_mm_load_pd(src) }
    }

    pub(in crate::v128) unsafe fn store_impl(vec: __m128d, dst: *mut f64) {
        // SAFETY: module compiled only when `sse2` is enabled; the caller
        // guarantees `dst` is writable, and the store allows unaligned memory.
        unsafe { sse2::_mm_storeu_pd(dst, vec) }
    }

    pub(in crate::v128) unsafe fn storea_impl(vec: __m128d, dst: *mut f64) {
        // SAFETY: module compiled only when `sse2` is enabled; the caller
        // guarantees `dst` is writable and 16-byte aligned.
        unsafe { sse2::_mm_store_pd(dst, vec) }
    }

    pub(in crate::v128) fn add_impl(lhs: __m128d, rhs: __m128d) -> __m128d {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_add_pd(lhs, rhs) }
    }

    pub(in crate::v128) fn sub_impl(lhs: __m128d, rhs: __m128d) -> __m128d {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_sub_pd(lhs, rhs) }
    }

    pub(in crate::v128) fn mul_impl(lhs: __m128d, rhs: __m128d) -> __m128d {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_mul_pd(lhs, rhs) }
    }

    pub(in crate::v128) fn div_impl(lhs: __m128d, rhs: __m128d) -> __m128d {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_div_pd(lhs, rhs) }
    }

    pub(in crate::v128) fn min_impl(lhs: __m128d, rhs: __m128d) -> __m128d {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_min_pd(lhs, rhs) }
    }

    pub(in crate::v128) fn max_impl(lhs: __m128d, rhs: __m128d) -> __m128d {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_max_pd(lhs, rhs) }
    }

    pub(in crate::v128) fn sqrt_impl(vec: __m128d) -> __m128d {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_sqrt_pd(vec) }
    }

    pub(in crate::v128) fn abs_impl(vec: __m128d) -> __m128d {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_andnot_pd(sign_mask_pd(), vec) }
    }

    pub(in crate::v128) fn neg_impl(vec: __m128d) -> __m128d {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_xor_pd(vec, sign_mask_pd()) }
    }

    pub(in crate::v128) fn floor_impl(vec: __m128d) -> __m128d {
        floor_pd(vec)
    }

    pub(in crate::v128) fn ceil_impl(vec: __m128d) -> __m128d {
        ceil_pd(vec)
    }

    pub(in crate::v128) fn trunc_impl(vec: __m128d) -> __m128d {
        trunc_pd(vec)
    }

    pub(in crate::v128) fn round_impl(vec: __m128d) -> __m128d {
        round_pd(vec)
    }

    pub(in crate::v128) fn blend_impl(lhs: __m128d, mask: &Mask2, rhs: __m128d) -> __m128d {
        // SAFETY: module compiled only when `sse2` is enabled.
        let mask = unsafe { sse2::_mm_castsi128_pd(mask.0) };
        select_pd(mask, rhs, lhs)
    }

    pub(in crate::v128) fn cmp_eq_impl(lhs: __m128d, rhs: __m128d) -> Mask2 {
        // SAFETY: module compiled only when `sse2` is enabled.
        Mask2(unsafe { sse2::_mm_castpd_si128(sse2::_mm_cmpeq_pd(lhs, rhs)) })
    }

    pub(in crate::v128) fn cmp_ne_impl(lhs: __m128d, rhs: __m128d) -> Mask2 {
        // SAFETY: module compiled only when `sse2` is enabled.
        Mask2(unsafe { sse2::_mm_castpd_si128(sse2::_mm_cmpneq_pd(lhs, rhs)) })
    }

    pub(in crate::v128) fn cmp_lt_impl(lhs: __m128d, rhs: __m128d) -> Mask2 {
        // SAFETY: module compiled only when `sse2` is enabled.
        Mask2(unsafe { sse2::_mm_castpd_si128(sse2::_mm_cmplt_pd(lhs, rhs)) })
    }

    pub(in crate::v128) fn cmp_le_impl(lhs: __m128d, rhs: __m128d) -> Mask2 {
        // SAFETY: module compiled only when `sse2` is enabled.
        Mask2(unsafe { sse2::_mm_castpd_si128(sse2::_mm_cmple_pd(lhs, rhs)) })
    }

    pub(in crate::v128) fn cmp_gt_impl(lhs: __m128d, rhs: __m128d) -> Mask2 {
        // SAFETY: module compiled only when `sse2` is enabled.
        Mask2(unsafe { sse2::_mm_castpd_si128(sse2::_mm_cmpgt_pd(lhs, rhs)) })
    }

    pub(in crate::v128) fn cmp_ge_impl(lhs: __m128d, rhs: __m128d) -> Mask2 {
        // SAFETY: module compiled only when `sse2` is enabled.
        Mask2(unsafe { sse2::_mm_castpd_si128(sse2::_mm_cmpge_pd(lhs, rhs)) })
    }
}

impl From<v128::F64x2> for v128::V128 {
    /// Reinterprets the bits of the [`F64x2`](v128::F64x2).
    #[inline]
    fn from(vec: v128::F64x2) -> Self {
        // SAFETY: module compiled only when `sse2` is enabled.
        Self(unsafe { sse2::_mm_castpd_si128(vec.0) })
    }
}

impl From<v128::V128> for v128::F64x2 {
    /// Reinterprets the contents of the [`V128`](v128::V128) as 2 lanes of
    /// packed [`f64`] values.
    #[inline]
    fn from(vec: v128::V128) -> Self {
        // SAFETY: module compiled only when `sse2` is enabled.
        Self(unsafe { sse2::_mm_castsi128_pd(vec.0) })
    }
}

impl v128::V128 {
    pub(in crate::v128) fn from_bytes_impl(bytes: [u8; 16]) -> __m128i {
        // SAFETY: module compiled only when `sse2` is enabled; the load
        // allows unaligned memory.
        unsafe { sse2::_mm_loadu_si128(bytes.as_ptr() as *const __m128i) }
    }

    pub(in crate::v128) fn to_bytes_impl(repr: __m128i) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        // SAFETY: module compiled only when `sse2` is enabled; the store
        // allows unaligned memory.
        unsafe { sse2::_mm_storeu_si128(bytes.as_mut_ptr() as *mut __m128i, repr) };
        bytes
    }
}
