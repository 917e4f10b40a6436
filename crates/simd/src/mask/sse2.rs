//! Implements the predicate masks with SSE2 comparison-result registers.
//!
//! Each mask keeps one `__m128i` whose lanes, at a canonical width of
//! `128 / LANES` bits, are all-ones for true and all-zeros for false. Every
//! constructor upholds the canonical encoding, so comparison results coming
//! out of the vector shapes can be used as masks without normalization.

use crate::intrinsics::sse2::{self, __m128i};
use crate::mask;

pub(crate) type Mask2 = __m128i;
pub(crate) type Mask4 = __m128i;
pub(crate) type Mask8 = __m128i;
pub(crate) type Mask16 = __m128i;

macro_rules! implementations {
    ($name:ident = [$int:ty; $lanes:literal], $set1:ident) => {
        impl mask::$name {
            pub(in crate::mask) fn splat_impl(value: bool) -> __m128i {
                let fill: $int = if value { -1 } else { 0 };
                // SAFETY: module compiled only when `sse2` is enabled.
                unsafe { sse2::$set1(fill) }
            }

            pub(in crate::mask) fn from_lanes_impl(lanes: [bool; $lanes]) -> __m128i {
                let fill: [$int; $lanes] = lanes.map(|lane| if lane { -1 } else { 0 });
                // SAFETY: module compiled only when `sse2` is enabled; the
                // load allows unaligned memory.
                unsafe { sse2::_mm_loadu_si128(fill.as_ptr() as *const __m128i) }
            }

            pub(in crate::mask) fn into_lanes_impl(mask: __m128i) -> [bool; $lanes] {
                let mut fill = [0 as $int; $lanes];
                // SAFETY: module compiled only when `sse2` is enabled; the
                // store allows unaligned memory.
                unsafe { sse2::_mm_storeu_si128(fill.as_mut_ptr() as *mut __m128i, mask) };
                fill.map(|lane| lane != 0)
            }

            pub(in crate::mask) fn and_impl(lhs: __m128i, rhs: __m128i) -> __m128i {
                // SAFETY: module compiled only when `sse2` is enabled.
                unsafe { sse2::_mm_and_si128(lhs, rhs) }
            }

            pub(in crate::mask) fn or_impl(lhs: __m128i, rhs: __m128i) -> __m128i {
                // SAFETY: module compiled only when `sse2` is enabled.
                unsafe { sse2::_mm_or_si128(lhs, rhs) }
            }

            pub(in crate::mask) fn xor_impl(lhs: __m128i, rhs: __m128i) -> __m128i {
                // SAFETY: module compiled only when `sse2` is enabled.
                unsafe { sse2::_mm_xor_si128(lhs, rhs) }
            }

            pub(in crate::mask) fn not_impl(mask: __m128i) -> __m128i {
                // SAFETY: module compiled only when `sse2` is enabled.
                unsafe { sse2::_mm_xor_si128(mask, Self::splat_impl(true)) }
            }
        }
    };
}

implementations!(Mask2 = [i64; 2], _mm_set1_epi64x);
implementations!(Mask4 = [i32; 4], _mm_set1_epi32);
implementations!(Mask8 = [i16; 8], _mm_set1_epi16);
implementations!(Mask16 = [i8; 16], _mm_set1_epi8);

impl mask::Mask16 {
    pub(in crate::mask) fn from_halves_impl(lo: mask::Mask8, hi: mask::Mask8) -> __m128i {
        // The saturating pack maps the canonical 0/-1 word lanes to the
        // canonical 0/-1 byte lanes.
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_packs_epi16(lo.0, hi.0) }
    }

    pub(in crate::mask) fn split_impl(mask: __m128i) -> (__m128i, __m128i) {
        // Interleaving the register with itself doubles each byte, which
        // sign-extends the canonical encoding to word lanes.
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe {
            (
                sse2::_mm_unpacklo_epi8(mask, mask),
                sse2::_mm_unpackhi_epi8(mask, mask),
            )
        }
    }
}

impl mask::Mask8 {
    pub(in crate::mask) fn from_halves_impl(lo: mask::Mask4, hi: mask::Mask4) -> __m128i {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe { sse2::_mm_packs_epi32(lo.0, hi.0) }
    }

    pub(in crate::mask) fn split_impl(mask: __m128i) -> (__m128i, __m128i) {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe {
            (
                sse2::_mm_unpacklo_epi16(mask, mask),
                sse2::_mm_unpackhi_epi16(mask, mask),
            )
        }
    }
}

impl mask::Mask4 {
    pub(in crate::mask) fn from_halves_impl(lo: mask::Mask2, hi: mask::Mask2) -> __m128i {
        // Selecting the low doubleword of each canonical 64-bit lane
        // produces the canonical 32-bit encoding.
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe {
            sse2::_mm_castps_si128(sse2::_mm_shuffle_ps::<0b10_00_10_00>(
                sse2::_mm_castsi128_ps(lo.0),
                sse2::_mm_castsi128_ps(hi.0),
            ))
        }
    }

    pub(in crate::mask) fn split_impl(mask: __m128i) -> (__m128i, __m128i) {
        // SAFETY: module compiled only when `sse2` is enabled.
        unsafe {
            (
                sse2::_mm_shuffle_epi32::<0b01_01_00_00>(mask),
                sse2::_mm_shuffle_epi32::<0b11_11_10_10>(mask),
            )
        }
    }
}
