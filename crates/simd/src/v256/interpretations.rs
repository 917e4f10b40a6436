//! Defines the interpretations of [`V256`].

use crate::mask::{Mask16, Mask32, Mask4, Mask8};
use crate::swizzle::{Swizzle16, Swizzle32, Swizzle4, Swizzle8};
use crate::v128::{F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, U16x8, U32x4, U64x2, U8x16};
use crate::v256::V256;

macro_rules! define {
    ($name:ident = [$elem:tt; $lanes:tt] as $cat:ident, half: $half:ident($hl:tt), mask: $mask:ident, swizzle: $swizzle:ident, counts: $counts:ident) => {

#[doc = concat!("Represents a [`V256`] interpreted as ", stringify!($lanes), " lanes of ")]
#[doc = concat!("packed [`", stringify!($elem), "`] values, stored as a pair of ")]
#[doc = concat!("[`", stringify!($half), "`] halves.")]
#[derive(Clone, Copy)]
pub struct $name {
    pub(crate) lo: $half,
    pub(crate) hi: $half,
}

impl $name {
    #[doc = concat!("Creates a new vector whose ", stringify!($lanes), " lanes are filled ")]
    #[doc = concat!("with the given [`", stringify!($elem), "`] value.")]
    #[inline]
    pub fn splat(value: $elem) -> Self {
        Self {
            lo: $half::splat(value),
            hi: $half::splat(value),
        }
    }

    /// Creates a vector from an array of lane values, lane 0 first.
    #[inline]
    pub fn from_lanes(lanes: [$elem; $lanes]) -> Self {
        let mut lo = [<$elem as ::lanewise_scalar::Scalar>::ZERO; $hl];
        let mut hi = lo;
        lo.copy_from_slice(&lanes[..$hl]);
        hi.copy_from_slice(&lanes[$hl..]);
        Self {
            lo: $half::from_lanes(lo),
            hi: $half::from_lanes(hi),
        }
    }

    #[doc = concat!("Returns each [`", stringify!($elem), "`] lane in the vector.")]
    #[inline]
    pub fn into_lanes(self) -> [$elem; $lanes] {
        let lo = self.lo.into_lanes();
        let hi = self.hi.into_lanes();
        core::array::from_fn(|i| if i < $hl { lo[i] } else { hi[i - $hl] })
    }

    /// Reads `LANES` contiguous elements starting at `src`.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reading `LANES` elements; any alignment is
    /// allowed.
    #[inline]
    pub unsafe fn load(src: *const $elem) -> Self {
        Self {
            // SAFETY: the caller guarantees `LANES` readable elements, of
            // which each half reads its own subrange.
            lo: unsafe { $half::load(src) },
            // SAFETY: as above.
            hi: unsafe { $half::load(src.add($hl)) },
        }
    }

    /// Reads `LANES` contiguous elements starting at `src`, which must be
    /// 16-byte aligned.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reading `LANES` elements and aligned to 16
    /// bytes; a misaligned pointer may fault or read the wrong bits.
    #[inline]
    pub unsafe fn load_aligned(src: *const $elem) -> Self {
        Self {
            // SAFETY: the caller guarantees readability and 16-byte
            // alignment, which holds for both register-sized halves.
            lo: unsafe { $half::load_aligned(src) },
            // SAFETY: as above.
            hi: unsafe { $half::load_aligned(src.add($hl)) },
        }
    }

    /// Writes `LANES` contiguous elements starting at `dst`.
    ///
    /// # Safety
    ///
    /// `dst` must be valid for writing `LANES` elements; any alignment is
    /// allowed.
    #[inline]
    pub unsafe fn store(&self, dst: *mut $elem) {
        // SAFETY: the caller guarantees `LANES` writable elements, of which
        // each half writes its own subrange.
        unsafe { self.lo.store(dst) };
        // SAFETY: as above.
        unsafe { self.hi.store(dst.add($hl)) };
    }

    /// Writes `LANES` contiguous elements starting at `dst`, which must be
    /// 16-byte aligned.
    ///
    /// # Safety
    ///
    /// `dst` must be valid for writing `LANES` elements and aligned to 16
    /// bytes; a misaligned pointer may fault or write the wrong bits.
    #[inline]
    pub unsafe fn store_aligned(&self, dst: *mut $elem) {
        // SAFETY: the caller guarantees writability and 16-byte alignment,
        // which holds for both register-sized halves.
        unsafe { self.lo.store_aligned(dst) };
        // SAFETY: as above.
        unsafe { self.hi.store_aligned(dst.add($hl)) };
    }

    /// Returns a vector taking the selected lanes from `other` and the
    /// unselected lanes from `self`.
    ///
    /// This is the primitive every masked operation is built from; it is a
    /// true per-lane select, never a branch on the mask contents.
    #[inline]
    pub fn blend(self, mask: &$mask, other: Self) -> Self {
        let (lo, hi) = mask.split();
        Self {
            lo: self.lo.blend(&lo, other.lo),
            hi: self.hi.blend(&hi, other.hi),
        }
    }

    /// Lane-wise minimum.
    ///
    /// For floating-point lanes the result is the second operand whenever
    /// the pair compares unordered, matching the hardware instruction.
    #[inline]
    pub fn min(self, rhs: impl Into<Self>) -> Self {
        let rhs = rhs.into();
        Self {
            lo: self.lo.min(rhs.lo),
            hi: self.hi.min(rhs.hi),
        }
    }

    /// Lane-wise maximum; see [`min`](Self::min) for the ordering rule.
    #[inline]
    pub fn max(self, rhs: impl Into<Self>) -> Self {
        let rhs = rhs.into();
        Self {
            lo: self.lo.max(rhs.lo),
            hi: self.hi.max(rhs.hi),
        }
    }

    /// Lane-wise `==`, producing a mask.
    #[inline]
    pub fn cmp_eq(self, rhs: impl Into<Self>) -> $mask {
        let rhs = rhs.into();
        $mask::from_halves(self.lo.cmp_eq(rhs.lo), self.hi.cmp_eq(rhs.hi))
    }

    /// Lane-wise `!=`, producing a mask.
    #[inline]
    pub fn cmp_ne(self, rhs: impl Into<Self>) -> $mask {
        let rhs = rhs.into();
        $mask::from_halves(self.lo.cmp_ne(rhs.lo), self.hi.cmp_ne(rhs.hi))
    }

    /// Lane-wise `<`, producing a mask.
    #[inline]
    pub fn cmp_lt(self, rhs: impl Into<Self>) -> $mask {
        let rhs = rhs.into();
        $mask::from_halves(self.lo.cmp_lt(rhs.lo), self.hi.cmp_lt(rhs.hi))
    }

    /// Lane-wise `<=`, producing a mask.
    #[inline]
    pub fn cmp_le(self, rhs: impl Into<Self>) -> $mask {
        let rhs = rhs.into();
        $mask::from_halves(self.lo.cmp_le(rhs.lo), self.hi.cmp_le(rhs.hi))
    }

    /// Lane-wise `>`, producing a mask.
    #[inline]
    pub fn cmp_gt(self, rhs: impl Into<Self>) -> $mask {
        let rhs = rhs.into();
        $mask::from_halves(self.lo.cmp_gt(rhs.lo), self.hi.cmp_gt(rhs.hi))
    }

    /// Lane-wise `>=`, producing a mask.
    #[inline]
    pub fn cmp_ge(self, rhs: impl Into<Self>) -> $mask {
        let rhs = rhs.into();
        $mask::from_halves(self.lo.cmp_ge(rhs.lo), self.hi.cmp_ge(rhs.hi))
    }
}

impl core::ops::Add for $name {
    type Output = Self;

    /// Lane-wise addition; integer lanes wrap.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            lo: self.lo + rhs.lo,
            hi: self.hi + rhs.hi,
        }
    }
}

impl core::ops::Sub for $name {
    type Output = Self;

    /// Lane-wise subtraction; integer lanes wrap.
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            lo: self.lo - rhs.lo,
            hi: self.hi - rhs.hi,
        }
    }
}

impl core::ops::Mul for $name {
    type Output = Self;

    /// Lane-wise multiplication; integer lanes keep the low half of the
    /// product (wrapping).
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            lo: self.lo * rhs.lo,
            hi: self.hi * rhs.hi,
        }
    }
}

impl From<$name> for V256 {
    #[doc = concat!("Reinterprets the bits of the [`", stringify!($name), "`].")]
    #[inline]
    fn from(vec: $name) -> Self {
        V256 {
            lo: vec.lo.into(),
            hi: vec.hi.into(),
        }
    }
}

impl From<V256> for $name {
    #[doc = concat!("Interprets the contents of the [`V256`] as ", stringify!($lanes))]
    #[doc = concat!(" lanes of packed [`", stringify!($elem), "`] values.")]
    #[inline]
    fn from(vec: V256) -> Self {
        Self {
            lo: vec.lo.into(),
            hi: vec.hi.into(),
        }
    }
}

crate::shape_common!($name = [$elem; $lanes], mask: $mask, swizzle: $swizzle);

    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! v256_integer_interpretations {
    ($macro:ident) => {
        $macro!(U8x32 = [u8; 32] as unsigned, half: U8x16(16), mask: Mask32, swizzle: Swizzle32, counts: U8x32);
        $macro!(I8x32 = [i8; 32] as signed, half: I8x16(16), mask: Mask32, swizzle: Swizzle32, counts: U8x32);
        $macro!(U16x16 = [u16; 16] as unsigned, half: U16x8(8), mask: Mask16, swizzle: Swizzle16, counts: U16x16);
        $macro!(I16x16 = [i16; 16] as signed, half: I16x8(8), mask: Mask16, swizzle: Swizzle16, counts: U16x16);
        $macro!(U32x8 = [u32; 8] as unsigned, half: U32x4(4), mask: Mask8, swizzle: Swizzle8, counts: U32x8);
        $macro!(I32x8 = [i32; 8] as signed, half: I32x4(4), mask: Mask8, swizzle: Swizzle8, counts: U32x8);
        $macro!(U64x4 = [u64; 4] as unsigned, half: U64x2(2), mask: Mask4, swizzle: Swizzle4, counts: U64x4);
        $macro!(I64x4 = [i64; 4] as signed, half: I64x2(2), mask: Mask4, swizzle: Swizzle4, counts: U64x4);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! v256_float_interpretations {
    ($macro:ident) => {
        $macro!(F32x8 = [f32; 8] as float, half: F32x4(4), mask: Mask8, swizzle: Swizzle8, counts: U32x8);
        $macro!(F64x4 = [f64; 4] as float, half: F64x2(2), mask: Mask4, swizzle: Swizzle4, counts: U64x4);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! v256_interpretations {
    ($macro:ident) => {
        $crate::v256_integer_interpretations!($macro);
        $crate::v256_float_interpretations!($macro);
    };
}

v256_interpretations!(define);
