//! Defines the interpretations of [`V128`](crate::v128::V128).

use crate::mask::{Mask16, Mask2, Mask4, Mask8};
use crate::swizzle::{Swizzle16, Swizzle2, Swizzle4, Swizzle8};
use crate::v128::implementation;

macro_rules! define {
    ($name:ident = [$elem:tt; $lanes:tt] as $cat:ident, mask: $mask:ident, swizzle: $swizzle:ident, counts: $counts:ident) => {

#[doc = concat!("Represents a [`V128`](crate::v128::V128) interpreted as ", stringify!($lanes))]
#[doc = concat!(" lanes of packed [`", stringify!($elem), "`] values.")]
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct $name(pub(in crate::v128) implementation::$name);

impl $name {
    #[doc = concat!("Creates a new vector whose ", stringify!($lanes), " lanes are filled ")]
    #[doc = concat!("with the given [`", stringify!($elem), "`] value.")]
    #[inline]
    pub fn splat(value: $elem) -> Self {
        Self(Self::splat_impl(value))
    }

    /// Creates a vector from an array of lane values, lane 0 first.
    #[inline]
    pub fn from_lanes(lanes: [$elem; $lanes]) -> Self {
        Self(Self::from_lanes_impl(lanes))
    }

    #[doc = concat!("Returns each [`", stringify!($elem), "`] lane in the vector.")]
    #[inline]
    pub fn into_lanes(self) -> [$elem; $lanes] {
        Self::into_lanes_impl(self.0)
    }

    /// Reads `LANES` contiguous elements starting at `src`.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reading `LANES` elements; any alignment is
    /// allowed.
    #[inline]
    pub unsafe fn load(src: *const $elem) -> Self {
        // SAFETY: the caller upholds the contract of `load_impl`.
        Self(unsafe { Self::load_impl(src) })
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
        // SAFETY: the caller upholds the contract of `loada_impl`.
        Self(unsafe { Self::loada_impl(src) })
    }

    /// Writes `LANES` contiguous elements starting at `dst`.
    ///
    /// # Safety
    ///
    /// `dst` must be valid for writing `LANES` elements; any alignment is
    /// allowed.
    #[inline]
    pub unsafe fn store(&self, dst: *mut $elem) {
        // SAFETY: the caller upholds the contract of `store_impl`.
        unsafe { Self::store_impl(self.0, dst) }
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
        // SAFETY: the caller upholds the contract of `storea_impl`.
        unsafe { Self::storea_impl(self.0, dst) }
    }

    /// Returns a vector taking the selected lanes from `other` and the
    /// unselected lanes from `self`.
    ///
    /// This is the primitive every masked operation is built from; it is a
    /// true per-lane select, never a branch on the mask contents.
    #[inline]
    pub fn blend(self, mask: &$mask, other: Self) -> Self {
        Self(Self::blend_impl(self.0, mask, other.0))
    }

    /// Lane-wise minimum.
    ///
    /// For floating-point lanes the result is the second operand whenever
    /// the pair compares unordered, matching the hardware instruction.
    #[inline]
    pub fn min(self, rhs: impl Into<Self>) -> Self {
        Self(Self::min_impl(self.0, rhs.into().0))
    }

    /// Lane-wise maximum; see [`min`](Self::min) for the ordering rule.
    #[inline]
    pub fn max(self, rhs: impl Into<Self>) -> Self {
        Self(Self::max_impl(self.0, rhs.into().0))
    }

    /// Lane-wise `==`, producing a mask.
    #[inline]
    pub fn cmp_eq(self, rhs: impl Into<Self>) -> $mask {
        Self::cmp_eq_impl(self.0, rhs.into().0)
    }

    /// Lane-wise `!=`, producing a mask.
    #[inline]
    pub fn cmp_ne(self, rhs: impl Into<Self>) -> $mask {
        Self::cmp_ne_impl(self.0, rhs.into().0)
    }

    /// Lane-wise `<`, producing a mask.
    #[inline]
    pub fn cmp_lt(self, rhs: impl Into<Self>) -> $mask {
        Self::cmp_lt_impl(self.0, rhs.into().0)
    }

    /// Lane-wise `<=`, producing a mask.
    #[inline]
    pub fn cmp_le(self, rhs: impl Into<Self>) -> $mask {
        Self::cmp_le_impl(self.0, rhs.into().0)
    }

    /// Lane-wise `>`, producing a mask.
    #[inline]
    pub fn cmp_gt(self, rhs: impl Into<Self>) -> $mask {
        Self::cmp_gt_impl(self.0, rhs.into().0)
    }

    /// Lane-wise `>=`, producing a mask.
    #[inline]
    pub fn cmp_ge(self, rhs: impl Into<Self>) -> $mask {
        Self::cmp_ge_impl(self.0, rhs.into().0)
    }
}

impl core::ops::Add for $name {
    type Output = Self;

    /// Lane-wise addition; integer lanes wrap.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(Self::add_impl(self.0, rhs.0))
    }
}

impl core::ops::Sub for $name {
    type Output = Self;

    /// Lane-wise subtraction; integer lanes wrap.
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(Self::sub_impl(self.0, rhs.0))
    }
}

impl core::ops::Mul for $name {
    type Output = Self;

    /// Lane-wise multiplication; integer lanes keep the low half of the
    /// product (wrapping).
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(Self::mul_impl(self.0, rhs.0))
    }
}

crate::shape_common!($name = [$elem; $lanes], mask: $mask, swizzle: $swizzle);

    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! v128_integer_interpretations {
    ($macro:ident) => {
        $macro!(U8x16 = [u8; 16] as unsigned, mask: Mask16, swizzle: Swizzle16, counts: U8x16);
        $macro!(I8x16 = [i8; 16] as signed, mask: Mask16, swizzle: Swizzle16, counts: U8x16);
        $macro!(U16x8 = [u16; 8] as unsigned, mask: Mask8, swizzle: Swizzle8, counts: U16x8);
        $macro!(I16x8 = [i16; 8] as signed, mask: Mask8, swizzle: Swizzle8, counts: U16x8);
        $macro!(U32x4 = [u32; 4] as unsigned, mask: Mask4, swizzle: Swizzle4, counts: U32x4);
        $macro!(I32x4 = [i32; 4] as signed, mask: Mask4, swizzle: Swizzle4, counts: U32x4);
        $macro!(U64x2 = [u64; 2] as unsigned, mask: Mask2, swizzle: Swizzle2, counts: U64x2);
        $macro!(I64x2 = [i64; 2] as signed, mask: Mask2, swizzle: Swizzle2, counts: U64x2);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! v128_float_interpretations {
    ($macro:ident) => {
        $macro!(F32x4 = [f32; 4] as float, mask: Mask4, swizzle: Swizzle4, counts: U32x4);
        $macro!(F64x2 = [f64; 2] as float, mask: Mask2, swizzle: Swizzle2, counts: U64x2);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! v128_interpretations {
    ($macro:ident) => {
        $crate::v128_integer_interpretations!($macro);
        $crate::v128_float_interpretations!($macro);
    };
}

v128_interpretations!(define);
