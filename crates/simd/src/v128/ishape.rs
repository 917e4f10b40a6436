//! Defines the integer-only operations of the 128-bit interpretations.

use crate::mask::{Mask16, Mask2, Mask4, Mask8};
use crate::v128::{F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, U16x8, U32x4, U64x2, U8x16};

macro_rules! define_ops {
    ($name:ident = [$elem:tt; $lanes:tt] as $cat:ident, mask: $mask:ident, counts: $counts:ident) => {
        impl core::ops::BitAnd for $name {
            type Output = Self;

            /// Lane-wise bitwise AND.
            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                Self(Self::and_impl(self.0, rhs.0))
            }
        }

        impl core::ops::BitOr for $name {
            type Output = Self;

            /// Lane-wise bitwise OR.
            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                Self(Self::or_impl(self.0, rhs.0))
            }
        }

        impl core::ops::BitXor for $name {
            type Output = Self;

            /// Lane-wise bitwise XOR.
            #[inline]
            fn bitxor(self, rhs: Self) -> Self {
                Self(Self::xor_impl(self.0, rhs.0))
            }
        }

        impl core::ops::Not for $name {
            type Output = Self;

            /// Lane-wise bitwise NOT.
            #[inline]
            fn not(self) -> Self {
                Self(Self::not_impl(self.0))
            }
        }

        impl core::ops::Shl<u32> for $name {
            type Output = Self;

            /// Shifts every lane left by `count` bits; counts at or above
            /// the lane width yield 0.
            #[inline]
            fn shl(self, count: u32) -> Self {
                Self(Self::shl_impl(self.0, count))
            }
        }

        impl core::ops::Shr<u32> for $name {
            type Output = Self;

            /// Shifts every lane right by `count` bits: logical for
            /// unsigned lanes (counts at or above the lane width yield 0),
            /// arithmetic for signed lanes (such counts fill with the sign
            /// bit).
            #[inline]
            fn shr(self, count: u32) -> Self {
                Self(Self::shr_impl(self.0, count))
            }
        }

        crate::shape_int!($name = [$elem; $lanes], mask: $mask, counts: $counts, $cat);
    };
}

macro_rules! define_int {
    ($name:ident = [$elem:tt; $lanes:tt] as unsigned, mask: $mask:ident, swizzle: $swizzle:ident, counts: $counts:ident) => {
        define_ops!($name = [$elem; $lanes] as unsigned, mask: $mask, counts: $counts);
    };
    ($name:ident = [$elem:tt; $lanes:tt] as signed, mask: $mask:ident, swizzle: $swizzle:ident, counts: $counts:ident) => {
        define_ops!($name = [$elem; $lanes] as signed, mask: $mask, counts: $counts);

        crate::shape_signed!($name = [$elem; $lanes], mask: $mask);
    };
}

crate::v128_integer_interpretations!(define_int);

impl I32x4 {
    /// Converts each lane to the same-width floating-point value.
    #[inline]
    pub fn to_float(self) -> F32x4 {
        F32x4(Self::to_f32_impl(self.0))
    }
}

impl U32x4 {
    /// Converts each lane to the same-width floating-point value, rounding
    /// to nearest where the value has more significant bits than the
    /// mantissa holds.
    #[inline]
    pub fn to_float(self) -> F32x4 {
        F32x4::from_lanes(self.into_lanes().map(|lane| lane as f32))
    }
}

impl I64x2 {
    /// Converts each lane to the same-width floating-point value.
    #[inline]
    pub fn to_float(self) -> F64x2 {
        F64x2::from_lanes(self.into_lanes().map(|lane| lane as f64))
    }
}

impl U64x2 {
    /// Converts each lane to the same-width floating-point value, rounding
    /// to nearest where the value has more significant bits than the
    /// mantissa holds.
    #[inline]
    pub fn to_float(self) -> F64x2 {
        F64x2::from_lanes(self.into_lanes().map(|lane| lane as f64))
    }
}
