//! Defines the floating-point-only operations of the 128-bit interpretations.

use crate::mask::{Mask2, Mask4};
use crate::v128::{F32x4, F64x2, I32x4, I64x2, U32x4, U64x2};

macro_rules! define_ops {
    ($name:ident = [$elem:tt; $lanes:tt], mask: $mask:ident, fmin: $fmin:path, fmax: $fmax:path) => {
        impl $name {
            /// Lane-wise absolute value (clears the sign bit).
            #[inline]
            pub fn abs(self) -> Self {
                Self(Self::abs_impl(self.0))
            }

            /// Lane-wise square root.
            #[inline]
            pub fn sqrt(self) -> Self {
                Self(Self::sqrt_impl(self.0))
            }

            /// Rounds every lane down to the nearest integral value.
            #[inline]
            pub fn floor(self) -> Self {
                Self(Self::floor_impl(self.0))
            }

            /// Rounds every lane up to the nearest integral value.
            #[inline]
            pub fn ceil(self) -> Self {
                Self(Self::ceil_impl(self.0))
            }

            /// Rounds every lane toward zero.
            #[inline]
            pub fn trunc(self) -> Self {
                Self(Self::trunc_impl(self.0))
            }

            /// Rounds every lane to the nearest integral value, with ties
            /// going to the even one.
            #[inline]
            pub fn round(self) -> Self {
                Self(Self::round_impl(self.0))
            }
        }

        impl core::ops::Div for $name {
            type Output = Self;

            /// Lane-wise IEEE 754 division.
            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self(Self::div_impl(self.0, rhs.0))
            }
        }

        impl core::ops::Neg for $name {
            type Output = Self;

            /// Lane-wise sign flip.
            #[inline]
            fn neg(self) -> Self {
                Self(Self::neg_impl(self.0))
            }
        }

        crate::shape_float!($name = [$elem; $lanes], mask: $mask, fmin: $fmin, fmax: $fmax);
    };
}

macro_rules! define_float {
    ($name:ident = [f32; $lanes:tt] as float, mask: $mask:ident, swizzle: $swizzle:ident, counts: $counts:ident) => {
        define_ops!(
            $name = [f32; $lanes],
            mask: $mask,
            fmin: ::lanewise_scalar::f32_min,
            fmax: ::lanewise_scalar::f32_max
        );
    };
    ($name:ident = [f64; $lanes:tt] as float, mask: $mask:ident, swizzle: $swizzle:ident, counts: $counts:ident) => {
        define_ops!(
            $name = [f64; $lanes],
            mask: $mask,
            fmin: ::lanewise_scalar::f64_min,
            fmax: ::lanewise_scalar::f64_max
        );
    };
}

crate::v128_float_interpretations!(define_float);

impl F32x4 {
    /// Converts each lane to the same-width signed integer, rounding
    /// half-to-even and saturating; *NaN* lanes become 0.
    #[inline]
    pub fn to_int(self) -> I32x4 {
        I32x4::from_lanes(
            self.into_lanes()
                .map(|lane| lanewise_scalar::f32_round_ties_even(lane) as i32),
        )
    }

    /// Converts each lane to the same-width unsigned integer, rounding
    /// half-to-even and saturating; *NaN* and negative lanes become 0.
    #[inline]
    pub fn to_uint(self) -> U32x4 {
        U32x4::from_lanes(
            self.into_lanes()
                .map(|lane| lanewise_scalar::f32_round_ties_even(lane) as u32),
        )
    }
}

impl F64x2 {
    /// Converts each lane to the same-width signed integer, rounding
    /// half-to-even and saturating; *NaN* lanes become 0.
    #[inline]
    pub fn to_int(self) -> I64x2 {
        I64x2::from_lanes(
            self.into_lanes()
                .map(|lane| lanewise_scalar::f64_round_ties_even(lane) as i64),
        )
    }

    /// Converts each lane to the same-width unsigned integer, rounding
    /// half-to-even and saturating; *NaN* and negative lanes become 0.
    #[inline]
    pub fn to_uint(self) -> U64x2 {
        U64x2::from_lanes(
            self.into_lanes()
                .map(|lane| lanewise_scalar::f64_round_ties_even(lane) as u64),
        )
    }
}
