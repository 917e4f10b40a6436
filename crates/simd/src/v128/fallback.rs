//! Implements the 128-bit vector operations used when the `simd-intrinsics`
//! feature is not enabled, or no architecture-specific implementation is
//! available.
//!
//! Lane semantics are pinned to match the native backends: integer
//! arithmetic wraps, float `min`/`max` return the second operand on
//! unordered inputs, and `round` ties to even. The floating-point paths use
//! [`num_traits::Float`], which requires the `std` or `libm` feature.

use crate::v128;
use num_traits::Float as _;

/// Byte storage aligned like a vector register.
#[derive(Clone, Copy)]
#[repr(align(16))]
pub(crate) struct Bytes {
    bytes: [u8; 16],
}

pub(in crate::v128) type V128 = Bytes;

macro_rules! repr_struct {
    ($name:ident = [$elem:tt; $lanes:tt] as $cat:ident, mask: $mask:ident, swizzle: $swizzle:ident, counts: $counts:ident) => {
        #[derive(Clone, Copy)]
        #[repr(align(16))]
        pub(in crate::v128) struct $name {
            pub(in crate::v128) lanes: [$elem; $lanes],
        }
    };
}

crate::v128_interpretations!(repr_struct);

macro_rules! common {
    ($name:ident = [$elem:tt; $lanes:tt] as $cat:ident, mask: $mask:ident, swizzle: $swizzle:ident, counts: $counts:ident) => {
        impl v128::$name {
            pub(in crate::v128) fn splat_impl(value: $elem) -> $name {
                $name { lanes: [value; $lanes] }
            }

            pub(in crate::v128) fn from_lanes_impl(lanes: [$elem; $lanes]) -> $name {
                $name { lanes }
            }

            pub(in crate::v128) fn into_lanes_impl(vec: $name) -> [$elem; $lanes] {
                vec.lanes
            }

            pub(in crate::v128) unsafe fn load_impl(src: *const $elem) -> $name {
                $name {
                    // SAFETY: the caller guarantees `src` is valid for
                    // reading `LANES` elements; the read allows unaligned
                    // memory.
                    lanes: unsafe { core::ptr::read_unaligned(src as *const [$elem; $lanes]) },
                }
            }

            pub(in crate::v128) unsafe fn loada_impl(src: *const $elem) -> $name {
                $name {
                    // SAFETY: the caller guarantees `src` is valid for
                    // reading `LANES` elements and 16-byte aligned.
                    lanes: unsafe { core::ptr::read(src as *const [$elem; $lanes]) },
                }
            }

            pub(in crate::v128) unsafe fn store_impl(vec: $name, dst: *mut $elem) {
                // SAFETY: the caller guarantees `dst` is valid for writing
                // `LANES` elements; the write allows unaligned memory.
                unsafe { core::ptr::write_unaligned(dst as *mut [$elem; $lanes], vec.lanes) }
            }

            pub(in crate::v128) unsafe fn storea_impl(vec: $name, dst: *mut $elem) {
                // SAFETY: the caller guarantees `dst` is valid for writing
                // `LANES` elements and 16-byte aligned.
                unsafe { core::ptr::write(dst as *mut [$elem; $lanes], vec.lanes) }
            }

            pub(in crate::v128) fn blend_impl(
                lhs: $name,
                mask: &crate::mask::$mask,
                rhs: $name,
            ) -> $name {
                let select = mask.into_lanes();
                $name {
                    lanes: core::array::from_fn(|i| {
                        if select[i] {
                            rhs.lanes[i]
                        } else {
                            lhs.lanes[i]
                        }
                    }),
                }
            }
        }

        impl From<v128::$name> for v128::V128 {
            #[doc = concat!("Reinterprets the bits of the [`", stringify!($name), "`].")]
            #[inline]
            fn from(vec: v128::$name) -> Self {
                Self(Bytes {
                    // SAFETY: all bit patterns are valid in source and
                    // destination, and the sizes match.
                    bytes: unsafe {
                        core::mem::transmute::<[$elem; $lanes], [u8; 16]>(vec.0.lanes)
                    },
                })
            }
        }

        impl From<v128::V128> for v128::$name {
            #[doc = concat!("Reinterprets the contents of the [`V128`](v128::V128) as ")]
            #[doc = concat!(stringify!($lanes), " lanes of packed [`", stringify!($elem), "`] values.")]
            #[inline]
            fn from(vec: v128::V128) -> Self {
                Self($name {
                    // SAFETY: all bit patterns are valid in source and
                    // destination, and the sizes match.
                    lanes: unsafe {
                        core::mem::transmute::<[u8; 16], [$elem; $lanes]>(vec.0.bytes)
                    },
                })
            }
        }
    };
}

crate::v128_interpretations!(common);

macro_rules! int_ops {
    ($name:ident = [$elem:tt; $lanes:tt] as $cat:ident, mask: $mask:ident, swizzle: $swizzle:ident, counts: $counts:ident) => {
        impl v128::$name {
            pub(in crate::v128) fn add_impl(lhs: $name, rhs: $name) -> $name {
                $name {
                    lanes: core::array::from_fn(|i| lhs.lanes[i].wrapping_add(rhs.lanes[i])),
                }
            }

            pub(in crate::v128) fn sub_impl(lhs: $name, rhs: $name) -> $name {
                $name {
                    lanes: core::array::from_fn(|i| lhs.lanes[i].wrapping_sub(rhs.lanes[i])),
                }
            }

            pub(in crate::v128) fn mul_impl(lhs: $name, rhs: $name) -> $name {
                $name {
                    lanes: core::array::from_fn(|i| lhs.lanes[i].wrapping_mul(rhs.lanes[i])),
                }
            }

            pub(in crate::v128) fn and_impl(lhs: $name, rhs: $name) -> $name {
                $name {
                    lanes: core::array::from_fn(|i| lhs.lanes[i] & rhs.lanes[i]),
                }
            }

            pub(in crate::v128) fn or_impl(lhs: $name, rhs: $name) -> $name {
                $name {
                    lanes: core::array::from_fn(|i| lhs.lanes[i] | rhs.lanes[i]),
                }
            }

            pub(in crate::v128) fn xor_impl(lhs: $name, rhs: $name) -> $name {
                $name {
                    lanes: core::array::from_fn(|i| lhs.lanes[i] ^ rhs.lanes[i]),
                }
            }

            pub(in crate::v128) fn not_impl(vec: $name) -> $name {
                $name {
                    lanes: vec.lanes.map(|lane| !lane),
                }
            }

            pub(in crate::v128) fn shl_impl(vec: $name, count: u32) -> $name {
                $name {
                    lanes: vec.lanes.map(|lane| {
                        if count >= <$elem>::BITS {
                            0
                        } else {
                            lane << count
                        }
                    }),
                }
            }

            pub(in crate::v128) fn shr_impl(vec: $name, count: u32) -> $name {
                $name {
                    lanes: vec.lanes.map(|lane| {
                        $crate::shape_int!(@shr_lane $cat, $elem, lane, count)
                    }),
                }
            }

            pub(in crate::v128) fn min_impl(lhs: $name, rhs: $name) -> $name {
                $name {
                    lanes: core::array::from_fn(|i| core::cmp::min(lhs.lanes[i], rhs.lanes[i])),
                }
            }

            pub(in crate::v128) fn max_impl(lhs: $name, rhs: $name) -> $name {
                $name {
                    lanes: core::array::from_fn(|i| core::cmp::max(lhs.lanes[i], rhs.lanes[i])),
                }
            }

            pub(in crate::v128) fn cmp_eq_impl(lhs: $name, rhs: $name) -> crate::mask::$mask {
                crate::mask::$mask::from_lanes(core::array::from_fn(|i| {
                    lhs.lanes[i] == rhs.lanes[i]
                }))
            }

            pub(in crate::v128) fn cmp_ne_impl(lhs: $name, rhs: $name) -> crate::mask::$mask {
                crate::mask::$mask::from_lanes(core::array::from_fn(|i| {
                    lhs.lanes[i] != rhs.lanes[i]
                }))
            }

            pub(in crate::v128) fn cmp_lt_impl(lhs: $name, rhs: $name) -> crate::mask::$mask {
                crate::mask::$mask::from_lanes(core::array::from_fn(|i| {
                    lhs.lanes[i] < rhs.lanes[i]
                }))
            }

            pub(in crate::v128) fn cmp_le_impl(lhs: $name, rhs: $name) -> crate::mask::$mask {
                crate::mask::$mask::from_lanes(core::array::from_fn(|i| {
                    lhs.lanes[i] <= rhs.lanes[i]
                }))
            }

            pub(in crate::v128) fn cmp_gt_impl(lhs: $name, rhs: $name) -> crate::mask::$mask {
                crate::mask::$mask::from_lanes(core::array::from_fn(|i| {
                    lhs.lanes[i] > rhs.lanes[i]
                }))
            }

            pub(in crate::v128) fn cmp_ge_impl(lhs: $name, rhs: $name) -> crate::mask::$mask {
                crate::mask::$mask::from_lanes(core::array::from_fn(|i| {
                    lhs.lanes[i] >= rhs.lanes[i]
                }))
            }
        }
    };
}

crate::v128_integer_interpretations!(int_ops);

macro_rules! float_ops {
    ($name:ident = [$elem:tt; $lanes:tt], fmin: $fmin:path, fmax: $fmax:path, round: $round:path) => {
        impl v128::$name {
            pub(in crate::v128) fn add_impl(lhs: $name, rhs: $name) -> $name {
                $name {
                    lanes: core::array::from_fn(|i| lhs.lanes[i] + rhs.lanes[i]),
                }
            }

            pub(in crate::v128) fn sub_impl(lhs: $name, rhs: $name) -> $name {
                $name {
                    lanes: core::array::from_fn(|i| lhs.lanes[i] - rhs.lanes[i]),
                }
            }

            pub(in crate::v128) fn mul_impl(lhs: $name, rhs: $name) -> $name {
                $name {
                    lanes: core::array::from_fn(|i| lhs.lanes[i] * rhs.lanes[i]),
                }
            }

            pub(in crate::v128) fn div_impl(lhs: $name, rhs: $name) -> $name {
                $name {
                    lanes: core::array::from_fn(|i| lhs.lanes[i] / rhs.lanes[i]),
                }
            }

            pub(in crate::v128) fn min_impl(lhs: $name, rhs: $name) -> $name {
                $name {
                    lanes: core::array::from_fn(|i| $fmin(lhs.lanes[i], rhs.lanes[i])),
                }
            }

            pub(in crate::v128) fn max_impl(lhs: $name, rhs: $name) -> $name {
                $name {
                    lanes: core::array::from_fn(|i| $fmax(lhs.lanes[i], rhs.lanes[i])),
                }
            }

            pub(in crate::v128) fn sqrt_impl(vec: $name) -> $name {
                $name {
                    lanes: vec.lanes.map(|lane| lane.sqrt()),
                }
            }

            pub(in crate::v128) fn abs_impl(vec: $name) -> $name {
                $name {
                    lanes: vec.lanes.map(|lane| lane.abs()),
                }
            }

            pub(in crate::v128) fn neg_impl(vec: $name) -> $name {
                $name {
                    lanes: vec.lanes.map(|lane| -lane),
                }
            }

            pub(in crate::v128) fn floor_impl(vec: $name) -> $name {
                $name {
                    lanes: vec.lanes.map(|lane| lane.floor()),
                }
            }

            pub(in crate::v128) fn ceil_impl(vec: $name) -> $name {
                $name {
                    lanes: vec.lanes.map(|lane| lane.ceil()),
                }
            }

            pub(in crate::v128) fn trunc_impl(vec: $name) -> $name {
                $name {
                    lanes: vec.lanes.map(|lane| lane.trunc()),
                }
            }

            pub(in crate::v128) fn round_impl(vec: $name) -> $name {
                $name {
                    lanes: vec.lanes.map($round),
                }
            }
        }
    };
}

macro_rules! float_cmp {
    ($name:ident, mask: $mask:ident) => {
        impl v128::$name {
            pub(in crate::v128) fn cmp_eq_impl(lhs: $name, rhs: $name) -> crate::mask::$mask {
                crate::mask::$mask::from_lanes(core::array::from_fn(|i| {
                    lhs.lanes[i] == rhs.lanes[i]
                }))
            }

            pub(in crate::v128) fn cmp_ne_impl(lhs: $name, rhs: $name) -> crate::mask::$mask {
                crate::mask::$mask::from_lanes(core::array::from_fn(|i| {
                    lhs.lanes[i] != rhs.lanes[i]
                }))
            }

            pub(in crate::v128) fn cmp_lt_impl(lhs: $name, rhs: $name) -> crate::mask::$mask {
                crate::mask::$mask::from_lanes(core::array::from_fn(|i| {
                    lhs.lanes[i] < rhs.lanes[i]
                }))
            }

            pub(in crate::v128) fn cmp_le_impl(lhs: $name, rhs: $name) -> crate::mask::$mask {
                crate::mask::$mask::from_lanes(core::array::from_fn(|i| {
                    lhs.lanes[i] <= rhs.lanes[i]
                }))
            }

            pub(in crate::v128) fn cmp_gt_impl(lhs: $name, rhs: $name) -> crate::mask::$mask {
                crate::mask::$mask::from_lanes(core::array::from_fn(|i| {
                    lhs.lanes[i] > rhs.lanes[i]
                }))
            }

            pub(in crate::v128) fn cmp_ge_impl(lhs: $name, rhs: $name) -> crate::mask::$mask {
                crate::mask::$mask::from_lanes(core::array::from_fn(|i| {
                    lhs.lanes[i] >= rhs.lanes[i]
                }))
            }
        }
    };
}

float_ops!(
    F32x4 = [f32; 4],
    fmin: ::lanewise_scalar::f32_min,
    fmax: ::lanewise_scalar::f32_max,
    round: ::lanewise_scalar::f32_round_ties_even
);
float_ops!(
    F64x2 = [f64; 2],
    fmin: ::lanewise_scalar::f64_min,
    fmax: ::lanewise_scalar::f64_max,
    round: ::lanewise_scalar::f64_round_ties_even
);
float_cmp!(F32x4, mask: Mask4);
float_cmp!(F64x2, mask: Mask2);

impl v128::I32x4 {
    pub(in crate::v128) fn to_f32_impl(vec: I32x4) -> F32x4 {
        F32x4 {
            lanes: vec.lanes.map(|lane| lane as f32),
        }
    }
}

impl v128::V128 {
    pub(in crate::v128) fn from_bytes_impl(bytes: [u8; 16]) -> Bytes {
        Bytes { bytes }
    }

    pub(in crate::v128) fn to_bytes_impl(repr: Bytes) -> [u8; 16] {
        repr.bytes
    }
}
