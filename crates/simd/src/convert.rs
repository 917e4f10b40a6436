//! Width promotion/degradation, packing, and same-width signedness casts.
//!
//! Every relationship here is total over the shapes that can have it: a
//! 128-bit shape promotes exactly when a wider element type exists, a
//! 256-bit shape degrades exactly when a narrower one does, and every
//! 256-bit shape packs from its 128-bit halves. A missing combination is a
//! missing trait implementation, which fails at compile time.

use crate::v128::{F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, U16x8, U32x4, U64x2, U8x16};
use crate::v256::{F32x8, F64x4, I16x16, I32x8, I64x4, I8x32, U16x16, U32x8, U64x4, U8x32};
use crate::vector::{Degrade, Pack, Promote};

macro_rules! promote_pair {
    ($narrow:ident => $wide:ident, [$nt:tt; $lanes:tt] => $wt:tt) => {
        impl Promote for $narrow {
            type Wider = $wide;

            #[inline]
            fn promote(self) -> $wide {
                $wide::from_lanes(self.into_lanes().map(|lane| lane as $wt))
            }
        }

        impl Degrade for $wide {
            type Narrower = $narrow;

            #[inline]
            fn degrade(self) -> $narrow {
                $narrow::from_lanes(self.into_lanes().map(|lane| lane as $nt))
            }
        }
    };
}

promote_pair!(U8x16 => U16x16, [u8; 16] => u16);
promote_pair!(I8x16 => I16x16, [i8; 16] => i16);
promote_pair!(U16x8 => U32x8, [u16; 8] => u32);
promote_pair!(I16x8 => I32x8, [i16; 8] => i32);
promote_pair!(U32x4 => U64x4, [u32; 4] => u64);
promote_pair!(I32x4 => I64x4, [i32; 4] => i64);
promote_pair!(F32x4 => F64x4, [f32; 4] => f64);

macro_rules! pack_pair {
    ($($name:ident => $half:ident;)*) => {$(
        impl Pack for $name {
            type Half = $half;

            #[inline]
            fn pack(lo: $half, hi: $half) -> Self {
                Self { lo, hi }
            }

            #[inline]
            fn unpack(self) -> ($half, $half) {
                (self.lo, self.hi)
            }

            #[inline]
            fn lo(self) -> $half {
                self.lo
            }

            #[inline]
            fn hi(self) -> $half {
                self.hi
            }
        }
    )*};
}

pack_pair! {
    U8x32 => U8x16;
    I8x32 => I8x16;
    U16x16 => U16x8;
    I16x16 => I16x8;
    U32x8 => U32x4;
    I32x8 => I32x4;
    U64x4 => U64x2;
    I64x4 => I64x2;
    F32x8 => F32x4;
    F64x4 => F64x2;
}

macro_rules! sign_cast_pair {
    ($($unsigned:ident <=> $signed:ident, [$ut:tt; $lanes:tt] as $st:tt;)*) => {$(
        impl $unsigned {
            /// Reinterprets every lane as the same-width signed integer; the
            /// two's-complement bit pattern is preserved.
            #[inline]
            pub fn to_signed(self) -> $signed {
                $signed::from_lanes(self.into_lanes().map(|lane| lane as $st))
            }
        }

        impl $signed {
            /// Reinterprets every lane as the same-width unsigned integer;
            /// the two's-complement bit pattern is preserved.
            #[inline]
            pub fn to_unsigned(self) -> $unsigned {
                $unsigned::from_lanes(self.into_lanes().map(|lane| lane as $ut))
            }
        }
    )*};
}

sign_cast_pair! {
    U8x16 <=> I8x16, [u8; 16] as i8;
    U16x8 <=> I16x8, [u16; 8] as i16;
    U32x4 <=> I32x4, [u32; 4] as i32;
    U64x2 <=> I64x2, [u64; 2] as i64;
    U8x32 <=> I8x32, [u8; 32] as i8;
    U16x16 <=> I16x16, [u16; 16] as i16;
    U32x8 <=> I32x8, [u32; 8] as i32;
    U64x4 <=> I64x4, [u64; 4] as i64;
}
