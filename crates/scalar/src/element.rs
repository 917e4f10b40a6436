//! The element-type trait layer.

mod private {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Trait for the machine numeric types that can be a vector lane.
///
/// Implemented for the 8/16/32/64-bit integers in both signednesses and for
/// [`f32`]/[`f64`]; sealed, since the vector type grid is fixed at compile
/// time and an open element set would be meaningless.
pub trait Scalar:
    private::Sealed
    + Copy
    + PartialOrd
    + core::fmt::Debug
    + core::fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Width of the element in bits.
    const BITS: u32;

    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;
}

macro_rules! impl_scalar_int {
    ($($int:ty),*) => {$(
        impl Scalar for $int {
            const BITS: u32 = <$int>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
        }
    )*};
}

impl_scalar_int!(u8, u16, u32, u64, i8, i16, i32, i64);

impl Scalar for f32 {
    const BITS: u32 = 32;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}

impl Scalar for f64 {
    const BITS: u32 = 64;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}

/// Trait for integer element types.
///
/// The associated types name the same-width cross-signedness counterpart;
/// [`cast_signed`](Int::cast_signed)/[`cast_unsigned`](Int::cast_unsigned)
/// convert by reinterpreting the two's-complement bit pattern, matching what
/// the hardware backends do for free.
pub trait Int:
    Scalar
    + num_traits::PrimInt
    + num_traits::WrappingAdd
    + num_traits::WrappingSub
    + num_traits::WrappingMul
{
    /// The signed integer type of the same width.
    type Signed: Int;

    /// The unsigned integer type of the same width.
    type Unsigned: Int;

    /// The smallest value of the type.
    const MIN: Self;

    /// The largest value of the type.
    const MAX: Self;

    /// Reinterprets the bit pattern as [`Self::Signed`].
    fn cast_signed(self) -> Self::Signed;

    /// Reinterprets the bit pattern as [`Self::Unsigned`].
    fn cast_unsigned(self) -> Self::Unsigned;
}

macro_rules! impl_int {
    ($($int:ty => $signed:ty, $unsigned:ty;)*) => {$(
        impl Int for $int {
            type Signed = $signed;
            type Unsigned = $unsigned;

            const MIN: Self = <$int>::MIN;
            const MAX: Self = <$int>::MAX;

            #[inline]
            fn cast_signed(self) -> $signed {
                self as $signed
            }

            #[inline]
            fn cast_unsigned(self) -> $unsigned {
                self as $unsigned
            }
        }
    )*};
}

impl_int! {
    u8 => i8, u8;
    u16 => i16, u16;
    u32 => i32, u32;
    u64 => i64, u64;
    i8 => i8, u8;
    i16 => i16, u16;
    i32 => i32, u32;
    i64 => i64, u64;
}

/// Trait for floating-point element types.
pub trait Float: Scalar + num_traits::Float {
    /// Positive infinity.
    const INFINITY: Self;

    /// Negative infinity.
    const NEG_INFINITY: Self;
}

impl Float for f32 {
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;
}

impl Float for f64 {
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;
}

/// Element types that have a same-category counterpart of double the width.
///
/// Widening is always value-preserving: unsigned integers zero-extend, signed
/// integers sign-extend, and every [`f32`] is exactly representable as an
/// [`f64`].
pub trait Widen: Scalar {
    /// The element type of double the width.
    type Wider: Scalar + Narrow<Narrower = Self>;

    /// Converts the value to [`Self::Wider`].
    fn widen(self) -> Self::Wider;
}

/// Element types that have a same-category counterpart of half the width.
///
/// Narrowing truncates integers to the low half of their bits; `f64` values
/// round to the nearest `f32`.
pub trait Narrow: Scalar {
    /// The element type of half the width.
    type Narrower: Scalar;

    /// Converts the value to [`Self::Narrower`].
    fn narrow(self) -> Self::Narrower;
}

macro_rules! impl_widen_narrow {
    ($($narrow:ty => $wide:ty;)*) => {$(
        impl Widen for $narrow {
            type Wider = $wide;

            #[inline]
            fn widen(self) -> $wide {
                self as $wide
            }
        }

        impl Narrow for $wide {
            type Narrower = $narrow;

            #[inline]
            fn narrow(self) -> $narrow {
                self as $narrow
            }
        }
    )*};
}

impl_widen_narrow! {
    u8 => u16;
    u16 => u32;
    u32 => u64;
    i8 => i16;
    i16 => i32;
    i32 => i64;
    f32 => f64;
}
