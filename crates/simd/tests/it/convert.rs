use lanewise_simd::v128::{F32x4, F64x2, I16x8, I32x4, I8x16, U16x8, U32x4, U8x16, V128};
use lanewise_simd::v256::{F64x4, I16x16, U16x16, U32x8, U64x4};
use lanewise_simd::{Degrade, Promote};

#[test]
fn promote_widens_by_category() {
    let bytes = U8x16::from_lanes(core::array::from_fn(|i| (i * 16) as u8));
    let words: U16x16 = bytes.promote();
    assert_eq!(
        words.into_lanes(),
        core::array::from_fn::<u16, 16, _>(|i| (i * 16) as u16)
    );

    // Signed promotion sign-extends.
    let bytes = I8x16::splat(-3);
    let words: I16x16 = bytes.promote();
    assert_eq!(words.into_lanes(), [-3i16; 16]);

    let dwords = U16x8::splat(40_000).promote();
    assert_eq!(dwords.into_lanes(), [40_000u32; 8]);

    let quads: U64x4 = U32x4::splat(u32::MAX).promote();
    assert_eq!(quads.into_lanes(), [u32::MAX as u64; 4]);

    let doubles: F64x4 = F32x4::from_lanes([0.5, -1.25, 3.0, 4.5]).promote();
    assert_eq!(doubles.into_lanes(), [0.5, -1.25, 3.0, 4.5]);
}

#[test]
fn degrade_after_promote_is_identity() {
    let original = U8x16::from_lanes(core::array::from_fn(|i| (255 - i) as u8));
    assert_eq!(original.promote().degrade().into_lanes(), original.into_lanes());

    let original = I16x8::from_lanes([-32768, 32767, 0, -1, 1, 100, -100, 7]);
    assert_eq!(original.promote().degrade().into_lanes(), original.into_lanes());

    let original = F32x4::from_lanes([1.5, -2.25, 1.0e20, 0.0]);
    assert_eq!(original.promote().degrade().into_lanes(), original.into_lanes());
}

#[test]
fn degrade_truncates() {
    let words = U16x16::splat(0x1234);
    assert_eq!(words.degrade().into_lanes(), [0x34u8; 16]);

    let quads = U64x4::splat(0x1_0000_0005);
    assert_eq!(quads.degrade().into_lanes(), [5u32; 4]);
}

#[test]
fn signedness_casts_preserve_bits() {
    let unsigned = U8x16::splat(0xFF);
    assert_eq!(unsigned.to_signed().into_lanes(), [-1i8; 16]);
    assert_eq!(unsigned.to_signed().to_unsigned().into_lanes(), [0xFFu8; 16]);

    let signed = I32x4::splat(-1);
    assert_eq!(signed.to_unsigned().into_lanes(), [u32::MAX; 4]);

    let wide = U32x8::splat(0x8000_0001);
    assert_eq!(wide.to_signed().into_lanes(), [i32::MIN + 1; 8]);
}

#[test]
fn int_to_float_conversion() {
    let ints = I32x4::from_lanes([0, -5, 100, 7]);
    assert_eq!(ints.to_float().into_lanes(), [0.0, -5.0, 100.0, 7.0]);

    let uints = U32x4::from_lanes([0, 5, 3_000_000_000, 7]);
    assert_eq!(
        uints.to_float().into_lanes(),
        [0.0, 5.0, 3_000_000_000u32 as f32, 7.0]
    );
}

#[test]
fn float_to_int_rounds_half_even_and_saturates() {
    let floats = F32x4::from_lanes([2.5, -2.5, 3.5, 2.3]);
    assert_eq!(floats.to_int().into_lanes(), [2, -2, 4, 2]);

    let floats = F32x4::from_lanes([1.0e10, -1.0e10, f32::NAN, 7.7]);
    assert_eq!(
        floats.to_int().into_lanes(),
        [i32::MAX, i32::MIN, 0, 8]
    );

    let floats = F32x4::from_lanes([2.5, -2.5, 4.0e9, 1.5]);
    assert_eq!(
        floats.to_uint().into_lanes(),
        [2, 0, 4_000_000_000, 2]
    );

    let doubles = F64x2::from_lanes([0.5, -9.5]);
    assert_eq!(doubles.to_int().into_lanes(), [0, -10]);
}

#[test]
fn reinterpretation_through_v128() {
    let vec = U32x4::from_lanes([1, 2, 3, 4]);
    let bits = V128::from(vec);
    assert_eq!(U32x4::from(bits).into_lanes(), [1, 2, 3, 4]);

    // The same bits viewed as another same-width shape.
    let as_signed = I32x4::from(bits);
    assert_eq!(as_signed.into_lanes(), [1, 2, 3, 4]);

    let float_bits = V128::from(F32x4::splat(1.0));
    assert_eq!(U32x4::from(float_bits).into_lanes(), [0x3F80_0000u32; 4]);

    let ones = V128::from(U8x16::splat(0xFF));
    assert_eq!(ones.to_bits(), u128::MAX);
}

#[test]
fn native_lane_counts_match_register_width() {
    use lanewise_simd::NativeSimd;

    assert_eq!(<u8 as NativeSimd>::NATIVE_LANES, 16);
    assert_eq!(<i16 as NativeSimd>::NATIVE_LANES, 8);
    assert_eq!(<f32 as NativeSimd>::NATIVE_LANES, 4);
    assert_eq!(<f64 as NativeSimd>::NATIVE_LANES, 2);

    use lanewise_simd::vector::native;
    assert_eq!(native::F32s::LANES, 4);
    assert_eq!(native::U64s::LANES, 2);
    let ones = native::I32s::splat(1);
    assert_eq!(ones.reduce_add(), 4);
}
