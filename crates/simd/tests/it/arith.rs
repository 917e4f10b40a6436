use lanewise_simd::v128::{F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, U16x8, U32x4, U64x2, U8x16};

#[test]
fn add_operator_forms_agree() {
    let a = I32x4::from_lanes([1, 2, 3, 4]);
    let b = I32x4::from_lanes([10, 20, 30, 40]);
    assert_eq!((a + b).into_lanes(), [11, 22, 33, 44]);
    assert_eq!((a + 5).into_lanes(), [6, 7, 8, 9]);

    let mut c = a;
    c += b;
    assert_eq!(c.into_lanes(), (a + b).into_lanes());
}

#[test]
fn sub_then_add_recovers_integers() {
    let a = U16x8::from_lanes([0, 1, 100, 65535, 7, 30000, 12, 9]);
    let b = U16x8::splat(12345);
    assert_eq!(((a - b) + b).into_lanes(), a.into_lanes());
}

#[test]
fn sub_from_flips_operands() {
    let a = I32x4::splat(3);
    assert_eq!(a.sub_from(10).into_lanes(), [7i32; 4]);
    assert_eq!(
        a.sub_from(I32x4::from_lanes([1, 2, 3, 4])).into_lanes(),
        [-2, -1, 0, 1]
    );
}

#[test]
fn integer_arithmetic_wraps() {
    assert_eq!((U8x16::splat(250) + 10).into_lanes(), [4u8; 16]);
    assert_eq!((U8x16::splat(5) - 10).into_lanes(), [251u8; 16]);
    assert_eq!((U8x16::splat(20) * 20).into_lanes(), [144u8; 16]);
    assert_eq!((I8x16::splat(-128) - 1).into_lanes(), [127i8; 16]);
    assert_eq!(
        (U64x2::splat(u64::MAX) + 2).into_lanes(),
        [1u64; 2]
    );
}

#[test]
fn multiply_keeps_low_half() {
    let a = U32x4::from_lanes([0xFFFF_FFFF, 3, 0x1000_0000, 7]);
    let b = U32x4::from_lanes([2, 5, 16, 0]);
    assert_eq!(
        (a * b).into_lanes(),
        [0xFFFF_FFFE, 15, 0, 0]
    );

    let a = I64x2::from_lanes([i64::MIN / 2, 3]);
    assert_eq!((a * 2).into_lanes(), [i64::MIN, 6]);
}

#[test]
fn integer_division() {
    let a = I32x4::from_lanes([7, -7, 100, 1]);
    let b = I32x4::from_lanes([2, 2, -10, 1]);
    assert_eq!((a / b).into_lanes(), [3, -3, -10, 1]);
    assert_eq!((U8x16::splat(250) / 4).into_lanes(), [62u8; 16]);
}

#[test]
fn float_division_and_recip() {
    let a = F32x4::from_lanes([1.0, 2.0, -4.0, 0.5]);
    assert_eq!((a / 2.0).into_lanes(), [0.5, 1.0, -2.0, 0.25]);
    assert_eq!(a.recip().into_lanes(), [1.0, 0.5, -0.25, 2.0]);
    assert_eq!((F32x4::splat(1.0) / F32x4::zero()).extract(0), f32::INFINITY);
}

#[test]
fn square_matches_mul() {
    let a = I16x8::from_lanes([-5, 3, 0, 12, 1, -1, 100, 7]);
    assert_eq!(a.square().into_lanes(), (a * a).into_lanes());
    assert_eq!(a.square().extract(0), 25);
}

#[test]
fn min_max_signed_and_unsigned() {
    let a = U8x16::splat(200);
    let b = U8x16::splat(100);
    assert_eq!(a.min(b).into_lanes(), [100u8; 16]);
    assert_eq!(a.max(b).into_lanes(), [200u8; 16]);

    // Values past i16::MAX exercise the unsigned ordering.
    let a = U16x8::splat(50_000);
    assert_eq!(a.min(1_000u16).into_lanes(), [1_000u16; 8]);
    assert_eq!(a.max(1_000u16).into_lanes(), [50_000u16; 8]);

    let a = U32x4::splat(3_000_000_000);
    assert_eq!(a.max(5u32).into_lanes(), [3_000_000_000u32; 4]);

    let a = I8x16::splat(-100);
    assert_eq!(a.min(3i8).into_lanes(), [-100i8; 16]);

    let a = U64x2::from_lanes([u64::MAX, 1]);
    let b = U64x2::from_lanes([0, 2]);
    assert_eq!(a.min(b).into_lanes(), [0, 1]);
    assert_eq!(a.max(b).into_lanes(), [u64::MAX, 2]);
}

#[test]
fn float_min_max_unordered_returns_second() {
    let a = F32x4::from_lanes([1.0, f32::NAN, 3.0, -0.0]);
    let b = F32x4::from_lanes([f32::NAN, 2.0, 1.0, 0.0]);
    let min = a.min(b).into_lanes();
    assert!(min[0].is_nan());
    assert_eq!(min[1], 2.0);
    assert_eq!(min[2], 1.0);

    let max = a.max(b).into_lanes();
    assert!(max[0].is_nan());
    assert_eq!(max[1], 2.0);
    assert_eq!(max[2], 3.0);
}

#[test]
fn comparisons_produce_lane_masks() {
    let a = I32x4::from_lanes([1, 5, 5, -7]);
    let b = I32x4::from_lanes([2, 5, 4, 7]);
    assert_eq!(a.cmp_eq(b).into_lanes(), [false, true, false, false]);
    assert_eq!(a.cmp_ne(b).into_lanes(), [true, false, true, true]);
    assert_eq!(a.cmp_lt(b).into_lanes(), [true, false, false, true]);
    assert_eq!(a.cmp_le(b).into_lanes(), [true, true, false, true]);
    assert_eq!(a.cmp_gt(b).into_lanes(), [false, false, true, false]);
    assert_eq!(a.cmp_ge(b).into_lanes(), [false, true, true, false]);
}

#[test]
fn unsigned_comparison_uses_unsigned_order() {
    let a = U8x16::splat(200);
    assert_eq!(a.cmp_gt(100u8).into_lanes(), [true; 16]);

    let a = U64x2::from_lanes([u64::MAX, 1]);
    let b = U64x2::from_lanes([0, 2]);
    assert_eq!(a.cmp_gt(b).into_lanes(), [true, false]);
    assert_eq!(a.cmp_le(b).into_lanes(), [false, true]);
}

#[test]
fn float_comparison_is_unordered_aware() {
    let a = F64x2::from_lanes([f64::NAN, 1.0]);
    let b = F64x2::from_lanes([f64::NAN, 1.0]);
    assert_eq!(a.cmp_eq(b).into_lanes(), [false, true]);
    assert_eq!(a.cmp_ne(b).into_lanes(), [true, false]);
    assert_eq!(a.cmp_lt(b).into_lanes(), [false, false]);
    assert_eq!(a.cmp_ge(b).into_lanes(), [false, true]);
}

#[test]
fn fused_shapes_match_the_unfused_expansion() {
    let a = F32x4::from_lanes([5.0, 3.0, 8.0, 4.0]);
    let b = F32x4::from_lanes([13.23, 984.91, -13.42, -0.000001]);

    let result = b.mul_add(F32x4::splat(2.0), a);
    assert_eq!(result.extract(0), 13.23f32 * 2.0 + 5.0);
    let error = result.extract(0) - 31.46;
    assert!(-1e-5 < error && error < 1e-5);
    assert_eq!(result.extract(1), 984.91f32 * 2.0 + 3.0);

    assert_eq!(
        b.mul_sub(2.0f32, a).into_lanes(),
        (b * 2.0 - a).into_lanes()
    );
    assert_eq!(
        b.add_mul(a, F32x4::splat(3.0)).into_lanes(),
        ((b + a) * 3.0).into_lanes()
    );
    assert_eq!(
        b.sub_mul(a, F32x4::splat(3.0)).into_lanes(),
        ((b - a) * 3.0).into_lanes()
    );
}

#[test]
fn bitwise_operators() {
    let a = U16x8::splat(0b1100);
    let b = U16x8::splat(0b1010);
    assert_eq!((a & b).into_lanes(), [0b1000u16; 8]);
    assert_eq!((a | b).into_lanes(), [0b1110u16; 8]);
    assert_eq!((a ^ b).into_lanes(), [0b0110u16; 8]);
    assert_eq!((!U16x8::zero()).into_lanes(), [u16::MAX; 8]);
    assert_eq!((a & 0b0100u16).into_lanes(), [0b0100u16; 8]);
}

#[test]
fn shifts_by_scalar() {
    assert_eq!((U16x8::splat(0x00FF) << 4).into_lanes(), [0x0FF0u16; 8]);
    assert_eq!((U16x8::splat(0x00FF) << 16).into_lanes(), [0u16; 8]);
    assert_eq!((U16x8::splat(0x0FF0) >> 4).into_lanes(), [0x00FFu16; 8]);

    assert_eq!((U8x16::splat(0b1000_0001) << 1).into_lanes(), [0b0000_0010u8; 16]);
    assert_eq!((U8x16::splat(0b1000_0001) >> 1).into_lanes(), [0b0100_0000u8; 16]);
    assert_eq!((U8x16::splat(0xFF) >> 8).into_lanes(), [0u8; 16]);

    // Arithmetic right shift keeps the sign, and saturates to sign fill.
    assert_eq!((I16x8::splat(-16) >> 2).into_lanes(), [-4i16; 8]);
    assert_eq!((I16x8::splat(-16) >> 20).into_lanes(), [-1i16; 8]);
    assert_eq!((I8x16::splat(-64) >> 3).into_lanes(), [-8i8; 16]);
    assert_eq!((I64x2::splat(-256) >> 4).into_lanes(), [-16i64; 2]);
    assert_eq!((U64x2::splat(1 << 40) >> 40).into_lanes(), [1u64; 2]);
}

#[test]
fn shifts_by_lane_counts() {
    let counts = U16x8::from_lanes([0, 1, 2, 3, 4, 15, 16, 40]);
    let shifted = U16x8::splat(1).shl_each(counts);
    assert_eq!(shifted.into_lanes(), [1, 2, 4, 8, 16, 0x8000, 0, 0]);

    let shifted = I16x8::splat(i16::MIN).shr_each(counts);
    assert_eq!(
        shifted.into_lanes(),
        [i16::MIN, -16384, -8192, -4096, -2048, -1, -1, -1]
    );
}

#[test]
fn rotates() {
    assert_eq!(
        U8x16::splat(0b1000_0001).rotate_left(1).into_lanes(),
        [0b0000_0011u8; 16]
    );
    assert_eq!(
        U8x16::splat(0b1000_0001).rotate_right(1).into_lanes(),
        [0b1100_0000u8; 16]
    );
    // Counts reduce modulo the lane width.
    assert_eq!(
        U32x4::splat(0xDEAD_BEEF).rotate_left(32).into_lanes(),
        [0xDEAD_BEEFu32; 4]
    );

    let counts = U32x4::from_lanes([0, 4, 8, 36]);
    assert_eq!(
        U32x4::splat(0x0000_00FF).rotl_each(counts).into_lanes(),
        [0xFF, 0xFF0, 0xFF00, 0xFF0]
    );
    assert_eq!(
        U32x4::splat(0x0000_00FF).rotr_each(counts).into_lanes(),
        [0xFF, 0xF000_000F, 0xFF00_0000, 0xF000_000F]
    );
}

#[test]
fn neg_and_abs() {
    let a = I32x4::from_lanes([5, -5, 0, i32::MIN]);
    assert_eq!((-a).into_lanes(), [-5, 5, 0, i32::MIN]);
    assert_eq!(a.abs().into_lanes(), [5, 5, 0, i32::MIN]);

    let a = I8x16::splat(-100);
    assert_eq!(a.abs().into_lanes(), [100i8; 16]);

    let f = F32x4::from_lanes([-1.5, 1.5, -0.0, 0.0]);
    assert_eq!((-f).into_lanes(), [1.5, -1.5, 0.0, -0.0]);
    assert_eq!(f.abs().into_lanes(), [1.5, 1.5, 0.0, 0.0]);
    assert!(f.abs().extract(2).is_sign_positive());
    assert!((-f).extract(3).is_sign_negative());
}

#[test]
fn sqrt_exact_squares() {
    let f = F32x4::from_lanes([4.0, 9.0, 0.25, 1.0]);
    assert_eq!(f.sqrt().into_lanes(), [2.0, 3.0, 0.5, 1.0]);

    let d = F64x2::from_lanes([144.0, 2.25]);
    assert_eq!(d.sqrt().into_lanes(), [12.0, 1.5]);
}

#[test]
fn rounding_family() {
    let f = F32x4::from_lanes([2.7, -2.7, 0.5, -0.5]);
    assert_eq!(f.floor().into_lanes(), [2.0, -3.0, 0.0, -1.0]);
    assert_eq!(f.ceil().into_lanes(), [3.0, -2.0, 1.0, 0.0]);
    assert_eq!(f.trunc().into_lanes(), [2.0, -2.0, 0.0, 0.0]);
    assert_eq!(f.round().into_lanes(), [3.0, -3.0, 0.0, 0.0]);

    // Ties go to the even integer.
    let f = F32x4::from_lanes([2.5, 3.5, -2.5, 1.5]);
    assert_eq!(f.round().into_lanes(), [2.0, 4.0, -2.0, 2.0]);

    let d = F64x2::from_lanes([2.5, -3.5]);
    assert_eq!(d.round().into_lanes(), [2.0, -4.0]);

    // Values past the mantissa range are already integral.
    let f = F32x4::from_lanes([1.0e30, -1.0e30, 8_388_608.0, 0.0]);
    assert_eq!(f.round().into_lanes(), [1.0e30, -1.0e30, 8_388_608.0, 0.0]);
    assert_eq!(f.floor().into_lanes(), f.into_lanes());

    // The sign of the input survives rounding toward zero.
    let f = F32x4::from_lanes([-0.3, -0.0, 0.3, 0.0]);
    assert!(f.trunc().extract(0).is_sign_negative());
    assert!(f.ceil().extract(0).is_sign_negative());
    assert!(f.round().extract(1).is_sign_negative());
}
