use lanewise_simd::mask::{Mask16, Mask4, Mask8};
use lanewise_simd::v128::{F32x4, I32x4, U16x8, U8x16};

#[test]
fn masked_assign_is_a_per_lane_blend() {
    let mask = Mask4::from_lanes([true, false, true, false]);
    let mut a = I32x4::from_lanes([1, 2, 3, 4]);
    let b = I32x4::from_lanes([10, 20, 30, 40]);

    a.assign_masked(&mask, b);
    assert_eq!(a.into_lanes(), [10, 2, 30, 4]);
}

#[test]
fn masked_assign_holds_for_every_mask_pattern() {
    let a = U8x16::splat(1);
    let b = U8x16::splat(2);

    for pattern in 0u32..16 {
        let lanes: [bool; 16] = core::array::from_fn(|i| pattern & (1 << (i % 4)) != 0);
        let mask = Mask16::from_lanes(lanes);

        let mut out = a;
        out.assign_masked(&mask, b);
        for (i, lane) in out.into_lanes().into_iter().enumerate() {
            assert_eq!(lane, if lanes[i] { 2 } else { 1 }, "lane {i}");
        }
    }
}

#[test]
fn blend_returns_a_new_vector() {
    let mask = Mask4::from_lanes([false, true, false, true]);
    let a = F32x4::from_lanes([1.0, 2.0, 3.0, 4.0]);
    let b = F32x4::splat(0.0);
    assert_eq!(a.blend(&mask, b).into_lanes(), [1.0, 0.0, 3.0, 0.0]);
    // The operands are unchanged.
    assert_eq!(a.into_lanes(), [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn masked_arithmetic_keeps_unselected_lanes() {
    let mask = Mask4::from_lanes([true, true, false, false]);
    let a = I32x4::from_lanes([1, 2, 3, 4]);

    assert_eq!(a.add_masked(&mask, 10).into_lanes(), [11, 12, 3, 4]);
    assert_eq!(a.sub_masked(&mask, 1).into_lanes(), [0, 1, 3, 4]);
    assert_eq!(a.mul_masked(&mask, 3).into_lanes(), [3, 6, 3, 4]);
    assert_eq!(a.sub_from_masked(&mask, 10).into_lanes(), [9, 8, 3, 4]);
    assert_eq!(a.square_masked(&mask).into_lanes(), [1, 4, 3, 4]);
    assert_eq!(
        a.min_masked(&mask, I32x4::splat(2)).into_lanes(),
        [1, 2, 3, 4]
    );
    assert_eq!(
        a.max_masked(&mask, I32x4::splat(2)).into_lanes(),
        [2, 2, 3, 4]
    );
}

#[test]
fn masked_integer_division_skips_unselected_divisors() {
    let mask = Mask4::from_lanes([true, false, true, false]);
    let a = I32x4::from_lanes([10, 20, 30, 40]);
    // Unselected divisor lanes are zero and must never be read.
    let b = I32x4::from_lanes([2, 0, 3, 0]);
    assert_eq!(a.div_masked(&mask, b).into_lanes(), [5, 20, 10, 40]);
}

#[test]
fn masked_float_catalogue() {
    let mask = Mask4::from_lanes([true, false, true, false]);
    let f = F32x4::from_lanes([4.0, 9.0, 6.25, -1.5]);

    assert_eq!(f.sqrt_masked(&mask).into_lanes(), [2.0, 9.0, 2.5, -1.5]);
    assert_eq!(f.abs_masked(&mask).into_lanes(), [4.0, 9.0, 6.25, -1.5]);
    assert_eq!(f.round_masked(&mask).into_lanes(), [4.0, 9.0, 6.0, -1.5]);
    assert_eq!(f.floor_masked(&mask).into_lanes(), [4.0, 9.0, 6.0, -1.5]);
    assert_eq!(f.ceil_masked(&mask).into_lanes(), [4.0, 9.0, 7.0, -1.5]);
    assert_eq!(f.trunc_masked(&mask).into_lanes(), [4.0, 9.0, 6.0, -1.5]);
    assert_eq!(f.recip_masked(&mask).into_lanes(), [0.25, 9.0, 0.16, -1.5]);
    assert_eq!(f.div_masked(&mask, 2.0f32).into_lanes(), [2.0, 9.0, 3.125, -1.5]);
    assert_eq!(
        f.mul_add_masked(&mask, 2.0f32, 1.0f32).into_lanes(),
        [9.0, 9.0, 13.5, -1.5]
    );
}

#[test]
fn masked_bitwise_and_shifts() {
    let mask = Mask8::from_lanes([true, true, true, true, false, false, false, false]);
    let a = U16x8::splat(0b1100);

    assert_eq!(
        a.and_masked(&mask, 0b1010u16).into_lanes(),
        [0b1000, 0b1000, 0b1000, 0b1000, 0b1100, 0b1100, 0b1100, 0b1100]
    );
    assert_eq!(
        a.or_masked(&mask, 0b0001u16).into_lanes(),
        [0b1101, 0b1101, 0b1101, 0b1101, 0b1100, 0b1100, 0b1100, 0b1100]
    );
    assert_eq!(
        a.xor_masked(&mask, 0b0100u16).into_lanes(),
        [0b1000, 0b1000, 0b1000, 0b1000, 0b1100, 0b1100, 0b1100, 0b1100]
    );
    assert_eq!(a.not_masked(&mask).extract(0), !0b1100u16);
    assert_eq!(a.not_masked(&mask).extract(7), 0b1100);
    assert_eq!(
        a.shl_masked(&mask, 1).into_lanes(),
        [0b11000, 0b11000, 0b11000, 0b11000, 0b1100, 0b1100, 0b1100, 0b1100]
    );
    assert_eq!(
        a.shr_masked(&mask, 2).into_lanes(),
        [0b11, 0b11, 0b11, 0b11, 0b1100, 0b1100, 0b1100, 0b1100]
    );
    assert_eq!(
        a.rotate_left_masked(&mask, 1).extract(0),
        0b11000
    );
    assert_eq!(
        a.rotate_right_masked(&mask, 2).extract(7),
        0b1100
    );
}

#[test]
fn abs_masked_on_signed_lanes() {
    let mask = Mask4::from_lanes([true, false, true, false]);
    let a = I32x4::from_lanes([-5, -6, 7, -8]);
    assert_eq!(a.abs_masked(&mask).into_lanes(), [5, -6, 7, -8]);
}
