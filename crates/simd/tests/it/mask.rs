use lanewise_simd::mask::{Mask16, Mask2, Mask32, Mask4, Mask8};
use lanewise_simd::v128::{U16x8, U32x4};

#[test]
fn splat_and_lanes() {
    assert_eq!(Mask4::splat(true).into_lanes(), [true; 4]);
    assert_eq!(Mask4::splat(false).into_lanes(), [false; 4]);
    assert_eq!(Mask2::zero().into_lanes(), [false; 2]);

    let lanes = [true, false, false, true, true, false, true, false];
    assert_eq!(Mask8::from_lanes(lanes).into_lanes(), lanes);
}

#[test]
fn extract_and_insert() {
    let mut mask = Mask16::splat(false);
    mask.insert(3, true).insert(15, true);
    assert!(mask.extract(3));
    assert!(mask.extract(15));
    assert!(!mask.extract(0));
    assert_eq!(mask.count_true(), 2);
}

#[test]
fn bool_slices() {
    let src = [true, false, true, false, true];
    let mask = Mask4::from_slice(&src);
    assert_eq!(mask.into_lanes(), [true, false, true, false]);

    let mut dst = [false; 4];
    mask.write_to_slice(&mut dst);
    assert_eq!(dst, [true, false, true, false]);
}

#[test]
fn logic_operators() {
    let a = Mask4::from_lanes([true, true, false, false]);
    let b = Mask4::from_lanes([true, false, true, false]);

    assert_eq!((a & b).into_lanes(), [true, false, false, false]);
    assert_eq!((a | b).into_lanes(), [true, true, true, false]);
    assert_eq!((a ^ b).into_lanes(), [false, true, true, false]);
    assert_eq!((!a).into_lanes(), [false, false, true, true]);

    assert_eq!((a & true).into_lanes(), a.into_lanes());
    assert_eq!((a & false).into_lanes(), [false; 4]);
    assert_eq!((a | true).into_lanes(), [true; 4]);
    assert_eq!((a ^ true).into_lanes(), (!a).into_lanes());

    let mut c = a;
    c &= b;
    assert_eq!(c, a & b);
    let mut c = a;
    c |= b;
    assert_eq!(c, a | b);
    let mut c = a;
    c ^= true;
    assert_eq!(c, !a);
}

#[test]
fn horizontal_reductions() {
    let all = Mask8::splat(true);
    assert!(all.all());
    assert!(all.any());

    let none = Mask8::splat(false);
    assert!(!none.all());
    assert!(!none.any());

    let mixed = Mask8::from_lanes([true, false, false, false, true, false, false, true]);
    assert!(!mixed.all());
    assert!(mixed.any());
    assert_eq!(mixed.count_true(), 3);
    assert!(mixed.parity());
    assert!(!(mixed ^ Mask8::from_lanes([true, false, false, false, false, false, false, false])).parity());
}

#[test]
fn reduction_matches_per_lane_extraction() {
    let mask = Mask16::from_lanes(core::array::from_fn(|i| i % 3 == 0));
    let mut all = true;
    let mut any = false;
    for i in 0..16 {
        all &= mask.extract(i);
        any |= mask.extract(i);
    }
    assert_eq!(mask.all(), all);
    assert_eq!(mask.any(), any);
}

#[test]
fn equality_ignores_construction_route() {
    // A mask built from booleans and a mask produced by a comparison must be
    // indistinguishable, whatever the backend encodes internally.
    let compared = U32x4::from_lanes([5, 1, 7, 3]).cmp_gt(U32x4::splat(4));
    let listed = Mask4::from_lanes([true, false, true, false]);
    assert_eq!(compared, listed);
    assert_ne!(compared, !listed);

    let compared = U16x8::splat(2).cmp_eq(2u16);
    assert_eq!(compared, Mask8::splat(true));
}

#[test]
fn halves_round_trip() {
    let lanes: [bool; 8] = [true, false, true, true, false, false, true, false];
    let mask = Mask8::from_lanes(lanes);
    let (lo, hi) = mask.split();
    assert_eq!(lo.into_lanes(), [true, false, true, true]);
    assert_eq!(hi.into_lanes(), [false, false, true, false]);
    assert_eq!(Mask8::from_halves(lo, hi), mask);

    let mask = Mask4::from_lanes([true, false, false, true]);
    let (lo, hi) = mask.split();
    assert_eq!(lo.into_lanes(), [true, false]);
    assert_eq!(hi.into_lanes(), [false, true]);
    assert_eq!(Mask4::from_halves(lo, hi), mask);

    let lanes: [bool; 16] = core::array::from_fn(|i| i % 5 == 0);
    let mask = Mask16::from_lanes(lanes);
    let (lo, hi) = mask.split();
    assert_eq!(Mask16::from_halves(lo, hi), mask);

    let lanes: [bool; 32] = core::array::from_fn(|i| i % 7 == 0);
    let mask = Mask32::from_lanes(lanes);
    let (lo, hi) = mask.split();
    assert_eq!(Mask32::from_halves(lo, hi), mask);
    assert_eq!(mask.into_lanes(), lanes);
}

#[test]
fn debug_formats_booleans() {
    #[cfg(feature = "std")]
    {
        use std::format;
        let mask = Mask2::from_lanes([true, false]);
        assert_eq!(format!("{mask:?}"), "[true, false]");
    }
}
