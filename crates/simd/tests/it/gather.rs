use lanewise_simd::mask::Mask4;
use lanewise_simd::swizzle::{Swizzle4, Swizzle8};
use lanewise_simd::v128::{I16x8, U32x4};

#[test]
fn swizzle_patterns_are_index_arrays() {
    let mut pattern = Swizzle8::new([0, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(Swizzle8::LANES, 8);
    assert_eq!(pattern.extract(5), 5);

    pattern.insert(0, 7);
    assert_eq!(pattern.into_lanes(), [7, 1, 2, 3, 4, 5, 6, 7]);

    assert_eq!(Swizzle4::splat(2).into_lanes(), [2; 4]);
    assert_eq!(Swizzle4::from_slice(&[3, 2, 1, 0, 9]).into_lanes(), [3, 2, 1, 0]);
    assert_eq!(Swizzle4::from([1u32, 1, 0, 0]), Swizzle4::new([1, 1, 0, 0]));
}

#[test]
fn gather_by_pattern() {
    let table = [10u32, 11, 12, 13, 14, 15, 16, 17];
    let gathered = U32x4::gather(&table, Swizzle4::new([7, 0, 3, 3]));
    assert_eq!(gathered.into_lanes(), [17, 10, 13, 13]);

    // A raw index array is accepted directly.
    let gathered = U32x4::gather(&table, [1u32, 2, 4, 6]);
    assert_eq!(gathered.into_lanes(), [11, 12, 14, 16]);
}

#[test]
#[should_panic]
fn gather_out_of_bounds_panics() {
    let table = [1u32, 2, 3];
    let _ = U32x4::gather(&table, [0u32, 1, 2, 3]);
}

#[test]
fn gather_unchecked_matches_gather() {
    let table = [5i16, 6, 7, 8, 9, 10, 11, 12];
    let indices = [7u32, 6, 5, 4, 3, 2, 1, 0];
    let checked = I16x8::gather(&table, indices);
    // SAFETY: every index is within `table`.
    let unchecked = unsafe { I16x8::gather_unchecked(table.as_ptr(), indices) };
    assert_eq!(checked.into_lanes(), unchecked.into_lanes());
}

#[test]
fn masked_gather_keeps_unselected_lanes_and_skips_their_indices() {
    let table = [100u32, 200];
    let mask = Mask4::from_lanes([true, false, true, false]);
    let mut vec = U32x4::from_lanes([1, 2, 3, 4]);
    // Unselected indices point far outside the table and must not be read.
    vec.gather_masked(&mask, &table, [0u32, 999, 1, 999]);
    assert_eq!(vec.into_lanes(), [100, 2, 200, 4]);
}

#[test]
fn scatter_by_pattern() {
    let vec = U32x4::from_lanes([1, 2, 3, 4]);
    let mut dst = [0u32; 8];
    vec.scatter(&mut dst, [6u32, 4, 2, 0]);
    assert_eq!(dst, [4, 0, 3, 0, 2, 0, 1, 0]);
}

#[test]
fn scatter_collisions_resolve_to_the_higher_lane() {
    let vec = U32x4::from_lanes([1, 2, 3, 4]);
    let mut dst = [0u32; 2];
    vec.scatter(&mut dst, [0u32, 0, 1, 1]);
    assert_eq!(dst, [2, 4]);
}

#[test]
fn masked_scatter_writes_only_selected_lanes() {
    let vec = U32x4::from_lanes([1, 2, 3, 4]);
    let mask = Mask4::from_lanes([false, true, false, true]);
    let mut dst = [9u32; 4];
    // Unselected indices are out of bounds and must not be touched.
    vec.scatter_masked(&mask, &mut dst, [999u32, 0, 999, 3]);
    assert_eq!(dst, [2, 9, 9, 4]);
}

#[test]
fn scatter_unchecked_matches_scatter() {
    let vec = I16x8::from_lanes([1, 2, 3, 4, 5, 6, 7, 8]);
    let indices = [0u32, 2, 4, 6, 8, 10, 12, 14];

    let mut checked = [0i16; 16];
    vec.scatter(&mut checked, indices);

    let mut unchecked = [0i16; 16];
    // SAFETY: every index is within the destination buffer.
    unsafe { vec.scatter_unchecked(unchecked.as_mut_ptr(), indices) };
    assert_eq!(checked, unchecked);
}

#[test]
fn swizzle_reorders_lanes() {
    let vec = U32x4::from_lanes([10, 20, 30, 40]);
    let reversed = vec.swizzle(&Swizzle4::new([3, 2, 1, 0]));
    assert_eq!(reversed.into_lanes(), [40, 30, 20, 10]);

    let duplicated = vec.swizzle(&Swizzle4::splat(1));
    assert_eq!(duplicated.into_lanes(), [20, 20, 20, 20]);
}

#[test]
fn masked_swizzle_keeps_unselected_lanes() {
    let vec = U32x4::from_lanes([10, 20, 30, 40]);
    let mask = Mask4::from_lanes([true, false, false, true]);
    let shuffled = vec.swizzle_masked(&mask, &Swizzle4::new([3, 2, 1, 0]));
    assert_eq!(shuffled.into_lanes(), [40, 20, 30, 10]);
}
