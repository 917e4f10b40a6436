//! Exercises the trait layer: the same routine, written once against the
//! generic interface, must behave identically for every instantiation.

use lanewise_simd::v128::{F32x4, F64x2, I16x8, I32x4, U32x4, U8x16};
use lanewise_simd::v256::{F32x8, U16x16};
use lanewise_simd::{FloatVector, IntVector, LaneMask, Vector};

/// Loads a slice, doubles it, and checks every lane through the generic
/// accessors only.
fn double_and_check<V: Vector>(src: &[V::Scalar])
where
    V::Scalar: PartialEq + core::ops::Add<Output = V::Scalar>,
{
    let vec = V::from_slice(src);
    let doubled = vec + vec;

    for i in 0..V::LANES {
        assert!(doubled.extract(i) == src[i] + src[i]);
    }

    // A full-true blend takes every lane from the other operand; a
    // full-false blend takes none.
    let all = V::Mask::splat(true);
    let none = V::Mask::splat(false);
    assert!(V::zero().blend(&all, vec).cmp_eq(vec).all());
    assert!(vec.blend(&none, V::zero()).cmp_eq(vec).all());
    assert!(!vec.cmp_ne(vec).any());
}

#[test]
fn generic_routine_over_many_shapes() {
    double_and_check::<U8x16>(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
    double_and_check::<I16x8>(&[-4, -3, -2, -1, 1, 2, 3, 4]);
    double_and_check::<U32x4>(&[10, 20, 30, 40]);
    double_and_check::<F32x4>(&[0.5, -1.5, 2.5, -3.5]);
    double_and_check::<F64x2>(&[1.25, -0.75]);
    double_and_check::<U16x16>(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
    double_and_check::<F32x8>(&[0.5, 1.5, 2.5, 3.5, -0.5, -1.5, -2.5, -3.5]);
}

fn horizontal_or<V: IntVector>(src: &[V::Scalar]) -> V::Scalar
where
    V::Scalar: lanewise_scalar::Int,
{
    V::from_slice(src).reduce_or()
}

#[test]
fn generic_integer_routine() {
    assert_eq!(horizontal_or::<U32x4>(&[1, 2, 4, 8]), 15);
    assert_eq!(horizontal_or::<I32x4>(&[1, 0, 0, 16]), 17);
}

/// The axpy kernel `a * x + y`, written against the float interface.
fn axpy<V: FloatVector>(a: V::Scalar, x: &[V::Scalar], y: &[V::Scalar]) -> V
where
    V::Scalar: lanewise_scalar::Float,
{
    V::from_slice(x).mul_add(V::splat(a), V::from_slice(y))
}

#[test]
fn generic_float_routine() {
    let result = axpy::<F32x4>(2.0, &[1.0, 2.0, 3.0, 4.0], &[0.5, 0.5, 0.5, 0.5]);
    assert_eq!(result.into_lanes(), [2.5, 4.5, 6.5, 8.5]);

    let result = axpy::<F64x2>(-1.0, &[1.0, 2.0], &[0.0, 10.0]);
    assert_eq!(result.into_lanes(), [-1.0, 8.0]);
}

#[test]
fn generic_mask_routine() {
    fn count<M: LaneMask>(pattern: &[bool]) -> usize {
        let mask = M::from_slice(pattern);
        assert_eq!(mask.any(), pattern.iter().any(|&lane| lane));
        mask.count_true()
    }

    let pattern = [true, false, true, true, false, false, false, true];
    assert_eq!(count::<lanewise_simd::mask::Mask8>(&pattern), 4);
    assert_eq!(count::<lanewise_simd::mask::Mask4>(&pattern[..4]), 3);
}
