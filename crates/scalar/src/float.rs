//! Floating-point helpers with pinned-down corner cases.
//!
//! The SIMD backends must produce identical lane values, so the ordering rule
//! for `min`/`max` and the rounding mode for `round` are fixed here once and
//! shared by the scalar fallback and by the lane-decomposed paths of the
//! native backends.

/// Returns the smaller of `a` and `b` under the comparison `a < b ? a : b`.
///
/// When the inputs are unordered (either is *NaN*) the result is `b`, and
/// `f32_min(+0.0, -0.0)` is `-0.0`, the exact behavior of the `minps`
/// hardware instruction family.
#[inline]
pub fn f32_min(a: f32, b: f32) -> f32 {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the larger of `a` and `b` under the comparison `a > b ? a : b`.
///
/// When the inputs are unordered (either is *NaN*) the result is `b`; see
/// [`f32_min`].
#[inline]
pub fn f32_max(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else {
        b
    }
}

/// [`f32_min`] for [`f64`] values.
#[inline]
pub fn f64_min(a: f64, b: f64) -> f64 {
    if a < b {
        a
    } else {
        b
    }
}

/// [`f32_max`] for [`f64`] values.
#[inline]
pub fn f64_max(a: f64, b: f64) -> f64 {
    if a > b {
        a
    } else {
        b
    }
}

/// Rounds to the nearest integral value, with ties going to the even one.
///
/// Uses the 2^23 magic-constant trick: adding and subtracting the first
/// float at which the representable values are exactly the integers performs
/// the rounding in the current (round-to-nearest-even) mode. Values already
/// at or beyond that magnitude, infinities, and *NaN* pass through unchanged.
/// The input's sign bit is reapplied at the end, since the magic trick loses
/// it on a zero result.
#[inline]
pub fn f32_round_ties_even(x: f32) -> f32 {
    const MAGIC: f32 = 8_388_608.0; // 2^23
    const SIGN: u32 = 1 << 31;

    if !(x < MAGIC && x > -MAGIC) {
        return x;
    }

    let rounded = if x.is_sign_negative() {
        (x - MAGIC) + MAGIC
    } else {
        (x + MAGIC) - MAGIC
    };

    f32::from_bits(rounded.to_bits() | (x.to_bits() & SIGN))
}

/// [`f32_round_ties_even`] for [`f64`] values, with the magic constant 2^52.
#[inline]
pub fn f64_round_ties_even(x: f64) -> f64 {
    const MAGIC: f64 = 4_503_599_627_370_496.0; // 2^52
    const SIGN: u64 = 1 << 63;

    if !(x < MAGIC && x > -MAGIC) {
        return x;
    }

    let rounded = if x.is_sign_negative() {
        (x - MAGIC) + MAGIC
    } else {
        (x + MAGIC) - MAGIC
    };

    f64::from_bits(rounded.to_bits() | (x.to_bits() & SIGN))
}
