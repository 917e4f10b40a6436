//! Provides macros emitting the backend-independent part of the shape
//! operation catalogue.
//!
//! The per-width interpretation modules define each shape's representation
//! and the operations that differ between a single register and a register
//! pair; everything here is composed from that surface (lane round-trips,
//! blend composition, operator plumbing) and is therefore identical for
//! every width and backend by construction.

/// Emits the catalogue items shared by every shape category.
#[macro_export]
#[doc(hidden)]
macro_rules! shape_common {
    ($name:ident = [$elem:tt; $lanes:tt], mask: $mask:ident, swizzle: $swizzle:ident) => {
        impl $name {
            /// Number of lanes in the vector.
            pub const LANES: usize = $lanes;

            /// Returns the number of lanes in the vector.
            #[must_use]
            pub const fn lanes() -> usize {
                $lanes
            }

            /// Creates a vector with every lane zero.
            #[inline]
            pub fn zero() -> Self {
                Self::splat(<$elem as ::lanewise_scalar::Scalar>::ZERO)
            }

            /// Creates a vector from the first `LANES` elements of `src`.
            ///
            /// The slice data may have any alignment.
            ///
            /// # Panics
            ///
            /// Panics if `src.len()` is less than `LANES`.
            #[inline]
            pub fn from_slice(src: &[$elem]) -> Self {
                assert!(src.len() >= $lanes, "source slice shorter than LANES");
                // SAFETY: the length was checked above, and `load` allows
                // unaligned memory.
                unsafe { Self::load(src.as_ptr()) }
            }

            /// Writes each lane to the first `LANES` elements of `dst`.
            ///
            /// # Panics
            ///
            /// Panics if `dst.len()` is less than `LANES`.
            #[inline]
            pub fn write_to_slice(&self, dst: &mut [$elem]) {
                assert!(dst.len() >= $lanes, "destination slice shorter than LANES");
                // SAFETY: the length was checked above, and `store` allows
                // unaligned memory.
                unsafe { self.store(dst.as_mut_ptr()) }
            }

            /// Returns the value of lane `lane`.
            ///
            /// # Panics
            ///
            /// Panics if `lane` is not less than `LANES`.
            #[inline]
            pub fn extract(&self, lane: usize) -> $elem {
                self.into_lanes()[lane]
            }

            /// Overwrites the value of lane `lane`, leaving every other lane
            /// untouched, and returns the vector for chaining.
            ///
            /// # Panics
            ///
            /// Panics if `lane` is not less than `LANES`.
            #[inline]
            pub fn insert(&mut self, lane: usize, value: $elem) -> &mut Self {
                let mut lanes = self.into_lanes();
                lanes[lane] = value;
                *self = Self::from_lanes(lanes);
                self
            }

            /// Replaces every lane with the corresponding lane of `src`.
            #[inline]
            pub fn assign(&mut self, src: impl Into<Self>) -> &mut Self {
                *self = src.into();
                self
            }

            /// Replaces the selected lanes with the corresponding lanes of
            /// `src`, leaving unselected lanes at their prior value.
            ///
            /// This is a per-lane blend; which lanes are written never
            /// affects the instructions executed.
            #[inline]
            pub fn assign_masked(&mut self, mask: &$mask, src: impl Into<Self>) -> &mut Self {
                *self = self.blend(mask, src.into());
                self
            }

            /// Loads the selected lanes from `src`, leaving unselected lanes
            /// at their prior value.
            ///
            /// Only selected positions of `src` are read, so `src` may be
            /// shorter than `LANES` as long as no selected lane lies at or
            /// past its end, the usual shape of a partial-vector tail.
            ///
            /// # Panics
            ///
            /// Panics if a selected lane lies at or past `src.len()`.
            #[inline]
            pub fn load_masked(&mut self, mask: &$mask, src: &[$elem]) -> &mut Self {
                let select = mask.into_lanes();
                let mut lanes = self.into_lanes();
                for i in 0..$lanes {
                    if select[i] {
                        lanes[i] = src[i];
                    }
                }
                *self = Self::from_lanes(lanes);
                self
            }

            /// Stores the selected lanes to `dst`; unselected positions of
            /// `dst` are neither read nor written.
            ///
            /// # Panics
            ///
            /// Panics if a selected lane lies at or past `dst.len()`.
            #[inline]
            pub fn store_masked(&self, mask: &$mask, dst: &mut [$elem]) {
                let select = mask.into_lanes();
                let lanes = self.into_lanes();
                for i in 0..$lanes {
                    if select[i] {
                        dst[i] = lanes[i];
                    }
                }
            }

            /// Reads one lane per pattern index from `base`.
            ///
            /// # Panics
            ///
            /// Panics if any index is not less than `base.len()`.
            #[inline]
            pub fn gather(base: &[$elem], indices: impl Into<$swizzle>) -> Self {
                let indices = indices.into().into_lanes();
                Self::from_lanes(core::array::from_fn(|i| base[indices[i] as usize]))
            }

            /// Reads one lane per pattern index from `base` without bounds
            /// checks.
            ///
            /// # Safety
            ///
            /// For every lane, `base + index` must be valid for an unaligned
            /// read of one element.
            #[inline]
            pub unsafe fn gather_unchecked(
                base: *const $elem,
                indices: impl Into<$swizzle>,
            ) -> Self {
                let indices = indices.into().into_lanes();
                Self::from_lanes(core::array::from_fn(|i| {
                    // SAFETY: the caller guarantees the offset is readable.
                    unsafe { base.add(indices[i] as usize).read_unaligned() }
                }))
            }

            /// Reads the selected lanes from `base` at their pattern
            /// indices, leaving unselected lanes at their prior value.
            ///
            /// Unselected indices are never read from `base`.
            ///
            /// # Panics
            ///
            /// Panics if a selected index is not less than `base.len()`.
            #[inline]
            pub fn gather_masked(
                &mut self,
                mask: &$mask,
                base: &[$elem],
                indices: impl Into<$swizzle>,
            ) -> &mut Self {
                let indices = indices.into().into_lanes();
                let select = mask.into_lanes();
                let mut lanes = self.into_lanes();
                for i in 0..$lanes {
                    if select[i] {
                        lanes[i] = base[indices[i] as usize];
                    }
                }
                *self = Self::from_lanes(lanes);
                self
            }

            /// Writes one lane per pattern index into `dst`.
            ///
            /// When two pattern indices collide the higher lane wins.
            ///
            /// # Panics
            ///
            /// Panics if any index is not less than `dst.len()`.
            #[inline]
            pub fn scatter(&self, dst: &mut [$elem], indices: impl Into<$swizzle>) {
                let indices = indices.into().into_lanes();
                let lanes = self.into_lanes();
                for i in 0..$lanes {
                    dst[indices[i] as usize] = lanes[i];
                }
            }

            /// Writes one lane per pattern index into `dst` without bounds
            /// checks.
            ///
            /// # Safety
            ///
            /// For every lane, `dst + index` must be valid for an unaligned
            /// write of one element.
            #[inline]
            pub unsafe fn scatter_unchecked(
                &self,
                dst: *mut $elem,
                indices: impl Into<$swizzle>,
            ) {
                let indices = indices.into().into_lanes();
                let lanes = self.into_lanes();
                for i in 0..$lanes {
                    // SAFETY: the caller guarantees the offset is writable.
                    unsafe { dst.add(indices[i] as usize).write_unaligned(lanes[i]) };
                }
            }

            /// Writes the selected lanes into `dst` at their pattern
            /// indices; unselected lanes are not written and their indices
            /// are never read.
            ///
            /// # Panics
            ///
            /// Panics if a selected index is not less than `dst.len()`.
            #[inline]
            pub fn scatter_masked(
                &self,
                mask: &$mask,
                dst: &mut [$elem],
                indices: impl Into<$swizzle>,
            ) {
                let indices = indices.into().into_lanes();
                let select = mask.into_lanes();
                let lanes = self.into_lanes();
                for i in 0..$lanes {
                    if select[i] {
                        dst[indices[i] as usize] = lanes[i];
                    }
                }
            }

            /// Builds a vector whose lane `i` is lane `pattern[i]` of `self`.
            ///
            /// # Panics
            ///
            /// Panics if any pattern index is not less than `LANES`.
            #[inline]
            pub fn swizzle(self, pattern: &$swizzle) -> Self {
                let src = self.into_lanes();
                let indices = pattern.into_lanes();
                Self::from_lanes(core::array::from_fn(|i| src[indices[i] as usize]))
            }

            /// [`swizzle`](Self::swizzle) applied to the selected lanes only;
            /// unselected lanes keep their prior value.
            #[inline]
            pub fn swizzle_masked(self, mask: &$mask, pattern: &$swizzle) -> Self {
                self.blend(mask, self.swizzle(pattern))
            }

            /// Adds `rhs` to the selected lanes, leaving unselected lanes at
            /// their prior value.
            #[inline]
            pub fn add_masked(self, mask: &$mask, rhs: impl Into<Self>) -> Self {
                self.blend(mask, self + rhs.into())
            }

            /// Subtracts `rhs` from the selected lanes, leaving unselected
            /// lanes at their prior value.
            #[inline]
            pub fn sub_masked(self, mask: &$mask, rhs: impl Into<Self>) -> Self {
                self.blend(mask, self - rhs.into())
            }

            /// Subtracts each lane of `self` from the corresponding lane of
            /// `lhs`, i.e. subtraction with the operand order flipped.
            #[inline]
            pub fn sub_from(self, lhs: impl Into<Self>) -> Self {
                lhs.into() - self
            }

            /// [`sub_from`](Self::sub_from) applied to the selected lanes
            /// only; unselected lanes keep their prior value.
            #[inline]
            pub fn sub_from_masked(self, mask: &$mask, lhs: impl Into<Self>) -> Self {
                self.blend(mask, lhs.into() - self)
            }

            /// Multiplies the selected lanes by `rhs`, leaving unselected
            /// lanes at their prior value.
            #[inline]
            pub fn mul_masked(self, mask: &$mask, rhs: impl Into<Self>) -> Self {
                self.blend(mask, self * rhs.into())
            }

            /// Lane-wise minimum of the selected lanes; unselected lanes
            /// keep their prior value.
            #[inline]
            pub fn min_masked(self, mask: &$mask, rhs: impl Into<Self>) -> Self {
                self.blend(mask, self.min(rhs))
            }

            /// Lane-wise maximum of the selected lanes; unselected lanes
            /// keep their prior value.
            #[inline]
            pub fn max_masked(self, mask: &$mask, rhs: impl Into<Self>) -> Self {
                self.blend(mask, self.max(rhs))
            }

            /// Multiplies every lane by itself.
            #[inline]
            pub fn square(self) -> Self {
                self * self
            }

            /// [`square`](Self::square) applied to the selected lanes only;
            /// unselected lanes keep their prior value.
            #[inline]
            pub fn square_masked(self, mask: &$mask) -> Self {
                self.blend(mask, self * self)
            }

            /// Returns the index of the first lane holding the largest value.
            ///
            /// Lanes that compare unordered against the running maximum
            /// (floating-point *NaN*) never win.
            #[inline]
            pub fn max_index(self) -> usize {
                let lanes = self.into_lanes();
                let mut best = 0;
                for i in 1..$lanes {
                    if lanes[i] > lanes[best] {
                        best = i;
                    }
                }
                best
            }

            /// Returns the index of the first lane holding the smallest
            /// value; see [`max_index`](Self::max_index).
            #[inline]
            pub fn min_index(self) -> usize {
                let lanes = self.into_lanes();
                let mut best = 0;
                for i in 1..$lanes {
                    if lanes[i] < lanes[best] {
                        best = i;
                    }
                }
                best
            }
        }

        impl From<$elem> for $name {
            /// Broadcasts the value to every lane.
            #[inline]
            fn from(value: $elem) -> Self {
                Self::splat(value)
            }
        }

        impl From<[$elem; $lanes]> for $name {
            #[inline]
            fn from(lanes: [$elem; $lanes]) -> Self {
                Self::from_lanes(lanes)
            }
        }

        impl From<$name> for [$elem; $lanes] {
            #[inline]
            fn from(vec: $name) -> Self {
                vec.into_lanes()
            }
        }

        impl core::ops::Add<$elem> for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: $elem) -> Self {
                self + Self::splat(rhs)
            }
        }

        impl core::ops::Sub<$elem> for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: $elem) -> Self {
                self - Self::splat(rhs)
            }
        }

        impl core::ops::Mul<$elem> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $elem) -> Self {
                self * Self::splat(rhs)
            }
        }

        impl core::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl core::ops::AddAssign<$elem> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: $elem) {
                *self = *self + rhs;
            }
        }

        impl core::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl core::ops::SubAssign<$elem> for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: $elem) {
                *self = *self - rhs;
            }
        }

        impl core::ops::MulAssign for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl core::ops::MulAssign<$elem> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: $elem) {
                *self = *self * rhs;
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_list().entries(self.into_lanes()).finish()
            }
        }
    };
}

/// Emits the catalogue items shared by every integer shape.
#[macro_export]
#[doc(hidden)]
macro_rules! shape_int {
    ($name:ident = [$elem:tt; $lanes:tt], mask: $mask:ident, counts: $counts:ident, $category:ident) => {
        impl $name {
            /// Sums every lane with wrapping arithmetic.
            #[inline]
            pub fn reduce_add(self) -> $elem {
                self.into_lanes()
                    .into_iter()
                    .fold(0, |acc: $elem, lane| acc.wrapping_add(lane))
            }

            /// Sums the selected lanes with wrapping arithmetic; an empty
            /// selection yields 0.
            #[inline]
            pub fn reduce_add_masked(self, mask: &$mask) -> $elem {
                let select = mask.into_lanes();
                let lanes = self.into_lanes();
                let mut acc: $elem = 0;
                for i in 0..$lanes {
                    if select[i] {
                        acc = acc.wrapping_add(lanes[i]);
                    }
                }
                acc
            }

            /// Multiplies every lane together with wrapping arithmetic.
            #[inline]
            pub fn reduce_mul(self) -> $elem {
                self.into_lanes()
                    .into_iter()
                    .fold(1, |acc: $elem, lane| acc.wrapping_mul(lane))
            }

            /// Multiplies the selected lanes together with wrapping
            /// arithmetic; an empty selection yields 1.
            #[inline]
            pub fn reduce_mul_masked(self, mask: &$mask) -> $elem {
                let select = mask.into_lanes();
                let lanes = self.into_lanes();
                let mut acc: $elem = 1;
                for i in 0..$lanes {
                    if select[i] {
                        acc = acc.wrapping_mul(lanes[i]);
                    }
                }
                acc
            }

            /// Returns the smallest lane value.
            #[inline]
            pub fn reduce_min(self) -> $elem {
                let lanes = self.into_lanes();
                lanes[1..]
                    .iter()
                    .fold(lanes[0], |acc, &lane| core::cmp::min(acc, lane))
            }

            /// Returns the smallest selected lane value; an empty selection
            #[doc = concat!("yields [`", stringify!($elem), "::MAX`].")]
            #[inline]
            pub fn reduce_min_masked(self, mask: &$mask) -> $elem {
                let select = mask.into_lanes();
                let lanes = self.into_lanes();
                let mut acc = <$elem>::MAX;
                for i in 0..$lanes {
                    if select[i] {
                        acc = core::cmp::min(acc, lanes[i]);
                    }
                }
                acc
            }

            /// Returns the largest lane value.
            #[inline]
            pub fn reduce_max(self) -> $elem {
                let lanes = self.into_lanes();
                lanes[1..]
                    .iter()
                    .fold(lanes[0], |acc, &lane| core::cmp::max(acc, lane))
            }

            /// Returns the largest selected lane value; an empty selection
            #[doc = concat!("yields [`", stringify!($elem), "::MIN`].")]
            #[inline]
            pub fn reduce_max_masked(self, mask: &$mask) -> $elem {
                let select = mask.into_lanes();
                let lanes = self.into_lanes();
                let mut acc = <$elem>::MIN;
                for i in 0..$lanes {
                    if select[i] {
                        acc = core::cmp::max(acc, lanes[i]);
                    }
                }
                acc
            }

            /// ANDs every lane together.
            #[inline]
            pub fn reduce_and(self) -> $elem {
                self.into_lanes()
                    .into_iter()
                    .fold(!0, |acc: $elem, lane| acc & lane)
            }

            /// ANDs the selected lanes together; an empty selection yields
            /// all-ones.
            #[inline]
            pub fn reduce_and_masked(self, mask: &$mask) -> $elem {
                let select = mask.into_lanes();
                let lanes = self.into_lanes();
                let mut acc: $elem = !0;
                for i in 0..$lanes {
                    if select[i] {
                        acc &= lanes[i];
                    }
                }
                acc
            }

            /// ORs every lane together.
            #[inline]
            pub fn reduce_or(self) -> $elem {
                self.into_lanes().into_iter().fold(0, |acc: $elem, lane| acc | lane)
            }

            /// ORs the selected lanes together; an empty selection yields 0.
            #[inline]
            pub fn reduce_or_masked(self, mask: &$mask) -> $elem {
                let select = mask.into_lanes();
                let lanes = self.into_lanes();
                let mut acc: $elem = 0;
                for i in 0..$lanes {
                    if select[i] {
                        acc |= lanes[i];
                    }
                }
                acc
            }

            /// XORs every lane together.
            #[inline]
            pub fn reduce_xor(self) -> $elem {
                self.into_lanes().into_iter().fold(0, |acc: $elem, lane| acc ^ lane)
            }

            /// XORs the selected lanes together; an empty selection yields 0.
            #[inline]
            pub fn reduce_xor_masked(self, mask: &$mask) -> $elem {
                let select = mask.into_lanes();
                let lanes = self.into_lanes();
                let mut acc: $elem = 0;
                for i in 0..$lanes {
                    if select[i] {
                        acc ^= lanes[i];
                    }
                }
                acc
            }

            /// ANDs `rhs` into the selected lanes, leaving unselected lanes
            /// at their prior value.
            #[inline]
            pub fn and_masked(self, mask: &$mask, rhs: impl Into<Self>) -> Self {
                self.blend(mask, self & rhs.into())
            }

            /// ORs `rhs` into the selected lanes, leaving unselected lanes
            /// at their prior value.
            #[inline]
            pub fn or_masked(self, mask: &$mask, rhs: impl Into<Self>) -> Self {
                self.blend(mask, self | rhs.into())
            }

            /// XORs `rhs` into the selected lanes, leaving unselected lanes
            /// at their prior value.
            #[inline]
            pub fn xor_masked(self, mask: &$mask, rhs: impl Into<Self>) -> Self {
                self.blend(mask, self ^ rhs.into())
            }

            /// Inverts the bits of the selected lanes, leaving unselected
            /// lanes at their prior value.
            #[inline]
            pub fn not_masked(self, mask: &$mask) -> Self {
                self.blend(mask, !self)
            }

            /// Shifts the selected lanes left by `count` bits, leaving
            /// unselected lanes at their prior value.
            #[inline]
            pub fn shl_masked(self, mask: &$mask, count: u32) -> Self {
                self.blend(mask, self << count)
            }

            /// Shifts the selected lanes right by `count` bits, leaving
            /// unselected lanes at their prior value.
            #[inline]
            pub fn shr_masked(self, mask: &$mask, count: u32) -> Self {
                self.blend(mask, self >> count)
            }

            /// Shifts each lane left by the count in the corresponding lane
            /// of `counts`; counts at or above the lane width yield 0.
            #[inline]
            pub fn shl_each(self, counts: $counts) -> Self {
                let lanes = self.into_lanes();
                let counts = counts.into_lanes();
                Self::from_lanes(core::array::from_fn(|i| {
                    if u64::from(counts[i]) >= u64::from(<$elem>::BITS) {
                        0
                    } else {
                        lanes[i] << counts[i]
                    }
                }))
            }

            /// Shifts each lane right by the count in the corresponding lane
            /// of `counts`.
            ///
            /// Logical for unsigned lanes (counts at or above the lane width
            /// yield 0), arithmetic for signed lanes (such counts fill with
            /// the sign bit).
            #[inline]
            pub fn shr_each(self, counts: $counts) -> Self {
                let lanes = self.into_lanes();
                let counts = counts.into_lanes();
                Self::from_lanes(core::array::from_fn(|i| {
                    $crate::shape_int!(@shr_lane $category, $elem, lanes[i], counts[i])
                }))
            }

            /// Rotates every lane's bits left by `count` (taken modulo the
            /// lane width).
            #[inline]
            pub fn rotate_left(self, count: u32) -> Self {
                Self::from_lanes(self.into_lanes().map(|lane| lane.rotate_left(count)))
            }

            /// Rotates the bits of the selected lanes left by `count`,
            /// leaving unselected lanes at their prior value.
            #[inline]
            pub fn rotate_left_masked(self, mask: &$mask, count: u32) -> Self {
                self.blend(mask, self.rotate_left(count))
            }

            /// Rotates every lane's bits right by `count` (taken modulo the
            /// lane width).
            #[inline]
            pub fn rotate_right(self, count: u32) -> Self {
                Self::from_lanes(self.into_lanes().map(|lane| lane.rotate_right(count)))
            }

            /// Rotates the bits of the selected lanes right by `count`,
            /// leaving unselected lanes at their prior value.
            #[inline]
            pub fn rotate_right_masked(self, mask: &$mask, count: u32) -> Self {
                self.blend(mask, self.rotate_right(count))
            }

            /// Rotates each lane's bits left by the count in the
            /// corresponding lane of `counts`.
            #[inline]
            pub fn rotl_each(self, counts: $counts) -> Self {
                let lanes = self.into_lanes();
                let counts = counts.into_lanes();
                Self::from_lanes(core::array::from_fn(|i| {
                    lanes[i].rotate_left(counts[i] as u32)
                }))
            }

            /// Rotates each lane's bits right by the count in the
            /// corresponding lane of `counts`.
            #[inline]
            pub fn rotr_each(self, counts: $counts) -> Self {
                let lanes = self.into_lanes();
                let counts = counts.into_lanes();
                Self::from_lanes(core::array::from_fn(|i| {
                    lanes[i].rotate_right(counts[i] as u32)
                }))
            }

            /// Divides the selected lanes by `rhs`, leaving unselected lanes
            /// at their prior value.
            ///
            /// Unselected divisor lanes are never read, so they may be zero.
            ///
            /// # Panics
            ///
            /// Panics if a selected divisor lane is zero.
            #[inline]
            pub fn div_masked(self, mask: &$mask, rhs: impl Into<Self>) -> Self {
                let select = mask.into_lanes();
                let lanes = self.into_lanes();
                let divisors = rhs.into().into_lanes();
                Self::from_lanes(core::array::from_fn(|i| {
                    if select[i] {
                        lanes[i] / divisors[i]
                    } else {
                        lanes[i]
                    }
                }))
            }
        }

        impl core::ops::Div for $name {
            type Output = Self;

            /// Lane-wise integer division, decomposed into scalar divisions.
            ///
            /// # Panics
            ///
            /// Panics if any divisor lane is zero.
            #[inline]
            fn div(self, rhs: Self) -> Self {
                let lanes = self.into_lanes();
                let divisors = rhs.into_lanes();
                Self::from_lanes(core::array::from_fn(|i| lanes[i] / divisors[i]))
            }
        }

        impl core::ops::Div<$elem> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $elem) -> Self {
                self / Self::splat(rhs)
            }
        }

        impl core::ops::DivAssign for $name {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl core::ops::DivAssign<$elem> for $name {
            #[inline]
            fn div_assign(&mut self, rhs: $elem) {
                *self = *self / rhs;
            }
        }

        impl core::ops::BitAnd<$elem> for $name {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: $elem) -> Self {
                self & Self::splat(rhs)
            }
        }

        impl core::ops::BitOr<$elem> for $name {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: $elem) -> Self {
                self | Self::splat(rhs)
            }
        }

        impl core::ops::BitXor<$elem> for $name {
            type Output = Self;

            #[inline]
            fn bitxor(self, rhs: $elem) -> Self {
                self ^ Self::splat(rhs)
            }
        }

        impl core::ops::BitAndAssign for $name {
            #[inline]
            fn bitand_assign(&mut self, rhs: Self) {
                *self = *self & rhs;
            }
        }

        impl core::ops::BitAndAssign<$elem> for $name {
            #[inline]
            fn bitand_assign(&mut self, rhs: $elem) {
                *self = *self & rhs;
            }
        }

        impl core::ops::BitOrAssign for $name {
            #[inline]
            fn bitor_assign(&mut self, rhs: Self) {
                *self = *self | rhs;
            }
        }

        impl core::ops::BitOrAssign<$elem> for $name {
            #[inline]
            fn bitor_assign(&mut self, rhs: $elem) {
                *self = *self | rhs;
            }
        }

        impl core::ops::BitXorAssign for $name {
            #[inline]
            fn bitxor_assign(&mut self, rhs: Self) {
                *self = *self ^ rhs;
            }
        }

        impl core::ops::BitXorAssign<$elem> for $name {
            #[inline]
            fn bitxor_assign(&mut self, rhs: $elem) {
                *self = *self ^ rhs;
            }
        }

        impl core::ops::ShlAssign<u32> for $name {
            #[inline]
            fn shl_assign(&mut self, count: u32) {
                *self = *self << count;
            }
        }

        impl core::ops::ShrAssign<u32> for $name {
            #[inline]
            fn shr_assign(&mut self, count: u32) {
                *self = *self >> count;
            }
        }
    };

    (@shr_lane unsigned, $elem:tt, $lane:expr, $count:expr) => {
        if u64::from($count) >= u64::from(<$elem>::BITS) {
            0
        } else {
            $lane >> $count
        }
    };

    (@shr_lane signed, $elem:tt, $lane:expr, $count:expr) => {
        $lane >> core::cmp::min(u64::from($count), u64::from(<$elem>::BITS - 1))
    };
}

/// Emits the extra catalogue items of the signed integer shapes.
#[macro_export]
#[doc(hidden)]
macro_rules! shape_signed {
    ($name:ident = [$elem:tt; $lanes:tt], mask: $mask:ident) => {
        impl $name {
            /// Lane-wise absolute value.
            ///
            #[doc = concat!("[`", stringify!($elem), "::MIN`] stays itself ")]
            /// (two's-complement wrap).
            #[inline]
            pub fn abs(self) -> Self {
                let negative = self.cmp_lt(<$elem as ::lanewise_scalar::Scalar>::ZERO);
                self.blend(&negative, -self)
            }

            /// [`abs`](Self::abs) applied to the selected lanes only;
            /// unselected lanes keep their prior value.
            #[inline]
            pub fn abs_masked(self, mask: &$mask) -> Self {
                self.blend(mask, self.abs())
            }
        }

        impl core::ops::Neg for $name {
            type Output = Self;

            /// Lane-wise two's-complement negation.
            #[inline]
            fn neg(self) -> Self {
                Self::zero() - self
            }
        }
    };
}

/// Emits the extra catalogue items of the floating-point shapes.
#[macro_export]
#[doc(hidden)]
macro_rules! shape_float {
    ($name:ident = [$elem:tt; $lanes:tt], mask: $mask:ident, fmin: $fmin:path, fmax: $fmax:path) => {
        impl $name {
            /// Lane-wise reciprocal, computed as an exact `1/x` division.
            #[inline]
            pub fn recip(self) -> Self {
                Self::splat(1.0) / self
            }

            /// [`recip`](Self::recip) applied to the selected lanes only;
            /// unselected lanes keep their prior value.
            #[inline]
            pub fn recip_masked(self, mask: &$mask) -> Self {
                self.blend(mask, self.recip())
            }

            /// [`sqrt`](Self::sqrt) applied to the selected lanes only;
            /// unselected lanes keep their prior value.
            #[inline]
            pub fn sqrt_masked(self, mask: &$mask) -> Self {
                self.blend(mask, self.sqrt())
            }

            /// [`abs`](Self::abs) applied to the selected lanes only;
            /// unselected lanes keep their prior value.
            #[inline]
            pub fn abs_masked(self, mask: &$mask) -> Self {
                self.blend(mask, self.abs())
            }

            /// [`floor`](Self::floor) applied to the selected lanes only;
            /// unselected lanes keep their prior value.
            #[inline]
            pub fn floor_masked(self, mask: &$mask) -> Self {
                self.blend(mask, self.floor())
            }

            /// [`ceil`](Self::ceil) applied to the selected lanes only;
            /// unselected lanes keep their prior value.
            #[inline]
            pub fn ceil_masked(self, mask: &$mask) -> Self {
                self.blend(mask, self.ceil())
            }

            /// [`trunc`](Self::trunc) applied to the selected lanes only;
            /// unselected lanes keep their prior value.
            #[inline]
            pub fn trunc_masked(self, mask: &$mask) -> Self {
                self.blend(mask, self.trunc())
            }

            /// [`round`](Self::round) applied to the selected lanes only;
            /// unselected lanes keep their prior value.
            #[inline]
            pub fn round_masked(self, mask: &$mask) -> Self {
                self.blend(mask, self.round())
            }

            /// Computes `self * mul + add` lane-wise.
            ///
            /// The multiply and add round separately (no fused instruction
            /// on the supported backends), so results are identical across
            /// backends.
            #[inline]
            pub fn mul_add(self, mul: impl Into<Self>, add: impl Into<Self>) -> Self {
                self * mul.into() + add.into()
            }

            /// [`mul_add`](Self::mul_add) applied to the selected lanes
            /// only; unselected lanes keep their prior value.
            #[inline]
            pub fn mul_add_masked(
                self,
                mask: &$mask,
                mul: impl Into<Self>,
                add: impl Into<Self>,
            ) -> Self {
                self.blend(mask, self.mul_add(mul, add))
            }

            /// Computes `self * mul - sub` lane-wise; see
            /// [`mul_add`](Self::mul_add) for rounding behavior.
            #[inline]
            pub fn mul_sub(self, mul: impl Into<Self>, sub: impl Into<Self>) -> Self {
                self * mul.into() - sub.into()
            }

            /// [`mul_sub`](Self::mul_sub) applied to the selected lanes
            /// only; unselected lanes keep their prior value.
            #[inline]
            pub fn mul_sub_masked(
                self,
                mask: &$mask,
                mul: impl Into<Self>,
                sub: impl Into<Self>,
            ) -> Self {
                self.blend(mask, self.mul_sub(mul, sub))
            }

            /// Computes `(self + add) * mul` lane-wise.
            #[inline]
            pub fn add_mul(self, add: impl Into<Self>, mul: impl Into<Self>) -> Self {
                (self + add.into()) * mul.into()
            }

            /// [`add_mul`](Self::add_mul) applied to the selected lanes
            /// only; unselected lanes keep their prior value.
            #[inline]
            pub fn add_mul_masked(
                self,
                mask: &$mask,
                add: impl Into<Self>,
                mul: impl Into<Self>,
            ) -> Self {
                self.blend(mask, self.add_mul(add, mul))
            }

            /// Computes `(self - sub) * mul` lane-wise.
            #[inline]
            pub fn sub_mul(self, sub: impl Into<Self>, mul: impl Into<Self>) -> Self {
                (self - sub.into()) * mul.into()
            }

            /// [`sub_mul`](Self::sub_mul) applied to the selected lanes
            /// only; unselected lanes keep their prior value.
            #[inline]
            pub fn sub_mul_masked(
                self,
                mask: &$mask,
                sub: impl Into<Self>,
                mul: impl Into<Self>,
            ) -> Self {
                self.blend(mask, self.sub_mul(sub, mul))
            }

            /// Divides the selected lanes by `rhs`, leaving unselected lanes
            /// at their prior value.
            #[inline]
            pub fn div_masked(self, mask: &$mask, rhs: impl Into<Self>) -> Self {
                self.blend(mask, self / rhs.into())
            }

            /// Sums every lane, folding from lane 0 upward.
            #[inline]
            pub fn reduce_add(self) -> $elem {
                self.into_lanes().into_iter().fold(0.0, |acc, lane| acc + lane)
            }

            /// Sums the selected lanes; an empty selection yields 0.
            #[inline]
            pub fn reduce_add_masked(self, mask: &$mask) -> $elem {
                let select = mask.into_lanes();
                let lanes = self.into_lanes();
                let mut acc = 0.0;
                for i in 0..$lanes {
                    if select[i] {
                        acc += lanes[i];
                    }
                }
                acc
            }

            /// Multiplies every lane together, folding from lane 0 upward.
            #[inline]
            pub fn reduce_mul(self) -> $elem {
                self.into_lanes().into_iter().fold(1.0, |acc, lane| acc * lane)
            }

            /// Multiplies the selected lanes together; an empty selection
            /// yields 1.
            #[inline]
            pub fn reduce_mul_masked(self, mask: &$mask) -> $elem {
                let select = mask.into_lanes();
                let lanes = self.into_lanes();
                let mut acc = 1.0;
                for i in 0..$lanes {
                    if select[i] {
                        acc *= lanes[i];
                    }
                }
                acc
            }

            /// Returns the smallest lane value under the ordering of
            /// [`min`](Self::min), folding from lane 0 upward.
            #[inline]
            pub fn reduce_min(self) -> $elem {
                let lanes = self.into_lanes();
                lanes[1..].iter().fold(lanes[0], |acc, &lane| $fmin(acc, lane))
            }

            /// Returns the smallest selected lane value; an empty selection
            /// yields positive infinity.
            #[inline]
            pub fn reduce_min_masked(self, mask: &$mask) -> $elem {
                let select = mask.into_lanes();
                let lanes = self.into_lanes();
                let mut acc = <$elem>::INFINITY;
                for i in 0..$lanes {
                    if select[i] {
                        acc = $fmin(acc, lanes[i]);
                    }
                }
                acc
            }

            /// Returns the largest lane value under the ordering of
            /// [`max`](Self::max), folding from lane 0 upward.
            #[inline]
            pub fn reduce_max(self) -> $elem {
                let lanes = self.into_lanes();
                lanes[1..].iter().fold(lanes[0], |acc, &lane| $fmax(acc, lane))
            }

            /// Returns the largest selected lane value; an empty selection
            /// yields negative infinity.
            #[inline]
            pub fn reduce_max_masked(self, mask: &$mask) -> $elem {
                let select = mask.into_lanes();
                let lanes = self.into_lanes();
                let mut acc = <$elem>::NEG_INFINITY;
                for i in 0..$lanes {
                    if select[i] {
                        acc = $fmax(acc, lanes[i]);
                    }
                }
                acc
            }
        }

        impl core::ops::Div<$elem> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $elem) -> Self {
                self / Self::splat(rhs)
            }
        }

        impl core::ops::DivAssign for $name {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl core::ops::DivAssign<$elem> for $name {
            #[inline]
            fn div_assign(&mut self, rhs: $elem) {
                *self = *self / rhs;
            }
        }
    };
}
