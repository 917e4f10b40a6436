//! Lane-index pattern types consumed by the vector permutation and
//! gather/scatter operations.
//!
//! A swizzle holds one unsigned index per lane. The contract is plain
//! array-of-[`u32`] semantics on every backend; no hardware instruction set
//! in scope has a dynamically-indexed permute wide enough to justify a
//! register representation, so the index array itself is the representation
//! everywhere.

macro_rules! define {
    ($name:ident = $lanes:literal) => {
        #[doc = concat!("A pattern of ", stringify!($lanes), " lane indices.")]
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        pub struct $name([u32; $lanes]);

        impl $name {
            /// Number of indices in the pattern.
            pub const LANES: usize = $lanes;

            /// Creates a pattern from an array of lane indices.
            #[inline]
            pub const fn new(indices: [u32; $lanes]) -> Self {
                Self(indices)
            }

            /// Creates a pattern with every index set to `index`.
            #[inline]
            pub const fn splat(index: u32) -> Self {
                Self([index; $lanes])
            }

            /// Creates a pattern from the first `LANES` elements of `src`.
            ///
            /// # Panics
            ///
            /// Panics if `src.len()` is less than `LANES`.
            #[inline]
            pub fn from_slice(src: &[u32]) -> Self {
                let mut indices = [0u32; $lanes];
                indices.copy_from_slice(&src[..$lanes]);
                Self(indices)
            }

            /// Returns the index stored for lane `lane`.
            ///
            /// # Panics
            ///
            /// Panics if `lane` is not less than `LANES`.
            #[inline]
            pub const fn extract(&self, lane: usize) -> u32 {
                self.0[lane]
            }

            /// Overwrites the index stored for lane `lane`.
            ///
            /// # Panics
            ///
            /// Panics if `lane` is not less than `LANES`.
            #[inline]
            pub fn insert(&mut self, lane: usize, index: u32) -> &mut Self {
                self.0[lane] = index;
                self
            }

            /// Returns the pattern as an array of lane indices.
            #[inline]
            pub const fn into_lanes(self) -> [u32; $lanes] {
                self.0
            }
        }

        impl From<[u32; $lanes]> for $name {
            #[inline]
            fn from(indices: [u32; $lanes]) -> Self {
                Self(indices)
            }
        }

        impl From<$name> for [u32; $lanes] {
            #[inline]
            fn from(pattern: $name) -> Self {
                pattern.0
            }
        }
    };
}

define!(Swizzle2 = 2);
define!(Swizzle4 = 4);
define!(Swizzle8 = 8);
define!(Swizzle16 = 16);
define!(Swizzle32 = 32);
