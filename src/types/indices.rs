//! Strongly-typed index newtypes.
//!
//! Cells of the structured grid are addressed by a single linear index
//! `i + ncx * (j + ncy * k)`; wrapping it keeps it from being confused with
//! component offsets inside a packed state vector.

use std::fmt;

/// Macro to generate index newtypes with common functionality.
macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $display_prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }

            /// First index (0).
            pub const ZERO: Self = Self(0);

            /// Index `stride` cells further along the flattened array.
            #[inline]
            pub const fn forward(self, stride: usize) -> Self {
                Self(self.0 + stride)
            }

            /// Index `stride` cells back along the flattened array.
            ///
            /// Callers guarantee the neighbour exists (ghost cells pad the grid).
            #[inline]
            pub fn backward(self, stride: usize) -> Self {
                debug_assert!(self.0 >= stride, "neighbour below index 0");
                Self(self.0 - stride)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(idx: $name) -> usize {
                idx.0
            }
        }

        impl<T> std::ops::Index<$name> for [T] {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }

        impl<T> std::ops::Index<$name> for Vec<T> {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }
    };
}

define_index!(
    /// Linear cell index in the flattened 3-D grid.
    ///
    /// # Example
    ///
    /// ```
    /// use vh_rs::types::CellIndex;
    ///
    /// let cell = CellIndex::new(42);
    /// assert_eq!(cell.get(), 42);
    /// assert_eq!(cell.forward(10).get(), 52);
    /// ```
    CellIndex,
    "C"
);

impl CellIndex {
    /// Create an iterator over [0, n) cell indices.
    pub fn iter(n: usize) -> impl ExactSizeIterator<Item = CellIndex> {
        (0..n).map(CellIndex)
    }
}
