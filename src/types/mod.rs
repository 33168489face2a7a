//! Strongly-typed domain types for safer APIs.
//!
//! - [`Real`]: the single floating-point type used by every kernel
//! - [`CellIndex`]: linear index of a cell in the flattened grid
//! - [`Axis`], [`PerAxis`]: spatial directions with named per-axis values
//!
//! # Precision
//!
//! `Real` is `f64` unless the `single-precision` feature is enabled, in
//! which case it is `f32`. Constants throughout the crate are written as
//! untyped literals so they adapt to either width.
//!
//! # Example
//!
//! ```
//! use vh_rs::types::{Axis, CellIndex, PerAxis};
//!
//! let spacing = PerAxis::new(0.1, 0.1, 0.05);
//! assert_eq!(spacing[Axis::Eta], 0.05);
//!
//! let cell = CellIndex::new(42);
//! assert_eq!(cell.get(), 42);
//! ```

mod axis;
mod indices;

pub use axis::{Axis, PerAxis};
pub use indices::CellIndex;

/// Floating-point type for all fields and kernels.
#[cfg(not(feature = "single-precision"))]
pub type Real = f64;

/// Floating-point type for all fields and kernels.
#[cfg(feature = "single-precision")]
pub type Real = f32;
