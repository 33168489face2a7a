//! Spatial axes of the (τ, x, y, η_s) grid.
//!
//! [`PerAxis`] replaces positional `[x, y, eta]` arrays for spacings,
//! strides and gradients so the rapidity direction cannot be mixed up
//! with a transverse one.

use std::ops::Index;

/// Spatial direction of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Transverse x
    X,
    /// Transverse y
    Y,
    /// Spacetime rapidity η_s
    Eta,
}

impl Axis {
    /// All axes in storage order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Eta];

    /// Position of this axis among the four spacetime indices (t = 0).
    #[inline]
    pub const fn spacetime_index(self) -> usize {
        match self {
            Axis::X => 1,
            Axis::Y => 2,
            Axis::Eta => 3,
        }
    }
}

/// One value per spatial axis with named fields.
///
/// # Example
///
/// ```
/// use vh_rs::types::{Axis, PerAxis};
///
/// let strides = PerAxis::new(1, 16, 256);
/// assert_eq!(strides[Axis::Y], 16);
/// assert_eq!(strides.map(|s| 2 * s).eta, 512);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PerAxis<T> {
    /// Value along x
    pub x: T,
    /// Value along y
    pub y: T,
    /// Value along η_s
    pub eta: T,
}

impl<T> PerAxis<T> {
    /// Create from explicit x, y, η_s values.
    pub const fn new(x: T, y: T, eta: T) -> Self {
        Self { x, y, eta }
    }

    /// Same value on every axis.
    pub fn uniform(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            x: value.clone(),
            y: value.clone(),
            eta: value,
        }
    }

    /// Apply `f` to every axis value.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PerAxis<U> {
        PerAxis {
            x: f(self.x),
            y: f(self.y),
            eta: f(self.eta),
        }
    }

    /// Build by evaluating `f` on each axis.
    pub fn from_fn(mut f: impl FnMut(Axis) -> T) -> Self {
        Self {
            x: f(Axis::X),
            y: f(Axis::Y),
            eta: f(Axis::Eta),
        }
    }
}

impl<T> Index<Axis> for PerAxis<T> {
    type Output = T;

    #[inline]
    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Eta => &self.eta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_access() {
        let v = PerAxis::new(1, 2, 3);
        assert_eq!(v[Axis::X], 1);
        assert_eq!(v[Axis::Y], 2);
        assert_eq!(v[Axis::Eta], 3);
    }

    #[test]
    fn test_from_fn_matches_spacetime_index() {
        let v = PerAxis::from_fn(Axis::spacetime_index);
        assert_eq!(v, PerAxis::new(1, 2, 3));
    }

    #[test]
    fn test_uniform_and_map() {
        let v = PerAxis::uniform(0.5).map(|s| s * 2.0);
        assert_eq!(v, PerAxis::new(1.0, 1.0, 1.0));
    }
}
