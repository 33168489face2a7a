//! Index bookkeeping of the directional gradient terms.
//!
//! Each axis reads a different subset of the packed currents from the
//! stencil window. These tests pin the bookkeeping against manufactured
//! linear profiles and against explicit per-axis expressions.

use vh_rs::flux::{StencilBuffer, directional_source_x, directional_source_y, directional_source_z};
use vh_rs::physics::{ShearComponent, StateLayout};
use vh_rs::solver::{DissipativeState, FourVelocity, GridGeometry, HydroState, SymmetricTensor};
use vh_rs::types::{Axis, CellIndex, Real};

const TOL: Real = 1e-11;

fn grid() -> GridGeometry {
    GridGeometry::new(7, 8, 9, 0.1, 0.2, 0.05, 0.01).unwrap()
}

/// State where every current is an affine function of the cell position.
fn linear_state(layout: StateLayout, grid: &GridGeometry, slope: impl Fn(usize, Axis) -> Real) -> HydroState {
    let mut state = HydroState::new(layout, grid.n_cells());
    let n = layout.n_conserved();
    for cell in CellIndex::iter(grid.n_cells()) {
        let (i, j, k) = grid.coordinates(cell);
        let pos = [i as Real * grid.dx, j as Real * grid.dy, k as Real * grid.dz];
        state.set_cell(cell, 5.0, 5.0 / 3.0, FourVelocity::at_rest(), DissipativeState::default());
        let q = state.cell_mut(cell);
        for (var, value) in q.iter_mut().enumerate().take(n).skip(4) {
            *value = 0.3
                + slope(var, Axis::X) * pos[0]
                + slope(var, Axis::Y) * pos[1]
                + slope(var, Axis::Eta) * pos[2];
        }
    }
    state
}

fn slope(var: usize, axis: Axis) -> Real {
    (var as Real) * 0.1 + axis.spacetime_index() as Real
}

#[test]
fn test_linear_slope_recovered_for_every_component_and_axis() {
    let grid = grid();
    let layout = StateLayout::new(true, true);
    let state = linear_state(layout, &grid, slope);
    let cell = grid.linear_index(3, 4, 4);

    for axis in Axis::ALL {
        let buffer = StencilBuffer::gather(&state, cell, axis, &grid);
        let view = buffer.view();
        let h = grid.spacing(axis);
        for c in ShearComponent::ALL {
            let var = 4 + c.index();
            let d = view.shear_derivative(c, h);
            assert!(
                (d - slope(var, axis)).abs() < TOL,
                "{} along {:?}: {}",
                c.name(),
                axis,
                d
            );
        }
        let d_bulk = view.bulk_derivative(h).unwrap();
        assert!((d_bulk - slope(14, axis)).abs() < TOL);
    }
}

/// Derivatives of every current along one axis, as a tensor plus Π.
fn derivatives(state: &HydroState, cell: CellIndex, axis: Axis, grid: &GridGeometry) -> (SymmetricTensor, Real) {
    let buffer = StencilBuffer::gather(state, cell, axis, grid);
    let view = buffer.view();
    let h = grid.spacing(axis);
    let d = SymmetricTensor::from_fn(|c| view.shear_derivative(c, h));
    (d, view.bulk_derivative(h).unwrap_or(0.0))
}

#[test]
fn test_per_axis_expressions() {
    let grid = grid();
    let layout = StateLayout::new(true, true);
    let mut state = linear_state(layout, &grid, slope);
    let t = 1.7;
    let u = FourVelocity::from_spatial(0.3, -0.2, 0.1, t);
    let cell = grid.linear_index(3, 4, 4);
    state.velocity.set(cell, u);

    let vx = u.ux / u.ut;
    let vy = u.uy / u.ut;
    let vn = u.un / u.ut;

    let (d, d_bulk) = derivatives(&state, cell, Axis::X, &grid);
    let view_x = StencilBuffer::gather(&state, cell, Axis::X, &grid);
    let sx = directional_source_x(&view_x.view(), &u, grid.dx);
    assert_eq!(
        sx,
        [
            d.tt * vx - d.tx - vx * d_bulk,
            d.tx * vx - d.xx - d_bulk,
            d.ty * vx - d.xy,
            d.tn * vx - d.xn,
        ]
    );

    let (d, d_bulk) = derivatives(&state, cell, Axis::Y, &grid);
    let view_y = StencilBuffer::gather(&state, cell, Axis::Y, &grid);
    let sy = directional_source_y(&view_y.view(), &u, grid.dy);
    assert_eq!(
        sy,
        [
            d.tt * vy - d.ty - vy * d_bulk,
            d.tx * vy - d.xy,
            d.ty * vy - d.yy - d_bulk,
            d.tn * vy - d.yn,
        ]
    );

    let (d, d_bulk) = derivatives(&state, cell, Axis::Eta, &grid);
    let view_z = StencilBuffer::gather(&state, cell, Axis::Eta, &grid);
    let sz = directional_source_z(&view_z.view(), &u, t, grid.dz);
    assert_eq!(
        sz,
        [
            d.tt * vn - d.tn - vn * d_bulk,
            d.tx * vn - d.xn,
            d.ty * vn - d.yn,
            d.tn * vn - d.nn - d_bulk / (t * t),
        ]
    );
}

#[test]
fn test_shear_only_layout_has_no_bulk_term() {
    let grid = grid();
    let layout = StateLayout::new(true, false);
    let state = linear_state(layout, &grid, slope);
    let cell = grid.linear_index(3, 3, 3);
    let u = FourVelocity::at_rest();

    let buffer = StencilBuffer::gather(&state, cell, Axis::X, &grid);
    assert!(buffer.view().bulk_derivative(grid.dx).is_none());
    let s = directional_source_x(&buffer.view(), &u, grid.dx);
    // At rest only -∂_x π^{μx} survives
    let dxx = slope(4 + ShearComponent::Xx.index(), Axis::X);
    let dtx = slope(4 + ShearComponent::Tx.index(), Axis::X);
    assert!((s[0] + dtx).abs() < TOL);
    assert!((s[1] + dxx).abs() < TOL);
}
