//! Total-degree tensor-product polynomial spaces.
//!
//! A [`PolynomialSpace`] is built from `n_1d` one-dimensional polynomials `p_0, ..., p_{n_1d-1}`
//! and spans the products `p_{i_0}(x_0) * ... * p_{i_{DIM-1}}(x_{DIM-1})` with
//! `i_0 + ... + i_{DIM-1} < n_1d`, for `DIM` in 1..=3. It numbers these basis functions in a
//! fixed canonical order and evaluates their values, gradients and Hessians.

mod derivative_table;
mod dimension;
mod multi_index;
mod polynomial_space;
pub mod tensor_product;
mod univar_poly;

#[cfg(test)]
mod test_utils;

pub use derivative_table::{DerivativeTable, MAX_DERIVATIVE_ORDER};
pub use dimension::{MAX_DIM, compute_n_pols};
pub use multi_index::{BasisLabel, total_degree_indices};
pub use polynomial_space::PolynomialSpace;
pub use univar_poly::{Polynomial1D, UnivarPoly};

use snafu::prelude::*;

#[derive(Debug, Snafu)]
pub enum PolySpaceError {
    #[snafu(display("A polynomial space needs at least one 1-D polynomial"))]
    EmptyBasis,

    #[snafu(display("Unsupported dimension {}, expected 1 to {}", dim, MAX_DIM))]
    UnsupportedDimension { dim: usize },

    #[snafu(display("Basis index {} out of range for a space of {} polynomials", index, n_pols))]
    IndexOutOfRange { index: usize, n_pols: usize },

    #[snafu(display(
        "Multi-index {:?} is not in the total-degree space of {} 1-D polynomials",
        multi_index,
        n_1d
    ))]
    InvalidMultiIndex { multi_index: Vec<usize>, n_1d: usize },

    #[snafu(display("Dimension mismatch for {}: {} != {}", name, actual, expected))]
    DimensionMismatch {
        name: &'static str,
        actual: usize,
        expected: usize,
    },

    #[snafu(display("Derivative order {} exceeds the maximum of {}", order, max))]
    DerivativeOrderTooHigh { order: usize, max: usize },
}
