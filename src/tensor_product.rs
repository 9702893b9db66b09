//! Product-rule kernels for tensor-product basis functions.
//!
//! A basis function is `phi(x) = p_{i_0}(x_0) * ... * p_{i_{DIM-1}}(x_{DIM-1})`. Every
//! derivative of `phi` is a product of one derivative per axis, so each kernel takes the
//! value/derivative cell of every active axis and multiplies the right entries together.
//! Factors are always multiplied in axis order, which keeps the result identical no matter
//! which caller assembled the cells.

/// Derivative order taken on `axis` for the second derivative d²/(dx_d1 dx_d2).
pub fn axis_order(axis: usize, d1: usize, d2: usize) -> usize {
    usize::from(axis == d1) + usize::from(axis == d2)
}

fn product<const DIM: usize>(cells: &[&[f64]; DIM], order: impl Fn(usize) -> usize) -> f64 {
    let mut result = 1.0;
    for (axis, cell) in cells.iter().enumerate() {
        result *= cell[order(axis)];
    }
    result
}

pub fn value<const DIM: usize>(cells: &[&[f64]; DIM]) -> f64 {
    product(cells, |_| 0)
}

/// Requires at least one derivative in every cell.
pub fn gradient<const DIM: usize>(cells: &[&[f64]; DIM]) -> [f64; DIM] {
    std::array::from_fn(|d| product(cells, |axis| usize::from(axis == d)))
}

/// Requires at least two derivatives in every cell.
pub fn hessian<const DIM: usize>(cells: &[&[f64]; DIM]) -> [[f64; DIM]; DIM] {
    std::array::from_fn(|d1| {
        std::array::from_fn(|d2| product(cells, |axis| axis_order(axis, d1, d2)))
    })
}
