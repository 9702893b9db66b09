use smallvec::{SmallVec, smallvec};

use crate::{PolySpaceError, Polynomial1D};

/// Highest derivative order the tensor-product evaluator works with (Hessians).
pub const MAX_DERIVATIVE_ORDER: usize = 2;

/// Values and derivatives of every 1-D polynomial along every axis, for one point.
///
/// Access is by (axis, polynomial, derivative order). All cells hold the same number of
/// entries: `max_order + 1`.
#[derive(Clone, Debug)]
pub struct DerivativeTable<const DIM: usize> {
    // Flattened [axis][polynomial][order] storage.
    values: SmallVec<[f64; 64]>,

    n_1d: usize,

    // Number of entries in each cell (max_order + 1).
    cell_len: usize,
}

impl<const DIM: usize> DerivativeTable<DIM> {
    /// Evaluate each polynomial at each coordinate of `point`, up to `max_order` derivatives.
    pub fn build<P: Polynomial1D>(
        polynomials: &[P],
        point: &[f64; DIM],
        max_order: usize,
    ) -> Result<Self, PolySpaceError> {
        if max_order > MAX_DERIVATIVE_ORDER {
            return Err(PolySpaceError::DerivativeOrderTooHigh {
                order: max_order,
                max: MAX_DERIVATIVE_ORDER,
            });
        }

        let n_1d = polynomials.len();
        let cell_len = max_order + 1;
        let mut table = Self {
            values: smallvec![0.0; DIM * n_1d * cell_len],
            n_1d,
            cell_len,
        };

        for d in 0..DIM {
            for (i, poly) in polynomials.iter().enumerate() {
                let start = table.flat_index(d, i);
                poly.value_and_derivatives(point[d], &mut table.values[start..start + cell_len]);
            }
        }
        log::trace!(
            "Derivative table: {} axes x {} polynomials x {} orders",
            DIM,
            n_1d,
            cell_len
        );
        Ok(table)
    }

    pub fn max_order(&self) -> usize {
        self.cell_len - 1
    }

    pub fn n_1d(&self) -> usize {
        self.n_1d
    }

    /// Value and derivatives of polynomial `i` at the coordinate on `axis`.
    ///
    /// # Panics
    /// Panics if `axis >= DIM` or `i >= n_1d`.
    pub fn cell(&self, axis: usize, i: usize) -> &[f64] {
        assert!(axis < DIM && i < self.n_1d, "Derivative table cell out of bounds");
        let start = self.flat_index(axis, i);
        &self.values[start..start + self.cell_len]
    }

    /// The cells for each active axis of a multi-index.
    pub fn cells(&self, multi_index: &[usize; DIM]) -> [&[f64]; DIM] {
        std::array::from_fn(|d| self.cell(d, multi_index[d]))
    }

    fn flat_index(&self, axis: usize, i: usize) -> usize {
        (axis * self.n_1d + i) * self.cell_len
    }
}

#[cfg(test)]
mod tests {
    use assertables::{assert_err, assert_ok};
    use pretty_assertions as pa;

    use super::*;
    use crate::UnivarPoly;

    #[test]
    fn cells_hold_values_and_derivatives() {
        let polys = UnivarPoly::monomials(3);
        let table = assert_ok!(DerivativeTable::<2>::build(&polys, &[2.0, -1.0], 2));

        pa::assert_eq!(table.max_order(), 2);
        pa::assert_eq!(table.n_1d(), 3);

        // Axis 0 at x = 2
        pa::assert_eq!(table.cell(0, 0), &[1.0, 0.0, 0.0]);
        pa::assert_eq!(table.cell(0, 1), &[2.0, 1.0, 0.0]);
        pa::assert_eq!(table.cell(0, 2), &[4.0, 4.0, 2.0]);

        // Axis 1 at y = -1
        pa::assert_eq!(table.cell(1, 0), &[1.0, 0.0, 0.0]);
        pa::assert_eq!(table.cell(1, 1), &[-1.0, 1.0, 0.0]);
        pa::assert_eq!(table.cell(1, 2), &[1.0, -2.0, 2.0]);
    }

    #[test]
    fn cell_length_follows_max_order() {
        let polys = UnivarPoly::legendres(4);
        for max_order in 0..=MAX_DERIVATIVE_ORDER {
            let table = assert_ok!(DerivativeTable::<3>::build(
                &polys,
                &[0.1, 0.2, 0.3],
                max_order
            ));
            for d in 0..3 {
                for i in 0..4 {
                    pa::assert_eq!(table.cell(d, i).len(), max_order + 1);
                }
            }
        }
    }

    #[test]
    fn cells_for_multi_index() {
        let polys = UnivarPoly::monomials(3);
        let table = assert_ok!(DerivativeTable::<3>::build(&polys, &[2.0, 3.0, 5.0], 1));

        let cells = table.cells(&[1, 0, 1]);
        pa::assert_eq!(cells, [&[2.0, 1.0][..], &[1.0, 0.0][..], &[5.0, 1.0][..]]);
    }

    #[test]
    fn rejects_third_derivatives() {
        let polys = UnivarPoly::monomials(3);
        let err = assert_err!(DerivativeTable::<1>::build(&polys, &[0.0], 3));
        assert!(matches!(
            err,
            PolySpaceError::DerivativeOrderTooHigh { order: 3, max: 2 }
        ));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn cell_out_of_bounds() {
        let polys = UnivarPoly::monomials(2);
        let table = DerivativeTable::<2>::build(&polys, &[0.0, 0.0], 0).unwrap();
        let _ = table.cell(2, 0);
    }
}
