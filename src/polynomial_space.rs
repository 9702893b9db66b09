use arrayvec::ArrayVec;

use crate::{
    BasisLabel, DerivativeTable, MAX_DERIVATIVE_ORDER, MAX_DIM, PolySpaceError, Polynomial1D,
    UnivarPoly, compute_n_pols, tensor_product, total_degree_indices,
};

// Value and derivatives of one 1-D polynomial at one coordinate.
type AxisCell = ArrayVec<f64, { MAX_DERIVATIVE_ORDER + 1 }>;

/// The total-degree space spanned by products of 1-D polynomials, one per axis.
///
/// Basis function `k` is `p_{i_0}(x_0) * ... * p_{i_{DIM-1}}(x_{DIM-1})` where
/// `[i_0, ..., i_{DIM-1}] = compute_index(k)`; the multi-indices are numbered in the order of
/// [`total_degree_indices`].
///
/// # Parameters
/// - `DIM`: Number of spatial dimensions, 1 to 3.
/// - `P`: The 1-D polynomial type.
///
/// Example, the quadratic space in 2D spanned by `1, x, x², y, xy, y²`:
/// ```rust
/// use polyspace::{PolynomialSpace, UnivarPoly};
///
/// let space = PolynomialSpace::<2>::new(UnivarPoly::monomials(3)).unwrap();
/// assert_eq!(space.n(), 6);
/// assert_eq!(space.compute_index(4).unwrap(), [1, 1]);
///
/// // Basis function 4 is x * y
/// let p = [1.0, 1.0];
/// assert_eq!(space.compute_value(4, &p).unwrap(), 1.0);
/// assert_eq!(space.compute_grad(4, &p).unwrap(), [1.0, 1.0]);
/// assert_eq!(space.compute_grad_grad(4, &p).unwrap(), [[0.0, 1.0], [1.0, 0.0]]);
/// ```
#[derive(Clone, Debug)]
pub struct PolynomialSpace<const DIM: usize, P = UnivarPoly> {
    polynomials: Vec<P>,
    n_pols: usize,
}

impl<const DIM: usize, P: Polynomial1D> PolynomialSpace<DIM, P> {
    /// Create the space from the 1-D polynomials. Their order is the per-axis index.
    pub fn new(polynomials: impl IntoIterator<Item = P>) -> Result<Self, PolySpaceError> {
        const {
            assert!(
                DIM >= 1 && DIM <= MAX_DIM,
                "Polynomial spaces support 1 to 3 dimensions"
            );
        }
        let polynomials: Vec<P> = polynomials.into_iter().collect();
        let n_pols = compute_n_pols(polynomials.len(), DIM)?;
        log::debug!(
            "Polynomial space: dim={} n_1d={} n_pols={}",
            DIM,
            polynomials.len(),
            n_pols
        );
        Ok(Self {
            polynomials,
            n_pols,
        })
    }

    /// Number of basis functions.
    pub fn n(&self) -> usize {
        self.n_pols
    }

    /// Number of 1-D polynomials.
    pub fn n_1d(&self) -> usize {
        self.polynomials.len()
    }

    /// Highest total index of a basis function, `n_1d - 1`. This is the polynomial degree of
    /// the space when the 1-D polynomials have degrees `0, 1, ..., n_1d - 1`.
    pub fn degree(&self) -> usize {
        self.n_1d() - 1
    }

    pub fn polynomials(&self) -> &[P] {
        &self.polynomials
    }

    /// All multi-indices of the space, in basis order.
    pub fn multi_indices(&self) -> impl Iterator<Item = [usize; DIM]> + use<DIM, P> {
        total_degree_indices(self.n_1d())
    }

    /// The per-axis polynomial indices of basis function `index`.
    pub fn compute_index(&self, index: usize) -> Result<[usize; DIM], PolySpaceError> {
        let out_of_range = PolySpaceError::IndexOutOfRange {
            index,
            n_pols: self.n_pols,
        };
        if index >= self.n_pols {
            return Err(out_of_range);
        }
        self.multi_indices().nth(index).ok_or(out_of_range)
    }

    /// The basis index of a multi-index. Inverse of [`Self::compute_index`].
    pub fn index_of(&self, multi_index: &[usize; DIM]) -> Result<usize, PolySpaceError> {
        self.multi_indices()
            .position(|m| m == *multi_index)
            .ok_or_else(|| PolySpaceError::InvalidMultiIndex {
                multi_index: multi_index.to_vec(),
                n_1d: self.n_1d(),
            })
    }

    pub fn compute_value(&self, index: usize, p: &[f64; DIM]) -> Result<f64, PolySpaceError> {
        let cells = self.axis_cells(&self.compute_index(index)?, p, 0);
        Ok(tensor_product::value(&cell_refs(&cells)))
    }

    pub fn compute_grad(
        &self,
        index: usize,
        p: &[f64; DIM],
    ) -> Result<[f64; DIM], PolySpaceError> {
        let cells = self.axis_cells(&self.compute_index(index)?, p, 1);
        Ok(tensor_product::gradient(&cell_refs(&cells)))
    }

    pub fn compute_grad_grad(
        &self,
        index: usize,
        p: &[f64; DIM],
    ) -> Result<[[f64; DIM]; DIM], PolySpaceError> {
        let cells = self.axis_cells(&self.compute_index(index)?, p, 2);
        Ok(tensor_product::hessian(&cell_refs(&cells)))
    }

    /// Evaluate the values, gradients and Hessians of all basis functions at `p`.
    ///
    /// Each output is either empty, in which case it is skipped, or exactly `n()` long.
    /// The 1-D polynomials are evaluated once per axis up to the highest derivative order
    /// requested, then every basis function is assembled from those cached evaluations.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if any output has another length. No output is written
    /// in that case.
    pub fn compute(
        &self,
        p: &[f64; DIM],
        values: &mut [f64],
        grads: &mut [[f64; DIM]],
        grad_grads: &mut [[[f64; DIM]; DIM]],
    ) -> Result<(), PolySpaceError> {
        self.check_output_len("values", values.len())?;
        self.check_output_len("grads", grads.len())?;
        self.check_output_len("grad_grads", grad_grads.len())?;

        let max_order = if !grad_grads.is_empty() {
            2
        } else if !grads.is_empty() {
            1
        } else if !values.is_empty() {
            0
        } else {
            return Ok(());
        };
        log::debug!(
            "Computing {} basis functions up to derivative order {}",
            self.n_pols,
            max_order
        );

        let table = DerivativeTable::build(&self.polynomials, p, max_order)?;
        for (k, multi_index) in self.multi_indices().enumerate() {
            let cells = table.cells(&multi_index);
            if !values.is_empty() {
                values[k] = tensor_product::value(&cells);
            }
            if !grads.is_empty() {
                grads[k] = tensor_product::gradient(&cells);
            }
            if !grad_grads.is_empty() {
                grad_grads[k] = tensor_product::hessian(&cells);
            }
        }
        Ok(())
    }

    /// Values of all basis functions at `p`.
    pub fn values(&self, p: &[f64; DIM]) -> Result<Vec<f64>, PolySpaceError> {
        let mut values = vec![0.0; self.n_pols];
        self.compute(p, &mut values, &mut [], &mut [])?;
        Ok(values)
    }

    /// Gradients of all basis functions at `p`.
    pub fn gradients(&self, p: &[f64; DIM]) -> Result<Vec<[f64; DIM]>, PolySpaceError> {
        let mut grads = vec![[0.0; DIM]; self.n_pols];
        self.compute(p, &mut [], &mut grads, &mut [])?;
        Ok(grads)
    }

    /// Hessians of all basis functions at `p`.
    pub fn hessians(&self, p: &[f64; DIM]) -> Result<Vec<[[f64; DIM]; DIM]>, PolySpaceError> {
        let mut grad_grads = vec![[[0.0; DIM]; DIM]; self.n_pols];
        self.compute(p, &mut [], &mut [], &mut grad_grads)?;
        Ok(grad_grads)
    }

    /// Write one line per basis function: its index, its multi-index and its label,
    /// separated by tabs.
    pub fn output_indices(&self, out: &mut impl std::io::Write) -> std::io::Result<()> {
        for (k, multi_index) in self.multi_indices().enumerate() {
            write!(out, "{k}")?;
            for i in multi_index {
                write!(out, "\t{i}")?;
            }
            writeln!(out, "\t{}", BasisLabel(&multi_index))?;
        }
        Ok(())
    }

    fn check_output_len(&self, name: &'static str, len: usize) -> Result<(), PolySpaceError> {
        if len != 0 && len != self.n_pols {
            return Err(PolySpaceError::DimensionMismatch {
                name,
                actual: len,
                expected: self.n_pols,
            });
        }
        Ok(())
    }

    /// Evaluate only the 1-D polynomials that make up one basis function.
    fn axis_cells(
        &self,
        multi_index: &[usize; DIM],
        p: &[f64; DIM],
        max_order: usize,
    ) -> [AxisCell; DIM] {
        std::array::from_fn(|d| {
            let mut cell: AxisCell = (0..=max_order).map(|_| 0.0).collect();
            self.polynomials[multi_index[d]].value_and_derivatives(p[d], &mut cell);
            cell
        })
    }
}

fn cell_refs<const DIM: usize>(cells: &[AxisCell; DIM]) -> [&[f64]; DIM] {
    std::array::from_fn(|d| cells[d].as_slice())
}
