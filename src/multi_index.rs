use fmtastic::{Subscript, Superscript};
use num_traits::{Num, NumAssignOps};

/// Iterates over all multi-indices [i_0, i_1, ..., i_{DIM-1}] such that
///     i_0 + i_1 + ... + i_{DIM-1} < n_1d
///
/// This is the canonical enumeration order of a total-degree polynomial space: the last axis
/// is the outermost loop and axis 0 the innermost. Each axis runs up to `n_1d` minus the sum
/// of the axes outside of it. For example, `DIM = 2` and `n_1d = 3` gives
///     [0, 0], [1, 0], [2, 0], [0, 1], [1, 1], [0, 2]
///
/// Yields nothing when `n_1d` is zero.
pub fn total_degree_indices<const DIM: usize, T: Num + NumAssignOps + Copy + PartialOrd>(
    n_1d: T,
) -> impl Iterator<Item = [T; DIM]> {
    let mut indices = [T::zero(); DIM];
    let mut sum = T::zero();
    let mut done = n_1d <= T::zero();

    std::iter::from_fn(move || {
        if done {
            return None;
        }

        let current = indices;

        // Increment the innermost axis that still fits under the total-degree bound,
        // resetting every axis inside of it.
        done = true;
        for i in 0..DIM {
            indices[i] += T::one();
            sum += T::one();
            if sum < n_1d {
                done = false;
                break;
            }
            sum -= indices[i];
            indices[i] = T::zero();
        }

        Some(current)
    })
}

/// Display a multi-index as the monomial-style label of its basis function.
///
/// The multi-index [2, 1, 0] displays as `x₀²x₁` and the all-zero multi-index as `1`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BasisLabel<'a, const DIM: usize>(pub &'a [usize; DIM]);

impl<const DIM: usize> core::fmt::Display for BasisLabel<'_, DIM> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.0.iter().all(|&i| i == 0) {
            return write!(f, "1");
        }
        for (d, &i) in self.0.iter().enumerate() {
            match i {
                0 => {}
                1 => write!(f, "x{}", Subscript(d))?,
                _ => write!(f, "x{}{}", Subscript(d), Superscript(i))?,
            }
        }
        Ok(())
    }
}
