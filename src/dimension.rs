use crate::PolySpaceError;

/// Highest spatial dimension a polynomial space can have.
pub const MAX_DIM: usize = 3;

/// Number of basis functions in the total-degree space built from `n_1d` one-dimensional
/// polynomials in `dim` variables.
///
/// This counts the `dim`-tuples of non-negative integers summing to less than `n_1d`,
/// i.e. the binomial coefficient `C(n_1d + dim - 1, dim)`. Each step multiplies before it
/// divides, so every intermediate value is an exact integer.
///
/// ```rust
/// use polyspace::compute_n_pols;
///
/// assert_eq!(compute_n_pols(3, 1).unwrap(), 3);
/// assert_eq!(compute_n_pols(3, 2).unwrap(), 6);
/// assert_eq!(compute_n_pols(3, 3).unwrap(), 10);
/// ```
pub fn compute_n_pols(n_1d: usize, dim: usize) -> Result<usize, PolySpaceError> {
    if n_1d == 0 {
        return Err(PolySpaceError::EmptyBasis);
    }
    if !(1..=MAX_DIM).contains(&dim) {
        return Err(PolySpaceError::UnsupportedDimension { dim });
    }

    let mut n_pols = n_1d;
    for i in 1..dim {
        n_pols *= n_1d + i;
        n_pols /= i + 1;
    }
    Ok(n_pols)
}
