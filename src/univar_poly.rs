use fmtastic::Superscript;
use smallvec::{SmallVec, smallvec};

/// A one-dimensional polynomial that can report its value and derivatives at a coordinate.
///
/// Implementors fill `out` with `out.len()` numbers: the value followed by the first,
/// second, ... derivative. The value written to `out[0]` must not depend on how many
/// derivatives were requested, since tensor-product evaluation relies on single and
/// bulk evaluations agreeing exactly.
pub trait Polynomial1D {
    fn value_and_derivatives(&self, x: f64, out: &mut [f64]);

    fn value(&self, x: f64) -> f64 {
        let mut out = [0.0];
        self.value_and_derivatives(x, &mut out);
        out[0]
    }
}

impl<P: Polynomial1D + ?Sized> Polynomial1D for &P {
    fn value_and_derivatives(&self, x: f64, out: &mut [f64]) {
        (**self).value_and_derivatives(x, out)
    }
}

// Most bases used for finite elements stay well below degree 8.
type CoeffVec = SmallVec<[f64; 8]>;

/// A polynomial in coefficient form: `coeffs[0] + coeffs[1] * x + coeffs[2] * x^2 + ...`
#[derive(Clone, PartialEq)]
pub struct UnivarPoly {
    coeffs: CoeffVec,
}

impl UnivarPoly {
    /// Build a polynomial from its coefficients, lowest order first.
    ///
    /// An empty coefficient list is the zero polynomial.
    pub fn new(coeffs: impl IntoIterator<Item = f64>) -> Self {
        let mut coeffs: CoeffVec = coeffs.into_iter().collect();
        if coeffs.is_empty() {
            coeffs.push(0.0);
        }
        Self { coeffs }
    }

    /// The monomial `x^n`.
    pub fn monomial(n: usize) -> Self {
        let mut coeffs: CoeffVec = smallvec![0.0; n + 1];
        coeffs[n] = 1.0;
        Self { coeffs }
    }

    /// The monomials `1, x, ..., x^(n - 1)`.
    pub fn monomials(n: usize) -> Vec<Self> {
        (0..n).map(Self::monomial).collect()
    }

    /// The Legendre polynomial `P_n` on [-1, 1], built from the three-term recurrence
    ///
    /// (n+1) P_{n+1}(x) = (2n+1) x P_n(x) - n P_{n-1}(x)
    pub fn legendre(n: usize) -> Self {
        let mut p_prev: CoeffVec = smallvec![1.0];
        if n == 0 {
            return Self { coeffs: p_prev };
        }
        let mut p_curr: CoeffVec = smallvec![0.0, 1.0];

        for k in 1..n {
            let a = (2 * k + 1) as f64 / (k + 1) as f64;
            let b = k as f64 / (k + 1) as f64;

            let mut p_next: CoeffVec = smallvec![0.0; k + 2];
            for (i, &c) in p_curr.iter().enumerate() {
                p_next[i + 1] += a * c;
            }
            for (i, &c) in p_prev.iter().enumerate() {
                p_next[i] -= b * c;
            }
            p_prev = p_curr;
            p_curr = p_next;
        }
        Self { coeffs: p_curr }
    }

    /// The Legendre polynomials `P_0, ..., P_(n - 1)`.
    pub fn legendres(n: usize) -> Vec<Self> {
        (0..n).map(Self::legendre).collect()
    }

    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Degree of the coefficient vector. Trailing zeros are not trimmed.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }
}

impl Polynomial1D for UnivarPoly {
    /// Horner's scheme carried through the derivatives: `out[j]` accumulates the j-th
    /// Taylor coefficient at `x`, which is scaled by j! at the end.
    fn value_and_derivatives(&self, x: f64, out: &mut [f64]) {
        if out.is_empty() {
            return;
        }
        out.fill(0.0);

        let n_derivs = out.len() - 1;
        for &c in self.coeffs.iter().rev() {
            for j in (1..=n_derivs).rev() {
                out[j] = out[j] * x + out[j - 1];
            }
            out[0] = out[0] * x + c;
        }

        let mut factorial = 1.0;
        for (j, v) in out.iter_mut().enumerate().skip(2) {
            factorial *= j as f64;
            *v *= factorial;
        }
    }
}

impl core::fmt::Debug for UnivarPoly {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for (i, &c) in self.coeffs.iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match i {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c} x")?,
                _ => write!(f, "{c} x{}", Superscript(i))?,
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
