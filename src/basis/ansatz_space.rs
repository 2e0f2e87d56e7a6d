use super::{ScalarBasis, ScalarFunction};
use crate::error::BufferUndersize;
use crate::outer_product;

/// The `D`-fold tensor product of a single scalar basis: functions are
/// indexed by a multi-index `(i₀, …, i_{D-1})`, `i₀` varying fastest.
///
/// Evaluation never allocates: callers own the scratch buffers, sized via
/// [`Self::raw_buffer_len`], [`Self::size`], and [`Self::jacobian_len`].
pub struct AnsatzSpace<F, const D: usize> {
    basis: ScalarBasis<F>,
    basis_derivative: ScalarBasis<F>,
}

impl<F: ScalarFunction, const D: usize> AnsatzSpace<F, D> {
    /// Builds an ansatz space from the 1D basis shared along every axis.
    /// The derivative basis is computed once, up front, so that
    /// [`Self::jacobian`] never differentiates on the hot path.
    #[must_use]
    pub fn new(basis: ScalarBasis<F>) -> Self {
        let basis_derivative = basis.make_derivative();
        Self {
            basis,
            basis_derivative,
        }
    }

    /// Number of functions in the 1D basis (`n`).
    #[must_use]
    pub fn basis_size(&self) -> usize {
        self.basis.size()
    }

    /// Total number of tensor-product functions, `n^D`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.basis_size().pow(D as u32)
    }

    /// Required length of the raw per-axis evaluation scratch buffer.
    #[must_use]
    pub fn raw_buffer_len(&self) -> usize {
        self.basis_size() * D
    }

    /// Required length of the flattened Jacobian output, `size() * D`.
    #[must_use]
    pub fn jacobian_len(&self) -> usize {
        self.size() * D
    }

    /// Evaluates every tensor-product function at `point`, filling `out`
    /// in row-major (`i₀` fastest) multi-index order.
    ///
    /// # Errors
    ///
    /// Returns [`BufferUndersize`] if `raw_buffer` or `out` is too small.
    pub fn evaluate(
        &self,
        point: &[f64],
        raw_buffer: &mut [f64],
        out: &mut [f64],
    ) -> Result<(), BufferUndersize> {
        let n = self.basis_size();
        require(raw_buffer.len(), self.raw_buffer_len())?;
        require(out.len(), self.size())?;

        for axis in 0..D {
            self.basis
                .evaluate(point[axis], &mut raw_buffer[axis * n..(axis + 1) * n]);
        }

        let mut multi_index = [0usize; D];
        let mut m = 0;
        loop {
            out[m] = (0..D)
                .map(|k| raw_buffer[multi_index[k] + k * n])
                .product();
            m += 1;
            if !outer_product::next(n, &mut multi_index) {
                break;
            }
        }
        Ok(())
    }

    /// Evaluates the Jacobian `J ∈ ℝ^{n^D × D}` at `point`, `J[m, k]` being
    /// `∂N_m/∂x_k`, flattened row-major into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferUndersize`] if any scratch buffer or `out` is too
    /// small.
    pub fn jacobian(
        &self,
        point: &[f64],
        raw_buffer: &mut [f64],
        derivative_buffer: &mut [f64],
        out: &mut [f64],
    ) -> Result<(), BufferUndersize> {
        let n = self.basis_size();
        require(raw_buffer.len(), self.raw_buffer_len())?;
        require(derivative_buffer.len(), self.raw_buffer_len())?;
        require(out.len(), self.jacobian_len())?;

        for axis in 0..D {
            self.basis
                .evaluate(point[axis], &mut raw_buffer[axis * n..(axis + 1) * n]);
            self.basis_derivative
                .evaluate(point[axis], &mut derivative_buffer[axis * n..(axis + 1) * n]);
        }

        let mut multi_index = [0usize; D];
        let mut m = 0;
        loop {
            for d in 0..D {
                out[m * D + d] = (0..D)
                    .map(|k| {
                        let slot = multi_index[k] + k * n;
                        if k == d {
                            derivative_buffer[slot]
                        } else {
                            raw_buffer[slot]
                        }
                    })
                    .product();
            }
            m += 1;
            if !outer_product::next(n, &mut multi_index) {
                break;
            }
        }
        Ok(())
    }
}

fn require(actual: usize, required: usize) -> Result<(), BufferUndersize> {
    if actual < required {
        Err(BufferUndersize::new(required, actual))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::Polynomial;

    fn linear_basis() -> ScalarBasis<Polynomial> {
        ScalarBasis::new(vec![
            Polynomial::new(vec![0.5, -0.5]),
            Polynomial::new(vec![0.5, 0.5]),
        ])
    }

    #[test]
    fn size_is_n_to_the_d() {
        let space: AnsatzSpace<Polynomial, 2> = AnsatzSpace::new(linear_basis());
        assert_eq!(space.size(), 4);
    }

    #[test]
    fn bilinear_evaluation_at_corner_is_one_hot() {
        let space: AnsatzSpace<Polynomial, 2> = AnsatzSpace::new(linear_basis());
        let mut raw = vec![0.0; space.raw_buffer_len()];
        let mut out = vec![0.0; space.size()];

        // Corner (-1,-1) is N_0 = phi0(x)*phi0(y): index (0,0) -> flat 0.
        space.evaluate(&[-1.0, -1.0], &mut raw, &mut out).unwrap();
        assert!((out[0] - 1.0).abs() < 1e-12);
        for &value in &out[1..] {
            assert!(value.abs() < 1e-12);
        }
    }

    #[test]
    fn evaluate_rejects_undersized_buffers() {
        let space: AnsatzSpace<Polynomial, 2> = AnsatzSpace::new(linear_basis());
        let mut raw = vec![0.0; 1];
        let mut out = vec![0.0; space.size()];
        assert!(space.evaluate(&[0.0, 0.0], &mut raw, &mut out).is_err());
    }
}
