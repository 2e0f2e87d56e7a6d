//! Outer-product quadrature over the reference hypercube `[-1, 1]^D`.
//!
//! Rule *generation* (computing Gauss-Legendre nodes and weights from an
//! integration order) is out of scope; a [`QuadratureRule1d`] is always
//! caller-supplied.

use crate::integrand::VectorIntegrand;
use crate::outer_product;

/// A 1D quadrature rule over `[-1, 1]`: parallel `nodes` and `weights`
/// slices of equal length.
pub trait QuadratureRule1d {
    /// Integration node coordinates.
    fn nodes(&self) -> &[f64];

    /// Weights parallel to [`Self::nodes`].
    fn weights(&self) -> &[f64];
}

/// An owned 1D rule, for callers who already have concrete nodes/weights
/// (e.g. pre-tabulated Gauss-Legendre points) and just want something
/// implementing [`QuadratureRule1d`].
#[derive(Clone, Debug)]
pub struct QuadratureBase1d {
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

impl QuadratureBase1d {
    /// Builds a rule from parallel node/weight vectors.
    ///
    /// # Panics
    ///
    /// Panics if `nodes` and `weights` have different lengths.
    #[must_use]
    pub fn new(nodes: Vec<f64>, weights: Vec<f64>) -> Self {
        assert_eq!(nodes.len(), weights.len(), "nodes/weights length mismatch");
        Self { nodes, weights }
    }
}

impl QuadratureRule1d for QuadratureBase1d {
    fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    fn weights(&self) -> &[f64] {
        &self.weights
    }
}

/// The `D`-fold tensor product of a 1D quadrature rule: quadrature points
/// are the cartesian product of 1D nodes, weights are the product of the
/// corresponding 1D weights.
pub struct OuterProductQuadrature<const D: usize> {
    // Each entry is `D` node coordinates followed by the combined weight,
    // mirroring the source's `StaticArray<T, D+1>` layout.
    nodes_and_weights: Vec<([f64; D], f64)>,
}

impl<const D: usize> OuterProductQuadrature<D> {
    /// Builds the D-dimensional outer-product rule from a 1D rule shared
    /// along every axis.
    #[must_use]
    pub fn new<R: QuadratureRule1d>(rule: &R) -> Self {
        let nodes = rule.nodes();
        let weights = rule.weights();
        let count = nodes.len();

        let mut nodes_and_weights = Vec::with_capacity(count.pow(D as u32));
        if count == 0 {
            return Self { nodes_and_weights };
        }

        let mut multi_index = [0usize; D];
        loop {
            let mut point = [0.0; D];
            let mut weight = 1.0;
            for axis in 0..D {
                point[axis] = nodes[multi_index[axis]];
                weight *= weights[multi_index[axis]];
            }
            nodes_and_weights.push((point, weight));

            if !outer_product::next(count, &mut multi_index) {
                break;
            }
        }

        Self { nodes_and_weights }
    }

    /// Number of quadrature points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes_and_weights.len()
    }

    /// Whether this rule carries no points (an empty 1D rule was given).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes_and_weights.is_empty()
    }

    /// Evaluates `integrand` at every quadrature point and accumulates
    /// the weighted sum into `out`, using `scratch` as the per-point
    /// evaluation buffer. Neither buffer is allocated by this call.
    ///
    /// # Panics
    ///
    /// Panics if `scratch` or `out` is shorter than `integrand.size()`.
    pub fn integrate<I: VectorIntegrand>(
        &self,
        integrand: &I,
        scratch: &mut [f64],
        out: &mut [f64],
    ) {
        let size = integrand.size();
        assert!(scratch.len() >= size, "scratch buffer too small");
        assert!(out.len() >= size, "output buffer too small");

        for value in out.iter_mut().take(size) {
            *value = 0.0;
        }

        for (point, weight) in &self.nodes_and_weights {
            integrand.evaluate(point, &mut scratch[..size]);
            for (o, s) in out.iter_mut().take(size).zip(scratch.iter()) {
                *o += weight * s;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ConstantIntegrand;

    impl VectorIntegrand for ConstantIntegrand {
        fn size(&self) -> usize {
            1
        }

        fn evaluate(&self, _point: &[f64], out: &mut [f64]) {
            out[0] = 1.0;
        }
    }

    // Two-point rule exact for constants: integrating 1 over [-1,1]^D must
    // give 2^D.
    fn midpoint_like_rule() -> QuadratureBase1d {
        QuadratureBase1d::new(vec![-1.0 / 3f64.sqrt(), 1.0 / 3f64.sqrt()], vec![1.0, 1.0])
    }

    #[test]
    fn outer_product_point_count_is_n_to_the_d() {
        let rule = midpoint_like_rule();
        let quad: OuterProductQuadrature<3> = OuterProductQuadrature::new(&rule);
        assert_eq!(quad.len(), 8);
    }

    #[test]
    fn integrates_constant_to_hypercube_volume() {
        let rule = midpoint_like_rule();
        let quad: OuterProductQuadrature<2> = OuterProductQuadrature::new(&rule);
        let mut scratch = [0.0; 1];
        let mut out = [0.0; 1];
        quad.integrate(&ConstantIntegrand, &mut scratch, &mut out);
        assert!((out[0] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn empty_rule_yields_empty_quadrature() {
        let rule = QuadratureBase1d::new(vec![], vec![]);
        let quad: OuterProductQuadrature<2> = OuterProductQuadrature::new(&rule);
        assert!(quad.is_empty());
    }
}
