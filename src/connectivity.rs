//! Ansatz connectivity discovery: the oracle that tells the assembler
//! which local basis-function indices must be fused across a shared face.

use crate::basis::{AnsatzSpace, ScalarFunction};
use crate::boundary_id::{hash_combine, BoundaryId};
use crate::comparison::Comparison;
use crate::error::LookupMiss;
use crate::oriented_axes::OrientedAxes;
use crate::oriented_boundary::OrientedBoundary;
use crate::outer_product;
use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use either::Either;
use std::hash::{Hash, Hasher};

#[derive(Clone, Copy, PartialEq, Eq)]
struct PairKey<const D: usize> {
    first: OrientedBoundary<D>,
    second: OrientedBoundary<D>,
}

fn digest<T: Hash>(value: &T) -> u64 {
    let mut hasher = ahash::AHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

impl<const D: usize> Hash for PairKey<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = hash_combine(digest(&self.first), digest(&self.second));
        state.write_u64(combined);
    }
}

/// Maps an unordered pair of oriented boundaries to the list of local
/// basis-function index pairs whose functions are coincident on that
/// shared face.
///
/// Lookup accepts either order of the pair; if the stored key is the
/// reverse of the requested order, the returned pairs are transposed.
pub struct ConnectivityMap<const D: usize> {
    pairs: HashMap<PairKey<D>, Vec<(usize, usize)>>,
}

impl<const D: usize> ConnectivityMap<D> {
    /// Builds the connectivity map for a tensor-product ansatz space shared
    /// by every cell.
    ///
    /// `samples` are the 1D coordinates (in `[-1, 1]`) used to probe
    /// agreement across a shared face; it should contain the endpoints for
    /// correctness. If `samples` is empty, or the ansatz space has no
    /// functions, the resulting map is empty.
    #[must_use]
    pub fn new<F: ScalarFunction>(
        space: &AnsatzSpace<F, D>,
        samples: &[f64],
        comparison: &Comparison,
    ) -> Self {
        let mut pairs = HashMap::new();
        if samples.is_empty() || space.size() == 0 {
            return Self { pairs };
        }

        let n = space.size();
        let mut raw_left = vec![0.0; space.raw_buffer_len()];
        let mut raw_right = vec![0.0; space.raw_buffer_len()];
        let mut left_values = vec![0.0; n];
        let mut right_values = vec![0.0; n];

        let mut combo = [0usize; D];
        loop {
            let mut axes_state = OrientedAxes::<D>::default();
            for axis in 0..D {
                axes_state.set(axis, BoundaryId::from_parts(axis as u32, combo[axis] == 1));
            }

            for boundary_axis in 0..D {
                // Negative and positive faces of the *same* orientation:
                // the standard, untwisted neighbor connection.
                let negative = OrientedBoundary::new(
                    axes_state,
                    BoundaryId::from_parts(boundary_axis as u32, false),
                );
                let positive = OrientedBoundary::new(
                    axes_state,
                    BoundaryId::from_parts(boundary_axis as u32, true),
                );

                discover_pair(
                    &mut pairs,
                    space,
                    negative,
                    positive,
                    boundary_axis,
                    samples,
                    comparison,
                    &mut raw_left,
                    &mut raw_right,
                    &mut left_values,
                    &mut right_values,
                );
            }

            if D == 0 || !outer_product::next(2, &mut combo) {
                break;
            }
        }

        Self { pairs }
    }

    /// Number of distinct boundary pairs discovered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no pairs were discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The local index pairs coincident on the shared face between `a` and
    /// `b`, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`LookupMiss`] if neither `(a, b)` nor `(b, a)` was
    /// discovered during construction.
    pub fn pairs(
        &self,
        a: OrientedBoundary<D>,
        b: OrientedBoundary<D>,
    ) -> Result<impl Iterator<Item = (usize, usize)> + '_, LookupMiss> {
        if let Some(found) = self.pairs.get(&PairKey { first: a, second: b }) {
            return Ok(Either::Left(found.iter().copied()));
        }
        if let Some(found) = self.pairs.get(&PairKey { first: b, second: a }) {
            return Ok(Either::Right(found.iter().map(|&(i, j)| (j, i))));
        }
        Err(LookupMiss::new(
            "boundary pair not present in connectivity map",
        ))
    }

    /// Same as [`Self::pairs`], but returns `0` instead of erroring on a
    /// miss.
    #[must_use]
    pub fn pair_count(&self, a: OrientedBoundary<D>, b: OrientedBoundary<D>) -> usize {
        self.pairs(a, b).map_or(0, Iterator::count)
    }
}

#[allow(clippy::too_many_arguments, reason = "internal helper, not public API")]
fn discover_pair<F: ScalarFunction, const D: usize>(
    pairs: &mut HashMap<PairKey<D>, Vec<(usize, usize)>>,
    space: &AnsatzSpace<F, D>,
    left_boundary: OrientedBoundary<D>,
    right_boundary: OrientedBoundary<D>,
    boundary_axis: usize,
    samples: &[f64],
    comparison: &Comparison,
    raw_left: &mut [f64],
    raw_right: &mut [f64],
    left_values: &mut [f64],
    right_values: &mut [f64],
) {
    let key = PairKey {
        first: left_boundary,
        second: right_boundary,
    };
    let reverse_key = PairKey {
        first: right_boundary,
        second: left_boundary,
    };
    if pairs.contains_key(&key) || pairs.contains_key(&reverse_key) {
        return;
    }

    let n = space.size();
    let mut vanish_left = vec![true; n];
    let mut coincident: Vec<HashSet<usize>> = (0..n)
        .map(|_| (0..n).collect::<HashSet<usize>>())
        .collect();

    let tangential_axes: Vec<usize> = (0..D).filter(|&axis| axis != boundary_axis).collect();
    let tangential_count = tangential_axes.len();
    let mut tangential_index = vec![0usize; tangential_count];

    loop {
        let mut left_point = vec![0.0; D];
        let mut right_point = vec![0.0; D];
        left_point[boundary_axis] = if left_boundary.id().sign() { 1.0 } else { -1.0 };
        right_point[boundary_axis] = if right_boundary.id().sign() { 1.0 } else { -1.0 };
        for (slot, &axis) in tangential_axes.iter().enumerate() {
            let coord = samples[tangential_index[slot]];
            left_point[axis] = coord;
            right_point[axis] = coord;
        }

        space
            .evaluate(&left_point, raw_left, left_values)
            .expect("scratch buffers sized from this space");
        space
            .evaluate(&right_point, raw_right, right_values)
            .expect("scratch buffers sized from this space");

        for i in 0..n {
            vanish_left[i] &= comparison.approx_zero(left_values[i]);
            coincident[i].retain(|&j| comparison.approx_eq(left_values[i], right_values[j]));
        }

        if tangential_count == 0 || !outer_product::next(samples.len(), &mut tangential_index) {
            break;
        }
    }

    let mut discovered = Vec::new();
    for (i, vanishes) in vanish_left.iter().enumerate() {
        if *vanishes {
            continue;
        }
        for &j in &coincident[i] {
            discovered.push((i, j));
        }
    }
    discovered.sort_unstable();

    pairs.insert(key, discovered);
}
