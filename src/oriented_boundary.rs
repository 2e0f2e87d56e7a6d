use crate::boundary_id::BoundaryId;
use crate::oriented_axes::OrientedAxes;
use std::cmp::Ordering;
use std::fmt;

/// A particular face of a particular orientation of the reference
/// hypercube: an [`OrientedAxes`] plus a [`BoundaryId`] naming a face *in
/// the rotated frame*.
///
/// This pair is the sole currency by which a cell tells the connectivity
/// map which face it is presenting to a neighbor.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrientedBoundary<const D: usize> {
    axes: OrientedAxes<D>,
    face: BoundaryId,
}

impl<const D: usize> OrientedBoundary<D> {
    /// Builds an oriented boundary from an orientation and a face id
    /// expressed in that orientation's frame.
    #[must_use]
    pub const fn new(axes: OrientedAxes<D>, face: BoundaryId) -> Self {
        Self { axes, face }
    }

    /// The orientation of the reference frame.
    #[must_use]
    pub const fn axes(&self) -> OrientedAxes<D> {
        self.axes
    }

    /// The face id, expressed in the rotated frame.
    #[must_use]
    pub const fn id(&self) -> BoundaryId {
        self.face
    }

    /// The face re-expressed in the reference frame: the axes entry at
    /// `id.axis()` gives the local axis, and the sign is the XOR of the
    /// face's sign with that entry's sign.
    #[must_use]
    pub fn local_id(&self) -> BoundaryId {
        let entry = self.axes.get(self.face.axis() as usize);
        let sign = self.face.sign() == entry.sign();
        BoundaryId::from_parts(entry.axis(), sign)
    }
}

impl<const D: usize> Default for OrientedBoundary<D> {
    fn default() -> Self {
        Self {
            axes: OrientedAxes::default(),
            face: BoundaryId::default(),
        }
    }
}

impl<const D: usize> std::ops::Neg for OrientedBoundary<D> {
    type Output = Self;

    /// Flips the face's sign without touching the orientation.
    fn neg(self) -> Self::Output {
        Self {
            axes: self.axes,
            face: -self.face,
        }
    }
}

impl<const D: usize> PartialOrd for OrientedBoundary<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const D: usize> Ord for OrientedBoundary<D> {
    /// Compares the face id first, then the orientation lexicographically.
    fn cmp(&self, other: &Self) -> Ordering {
        self.face.cmp(&other.face).then_with(|| self.axes.cmp(&other.axes))
    }
}

impl<const D: usize> fmt::Debug for OrientedBoundary<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrientedBoundary")
            .field("axes", &self.axes)
            .field("face", &self.face)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_flips_only_face_sign() {
        let ob = OrientedBoundary::<2>::new(
            OrientedAxes::default(),
            BoundaryId::from_parts(0, true),
        );
        let negated = -ob;
        assert_eq!(negated.id().sign(), !ob.id().sign());
        assert_eq!(negated.axes(), ob.axes());
    }

    #[test]
    fn local_id_under_identity_orientation_is_identity() {
        let ob = OrientedBoundary::<2>::new(
            OrientedAxes::default(),
            BoundaryId::from_parts(1, false),
        );
        assert_eq!(ob.local_id(), ob.id());
    }
}
