use crate::error::DomainError;
use std::fmt;

/// One of the `2·D` oriented faces of a unit hypercube, packed as a single
/// `u32`.
///
/// Bit 0 carries the sign (`0` = negative face, `1` = positive face); bits
/// above it are a one-hot marker whose set position encodes the axis index.
/// The stored integer therefore equals `(1 << (axis + 1)) | sign_bit`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryId(u32);

impl BoundaryId {
    /// Builds a boundary id from an axis index and a sign (`true` =
    /// positive face).
    #[must_use]
    pub const fn from_parts(axis: u32, sign: bool) -> Self {
        Self((1u32 << (axis + 1)) | sign as u32)
    }

    /// Parses the two-character form `"<sign><letter>"`, e.g. `"+x"` or
    /// `"-z"`. Accepts at minimum the axis letters `x`, `y`, `z`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::LengthMismatch`] if `name` is not exactly two
    /// characters, or [`DomainError::UnknownAxisLetter`] if the letter is
    /// not a recognized axis.
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        let mut chars = name.chars();
        let (Some(sign_char), Some(letter), None) =
            (chars.next(), chars.next(), chars.next())
        else {
            return Err(DomainError::LengthMismatch {
                expected: 2,
                actual: name.chars().count(),
            });
        };

        let sign = match sign_char {
            '+' => true,
            '-' => false,
            _ => {
                return Err(DomainError::UnknownAxisLetter {
                    input: name.to_string(),
                })
            }
        };
        let axis = match letter.to_ascii_lowercase() {
            'x' => 0,
            'y' => 1,
            'z' => 2,
            _ => {
                return Err(DomainError::UnknownAxisLetter {
                    input: name.to_string(),
                })
            }
        };

        Ok(Self::from_parts(axis, sign))
    }

    /// The axis index this boundary is normal to.
    #[must_use]
    pub const fn axis(self) -> u32 {
        // Bit 0 is the sign; the lowest set bit above it marks the axis.
        (self.0 & !1).trailing_zeros() - 1
    }

    /// `true` for the positive face, `false` for the negative face.
    #[must_use]
    pub const fn sign(self) -> bool {
        self.0 & 1 == 1
    }

    /// Raw packed representation, exposed for hashing and storage.
    #[must_use]
    pub(crate) const fn raw(self) -> u32 {
        self.0
    }

    /// Rebuilds a boundary id from its raw packed representation.
    #[must_use]
    pub(crate) const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }
}

impl Default for BoundaryId {
    /// The negative face of axis 0, the start of the stream-increment
    /// order.
    fn default() -> Self {
        Self::from_parts(0, false)
    }
}

impl std::ops::Neg for BoundaryId {
    type Output = Self;

    /// Flips the sign bit, leaving the axis untouched.
    fn neg(self) -> Self::Output {
        Self(self.0 ^ 1)
    }
}

/// Steps through faces in the order `(-x, +x, -y, +y, ...)`.
pub trait StreamIncrement {
    /// Advances to the next face in stream order.
    fn increment(&mut self);
}

impl StreamIncrement for BoundaryId {
    fn increment(&mut self) {
        let was_positive = self.sign();
        self.0 ^= 1;
        if was_positive {
            self.0 <<= 1;
        }
    }
}

impl fmt::Display for BoundaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", if self.sign() { '+' } else { '-' }, self.axis())
    }
}

/// Boost-style multiplicative hash mixing, used to key pairs of boundary
/// identifiers without relying on the default tuple `Hash` impl.
#[must_use]
pub(crate) const fn hash_combine(seed: u64, value: u64) -> u64 {
    seed ^ (value
        .wrapping_add(0x9e37_79b9)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2))
}
