use core::fmt;

/// Invalid construction input: an unknown face letter, or a dimension-size
/// mismatch.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DomainError {
    /// A boundary name string did not match any known axis letter.
    UnknownAxisLetter {
        /// The string that failed to parse.
        input: String,
    },
    /// A string-based constructor received the wrong number of characters.
    LengthMismatch {
        /// Number of characters expected.
        expected: usize,
        /// Number of characters actually supplied.
        actual: usize,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAxisLetter { input } => {
                write!(f, "unknown axis letter in boundary name `{input}`")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "expected {expected} characters, got {actual}"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DomainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
