use core::fmt;

/// A caller-supplied scratch buffer was smaller than the minimum an
/// integrand reports it needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferUndersize {
    required: usize,
    actual: usize,
}

impl BufferUndersize {
    pub(crate) const fn new(required: usize, actual: usize) -> Self {
        Self { required, actual }
    }

    /// Minimum buffer length the operation needed.
    #[must_use]
    pub const fn required(&self) -> usize {
        self.required
    }

    /// Length of the buffer that was actually supplied.
    #[must_use]
    pub const fn actual(&self) -> usize {
        self.actual
    }
}

impl fmt::Display for BufferUndersize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "buffer too small: needed at least {}, got {}",
            self.required, self.actual
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BufferUndersize {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
