//! Decoding errors.

/// Error returned by every fallible cursor operation.
///
/// A failed read never moves the cursor. Positions reported here are
/// absolute buffer offsets of the access that failed, which for
/// length-prefixed reads lie past the prefix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    /// A read needed more bytes than remain in the buffer.
    #[error("out of bounds: {needed} bytes requested at offset {position}, {available} available")]
    OutOfBounds {
        position: usize,
        needed: u64,
        available: usize,
    },
    /// The configured native width is not 8, 16, 32 or 64 bits.
    #[error("unsupported native integer width: {bits} bits")]
    UnsupportedWidth { bits: u32 },
    /// A prefix width argument is not 8, 16, 32 or 64 bits.
    #[error("invalid length prefix width: {bits} bits")]
    InvalidPrefixWidth { bits: u32 },
    /// A text payload is not valid UTF-8.
    #[error("invalid UTF-8 in text payload at offset {position}")]
    InvalidUtf8 { position: usize },
}

impl CursorError {
    /// Returns `true` for the out-of-bounds case.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, CursorError::OutOfBounds { .. })
    }
}
