use std::fmt;

/// Why a 32-byte string failed to decode as a curve point.
///
/// Decoding failure is the only recoverable error this crate produces: a
/// byte string of the wrong length is a contract violation of the caller
/// and is rejected at the type level (`&[u8; 32]`), not through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Neither candidate square root of the curve equation existed for the
    /// encoded `y` coordinate.
    InvalidEncoding,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidEncoding => {
                write!(f, "the encoded y-coordinate has no valid x on the curve")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
