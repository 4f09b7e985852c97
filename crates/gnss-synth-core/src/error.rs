//! Errors raised when building code tables and signal descriptors.
//!
//! Per-sample generators never fail; validation happens once, up front.

use core::fmt;

/// Code table construction error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeTableError {
    /// Code length of zero
    EmptyCode,
    /// Chip storage is not a whole number of codes
    RaggedTable {
        /// Number of chips supplied
        len: usize,
        /// Requested code length
        code_length: usize,
    },
    /// Table code length does not match the signal
    CodeLengthMismatch {
        /// Code length the signal defines
        expected: usize,
        /// Code length of the supplied table
        actual: usize,
    },
}

impl fmt::Display for CodeTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCode => write!(f, "code length must be non-zero"),
            Self::RaggedTable { len, code_length } => write!(
                f,
                "{} chips do not form whole codes of length {}",
                len, code_length
            ),
            Self::CodeLengthMismatch { expected, actual } => write!(
                f,
                "code length {} does not match signal code length {}",
                actual, expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodeTableError {}

#[cfg(feature = "defmt")]
impl defmt::Format for CodeTableError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::EmptyCode => defmt::write!(f, "EmptyCode"),
            Self::RaggedTable { len, code_length } => {
                defmt::write!(f, "RaggedTable(len={}, code_length={})", len, code_length);
            }
            Self::CodeLengthMismatch { expected, actual } => {
                defmt::write!(f, "CodeLengthMismatch(expected={}, actual={})", expected, actual);
            }
        }
    }
}
