//! Error types for the annotator.
//!
//! Unknown system registers are not errors: they degrade to a generic
//! annotation. Everything here aborts the pass it occurs in.

use thiserror::Error;

use crate::host::Address;

/// Primary error type for the annotator.
#[derive(Debug, Error)]
pub enum AnnotatorError {
    /// IO error while reading or writing a listing.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The listing document is not valid JSON for the expected schema.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The target is neither 32-bit ARM nor AArch64.
    #[error("Unsupported architecture: {processor} ({pointer_width}-bit); only ARM and AArch64 are handled")]
    UnsupportedArchitecture {
        processor: String,
        pointer_width: u32,
    },

    /// The host holds no instruction or data word at this address.
    #[error("No item at address 0x{address:X}")]
    UnknownAddress { address: Address },

    /// An operand index past the end of the instruction was asked for a value.
    #[error("Instruction at 0x{address:X} has no operand {index}")]
    MissingOperand { address: Address, index: usize },

    /// Operand text that does not have the shape its instruction family implies.
    #[error("Malformed operand {index} at 0x{address:X}: {text:?}")]
    MalformedOperand {
        address: Address,
        index: usize,
        text: String,
    },

    /// The listing document is structurally inconsistent.
    #[error("Invalid listing: {message}")]
    InvalidListing { message: String },
}

/// Result type alias for annotator operations.
pub type Result<T> = std::result::Result<T, AnnotatorError>;

impl AnnotatorError {
    pub(crate) fn malformed(address: Address, index: usize, text: impl Into<String>) -> Self {
        AnnotatorError::MalformedOperand {
            address,
            index,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnnotatorError::UnsupportedArchitecture {
            processor: "mipsl".to_string(),
            pointer_width: 32,
        };
        let msg = err.to_string();
        assert!(msg.contains("mipsl"));
        assert!(msg.contains("32-bit"));
    }

    #[test]
    fn test_address_is_hex() {
        let err = AnnotatorError::UnknownAddress { address: 0xBEEF };
        assert!(err.to_string().contains("0xBEEF"));

        let err = AnnotatorError::malformed(0x1000, 1, "R0,c1");
        assert!(err.to_string().contains("\"R0,c1\""));
    }
}
