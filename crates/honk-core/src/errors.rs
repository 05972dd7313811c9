//! Error types for UltraHonk artifact decoding

use thiserror::Error;

/// Top-level inspection error
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Key error: {0}")]
    Key(#[from] KeyError),

    #[error("Proof error: {0}")]
    Proof(#[from] ProofError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Public input error: {0}")]
    PublicInputs(#[from] PublicInputsError),

    #[error("Check error: {0}")]
    Check(#[from] CheckError),

    #[error("Field error: {0}")]
    Field(#[from] FieldError),
}

/// Field arithmetic errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Division by zero (inverse of zero is undefined)")]
    DivisionByZero,
}

/// Proof layout parameter errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Invalid parameter log_n = {log_n}: {reason}")]
    InvalidParameter { log_n: u32, reason: &'static str },
}

/// Verification key parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("Invalid VK size: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Proof parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProofError {
    #[error("Proof length {len} is not a multiple of 32 bytes")]
    MisalignedLength { len: usize },

    #[error("Invalid proof size: expected {expected} Fr elements, got {actual}")]
    SizeMismatch {
        expected: usize,
        actual: usize,
        byte_len: usize,
    },

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("Index {index} out of range for {section} (length {len})")]
    IndexOutOfRange {
        section: &'static str,
        index: usize,
        len: usize,
    },
}

/// Public input parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublicInputsError {
    #[error("Public inputs length {len} is not a multiple of 32 bytes")]
    MisalignedLength { len: usize },

    #[error("Public input count mismatch: VK expects {expected}, got {actual}")]
    CountMismatch { expected: u64, actual: usize },

    #[error("VK num_public_inputs does not fit in 64 bits")]
    CountOverflow,
}

/// Integrity check errors (arithmetic impossibilities only)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] FieldError),

    #[error("Proof error: {0}")]
    Proof(#[from] ProofError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = KeyError::SizeMismatch {
            expected: 1888,
            actual: 1887,
        };
        assert_eq!(
            err.to_string(),
            "Invalid VK size: expected 1888 bytes, got 1887"
        );

        let err = ProofError::MisalignedLength { len: 33 };
        assert_eq!(err.to_string(), "Proof length 33 is not a multiple of 32 bytes");
    }

    #[test]
    fn test_layout_error_is_transparent_in_proof_error() {
        let layout = LayoutError::InvalidParameter {
            log_n: 1,
            reason: "gemini folding needs log_n >= 2",
        };
        let err: ProofError = layout.clone().into();
        assert_eq!(err.to_string(), layout.to_string());
    }

    #[test]
    fn test_inspect_error_wraps_components() {
        let err: InspectError = FieldError::DivisionByZero.into();
        assert!(matches!(err, InspectError::Field(FieldError::DivisionByZero)));

        let err: InspectError = CheckError::from(FieldError::DivisionByZero).into();
        assert!(err.to_string().starts_with("Check error: Arithmetic error"));
    }
}
