//! Public inputs parsing
//!
//! bb writes public inputs as consecutive 32-byte big-endian words. They are
//! field elements by protocol convention but are kept exactly as written.

use crate::cursor::ByteCursor;
use crate::errors::PublicInputsError;
use crate::key::VerificationKey;
use crate::types::{word_to_u128, Word, WORD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PublicInputs {
    values: Vec<Word>,
}

impl PublicInputs {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PublicInputsError> {
        if bytes.len() % WORD_SIZE != 0 {
            return Err(PublicInputsError::MisalignedLength { len: bytes.len() });
        }
        let count = bytes.len() / WORD_SIZE;
        let values = ByteCursor::exact(bytes, bytes.len())
            .map(|mut cursor| cursor.read_arrays::<WORD_SIZE>(count))
            .unwrap_or_default();
        Ok(Self { values })
    }

    /// Parse and require exactly `vk.num_public_inputs` values
    pub fn from_bytes_for_key(
        bytes: &[u8],
        vk: &VerificationKey,
    ) -> Result<Self, PublicInputsError> {
        let expected = vk
            .num_public_inputs_u64()
            .ok_or(PublicInputsError::CountOverflow)?;
        let inputs = Self::from_bytes(bytes)?;
        if inputs.len() as u64 != expected {
            return Err(PublicInputsError::CountMismatch {
                expected,
                actual: inputs.len(),
            });
        }
        Ok(inputs)
    }

    pub fn values(&self) -> &[Word] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value as u128, if it fits
    pub fn value_u128(&self, index: usize) -> Option<u128> {
        self.values.get(index).and_then(word_to_u128)
    }
}
