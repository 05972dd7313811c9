//! Verification key parsing for bb UltraHonk (Keccak)
//!
//! ## VK Format (1888 bytes)
//! - [0..32]: log2(circuit_size) as 32-byte big-endian integer
//! - [32..64]: log2(domain_size) as 32-byte big-endian integer
//! - [64..96]: num_public_inputs as 32-byte big-endian integer
//! - [96..1888]: 28 commitments (64 bytes each, x || y)
//!
//! Header words are plain counters: they are kept as full 256-bit values and
//! never reduced mod r.

use crate::constants::{VK_COMMITMENT_LABELS, VK_NUM_COMMITMENTS, VK_NUM_HEADER_WORDS, VK_SIZE};
use crate::cursor::ByteCursor;
use crate::errors::KeyError;
use crate::types::{word_to_u64, Commitment, Word, COMMITMENT_SIZE, WORD_SIZE};

/// Parsed verification key for UltraHonk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationKey {
    /// Log2 of circuit size
    pub log2_circuit_size: Word,
    /// Log2 of domain size (FFT domain)
    pub log2_domain_size: Word,
    /// Number of public inputs
    pub num_public_inputs: Word,
    /// Commitments to selector, permutation and table polynomials, in protocol order
    pub commitments: Box<[Commitment; VK_NUM_COMMITMENTS]>,
}

impl VerificationKey {
    /// Parse VK from bb binary format
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let mut cursor = ByteCursor::exact(bytes, VK_SIZE).ok_or(KeyError::SizeMismatch {
            expected: VK_SIZE,
            actual: bytes.len(),
        })?;

        let log2_circuit_size: Word = cursor.read_array();
        let log2_domain_size: Word = cursor.read_array();
        let num_public_inputs: Word = cursor.read_array();

        let mut commitments = Box::new([[0u8; COMMITMENT_SIZE]; VK_NUM_COMMITMENTS]);
        for commitment in commitments.iter_mut() {
            *commitment = cursor.read_array();
        }
        debug_assert_eq!(cursor.remaining(), 0);

        let vk = VerificationKey {
            log2_circuit_size,
            log2_domain_size,
            num_public_inputs,
            commitments,
        };
        log::debug!(
            "decoded VK: log2_circuit_size={:?} num_public_inputs={:?}",
            vk.log2_circuit_size_u32(),
            vk.num_public_inputs_u64()
        );
        Ok(vk)
    }

    /// Serialize back to the 1888-byte bb format
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(VK_SIZE);
        for word in self.header_words() {
            out.extend_from_slice(word);
        }
        for commitment in self.commitments.iter() {
            out.extend_from_slice(commitment);
        }
        out
    }

    /// Header words in file order
    pub fn header_words(&self) -> [&Word; VK_NUM_HEADER_WORDS] {
        [
            &self.log2_circuit_size,
            &self.log2_domain_size,
            &self.num_public_inputs,
        ]
    }

    /// log2_circuit_size narrowed to u32, if it fits
    pub fn log2_circuit_size_u32(&self) -> Option<u32> {
        word_to_u64(&self.log2_circuit_size).and_then(|v| u32::try_from(v).ok())
    }

    /// log2_domain_size narrowed to u32, if it fits
    pub fn log2_domain_size_u32(&self) -> Option<u32> {
        word_to_u64(&self.log2_domain_size).and_then(|v| u32::try_from(v).ok())
    }

    /// num_public_inputs narrowed to u64, if it fits
    pub fn num_public_inputs_u64(&self) -> Option<u64> {
        word_to_u64(&self.num_public_inputs)
    }

    /// Get circuit size (2^log2_circuit_size), if it fits in a u64
    pub fn circuit_size(&self) -> Option<u64> {
        self.log2_circuit_size_u32().and_then(pow2)
    }

    /// Get domain size (2^log2_domain_size), if it fits in a u64
    pub fn domain_size(&self) -> Option<u64> {
        self.log2_domain_size_u32().and_then(pow2)
    }

    /// Commitment by protocol index
    pub fn commitment(&self, index: usize) -> Option<&Commitment> {
        self.commitments.get(index)
    }
}

fn pow2(exp: u32) -> Option<u64> {
    1u64.checked_shl(exp)
}

/// Diagnostic label for a VK commitment index
pub fn commitment_label(index: usize) -> &'static str {
    VK_COMMITMENT_LABELS.get(index).copied().unwrap_or("unknown")
}

/// Byte offset of a VK commitment inside the serialized key
pub fn commitment_offset(index: usize) -> usize {
    VK_NUM_HEADER_WORDS * WORD_SIZE + index * COMMITMENT_SIZE
}
