//! Core types for UltraHonk artifact decoding
//!
//! Uses raw byte arrays in the same big-endian layout bb writes to disk.

use hex_literal::hex;

/// A 32-byte scalar field element (Fr for BN254).
/// Stored in big-endian format. Canonical values are `< FR_MODULUS`.
pub type Scalar = [u8; 32];

/// Alias for Scalar (field element)
pub type Fr = Scalar;

/// A 32-byte big-endian unsigned integer that is never reduced mod r.
/// VK header counters and public inputs use this representation.
pub type Word = [u8; 32];

/// A 64-byte curve point commitment (x || y), kept opaque.
pub type Commitment = [u8; 64];

/// Size of Fr in bytes
pub const FR_SIZE: usize = 32;

/// Size of a header word in bytes
pub const WORD_SIZE: usize = 32;

/// Size of a commitment in bytes
pub const COMMITMENT_SIZE: usize = 64;

/// Number of Fr elements a commitment occupies inside a proof
pub const FRS_PER_COMMITMENT: usize = COMMITMENT_SIZE / FR_SIZE;

/// Scalar representing zero
pub const SCALAR_ZERO: Scalar = [0u8; 32];

/// Scalar representing one
pub const SCALAR_ONE: Scalar = {
    let mut s = [0u8; 32];
    s[31] = 1;
    s
};

/// BN254 scalar field modulus (r)
/// r = 21888242871839275222246405745257275088548364400416034343698204186575808495617
pub const FR_MODULUS: Scalar =
    hex!("30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001");

/// Interpret a word as a u64, if its upper 24 bytes are zero.
pub fn word_to_u64(word: &Word) -> Option<u64> {
    if word[..24].iter().any(|&b| b != 0) {
        return None;
    }
    let mut low = [0u8; 8];
    low.copy_from_slice(&word[24..32]);
    Some(u64::from_be_bytes(low))
}

/// Interpret a word as a u128, if its upper 16 bytes are zero.
pub fn word_to_u128(word: &Word) -> Option<u128> {
    if word[..16].iter().any(|&b| b != 0) {
        return None;
    }
    let mut low = [0u8; 16];
    low.copy_from_slice(&word[16..32]);
    Some(u128::from_be_bytes(low))
}

/// Build a word holding `val` in its low 8 bytes.
pub fn word_from_u64(val: u64) -> Word {
    let mut word = [0u8; 32];
    word[24..32].copy_from_slice(&val.to_be_bytes());
    word
}

/// Join two 32-byte halves into a commitment.
pub fn commitment_from_halves(x: &[u8; 32], y: &[u8; 32]) -> Commitment {
    let mut c = [0u8; COMMITMENT_SIZE];
    c[..32].copy_from_slice(x);
    c[32..].copy_from_slice(y);
    c
}
