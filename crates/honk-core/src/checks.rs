//! Integrity checks on decoded artifacts
//!
//! - VK hash: Keccak256 over the serialized key, reduced mod r. This is the
//!   first value bb absorbs into the Fiat-Shamir transcript.
//! - Challenge splitting into two 127-bit halves.
//! - Sumcheck round zero: `u[0][0] + u[0][1]` must equal the initial target
//!   (0 for non-ZK proofs, `libra_sum · libra_challenge` for ZK proofs).
//!
//! Mismatched invariants are reported as data; only arithmetic
//! impossibilities are errors.

use sha3::{Digest, Keccak256};

use crate::errors::CheckError;
use crate::field::{fr_add, fr_div, fr_from_bytes, fr_is_zero, fr_reduce};
use crate::key::VerificationKey;
use crate::proof::Proof;
use crate::types::{Fr, SCALAR_ZERO};

/// Keccak256 digest of arbitrary bytes
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Keccak256::digest(data));
    out
}

/// Compute the VK hash as bb does for the Keccak flavor:
/// header words (32 bytes each) || commitments (64 bytes each), hashed and
/// reduced mod r. Header words go in unreduced.
pub fn vk_hash(vk: &VerificationKey) -> Fr {
    let mut hasher = Keccak256::new();
    for word in vk.header_words() {
        hasher.update(word);
    }
    for commitment in vk.commitments.iter() {
        hasher.update(commitment);
    }

    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    let hash = fr_reduce(&digest);
    crate::trace_fr!("vk_hash", &hash);
    hash
}

const MASK_127: u128 = (1u128 << 127) - 1;

fn split_u128s(value: &[u8; 32]) -> (u128, u128) {
    let mut high = [0u8; 16];
    let mut low = [0u8; 16];
    high.copy_from_slice(&value[..16]);
    low.copy_from_slice(&value[16..]);
    (u128::from_be_bytes(high), u128::from_be_bytes(low))
}

fn u128_to_fr(value: u128) -> Fr {
    let mut fr = SCALAR_ZERO;
    fr[16..].copy_from_slice(&value.to_be_bytes());
    fr
}

/// Split a challenge into its low and high 127-bit halves:
/// `lo = c & (2^127 - 1)`, `hi = (c >> 127) & (2^127 - 1)`.
/// Both halves are below r.
pub fn split_challenge(challenge: &Fr) -> (Fr, Fr) {
    let (high, low) = split_u128s(challenge);
    let lo = low & MASK_127;
    let hi = ((high << 1) | (low >> 127)) & MASK_127;
    (u128_to_fr(lo), u128_to_fr(hi))
}

/// Rebuild `lo | (hi << 127)` from two 127-bit halves.
/// Inverse of [`split_challenge`] for values below 2^254.
pub fn join_challenge(lo: &Fr, hi: &Fr) -> Fr {
    let (_, lo) = split_u128s(lo);
    let (_, hi) = split_u128s(hi);
    let (lo, hi) = (lo & MASK_127, hi & MASK_127);

    let low = lo | (hi << 127);
    let high = hi >> 1;

    let mut out = SCALAR_ZERO;
    out[..16].copy_from_slice(&high.to_be_bytes());
    out[16..].copy_from_slice(&low.to_be_bytes());
    out
}

/// Outcome of the ZK round-zero comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZkOutcome {
    /// `u0 + u1 == libra_sum`, i.e. the libra challenge would be 1
    DegenerateChallenge,
    /// `u0 + u1 != libra_sum`; the implied libra challenge is `sum / libra_sum`
    ImpliedChallenge(Fr),
}

/// Result of the sumcheck round-zero check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundZeroReport {
    Zk {
        u0: Fr,
        u1: Fr,
        sum: Fr,
        libra_sum: Fr,
        outcome: ZkOutcome,
    },
    NonZk {
        u0: Fr,
        u1: Fr,
        sum: Fr,
        /// `sum == 0`
        holds: bool,
    },
}

impl RoundZeroReport {
    /// `u[0][0] + u[0][1]`
    pub fn sum(&self) -> &Fr {
        match self {
            RoundZeroReport::Zk { sum, .. } | RoundZeroReport::NonZk { sum, .. } => sum,
        }
    }

    /// Whether the round-zero relation holds without any hidden challenge
    pub fn is_direct_match(&self) -> bool {
        match self {
            RoundZeroReport::Zk { outcome, .. } => *outcome == ZkOutcome::DegenerateChallenge,
            RoundZeroReport::NonZk { holds, .. } => *holds,
        }
    }
}

/// Check the first sumcheck round against the initial target.
///
/// Fails only when the implied libra challenge would need a division by a
/// zero `libra_sum`.
pub fn sumcheck_round_zero_check(proof: &Proof) -> Result<RoundZeroReport, CheckError> {
    let univariate = proof.sumcheck_univariate(0)?;
    let u0 = fr_from_bytes(&univariate[0]);
    let u1 = fr_from_bytes(&univariate[1]);
    let sum = fr_add(&u0, &u1);
    crate::trace_fr!("u[0][0] + u[0][1]", &sum);

    match proof.libra_sum() {
        Some(raw_libra_sum) => {
            let libra_sum = fr_from_bytes(raw_libra_sum);
            let outcome = if sum == libra_sum {
                log::debug!("round zero: sum equals libra_sum (degenerate challenge)");
                ZkOutcome::DegenerateChallenge
            } else {
                // A zero libra_sum leaves no challenge that could explain the sum
                ZkOutcome::ImpliedChallenge(fr_div(&sum, &libra_sum)?)
            };
            Ok(RoundZeroReport::Zk {
                u0,
                u1,
                sum,
                libra_sum,
                outcome,
            })
        }
        None => {
            let holds = fr_is_zero(&sum);
            if !holds {
                log::warn!("round zero: u[0][0] + u[0][1] is non-zero for a non-ZK proof");
            }
            Ok(RoundZeroReport::NonZk { u0, u1, sum, holds })
        }
    }
}
