//! UltraHonk artifact inspection
//!
//! Decodes Barretenberg UltraHonk (Keccak transcript) verification keys,
//! proofs and public inputs, and runs cheap structural checks on them.
//!
//! ## Modules
//!
//! - `field`: BN254 scalar field arithmetic on big-endian byte arrays
//! - `layout`: proof section table for a given `(log_n, is_zk)`
//! - `key` / `proof` / `public_inputs`: artifact decoding
//! - `checks`: VK hash, challenge splitting, sumcheck round-zero check
//!
//! ```ignore
//! use honk_core::{detect_parameters, Proof, VerificationKey};
//!
//! let vk = VerificationKey::from_bytes(&vk_bytes)?;
//! let params = detect_parameters(proof_bytes.len()).unwrap();
//! let proof = Proof::from_bytes(&proof_bytes, params.log_n(), params.is_zk())?;
//! println!("vk hash = {}", honk_core::debug::fr_to_hex(&honk_core::vk_hash(&vk)));
//! ```

pub mod checks;
pub mod constants;
pub mod cursor;
pub mod debug;
pub mod errors;
pub mod field;
pub mod key;
pub mod layout;
pub mod proof;
pub mod public_inputs;
pub mod types;

pub use checks::{
    join_challenge, keccak256, split_challenge, sumcheck_round_zero_check, vk_hash,
    RoundZeroReport, ZkOutcome,
};
pub use constants::{MIN_LOG_N, VK_NUM_COMMITMENTS, VK_SIZE};
pub use errors::{
    CheckError, FieldError, InspectError, KeyError, LayoutError, ProofError, PublicInputsError,
};
pub use key::VerificationKey;
pub use layout::{
    detect_parameters, detect_parameters_in, expected_element_count, ProofLayout, ProofParams,
    Section, SectionKind,
};
pub use proof::Proof;
pub use public_inputs::PublicInputs;
pub use types::{Commitment, Fr, Scalar, Word};
