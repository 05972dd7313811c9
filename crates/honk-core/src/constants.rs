//! Protocol constants for the bb UltraHonk (Keccak) artifact layout

use crate::types::{COMMITMENT_SIZE, WORD_SIZE};

/// Number of header words in the verification key
pub const VK_NUM_HEADER_WORDS: usize = 3;

/// Number of commitments in the verification key
pub const VK_NUM_COMMITMENTS: usize = 28;

/// VK size: 96-byte header + 28 commitments
pub const VK_SIZE: usize = VK_NUM_HEADER_WORDS * WORD_SIZE + VK_NUM_COMMITMENTS * COMMITMENT_SIZE; // 1888 bytes

/// Number of Fr values in pairing point object (for recursion support)
pub const NUM_PAIRING_POINT_FRS: usize = 16;

/// Number of witness commitments (w1, w2, w3, lookupReadCounts, lookupReadTags, w4, lookupInverses, zPerm)
pub const NUM_WITNESS_COMMS: usize = 8;

/// Libra concatenation commitment (ZK only)
pub const NUM_LIBRA_CONCAT_FRS: usize = 2;

/// Libra sum (ZK only)
pub const NUM_LIBRA_SUM_FRS: usize = 1;

/// Sumcheck univariate length for ZK proofs
pub const ZK_BATCHED_RELATION_PARTIAL_LENGTH: usize = 9;

/// Sumcheck univariate length for non-ZK proofs
pub const BATCHED_RELATION_PARTIAL_LENGTH: usize = 8;

/// Sumcheck evaluations for ZK proofs (includes the gemini masking entity)
pub const NUM_ZK_SUMCHECK_EVALUATIONS: usize = 41;

/// Sumcheck evaluations for non-ZK proofs
pub const NUM_SUMCHECK_EVALUATIONS: usize = 40;

/// Libra post-sumcheck block (ZK only): evaluation, grand sum, quotient,
/// gemini masking poly, gemini masking eval
pub const NUM_LIBRA_EVALUATION_FRS: usize = 1;
pub const NUM_LIBRA_GRAND_SUM_FRS: usize = 2;
pub const NUM_LIBRA_QUOTIENT_FRS: usize = 2;
pub const NUM_GEMINI_MASKING_POLY_FRS: usize = 2;
pub const NUM_GEMINI_MASKING_EVAL_FRS: usize = 1;
pub const NUM_LIBRA_POST_SUMCHECK_FRS: usize = NUM_LIBRA_EVALUATION_FRS
    + NUM_LIBRA_GRAND_SUM_FRS
    + NUM_LIBRA_QUOTIENT_FRS
    + NUM_GEMINI_MASKING_POLY_FRS
    + NUM_GEMINI_MASKING_EVAL_FRS;

/// Small IPA evaluations (ZK only)
pub const NUM_SMALL_IPA_FRS: usize = 2;

/// Shplonk Q and KZG W commitments
pub const NUM_SHPLONK_KZG_FRS: usize = 4;

/// Trailing protocol data
pub const NUM_ZK_TRAILING_FRS: usize = 2;
pub const NUM_TRAILING_FRS: usize = 1;

/// Smallest log_n with at least one gemini fold commitment
pub const MIN_LOG_N: u32 = 2;

/// Default auto-detection search range (half-open)
pub const DETECT_MIN_LOG_N: u32 = 4;
pub const DETECT_MAX_LOG_N: u32 = 30;

/// Diagnostic labels for the VK commitments, in protocol order.
/// Parsing never consults this table.
pub const VK_COMMITMENT_LABELS: [&str; VK_NUM_COMMITMENTS] = [
    "Q_m",
    "Q_c",
    "Q_l",
    "Q_r",
    "Q_o",
    "Q_4",
    "Q_lookup",
    "Q_arith",
    "Q_range",
    "Q_elliptic",
    "Q_aux",
    "Q_poseidon2_ext",
    "Q_poseidon2_int",
    "σ₁",
    "σ₂",
    "σ₃",
    "σ₄",
    "ID₁",
    "ID₂",
    "ID₃",
    "ID₄",
    "Table₁",
    "Table₂",
    "Table₃",
    "Table₄",
    "L_first",
    "L_last",
    "unknown",
];

/// Diagnostic labels for the proof wire commitments, in proof order
pub const WIRE_COMMITMENT_LABELS: [&str; NUM_WITNESS_COMMS] = [
    "W₁",
    "W₂",
    "W₃",
    "lookup_counts",
    "lookup_tags",
    "W₄",
    "lookup_inv",
    "z_perm",
];
