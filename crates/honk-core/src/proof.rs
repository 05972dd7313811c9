//! Proof parsing for bb UltraHonk (Keccak)
//!
//! Proofs are variable-size: the element count and every section offset
//! follow from `(log_n, is_zk)`, see [`crate::layout`].
//!
//! Elements are kept exactly as written (32-byte big-endian chunks, not
//! reduced). Callers that do arithmetic reduce with
//! [`crate::field::fr_from_bytes`] first.

use crate::constants::{NUM_WITNESS_COMMS, WIRE_COMMITMENT_LABELS};
use crate::cursor::ByteCursor;
use crate::errors::ProofError;
use crate::layout::{ProofLayout, ProofParams, SectionKind};
use crate::types::{commitment_from_halves, Commitment, Fr, FRS_PER_COMMITMENT, FR_SIZE};

/// Parsed UltraHonk proof
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    elements: Vec<Fr>,
    params: ProofParams,
}

impl Proof {
    /// Parse proof from bb binary format.
    ///
    /// Fails with [`ProofError::SizeMismatch`] when the length does not match
    /// `(log_n, is_zk)`; the error carries the byte length so the caller can
    /// try [`crate::layout::detect_parameters`].
    pub fn from_bytes(bytes: &[u8], log_n: u32, is_zk: bool) -> Result<Self, ProofError> {
        let params = ProofParams::new(log_n, is_zk)?;

        if bytes.len() % FR_SIZE != 0 {
            return Err(ProofError::MisalignedLength { len: bytes.len() });
        }

        let expected = params.element_count();
        let mut cursor =
            ByteCursor::exact(bytes, params.byte_len()).ok_or(ProofError::SizeMismatch {
                expected,
                actual: bytes.len() / FR_SIZE,
                byte_len: bytes.len(),
            })?;

        let elements = cursor.read_arrays::<FR_SIZE>(expected);
        log::debug!(
            "decoded proof: log_n={} is_zk={} elements={}",
            log_n,
            is_zk,
            elements.len()
        );

        Ok(Proof { elements, params })
    }

    pub fn log_n(&self) -> u32 {
        self.params.log_n()
    }

    pub fn is_zk(&self) -> bool {
        self.params.is_zk()
    }

    pub fn params(&self) -> ProofParams {
        self.params
    }

    /// All elements in proof order
    pub fn elements(&self) -> &[Fr] {
        &self.elements
    }

    /// Serialize back to raw bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.elements.concat()
    }

    /// Section offsets, recomputed from the proof parameters
    pub fn layout(&self) -> ProofLayout {
        ProofLayout::for_params(self.params)
    }

    /// Elements of one section (empty for ZK-only sections of non-ZK proofs)
    pub fn section(&self, kind: SectionKind) -> &[Fr] {
        &self.elements[self.layout().section(kind).range()]
    }

    fn zk_section(&self, kind: SectionKind) -> Option<&[Fr]> {
        self.is_zk().then(|| self.section(kind))
    }

    /// Get pairing point object (16 Fr elements)
    pub fn pairing_point_object(&self) -> &[Fr] {
        self.section(SectionKind::PairingPointObject)
    }

    /// Get wire commitment by index (0-7)
    /// Order: w1, w2, w3, lookupReadCounts, lookupReadTags, w4, lookupInverses, zPerm
    pub fn wire_commitment(&self, index: usize) -> Result<Commitment, ProofError> {
        commitment_at(
            self.section(SectionKind::WireCommitments),
            index,
            "wire_commitments",
        )
    }

    /// All 8 wire commitments
    pub fn wire_commitments(&self) -> Vec<Commitment> {
        commitments_in(self.section(SectionKind::WireCommitments))
    }

    /// Libra concatenation commitment limbs (ZK only)
    pub fn libra_concatenation(&self) -> Option<&[Fr]> {
        self.zk_section(SectionKind::LibraConcatenation)
    }

    /// Libra sum (ZK only)
    pub fn libra_sum(&self) -> Option<&Fr> {
        self.zk_section(SectionKind::LibraSum).and_then(|s| s.first())
    }

    /// Univariate coefficients for a sumcheck round (8 or 9 elements)
    pub fn sumcheck_univariate(&self, round: usize) -> Result<&[Fr], ProofError> {
        let rounds = self.log_n() as usize;
        if round >= rounds {
            return Err(ProofError::IndexOutOfRange {
                section: "sumcheck_univariates",
                index: round,
                len: rounds,
            });
        }
        let len = self.layout().univariate_length();
        let univariates = self.section(SectionKind::SumcheckUnivariates);
        Ok(&univariates[round * len..(round + 1) * len])
    }

    /// All sumcheck evaluations (41 for ZK, 40 otherwise)
    pub fn sumcheck_evaluations(&self) -> &[Fr] {
        self.section(SectionKind::SumcheckEvaluations)
    }

    /// Libra post-sumcheck block (ZK only): evaluation, grand sum, quotient,
    /// gemini masking poly and gemini masking eval, 8 elements in total
    pub fn libra_post_sumcheck(&self) -> Option<&[Fr]> {
        if !self.is_zk() {
            return None;
        }
        let layout = self.layout();
        let start = layout.section(SectionKind::LibraEvaluation).offset;
        let end = layout.section(SectionKind::GeminiMaskingEval).range().end;
        Some(&self.elements[start..end])
    }

    /// Gemini fold commitment by index (0 to log_n - 2)
    pub fn gemini_fold_commitment(&self, index: usize) -> Result<Commitment, ProofError> {
        commitment_at(
            self.section(SectionKind::GeminiFoldCommitments),
            index,
            "gemini_fold_commitments",
        )
    }

    /// All log_n - 1 gemini fold commitments
    pub fn gemini_fold_commitments(&self) -> Vec<Commitment> {
        commitments_in(self.section(SectionKind::GeminiFoldCommitments))
    }

    /// Gemini A evaluations (log_n elements)
    pub fn gemini_evaluations(&self) -> &[Fr] {
        self.section(SectionKind::GeminiEvaluations)
    }

    /// Small IPA evaluations (ZK only)
    pub fn small_ipa(&self) -> Option<&[Fr]> {
        self.zk_section(SectionKind::SmallIpa)
    }

    /// Get shplonkQ commitment
    pub fn shplonk_q(&self) -> Commitment {
        commitments_in(self.section(SectionKind::ShplonkKzg))[0]
    }

    /// Get KZG quotient commitment
    pub fn kzg_w(&self) -> Commitment {
        commitments_in(self.section(SectionKind::ShplonkKzg))[1]
    }

    /// Trailing protocol data (2 for ZK, 1 otherwise)
    pub fn trailing_data(&self) -> &[Fr] {
        self.section(SectionKind::TrailingData)
    }
}

fn commitment_at(
    section: &[Fr],
    index: usize,
    name: &'static str,
) -> Result<Commitment, ProofError> {
    let count = section.len() / FRS_PER_COMMITMENT;
    if index >= count {
        return Err(ProofError::IndexOutOfRange {
            section: name,
            index,
            len: count,
        });
    }
    let base = index * FRS_PER_COMMITMENT;
    Ok(commitment_from_halves(&section[base], &section[base + 1]))
}

fn commitments_in(section: &[Fr]) -> Vec<Commitment> {
    section
        .chunks_exact(FRS_PER_COMMITMENT)
        .map(|pair| commitment_from_halves(&pair[0], &pair[1]))
        .collect()
}

/// Diagnostic label for a wire commitment index
pub fn wire_commitment_label(index: usize) -> &'static str {
    if index < NUM_WITNESS_COMMS {
        WIRE_COMMITMENT_LABELS[index]
    } else {
        "unknown"
    }
}
