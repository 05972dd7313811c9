//! Serializable inspection reports
//!
//! Reports hold hex strings and labels only, so they render the same way as
//! human text (`Display`) or JSON (`serde`).

use std::fmt;

use honk_core::checks::{
    split_challenge, sumcheck_round_zero_check, vk_hash, RoundZeroReport, ZkOutcome,
};
use honk_core::debug::{commitment_to_hex, fr_to_hex, truncate_hex};
use honk_core::field::{fr_add, fr_from_bytes};
use honk_core::key::{commitment_label, commitment_offset};
use honk_core::proof::wire_commitment_label;
use honk_core::types::{COMMITMENT_SIZE, SCALAR_ZERO};
use honk_core::{
    CheckError, Commitment, FieldError, Proof, ProofLayout, PublicInputs, Section, SectionKind,
    VerificationKey,
};
use serde::Serialize;

/// Number of leading values shown per section in human output
const PREVIEW_LEN: usize = 3;

/// Labelled commitment with its byte position in the source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitmentEntry {
    pub index: usize,
    pub label: &'static str,
    pub byte_offset: usize,
    pub x: String,
    pub y: String,
}

impl CommitmentEntry {
    pub fn new(index: usize, label: &'static str, byte_offset: usize, c: &Commitment) -> Self {
        let (x, y) = commitment_to_hex(c);
        Self {
            index,
            label,
            byte_offset,
            x,
            y,
        }
    }
}

impl fmt::Display for CommitmentEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:2}] {:18}: x={}, y={}",
            self.index,
            self.label,
            truncate_hex(&self.x, 8),
            truncate_hex(&self.y, 8)
        )
    }
}

/// Verification key summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VkReport {
    pub log2_circuit_size: Option<u32>,
    pub circuit_size: Option<u64>,
    pub log2_domain_size: Option<u32>,
    pub num_public_inputs: Option<u64>,
    /// Raw header words, as written
    pub header_words: Vec<String>,
    pub commitments: Vec<CommitmentEntry>,
    pub vk_hash: String,
}

impl VkReport {
    pub fn new(vk: &VerificationKey) -> Self {
        let commitments = vk
            .commitments
            .iter()
            .enumerate()
            .map(|(i, c)| CommitmentEntry::new(i, commitment_label(i), commitment_offset(i), c))
            .collect();

        Self {
            log2_circuit_size: vk.log2_circuit_size_u32(),
            circuit_size: vk.circuit_size(),
            log2_domain_size: vk.log2_domain_size_u32(),
            num_public_inputs: vk.num_public_inputs_u64(),
            header_words: vk.header_words().iter().map(|w| fr_to_hex(w)).collect(),
            commitments,
            vk_hash: fr_to_hex(&vk_hash(vk)),
        }
    }
}

fn or_raw<T: fmt::Display>(value: Option<T>, raw: &str) -> String {
    match value {
        Some(v) => v.to_string(),
        None => format!("{} (too large)", truncate_hex(raw, 8)),
    }
}

impl fmt::Display for VkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Header Fields:")?;
        writeln!(
            f,
            "  log2_circuit_size: {} (circuit size = {})",
            or_raw(self.log2_circuit_size, &self.header_words[0]),
            or_raw(self.circuit_size, &self.header_words[0])
        )?;
        writeln!(
            f,
            "  log2_domain_size: {}",
            or_raw(self.log2_domain_size, &self.header_words[1])
        )?;
        writeln!(
            f,
            "  num_public_inputs: {}",
            or_raw(self.num_public_inputs, &self.header_words[2])
        )?;
        writeln!(f)?;
        writeln!(f, "Commitments ({} G1 points):", self.commitments.len())?;
        for entry in &self.commitments {
            writeln!(f, "  {}", entry)?;
        }
        writeln!(f)?;
        write!(f, "VK Hash: {}", self.vk_hash)
    }
}

/// One row of the proof section table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionEntry {
    pub name: &'static str,
    /// Offset in Fr elements
    pub offset: usize,
    /// Length in Fr elements
    pub len: usize,
    pub byte_offset: usize,
    pub byte_len: usize,
}

impl From<&Section> for SectionEntry {
    fn from(section: &Section) -> Self {
        let bytes = section.byte_range();
        Self {
            name: section.name(),
            offset: section.offset,
            len: section.len,
            byte_offset: bytes.start,
            byte_len: bytes.len(),
        }
    }
}

/// Proof layout for a given `(log_n, is_zk)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutReport {
    pub log_n: u32,
    pub is_zk: bool,
    pub element_count: usize,
    pub byte_len: usize,
    pub univariate_length: usize,
    pub sections: Vec<SectionEntry>,
}

impl LayoutReport {
    pub fn new(layout: &ProofLayout) -> Self {
        let params = layout.params();
        Self {
            log_n: params.log_n(),
            is_zk: params.is_zk(),
            element_count: params.element_count(),
            byte_len: params.byte_len(),
            univariate_length: layout.univariate_length(),
            sections: layout.sections().iter().map(SectionEntry::from).collect(),
        }
    }
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Config: log_n={}, is_zk={} ({} Fr elements, {} bytes)",
            self.log_n, self.is_zk, self.element_count, self.byte_len
        )?;
        writeln!(f)?;
        writeln!(f, "  {:<24} {:>6} {:>6} {:>8}", "section", "offset", "len", "bytes")?;
        for s in &self.sections {
            if s.len == 0 {
                continue;
            }
            writeln!(
                f,
                "  {:<24} {:>6} {:>6} {:>8}",
                s.name, s.offset, s.len, s.byte_offset
            )?;
        }
        Ok(())
    }
}

/// Decoded proof summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProofReport {
    /// Whether `(log_n, is_zk)` came from size detection rather than the caller
    pub detected: bool,
    pub layout: LayoutReport,
    pub pairing_point_object: Vec<String>,
    pub wire_commitments: Vec<CommitmentEntry>,
    pub libra_sum: Option<String>,
    pub first_univariate: Vec<String>,
    pub sumcheck_evaluations: Vec<String>,
    pub gemini_fold_commitments: usize,
    pub shplonk_q: CommitmentEntry,
    pub kzg_w: CommitmentEntry,
}

impl ProofReport {
    pub fn new(proof: &Proof, detected: bool) -> Self {
        let layout = proof.layout();
        let wires_start = layout.section(SectionKind::WireCommitments).byte_range().start;
        let opening_start = layout.section(SectionKind::ShplonkKzg).byte_range().start;

        let wire_commitments = proof
            .wire_commitments()
            .iter()
            .enumerate()
            .map(|(i, c)| {
                CommitmentEntry::new(
                    i,
                    wire_commitment_label(i),
                    wires_start + i * COMMITMENT_SIZE,
                    c,
                )
            })
            .collect();

        // Round 0 always exists since log_n >= 2
        let first_univariate = proof
            .sumcheck_univariate(0)
            .map(hex_all)
            .unwrap_or_default();

        Self {
            detected,
            layout: LayoutReport::new(&layout),
            pairing_point_object: hex_all(proof.pairing_point_object()),
            wire_commitments,
            libra_sum: proof.libra_sum().map(fr_to_hex),
            first_univariate,
            sumcheck_evaluations: hex_all(proof.sumcheck_evaluations()),
            gemini_fold_commitments: proof.gemini_fold_commitments().len(),
            shplonk_q: CommitmentEntry::new(0, "shplonk_q", opening_start, &proof.shplonk_q()),
            kzg_w: CommitmentEntry::new(
                1,
                "kzg_w",
                opening_start + COMMITMENT_SIZE,
                &proof.kzg_w(),
            ),
        }
    }
}

fn hex_all(values: &[[u8; 32]]) -> Vec<String> {
    values.iter().map(fr_to_hex).collect()
}

fn write_preview(f: &mut fmt::Formatter<'_>, name: &str, values: &[String]) -> fmt::Result {
    for (i, v) in values.iter().take(PREVIEW_LEN).enumerate() {
        writeln!(f, "  {}[{}]: {}", name, i, v)?;
    }
    if values.len() > PREVIEW_LEN {
        writeln!(f, "  ... ({} total)", values.len())?;
    }
    Ok(())
}

impl fmt::Display for ProofReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layout)?;
        if self.detected {
            writeln!(f, "  (parameters detected from proof size)")?;
        }
        writeln!(f)?;
        writeln!(f, "Pairing Point Object:")?;
        write_preview(f, "ppo", &self.pairing_point_object)?;
        writeln!(f)?;
        writeln!(f, "Witness Commitments:")?;
        for entry in &self.wire_commitments {
            writeln!(f, "  {}", entry)?;
        }
        if let Some(libra_sum) = &self.libra_sum {
            writeln!(f)?;
            writeln!(f, "Libra Data (ZK mode):")?;
            writeln!(f, "  libra_sum: {}", libra_sum)?;
        }
        writeln!(f)?;
        writeln!(f, "Sumcheck Univariates (round 0):")?;
        write_preview(f, "u[0]", &self.first_univariate)?;
        writeln!(f)?;
        writeln!(f, "Sumcheck Evaluations:")?;
        write_preview(f, "eval", &self.sumcheck_evaluations)?;
        writeln!(f)?;
        writeln!(f, "Gemini fold commitments: {}", self.gemini_fold_commitments)?;
        writeln!(f, "  {}", self.shplonk_q)?;
        write!(f, "  {}", self.kzg_w)
    }
}

/// One public input value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicInputEntry {
    pub index: usize,
    pub hex: String,
    /// Decimal value when it fits in 128 bits
    pub value: Option<String>,
}

/// Public inputs summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicInputsReport {
    pub count: usize,
    /// Count declared by the VK, when one was given
    pub expected: Option<u64>,
    pub values: Vec<PublicInputEntry>,
}

impl PublicInputsReport {
    pub fn new(inputs: &PublicInputs, vk: Option<&VerificationKey>) -> Self {
        let values = inputs
            .values()
            .iter()
            .enumerate()
            .map(|(index, word)| PublicInputEntry {
                index,
                hex: fr_to_hex(word),
                value: inputs.value_u128(index).map(|v| v.to_string()),
            })
            .collect();

        Self {
            count: inputs.len(),
            expected: vk.and_then(VerificationKey::num_public_inputs_u64),
            values,
        }
    }

    /// Whether the count matches the VK; `None` without a VK
    pub fn matches_vk(&self) -> Option<bool> {
        self.expected.map(|expected| expected == self.count as u64)
    }
}

impl fmt::Display for PublicInputsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.expected {
            Some(expected) => writeln!(
                f,
                "Public Inputs ({}, VK expects {}):",
                self.count, expected
            )?,
            None => writeln!(f, "Public Inputs ({}):", self.count)?,
        }
        for entry in &self.values {
            let value = entry.value.as_deref().unwrap_or(">u128");
            writeln!(f, "  [{}] = {} ({})", entry.index, value, entry.hex)?;
        }
        Ok(())
    }
}

/// How the round-zero sum relates to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundZeroOutcome {
    /// ZK: sum equals libra_sum, so the libra challenge would be 1
    DegenerateChallenge,
    /// ZK: the libra challenge implied by `sum / libra_sum`
    ImpliedChallenge,
    /// ZK: libra_sum is zero but the sum is not, so no challenge fits
    ZeroLibraSum,
    /// Non-ZK: sum is zero
    Holds,
    /// Non-ZK: sum is non-zero
    Mismatch,
}

/// Serializable form of the sumcheck round-zero check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundZeroSummary {
    pub mode: &'static str,
    pub u0: String,
    pub u1: String,
    pub sum: String,
    pub libra_sum: Option<String>,
    pub outcome: RoundZeroOutcome,
    pub implied_challenge: Option<String>,
    /// 127-bit halves `(lo, hi)` of the implied challenge
    pub implied_challenge_halves: Option<(String, String)>,
    pub direct_match: bool,
}

impl RoundZeroSummary {
    /// Run the round-zero check on `proof`.
    ///
    /// A zero `libra_sum` against a non-zero sum is reported as
    /// [`RoundZeroOutcome::ZeroLibraSum`] instead of failing.
    pub fn for_proof(proof: &Proof) -> Result<Self, CheckError> {
        match sumcheck_round_zero_check(proof) {
            Ok(report) => Ok(Self::from(&report)),
            Err(CheckError::Arithmetic(FieldError::DivisionByZero)) => {
                let univariate = proof.sumcheck_univariate(0)?;
                let u0 = fr_from_bytes(&univariate[0]);
                let u1 = fr_from_bytes(&univariate[1]);
                log::warn!("round zero: libra_sum is zero but u[0][0] + u[0][1] is not");
                Ok(Self {
                    mode: "zk",
                    u0: fr_to_hex(&u0),
                    u1: fr_to_hex(&u1),
                    sum: fr_to_hex(&fr_add(&u0, &u1)),
                    libra_sum: Some(fr_to_hex(&SCALAR_ZERO)),
                    outcome: RoundZeroOutcome::ZeroLibraSum,
                    implied_challenge: None,
                    implied_challenge_halves: None,
                    direct_match: false,
                })
            }
            Err(e) => Err(e),
        }
    }
}

impl From<&RoundZeroReport> for RoundZeroSummary {
    fn from(report: &RoundZeroReport) -> Self {
        let direct_match = report.is_direct_match();
        match report {
            RoundZeroReport::Zk {
                u0,
                u1,
                sum,
                libra_sum,
                outcome,
            } => {
                let (outcome, implied) = match outcome {
                    ZkOutcome::DegenerateChallenge => (RoundZeroOutcome::DegenerateChallenge, None),
                    ZkOutcome::ImpliedChallenge(c) => (RoundZeroOutcome::ImpliedChallenge, Some(c)),
                };
                Self {
                    mode: "zk",
                    u0: fr_to_hex(u0),
                    u1: fr_to_hex(u1),
                    sum: fr_to_hex(sum),
                    libra_sum: Some(fr_to_hex(libra_sum)),
                    outcome,
                    implied_challenge: implied.map(fr_to_hex),
                    implied_challenge_halves: implied.map(|c| {
                        let (lo, hi) = split_challenge(c);
                        (fr_to_hex(&lo), fr_to_hex(&hi))
                    }),
                    direct_match,
                }
            }
            RoundZeroReport::NonZk { u0, u1, sum, holds } => Self {
                mode: "non_zk",
                u0: fr_to_hex(u0),
                u1: fr_to_hex(u1),
                sum: fr_to_hex(sum),
                libra_sum: None,
                outcome: if *holds {
                    RoundZeroOutcome::Holds
                } else {
                    RoundZeroOutcome::Mismatch
                },
                implied_challenge: None,
                implied_challenge_halves: None,
                direct_match,
            },
        }
    }
}

impl fmt::Display for RoundZeroOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundZeroOutcome::DegenerateChallenge => "degenerate_challenge",
            RoundZeroOutcome::ImpliedChallenge => "implied_challenge",
            RoundZeroOutcome::ZeroLibraSum => "zero_libra_sum",
            RoundZeroOutcome::Holds => "holds",
            RoundZeroOutcome::Mismatch => "mismatch",
        };
        f.write_str(name)
    }
}

impl fmt::Display for RoundZeroSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  u[0][0] = {}", self.u0)?;
        writeln!(f, "  u[0][1] = {}", self.u1)?;
        writeln!(f, "  u[0][0] + u[0][1] = {}", self.sum)?;
        if let Some(libra_sum) = &self.libra_sum {
            writeln!(f, "  libra_sum = {}", libra_sum)?;
        }
        match self.outcome {
            RoundZeroOutcome::DegenerateChallenge => {
                write!(f, "  Sum equals libra_sum directly (libra challenge = 1)")
            }
            RoundZeroOutcome::ZeroLibraSum => {
                write!(f, "  libra_sum is zero, no libra challenge explains the sum")
            }
            RoundZeroOutcome::Holds => write!(f, "  Sum equals 0 (non-ZK target)"),
            RoundZeroOutcome::Mismatch => write!(f, "  Sum is non-zero for a non-ZK proof"),
            RoundZeroOutcome::ImpliedChallenge => {
                write!(f, "  Implied libra challenge = sum / libra_sum")?;
                if let Some(c) = &self.implied_challenge {
                    write!(f, "\n                          = {}", c)?;
                }
                if let Some((lo, hi)) = &self.implied_challenge_halves {
                    write!(f, "\n  lo = {}\n  hi = {}", lo, hi)?;
                }
                Ok(())
            }
        }
    }
}

/// Full `check` result over an artifact directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectionReport {
    pub artifact_dir: String,
    pub vk: VkReport,
    pub proof: ProofReport,
    pub public_inputs: Option<PublicInputsReport>,
    pub round_zero: RoundZeroSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use honk_core::field::fr_from_u64;
    use honk_core::VK_SIZE;

    fn vk() -> VerificationKey {
        let mut bytes = vec![0u8; VK_SIZE];
        bytes[31] = 6;
        bytes[63] = 6;
        bytes[95] = 1;
        VerificationKey::from_bytes(&bytes).unwrap()
    }

    fn zk_proof(u0: u8, u1: u8, libra_sum: u8) -> Proof {
        let mut bytes = vec![0u8; 162 * 32];
        bytes[34 * 32 + 31] = libra_sum;
        bytes[35 * 32 + 31] = u0;
        bytes[36 * 32 + 31] = u1;
        Proof::from_bytes(&bytes, 6, true).unwrap()
    }

    #[test]
    fn test_vk_report() {
        let report = VkReport::new(&vk());
        assert_eq!(report.circuit_size, Some(64));
        assert_eq!(report.num_public_inputs, Some(1));
        assert_eq!(report.commitments.len(), 28);
        assert_eq!(report.commitments[0].label, "Q_m");
        assert_eq!(report.commitments[0].byte_offset, 96);
        assert_eq!(report.commitments[27].byte_offset, 1824);
        assert!(report.vk_hash.starts_with("0x"));
        assert_eq!(report.vk_hash.len(), 66);
        assert!(report.to_string().contains("circuit size = 64"));
    }

    #[test]
    fn test_layout_report_sections() {
        let layout = ProofLayout::new(6, true).unwrap();
        let report = LayoutReport::new(&layout);
        assert_eq!(report.element_count, 162);
        assert_eq!(report.byte_len, 5184);
        assert_eq!(report.sections.len(), 16);
        assert_eq!(report.sections[3].name, "libra_sum");
        assert_eq!(report.sections[3].offset, 34);
        assert_eq!(report.sections[3].byte_offset, 34 * 32);

        let non_zk = LayoutReport::new(&ProofLayout::new(6, false).unwrap());
        assert!(!non_zk.to_string().contains("libra_sum"));
    }

    #[test]
    fn test_proof_report() {
        let report = ProofReport::new(&zk_proof(2, 3, 5), false);
        assert_eq!(report.layout.element_count, 162);
        assert_eq!(report.pairing_point_object.len(), 16);
        assert_eq!(report.wire_commitments.len(), 8);
        assert_eq!(report.wire_commitments[7].label, "z_perm");
        assert_eq!(report.wire_commitments[0].byte_offset, 16 * 32);
        assert_eq!(report.first_univariate.len(), 9);
        assert_eq!(report.sumcheck_evaluations.len(), 41);
        assert_eq!(report.gemini_fold_commitments, 5);
        assert_eq!(report.shplonk_q.byte_offset, 156 * 32);
        assert_eq!(report.kzg_w.byte_offset, 158 * 32);
        assert!(report.libra_sum.as_deref().unwrap().ends_with("05"));
    }

    #[test]
    fn test_round_zero_summary_degenerate() {
        let check = honk_core::sumcheck_round_zero_check(&zk_proof(2, 3, 5)).unwrap();
        let summary = RoundZeroSummary::from(&check);
        assert_eq!(summary.mode, "zk");
        assert_eq!(summary.outcome, RoundZeroOutcome::DegenerateChallenge);
        assert!(summary.direct_match);
        assert_eq!(summary.implied_challenge, None);
    }

    #[test]
    fn test_round_zero_summary_implied() {
        let check = honk_core::sumcheck_round_zero_check(&zk_proof(4, 2, 3)).unwrap();
        let summary = RoundZeroSummary::from(&check);
        assert_eq!(summary.outcome, RoundZeroOutcome::ImpliedChallenge);
        assert_eq!(summary.implied_challenge, Some(fr_to_hex(&fr_from_u64(2))));
        let (lo, hi) = summary.implied_challenge_halves.unwrap();
        assert_eq!(lo, fr_to_hex(&fr_from_u64(2)));
        assert_eq!(hi, fr_to_hex(&fr_from_u64(0)));
        assert!(!summary.direct_match);
    }

    #[test]
    fn test_round_zero_summary_zero_libra_sum() {
        let proof = zk_proof(2, 3, 0);
        assert!(matches!(
            honk_core::sumcheck_round_zero_check(&proof),
            Err(CheckError::Arithmetic(FieldError::DivisionByZero))
        ));

        let summary = RoundZeroSummary::for_proof(&proof).unwrap();
        assert_eq!(summary.mode, "zk");
        assert_eq!(summary.outcome, RoundZeroOutcome::ZeroLibraSum);
        assert_eq!(summary.sum, fr_to_hex(&fr_from_u64(5)));
        assert_eq!(summary.libra_sum, Some(fr_to_hex(&SCALAR_ZERO)));
        assert_eq!(summary.implied_challenge, None);
        assert!(!summary.direct_match);
        assert!(summary.to_string().contains("libra_sum is zero"));
    }

    #[test]
    fn test_round_zero_summary_non_zk() {
        let summary = RoundZeroSummary::for_proof(
            &Proof::from_bytes(&vec![0u8; 141 * 32], 6, false).unwrap(),
        )
        .unwrap();
        assert_eq!(summary.mode, "non_zk");
        assert_eq!(summary.outcome, RoundZeroOutcome::Holds);
        assert_eq!(summary.libra_sum, None);
        assert_eq!(summary.outcome.to_string(), "holds");
    }

    #[test]
    fn test_public_inputs_report() {
        let mut bytes = [0u8; 32];
        bytes[31] = 9;
        let inputs = PublicInputs::from_bytes(&bytes).unwrap();
        let vk = vk();
        let report = PublicInputsReport::new(&inputs, Some(&vk));
        assert_eq!(report.count, 1);
        assert_eq!(report.expected, Some(1));
        assert_eq!(report.matches_vk(), Some(true));
        assert_eq!(report.values[0].value.as_deref(), Some("9"));
        assert_eq!(report.values[0].hex, format!("0x{}", hex::encode(bytes)));
        assert_eq!(report.values[0].hex, fr_to_hex(&bytes));
        assert!(report.to_string().contains("[0] = 9"));

        let without_vk = PublicInputsReport::new(&inputs, None);
        assert_eq!(without_vk.matches_vk(), None);
    }

    #[test]
    fn test_reports_serialize_to_json() {
        let report = ProofReport::new(&zk_proof(2, 3, 5), true);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["detected"], true);
        assert_eq!(json["layout"]["log_n"], 6);
        assert_eq!(json["wire_commitments"][0]["label"], "W₁");
        assert_eq!(json["wire_commitments"][7]["label"], wire_commitment_label(7));

        let summary = RoundZeroSummary::for_proof(&zk_proof(4, 2, 3)).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["outcome"], "implied_challenge");
        assert_eq!(json["mode"], "zk");
    }
}
