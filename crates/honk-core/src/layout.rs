//! Proof layout calculation
//!
//! bb writes proofs as a flat sequence of 32-byte Fr elements. The number of
//! elements in each section depends on the circuit size (`log_n`) and on
//! whether the proof was produced in ZK mode:
//!
//! | section                  | ZK                 | non-ZK           |
//! |--------------------------|--------------------|------------------|
//! | pairing point object     | 16                 | 16               |
//! | wire commitments         | 8 × 2              | 8 × 2            |
//! | libra concatenation      | 2                  | -                |
//! | libra sum                | 1                  | -                |
//! | sumcheck univariates     | log_n × 9          | log_n × 8        |
//! | sumcheck evaluations     | 41                 | 40               |
//! | libra evaluation         | 1                  | -                |
//! | libra grand sum          | 2                  | -                |
//! | libra quotient           | 2                  | -                |
//! | gemini masking poly      | 2                  | -                |
//! | gemini masking eval      | 1                  | -                |
//! | gemini fold commitments  | (log_n - 1) × 2    | (log_n - 1) × 2  |
//! | gemini evaluations       | log_n              | log_n            |
//! | small IPA                | 2                  | -                |
//! | shplonk Q + KZG W        | 4                  | 4                |
//! | trailing protocol data   | 2                  | 1                |
//!
//! In total: `12 · log_n + 90` elements for ZK, `11 · log_n + 75` otherwise.

use core::ops::Range;

use crate::constants::*;
use crate::errors::LayoutError;
use crate::types::{FRS_PER_COMMITMENT, FR_SIZE};

/// A named, contiguous run of Fr elements inside a proof
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    PairingPointObject,
    WireCommitments,
    LibraConcatenation,
    LibraSum,
    SumcheckUnivariates,
    SumcheckEvaluations,
    LibraEvaluation,
    LibraGrandSum,
    LibraQuotient,
    GeminiMaskingPoly,
    GeminiMaskingEval,
    GeminiFoldCommitments,
    GeminiEvaluations,
    SmallIpa,
    ShplonkKzg,
    TrailingData,
}

/// Number of section kinds
pub const NUM_SECTIONS: usize = 16;

impl SectionKind {
    /// All sections in proof order
    pub const ALL: [SectionKind; NUM_SECTIONS] = [
        SectionKind::PairingPointObject,
        SectionKind::WireCommitments,
        SectionKind::LibraConcatenation,
        SectionKind::LibraSum,
        SectionKind::SumcheckUnivariates,
        SectionKind::SumcheckEvaluations,
        SectionKind::LibraEvaluation,
        SectionKind::LibraGrandSum,
        SectionKind::LibraQuotient,
        SectionKind::GeminiMaskingPoly,
        SectionKind::GeminiMaskingEval,
        SectionKind::GeminiFoldCommitments,
        SectionKind::GeminiEvaluations,
        SectionKind::SmallIpa,
        SectionKind::ShplonkKzg,
        SectionKind::TrailingData,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SectionKind::PairingPointObject => "pairing_point_object",
            SectionKind::WireCommitments => "wire_commitments",
            SectionKind::LibraConcatenation => "libra_concatenation",
            SectionKind::LibraSum => "libra_sum",
            SectionKind::SumcheckUnivariates => "sumcheck_univariates",
            SectionKind::SumcheckEvaluations => "sumcheck_evaluations",
            SectionKind::LibraEvaluation => "libra_evaluation",
            SectionKind::LibraGrandSum => "libra_grand_sum",
            SectionKind::LibraQuotient => "libra_quotient",
            SectionKind::GeminiMaskingPoly => "gemini_masking_poly",
            SectionKind::GeminiMaskingEval => "gemini_masking_eval",
            SectionKind::GeminiFoldCommitments => "gemini_fold_commitments",
            SectionKind::GeminiEvaluations => "gemini_evaluations",
            SectionKind::SmallIpa => "small_ipa",
            SectionKind::ShplonkKzg => "shplonk_q_kzg_w",
            SectionKind::TrailingData => "trailing_data",
        }
    }

    /// Whether the section only exists in ZK proofs
    pub fn is_zk_only(self) -> bool {
        matches!(
            self,
            SectionKind::LibraConcatenation
                | SectionKind::LibraSum
                | SectionKind::LibraEvaluation
                | SectionKind::LibraGrandSum
                | SectionKind::LibraQuotient
                | SectionKind::GeminiMaskingPoly
                | SectionKind::GeminiMaskingEval
                | SectionKind::SmallIpa
        )
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Element count of this section. `log_n` must already be validated.
    fn len(self, log_n: u64, is_zk: bool) -> u64 {
        if self.is_zk_only() && !is_zk {
            return 0;
        }
        let univariate_len = univariate_length(is_zk) as u64;
        let n = match self {
            SectionKind::PairingPointObject => NUM_PAIRING_POINT_FRS,
            SectionKind::WireCommitments => NUM_WITNESS_COMMS * FRS_PER_COMMITMENT,
            SectionKind::LibraConcatenation => NUM_LIBRA_CONCAT_FRS,
            SectionKind::LibraSum => NUM_LIBRA_SUM_FRS,
            SectionKind::SumcheckUnivariates => return log_n * univariate_len,
            SectionKind::SumcheckEvaluations => num_sumcheck_evaluations(is_zk),
            SectionKind::LibraEvaluation => NUM_LIBRA_EVALUATION_FRS,
            SectionKind::LibraGrandSum => NUM_LIBRA_GRAND_SUM_FRS,
            SectionKind::LibraQuotient => NUM_LIBRA_QUOTIENT_FRS,
            SectionKind::GeminiMaskingPoly => NUM_GEMINI_MASKING_POLY_FRS,
            SectionKind::GeminiMaskingEval => NUM_GEMINI_MASKING_EVAL_FRS,
            SectionKind::GeminiFoldCommitments => {
                return log_n.saturating_sub(1) * FRS_PER_COMMITMENT as u64
            }
            SectionKind::GeminiEvaluations => return log_n,
            SectionKind::SmallIpa => NUM_SMALL_IPA_FRS,
            SectionKind::ShplonkKzg => NUM_SHPLONK_KZG_FRS,
            SectionKind::TrailingData => {
                if is_zk {
                    NUM_ZK_TRAILING_FRS
                } else {
                    NUM_TRAILING_FRS
                }
            }
        };
        n as u64
    }
}

/// Coefficients per sumcheck round univariate
pub fn univariate_length(is_zk: bool) -> usize {
    if is_zk {
        ZK_BATCHED_RELATION_PARTIAL_LENGTH
    } else {
        BATCHED_RELATION_PARTIAL_LENGTH
    }
}

/// Number of sumcheck evaluations
pub fn num_sumcheck_evaluations(is_zk: bool) -> usize {
    if is_zk {
        NUM_ZK_SUMCHECK_EVALUATIONS
    } else {
        NUM_SUMCHECK_EVALUATIONS
    }
}

/// A located section: element offset and element count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub offset: usize,
    pub len: usize,
}

impl Section {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Element index range
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }

    /// Byte range inside the raw proof
    pub fn byte_range(&self) -> Range<usize> {
        self.offset * FR_SIZE..(self.offset + self.len) * FR_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Validated `(log_n, is_zk)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProofParams {
    log_n: u32,
    is_zk: bool,
}

impl ProofParams {
    pub fn new(log_n: u32, is_zk: bool) -> Result<Self, LayoutError> {
        expected_element_count(log_n, is_zk)?;
        Ok(Self { log_n, is_zk })
    }

    pub fn log_n(&self) -> u32 {
        self.log_n
    }

    pub fn is_zk(&self) -> bool {
        self.is_zk
    }

    /// Element count for these parameters
    pub fn element_count(&self) -> usize {
        // Validated in `new`, so the sum cannot overflow u32.
        raw_element_count(self.log_n, self.is_zk) as usize
    }

    /// Proof size in bytes for these parameters
    pub fn byte_len(&self) -> usize {
        self.element_count() * FR_SIZE
    }
}

fn validate_log_n(log_n: u32) -> Result<(), LayoutError> {
    if log_n < MIN_LOG_N {
        return Err(LayoutError::InvalidParameter {
            log_n,
            reason: "gemini folding needs log_n >= 2",
        });
    }
    Ok(())
}

/// Section-by-section sum, computed in u64 so it cannot overflow for any u32 log_n.
fn raw_element_count(log_n: u32, is_zk: bool) -> u64 {
    SectionKind::ALL
        .iter()
        .map(|kind| kind.len(log_n as u64, is_zk))
        .sum()
}

/// Number of Fr elements in a proof with the given parameters.
///
/// Precondition: `log_n >= 2`. Smaller values (and counts that would not
/// fit in a u32) are rejected with [`LayoutError::InvalidParameter`].
pub fn expected_element_count(log_n: u32, is_zk: bool) -> Result<u32, LayoutError> {
    validate_log_n(log_n)?;
    u32::try_from(raw_element_count(log_n, is_zk)).map_err(|_| LayoutError::InvalidParameter {
        log_n,
        reason: "element count does not fit in u32",
    })
}

/// Offsets of every section for one `(log_n, is_zk)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofLayout {
    params: ProofParams,
    sections: [Section; NUM_SECTIONS],
}

impl ProofLayout {
    pub fn new(log_n: u32, is_zk: bool) -> Result<Self, LayoutError> {
        Ok(Self::for_params(ProofParams::new(log_n, is_zk)?))
    }

    pub fn for_params(params: ProofParams) -> Self {
        let mut offset = 0usize;
        let sections = SectionKind::ALL.map(|kind| {
            let len = kind.len(params.log_n as u64, params.is_zk) as usize;
            let section = Section { kind, offset, len };
            offset += len;
            section
        });

        log::trace!(
            "layout log_n={} is_zk={}: {} elements",
            params.log_n,
            params.is_zk,
            offset
        );

        Self { params, sections }
    }

    pub fn params(&self) -> ProofParams {
        self.params
    }

    pub fn section(&self, kind: SectionKind) -> Section {
        self.sections[kind.index()]
    }

    /// Sections in proof order (ZK-only sections have `len == 0` in non-ZK layouts)
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Total element count
    pub fn total(&self) -> usize {
        let last = self.sections[NUM_SECTIONS - 1];
        last.offset + last.len
    }

    pub fn univariate_length(&self) -> usize {
        univariate_length(self.params.is_zk)
    }
}

/// Guess `(log_n, is_zk)` from a raw proof length, using the default range.
///
/// Each mode keeps its smallest matching `log_n`. When both modes match the
/// same size, the non-ZK candidate wins over the ZK one. Only meant as a
/// recovery step after a size mismatch.
pub fn detect_parameters(byte_len: usize) -> Option<ProofParams> {
    detect_parameters_in(byte_len, DETECT_MIN_LOG_N..DETECT_MAX_LOG_N)
}

/// Same as [`detect_parameters`] over a caller-supplied `log_n` range.
pub fn detect_parameters_in(byte_len: usize, log_n_range: Range<u32>) -> Option<ProofParams> {
    if byte_len % FR_SIZE != 0 {
        return None;
    }
    let start = log_n_range.start.max(MIN_LOG_N);
    let search = |is_zk: bool| {
        // Sizes grow with log_n, so stop once they pass byte_len
        (start..log_n_range.end)
            .map_while(|log_n| ProofParams::new(log_n, is_zk).ok())
            .take_while(|params| params.byte_len() <= byte_len)
            .find(|params| params.byte_len() == byte_len)
    };
    let zk = search(true);
    let non_zk = search(false);
    if let (Some(zk), Some(non_zk)) = (zk, non_zk) {
        log::debug!(
            "{} bytes fits both log_n={} (zk) and log_n={} (non-zk); using non-zk",
            byte_len,
            zk.log_n(),
            non_zk.log_n()
        );
    }
    non_zk.or(zk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_count_log_n_17_zk() {
        // 16 + 16 + 3 + 153 + 41 + 8 + 32 + 17 + 2 + 4 + 2
        assert_eq!(expected_element_count(17, true).unwrap(), 294);
    }

    #[test]
    fn test_count_simple_square() {
        // simple_square: log_n = 6, ZK
        assert_eq!(expected_element_count(6, true).unwrap(), 162);
        assert_eq!(expected_element_count(6, false).unwrap(), 141);
    }

    #[test]
    fn test_closed_form() {
        for log_n in MIN_LOG_N..64 {
            assert_eq!(expected_element_count(log_n, true).unwrap(), 12 * log_n + 90);
            assert_eq!(expected_element_count(log_n, false).unwrap(), 11 * log_n + 75);
        }
    }

    #[test]
    fn test_small_log_n_rejected() {
        for log_n in 0..MIN_LOG_N {
            for is_zk in [true, false] {
                assert!(matches!(
                    expected_element_count(log_n, is_zk),
                    Err(LayoutError::InvalidParameter { .. })
                ));
                assert!(ProofLayout::new(log_n, is_zk).is_err());
            }
        }
        assert_eq!(expected_element_count(MIN_LOG_N, false).unwrap(), 97);
    }

    #[test]
    fn test_huge_log_n_rejected() {
        assert!(matches!(
            expected_element_count(u32::MAX, true),
            Err(LayoutError::InvalidParameter { log_n: u32::MAX, .. })
        ));
    }

    #[test]
    fn test_sections_are_contiguous() {
        for is_zk in [true, false] {
            let layout = ProofLayout::new(10, is_zk).unwrap();
            let mut next = 0;
            for section in layout.sections() {
                assert_eq!(section.offset, next, "{}", section.name());
                next = section.range().end;
            }
            assert_eq!(
                layout.total(),
                expected_element_count(10, is_zk).unwrap() as usize
            );
        }
    }

    #[test]
    fn test_zk_only_sections_empty_without_zk() {
        let layout = ProofLayout::new(8, false).unwrap();
        for kind in SectionKind::ALL {
            assert_eq!(layout.section(kind).is_empty(), kind.is_zk_only());
        }
    }

    #[test]
    fn test_section_offsets_zk() {
        let layout = ProofLayout::new(6, true).unwrap();
        assert_eq!(layout.section(SectionKind::LibraSum).offset, 34);
        assert_eq!(layout.section(SectionKind::SumcheckUnivariates).offset, 35);
        assert_eq!(layout.section(SectionKind::SumcheckEvaluations).offset, 35 + 54);
        let post: usize = [
            SectionKind::LibraEvaluation,
            SectionKind::LibraGrandSum,
            SectionKind::LibraQuotient,
            SectionKind::GeminiMaskingPoly,
            SectionKind::GeminiMaskingEval,
        ]
        .iter()
        .map(|&k| layout.section(k).len)
        .sum();
        assert_eq!(post, NUM_LIBRA_POST_SUMCHECK_FRS);
        assert_eq!(layout.section(SectionKind::TrailingData).range().end, 162);
    }

    #[test]
    fn test_byte_range() {
        let layout = ProofLayout::new(4, false).unwrap();
        let wires = layout.section(SectionKind::WireCommitments);
        assert_eq!(wires.byte_range(), 512..1024);
    }

    #[test]
    fn test_detect_parameters() {
        let params = detect_parameters(294 * FR_SIZE).unwrap();
        assert_eq!(params, ProofParams { log_n: 17, is_zk: true });

        let params = detect_parameters(141 * FR_SIZE).unwrap();
        assert_eq!(params, ProofParams { log_n: 6, is_zk: false });

        assert_eq!(detect_parameters(9407), None);
        assert_eq!(detect_parameters(32), None);
    }

    #[test]
    fn test_detect_prefers_non_zk_on_collision() {
        // 12·7 + 90 == 11·9 + 75 == 174
        assert_eq!(
            expected_element_count(7, true).unwrap(),
            expected_element_count(9, false).unwrap()
        );
        let params = detect_parameters(174 * FR_SIZE).unwrap();
        assert_eq!(params, ProofParams { log_n: 9, is_zk: false });

        // 12·18 + 90 == 11·21 + 75 == 306
        let params = detect_parameters(306 * FR_SIZE).unwrap();
        assert_eq!(params, ProofParams { log_n: 21, is_zk: false });

        // Without a non-zk candidate in range the zk one is kept
        let params = detect_parameters_in(174 * FR_SIZE, 4..9).unwrap();
        assert_eq!(params, ProofParams { log_n: 7, is_zk: true });
    }

    #[test]
    fn test_detect_respects_range() {
        // log_n = 3 lies below the default search range
        let len = ProofParams::new(3, true).unwrap().byte_len();
        assert_eq!(detect_parameters(len), None);
        assert_eq!(
            detect_parameters_in(len, 0..8),
            Some(ProofParams { log_n: 3, is_zk: true })
        );
    }

    proptest! {
        #[test]
        fn prop_count_strictly_increasing(log_n in MIN_LOG_N..1_000_000u32) {
            for is_zk in [true, false] {
                let a = expected_element_count(log_n, is_zk).unwrap();
                let b = expected_element_count(log_n + 1, is_zk).unwrap();
                prop_assert!(b > a);
            }
        }

        #[test]
        fn prop_zk_larger_than_non_zk(log_n in MIN_LOG_N..1_000_000u32) {
            prop_assert!(
                expected_element_count(log_n, true).unwrap()
                    > expected_element_count(log_n, false).unwrap()
            );
        }

        #[test]
        fn prop_detected_parameters_reproduce_size(
            log_n in DETECT_MIN_LOG_N..DETECT_MAX_LOG_N,
            is_zk in any::<bool>(),
        ) {
            let len = ProofParams::new(log_n, is_zk).unwrap().byte_len();
            let detected = detect_parameters(len).unwrap();
            prop_assert_eq!(detected.byte_len(), len);
        }
    }
}
