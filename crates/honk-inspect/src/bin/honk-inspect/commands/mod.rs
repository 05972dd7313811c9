pub mod check;
pub mod layout;
pub mod proof;
pub mod public_inputs;
pub mod vk;

use crate::config::Config;
use anyhow::{Context, Result};
use console::style;
use honk_core::{detect_parameters_in, Proof, ProofError};
use serde::Serialize;
use std::{fmt, fs, ops::Range, path::Path};

/// Read an artifact file
pub fn read_artifact(path: &Path, what: &str) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read {} file: {:?}", what, path))
}

/// Print a report as JSON, or as titled human text unless quiet
pub fn emit<T: Serialize + fmt::Display>(config: &Config, title: &str, report: &T) -> Result<()> {
    if config.json_output {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else if !config.quiet {
        print_title(title);
        println!("{}", report);
    }
    Ok(())
}

pub fn print_title(title: &str) {
    println!();
    println!("{}", style(title).cyan().bold());
    println!("{}", style("=".repeat(60)).dim());
}

/// Decode a proof strictly, retrying with detected parameters on a size mismatch.
///
/// Returns the proof and whether its parameters were detected.
pub fn decode_proof(
    bytes: &[u8],
    log_n: u32,
    is_zk: bool,
    detect_range: &Range<u32>,
) -> Result<(Proof, bool)> {
    match Proof::from_bytes(bytes, log_n, is_zk) {
        Ok(proof) => Ok((proof, false)),
        Err(ProofError::SizeMismatch {
            expected,
            actual,
            byte_len,
        }) => {
            log::warn!(
                "size mismatch for log_n={} is_zk={}: expected {} Fr elements, got {}",
                log_n,
                is_zk,
                expected,
                actual
            );
            let params = detect_parameters_in(byte_len, detect_range.clone()).with_context(|| {
                format!(
                    "No (log_n, is_zk) with log_n in {:?} matches a {}-byte proof",
                    detect_range, byte_len
                )
            })?;
            log::warn!(
                "detected config: log_n={} is_zk={}",
                params.log_n(),
                params.is_zk()
            );
            let proof = Proof::from_bytes(bytes, params.log_n(), params.is_zk())?;
            Ok((proof, true))
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_proof_strict() {
        let bytes = vec![0u8; 162 * 32];
        let (proof, detected) = decode_proof(&bytes, 6, true, &(4..30)).unwrap();
        assert!(!detected);
        assert_eq!(proof.log_n(), 6);
    }

    #[test]
    fn test_decode_proof_falls_back_to_detection() {
        let bytes = vec![0u8; 294 * 32];
        let (proof, detected) = decode_proof(&bytes, 6, true, &(4..30)).unwrap();
        assert!(detected);
        assert_eq!((proof.log_n(), proof.is_zk()), (17, true));
    }

    #[test]
    fn test_decode_proof_detection_respects_range() {
        let bytes = vec![0u8; 294 * 32];
        assert!(decode_proof(&bytes, 6, true, &(4..10)).is_err());
    }

    #[test]
    fn test_decode_proof_misaligned_is_fatal() {
        assert!(decode_proof(&[0u8; 33], 6, true, &(4..30)).is_err());
    }
}
