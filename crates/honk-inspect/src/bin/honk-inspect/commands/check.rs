//! Check command - inspect vk, proof and public inputs from an artifact directory

use super::{decode_proof, emit, print_title, read_artifact};
use crate::config::Config;
use crate::{CommonArgs, ZkArgs};
use anyhow::{Context, Result};
use clap::Args;
use console::style;
use honk_core::{PublicInputs, VerificationKey};
use honk_inspect::{
    InspectionReport, ProofReport, PublicInputsReport, RoundZeroOutcome, RoundZeroSummary,
    VkReport,
};
use std::ops::Range;
use std::path::{Path, PathBuf};

const VK_FILE: &str = "vk";
const PROOF_FILE: &str = "proof";
const PUBLIC_INPUTS_FILE: &str = "public_inputs";

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Artifact directory (bb output, or the `target` dir above it)
    #[arg(long)]
    dir: Option<PathBuf>,

    #[command(flatten)]
    zk: ZkArgs,
}

/// Directories searched for bb output, most specific first
fn candidate_dirs(root: &Path) -> [PathBuf; 3] {
    [
        root.join("keccak").join("proof"),
        root.join("keccak"),
        root.to_path_buf(),
    ]
}

/// First candidate directory holding a `vk` or `proof` file
fn find_artifact_dir(root: &Path) -> Option<PathBuf> {
    candidate_dirs(root)
        .into_iter()
        .find(|d| d.join(VK_FILE).exists() || d.join(PROOF_FILE).exists())
}

/// Decode every artifact in `dir` into one report.
///
/// The proof is shaped by the VK header, falling back to size detection.
/// A missing public inputs file or a count mismatch only logs.
fn inspect(dir: &Path, is_zk: bool, detect_range: &Range<u32>) -> Result<InspectionReport> {
    let vk = VerificationKey::from_bytes(&read_artifact(&dir.join(VK_FILE), "VK")?)?;
    let log_n = vk
        .log2_circuit_size_u32()
        .context("VK log2_circuit_size does not fit in 32 bits")?;

    let proof_bytes = read_artifact(&dir.join(PROOF_FILE), "proof")?;
    let (proof, detected) = decode_proof(&proof_bytes, log_n, is_zk, detect_range)?;

    let pi_path = dir.join(PUBLIC_INPUTS_FILE);
    let public_inputs = if pi_path.exists() {
        let inputs = PublicInputs::from_bytes(&read_artifact(&pi_path, "public inputs")?)?;
        let report = PublicInputsReport::new(&inputs, Some(&vk));
        if report.matches_vk() == Some(false) {
            log::warn!(
                "public input count {} does not match VK num_public_inputs {:?}",
                report.count,
                report.expected
            );
        }
        Some(report)
    } else {
        log::info!("no public inputs file at {:?}", pi_path);
        None
    };

    Ok(InspectionReport {
        artifact_dir: dir.display().to_string(),
        vk: VkReport::new(&vk),
        proof: ProofReport::new(&proof, detected),
        public_inputs,
        round_zero: RoundZeroSummary::for_proof(&proof)?,
    })
}

pub fn run(config: &Config, args: CheckArgs) -> Result<()> {
    let root = config.artifact_dir(args.dir.as_deref());
    let dir = find_artifact_dir(&root).with_context(|| {
        let tried: Vec<String> = candidate_dirs(&root)
            .iter()
            .map(|d| format!("{:?}", d))
            .collect();
        format!(
            "No vk or proof found. Tried: {}. Generate artifacts with `bb prove ... --oracle_hash keccak --write_vk`",
            tried.join(", ")
        )
    })?;
    let is_zk = config.zk(args.zk.zk, args.zk.no_zk);

    if config.chatty() {
        println!(
            "{} Using artifacts from {:?}",
            style("→").cyan().bold(),
            dir
        );
    }

    let report = inspect(&dir, is_zk, &config.detect_range)?;

    if config.json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if config.quiet {
        println!(
            "log_n={} is_zk={} round_zero={}",
            report.proof.layout.log_n,
            report.proof.layout.is_zk,
            report.round_zero.outcome
        );
        return Ok(());
    }

    emit(config, "VERIFICATION KEY", &report.vk)?;
    emit(config, "PROOF", &report.proof)?;
    if let Some(pi) = &report.public_inputs {
        emit(config, "PUBLIC INPUTS", pi)?;
    }
    emit(config, "SUMCHECK ROUND 0", &report.round_zero)?;

    print_title("INSPECTION COMPLETE");
    match report.round_zero.outcome {
        RoundZeroOutcome::DegenerateChallenge | RoundZeroOutcome::Holds => {
            println!("{} Round-zero relation holds", style("✓").green().bold());
        }
        RoundZeroOutcome::ImpliedChallenge => println!(
            "{} Round-zero relation needs a hidden libra challenge",
            style("!").yellow().bold()
        ),
        RoundZeroOutcome::ZeroLibraSum | RoundZeroOutcome::Mismatch => println!(
            "{} Round-zero relation does not hold ({})",
            style("✗").red().bold(),
            report.round_zero.outcome
        ),
    }

    Ok(())
}
