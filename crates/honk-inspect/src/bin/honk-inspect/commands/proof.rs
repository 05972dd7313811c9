//! Proof command - decode a proof and run the round-zero check

use super::{decode_proof, emit, read_artifact};
use crate::config::Config;
use crate::{CommonArgs, ZkArgs};
use anyhow::Result;
use clap::Args;
use console::style;
use honk_inspect::{ProofReport, RoundZeroSummary};
use std::path::PathBuf;

#[derive(Args)]
pub struct ProofArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Path to the proof file
    path: PathBuf,

    /// log2 of the circuit size (see the VK header)
    #[arg(long)]
    log_n: u32,

    #[command(flatten)]
    zk: ZkArgs,
}

pub fn run(config: &Config, args: ProofArgs) -> Result<()> {
    let bytes = read_artifact(&args.path, "proof")?;
    let is_zk = config.zk(args.zk.zk, args.zk.no_zk);

    if config.chatty() {
        println!(
            "{} Decoding proof {:?} ({} bytes, log_n={}, is_zk={})...",
            style("→").cyan().bold(),
            args.path,
            bytes.len(),
            args.log_n,
            is_zk
        );
    }

    let (proof, detected) = decode_proof(&bytes, args.log_n, is_zk, &config.detect_range)?;
    emit(config, "PROOF", &ProofReport::new(&proof, detected))?;

    emit(
        config,
        "SUMCHECK ROUND 0",
        &RoundZeroSummary::for_proof(&proof)?,
    )
}
