//! Layout command - print the proof section table

use super::emit;
use crate::config::Config;
use crate::{CommonArgs, ZkArgs};
use anyhow::Result;
use clap::Args;
use honk_core::ProofLayout;
use honk_inspect::LayoutReport;

#[derive(Args)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// log2 of the circuit size
    #[arg(long)]
    log_n: u32,

    #[command(flatten)]
    zk: ZkArgs,
}

pub fn run(config: &Config, args: LayoutArgs) -> Result<()> {
    let is_zk = config.zk(args.zk.zk, args.zk.no_zk);
    let layout = ProofLayout::new(args.log_n, is_zk)?;
    emit(config, "PROOF LAYOUT", &LayoutReport::new(&layout))
}
