//! VK command - decode a verification key

use super::{emit, read_artifact};
use crate::config::Config;
use crate::CommonArgs;
use anyhow::Result;
use clap::Args;
use console::style;
use honk_core::VerificationKey;
use honk_inspect::VkReport;
use std::path::PathBuf;

#[derive(Args)]
pub struct VkArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Path to the verification key file
    path: PathBuf,
}

pub fn run(config: &Config, args: VkArgs) -> Result<()> {
    let bytes = read_artifact(&args.path, "VK")?;

    if config.chatty() {
        println!(
            "{} Decoding VK {:?} ({} bytes)...",
            style("→").cyan().bold(),
            args.path,
            bytes.len()
        );
    }

    let vk = VerificationKey::from_bytes(&bytes)?;
    emit(config, "VERIFICATION KEY", &VkReport::new(&vk))
}
