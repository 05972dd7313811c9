//! Public inputs command - decode a public inputs file

use super::{emit, read_artifact};
use crate::config::Config;
use crate::CommonArgs;
use anyhow::Result;
use clap::Args;
use honk_core::{PublicInputs, VerificationKey};
use honk_inspect::PublicInputsReport;
use std::path::PathBuf;

#[derive(Args)]
pub struct PublicInputsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Path to the public inputs file
    path: PathBuf,

    /// Verification key to check the input count against
    #[arg(long)]
    vk: Option<PathBuf>,
}

pub fn run(config: &Config, args: PublicInputsArgs) -> Result<()> {
    let bytes = read_artifact(&args.path, "public inputs")?;

    let vk = match &args.vk {
        Some(path) => Some(VerificationKey::from_bytes(&read_artifact(path, "VK")?)?),
        None => None,
    };

    let inputs = match &vk {
        Some(vk) => PublicInputs::from_bytes_for_key(&bytes, vk)?,
        None => PublicInputs::from_bytes(&bytes)?,
    };

    emit(
        config,
        "PUBLIC INPUTS",
        &PublicInputsReport::new(&inputs, vk.as_ref()),
    )
}
