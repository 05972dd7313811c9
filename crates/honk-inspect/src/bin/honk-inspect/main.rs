//! honk-inspect CLI - Inspect Barretenberg UltraHonk artifacts
//!
//! This CLI decodes verification keys, proofs and public inputs written by
//! `bb` (Keccak oracle), prints their layout, and runs the sumcheck
//! round-zero check.

mod commands;
mod config;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use commands::{check, layout, proof, public_inputs, vk};
use console::style;
use serde::Deserialize;
use std::path::PathBuf;

/// CLI for inspecting Noir UltraHonk proofs and verification keys
#[derive(Parser)]
#[command(name = "honk-inspect")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Common options shared across commands
#[derive(Args, Clone)]
pub struct CommonArgs {
    /// Output format (human, json) [default: human]
    #[arg(long)]
    pub output: Option<OutputFormat>,

    /// Quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to config file [default: <config dir>/honk-inspect/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// zk selection shared by proof-shaped commands
#[derive(Args, Clone, Copy)]
pub struct ZkArgs {
    /// Treat the proof as ZK (libra masking present)
    #[arg(long, conflicts_with = "no_zk")]
    pub zk: bool,

    /// Treat the proof as non-ZK
    #[arg(long)]
    pub no_zk: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a verification key and compute its hash
    Vk(vk::VkArgs),

    /// Decode a proof, detecting its parameters on size mismatch
    Proof(proof::ProofArgs),

    /// Decode a public inputs file
    PublicInputs(public_inputs::PublicInputsArgs),

    /// Print the proof section table for given parameters
    Layout(layout::LayoutArgs),

    /// Inspect vk, proof and public inputs from an artifact directory
    Check(check::CheckArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    // Run command
    let result = match cli.command {
        Commands::Vk(args) => {
            let config = config::Config::load(&args.common)?;
            vk::run(&config, args)
        }
        Commands::Proof(args) => {
            let config = config::Config::load(&args.common)?;
            proof::run(&config, args)
        }
        Commands::PublicInputs(args) => {
            let config = config::Config::load(&args.common)?;
            public_inputs::run(&config, args)
        }
        Commands::Layout(args) => {
            let config = config::Config::load(&args.common)?;
            layout::run(&config, args)
        }
        Commands::Check(args) => {
            let config = config::Config::load(&args.common)?;
            check::run(&config, args)
        }
    };

    // Handle errors nicely
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
