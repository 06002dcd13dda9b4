//! # CLI Interface
//!
//! Defines the command-line argument structure for `aurum` using `clap`
//! derive. Supports four subcommands: `keygen`, `build`, `sign`, and
//! `inspect`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Aurum ledger client tooling.
///
/// Builds, hashes, signs, and inspects client transactions entirely
/// offline. Transaction JSON goes to stdout (or `--out`); logs go to
/// stderr, so the output is safe to pipe into the submission channel of
/// your choice.
#[derive(Parser, Debug)]
#[command(
    name = "aurum",
    about = "Aurum ledger client tooling",
    version,
    propagate_version = true
)]
pub struct AurumCli {
    /// Log output format: "pretty" or "json".
    #[arg(long, env = "AURUM_LOG_FORMAT", default_value = "pretty", global = true)]
    pub log_format: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the `aurum` binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an Ed25519 signer keypair and print its identity.
    Keygen(KeygenArgs),
    /// Build an unsigned single-instruction transaction.
    #[command(subcommand)]
    Build(BuildOp),
    /// Sign an unsigned transaction with one or more secret keys.
    Sign(SignArgs),
    /// Print a transaction's hashes and verify its signatures.
    Inspect(InspectArgs),
}

/// Arguments for the `keygen` subcommand.
#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Hex-encoded 32-byte seed for deterministic key derivation.
    ///
    /// Omit to generate from the OS RNG, which is what you want outside
    /// of tests and reproducible fixtures.
    #[arg(long, value_name = "HEX")]
    pub seed: Option<String>,

    /// Write the hex-encoded secret key to this file (created with mode
    /// 0600 on Unix) instead of printing it to stdout.
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,
}

/// The operation to build an instruction for.
#[derive(Subcommand, Debug)]
pub enum BuildOp {
    /// Spawn a new contract instance.
    Spawn(SpawnArgs),
    /// Invoke a command on an existing instance.
    Invoke(InvokeArgs),
    /// Delete an existing instance.
    Delete(DeleteArgs),
}

/// Fields shared by every build operation.
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Hex-encoded 32-byte ID of the instance the instruction acts on.
    #[arg(long, short = 'i', value_name = "HEX")]
    pub instance: String,

    /// Contract identifier.
    #[arg(long, short = 'c')]
    pub contract: String,

    /// Signer replay counters, comma-separated, one per intended signer.
    #[arg(long, value_delimiter = ',', value_name = "N,N,...")]
    pub counters: Vec<u64>,

    /// Write the transaction JSON here instead of stdout.
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,
}

/// Arguments for `build spawn`.
#[derive(Args, Debug)]
pub struct SpawnArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Contract argument as NAME=HEX, repeatable, order-significant.
    #[arg(long = "arg", value_name = "NAME=HEX")]
    pub args: Vec<String>,
}

/// Arguments for `build invoke`.
#[derive(Args, Debug)]
pub struct InvokeArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Contract argument as NAME=HEX, repeatable, order-significant.
    #[arg(long = "arg", value_name = "NAME=HEX")]
    pub args: Vec<String>,

    /// Contract command to invoke.
    #[arg(long, default_value = "evolve")]
    pub command: String,
}

/// Arguments for `build delete`.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

/// Arguments for the `sign` subcommand.
#[derive(Args, Debug)]
pub struct SignArgs {
    /// Path to the unsigned transaction JSON.
    #[arg(long, short = 't')]
    pub tx: PathBuf,

    /// Hex-encoded 32-byte secret key, repeatable, in signer order.
    ///
    /// **Never pass production secrets on a command line** — read them
    /// from a key file generated by `keygen --out`, via `--key-file`.
    #[arg(long = "key", value_name = "HEX")]
    pub keys: Vec<String>,

    /// Path to a file containing a hex-encoded secret key, repeatable.
    /// Key files are appended after any `--key` values.
    #[arg(long = "key-file", value_name = "PATH")]
    pub key_files: Vec<PathBuf>,

    /// Write the signed transaction JSON here instead of stdout.
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the transaction JSON, signed or unsigned.
    #[arg(long, short = 't')]
    pub tx: PathBuf,
}
