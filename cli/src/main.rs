// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Aurum Client CLI
//!
//! Entry point for the `aurum` binary. Parses CLI arguments, initializes
//! logging, and dispatches to the offline tooling commands:
//!
//! - `keygen`  — generate an Ed25519 signer keypair
//! - `build`   — assemble an unsigned single-instruction transaction
//! - `sign`    — sign a transaction and print the submission artifact
//! - `inspect` — print a transaction's hashes and verify its signatures
//!
//! Everything runs locally. Submitting the signed JSON to a ledger node
//! is deliberately out of scope — pipe the output into whatever channel
//! your deployment uses.

mod cli;
mod logging;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use aurum_protocol::crypto::keys::AurumKeypair;
use aurum_protocol::identity::{Ed25519Signer, Signer};
use aurum_protocol::transaction::{
    verify_transaction, wire, Argument, ClientTransaction, InstanceId, Instruction, Invoke,
    Operation, SignedTransaction,
};

use cli::{AurumCli, BuildOp, Commands, InspectArgs, KeygenArgs, SignArgs, TargetArgs};
use logging::LogFormat;

fn main() -> Result<()> {
    let cli = AurumCli::parse();
    logging::init_logging(
        "aurum_cli=info,aurum_protocol=info",
        LogFormat::from_str_lossy(&cli.log_format),
    );

    match cli.command {
        Commands::Keygen(args) => keygen(args),
        Commands::Build(op) => build(op),
        Commands::Sign(args) => sign(args),
        Commands::Inspect(args) => inspect(args),
    }
}

/// Generates (or deterministically derives) a signer keypair.
fn keygen(args: KeygenArgs) -> Result<()> {
    let keypair = match &args.seed {
        Some(seed) => AurumKeypair::from_hex(seed)
            .map_err(|e| anyhow::anyhow!("invalid --seed: {e}"))?,
        None => AurumKeypair::generate(),
    };
    let signer = Ed25519Signer::new(keypair.clone());

    tracing::info!(identity = %signer.identity(), "keypair generated");
    println!("identity: {}", signer.identity());

    let secret_hex = hex::encode(keypair.to_bytes());
    match &args.out {
        Some(path) => {
            std::fs::write(path, &secret_hex)
                .with_context(|| format!("failed to write key to {}", path.display()))?;

            // Restrict permissions on Unix.
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
            }

            println!("secret key written to {}", path.display());
        }
        None => println!("secret:   {}", secret_hex),
    }

    Ok(())
}

/// Builds an unsigned single-instruction transaction and emits its JSON.
fn build(op: BuildOp) -> Result<()> {
    let (instruction, target) = instruction_from_op(op)?;
    let tx = ClientTransaction::from(instruction);

    tracing::info!(hash = %hex::encode(tx.hash()), "transaction built");

    let json = wire::to_json(&tx)?;
    emit(target.out.as_deref(), &json)
}

/// Signs an unsigned transaction with the supplied secret keys.
fn sign(args: SignArgs) -> Result<()> {
    let json = std::fs::read_to_string(&args.tx)
        .with_context(|| format!("failed to read {}", args.tx.display()))?;
    let tx: ClientTransaction =
        wire::from_json(&json).context("input is not an unsigned transaction")?;

    let signers = load_signers(&args.keys, &args.key_files)?;
    if signers.is_empty() {
        bail!("no signers: pass at least one --key or --key-file");
    }
    let dyns: Vec<&dyn Signer> = signers.iter().map(|s| s as _).collect();

    let signed = tx.sign_with(&dyns);
    tracing::info!(
        hash = %hex::encode(signed.hash()),
        signers = signers.len(),
        "transaction signed"
    );
    for (i, instr) in signed.instructions.iter().enumerate() {
        tracing::info!(
            instruction = i,
            derived_id = %instr.derive_id(""),
            "derived identifier"
        );
    }

    let json = wire::to_json(&signed)?;
    emit(args.out.as_deref(), &json)
}

/// Prints a transaction's digests and, when signed, verifies it.
fn inspect(args: InspectArgs) -> Result<()> {
    let json = std::fs::read_to_string(&args.tx)
        .with_context(|| format!("failed to read {}", args.tx.display()))?;

    // A signed transaction nests each instruction under its signatures;
    // the unsigned form is flat. Try the richer shape first.
    if let Ok(signed) = wire::from_json::<SignedTransaction>(&json) {
        println!("transaction hash: {}", hex::encode(signed.hash()));
        for (i, instr) in signed.instructions.iter().enumerate() {
            print_instruction(i, &instr.instruction);
            for sig in &instr.signatures {
                println!("     signed by {}", sig.signer);
            }
            println!("     derived id {}", instr.derive_id(""));
        }
        verify_transaction(&signed).context("signature verification failed")?;
        println!("verification: ok");
        return Ok(());
    }

    let tx: ClientTransaction =
        wire::from_json(&json).context("input is not a transaction")?;
    println!("transaction hash: {} (unsigned)", hex::encode(tx.hash()));
    for (i, instr) in tx.instructions.iter().enumerate() {
        print_instruction(i, instr);
    }
    Ok(())
}

fn print_instruction(index: usize, instr: &Instruction) {
    println!(
        "  [{index}] {} {} on {}",
        instr.kind(),
        instr.operation.contract_id(),
        instr.instance_id,
    );
    println!("     hash {}", hex::encode(instr.hash()));
    println!("     counters {:?}", instr.signer_counters);
}

/// Assembles the instruction described by a `build` subcommand.
fn instruction_from_op(op: BuildOp) -> Result<(Instruction, TargetArgs)> {
    match op {
        BuildOp::Spawn(a) => {
            let iid = parse_instance(&a.target.instance)?;
            let args = parse_arguments(&a.args)?;
            let instr = Instruction::spawn(iid, a.target.contract.as_str(), args)
                .with_signer_counters(a.target.counters.clone());
            Ok((instr, a.target))
        }
        BuildOp::Invoke(a) => {
            let iid = parse_instance(&a.target.instance)?;
            let args = parse_arguments(&a.args)?;
            // The library factory pins the evolve command; any other
            // command means building the operation directly.
            let instr = Instruction {
                instance_id: iid,
                operation: Operation::Invoke(Invoke {
                    contract_id: a.target.contract.clone(),
                    command: a.command,
                    args,
                }),
                signer_counters: a.target.counters.clone(),
            };
            Ok((instr, a.target))
        }
        BuildOp::Delete(a) => {
            let iid = parse_instance(&a.target.instance)?;
            let instr = Instruction::delete(iid, a.target.contract.as_str())
                .with_signer_counters(a.target.counters.clone());
            Ok((instr, a.target))
        }
    }
}

fn parse_instance(hex_str: &str) -> Result<InstanceId> {
    InstanceId::from_hex(hex_str).map_err(|e| anyhow::anyhow!("invalid --instance: {e}"))
}

/// Parses repeated `NAME=HEX` flags into arguments, preserving order.
fn parse_arguments(raw: &[String]) -> Result<Vec<Argument>> {
    raw.iter().map(|s| parse_argument(s)).collect()
}

fn parse_argument(s: &str) -> Result<Argument> {
    let (name, value_hex) = s
        .split_once('=')
        .with_context(|| format!("argument {s:?} is not NAME=HEX"))?;
    let value = hex::decode(value_hex)
        .with_context(|| format!("argument {name:?} has a non-hex value"))?;
    Ok(Argument::new(name, value))
}

/// Loads signers from inline hex keys and key files, in that order.
fn load_signers(keys: &[String], key_files: &[PathBuf]) -> Result<Vec<Ed25519Signer>> {
    let mut signers = Vec::with_capacity(keys.len() + key_files.len());
    for key in keys {
        signers.push(signer_from_hex(key)?);
    }
    for path in key_files {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read key file {}", path.display()))?;
        signers.push(signer_from_hex(contents.trim())?);
    }
    Ok(signers)
}

fn signer_from_hex(hex_str: &str) -> Result<Ed25519Signer> {
    let keypair =
        AurumKeypair::from_hex(hex_str).map_err(|e| anyhow::anyhow!("invalid secret key: {e}"))?;
    Ok(Ed25519Signer::new(keypair))
}

/// Writes structured output to a file, or to stdout when no path is given.
fn emit(out: Option<&Path>, contents: &str) -> Result<()> {
    match out {
        Some(path) => std::fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            println!("{contents}");
            Ok(())
        }
    }
}
