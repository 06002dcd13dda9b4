//! Walkthrough of the full Aurum client lifecycle.
//!
//! Builds a two-instruction transaction, signs it with two signers,
//! verifies it the way a node would, and derives the spawned instance's
//! identifier. Run with:
//!
//! ```text
//! cargo run --example demo -p aurum-protocol
//! ```

use aurum_protocol::identity::{Ed25519Signer, Signer};
use aurum_protocol::transaction::{
    verify_transaction, wire, Argument, ClientTransaction, InstanceId, Instruction,
};

fn main() {
    // Act 1: signers. Alice and Bob each hold an Ed25519 keypair; the
    // ledger knows them only by their identity strings.
    let alice = Ed25519Signer::generate();
    let bob = Ed25519Signer::generate();
    println!("alice: {}", alice.identity());
    println!("bob:   {}", bob.identity());

    // Act 2: instructions. Spawn a value instance (authorized by the
    // genesis darc at the all-zero ID), then evolve a config instance.
    // Counters are each signer's next replay counter, positionally.
    let spawn = Instruction::spawn(
        InstanceId::zero(),
        "value",
        vec![Argument::new("value", b"hello aurum".to_vec())],
    )
    .with_signer_counters(vec![1, 1]);

    let invoke = Instruction::invoke(
        InstanceId::from_bytes([0x11; 32]),
        "config",
        vec![Argument::new("interval", 5_000u64.to_le_bytes().to_vec())],
    )
    .with_signer_counters(vec![2, 2]);

    // Act 3: the atomic batch and its aggregate hash — the one digest
    // both signers endorse.
    let tx = ClientTransaction::new(vec![spawn, invoke]);
    println!("tx hash: {}", hex::encode(tx.hash()));

    // Act 4: signing. One call, both signers, every instruction.
    let signed = tx.sign_with(&[&alice, &bob]);

    // Act 5: what a node does on arrival.
    verify_transaction(&signed).expect("transaction must verify");
    println!("verification: ok");

    // Act 6: the spawned instance's own identifier, bound to the
    // instruction content and this signing session.
    let instance = signed.instructions[0].derive_id("");
    println!("spawned instance: {instance}");

    // Act 7: the bytes that would go to the submission channel.
    let bytes = wire::to_wire(&signed).expect("wire encoding");
    println!("wire size: {} bytes", bytes.len());
}
