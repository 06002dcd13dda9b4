//! End-to-end integration tests for the Aurum client library.
//!
//! These tests exercise the full client lifecycle: signer creation,
//! instruction construction, batching, canonical hashing, signing,
//! verification, derived identifiers, and the wire round-trip. They prove
//! the crate's components compose — the unit tests next to each module
//! already cover the pieces in isolation.
//!
//! Each test stands alone. No shared state, no test ordering
//! dependencies, no flaky failures.

use aurum_protocol::identity::{Ed25519Signer, Identity, Signer};
use aurum_protocol::transaction::{
    verify_transaction, wire, Argument, ClientTransaction, InstanceId, Instruction, Operation,
    TransactionError,
};

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

/// Two deterministic signers so failures reproduce byte-for-byte.
fn signers() -> (Ed25519Signer, Ed25519Signer) {
    (
        Ed25519Signer::from_seed(&[0xA1; 32]),
        Ed25519Signer::from_seed(&[0xB2; 32]),
    )
}

/// A representative two-instruction batch: spawn a darc, evolve a config.
fn sample_batch() -> ClientTransaction {
    let spawn = Instruction::spawn(
        InstanceId::zero(),
        "darc",
        vec![Argument::new("rules", b"spawn:darc".to_vec())],
    )
    .with_signer_counters(vec![1, 1]);

    let invoke = Instruction::invoke(
        InstanceId::from_bytes([0x11; 32]),
        "config",
        vec![Argument::new("interval", 5_000u64.to_le_bytes().to_vec())],
    )
    .with_signer_counters(vec![2, 2]);

    ClientTransaction::new(vec![spawn, invoke])
}

// ---------------------------------------------------------------------------
// Full lifecycle
// ---------------------------------------------------------------------------

#[test]
fn build_sign_verify_lifecycle() {
    let (alice, bob) = signers();
    let tx = sample_batch();
    let ctx_hash = tx.hash();

    let signed = tx.sign_with(&[&alice, &bob]);

    // Signing never perturbs the digest.
    assert_eq!(signed.hash(), ctx_hash);

    // Every instruction carries both signatures, in signer order, and the
    // whole thing passes node-side verification.
    for instr in &signed.instructions {
        assert_eq!(instr.signatures.len(), 2);
        assert_eq!(instr.signatures[0].signer, alice.identity());
        assert_eq!(instr.signatures[1].signer, bob.identity());
    }
    verify_transaction(&signed).expect("honest transaction must verify");
}

#[test]
fn spawned_instance_gets_a_stable_derived_id() {
    let (alice, _) = signers();
    let tx = sample_batch();
    let signed = tx.sign_with(&[&alice]);

    // The primary derived ID names the spawned instance; it is a pure
    // function of instruction content and signatures, so signing the same
    // batch again reproduces it.
    let iid_once = signed.instructions[0].derive_id("");
    let iid_again = tx.sign_with(&[&alice]).instructions[0].derive_id("");
    assert_eq!(iid_once, iid_again);

    // Auxiliary artifacts get their own tags, in a disjoint space.
    assert_ne!(iid_once, signed.instructions[0].derive_id("credential"));

    // A different signer set lands in yet another space.
    let (_, bob) = signers();
    let other = tx.sign_with(&[&bob]).instructions[0].derive_id("");
    assert_ne!(iid_once, other);
}

#[test]
fn wire_roundtrip_preserves_digests_and_signatures() {
    let (alice, bob) = signers();
    let signed = sample_batch().sign_with(&[&alice, &bob]);

    let bytes = wire::to_wire(&signed).unwrap();
    let recovered = wire::from_wire(&bytes).unwrap();
    assert_eq!(signed, recovered);
    verify_transaction(&recovered).expect("round-tripped transaction must still verify");

    let json = wire::to_json(&signed).unwrap();
    let recovered = wire::from_json(&json).unwrap();
    assert_eq!(signed, recovered);
}

// ---------------------------------------------------------------------------
// Cross-implementation reference scenarios
// ---------------------------------------------------------------------------

#[test]
fn reference_spawn_scenario() {
    // The canonical interop check: all-zero instance ID, spawn of
    // "testContract" with no arguments, counters [1]. Any conforming
    // implementation, in any language, computes these exact digests.
    let instr = Instruction::spawn(InstanceId::zero(), "testContract", vec![])
        .with_signer_counters(vec![1]);

    assert_eq!(instr.kind().tag(), 0);
    assert_eq!(
        hex::encode(instr.hash()),
        "03f4054dd2fa366ab55ecd2ddce52caa90265210bb7997523c7e164d55bc6e5e"
    );

    let derived = instr.derive_id("");
    assert_eq!(
        derived.to_hex(),
        "659f669f8766a83845ec7b33a671383629f358f39f6674ada711dd0281e9e246"
    );
    assert_ne!(derived.as_bytes(), &instr.hash());
}

#[test]
fn counter_divergence_scenario() {
    let base = Instruction::spawn(InstanceId::zero(), "testContract", vec![]);
    let one = base.clone().with_signer_counters(vec![1]);
    let two = base.with_signer_counters(vec![2]);
    assert_ne!(one.hash(), two.hash());
}

#[test]
fn reorder_divergence_scenario() {
    let batch = sample_batch();
    let reversed = ClientTransaction::new(batch.instructions.iter().rev().cloned().collect());
    assert_ne!(batch.hash(), reversed.hash());
}

// ---------------------------------------------------------------------------
// Adversarial paths
// ---------------------------------------------------------------------------

#[test]
fn mutation_after_signing_is_detected() {
    let (alice, _) = signers();
    let mut signed = sample_batch().sign_with(&[&alice]);

    // A relay quietly bumps an argument value.
    match &mut signed.instructions[1].instruction.operation {
        Operation::Invoke(inv) => inv.args[0].value = 60_000u64.to_le_bytes().to_vec(),
        _ => unreachable!(),
    }

    assert!(matches!(
        verify_transaction(&signed),
        Err(TransactionError::InvalidSignature { index: 0, .. })
    ));
}

#[test]
fn dropping_an_instruction_is_detected() {
    let (alice, _) = signers();
    let mut signed = sample_batch().sign_with(&[&alice]);
    signed.instructions.pop();

    // The surviving instruction's signatures cover the two-instruction
    // digest, not the truncated one.
    assert!(verify_transaction(&signed).is_err());
}

#[test]
fn identity_strings_survive_the_trip() {
    let (alice, _) = signers();
    let signed = sample_batch().sign_with(&[&alice]);
    let rendered = signed.instructions[0].signatures[0].signer.to_string();
    let parsed: Identity = rendered.parse().unwrap();
    assert_eq!(parsed, alice.identity());
}
