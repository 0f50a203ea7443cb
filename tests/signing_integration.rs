use sui_signer::crypto::curves::{Ed25519Curve, EllipticCurve};
use sui_signer::signing::{intent_digest, EncodedSignature};
use sui_signer::wallet::{seed_from_mnemonic, signing_seed_from_mnemonic, HARDENED};
use sui_signer::{
    derive_child, derive_path, master_key, sign, sign_ed25519, verify_ed25519, DerivationPath,
    SignatureScheme, SuiAddress,
};

const ZERO_SEED_EMPTY_TX: &str = "00dcdbf7e0e47a56b6c364ffa09e16abed0c60bba86c8b661126754ef1cfbb8e5ad34058631482141e6ac32bec0620988b85877855f75c34f0f2f39e40bdd8880f3b6a27bcceb6a42d62a3a8d02a6f0d73653215771de243a63ac048a18b59da29";
const TEST_SEED_M_0_1: &str = "cf8bc08dcffc5ff5a90c25143043a66eeefe466a34e3edae0de9fe03169f34fb29fb6a230fd01fa91acebf85982884270a61b805715d8b8fce5b0d0a2aa37364";

const ABANDON: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

#[test]
fn zero_seed_empty_message() {
    let seed = [0u8; 32];
    let first = sign_ed25519(&seed, &[]).expect("sign");
    let second = sign_ed25519(&seed, &[]).expect("sign");

    assert_eq!(first.as_bytes(), second.as_bytes());
    assert_eq!(hex::encode(first.as_bytes()), ZERO_SEED_EMPTY_TX);
    assert_eq!(first.as_bytes()[0], 0x00);

    let public_key = Ed25519Curve::public_key_from_seed(&seed).expect("keygen");
    assert_eq!(&first.as_bytes()[65..], &public_key[..]);

    let digest = intent_digest(&[]).expect("digest");
    assert!(Ed25519Curve::verify(&public_key, &digest, first.signature()).expect("verify"));
}

#[test]
fn test_seed_two_step_derivation() {
    let master = master_key(b"test seed").expect("master");
    let child = derive_child(&master, 0).expect("child 0");
    let grandchild = derive_child(&child, 1).expect("child 1");
    assert_eq!(hex::encode(*grandchild.to_bytes()), TEST_SEED_M_0_1);

    // Direct sequential application gives the same node
    let again = derive_child(&derive_child(&master_key(b"test seed").unwrap(), 0).unwrap(), 1).unwrap();
    assert_eq!(grandchild, again);

    // Different index at either step diverges
    assert_ne!(grandchild, derive_child(&child, 2).unwrap());
    assert_ne!(grandchild, derive_child(&derive_child(&master, 1).unwrap(), 1).unwrap());

    // And differs from any single step
    assert_ne!(grandchild, child);
    assert_ne!(grandchild, derive_child(&master, 1).unwrap());
}

#[test]
fn unhardened_path_indices_pass_through() {
    let master = master_key(b"test seed").unwrap();
    let path: DerivationPath = "m/0/1".parse().unwrap();
    let via_path = derive_path(b"test seed", &path).unwrap();
    let manual = derive_child(&derive_child(&master, 0).unwrap(), 1).unwrap();
    assert_eq!(via_path, manual);

    let hardened: DerivationPath = "m/0'/1'".parse().unwrap();
    let hardened_manual =
        derive_child(&derive_child(&master, HARDENED).unwrap(), HARDENED | 1).unwrap();
    assert_eq!(derive_path(b"test seed", &hardened).unwrap(), hardened_manual);
    assert_ne!(via_path, hardened_manual);
}

#[test]
fn mnemonic_to_signature_pipeline() {
    let path = DerivationPath::sui(0, 0, 0);
    let key = signing_seed_from_mnemonic(ABANDON, &path).expect("signing seed");

    let seed = seed_from_mnemonic(ABANDON).unwrap();
    let node = derive_path(seed.as_ref(), &path).unwrap();
    assert_eq!(node.key(), &*key);

    let tx = b"\x00\x00\x02\x00example programmable transaction";
    let encoded = sign(SignatureScheme::Ed25519, &key, tx).expect("sign");
    assert!(verify_ed25519(&encoded, tx).expect("verify"));

    let parsed = EncodedSignature::from_base64(&encoded.to_base64()).expect("parse");
    assert_eq!(parsed, encoded);

    let address = SuiAddress::from_signature(&encoded).unwrap();
    assert_eq!(address.to_hex().len(), 66);
}

#[test]
fn signing_different_keys_changes_output() {
    let a = sign_ed25519(&[1u8; 32], b"tx").unwrap();
    let b = sign_ed25519(&[2u8; 32], b"tx").unwrap();
    assert_ne!(a.public_key(), b.public_key());
    assert_ne!(a.signature(), b.signature());
    assert!(!verify_ed25519(&a, b"tx2").unwrap());
}
