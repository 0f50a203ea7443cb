use proptest::prelude::*;
use sui_signer::signing::{build_intent_message, sign_into, INTENT_PREFIX};
use sui_signer::wallet::{derive_child, master_key, ExtendedKey};
use sui_signer::{
    sign_ed25519, SignerError, ENCODED_SIGNATURE_LENGTH, MAX_INTENT_MESSAGE_LENGTH,
    MAX_TRANSACTION_LENGTH,
};

fn any_tx() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=MAX_TRANSACTION_LENGTH)
}

fn oversize_tx() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), MAX_TRANSACTION_LENGTH + 1..=MAX_TRANSACTION_LENGTH + 64)
}

fn unimplemented_flag() -> impl Strategy<Value = u8> {
    prop_oneof![
        Just(0x01u8),
        Just(0x02u8),
        Just(0x03u8),
        Just(0x05u8),
        Just(0x06u8),
        (0x04u8..=0xff).prop_filter("listed above", |b| {
            !matches!(*b, 0x05 | 0x06)
        }),
    ]
}

proptest! {
    #[test]
    fn intent_message_layout(tx in any_tx()) {
        let mut buf = [0u8; MAX_INTENT_MESSAGE_LENGTH];
        let n = build_intent_message(&tx, &mut buf).expect("fits");
        prop_assert_eq!(n, 3 + tx.len());
        prop_assert_eq!(&buf[..3], &INTENT_PREFIX[..]);
        prop_assert_eq!(&buf[3..n], tx.as_slice());
    }

    #[test]
    fn oversize_transactions_write_nothing(tx in oversize_tx()) {
        let mut buf = [0x5au8; MAX_INTENT_MESSAGE_LENGTH];
        let err = build_intent_message(&tx, &mut buf).unwrap_err();
        prop_assert_eq!(err, SignerError::length_exceeded(tx.len() + 3, MAX_INTENT_MESSAGE_LENGTH));
        prop_assert!(buf.iter().all(|&b| b == 0x5a));
    }

    #[test]
    fn signing_is_idempotent(seed in prop::array::uniform32(any::<u8>()), tx in any_tx()) {
        let a = sign_ed25519(&seed, &tx).expect("sign");
        let b = sign_ed25519(&seed, &tx).expect("sign");
        prop_assert_eq!(a.as_bytes(), b.as_bytes());
        prop_assert_eq!(a.as_bytes()[0], 0x00);
    }

    #[test]
    fn unsupported_flags_write_nothing(
        flag in unimplemented_flag(),
        seed in prop::array::uniform32(any::<u8>()),
        tx in any_tx(),
    ) {
        let mut out = [0xc3u8; ENCODED_SIGNATURE_LENGTH];
        let err = sign_into(flag, &seed, &tx, &mut out).unwrap_err();
        prop_assert_eq!(err, SignerError::UnsupportedScheme(flag));
        prop_assert!(out.iter().all(|&b| b == 0xc3));
    }

    #[test]
    fn master_key_is_pure(seed in prop::collection::vec(any::<u8>(), 16..=64)) {
        let a = master_key(&seed).expect("master");
        let b = master_key(&seed).expect("master");
        prop_assert_eq!(a.to_bytes(), b.to_bytes());
    }

    #[test]
    fn child_derivation_is_pure_and_sensitive(
        raw in prop::array::uniform32(any::<u8>()),
        chain in prop::array::uniform32(any::<u8>()),
        index in any::<u32>(),
        flip in 0usize..32,
    ) {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&raw);
        bytes[32..].copy_from_slice(&chain);
        let parent = ExtendedKey::from_bytes(&bytes);

        let a = derive_child(&parent, index).expect("child");
        let b = derive_child(&parent, index).expect("child");
        prop_assert_eq!(&a, &b);

        let other_index = derive_child(&parent, index.wrapping_add(1)).expect("child");
        prop_assert_ne!(&a, &other_index);

        bytes[flip] ^= 0x01;
        let tweaked = derive_child(&ExtendedKey::from_bytes(&bytes), index).expect("child");
        prop_assert_ne!(&a, &tweaked);
    }
}
