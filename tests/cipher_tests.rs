//! tests/cipher_tests.rs
//! Round-trip correctness and padding transparency for every adapter

mod common;

use cipherbench_rs::ciphers::{
    Aes128Adapter, Block64Cipher, SimonAdapter, SimonCipher, SpeckAdapter, SpeckCipher,
};
use cipherbench_rs::{filler_message, CipherAdapter, CipherKind, KeyMaterial};
use common::{CorruptingAdapter, TEST_SIZES};
use proptest::prelude::*;

fn all_adapters() -> Vec<Box<dyn CipherAdapter>> {
    let keys = KeyMaterial::fixed();
    CipherKind::ALL.iter().map(|k| k.adapter(&keys)).collect()
}

#[test]
fn every_cipher_roundtrips_every_size() {
    for adapter in all_adapters() {
        for &size in TEST_SIZES {
            let message = filler_message(size);
            let recovered = adapter.roundtrip(&message).unwrap();
            assert_eq!(recovered, message, "{} at {size} bytes", adapter.name());
            assert!(adapter.verify(&message).unwrap());
        }
    }
}

#[test]
fn adapter_names_follow_cipher_kind() {
    let names: Vec<_> = all_adapters().iter().map(|a| a.name()).collect();
    assert_eq!(names, ["AES-128", "Ascon", "Simon", "Speck"]);
    for kind in CipherKind::ALL {
        assert_eq!(kind.to_string(), kind.name());
    }
}

#[test]
fn block_adapters_strip_padding_on_aligned_and_unaligned_lengths() {
    let simon = SimonAdapter::new(KeyMaterial::fixed().simon_key);
    let speck = SpeckAdapter::new(KeyMaterial::fixed().speck_key);

    for len in [64usize, 65] {
        let message = filler_message(len);

        assert_eq!(simon.encrypt(&message).len(), len.div_ceil(8) * 8);
        assert_eq!(speck.encrypt(&message).len(), len.div_ceil(8) * 8);

        assert_eq!(simon.roundtrip(&message).unwrap().len(), len);
        assert_eq!(speck.roundtrip(&message).unwrap().len(), len);
    }
}

#[test]
fn block_ciphertext_differs_from_plaintext() {
    let speck = SpeckAdapter::new(KeyMaterial::fixed().speck_key);
    let message = filler_message(64);
    assert_ne!(speck.encrypt(&message), message);
}

#[test]
fn misaligned_block_ciphertext_is_a_library_error() {
    let simon = SimonAdapter::new(KeyMaterial::fixed().simon_key);
    let err = simon.decrypt(&[0u8; 9], 9).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Simon library error at 9 bytes: ciphertext length 9 is not a multiple of 8"
    );
}

#[test]
fn aes_keeps_trailing_zero_bytes() {
    let aes = Aes128Adapter::new(KeyMaterial::fixed().aes_key);
    let message = b"ends with zeros\0\0\0".to_vec();
    assert_eq!(aes.roundtrip(&message).unwrap(), message);
}

#[test]
fn aes_always_adds_a_pad_block() {
    assert_eq!(Aes128Adapter::padded_len(0), 16);
    assert_eq!(Aes128Adapter::padded_len(15), 16);
    assert_eq!(Aes128Adapter::padded_len(16), 32);
    assert_eq!(Aes128Adapter::padded_len(64), 80);
}

#[test]
fn speck_published_vector_through_framing() {
    let key: [u8; 16] = hex::decode("1b1a1918131211100b0a090803020100")
        .unwrap()
        .try_into()
        .unwrap();
    let plaintext = hex::decode("3b7265747475432d").unwrap();

    let adapter = SpeckAdapter::new(key);
    assert_eq!(hex::encode(adapter.encrypt(&plaintext)), "8c6fa548454e028b");

    let speck = SpeckCipher::with_key(&key);
    assert_eq!(speck.decrypt_block(0x8c6f_a548_454e_028b), 0x3b72_6574_7475_432d);
}

#[test]
fn simon_published_vector_through_framing() {
    let key: [u8; 16] = hex::decode("1b1a1918131211100b0a090803020100")
        .unwrap()
        .try_into()
        .unwrap();
    let plaintext = hex::decode("656b696c20646e75").unwrap();

    let adapter = SimonAdapter::new(key);
    assert_eq!(hex::encode(adapter.encrypt(&plaintext)), "44c8fc20b9dfa07a");

    let simon = SimonCipher::with_key(&key);
    assert_eq!(simon.decrypt_block(0x44c8_fc20_b9df_a07a), 0x656b_696c_2064_6e75);
}

#[test]
fn random_keys_still_roundtrip() {
    let keys = KeyMaterial::random();
    for kind in CipherKind::ALL {
        let adapter = kind.adapter(&keys);
        assert!(adapter.verify(&filler_message(100)).unwrap(), "{kind}");
    }
}

#[test]
fn verify_detects_corruption() {
    let broken = CorruptingAdapter::new(1);
    assert!(!broken.verify(&filler_message(16)).unwrap());
}

proptest! {
    #[test]
    fn roundtrip_preserves_arbitrary_messages(message in proptest::collection::vec(any::<u8>(), 0..300)) {
        for adapter in all_adapters() {
            let recovered = adapter.roundtrip(&message).unwrap();
            prop_assert_eq!(&recovered, &message);
        }
    }
}
