use hash160::Hash160;
use hex_literal::hex;
use ripemd160::Ripemd160;
use sha2::Sha256;

#[test]
fn known_vectors() {
    assert_eq!(Hash160::digest(b""), hex!("b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"));
    assert_eq!(Hash160::digest(b"abc"), hex!("bb1be98c142444d7a56aa3981c3942a978e4dc33"));
    assert_eq!(Hash160::digest(b"hello"), hex!("b6a9c8c230722b7c748331a8b450f05566dc7d0f"));

    // uncompressed secp256k1 public key, the classic address-derivation case
    let pubkey = hex!(
        "0450863ad64a87ae8a2fe83c1af1a8403cb53f53e486d8511dad8a04887e5b2352
         2cd470243453a299fa9e77237716103abc11a1df38855ed6f2ee187e9c582ba6"
    );
    assert_eq!(Hash160::digest(&pubkey), hex!("010966776006953d5567439e5e39f86a0d273bee"));
}

#[test]
fn composes_sha256_then_ripemd160() {
    for data in [&b""[..], b"abc", &[0u8; 200][..]] {
        assert_eq!(Hash160::digest(data), Ripemd160::digest(&Sha256::digest(data)));
    }
}
