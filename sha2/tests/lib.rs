use hex_literal::hex;
use sha2::{Sha256, Sha256d, Sha512};

fn seq(n: usize) -> Vec<u8> {
    (0..n).map(|i| i as u8).collect()
}

#[test]
fn sha256_fips180_vectors() {
    assert_eq!(
        Sha256::digest(b""),
        hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
    );
    assert_eq!(
        Sha256::digest(b"abc"),
        hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
    );
    assert_eq!(
        Sha256::digest(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        hex!("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1")
    );
    assert_eq!(
        Sha256::digest(b"The quick brown fox jumps over the lazy dog"),
        hex!("d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592")
    );
}

#[test]
fn sha256_padding_boundaries() {
    assert_eq!(
        Sha256::digest(&seq(55)),
        hex!("463eb28e72f82e0a96c0a4cc53690c571281131f672aa229e0d45ae59b598b59")
    );
    assert_eq!(
        Sha256::digest(&seq(56)),
        hex!("da2ae4d6b36748f2a318f23e7ab1dfdf45acdc9d049bd80e59de82a60895f562")
    );
    assert_eq!(
        Sha256::digest(&seq(63)),
        hex!("29af2686fd53374a36b0846694cc342177e428d1647515f078784d69cdb9e488")
    );
    assert_eq!(
        Sha256::digest(&seq(64)),
        hex!("fdeab9acf3710362bd2658cdc9a29e8f9c757fcf9811603a8c447cd1d9151108")
    );
    assert_eq!(
        Sha256::digest(&seq(65)),
        hex!("4bfd2c8b6f1eec7a2afeb48b934ee4b2694182027e6d0fc075074f2fabb31781")
    );
}

#[test]
fn sha256_million_a() {
    let data = vec![b'a'; 1_000_000];
    assert_eq!(
        Sha256::digest(&data),
        hex!("cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0")
    );
}

#[test]
fn sha512_fips180_vectors() {
    assert_eq!(
        Sha512::digest(b""),
        hex!(
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce
             47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        )
    );
    assert_eq!(
        Sha512::digest(b"abc"),
        hex!(
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        )
    );
    assert_eq!(
        Sha512::digest(
            b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno\
              ijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu"
        ),
        hex!(
            "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018
             501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909"
        )
    );
}

#[test]
fn sha512_padding_boundaries() {
    // 128-byte blocks, 16-byte length field: 111 fits, 112..=127 spill,
    // 128 restarts a fresh block.
    assert_eq!(
        Sha512::digest(&seq(111)),
        hex!(
            "a1a111449b198d9b1f538bad7f3fc1022b3a5b1a5e90a0bc860de8512746cbc3
             1599e6c834de3a3235327af0b51ff57bf7acf1974a73014d9c3953812edc7c8d"
        )
    );
    assert_eq!(
        Sha512::digest(&seq(112)),
        hex!(
            "c5fbd731d19d2ae1180f001be72c2c1aaba1d7b094b3748880e24593b8e117a7
             50e11c1bd867cc2f96dace8c8b74abd2d5c4f236be444e77d30d1916174070b9"
        )
    );
    assert_eq!(
        Sha512::digest(&seq(119)),
        hex!(
            "43e497279c2ce805903a33b54b746ea92d607f7c4807986c849823b81097a909
             9b5896ac7cc66df3a93edc8a91b6f3971d6c7f5688daf635737760bd080e27b3"
        )
    );
    assert_eq!(
        Sha512::digest(&seq(127)),
        hex!(
            "eab89674feaa34e27aebeeff3c0a4d70070bb872d5e9f186cf1dbbdee517b6e3
             5724d629ff025a5b07185e911ada7e3c8acf830aa0e4f71777bd2d44f504f7f0"
        )
    );
    assert_eq!(
        Sha512::digest(&seq(128)),
        hex!(
            "1dffd5e3adb71d45d2245939665521ae001a317a03720a45732ba1900ca3b835
             1fc5c9b4ca513eba6f80bc7b1d1fdad4abd13491cb824d61b08d8c0e1561b3f7"
        )
    );
    assert_eq!(
        Sha512::digest(&seq(129)),
        hex!(
            "1d9da57fbbdab09afb3506ab2d223d06109d65c1c8ad197f50138f714bc4c3f2
             fe5787922639c680acad1c651f955990425954ce2cba0c5cc83f2667d878eb0f"
        )
    );
}

#[test]
fn sha512_million_a() {
    let data = vec![b'a'; 1_000_000];
    assert_eq!(
        Sha512::digest(&data),
        hex!(
            "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973eb
             de0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b"
        )
    );
}

#[test]
fn sha256d_is_double_sha256() {
    for data in [&b""[..], b"abc", b"hello", &seq(100)] {
        assert_eq!(Sha256d::digest(data), Sha256::digest(&Sha256::digest(data)));
    }
    assert_eq!(
        Sha256d::digest(b""),
        hex!("5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456")
    );
    assert_eq!(
        Sha256d::digest(b"hello"),
        hex!("9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50")
    );
}
