use hex_literal::hex;
use ripemd160::Ripemd160;

fn seq(n: usize) -> Vec<u8> {
    (0..n).map(|i| i as u8).collect()
}

#[test]
fn bosselaers_vectors() {
    assert_eq!(Ripemd160::digest(b""), hex!("9c1185a5c5e9fc54612808977ee8f548b2258d31"));
    assert_eq!(Ripemd160::digest(b"a"), hex!("0bdc9d2d256b3ee9daae347be6f4dc835a467ffe"));
    assert_eq!(Ripemd160::digest(b"abc"), hex!("8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"));
    assert_eq!(
        Ripemd160::digest(b"message digest"),
        hex!("5d0689ef49d2fae572b881b123a85ffa21595f36")
    );
    assert_eq!(
        Ripemd160::digest(b"abcdefghijklmnopqrstuvwxyz"),
        hex!("f71c27109c692c1b56bbdceb5b9d2865b3708dbc")
    );
    assert_eq!(
        Ripemd160::digest(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        hex!("12a053384a9c0c88e405a06c27dcf49ada62eb2b")
    );
    assert_eq!(
        Ripemd160::digest(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"),
        hex!("b0e20b6e3116640286ed3a87a5713079b21f5189")
    );
    assert_eq!(
        Ripemd160::digest(b"12345678901234567890123456789012345678901234567890123456789012345678901234567890"),
        hex!("9b752e45573d4b39f4dbd3323cab82bf63326bfb")
    );
}

#[test]
fn padding_boundaries() {
    assert_eq!(Ripemd160::digest(&seq(55)), hex!("3c86963b3ff646a65ae42996e9664c747cc7e5e6"));
    assert_eq!(Ripemd160::digest(&seq(56)), hex!("ebdd79cfd4fd9949ef8089673d2620427f487cfb"));
    assert_eq!(Ripemd160::digest(&seq(63)), hex!("6d31d3d634b4a7aa15914c239576eb1956f2d9a4"));
    assert_eq!(Ripemd160::digest(&seq(64)), hex!("2581f5e9f957b44b0fa24d31996de47409dd1e0f"));
    assert_eq!(Ripemd160::digest(&seq(65)), hex!("109949b95341eeea7365e8ac4d0d3883d98f709a"));
}

#[test]
fn million_a() {
    let data = vec![b'a'; 1_000_000];
    assert_eq!(Ripemd160::digest(&data), hex!("52783243c1697bdbe16d37f97f68f08325dc1528"));
}
