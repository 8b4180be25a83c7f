//! Acceptance harness: feeds published SHA-256 vectors through the library
//! and compares the output byte for byte.

use anyhow::{bail, Result};
use sha256::sha256_digest;

/// Hex-encoded (message, expected digest) pairs. The boundary cases sit at
/// 62 bytes (trailer spills into a second block), 64 bytes (exactly one
/// whole block plus a padding-only block) and 65 bytes (one block plus one).
const VECTORS: &[(&str, &str)] = &[
    (
        "",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    ),
    (
        "00",
        "6e340b9cffb37a989ca544e6bb780a2c78901d3fb33738768511a30617afa01d",
    ),
    (
        "616263",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    ),
    // "The quick brown fox jumps over the lazy dog."
    (
        "54686520717569636b2062726f776e20666f78206a756d7073206f76657220746865206c617a7920646f672e",
        "ef537f25c895bfa782526529a9b63d97aa631564d5d789c2b765448c8635fb6c",
    ),
    (
        "0000000000000000000000000000000000000000000000000000000000000000\
         000000000000000000000000000000000000000000000000000000000000",
        "1ebb2bdc5ce08e6e90b3ede72a8ef315e3e1bced3a3c458f69b6d7eeff9e4f3a",
    ),
    (
        "0000000000000000000000000000000000000000000000000000000000000000\
         0000000000000000000000000000000000000000000000000000000000000000",
        "f5a5fd42d16a20302798ef6ed309979b43003d2320d9f0e8ea9831a92759fb4b",
    ),
    (
        "0000000000000000000000000000000000000000000000000000000000000000\
         000000000000000000000000000000000000000000000000000000000000000000",
        "98ce42deef51d40269d542f5314bef2c7468d401ad5d85168bfab4c0108f75f7",
    ),
    // 241 bytes: fifteen repeats of a 16-byte pattern plus a trailing zero.
    (
        "4dfbde451f444d2c2a6e3afe4c543fe64dfbde451f444d2c2a6e3afe4c543fe6\
         4dfbde451f444d2c2a6e3afe4c543fe64dfbde451f444d2c2a6e3afe4c543fe6\
         4dfbde451f444d2c2a6e3afe4c543fe64dfbde451f444d2c2a6e3afe4c543fe6\
         4dfbde451f444d2c2a6e3afe4c543fe64dfbde451f444d2c2a6e3afe4c543fe6\
         4dfbde451f444d2c2a6e3afe4c543fe64dfbde451f444d2c2a6e3afe4c543fe6\
         4dfbde451f444d2c2a6e3afe4c543fe64dfbde451f444d2c2a6e3afe4c543fe6\
         4dfbde451f444d2c2a6e3afe4c543fe64dfbde451f444d2c2a6e3afe4c543fe6\
         4dfbde451f444d2c2a6e3afe4c543fe600",
        "f408ef6cd57f6a22a504e440722fe8aa9462ab8cf70480fd52fc06acfb44a2c3",
    ),
];

fn run_vectors() -> Result<()> {
    for (msg_hex, want_hex) in VECTORS {
        let msg = hex::decode(msg_hex)?;
        let digest = sha256_digest(&msg)?;
        let hash_hex = digest.to_hex();
        if hash_hex != *want_hex {
            log::error!("gave: {msg_hex}");
            log::error!("want: {want_hex}");
            log::error!("hash: {hash_hex}");
            bail!("digest mismatch for {}-byte message", msg.len());
        }
        log::info!("ok: {} bytes -> {hash_hex}", msg.len());
    }
    println!("passed: {} vectors", VECTORS.len());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::try_init().unwrap_or_default();
    run_vectors()
}
