//! Driver and output types: frames the message, threads the state through
//! every block, and serializes the digest.

use crate::compress::compress;
use crate::constants::{BLOCK_BYTES, DIGEST_BYTES, H256_256};
use crate::padding::pad_tail;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A finished SHA-256 digest: the 8 final state words, big-endian.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest(pub [u8; DIGEST_BYTES]);

impl Digest {
    pub fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    /// Lowercase hex rendering, the form test vectors are published in.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Digest> for [u8; DIGEST_BYTES] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

/// Caller-contract violations. The algorithm itself cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sha256Error {
    /// The message bit length does not fit the 64-bit trailer.
    MessageTooLong { bytes: usize },
}

impl Display for Sha256Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Sha256Error::MessageTooLong { bytes } => {
                write!(f, "{bytes}-byte message overflows the 64-bit length trailer")
            }
        }
    }
}

impl std::error::Error for Sha256Error {}

/// Computes the SHA-256 digest of `msg`.
///
/// Whole blocks are compressed straight from the caller's slice; the tail is
/// framed by the padding stage into at most two further blocks. The only
/// error case is a message whose bit length does not fit the 64-bit
/// trailer, refused before any computation.
pub fn sha256_digest(msg: &[u8]) -> Result<Digest, Sha256Error> {
    let bit_len = (msg.len() as u64)
        .checked_mul(8)
        .ok_or(Sha256Error::MessageTooLong { bytes: msg.len() })?;
    log::trace!("hashing {} bytes", msg.len());

    let mut state = H256_256;
    let mut blocks = msg.chunks_exact(BLOCK_BYTES);
    for block in &mut blocks {
        compress(&mut state, block.try_into().unwrap());
    }
    for block in pad_tail(blocks.remainder(), bit_len).blocks() {
        compress(&mut state, block);
    }

    let mut digest = [0u8; DIGEST_BYTES];
    for (chunk, word) in digest.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    Ok(Digest(digest))
}
