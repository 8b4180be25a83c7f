//! An implementation of the SHA-256 cryptographic hash algorithm.
//!
//! The hash runs in three stages executed in strict sequence: padding &
//! framing extends the message into a stream of 64-byte blocks ending in a
//! `0x80` marker and a big-endian bit-length trailer, each block is expanded
//! into a 64-word message schedule and folded into the 8-word running state
//! by 64 compression rounds, and the final state is serialized big-endian
//! into the 32-byte digest.
//!
//! The entire computation is per-call stack data; nothing is shared between
//! invocations, so concurrent calls are safe by construction. There is no
//! streaming or keyed variant.
//!
//! # Usage
//!
//! ```rust
//! use sha256::sha256_digest;
//!
//! let digest = sha256_digest(b"abc").unwrap();
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

mod compress;
pub mod constants;
mod extend;
mod hash;
mod padding;

pub use hash::{sha256_digest, Digest, Sha256Error};
