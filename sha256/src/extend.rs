//! Message-schedule expansion: one 64-byte block becomes 64 schedule words.

use crate::constants::{BLOCK_BYTES, SCHEDULE_WORDS};

/// Expands a block into the full message schedule.
///
/// The first 16 words are the block itself read big-endian; each further
/// word mixes four earlier ones:
///
/// s0 := (w[i-15] rightrotate 7) xor (w[i-15] rightrotate 18) xor (w[i-15] rightshift 3)
/// s1 := (w[i-2] rightrotate 17) xor (w[i-2] rightrotate 19) xor (w[i-2] rightshift 10)
/// w[i] := w[i-16] + s0 + w[i-7] + s1
pub(crate) fn extend(block: &[u8; BLOCK_BYTES]) -> [u32; SCHEDULE_WORDS] {
    let mut w = [0u32; SCHEDULE_WORDS];
    for (i, word) in block.chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes(word.try_into().unwrap());
    }

    for i in 16..SCHEDULE_WORDS {
        let s_0 = w[i - 15].rotate_right(7) ^ w[i - 15].rotate_right(18) ^ (w[i - 15] >> 3);
        let s_1 = w[i - 2].rotate_right(17) ^ w[i - 2].rotate_right(19) ^ (w[i - 2] >> 10);
        w[i] = w[i - 16]
            .wrapping_add(s_0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s_1);
    }
    w
}
