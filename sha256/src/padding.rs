//! Padding & framing: extends a message tail into final 64-byte blocks
//! carrying the `0x80` marker and the big-endian bit-length trailer.

use crate::constants::BLOCK_BYTES;

const TRAILER_BYTES: usize = 8;

/// The padded final block(s) of a message. At most two blocks: one when the
/// marker and trailer fit behind the tail, two when the trailer spills over.
pub(crate) struct PaddedTail {
    blocks: [[u8; BLOCK_BYTES]; 2],
    count: usize,
}

impl PaddedTail {
    pub(crate) fn blocks(&self) -> &[[u8; BLOCK_BYTES]] {
        &self.blocks[..self.count]
    }
}

/// Zero bytes between the `0x80` marker and the length trailer, i.e. the
/// minimum `p >= 0` with `msg_len + 1 + p + 8` a multiple of the block size.
pub(crate) fn zero_pad_len(msg_len: usize) -> usize {
    let used = (msg_len + 1 + TRAILER_BYTES) % BLOCK_BYTES;
    (BLOCK_BYTES - used) % BLOCK_BYTES
}

/// Frames the last partial block of a message.
///
/// `tail` holds the bytes past the final whole-block boundary (possibly
/// empty), `bit_len` the bit length of the entire message. The returned
/// blocks are compressed in order after all whole blocks.
pub(crate) fn pad_tail(tail: &[u8], bit_len: u64) -> PaddedTail {
    debug_assert!(tail.len() < BLOCK_BYTES);

    let mut blocks = [[0u8; BLOCK_BYTES]; 2];
    blocks[0][..tail.len()].copy_from_slice(tail);
    blocks[0][tail.len()] = 0x80;

    // Two blocks when the trailer spills past the first, i.e. fewer than
    // 8 bytes remain after the marker.
    let count = (tail.len() + 1 + zero_pad_len(tail.len()) + TRAILER_BYTES) / BLOCK_BYTES;
    blocks[count - 1][BLOCK_BYTES - TRAILER_BYTES..].copy_from_slice(&bit_len.to_be_bytes());

    PaddedTail { blocks, count }
}

#[cfg(test)]
mod test {
    use super::{pad_tail, zero_pad_len, PaddedTail, TRAILER_BYTES};
    use crate::constants::BLOCK_BYTES;

    fn padded_stream(tail: &[u8], bit_len: u64) -> Vec<u8> {
        let padded: PaddedTail = pad_tail(tail, bit_len);
        padded.blocks().concat()
    }

    #[test]
    fn test_empty_tail_is_one_marked_block() {
        let stream = padded_stream(&[], 0);
        assert_eq!(stream.len(), BLOCK_BYTES);
        assert_eq!(stream[0], 0x80);
        assert!(stream[1..56].iter().all(|&b| b == 0));
        assert_eq!(&stream[56..], &[0u8; 8]);
    }

    #[test]
    fn test_trailer_spills_at_56_bytes() {
        assert_eq!(padded_stream(&[0xab; 55], 55 * 8).len(), BLOCK_BYTES);
        assert_eq!(padded_stream(&[0xab; 56], 56 * 8).len(), 2 * BLOCK_BYTES);
        assert_eq!(padded_stream(&[0xab; 63], 63 * 8).len(), 2 * BLOCK_BYTES);
    }

    #[test]
    fn test_marker_follows_tail() {
        let tail = [0x11u8; 20];
        let stream = padded_stream(&tail, 20 * 8);
        assert_eq!(&stream[..20], &tail);
        assert_eq!(stream[20], 0x80);
        assert!(stream[21..56].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_trailer_is_big_endian_bit_len() {
        let stream = padded_stream(&[0u8; 3], 0x0102030405060708);
        let trailer = &stream[stream.len() - TRAILER_BYTES..];
        assert_eq!(trailer, &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
    }

    #[test]
    fn test_zero_pad_len_closes_every_block() {
        for msg_len in 0..=512 {
            let p = zero_pad_len(msg_len);
            assert_eq!((msg_len + 1 + p + TRAILER_BYTES) % BLOCK_BYTES, 0);
            assert!(p < BLOCK_BYTES);
        }
    }

    #[test]
    fn test_pad_tail_matches_zero_pad_len() {
        for msg_len in 0..512 {
            let tail_len = msg_len % BLOCK_BYTES;
            let tail = vec![0x5au8; tail_len];
            let stream = padded_stream(&tail, (msg_len * 8) as u64);
            let padded_total = msg_len - tail_len + stream.len();
            assert_eq!(padded_total, msg_len + 1 + zero_pad_len(msg_len) + TRAILER_BYTES);
        }
    }
}
