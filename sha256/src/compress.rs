//! Block compression: folds one 64-byte block into the running hash state.

use crate::constants::{BLOCK_BYTES, SCHEDULE_WORDS, SHA256_K, STATE_WORDS};
use crate::extend::extend;

/// Runs the 64 compression rounds of one block over `state`.
///
/// Pure apart from the state it is handed: working variables and the message
/// schedule live on the stack and die with the call.
pub(crate) fn compress(state: &mut [u32; STATE_WORDS], block: &[u8; BLOCK_BYTES]) {
    let w = extend(block);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..SCHEDULE_WORDS {
        let s_1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);
        let ch = (e & f) ^ (!e & g);
        let temp1 = h
            .wrapping_add(s_1)
            .wrapping_add(ch)
            .wrapping_add(SHA256_K[i])
            .wrapping_add(w[i]);

        let s_0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let temp2 = s_0.wrapping_add(maj);

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    for (word, var) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(var);
    }
}
