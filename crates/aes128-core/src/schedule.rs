//! AES-128 key schedule.

use crate::field::field_add;
use crate::key::{Aes128Key, RoundKeys, Word, ROUNDS};
use crate::sbox::sbox;

/// Round constants for rounds 1..=10; each is the previous one times x.
pub const ROUND_CONSTANTS: [u8; ROUNDS] = [
    0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36,
];

/// Key schedule core: rotate, substitute, then inject the round constant.
///
/// `round` must be in `1..=10`.
pub fn g_function(word: &Word, round: usize) -> Word {
    let [w0, w1, w2, w3] = *word;
    [
        field_add(sbox(w1), ROUND_CONSTANTS[round - 1]),
        sbox(w2),
        sbox(w3),
        sbox(w0),
    ]
}

fn word_at(key: &[u8; 16], index: usize) -> Word {
    let offset = index * 4;
    [key[offset], key[offset + 1], key[offset + 2], key[offset + 3]]
}

fn add_words(a: &Word, b: &Word) -> Word {
    [
        field_add(a[0], b[0]),
        field_add(a[1], b[1]),
        field_add(a[2], b[2]),
        field_add(a[3], b[3]),
    ]
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut round_keys = [[0u8; 16]; ROUNDS + 1];
    round_keys[0] = *key.as_bytes();

    for round in 1..=ROUNDS {
        let prev = round_keys[round - 1];
        let mut carry = g_function(&word_at(&prev, 3), round);
        // Each new word chains off the word just produced, not the previous round's.
        for word_idx in 0..4 {
            carry = add_words(&carry, &word_at(&prev, word_idx));
            round_keys[round][word_idx * 4..word_idx * 4 + 4].copy_from_slice(&carry);
        }
    }

    RoundKeys(round_keys)
}
