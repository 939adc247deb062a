//! AES-128 block encryption and decryption.

use crate::block::{block_to_state, state_to_block, Block};
use crate::key::{Aes128Key, RoundKeys, ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::schedule::expand_key;

/// Encrypts a single 16-byte block, expanding `key` for this call only.
pub fn encrypt_block(block: &Block, key: &Aes128Key) -> Block {
    encrypt_block_with(block, &expand_key(key))
}

/// Decrypts a single 16-byte block, expanding `key` for this call only.
pub fn decrypt_block(block: &Block, key: &Aes128Key) -> Block {
    decrypt_block_with(block, &expand_key(key))
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block_with(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut data = *block;

    add_round_key(&mut data, round_keys.get(0));

    for round in 1..=ROUNDS {
        sub_bytes(&mut data);
        let mut state = block_to_state(&data);
        shift_rows(&mut state);
        if round != ROUNDS {
            mix_columns(&mut state);
        }
        data = state_to_block(&state);
        add_round_key(&mut data, round_keys.get(round));
    }

    data
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block_with(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut data = *block;

    for round in (1..=ROUNDS).rev() {
        add_round_key(&mut data, round_keys.get(round));
        let mut state = block_to_state(&data);
        if round != ROUNDS {
            inv_mix_columns(&mut state);
        }
        inv_shift_rows(&mut state);
        data = state_to_block(&state);
        inv_sub_bytes(&mut data);
    }
    add_round_key(&mut data, round_keys.get(0));

    data
}
