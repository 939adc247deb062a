//! AES round transformations.
//!
//! Byte-wise steps work on the flat [`Block`]; row and column steps work on the
//! 4x4 [`State`].

use crate::block::{xor_in_place, Block, State};
use crate::field::{field_add, field_mul};
use crate::sbox::{inv_sbox, sbox};

/// Coefficients of the MixColumns matrix.
pub const MIX_MATRIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// Coefficients of the InvMixColumns matrix.
pub const INV_MIX_MATRIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Adds (XORs) a round key into the block. Self-inverse.
#[inline]
pub fn add_round_key(block: &mut Block, round_key: &Block) {
    xor_in_place(block, round_key);
}

/// Applies SubBytes in place.
#[inline]
pub fn sub_bytes(block: &mut Block) {
    for byte in block.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(block: &mut Block) {
    for byte in block.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` columns.
#[inline]
pub fn shift_rows(state: &mut State) {
    for (r, row) in state.iter_mut().enumerate() {
        row.rotate_left(r);
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r` columns.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for (r, row) in state.iter_mut().enumerate() {
        row.rotate_right(r);
    }
}

fn multiply_columns(state: &mut State, matrix: &[[u8; 4]; 4]) {
    for col in 0..4 {
        let column = [state[0][col], state[1][col], state[2][col], state[3][col]];
        for (row, coeffs) in matrix.iter().enumerate() {
            state[row][col] = coeffs
                .iter()
                .zip(column.iter())
                .fold(0, |acc, (&c, &v)| field_add(acc, field_mul(c, v)));
        }
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    multiply_columns(state, &MIX_MATRIX);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    multiply_columns(state, &INV_MIX_MATRIX);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{block_to_state, state_to_block};
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn random_state(rng: &mut impl RngCore) -> State {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        block_to_state(&block)
    }

    #[test]
    fn shift_rows_moves_rows_left() {
        let mut state: State = [[0, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11], [12, 13, 14, 15]];
        shift_rows(&mut state);
        assert_eq!(
            state,
            [[0, 1, 2, 3], [5, 6, 7, 4], [10, 11, 8, 9], [15, 12, 13, 14]]
        );
        inv_shift_rows(&mut state);
        assert_eq!(state, [[0, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11], [12, 13, 14, 15]]);
    }

    #[test]
    fn mix_columns_known_column() {
        // Standard test column: db 13 53 45 -> 8e 4d a1 bc.
        let mut state: State = [[0xdb; 4], [0x13; 4], [0x53; 4], [0x45; 4]];
        mix_columns(&mut state);
        assert_eq!(state, [[0x8e; 4], [0x4d; 4], [0xa1; 4], [0xbc; 4]]);
        inv_mix_columns(&mut state);
        assert_eq!(state, [[0xdb; 4], [0x13; 4], [0x53; 4], [0x45; 4]]);
    }

    #[test]
    fn fips_first_round_steps() {
        // FIPS-197 C.1 round 1: start -> s_box -> s_row -> m_col.
        let start: Block = hex::decode("00102030405060708090a0b0c0d0e0f0")
            .expect("hex")
            .try_into()
            .expect("16 bytes");
        let mut block = start;
        sub_bytes(&mut block);
        assert_eq!(hex::encode(block), "63cab7040953d051cd60e0e7ba70e18c");
        let mut state = block_to_state(&block);
        shift_rows(&mut state);
        assert_eq!(hex::encode(state_to_block(&state)), "6353e08c0960e104cd70b751bacad0e7");
        mix_columns(&mut state);
        assert_eq!(hex::encode(state_to_block(&state)), "5f72641557f5bc92f7be3b291db9f91a");
    }

    #[test]
    fn inverses_undo_forward_steps() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..200 {
            let original = random_state(&mut rng);

            let mut state = original;
            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            assert_eq!(state, original);

            shift_rows(&mut state);
            inv_shift_rows(&mut state);
            assert_eq!(state, original);

            let mut block = state_to_block(&original);
            sub_bytes(&mut block);
            inv_sub_bytes(&mut block);
            assert_eq!(block, state_to_block(&original));

            let key = state_to_block(&random_state(&mut rng));
            add_round_key(&mut block, &key);
            add_round_key(&mut block, &key);
            assert_eq!(block, state_to_block(&original));
        }
    }
}
