//! Block representation helpers.

use crate::field::field_add;

/// Bytes in one AES block (and in an AES-128 key).
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// A block arranged as a 4x4 matrix, indexed `state[row][col]`.
pub type State = [[u8; 4]; 4];

/// Reshapes a flat block into a state, column by column.
#[inline]
pub fn block_to_state(block: &Block) -> State {
    let mut state = [[0u8; 4]; 4];
    for (row, cells) in state.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            *cell = block[row + 4 * col];
        }
    }
    state
}

/// Flattens a state back into a block. Inverse of [`block_to_state`].
#[inline]
pub fn state_to_block(state: &State) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    for (row, cells) in state.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            block[row + 4 * col] = *cell;
        }
    }
    block
}

/// Field-adds `rhs` into `dst` byte by byte.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d = field_add(*d, *r);
    }
}
