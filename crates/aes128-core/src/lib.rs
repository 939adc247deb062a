//! AES-128 built from first principles.
//!
//! Layers, each depending only on the ones above it in this list:
//! - GF(2^8) field arithmetic.
//! - Forward and inverse S-box tables.
//! - The AES-128 key schedule (11 round keys).
//! - Round transformations and single-block encryption and decryption.
//!
//! Every block is processed on its own. There is no chaining mode and no padding:
//! callers hand in whole 16-byte blocks. The implementation aims for clarity and
//! testability rather than constant-time guarantees; it should not be treated as
//! side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod field;
mod key;
mod round;
mod sbox;
mod schedule;

pub use crate::block::{
    block_to_state, state_to_block, xor_in_place, Block, State, BLOCK_SIZE,
};
pub use crate::cipher::{decrypt_block, decrypt_block_with, encrypt_block, encrypt_block_with};
pub use crate::field::{field_add, field_mul, field_sub, xtime, HIGH_BIT, REDUCER};
pub use crate::key::{Aes128Key, RoundKeys, Word, ROUNDS};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes, INV_MIX_MATRIX, MIX_MATRIX,
};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, SBOX};
pub use crate::schedule::{expand_key, g_function, ROUND_CONSTANTS};
