//! Whole-message processing, one independent block at a time.
//!
//! Blocks never feed into each other (no IV, no chaining), so the expanded
//! schedule is shared read-only and blocks are spread across rayon's pool.

use std::fmt;

use aes128_core::{
    decrypt_block_with, encrypt_block_with, expand_key, Aes128Key, Block, RoundKeys, BLOCK_SIZE,
};
use rayon::prelude::*;
use tracing::debug;

use crate::io::Payload;

/// Which way the payload is transformed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext in, ciphertext out.
    Encrypt,
    /// Ciphertext in, plaintext out.
    Decrypt,
}

impl Direction {
    /// Program name for this direction.
    pub fn program(self) -> &'static str {
        match self {
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
        }
    }

    /// What the input file holds.
    pub fn payload_noun(self) -> &'static str {
        match self {
            Self::Encrypt => "plaintext",
            Self::Decrypt => "ciphertext",
        }
    }

    fn block_fn(self) -> fn(&Block, &RoundKeys) -> Block {
        match self {
            Self::Encrypt => encrypt_block_with,
            Self::Decrypt => decrypt_block_with,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.payload_noun())
    }
}

/// Transforms every block of `payload` in place.
pub fn process(payload: &mut Payload, key: &Aes128Key, direction: Direction) {
    let round_keys = expand_key(key);
    let transform = direction.block_fn();

    payload
        .as_mut_bytes()
        .par_chunks_exact_mut(BLOCK_SIZE)
        .for_each(|chunk| {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            chunk.copy_from_slice(&transform(&block, &round_keys));
        });

    debug!(
        blocks = payload.block_count(),
        direction = direction.program(),
        "processed payload"
    );
}
