//! Key source, payload source and output sink.

use std::fs;
use std::path::Path;

use aes128_core::{Aes128Key, BLOCK_SIZE};
use anyhow::{Context, Result};
use tracing::debug;

use crate::error::InputError;
use crate::message::Direction;

/// A byte buffer whose length is known to be a whole number of blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payload {
    bytes: Vec<u8>,
}

impl Payload {
    /// Validates that `bytes` splits into 16-byte blocks with nothing left over.
    pub fn new(path: &Path, bytes: Vec<u8>, direction: Direction) -> Result<Self, InputError> {
        if bytes.len() % BLOCK_SIZE != 0 {
            return Err(InputError::BadPayload {
                path: path.to_path_buf(),
                len: bytes.len(),
                direction,
            });
        }
        Ok(Self { bytes })
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload holds no blocks at all.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of 16-byte blocks.
    pub fn block_count(&self) -> usize {
        self.bytes.len() / BLOCK_SIZE
    }

    /// Borrow the bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Consume the payload, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Reads a whole file.
pub fn read_file(path: &Path) -> Result<Vec<u8>, InputError> {
    let bytes = fs::read(path).map_err(|source| InputError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), len = bytes.len(), "read file");
    Ok(bytes)
}

/// Turns raw key-file contents into a key; anything but 16 bytes is rejected.
pub fn parse_key(path: &Path, bytes: Vec<u8>) -> Result<Aes128Key, InputError> {
    let key: [u8; BLOCK_SIZE] = bytes.try_into().map_err(|rejected: Vec<u8>| {
        InputError::BadKey {
            path: path.to_path_buf(),
            len: rejected.len(),
        }
    })?;
    Ok(Aes128Key::from(key))
}

/// Writes `data` to `path` verbatim, replacing any existing file.
pub fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).with_context(|| format!("Can't open file: {}", path.display()))?;
    debug!(path = %path.display(), len = data.len(), "wrote file");
    Ok(())
}
