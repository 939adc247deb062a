//! Input failures detected before the cipher runs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::message::Direction;

/// Fatal problems with the key or payload files. None of these are retried.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be opened or read.
    #[error("Can't open file: {}", .path.display())]
    Unreadable {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The key file is not exactly 16 bytes long.
    #[error("Bad key file: {}", .path.display())]
    BadKey {
        /// Key file path.
        path: PathBuf,
        /// Observed length in bytes.
        len: usize,
    },

    /// The payload length is not a whole number of blocks.
    #[error("Bad {direction} file length: {}", .path.display())]
    BadPayload {
        /// Input file path.
        path: PathBuf,
        /// Observed length in bytes.
        len: usize,
        /// Whether the payload was meant to be plaintext or ciphertext.
        direction: Direction,
    },
}
