//! File-level glue around `aes128-core`.
//!
//! Reads a 16-byte key file and a payload whose length is a multiple of 16,
//! transforms every block independently, and writes the result with the same
//! length. All input validation happens here, before the cipher is invoked.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod error;
pub mod io;
pub mod logging;
pub mod message;

pub use crate::error::InputError;
pub use crate::io::Payload;
pub use crate::message::Direction;
