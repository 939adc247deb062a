//! `encrypt <key-file> <input-file> <output-file>`

#![forbid(unsafe_code)]

use aes128_cli::{cli, logging, Direction};
use anyhow::Result;

fn main() -> Result<()> {
    logging::init();
    let args = cli::parse_args(Direction::Encrypt);
    cli::run(Direction::Encrypt, &args)
}
