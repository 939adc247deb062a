//! Command-line surface shared by the `encrypt` and `decrypt` binaries.

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};
use tracing::info;

use crate::io::{parse_key, read_file, write_output, Payload};
use crate::message::{process, Direction};

/// Positional arguments: exactly three files.
///
/// No flags are recognised; anything starting with `-` is a file name.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    disable_help_flag = true,
    disable_version_flag = true,
    allow_hyphen_values = true
)]
pub struct Args {
    /// File holding the 16-byte AES-128 key.
    #[arg(value_name = "KEY_FILE", allow_hyphen_values = true)]
    pub key_file: PathBuf,
    /// Input file; its length must be a multiple of 16 bytes.
    #[arg(value_name = "INPUT_FILE", allow_hyphen_values = true)]
    pub input_file: PathBuf,
    /// Output file, written with the same length as the input.
    #[arg(value_name = "OUTPUT_FILE", allow_hyphen_values = true)]
    pub output_file: PathBuf,
}

/// Builds the clap command for one direction.
pub fn command(direction: Direction) -> clap::Command {
    let program = direction.program();
    let about = match direction {
        Direction::Encrypt => "Encrypt a file block by block with AES-128",
        Direction::Decrypt => "Decrypt a file block by block with AES-128",
    };
    Args::command()
        .name(program)
        .bin_name(program)
        .about(about)
        .override_usage(format!("{program} <key-file> <input-file> <output-file>"))
}

/// Parses the process arguments, exiting with a usage error on a bad count.
pub fn parse_args(direction: Direction) -> Args {
    let matches = command(direction).get_matches();
    Args::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
}

/// Reads both inputs, validates them, transforms the payload and writes it out.
///
/// Both files are read before either is validated; the key length is checked
/// before the payload length.
pub fn run(direction: Direction, args: &Args) -> Result<()> {
    let key_bytes = read_file(&args.key_file)?;
    let data = read_file(&args.input_file)?;

    let key = parse_key(&args.key_file, key_bytes)?;
    let mut payload = Payload::new(&args.input_file, data, direction)?;

    process(&mut payload, &key, direction);
    write_output(&args.output_file, payload.as_bytes())?;

    info!(
        direction = direction.program(),
        blocks = payload.block_count(),
        output = %args.output_file.display(),
        "done"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn command_definition_is_valid() {
        command(Direction::Encrypt).debug_assert();
        command(Direction::Decrypt).debug_assert();
    }

    #[test]
    fn requires_exactly_three_paths() {
        let cmd = || command(Direction::Encrypt);
        assert!(cmd().try_get_matches_from(["encrypt", "k", "in"]).is_err());
        assert!(cmd()
            .try_get_matches_from(["encrypt", "k", "in", "out", "extra"])
            .is_err());

        let matches = cmd()
            .try_get_matches_from(["encrypt", "k", "in", "out"])
            .expect("three args parse");
        let args = Args::from_arg_matches(&matches).expect("args");
        assert_eq!(args.key_file, PathBuf::from("k"));
        assert_eq!(args.output_file, PathBuf::from("out"));
    }

    #[test]
    fn hyphen_led_names_are_files() {
        let matches = command(Direction::Encrypt)
            .try_get_matches_from(["encrypt", "-key", "-data.bin", "--out"])
            .expect("three hyphen-led paths parse");
        let args = Args::from_arg_matches(&matches).expect("args");
        assert_eq!(args.key_file, PathBuf::from("-key"));
        assert_eq!(args.input_file, PathBuf::from("-data.bin"));
        assert_eq!(args.output_file, PathBuf::from("--out"));
    }

    #[test]
    fn help_and_version_are_wrong_counts() {
        for flag in ["--help", "-h", "--version", "-V"] {
            let err = command(Direction::Decrypt)
                .try_get_matches_from(["decrypt", flag])
                .unwrap_err();
            assert_eq!(
                err.kind(),
                clap::error::ErrorKind::MissingRequiredArgument,
                "{flag}"
            );
            assert_ne!(err.exit_code(), 0);
        }
    }

    #[test]
    fn usage_names_the_program() {
        let usage = command(Direction::Decrypt).render_usage().to_string();
        assert!(usage.contains("decrypt <key-file> <input-file> <output-file>"));
    }

    #[test]
    fn bad_key_is_reported_before_bad_payload() {
        let dir = tempdir().expect("tempdir");
        let args = Args {
            key_file: dir.path().join("key"),
            input_file: dir.path().join("in"),
            output_file: dir.path().join("out"),
        };
        fs::write(&args.key_file, [0u8; 17]).expect("write key");
        fs::write(&args.input_file, [0u8; 20]).expect("write input");

        let err = run(Direction::Encrypt, &args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::BadKey { len: 17, .. })
        ));
        assert!(!args.output_file.exists());
    }

    #[test]
    fn unreadable_input_is_reported_before_bad_key() {
        let dir = tempdir().expect("tempdir");
        let args = Args {
            key_file: dir.path().join("key"),
            input_file: dir.path().join("missing"),
            output_file: dir.path().join("out"),
        };
        fs::write(&args.key_file, [0u8; 15]).expect("write key");

        let err = run(Direction::Decrypt, &args).unwrap_err();
        match err.downcast_ref::<InputError>() {
            Some(InputError::Unreadable { path, .. }) => assert_eq!(path, &args.input_file),
            other => panic!("expected Unreadable, got {other:?}"),
        }
        assert!(!args.output_file.exists());
    }

    #[test]
    fn round_trips_through_files() {
        let dir = tempdir().expect("tempdir");
        let key_file = dir.path().join("key");
        fs::write(&key_file, (0u8..16).collect::<Vec<_>>()).expect("write key");
        let plain = dir.path().join("plain");
        fs::write(&plain, b"sixteen byte msgand another one!").expect("write plain");

        let enc = Args {
            key_file: key_file.clone(),
            input_file: plain.clone(),
            output_file: dir.path().join("cipher"),
        };
        run(Direction::Encrypt, &enc).expect("encrypt");

        let dec = Args {
            key_file,
            input_file: enc.output_file.clone(),
            output_file: dir.path().join("plain2"),
        };
        run(Direction::Decrypt, &dec).expect("decrypt");

        assert_eq!(
            fs::read(&dec.output_file).expect("read"),
            fs::read(&plain).expect("read")
        );
    }
}
