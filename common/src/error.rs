use std::io;

use thiserror::Error;

/// Failures while reading a timing report from the input stream.
///
/// The reports are positional: there is no recovery once a token is off, so
/// every variant aborts the run.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: expected {expected}, got {token:?}")]
    Malformed {
        line: usize,
        expected: &'static str,
        token: String,
    },
    #[error("input ended after line {line}: expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },
    #[error(transparent)]
    Io(#[from] io::Error),
}
