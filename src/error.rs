use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LacunaError {
    /// The byte source failed mid-scan. The scan stops immediately and
    /// no further records are emitted.
    #[error("error reading from input stream: {0}")]
    Read(#[source] io::Error),

    /// The record sink or output stream failed. The record being
    /// delivered is lost and is not retried.
    #[error("error writing to output stream: {0}")]
    Write(#[source] io::Error),

    /// The combine data stream ended before the input stream did.
    #[error("ran out of combine data: other stream is shorter than the input")]
    CombineExhausted,

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}
