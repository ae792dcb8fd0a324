//! Bitwise combination of two byte streams.
//!
//! Combines an input stream against a second stream of at least equal
//! length, byte for byte. Useful for one-time-pad encryption schemes,
//! recombining split cryptographic keys, parity of striped data, or
//! masking monochromatic bitmap images.

use std::io::{ErrorKind, Read, Write};

use clap::ValueEnum;

use crate::error::LacunaError;

const CHUNK_SIZE: usize = 8 * 1024;

/// Bitwise operation applied byte-for-byte by [`combine_streams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CombineOp {
    /// Exclusive or.
    Xor,
    /// Bitwise and.
    And,
    /// Bitwise or.
    Or,
}

impl CombineOp {
    pub fn apply(self, a: u8, b: u8) -> u8 {
        match self {
            CombineOp::Xor => a ^ b,
            CombineOp::And => a & b,
            CombineOp::Or => a | b,
        }
    }
}

/// Combine `input` with `other`, writing the result to `out`.
///
/// Stops at the end of `input`; trailing bytes in `other` are ignored.
/// Fails with [`LacunaError::CombineExhausted`] when `other` ends
/// first. Returns the number of bytes written.
pub fn combine_streams<R, K, W>(
    mut input: R,
    mut other: K,
    op: CombineOp,
    out: &mut W,
) -> Result<u64, LacunaError>
where
    R: Read,
    K: Read,
    W: Write,
{
    let mut in_buf = vec![0u8; CHUNK_SIZE];
    let mut other_buf = vec![0u8; CHUNK_SIZE];
    let mut written = 0u64;
    loop {
        let n = match input.read(&mut in_buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(LacunaError::Read(e)),
        };
        match other.read_exact(&mut other_buf[..n]) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                return Err(LacunaError::CombineExhausted)
            }
            Err(e) => return Err(LacunaError::Read(e)),
        }
        for i in 0..n {
            in_buf[i] = op.apply(in_buf[i], other_buf[i]);
        }
        out.write_all(&in_buf[..n]).map_err(LacunaError::Write)?;
        written += n as u64;
    }
    out.flush().map_err(LacunaError::Write)?;
    Ok(written)
}
