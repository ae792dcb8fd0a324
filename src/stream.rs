//! Streaming drivers connecting byte sources to the scanners.
//!
//! The sources are plain [`std::io::Read`] implementations; bytes are
//! pulled in fixed-size chunks and fed to the scanners in order. Read
//! failures abort the scan before any further record is emitted and are
//! surfaced distinctly from sink write failures.

use std::io::{ErrorKind, Read};

use crate::config::ScanConfig;
use crate::error::LacunaError;
use crate::scanner::SegmentScanner;
use crate::segment::SegmentSink;
use crate::sparse::{SparseRun, SparseScanner};
use crate::stats::ScanStats;

const CHUNK_SIZE: usize = 64 * 1024;

/// Scan `reader` to end-of-stream, emitting dense section records to
/// `sink`.
pub fn scan_reader<R: Read, S: SegmentSink>(
    mut reader: R,
    config: &ScanConfig,
    sink: &mut S,
) -> Result<ScanStats, LacunaError> {
    config.validate()?;
    let mut scanner = SegmentScanner::new(config.threshold);
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(LacunaError::Read(e)),
        };
        scanner.push_slice(&buf[..n], sink)?;
    }
    scanner.finish(sink)
}

/// Collect the sparse runs of `reader`.
pub fn scan_sparse_runs<R: Read>(
    mut reader: R,
    config: &ScanConfig,
) -> Result<Vec<SparseRun>, LacunaError> {
    config.validate()?;
    let mut scanner = SparseScanner::new(config.threshold);
    let mut runs = Vec::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(LacunaError::Read(e)),
        };
        for &b in &buf[..n] {
            runs.extend(scanner.push(b));
        }
    }
    runs.extend(scanner.finish());
    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Segment;
    use std::io::{self, Cursor};

    /// Reader that fails after yielding a prefix.
    struct FailingReader {
        prefix: Vec<u8>,
        pos: usize,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.pos < self.prefix.len() {
                buf[0] = self.prefix[self.pos];
                self.pos += 1;
                Ok(1)
            } else {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "source broke"))
            }
        }
    }

    #[test]
    fn scan_reader_matches_in_memory_scan() {
        let mut data = vec![1u8, 2];
        data.extend_from_slice(&[0; 64]);
        data.extend_from_slice(&[3, 4]);
        let mut segments: Vec<Segment> = Vec::new();
        let stats = scan_reader(Cursor::new(&data), &ScanConfig::default(), &mut segments).unwrap();
        assert_eq!(segments, crate::scanner::scan_bytes(&data, 64));
        assert_eq!(stats.bytes, data.len() as u64);
        assert_eq!(stats.dense_bytes, 4);
        assert_eq!(stats.sparse_bytes, 64);
    }

    #[test]
    fn read_error_aborts_without_partial_records() {
        // The open section at the time of the failure must not leak out.
        let reader = FailingReader {
            prefix: vec![1, 2, 3],
            pos: 0,
        };
        let mut segments: Vec<Segment> = Vec::new();
        let err = scan_reader(reader, &ScanConfig::default(), &mut segments).unwrap_err();
        assert!(matches!(err, LacunaError::Read(_)));
        assert!(segments.is_empty());
    }

    #[test]
    fn zero_threshold_rejected_by_driver() {
        let mut segments: Vec<Segment> = Vec::new();
        let err = scan_reader(Cursor::new(&[1u8][..]), &ScanConfig::new(0), &mut segments)
            .unwrap_err();
        assert!(matches!(err, LacunaError::Config(_)));
    }

    #[test]
    fn sparse_runs_over_reader() {
        let mut data = vec![9u8; 5];
        data.extend_from_slice(&[0; 70]);
        data.push(9);
        let runs = scan_sparse_runs(Cursor::new(&data), &ScanConfig::default()).unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].start, 5);
        assert_eq!(runs[0].length, 70);
    }
}
