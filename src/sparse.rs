//! Sparse-run location without checksums.
//!
//! The reporter only needs the offsets and lengths of qualifying zero
//! runs. Nothing is checksummed, so a run that turns out too short
//! needs no reclassification and is simply dropped.

use std::fmt;

/// A run of zero bytes long enough to count as sparse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparseRun {
    /// Offset of the first zero byte of the run.
    pub start: u64,
    /// Number of zero bytes in the run.
    pub length: u64,
}

impl SparseRun {
    /// Offset one past the last zero byte of the run.
    pub fn end(&self) -> u64 {
        self.start + self.length
    }

    /// Compact `@<start>+<length>` form used by the terse report format.
    pub fn format_at(&self) -> String {
        format!("@{}+{}", self.start, self.length)
    }
}

impl fmt::Display for SparseRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} = {}", self.start, self.length, self.end())
    }
}

/// Streaming zero-run locator.
#[derive(Debug)]
pub struct SparseScanner {
    threshold: u64,
    offset: u64,
    zeros: u64,
}

impl SparseScanner {
    pub fn new(threshold: u64) -> Self {
        assert!(threshold > 0, "threshold must be nonzero");
        Self {
            threshold,
            offset: 0,
            zeros: 0,
        }
    }

    /// Consume one byte, returning the sparse run this byte terminated,
    /// if any.
    pub fn push(&mut self, byte: u8) -> Option<SparseRun> {
        let run = if byte != 0 {
            self.take_run()
        } else {
            self.zeros += 1;
            None
        };
        self.offset += 1;
        run
    }

    /// Signal end-of-stream, returning a run that reached the end, if
    /// any.
    pub fn finish(mut self) -> Option<SparseRun> {
        self.take_run()
    }

    fn take_run(&mut self) -> Option<SparseRun> {
        let zeros = std::mem::take(&mut self.zeros);
        if zeros >= self.threshold {
            Some(SparseRun {
                start: self.offset - zeros,
                length: zeros,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs_of(data: &[u8], threshold: u64) -> Vec<SparseRun> {
        let mut scanner = SparseScanner::new(threshold);
        let mut runs: Vec<SparseRun> = data.iter().filter_map(|&b| scanner.push(b)).collect();
        runs.extend(scanner.finish());
        runs
    }

    #[test]
    fn short_run_is_dropped() {
        let mut data = vec![0u8; 63];
        data.push(1);
        assert!(runs_of(&data, 64).is_empty());
    }

    #[test]
    fn run_at_threshold_is_reported() {
        let mut data = vec![7u8];
        data.extend_from_slice(&[0; 64]);
        data.push(7);
        assert_eq!(
            runs_of(&data, 64),
            vec![SparseRun {
                start: 1,
                length: 64
            }]
        );
    }

    #[test]
    fn run_reaching_end_of_stream() {
        let mut data = vec![1u8, 2, 3];
        data.extend_from_slice(&[0; 100]);
        assert_eq!(
            runs_of(&data, 64),
            vec![SparseRun {
                start: 3,
                length: 100
            }]
        );
    }

    #[test]
    fn whole_stream_can_be_one_run() {
        assert_eq!(
            runs_of(&[0u8; 64], 64),
            vec![SparseRun {
                start: 0,
                length: 64
            }]
        );
    }

    #[test]
    fn display_formats() {
        let run = SparseRun {
            start: 5,
            length: 70,
        };
        assert_eq!(run.to_string(), "5 + 70 = 75");
        assert_eq!(run.format_at(), "@5+70");
    }
}
