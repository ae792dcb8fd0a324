use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::error::LacunaError;

/// A finalized dense section of the scanned stream.
///
/// Covers the half-open range `[start, start + length)`. The checksum
/// is the combined Fletcher-16 value of exactly the bytes inside the
/// section at the moment it closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Offset of the first byte of the section.
    pub start: u64,
    /// Number of bytes in the section. Zero when a sparse run begins at
    /// the start of the stream or directly follows another sparse run.
    pub length: u64,
    /// Fletcher-16 checksum of the section contents.
    pub checksum: u16,
}

impl Segment {
    /// Offset one past the last byte of the section.
    pub fn end(&self) -> u64 {
        self.start + self.length
    }
}

impl fmt::Display for Segment {
    /// Reference record line: `<start> + <length> = <end> CHK <checksum>`,
    /// all fields decimal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {} = {} CHK {}",
            self.start,
            self.length,
            self.end(),
            self.checksum
        )
    }
}

/// Consumer of finalized section records, in discovery order.
///
/// A record handed to the sink is never revised afterwards. A sink
/// error aborts the scan; the failed record is not retried.
pub trait SegmentSink {
    fn emit(&mut self, segment: &Segment) -> Result<(), LacunaError>;
}

/// Collector sink for library callers and tests.
impl SegmentSink for Vec<Segment> {
    fn emit(&mut self, segment: &Segment) -> Result<(), LacunaError> {
        self.push(*segment);
        Ok(())
    }
}

/// Sink writing one record line per section to an output stream.
pub struct LineSink<W: Write> {
    out: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Flush pending output and hand back the writer.
    pub fn into_inner(mut self) -> Result<W, LacunaError> {
        self.out.flush().map_err(LacunaError::Write)?;
        Ok(self.out)
    }
}

impl<W: Write> SegmentSink for LineSink<W> {
    fn emit(&mut self, segment: &Segment) -> Result<(), LacunaError> {
        writeln!(self.out, "{segment}").map_err(LacunaError::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_line_format() {
        let seg = Segment {
            start: 66,
            length: 13,
            checksum: 23564,
        };
        assert_eq!(seg.to_string(), "66 + 13 = 79 CHK 23564");
    }

    #[test]
    fn zero_length_record_line() {
        let seg = Segment {
            start: 0,
            length: 0,
            checksum: 0,
        };
        assert_eq!(seg.to_string(), "0 + 0 = 0 CHK 0");
    }

    #[test]
    fn line_sink_writes_one_line_per_record() {
        let mut sink = LineSink::new(Vec::new());
        sink.emit(&Segment {
            start: 0,
            length: 2,
            checksum: 1027,
        })
        .unwrap();
        sink.emit(&Segment {
            start: 66,
            length: 13,
            checksum: 23564,
        })
        .unwrap();
        let out = sink.into_inner().unwrap();
        assert_eq!(out, b"0 + 2 = 2 CHK 1027\n66 + 13 = 79 CHK 23564\n");
    }
}
