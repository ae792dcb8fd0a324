//! Scan totals reported by the drivers.
//!
//! `ScanStats` tracks byte and record counts for one completed scan
//! without any logging or persistence of its own.

/// Byte and record totals for one completed scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Total bytes consumed from the source.
    pub bytes: u64,
    /// Dense section records emitted.
    pub segments: u64,
    /// Bytes confirmed dense.
    pub dense_bytes: u64,
    /// Bytes skipped as sparse.
    pub sparse_bytes: u64,
}

impl ScanStats {
    pub fn report(&self) {
        eprintln!(
            "Scanned {} bytes: {} dense sections ({} bytes), {} bytes sparse",
            self.bytes, self.segments, self.dense_bytes, self.sparse_bytes
        );
    }
}
