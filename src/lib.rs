//! Core logic for the lacuna sparse-region scanning toolkit.
//!
//! A byte stream is partitioned into alternating dense sections and
//! sparse runs. A sparse run is at least [`DEFAULT_SPARSE_THRESHOLD`]
//! consecutive zero bytes (configurable per scan); everything between
//! sparse runs is a dense section and carries a Fletcher-16 checksum of
//! exactly its own bytes. Zero runs shorter than the threshold stay
//! inside the surrounding dense section and are folded into its
//! checksum once their length is known.

pub mod combine;
pub mod config;
pub mod error;
pub mod fletcher;
pub mod io_utils;
pub mod scanner;
pub mod segment;
pub mod sparse;
pub mod stats;
pub mod stream;

pub use combine::{combine_streams, CombineOp};
pub use config::ScanConfig;
pub use error::LacunaError;
pub use fletcher::{fletcher16, Fletcher16};
pub use scanner::{scan_bytes, SegmentScanner};
pub use segment::{LineSink, Segment, SegmentSink};
pub use sparse::{SparseRun, SparseScanner};
pub use stats::ScanStats;
pub use stream::{scan_reader, scan_sparse_runs};

/// Minimum length of a zero run classified as sparse unless overridden.
pub const DEFAULT_SPARSE_THRESHOLD: u64 = 64;
