use crate::error::LacunaError;
use crate::DEFAULT_SPARSE_THRESHOLD;

/// Runtime configuration for the scan drivers.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Minimum zero-run length classified as sparse.
    pub threshold: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SPARSE_THRESHOLD,
        }
    }
}

impl ScanConfig {
    pub fn new(threshold: u64) -> Self {
        Self { threshold }
    }

    /// Reject configurations the scanners cannot honor.
    pub fn validate(&self) -> Result<(), LacunaError> {
        if self.threshold == 0 {
            return Err(LacunaError::Config(
                "sparse threshold must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
