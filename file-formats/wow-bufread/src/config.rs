//! Reader configuration

use crate::error::{Error, Result};

/// Default upper bound on a single contiguous read, in bytes
pub const DEFAULT_MAX_READ_SIZE: usize = 4096;

/// Configuration for [`BufferedBinaryReader`](crate::BufferedBinaryReader)
///
/// The only tunable is the maximum contiguous read size. It bounds the largest
/// slice a single request may return and sizes the staging buffer at twice
/// that amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Largest number of bytes a single request may ask for
    pub max_read_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_read_size: DEFAULT_MAX_READ_SIZE,
        }
    }
}

impl ReaderConfig {
    /// Create a configuration with the given maximum read size
    pub fn new(max_read_size: usize) -> Self {
        Self { max_read_size }
    }

    /// Check that the configuration can back a staging buffer
    pub fn validate(&self) -> Result<()> {
        if self.max_read_size == 0 || self.max_read_size.checked_mul(2).is_none() {
            return Err(Error::InvalidMaxReadSize(self.max_read_size));
        }
        Ok(())
    }

    /// Staging buffer capacity implied by this configuration
    pub fn capacity(&self) -> usize {
        self.max_read_size.saturating_mul(2)
    }
}
