//! Result output port for writing validation records.

use crate::domain::ValidationRecord;

/// Port for outputting validation records.
pub trait ResultOutput: Send + Sync {
    /// Writes a single validation record.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write(&self, record: &ValidationRecord) -> anyhow::Result<()>;

    /// Flushes any buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    fn flush(&self) -> anyhow::Result<()>;
}
