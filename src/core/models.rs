//! Output configuration.

/// Controls which optional columns are written.
///
/// Author and message are always written; date and time only with
/// [`with_timestamps`](OutputConfig::with_timestamps).
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Include date and time in output
    pub include_timestamps: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }
}
