//! Runtime configuration set once by host initialization.

use serde::{Deserialize, Serialize};

/// Counts the host runtime reports to the balancer.
///
/// # Example
/// ```
/// use u_balance::runtime::RuntimeConfig;
///
/// let config = RuntimeConfig::new().with_npes(4).with_ntasks(64).with_chunk_size(16);
/// assert_eq!(config.npes, 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Number of chunks the runtime generates per loop.
    pub chunk_size: usize,
    /// Number of processing elements.
    pub npes: usize,
    /// Number of tasks.
    pub ntasks: usize,
}

impl RuntimeConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chunk count.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Sets the PE count.
    pub fn with_npes(mut self, npes: usize) -> Self {
        self.npes = npes;
        self
    }

    /// Sets the task count.
    pub fn with_ntasks(mut self, ntasks: usize) -> Self {
        self.ntasks = ntasks;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = RuntimeConfig::new()
            .with_chunk_size(8)
            .with_npes(2)
            .with_ntasks(8);
        assert_eq!(config.chunk_size, 8);
        assert_eq!(config.npes, 2);
        assert_eq!(config.ntasks, 8);
    }

    #[test]
    fn test_config_serde() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{"chunk_size":4,"npes":3,"ntasks":12}"#).unwrap();
        assert_eq!(config, RuntimeConfig::new().with_chunk_size(4).with_npes(3).with_ntasks(12));
    }
}
