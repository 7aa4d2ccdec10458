//! Mutation test options.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Per-mutation validator budget used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5_000);

/// Options for a mutation test invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MutationOptions {
    /// Wall-clock budget for a single validator call.
    pub timeout: Duration,
    /// Emit per-mutation diagnostics at `info` level. Never changes results.
    pub verbose: bool,
}

impl Default for MutationOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            verbose: false,
        }
    }
}

impl MutationOptions {
    /// Set the per-mutation timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the per-mutation timeout in milliseconds.
    pub fn with_timeout_ms(self, timeout_ms: u64) -> Self {
        self.with_timeout(Duration::from_millis(timeout_ms))
    }

    /// Toggle verbose diagnostics.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_builder_overrides_work() {
        let default = MutationOptions::default();
        assert_eq!(default.timeout, Duration::from_millis(5_000));
        assert!(!default.verbose);

        let options = MutationOptions::default()
            .with_timeout_ms(250)
            .with_verbose(true);
        assert_eq!(options.timeout, Duration::from_millis(250));
        assert!(options.verbose);
    }

    #[test]
    fn options_serialize_as_json() {
        let options = MutationOptions::default().with_timeout_ms(42);
        let json = serde_json::to_string(&options).expect("options should serialize");
        let decoded: MutationOptions =
            serde_json::from_str(&json).expect("options should deserialize");
        assert_eq!(decoded, options);
    }
}
