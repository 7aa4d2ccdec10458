//! Bounded-sampling property runner.
//!
//! Draws values from a strategy and requires every one to be valid for its descriptor and
//! accepted by the validator. There is no shrinking: failures report the values exactly as drawn.

use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures::FutureExt;
use proptest::strategy::Strategy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::generators::sample;
use crate::mutation::config::DEFAULT_TIMEOUT;
use crate::mutation::validator::Validator;
use crate::types::TypeDescriptor;

/// Options for a property run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertyOptions {
    /// Number of values to draw.
    pub cases: u32,
    /// Wall-clock budget for a single validator call.
    pub timeout: Duration,
    /// Log every case at `info` level.
    pub verbose: bool,
}

impl Default for PropertyOptions {
    fn default() -> Self {
        Self {
            cases: 100,
            timeout: DEFAULT_TIMEOUT,
            verbose: false,
        }
    }
}

impl PropertyOptions {
    /// Set the number of cases.
    pub fn with_cases(mut self, cases: u32) -> Self {
        self.cases = cases;
        self
    }

    /// Set the per-case timeout in milliseconds.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout = Duration::from_millis(timeout_ms);
        self
    }

    /// Toggle verbose diagnostics.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// One failing case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyFailure {
    /// Drawn value.
    pub value: Value,
    /// Why the case failed.
    pub reason: String,
}

/// Result of a property run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyTestResult {
    /// Descriptor name.
    pub type_name: String,
    /// Cases drawn.
    pub cases: usize,
    /// Cases that passed.
    pub passed: usize,
    /// Failing cases in draw order.
    pub failures: Vec<PropertyFailure>,
}

impl PropertyTestResult {
    /// True when every case passed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs bounded property checks.
#[derive(Debug, Clone, Default)]
pub struct PropertyRunner {
    options: PropertyOptions,
}

impl PropertyRunner {
    /// Runner with the given options.
    pub fn new(options: PropertyOptions) -> Self {
        Self { options }
    }

    /// Draw `cases` values and check each against `value_type` and `validator`.
    pub async fn check<S, V>(
        &self,
        strategy: &S,
        value_type: &dyn TypeDescriptor,
        validator: &V,
    ) -> PropertyTestResult
    where
        S: Strategy<Value = Value>,
        V: Validator + ?Sized,
    {
        let values = sample(strategy, self.options.cases as usize);
        let mut failures = Vec::new();

        for value in &values {
            let reason = self.evaluate(value, value_type, validator).await;
            if self.options.verbose {
                tracing::info!(
                    target: "eth_pbt::property",
                    type_name = value_type.name(),
                    %value,
                    failure = reason.as_deref(),
                    "property case"
                );
            }
            if let Some(reason) = reason {
                failures.push(PropertyFailure {
                    value: value.clone(),
                    reason,
                });
            }
        }

        PropertyTestResult {
            type_name: value_type.name().to_string(),
            cases: values.len(),
            passed: values.len() - failures.len(),
            failures,
        }
    }

    async fn evaluate<V>(
        &self,
        value: &Value,
        value_type: &dyn TypeDescriptor,
        validator: &V,
    ) -> Option<String>
    where
        V: Validator + ?Sized,
    {
        if !value_type.is_valid(value) {
            return Some(format!("generated value is not a valid {}", value_type.name()));
        }
        let attempt = AssertUnwindSafe(validator.validate(value)).catch_unwind();
        match tokio::time::timeout(self.options.timeout, attempt).await {
            Ok(Ok(Ok(true))) => None,
            Ok(Ok(Ok(false))) => Some("validator rejected value".to_string()),
            Ok(Ok(Err(err))) => Some(format!("validator error: {err:#}")),
            Ok(Err(_)) => Some("validator panicked".to_string()),
            Err(_) => Some(format!(
                "validator did not settle within {}ms",
                self.options.timeout.as_millis()
            )),
        }
    }
}
