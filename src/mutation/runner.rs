//! Mutation test execution: apply every mutation of a seed to a validator and aggregate.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tokio::time::Instant;
use tracing::Level;

use super::config::MutationOptions;
use super::operators::MutationOperator;
use super::registry::MutationRegistry;
use super::validator::Validator;
use crate::types::{TypeDescriptor, diff_paths};

/// Errors surfaced to the caller of a mutation test.
#[derive(Debug, Error)]
pub enum MutationTestError {
    /// An explicitly chosen operator does not accept the seed.
    #[error("operator `{operator}` is not applicable to the seed (expected a valid {type_name})")]
    OperatorNotApplicable {
        /// Operator name.
        operator: String,
        /// Type the operator is bound to.
        type_name: String,
    },
}

/// Why a validator call did not produce a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationErrorKind {
    /// The validator returned an error.
    Validator,
    /// The validator panicked.
    Panic,
    /// The validator did not settle within the timeout.
    Timeout,
    /// Mutating or flattening the seed panicked, so no mutation ran.
    Setup,
}

impl fmt::Display for MutationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Validator => "validator",
            Self::Panic => "panic",
            Self::Timeout => "timeout",
            Self::Setup => "setup",
        })
    }
}

/// Failure detail recorded on a mutation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationError {
    /// Failure class.
    pub kind: MutationErrorKind,
    /// Human-readable detail.
    pub message: String,
}

impl MutationError {
    fn validator(err: &anyhow::Error) -> Self {
        Self {
            kind: MutationErrorKind::Validator,
            message: format!("{err:#}"),
        }
    }

    fn panic(payload: &(dyn Any + Send)) -> Self {
        Self {
            kind: MutationErrorKind::Panic,
            message: panic_message(payload).unwrap_or_else(|| "validator panicked".to_string()),
        }
    }

    fn setup(payload: &(dyn Any + Send)) -> Self {
        Self {
            kind: MutationErrorKind::Setup,
            message: panic_message(payload).unwrap_or_else(|| "setup panicked".to_string()),
        }
    }

    fn timeout(timeout: Duration) -> Self {
        Self {
            kind: MutationErrorKind::Timeout,
            message: format!("validator did not settle within {}ms", timeout.as_millis()),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Outcome of one mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationResult {
    /// Mutated value handed to the validator.
    pub value: Value,
    /// True if the validator rejected the value, failed, or timed out.
    pub caught: bool,
    /// Failure detail when the validator did not return a verdict.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<MutationError>,
    /// Flattened paths that differ from the seed.
    #[serde(default)]
    pub changed_paths: Vec<String>,
    /// Time spent waiting on the validator.
    pub duration_ms: u64,
}

/// Aggregate counts over a set of mutation results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationSummary {
    /// Number of mutations run.
    pub total: usize,
    /// Mutations rejected, including errored ones.
    pub caught: usize,
    /// Mutations the validator accepted.
    pub uncaught: usize,
    /// Mutations whose validator call errored, panicked, or timed out.
    pub errors: usize,
}

impl MutationSummary {
    /// Fold results into counts.
    pub fn from_results(results: &[MutationResult]) -> Self {
        results.iter().fold(Self::default(), |mut acc, result| {
            acc.total += 1;
            if result.caught {
                acc.caught += 1;
            } else {
                acc.uncaught += 1;
            }
            if result.error.is_some() {
                acc.errors += 1;
            }
            acc
        })
    }

    /// Caught mutations as a percentage of the total; 100 when nothing ran.
    pub fn detection_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.caught as f64) * 100.0 / (self.total as f64)
        }
    }
}

/// Result of one mutation test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationTestResult {
    /// Name of the type the seed was mutated as.
    pub type_name: String,
    /// Seed value.
    pub original_value: Value,
    /// Per-mutation outcomes, in mutation order.
    pub mutations: Vec<MutationResult>,
    /// Counts derived from `mutations`.
    pub summary: MutationSummary,
}

impl MutationTestResult {
    fn new(type_name: &str, original_value: Value, mutations: Vec<MutationResult>) -> Self {
        let summary = MutationSummary::from_results(&mutations);
        Self {
            type_name: type_name.to_string(),
            original_value,
            mutations,
            summary,
        }
    }

    /// Single errored entry standing in for a test whose setup panicked.
    fn setup_failed(type_name: &str, seed: &Value, payload: &(dyn Any + Send)) -> Self {
        let failure = MutationResult {
            value: seed.clone(),
            caught: true,
            error: Some(MutationError::setup(payload)),
            changed_paths: Vec::new(),
            duration_ms: 0,
        };
        Self::new(type_name, seed.clone(), vec![failure])
    }

    /// Mutations the validator accepted.
    pub fn uncaught(&self) -> impl Iterator<Item = &MutationResult> {
        self.mutations.iter().filter(|m| !m.caught)
    }
}

/// Named entry for [`MutationTester::test_all`].
#[derive(Clone)]
pub struct MutationTestCase {
    /// Name used as the key in the batch output.
    pub name: String,
    /// Seed value.
    pub seed: Value,
    /// Seed type.
    pub value_type: Arc<dyn TypeDescriptor>,
    /// Oracle applied to every mutation.
    pub validator: Arc<dyn Validator>,
}

impl MutationTestCase {
    /// Build a case.
    pub fn new(
        name: impl Into<String>,
        seed: Value,
        value_type: impl TypeDescriptor + 'static,
        validator: impl Validator + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            seed,
            value_type: Arc::new(value_type),
            validator: Arc::new(validator),
        }
    }
}

impl fmt::Debug for MutationTestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutationTestCase")
            .field("name", &self.name)
            .field("seed", &self.seed)
            .field("value_type", &self.value_type.name())
            .finish_non_exhaustive()
    }
}

/// Runs mutation tests against a registry.
///
/// Mutations run one at a time. Each validator call is raced against the configured timeout; a
/// call that loses the race is dropped and recorded as a caught, errored mutation.
#[derive(Debug, Clone)]
pub struct MutationTester<'r> {
    registry: &'r MutationRegistry,
    options: MutationOptions,
}

impl<'r> MutationTester<'r> {
    /// Tester with default options.
    pub fn new(registry: &'r MutationRegistry) -> Self {
        Self {
            registry,
            options: MutationOptions::default(),
        }
    }

    /// Replace the options.
    pub fn with_options(mut self, options: MutationOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options.
    pub fn options(&self) -> &MutationOptions {
        &self.options
    }

    /// Mutate `seed` through the registry and validate every mutation.
    ///
    /// A panic while mutating the seed is recorded as a single `setup` error instead of unwinding.
    pub async fn test<V>(
        &self,
        seed: &Value,
        value_type: &dyn TypeDescriptor,
        validator: &V,
    ) -> MutationTestResult
    where
        V: Validator + ?Sized,
    {
        let candidates = match catch_unwind(AssertUnwindSafe(|| {
            self.registry.mutate(seed, value_type)
        })) {
            Ok(candidates) => candidates,
            Err(payload) => {
                return self.setup_failed(value_type.name(), seed, payload.as_ref());
            }
        };
        self.run(seed, value_type, candidates, validator).await
    }

    /// Like [`test`](Self::test), but with an explicit operator instead of a registry lookup.
    ///
    /// Fails without running anything when the operator does not accept `seed`.
    pub async fn test_with_operator<V>(
        &self,
        seed: &Value,
        operator: &dyn MutationOperator,
        validator: &V,
    ) -> Result<MutationTestResult, MutationTestError>
    where
        V: Validator + ?Sized,
    {
        if !operator.is_applicable(seed) {
            return Err(MutationTestError::OperatorNotApplicable {
                operator: operator.name().to_string(),
                type_name: operator.value_type().name().to_string(),
            });
        }
        let candidates = match catch_unwind(AssertUnwindSafe(|| operator.mutate(seed))) {
            Ok(candidates) => candidates,
            Err(payload) => {
                let type_name = operator.value_type().name();
                return Ok(self.setup_failed(type_name, seed, payload.as_ref()));
            }
        };
        Ok(self
            .run(seed, operator.value_type(), candidates, validator)
            .await)
    }

    /// Run every case in order. A repeated name keeps the last result.
    ///
    /// A case that panics outside its validator is recorded as a `setup` error and the batch
    /// moves on.
    pub async fn test_all(
        &self,
        cases: impl IntoIterator<Item = MutationTestCase>,
    ) -> BTreeMap<String, MutationTestResult> {
        let mut results = BTreeMap::new();
        for case in cases {
            let attempt =
                self.test(&case.seed, case.value_type.as_ref(), case.validator.as_ref());
            let result = match AssertUnwindSafe(attempt).catch_unwind().await {
                Ok(result) => result,
                Err(payload) => {
                    self.setup_failed(case.value_type.name(), &case.seed, payload.as_ref())
                }
            };
            if self.options.verbose {
                tracing::info!(
                    target: "eth_pbt::mutation",
                    case = %case.name,
                    total = result.summary.total,
                    uncaught = result.summary.uncaught,
                    "mutation case finished"
                );
            }
            results.insert(case.name, result);
        }
        results
    }

    async fn run<V>(
        &self,
        seed: &Value,
        value_type: &dyn TypeDescriptor,
        candidates: Vec<Value>,
        validator: &V,
    ) -> MutationTestResult
    where
        V: Validator + ?Sized,
    {
        let baseline = value_type.flatten(seed);
        let total = candidates.len();
        let mut mutations = Vec::with_capacity(total);

        for (index, candidate) in candidates.into_iter().enumerate() {
            let started = Instant::now();
            let attempt = AssertUnwindSafe(validator.validate(&candidate)).catch_unwind();
            let (caught, error) = match tokio::time::timeout(self.options.timeout, attempt).await {
                Ok(Ok(Ok(accepted))) => (!accepted, None),
                Ok(Ok(Err(err))) => (true, Some(MutationError::validator(&err))),
                Ok(Err(payload)) => (true, Some(MutationError::panic(payload.as_ref()))),
                Err(_) => (true, Some(MutationError::timeout(self.options.timeout))),
            };
            let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            let changed_paths = diff_paths(&baseline, &value_type.flatten(&candidate));

            let result = MutationResult {
                value: candidate,
                caught,
                error,
                changed_paths,
                duration_ms,
            };
            self.log_mutation(value_type.name(), index + 1, total, &result);
            mutations.push(result);
        }

        let result = MutationTestResult::new(value_type.name(), seed.clone(), mutations);
        if self.options.verbose {
            tracing::info!(
                target: "eth_pbt::mutation",
                type_name = %result.type_name,
                total = result.summary.total,
                caught = result.summary.caught,
                uncaught = result.summary.uncaught,
                errors = result.summary.errors,
                "mutation test finished"
            );
        }
        result
    }

    fn setup_failed(
        &self,
        type_name: &str,
        seed: &Value,
        payload: &(dyn Any + Send),
    ) -> MutationTestResult {
        let result = MutationTestResult::setup_failed(type_name, seed, payload);
        let error = result.mutations.first().and_then(|m| m.error.as_ref());
        tracing::warn!(
            target: "eth_pbt::mutation",
            type_name,
            seed = %seed,
            error = error.map(|e| e.message.as_str()),
            "mutation setup panicked"
        );
        result
    }

    fn log_mutation(&self, type_name: &str, position: usize, total: usize, result: &MutationResult) {
        let verdict = match (&result.error, result.caught) {
            (Some(_), _) => "errored",
            (None, true) => "caught",
            (None, false) => "uncaught",
        };
        let error = result.error.as_ref().map(ToString::to_string);

        macro_rules! emit {
            ($level:expr) => {
                tracing::event!(
                    target: "eth_pbt::mutation",
                    $level,
                    type_name,
                    position,
                    total,
                    value = %result.value,
                    verdict,
                    error = error.as_deref(),
                    "mutation {position}/{total}"
                )
            };
        }

        match (self.options.verbose, result.error.is_some()) {
            (true, true) => emit!(Level::WARN),
            (true, false) => emit!(Level::INFO),
            (false, _) => emit!(Level::DEBUG),
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use serde_json::json;

    use super::*;
    use crate::mutation::operators::{AddressMutator, BooleanMutator};
    use crate::mutation::validator::{from_async_fn, from_fn, try_from_fn};
    use crate::types::{ArrayType, BooleanType, NumberType, StringType, TransactionType};

    #[tokio::test(flavor = "current_thread")]
    async fn accepted_mutations_are_uncaught() {
        let registry = MutationRegistry::with_defaults();
        let tester = MutationTester::new(&registry);
        let result = tester
            .test(&json!(true), &BooleanType, &from_fn(|_: &Value| true))
            .await;

        assert_eq!(result.mutations.len(), 1);
        assert_eq!(result.mutations[0].value, json!(false));
        assert!(!result.mutations[0].caught);
        assert_eq!(
            result.summary,
            MutationSummary {
                total: 1,
                caught: 0,
                uncaught: 1,
                errors: 0,
            }
        );
        assert_eq!(result.uncaught().count(), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn validator_errors_count_as_caught() {
        let registry = MutationRegistry::with_defaults();
        let tester = MutationTester::new(&registry);
        let validator = try_from_fn(|_: &Value| Err(anyhow!("node unreachable")));
        let result = tester.test(&json!(42), &NumberType, &validator).await;

        assert_eq!(result.summary.total, 8);
        assert_eq!(result.summary.caught, 8);
        assert_eq!(result.summary.errors, 8);
        for mutation in &result.mutations {
            let error = mutation.error.as_ref().expect("error should be recorded");
            assert_eq!(error.kind, MutationErrorKind::Validator);
            assert!(error.message.contains("node unreachable"));
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn panics_are_contained() {
        let registry = MutationRegistry::with_defaults();
        let tester = MutationTester::new(&registry);
        let validator = from_fn(|v: &Value| {
            if v.as_i64() == Some(0) {
                panic!("zero not supported");
            }
            false
        });
        let result = tester.test(&json!(42), &NumberType, &validator).await;

        assert_eq!(result.summary.total, 8);
        assert_eq!(result.summary.errors, 1);
        let errored = &result.mutations[0];
        assert!(errored.caught);
        let error = errored.error.as_ref().expect("panic should be recorded");
        assert_eq!(error.kind, MutationErrorKind::Panic);
        assert_eq!(error.message, "zero not supported");
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn timeout_is_isolated_to_one_mutation() {
        let registry = MutationRegistry::with_defaults();
        let tester = MutationTester::new(&registry)
            .with_options(MutationOptions::default().with_timeout_ms(50));
        let validator = from_async_fn(|v: Value| async move {
            if v.as_i64() == Some(0) {
                tokio::time::sleep(Duration::from_secs(60)).await;
            }
            anyhow::Ok(v.as_i64() == Some(43))
        });
        let result = tester.test(&json!(42), &NumberType, &validator).await;

        assert_eq!(result.summary.total, 8);
        assert_eq!(result.summary.errors, 1);
        assert_eq!(result.summary.uncaught, 1);
        assert_eq!(result.summary.caught, 7);

        let timed_out = result.mutations[0].error.as_ref().expect("timeout recorded");
        assert_eq!(timed_out.kind, MutationErrorKind::Timeout);
        assert!(result.mutations[0].duration_ms >= 50);
        assert_eq!(result.mutations[1].value, json!(43));
        assert!(!result.mutations[1].caught);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn registry_miss_runs_seed_once() {
        let registry = MutationRegistry::with_defaults();
        let tester = MutationTester::new(&registry);
        let tx = json!({"from": "0x0000000000000000000000000000000000000001"});
        let result = tester
            .test(&tx, &TransactionType, &from_fn(|_: &Value| true))
            .await;

        assert_eq!(result.summary.total, 1);
        assert_eq!(result.mutations[0].value, tx);
        assert!(result.mutations[0].changed_paths.is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn changed_paths_follow_flatten() {
        let registry = MutationRegistry::with_defaults();
        let tester = MutationTester::new(&registry);
        let result = tester
            .test(&json!([1, 2]), &ArrayType::any(), &from_fn(|_: &Value| false))
            .await;

        // [] drops both indices; [2] changes rv[0] and drops rv[1].
        assert_eq!(result.mutations[0].changed_paths, vec!["rv", "rv[0]", "rv[1]"]);
        assert_eq!(result.mutations[1].changed_paths, vec!["rv", "rv[0]", "rv[1]"]);
        assert_eq!(result.mutations[3].changed_paths, vec!["rv", "rv[2]"]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn explicit_operator_requires_applicable_seed() {
        let registry = MutationRegistry::new();
        let tester = MutationTester::new(&registry);
        let calls = std::sync::atomic::AtomicUsize::new(0);
        let validator = from_fn(|_: &Value| {
            calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            false
        });

        let err = tester
            .test_with_operator(&json!("0x12"), &AddressMutator, &validator)
            .await
            .expect_err("short address should be rejected");
        assert!(matches!(
            err,
            MutationTestError::OperatorNotApplicable { ref type_name, .. } if type_name == "Address"
        ));
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);

        let result = tester
            .test_with_operator(&json!(false), &BooleanMutator, &validator)
            .await
            .expect("boolean seed is applicable");
        assert_eq!(result.summary.caught, 1);
        assert_eq!(result.type_name, "Boolean");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_all_keeps_last_duplicate_and_continues_after_failures() {
        let registry = MutationRegistry::with_defaults();
        let tester = MutationTester::new(&registry);
        let cases = vec![
            MutationTestCase::new(
                "flag",
                json!(true),
                BooleanType,
                from_fn(|_: &Value| true),
            ),
            MutationTestCase::new(
                "broken",
                json!(7),
                NumberType,
                try_from_fn(|_: &Value| Err(anyhow!("boom"))),
            ),
            MutationTestCase::new(
                "flag",
                json!(false),
                BooleanType,
                from_fn(|_: &Value| false),
            ),
        ];

        let results = tester.test_all(cases).await;
        assert_eq!(results.len(), 2);
        assert_eq!(results["flag"].original_value, json!(false));
        assert_eq!(results["flag"].summary.caught, 1);
        assert_eq!(results["broken"].summary.errors, 8);
    }

    #[derive(Debug)]
    struct ExplodingString;

    impl MutationOperator for ExplodingString {
        fn name(&self) -> &str {
            "exploding-string"
        }

        fn value_type(&self) -> &dyn TypeDescriptor {
            &StringType
        }

        fn mutate(&self, _seed: &Value) -> Vec<Value> {
            panic!("operator blew up");
        }
    }

    /// Boolean descriptor whose `flatten` panics.
    #[derive(Debug)]
    struct UnflattenableBoolean;

    impl TypeDescriptor for UnflattenableBoolean {
        fn name(&self) -> &str {
            "Boolean"
        }

        fn is_valid(&self, value: &Value) -> bool {
            value.is_boolean()
        }

        fn flatten(&self, _value: &Value) -> BTreeMap<String, Value> {
            panic!("flatten blew up");
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_all_records_setup_panics_and_runs_remaining_cases() {
        let mut registry = MutationRegistry::with_defaults();
        registry.register(ExplodingString);
        let tester = MutationTester::new(&registry);
        let cases = vec![
            MutationTestCase::new(
                "bad-operator",
                json!("abc"),
                StringType,
                from_fn(|_: &Value| true),
            ),
            MutationTestCase::new(
                "bad-descriptor",
                json!(true),
                UnflattenableBoolean,
                from_fn(|_: &Value| true),
            ),
            MutationTestCase::new("good", json!(true), BooleanType, from_fn(|_: &Value| true)),
        ];

        let results = tester.test_all(cases).await;
        assert_eq!(results.len(), 3);

        let bad = &results["bad-operator"];
        assert_eq!(bad.type_name, "String");
        assert_eq!(
            bad.summary,
            MutationSummary {
                total: 1,
                caught: 1,
                uncaught: 0,
                errors: 1,
            }
        );
        let error = bad.mutations[0].error.as_ref().expect("setup error recorded");
        assert_eq!(error.kind, MutationErrorKind::Setup);
        assert_eq!(error.message, "operator blew up");
        assert_eq!(bad.mutations[0].value, json!("abc"));

        let descriptor = &results["bad-descriptor"];
        let error = descriptor.mutations[0].error.as_ref().expect("setup error recorded");
        assert_eq!(error.kind, MutationErrorKind::Setup);
        assert_eq!(error.message, "flatten blew up");

        let good = &results["good"];
        assert_eq!(good.summary.total, 1);
        assert_eq!(good.summary.uncaught, 1);
        assert_eq!(good.summary.errors, 0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn operator_panic_is_a_setup_error_for_single_tests() {
        let mut registry = MutationRegistry::new();
        registry.register(ExplodingString);
        let tester = MutationTester::new(&registry);
        let validator = from_fn(|_: &Value| true);

        let result = tester.test(&json!("abc"), &StringType, &validator).await;
        assert_eq!(result.summary.errors, 1);
        assert_eq!(
            result.mutations[0].error.as_ref().map(|e| e.kind),
            Some(MutationErrorKind::Setup)
        );

        let result = tester
            .test_with_operator(&json!("abc"), &ExplodingString, &validator)
            .await
            .expect("string seed is applicable");
        assert_eq!(result.summary.caught, 1);
        assert_eq!(result.summary.errors, 1);
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn verbose_does_not_change_results() {
        let registry = MutationRegistry::with_defaults();
        let validator = try_from_fn(|v: &Value| {
            if v.as_i64() == Some(0) {
                return Err(anyhow!("zero rejected upstream"));
            }
            Ok(v.as_i64().is_some_and(|n| n > 40))
        });

        let quiet = MutationTester::new(&registry)
            .test(&json!(42), &NumberType, &validator)
            .await;
        let verbose = MutationTester::new(&registry)
            .with_options(MutationOptions::default().with_verbose(true))
            .test(&json!(42), &NumberType, &validator)
            .await;

        assert_eq!(quiet, verbose);
        assert_eq!(quiet.summary.errors, 1);
        assert!(quiet.summary.uncaught > 0);
    }

    #[test]
    fn summary_invariants_hold_and_rate_handles_empty() {
        let results = vec![
            MutationResult {
                value: json!(1),
                caught: true,
                error: None,
                changed_paths: Vec::new(),
                duration_ms: 0,
            },
            MutationResult {
                value: json!(2),
                caught: true,
                error: Some(MutationError::timeout(Duration::from_millis(5))),
                changed_paths: Vec::new(),
                duration_ms: 5,
            },
            MutationResult {
                value: json!(3),
                caught: false,
                error: None,
                changed_paths: Vec::new(),
                duration_ms: 0,
            },
        ];
        let summary = MutationSummary::from_results(&results);
        assert_eq!(summary.caught + summary.uncaught, summary.total);
        assert!(summary.errors <= summary.caught);
        assert!((summary.detection_rate() - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(MutationSummary::from_results(&[]).detection_rate(), 100.0);
    }
}
