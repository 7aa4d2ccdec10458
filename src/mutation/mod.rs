//! Type-directed mutation testing.

pub mod config;
pub mod operators;
pub mod registry;
/// Human-readable and machine-friendly report generation.
pub mod report;
pub mod runner;
pub mod validator;

pub use config::MutationOptions;
pub use operators::{MutationOperator, builtin_operators};
pub use registry::MutationRegistry;
pub use report::{BatchSummary, ReportFormat, render_report};
pub use runner::{
    MutationError, MutationErrorKind, MutationResult, MutationSummary, MutationTestCase,
    MutationTestError, MutationTestResult, MutationTester,
};
pub use validator::{Validator, from_async_fn, from_fn, try_from_fn};
