//! Validator capability consumed by the runners.
//!
//! A validator answers "does the system under test accept this value?". It may be synchronous or
//! asynchronous, and may fail; the runner treats failures as rejections.

use std::future::Future;

use async_trait::async_trait;
use serde_json::Value;

/// Boolean oracle over candidate values.
#[async_trait]
pub trait Validator: Send + Sync {
    /// `Ok(true)` if `candidate` is accepted, `Ok(false)` if rejected.
    async fn validate(&self, candidate: &Value) -> anyhow::Result<bool>;
}

/// Validator backed by an infallible synchronous predicate. See [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnValidator<F>(F);

/// Validator backed by a fallible synchronous predicate. See [`try_from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct TryFnValidator<F>(F);

/// Validator backed by an async function. See [`from_async_fn`].
#[derive(Debug, Clone, Copy)]
pub struct AsyncFnValidator<F>(F);

/// Wrap `Fn(&Value) -> bool`.
pub fn from_fn<F>(predicate: F) -> FnValidator<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    FnValidator(predicate)
}

/// Wrap `Fn(&Value) -> anyhow::Result<bool>`.
pub fn try_from_fn<F>(predicate: F) -> TryFnValidator<F>
where
    F: Fn(&Value) -> anyhow::Result<bool> + Send + Sync,
{
    TryFnValidator(predicate)
}

/// Wrap `Fn(Value) -> impl Future<Output = anyhow::Result<bool>>`.
///
/// The candidate is passed by value so the returned future can own it, e.g. to send it over an
/// RPC connection.
pub fn from_async_fn<F, Fut>(validate: F) -> AsyncFnValidator<F>
where
    F: Fn(Value) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<bool>> + Send,
{
    AsyncFnValidator(validate)
}

#[async_trait]
impl<F> Validator for FnValidator<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    async fn validate(&self, candidate: &Value) -> anyhow::Result<bool> {
        Ok((self.0)(candidate))
    }
}

#[async_trait]
impl<F> Validator for TryFnValidator<F>
where
    F: Fn(&Value) -> anyhow::Result<bool> + Send + Sync,
{
    async fn validate(&self, candidate: &Value) -> anyhow::Result<bool> {
        (self.0)(candidate)
    }
}

#[async_trait]
impl<F, Fut> Validator for AsyncFnValidator<F>
where
    F: Fn(Value) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<bool>> + Send,
{
    async fn validate(&self, candidate: &Value) -> anyhow::Result<bool> {
        (self.0)(candidate.clone()).await
    }
}
