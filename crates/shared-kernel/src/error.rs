// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Boxed error carried as the source of a failed computation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Root error type shared across the workspace.
///
/// Every variant is terminal for the reduction that produced it: collectors
/// never retry and never expose a partial result alongside an error.
#[derive(Debug, Error)]
pub enum CollectError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CollectError>,
    },

    /// The key or value extraction function failed during accumulation.
    #[error("Key function failed: {reason}")]
    KeyFunction {
        reason: String,
        #[source]
        source: Option<BoxError>,
    },

    /// A pending computation resolved with an error.
    #[error("Computation failed: {reason}")]
    ComputationFailed {
        reason: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The blocking wait was cancelled before an outcome was produced.
    #[error("Wait interrupted: {reason}")]
    WaitInterrupted { reason: String },

    #[error("Thread pool creation failed: {details}")]
    ThreadPoolCreation { details: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

pub type Result<T> = std::result::Result<T, CollectError>;

impl CollectError {
    /// Builds a [`CollectError::KeyFunction`] from any error-like value.
    pub fn key_function(err: impl Into<BoxError>) -> Self {
        let source = err.into();
        Self::KeyFunction { reason: source.to_string(), source: Some(source) }
    }

    /// Builds a [`CollectError::ComputationFailed`] from any error-like value.
    pub fn computation_failed(err: impl Into<BoxError>) -> Self {
        let source = err.into();
        Self::ComputationFailed { reason: source.to_string(), source: Some(source) }
    }

    pub fn wait_interrupted(reason: impl Into<String>) -> Self {
        Self::WaitInterrupted { reason: reason.into() }
    }

    /// Strips any [`CollectError::Context`] layers and returns the root cause.
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_computation_failure(&self) -> bool {
        matches!(self.root(), Self::ComputationFailed { .. })
    }

    pub fn is_wait_interrupted(&self) -> bool {
        matches!(self.root(), Self::WaitInterrupted { .. })
    }

    pub fn is_key_function_failure(&self) -> bool {
        matches!(self.root(), Self::KeyFunction { .. })
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<CollectError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CollectError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CollectError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
