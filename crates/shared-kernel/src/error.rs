// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DataRangeError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<DataRangeError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

pub type Result<T> = std::result::Result<T, DataRangeError>;

/// Errors raised while building range values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: i64, end: i64 },

    #[error("Invalid range literal '{input}': {reason}")]
    InvalidRangeLiteral { input: String, reason: String },

    #[error("Window starting at {start} cannot hold {len} values")]
    WindowOverflow { start: i64, len: usize },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    /// Wraps the error with a fixed context message.
    ///
    /// # Errors
    /// Returns the wrapped error when `self` is an `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Wraps the error with a lazily built context message.
    ///
    /// # Errors
    /// Returns the wrapped error when `self` is an `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<DataRangeError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| DataRangeError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| DataRangeError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
